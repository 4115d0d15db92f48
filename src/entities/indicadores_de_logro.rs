//! `SeaORM` Entity for indicadores_de_logro table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "indicadores_de_logro"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_ind: i64,
    pub id_ra: i64,
    pub porcentaje_ind: Decimal,
    pub descripcion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdInd,
    IdRa,
    PorcentajeInd,
    Descripcion,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdInd,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = i64;
    fn auto_increment() -> bool {
        true
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ResultadoDeAprendizaje,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdInd => ColumnType::BigInteger.def(),
            Self::IdRa => ColumnType::BigInteger.def(),
            Self::PorcentajeInd => ColumnType::Decimal(Some((5, 2))).def(),
            Self::Descripcion => ColumnType::Text.def().null(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ResultadoDeAprendizaje => Entity::belongs_to(super::resultado_de_aprendizaje::Entity)
                .from(Column::IdRa)
                .to(super::resultado_de_aprendizaje::Column::IdRa)
                .into(),
        }
    }
}

impl Related<super::resultado_de_aprendizaje::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResultadoDeAprendizaje.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
