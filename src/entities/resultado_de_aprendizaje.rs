//! `SeaORM` Entity for resultado_de_aprendizaje table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "resultado_de_aprendizaje"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_ra: i64,
    pub id_asignatura: i64,
    pub porcentaje_ra: Decimal,
    pub descripcion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdRa,
    IdAsignatura,
    PorcentajeRa,
    Descripcion,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdRa,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = i64;
    fn auto_increment() -> bool {
        true
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Asignatura,
    IndicadoresDeLogro,
    RaActividad,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdRa => ColumnType::BigInteger.def(),
            Self::IdAsignatura => ColumnType::BigInteger.def(),
            Self::PorcentajeRa => ColumnType::Decimal(Some((5, 2))).def(),
            Self::Descripcion => ColumnType::Text.def().null(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Asignatura => Entity::belongs_to(super::asignatura::Entity)
                .from(Column::IdAsignatura)
                .to(super::asignatura::Column::IdAsignatura)
                .into(),
            Self::IndicadoresDeLogro => Entity::has_many(super::indicadores_de_logro::Entity).into(),
            Self::RaActividad => Entity::has_many(super::ra_actividad::Entity).into(),
        }
    }
}

impl Related<super::asignatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignatura.def()
    }
}

impl Related<super::indicadores_de_logro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndicadoresDeLogro.def()
    }
}

impl Related<super::ra_actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaActividad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
