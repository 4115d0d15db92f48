//! `SeaORM` Entity for notas_actividad table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "notas_actividad"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id: i64,
    pub id_matricula: i64,
    pub id_ra_actividad: i64,
    pub nota_ra_actividad: Option<Decimal>,
    pub retroalimentacion: Option<String>,
    pub id_ind: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    Id,
    IdMatricula,
    IdRaActividad,
    NotaRaActividad,
    Retroalimentacion,
    IdInd,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    Id,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = i64;
    fn auto_increment() -> bool {
        true
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Matricula,
    RaActividad,
    IndicadoresDeLogro,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::Id => ColumnType::BigInteger.def(),
            Self::IdMatricula => ColumnType::BigInteger.def(),
            Self::IdRaActividad => ColumnType::BigInteger.def(),
            Self::NotaRaActividad => ColumnType::Decimal(Some((5, 2))).def().null(),
            Self::Retroalimentacion => ColumnType::Text.def().null(),
            Self::IdInd => ColumnType::BigInteger.def().null(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Matricula => Entity::belongs_to(super::matricula::Entity)
                .from(Column::IdMatricula)
                .to(super::matricula::Column::IdMatricula)
                .into(),
            Self::RaActividad => Entity::belongs_to(super::ra_actividad::Entity)
                .from(Column::IdRaActividad)
                .to(super::ra_actividad::Column::IdRaActividad)
                .into(),
            Self::IndicadoresDeLogro => Entity::belongs_to(super::indicadores_de_logro::Entity)
                .from(Column::IdInd)
                .to(super::indicadores_de_logro::Column::IdInd)
                .into(),
        }
    }
}

impl Related<super::matricula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matricula.def()
    }
}

impl Related<super::ra_actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaActividad.def()
    }
}

impl Related<super::indicadores_de_logro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndicadoresDeLogro.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
