//! `SeaORM` Entity for ra_actividad table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "ra_actividad"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_ra_actividad: i64,
    pub id_actividad: i64,
    pub id_ra: i64,
    pub porcentaje_ra_actividad: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdRaActividad,
    IdActividad,
    IdRa,
    PorcentajeRaActividad,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdRaActividad,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = i64;
    fn auto_increment() -> bool {
        true
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Actividad,
    ResultadoDeAprendizaje,
    NotasActividad,
    RaActividadIndicador,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdRaActividad => ColumnType::BigInteger.def(),
            Self::IdActividad => ColumnType::BigInteger.def(),
            Self::IdRa => ColumnType::BigInteger.def(),
            Self::PorcentajeRaActividad => ColumnType::Decimal(Some((5, 2))).def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Actividad => Entity::belongs_to(super::actividad::Entity)
                .from(Column::IdActividad)
                .to(super::actividad::Column::IdActividad)
                .into(),
            Self::ResultadoDeAprendizaje => Entity::belongs_to(super::resultado_de_aprendizaje::Entity)
                .from(Column::IdRa)
                .to(super::resultado_de_aprendizaje::Column::IdRa)
                .into(),
            Self::NotasActividad => Entity::has_many(super::notas_actividad::Entity).into(),
            Self::RaActividadIndicador => Entity::has_many(super::ra_actividad_indicador::Entity).into(),
        }
    }
}

impl Related<super::actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actividad.def()
    }
}

impl Related<super::resultado_de_aprendizaje::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResultadoDeAprendizaje.def()
    }
}

impl Related<super::notas_actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotasActividad.def()
    }
}

impl Related<super::ra_actividad_indicador::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaActividadIndicador.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
