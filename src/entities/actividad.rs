//! `SeaORM` Entity for actividad table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "actividad"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_actividad: i64,
    pub id_tipo_actividad: i64,
    pub nombre_actividad: String,
    pub descripcion: Option<String>,
    pub porcentaje_actividad: Decimal,
    pub fecha_creacion: Date,
    pub fecha_cierre: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdActividad,
    IdTipoActividad,
    NombreActividad,
    Descripcion,
    PorcentajeActividad,
    FechaCreacion,
    FechaCierre,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdActividad,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = i64;
    fn auto_increment() -> bool {
        true
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    TipoActividad,
    RaActividad,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdActividad => ColumnType::BigInteger.def(),
            Self::IdTipoActividad => ColumnType::BigInteger.def(),
            Self::NombreActividad => ColumnType::String(StringLen::N(150)).def(),
            Self::Descripcion => ColumnType::Text.def().null(),
            Self::PorcentajeActividad => ColumnType::Decimal(Some((5, 2))).def(),
            Self::FechaCreacion => ColumnType::Date.def(),
            Self::FechaCierre => ColumnType::Date.def().null(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::TipoActividad => Entity::belongs_to(super::tipo_actividad::Entity)
                .from(Column::IdTipoActividad)
                .to(super::tipo_actividad::Column::IdTipoActividad)
                .into(),
            Self::RaActividad => Entity::has_many(super::ra_actividad::Entity).into(),
        }
    }
}

impl Related<super::tipo_actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TipoActividad.def()
    }
}

impl Related<super::ra_actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaActividad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
