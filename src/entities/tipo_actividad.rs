//! `SeaORM` Entity for tipo_actividad table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "tipo_actividad"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_tipo_actividad: i64,
    pub descripcion: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdTipoActividad,
    Descripcion,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdTipoActividad,
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
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdTipoActividad => ColumnType::BigInteger.def(),
            Self::Descripcion => ColumnType::String(StringLen::N(100)).def().unique(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Actividad => Entity::has_many(super::actividad::Entity).into(),
        }
    }
}

impl Related<super::actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actividad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
