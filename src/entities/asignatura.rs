//! `SeaORM` Entity for asignatura table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "asignatura"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_asignatura: i64,
    pub nombre: String,
    pub codigo_asignatura: String,
    pub grupo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdAsignatura,
    Nombre,
    CodigoAsignatura,
    Grupo,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdAsignatura,
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
    Matricula,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdAsignatura => ColumnType::BigInteger.def(),
            Self::Nombre => ColumnType::String(StringLen::N(150)).def(),
            Self::CodigoAsignatura => ColumnType::String(StringLen::N(50)).def().unique(),
            Self::Grupo => ColumnType::String(StringLen::N(20)).def().null(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ResultadoDeAprendizaje => Entity::has_many(super::resultado_de_aprendizaje::Entity).into(),
            Self::Matricula => Entity::has_many(super::matricula::Entity).into(),
        }
    }
}

impl Related<super::resultado_de_aprendizaje::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResultadoDeAprendizaje.def()
    }
}

impl Related<super::matricula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matricula.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
