//! `SeaORM` Entity for matricula table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "matricula"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub id_matricula: i64,
    pub id_estudiante: i64,
    pub id_periodo: i64,
    pub id_asignatura: i64,
    pub nota_final: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    IdMatricula,
    IdEstudiante,
    IdPeriodo,
    IdAsignatura,
    NotaFinal,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    IdMatricula,
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
    NotasActividad,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::IdMatricula => ColumnType::BigInteger.def(),
            Self::IdEstudiante => ColumnType::BigInteger.def(),
            Self::IdPeriodo => ColumnType::BigInteger.def(),
            Self::IdAsignatura => ColumnType::BigInteger.def(),
            Self::NotaFinal => ColumnType::Decimal(Some((5, 2))).def().null(),
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
            Self::NotasActividad => Entity::has_many(super::notas_actividad::Entity).into(),
        }
    }
}

impl Related<super::asignatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignatura.def()
    }
}

impl Related<super::notas_actividad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotasActividad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
