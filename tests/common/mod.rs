#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use grading_service::entities::{
    actividad, asignatura, indicadores_de_logro, matricula, notas_actividad, ra_actividad,
    resultado_de_aprendizaje, tipo_actividad,
};
use sea_orm::prelude::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, Value};

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn pct(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Row returned by the `SUM(...) AS suma` ledger queries.
pub fn sum_row(value: Decimal) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("suma", Value::from(Some(value)))])
}

/// `SUM` over no rows is NULL.
pub fn null_sum_row() -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("suma", Value::Decimal(None))])
}

/// Row returned by the `AVG(...) AS avg_nota` indicator query.
pub fn avg_row(value: Option<Decimal>) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("avg_nota", Value::Decimal(value.map(Box::new)))])
}

pub fn tipo(id: i64) -> tipo_actividad::Model {
    tipo_actividad::Model {
        id_tipo_actividad: id,
        descripcion: "Examen".to_string(),
    }
}

pub fn asignatura(id: i64, codigo: &str) -> asignatura::Model {
    asignatura::Model {
        id_asignatura: id,
        nombre: "Bases de Datos".to_string(),
        codigo_asignatura: codigo.to_string(),
        grupo: Some("A".to_string()),
    }
}

pub fn ra(id_ra: i64, id_asignatura: i64) -> resultado_de_aprendizaje::Model {
    resultado_de_aprendizaje::Model {
        id_ra,
        id_asignatura,
        porcentaje_ra: pct(50),
        descripcion: Some(format!("RA {id_ra}")),
    }
}

pub fn indicator(id_ind: i64, id_ra: i64) -> indicadores_de_logro::Model {
    indicadores_de_logro::Model {
        id_ind,
        id_ra,
        porcentaje_ind: pct(50),
        descripcion: None,
    }
}

pub fn actividad(id: i64, porcentaje: i64, fecha_creacion: NaiveDate) -> actividad::Model {
    actividad::Model {
        id_actividad: id,
        id_tipo_actividad: 1,
        nombre_actividad: "Parcial".to_string(),
        descripcion: None,
        porcentaje_actividad: pct(porcentaje),
        fecha_creacion,
        fecha_cierre: None,
    }
}

pub fn edge(id: i64, id_actividad: i64, id_ra: i64, weight: i64) -> ra_actividad::Model {
    ra_actividad::Model {
        id_ra_actividad: id,
        id_actividad,
        id_ra,
        porcentaje_ra_actividad: pct(weight),
    }
}

pub fn matricula(id: i64, id_asignatura: i64) -> matricula::Model {
    matricula::Model {
        id_matricula: id,
        id_estudiante: 7,
        id_periodo: 1,
        id_asignatura,
        nota_final: None,
    }
}

pub fn nota(id: i64, id_matricula: i64, id_ra_actividad: i64, value: Option<Decimal>) -> notas_actividad::Model {
    notas_actividad::Model {
        id,
        id_matricula,
        id_ra_actividad,
        nota_ra_actividad: value,
        retroalimentacion: None,
        id_ind: None,
    }
}
