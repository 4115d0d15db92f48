//! `SeaORM` entities for the academic records schema

pub mod prelude;

pub mod actividad;
pub mod asignatura;
pub mod indicadores_de_logro;
pub mod matricula;
pub mod notas_actividad;
pub mod ra_actividad;
pub mod ra_actividad_indicador;
pub mod resultado_de_aprendizaje;
pub mod tipo_actividad;
