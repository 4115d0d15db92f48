pub use super::actividad::Entity as Actividad;
pub use super::asignatura::Entity as Asignatura;
pub use super::indicadores_de_logro::Entity as IndicadoresDeLogro;
pub use super::matricula::Entity as Matricula;
pub use super::notas_actividad::Entity as NotasActividad;
pub use super::ra_actividad::Entity as RaActividad;
pub use super::ra_actividad_indicador::Entity as RaActividadIndicador;
pub use super::resultado_de_aprendizaje::Entity as ResultadoDeAprendizaje;
pub use super::tipo_actividad::Entity as TipoActividad;
