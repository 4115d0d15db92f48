pub mod actividades;
pub mod estudiantes;
pub mod health;
pub mod notas;
pub mod ras;
pub mod validacion;

use chrono::NaiveDate;

/// Calendar day used for close-date and notification checks.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
