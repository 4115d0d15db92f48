use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::{GradeInput, GradeRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotaRequest {
    pub id_matricula: Option<i64>,
    pub id_ra_actividad: Option<i64>,
    /// Grade between 0 and 5.
    pub nota: Option<Decimal>,
    pub retroalimentacion: Option<String>,
    pub id_ind: Option<i64>,
}

impl From<NotaRequest> for GradeInput {
    fn from(req: NotaRequest) -> Self {
        Self {
            id_matricula: req.id_matricula,
            id_ra_actividad: req.id_ra_actividad,
            nota: req.nota,
            retroalimentacion: req.retroalimentacion,
            id_ind: req.id_ind,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotaResponse {
    pub id: i64,
    pub id_matricula: i64,
    pub id_ra_actividad: i64,
    pub nota: Option<Decimal>,
    pub retroalimentacion: Option<String>,
    pub id_ind: Option<i64>,
    pub created: bool,
}

impl From<GradeRecord> for NotaResponse {
    fn from(record: GradeRecord) -> Self {
        Self {
            id: record.nota.id,
            id_matricula: record.nota.id_matricula,
            id_ra_actividad: record.nota.id_ra_actividad,
            nota: record.nota.nota_ra_actividad,
            retroalimentacion: record.nota.retroalimentacion,
            id_ind: record.nota.id_ind,
            created: record.created,
        }
    }
}
