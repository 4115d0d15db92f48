use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::{AsignaturaReport, BudgetReport, RaReport};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BudgetReportResponse {
    pub suma: Decimal,
    /// The weights add up to exactly 100.
    pub ok: bool,
    pub faltante: Decimal,
    /// The weights do not exceed 100.
    pub dentro_del_limite: bool,
}

impl From<BudgetReport> for BudgetReportResponse {
    fn from(r: BudgetReport) -> Self {
        Self {
            suma: r.suma,
            ok: r.ok,
            faltante: r.faltante,
            dentro_del_limite: r.dentro_del_limite,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RaValidationResponse {
    pub ra_id: i64,
    pub actividades: BudgetReportResponse,
    pub indicadores: BudgetReportResponse,
}

impl From<RaReport> for RaValidationResponse {
    fn from(r: RaReport) -> Self {
        Self {
            ra_id: r.ra_id,
            actividades: r.actividades.into(),
            indicadores: r.indicadores.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AsignaturaValidationResponse {
    pub codigo_asignatura: String,
    pub ras: BudgetReportResponse,
}

impl From<AsignaturaReport> for AsignaturaValidationResponse {
    fn from(r: AsignaturaReport) -> Self {
        Self {
            codigo_asignatura: r.codigo_asignatura,
            ras: r.ras.into(),
        }
    }
}
