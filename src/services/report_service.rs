use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;

use crate::budget::{self, BUDGET_LIMIT};
use crate::errors::{AcademicError, AcademicResult};
use crate::ledger;
use crate::repositories::RaRepository;

/// How far a set of weights is from a full 100% budget.
///
/// `ok` means "fully budgeted" (exactly 100). `dentro_del_limite` is the
/// write-time rule (at most 100), so an RA at 60% is within the limit but
/// not ok.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetReport {
    pub suma: Decimal,
    pub ok: bool,
    pub faltante: Decimal,
    pub dentro_del_limite: bool,
}

impl BudgetReport {
    pub fn from_sum(suma: Decimal) -> Self {
        Self {
            suma,
            ok: suma == BUDGET_LIMIT,
            faltante: (BUDGET_LIMIT - suma).max(Decimal::ZERO),
            dentro_del_limite: budget::within_budget(suma),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaReport {
    pub ra_id: i64,
    pub actividades: BudgetReport,
    pub indicadores: BudgetReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsignaturaReport {
    pub codigo_asignatura: String,
    pub ras: BudgetReport,
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ra_report(&self, ra_id: i64) -> AcademicResult<RaReport> {
        if RaRepository::new(self.db).find_by_id(ra_id).await?.is_none() {
            return Err(AcademicError::not_found("RA", ra_id));
        }

        let actividades = ledger::current_sum(self.db, ra_id, None).await?;
        let indicadores = ledger::indicator_sum(self.db, ra_id).await?;

        Ok(RaReport {
            ra_id,
            actividades: BudgetReport::from_sum(actividades),
            indicadores: BudgetReport::from_sum(indicadores),
        })
    }

    pub async fn asignatura_report(&self, codigo_asignatura: &str) -> AcademicResult<AsignaturaReport> {
        let asignatura = RaRepository::new(self.db)
            .find_asignatura_by_codigo(codigo_asignatura)
            .await?
            .ok_or_else(|| AcademicError::not_found("asignatura", codigo_asignatura))?;

        let ras = ledger::ra_sum(self.db, asignatura.id_asignatura).await?;

        Ok(AsignaturaReport {
            codigo_asignatura: asignatura.codigo_asignatura,
            ras: BudgetReport::from_sum(ras),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_hundred_is_ok() {
        let report = BudgetReport::from_sum(Decimal::ONE_HUNDRED);
        assert!(report.ok);
        assert!(report.dentro_del_limite);
        assert_eq!(report.faltante, Decimal::ZERO);
    }

    #[test]
    fn partial_budget_is_within_limit_but_not_ok() {
        let report = BudgetReport::from_sum(Decimal::new(6050, 2));
        assert!(!report.ok);
        assert!(report.dentro_del_limite);
        assert_eq!(report.faltante, Decimal::new(3950, 2));
    }

    #[test]
    fn overflowing_budget_has_no_missing_part() {
        let report = BudgetReport::from_sum(Decimal::from(110));
        assert!(!report.ok);
        assert!(!report.dentro_del_limite);
        assert_eq!(report.faltante, Decimal::ZERO);
    }

    #[test]
    fn empty_budget_misses_everything() {
        let report = BudgetReport::from_sum(Decimal::ZERO);
        assert!(!report.ok);
        assert_eq!(report.faltante, Decimal::ONE_HUNDRED);
    }
}
