use sea_orm::prelude::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::budget;
use crate::entities::notas_actividad;
use crate::errors::{AcademicError, AcademicResult, ValidationError};
use crate::repositories::{ActividadRepository, GradeRepository, GradeValues, RaRepository};

#[derive(Debug, Clone, Default)]
pub struct GradeInput {
    pub id_matricula: Option<i64>,
    pub id_ra_actividad: Option<i64>,
    pub nota: Option<Decimal>,
    pub retroalimentacion: Option<String>,
    pub id_ind: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GradeRecord {
    pub nota: notas_actividad::Model,
    /// `false` when an existing grade for the same (matricula, link) was updated.
    pub created: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorConsistency {
    Consistent,
    Mismatch { indicator_ra: i64, edge_ra: i64 },
}

/// A grade may reference an indicator only if that indicator belongs to the
/// RA of the graded link.
pub fn check_indicator_ra(indicator_ra: i64, edge_ra: i64) -> IndicatorConsistency {
    if indicator_ra == edge_ra {
        IndicatorConsistency::Consistent
    } else {
        IndicatorConsistency::Mismatch {
            indicator_ra,
            edge_ra,
        }
    }
}

pub struct GradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the grade of one enrollment for one activity link.
    pub async fn record_grade(&self, input: GradeInput) -> AcademicResult<GradeRecord> {
        let id_matricula = input
            .id_matricula
            .ok_or(ValidationError::MissingField("id_matricula"))?;
        let id_ra_actividad = input
            .id_ra_actividad
            .ok_or(ValidationError::MissingField("id_ra_actividad"))?;
        let nota = input.nota.map(budget::normalize_grade).transpose()?;

        let txn = self.db.begin().await?;
        let grades = GradeRepository::new(&txn);

        if grades.find_matricula_for_update(id_matricula).await?.is_none() {
            return Err(AcademicError::not_found("matricula", id_matricula));
        }

        let edge = ActividadRepository::new(&txn)
            .find_edge_for_share(id_ra_actividad)
            .await?
            .ok_or_else(|| AcademicError::not_found("ra_actividad", id_ra_actividad))?;

        if let Some(id_ind) = input.id_ind {
            let indicator = RaRepository::new(&txn)
                .find_indicator(id_ind)
                .await?
                .ok_or_else(|| AcademicError::not_found("indicador", id_ind))?;

            if let IndicatorConsistency::Mismatch {
                indicator_ra,
                edge_ra,
            } = check_indicator_ra(indicator.id_ra, edge.id_ra)
            {
                return Err(ValidationError::InconsistentIndicator {
                    id_ind,
                    indicator_ra,
                    edge_ra,
                }
                .into());
            }
        }

        let values = GradeValues {
            nota_ra_actividad: nota,
            retroalimentacion: input.retroalimentacion,
            id_ind: input.id_ind,
        };

        let record = match grades.find_grade(id_matricula, id_ra_actividad).await? {
            Some(existing) => GradeRecord {
                nota: grades.update_grade(existing, values).await?,
                created: false,
            },
            None => GradeRecord {
                nota: grades
                    .create_grade(id_matricula, id_ra_actividad, values)
                    .await?,
                created: true,
            },
        };

        txn.commit().await?;

        tracing::debug!(
            id_matricula,
            id_ra_actividad,
            created = record.created,
            "grade recorded"
        );

        Ok(record)
    }
}
