use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use migration::RA_BUDGET_VIOLATION_TAG;
use sea_orm::DbErr;
use sea_orm::prelude::Decimal;
use serde_json::json;
use thiserror::Error;

/// User-correctable rejections. Reported back verbatim, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("activities for RA {ra_id} would total {total}%, exceeding 100%")]
    BudgetExceeded { ra_id: i64, total: Decimal },

    #[error("fecha_cierre {fecha_cierre} cannot be earlier than today ({today})")]
    CloseDateBeforeToday {
        fecha_cierre: NaiveDate,
        today: NaiveDate,
    },

    #[error("fecha_cierre {fecha_cierre} cannot be earlier than fecha_creacion {fecha_creacion}")]
    CloseDateBeforeCreation {
        fecha_cierre: NaiveDate,
        fecha_creacion: NaiveDate,
    },

    #[error("all RAs must belong to the same asignatura (found asignaturas {asignaturas:?})")]
    MixedAsignaturas { asignaturas: Vec<i64> },

    #[error("indicator {id_ind} belongs to RA {indicator_ra}, not to RA {edge_ra} of the activity link")]
    InconsistentIndicator {
        id_ind: i64,
        indicator_ra: i64,
        edge_ra: i64,
    },

    #[error("{field} must be between 0 and 100 (got {value})")]
    PercentageOutOfRange { field: &'static str, value: Decimal },

    #[error("{field} accepts at most 2 decimal places (got {value})")]
    TooManyDecimals { field: &'static str, value: Decimal },

    #[error("nota must be between 0 and 5 (got {value})")]
    GradeOutOfRange { value: Decimal },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("RA {ra_id} is listed more than once")]
    DuplicateRa { ra_id: i64 },

    #[error("at least one RA is required")]
    EmptyRaList,
}

#[derive(Debug, Error)]
pub enum AcademicError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// The storage-level budget trigger fired: some write path skipped the
    /// service-layer check.
    #[error("RA budget violated at storage layer: {0}")]
    ConflictFatal(String),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl AcademicError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ConflictFatal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for AcademicError {
    fn from(err: DbErr) -> Self {
        let message = err.to_string();
        if message.contains(RA_BUDGET_VIOLATION_TAG) {
            Self::ConflictFatal(message)
        } else {
            Self::Database(err)
        }
    }
}

impl IntoResponse for AcademicError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::ConflictFatal(detail) => {
                tracing::error!(detail = %detail, "storage trigger rejected a write that passed service validation");
            }
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
            }
            Self::Validation(reason) => {
                tracing::info!(reason = %reason, "request rejected");
            }
            Self::NotFound { .. } => {}
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type AcademicResult<T> = Result<T, AcademicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_rejection_maps_to_conflict_fatal() {
        let err = DbErr::Custom(
            "error returned from database: ra_budget_exceeded: RA 7 total 120.00".to_string(),
        );
        let mapped = AcademicError::from(err);
        assert!(matches!(mapped, AcademicError::ConflictFatal(ref m) if m.contains("RA 7")));
        assert_eq!(mapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn other_database_errors_stay_database_errors() {
        let mapped = AcademicError::from(DbErr::RecordNotFound("matricula".to_string()));
        assert!(matches!(mapped, AcademicError::Database(_)));
    }

    #[test]
    fn validation_and_not_found_status_codes() {
        let validation: AcademicError = ValidationError::EmptyRaList.into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AcademicError::not_found("RA", 3).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn budget_message_names_ra_and_total() {
        let err = ValidationError::BudgetExceeded {
            ra_id: 1,
            total: Decimal::new(11000, 2),
        };
        let message = err.to_string();
        assert!(message.contains("RA 1"));
        assert!(message.contains("110.00%"));
        assert!(message.contains("exceeding 100%"));
    }
}
