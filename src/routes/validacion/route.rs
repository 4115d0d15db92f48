use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};

use super::dto::{AsignaturaValidationResponse, RaValidationResponse};
use crate::errors::AcademicError;
use crate::services::ReportService;
use crate::static_service::database;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/validacion/ra/{ra_id}", get(validate_ra))
        .route(
            "/api/v1/validacion/asignatura/{codigo_asignatura}",
            get(validate_asignatura),
        )
}

/// Activity and indicator weight totals of an RA
#[utoipa::path(
    get,
    path = "/api/v1/validacion/ra/{ra_id}",
    params(("ra_id" = i64, Path, description = "RA id")),
    responses(
        (status = 200, description = "Budget report", body = RaValidationResponse),
        (status = 404, description = "RA not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Validacion"
)]
pub async fn validate_ra(
    Path(ra_id): Path<i64>,
) -> Result<(StatusCode, Json<RaValidationResponse>), AcademicError> {
    let report = ReportService::new(database()?).ra_report(ra_id).await?;
    Ok((StatusCode::OK, Json(report.into())))
}

/// RA weight total of an asignatura
#[utoipa::path(
    get,
    path = "/api/v1/validacion/asignatura/{codigo_asignatura}",
    params(("codigo_asignatura" = String, Path, description = "Asignatura code")),
    responses(
        (status = 200, description = "Budget report", body = AsignaturaValidationResponse),
        (status = 404, description = "Asignatura not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Validacion"
)]
pub async fn validate_asignatura(
    Path(codigo_asignatura): Path<String>,
) -> Result<(StatusCode, Json<AsignaturaValidationResponse>), AcademicError> {
    let report = ReportService::new(database()?)
        .asignatura_report(&codigo_asignatura)
        .await?;
    Ok((StatusCode::OK, Json(report.into())))
}
