use axum::{Json, Router, http::StatusCode, routing::post};

use super::dto::{NotaRequest, NotaResponse};
use crate::errors::AcademicError;
use crate::services::GradeService;
use crate::static_service::database;

pub fn create_route() -> Router {
    Router::new().route("/api/v1/notas", post(record_nota).put(record_nota))
}

/// Record a grade for an enrollment and activity link (upsert)
#[utoipa::path(
    post,
    path = "/api/v1/notas",
    request_body = NotaRequest,
    responses(
        (status = 201, description = "Grade created", body = NotaResponse),
        (status = 200, description = "Existing grade updated", body = NotaResponse),
        (status = 400, description = "Grade out of range, missing field or indicator of another RA"),
        (status = 404, description = "Enrollment, link or indicator not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notas"
)]
pub async fn record_nota(
    Json(payload): Json<NotaRequest>,
) -> Result<(StatusCode, Json<NotaResponse>), AcademicError> {
    let record = GradeService::new(database()?)
        .record_grade(payload.into())
        .await?;

    let status = if record.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(record.into())))
}
