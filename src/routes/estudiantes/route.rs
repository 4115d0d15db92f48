use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};

use super::dto::{IndicatorAverageResponse, NotificationResponse};
use crate::errors::AcademicError;
use crate::routes::today;
use crate::services::NotificationService;
use crate::static_service::database;

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/api/v1/asignaturas/{codigo_asignatura}/estudiante/{id_estudiante}/indicadores",
            get(student_indicators),
        )
        .route(
            "/api/v1/estudiantes/{id_estudiante}/notificaciones",
            get(student_notifications),
        )
}

/// Average grade per indicator for a student in a course
#[utoipa::path(
    get,
    path = "/api/v1/asignaturas/{codigo_asignatura}/estudiante/{id_estudiante}/indicadores",
    params(
        ("codigo_asignatura" = String, Path, description = "Asignatura code"),
        ("id_estudiante" = i64, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Indicator averages; empty when not enrolled", body = Vec<IndicatorAverageResponse>),
        (status = 404, description = "Asignatura not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Estudiantes"
)]
pub async fn student_indicators(
    Path((codigo_asignatura, id_estudiante)): Path<(String, i64)>,
) -> Result<(StatusCode, Json<Vec<IndicatorAverageResponse>>), AcademicError> {
    let rows = NotificationService::new(database()?)
        .indicator_averages(&codigo_asignatura, id_estudiante)
        .await?;

    Ok((StatusCode::OK, Json(rows.into_iter().map(Into::into).collect())))
}

/// Upcoming ungraded activities and low course averages of a student
#[utoipa::path(
    get,
    path = "/api/v1/estudiantes/{id_estudiante}/notificaciones",
    params(("id_estudiante" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Notifications, warnings first", body = Vec<NotificationResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Estudiantes"
)]
pub async fn student_notifications(
    Path(id_estudiante): Path<i64>,
) -> Result<(StatusCode, Json<Vec<NotificationResponse>>), AcademicError> {
    let notifications = NotificationService::new(database()?)
        .notifications(id_estudiante, today())
        .await?;

    Ok((
        StatusCode::OK,
        Json(notifications.into_iter().map(Into::into).collect()),
    ))
}
