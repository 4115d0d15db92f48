use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{post, put},
};

use super::dto::{
    ActividadResponse, CreateMultiActividadRequest, CreatedActividadResponse, RaActividadResponse,
    UpdateActividadRequest, UpdateRaActividadRequest,
};
use crate::errors::{AcademicError, ValidationError};
use crate::routes::today;
use crate::services::ActivityService;
use crate::static_service::database;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/actividades/multi", post(create_multi_actividad))
        .route("/api/v1/actividades/{id_actividad}", put(update_actividad))
        .route(
            "/api/v1/ra-actividades/{id_ra_actividad}",
            put(update_ra_actividad),
        )
}

/// Create one activity linked to several RAs of the same asignatura
#[utoipa::path(
    post,
    path = "/api/v1/actividades/multi",
    request_body = CreateMultiActividadRequest,
    responses(
        (status = 201, description = "Activity and links created", body = CreatedActividadResponse),
        (status = 400, description = "Budget exceeded, mixed asignaturas or invalid input"),
        (status = 404, description = "RA or activity type not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actividades"
)]
pub async fn create_multi_actividad(
    Json(payload): Json<CreateMultiActividadRequest>,
) -> Result<(StatusCode, Json<CreatedActividadResponse>), AcademicError> {
    let (input, links) = payload.into_parts();

    let created = ActivityService::new(database()?)
        .create_multi(input, &links, today())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update an activity
#[utoipa::path(
    put,
    path = "/api/v1/actividades/{id_actividad}",
    params(("id_actividad" = i64, Path, description = "Activity id")),
    request_body = UpdateActividadRequest,
    responses(
        (status = 200, description = "Activity updated", body = ActividadResponse),
        (status = 400, description = "Invalid percentage or close date"),
        (status = 404, description = "Activity not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actividades"
)]
pub async fn update_actividad(
    Path(id_actividad): Path<i64>,
    Json(payload): Json<UpdateActividadRequest>,
) -> Result<(StatusCode, Json<ActividadResponse>), AcademicError> {
    let actividad = ActivityService::new(database()?)
        .update_actividad(id_actividad, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(actividad.into())))
}

/// Change the weight an activity contributes to its RA
#[utoipa::path(
    put,
    path = "/api/v1/ra-actividades/{id_ra_actividad}",
    params(("id_ra_actividad" = i64, Path, description = "RA-activity link id")),
    request_body = UpdateRaActividadRequest,
    responses(
        (status = 200, description = "Link updated", body = RaActividadResponse),
        (status = 400, description = "Budget exceeded or invalid percentage"),
        (status = 404, description = "Link not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actividades"
)]
pub async fn update_ra_actividad(
    Path(id_ra_actividad): Path<i64>,
    Json(payload): Json<UpdateRaActividadRequest>,
) -> Result<(StatusCode, Json<RaActividadResponse>), AcademicError> {
    let weight = payload
        .porcentaje_ra_actividad
        .ok_or(ValidationError::MissingField("porcentaje_ra_actividad"))?;

    let edge = ActivityService::new(database()?)
        .update_edge_weight(id_ra_actividad, weight)
        .await?;

    Ok((StatusCode::OK, Json(edge.into())))
}
