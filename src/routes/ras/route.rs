use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};

use super::dto::{CreateRaActividadRequest, IndicadorResponse, RaActividadRow, RaActividadesQuery};
use crate::errors::AcademicError;
use crate::routes::actividades::dto::CreatedActividadResponse;
use crate::routes::today;
use crate::services::ActivityService;
use crate::static_service::database;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/ras/{ra_id}/indicadores", get(list_indicadores))
        .route(
            "/api/v1/ras/{ra_id}/actividades",
            get(list_actividades).post(create_actividad),
        )
}

/// List the indicators of an RA
#[utoipa::path(
    get,
    path = "/api/v1/ras/{ra_id}/indicadores",
    params(("ra_id" = i64, Path, description = "RA id")),
    responses(
        (status = 200, description = "Indicators of the RA", body = Vec<IndicadorResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "RAs"
)]
pub async fn list_indicadores(
    Path(ra_id): Path<i64>,
) -> Result<(StatusCode, Json<Vec<IndicadorResponse>>), AcademicError> {
    let indicadores = ActivityService::new(database()?)
        .list_indicators(ra_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(indicadores.into_iter().map(Into::into).collect()),
    ))
}

/// List the activities linked to an RA
#[utoipa::path(
    get,
    path = "/api/v1/ras/{ra_id}/actividades",
    params(("ra_id" = i64, Path, description = "RA id"), RaActividadesQuery),
    responses(
        (status = 200, description = "Activity links of the RA", body = Vec<RaActividadRow>),
        (status = 404, description = "RA not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "RAs"
)]
pub async fn list_actividades(
    Path(ra_id): Path<i64>,
    Query(query): Query<RaActividadesQuery>,
) -> Result<(StatusCode, Json<Vec<RaActividadRow>>), AcademicError> {
    let rows = ActivityService::new(database()?)
        .list_for_ra(ra_id, query.id_matricula)
        .await?;

    Ok((StatusCode::OK, Json(rows.into_iter().map(Into::into).collect())))
}

/// Create an activity and link it to an RA
#[utoipa::path(
    post,
    path = "/api/v1/ras/{ra_id}/actividades",
    params(("ra_id" = i64, Path, description = "RA id")),
    request_body = CreateRaActividadRequest,
    responses(
        (status = 201, description = "Activity created and linked", body = CreatedActividadResponse),
        (status = 400, description = "Budget exceeded or invalid input"),
        (status = 404, description = "RA or activity type not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "RAs"
)]
pub async fn create_actividad(
    Path(ra_id): Path<i64>,
    Json(payload): Json<CreateRaActividadRequest>,
) -> Result<(StatusCode, Json<CreatedActividadResponse>), AcademicError> {
    let created = ActivityService::new(database()?)
        .create_for_ra(
            ra_id,
            payload.activity_input(),
            payload.porcentaje_ra_actividad,
            &payload.indicadores,
            today(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
