use utoipa::OpenApi;

use crate::routes::{actividades, estudiantes, health, notas, ras, validacion};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grading Service API",
        description = "Activities, RA weights and grades of course offerings"
    ),
    paths(
        health::route::health,
        ras::route::list_indicadores,
        ras::route::list_actividades,
        ras::route::create_actividad,
        actividades::route::create_multi_actividad,
        actividades::route::update_actividad,
        actividades::route::update_ra_actividad,
        notas::route::record_nota,
        validacion::route::validate_ra,
        validacion::route::validate_asignatura,
        estudiantes::route::student_indicators,
        estudiantes::route::student_notifications,
    ),
    components(schemas(
        health::route::HealthResponse,
        ras::dto::IndicadorResponse,
        ras::dto::RaActividadRow,
        ras::dto::CreateRaActividadRequest,
        actividades::dto::ActividadResponse,
        actividades::dto::RaActividadResponse,
        actividades::dto::CreatedActividadResponse,
        actividades::dto::RaLinkRequest,
        actividades::dto::CreateMultiActividadRequest,
        actividades::dto::UpdateActividadRequest,
        actividades::dto::UpdateRaActividadRequest,
        notas::dto::NotaRequest,
        notas::dto::NotaResponse,
        validacion::dto::BudgetReportResponse,
        validacion::dto::RaValidationResponse,
        validacion::dto::AsignaturaValidationResponse,
        estudiantes::dto::IndicatorAverageResponse,
        estudiantes::dto::NotificationKindDto,
        estudiantes::dto::NotificationResponse,
    )),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "RAs", description = "Learning outcomes and their activities"),
        (name = "Actividades", description = "Activity and RA link maintenance"),
        (name = "Notas", description = "Grade recording"),
        (name = "Validacion", description = "Percentage budget reports"),
        (name = "Estudiantes", description = "Per-student indicators and notifications")
    )
)]
pub struct ApiDoc;
