mod common;

use common::*;
use grading_service::errors::{AcademicError, ValidationError};
use grading_service::ledger;
use grading_service::repositories::ActividadUpdate;
use grading_service::services::{ActivityInput, ActivityService, RaLink};
use sea_orm::prelude::Decimal;

fn activity_input(porcentaje: i64) -> ActivityInput {
    ActivityInput {
        nombre_actividad: Some("Parcial".to_string()),
        id_tipo_actividad: Some(1),
        porcentaje_actividad: Some(pct(porcentaje)),
        descripcion: None,
        fecha_cierre: None,
    }
}

fn link(ra_id: i64, weight: i64) -> RaLink {
    RaLink {
        ra_id,
        porcentaje_ra_actividad: pct(weight),
    }
}

#[tokio::test]
async fn link_pushing_ra_over_100_is_rejected() {
    // RA 1 already has a link weighted 90; adding 20 would reach 110.
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(90))]])
        .into_connection();

    let err = ActivityService::new(&db)
        .create_for_ra(1, activity_input(20), Some(pct(20)), &[], date(2025, 3, 10))
        .await
        .unwrap_err();

    match err {
        AcademicError::Validation(reason @ ValidationError::BudgetExceeded { .. }) => {
            assert_eq!(
                reason,
                ValidationError::BudgetExceeded {
                    ra_id: 1,
                    total: pct(110)
                }
            );
            assert!(reason.to_string().contains("exceeding 100%"));
        }
        other => panic!("expected budget rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn link_filling_ra_to_exactly_100_is_created() {
    let today = date(2025, 3, 10);
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(60))]])
        .append_query_results([vec![actividad(3, 20, today)]])
        .append_query_results([vec![edge(8, 3, 1, 40)]])
        .append_query_results([vec![sum_row(pct(100))]])
        .into_connection();

    let created = ActivityService::new(&db)
        .create_for_ra(1, activity_input(20), Some(pct(40)), &[], today)
        .await
        .unwrap();

    assert_eq!(created.actividad.id_actividad, 3);
    assert_eq!(created.relaciones.len(), 1);
    assert_eq!(created.relaciones[0].porcentaje_ra_actividad, pct(40));
}

#[tokio::test]
async fn close_date_yesterday_is_rejected() {
    let db = mock_db().into_connection();
    let mut input = activity_input(20);
    input.fecha_cierre = Some(date(2025, 3, 9));

    let err = ActivityService::new(&db)
        .create_for_ra(1, input, Some(pct(20)), &[], date(2025, 3, 10))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::CloseDateBeforeToday { .. })
    ));
    assert!(err.to_string().contains("cannot be earlier than today"));
}

#[tokio::test]
async fn missing_ra_is_not_found() {
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([Vec::<grading_service::entities::resultado_de_aprendizaje::Model>::new()])
        .into_connection();

    let err = ActivityService::new(&db)
        .create_for_ra(42, activity_input(20), Some(pct(20)), &[], date(2025, 3, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, AcademicError::NotFound { entity: "RA", .. }));
}

#[tokio::test]
async fn multi_link_across_asignaturas_is_rejected() {
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![ra(2, 20)]])
        .into_connection();

    let err = ActivityService::new(&db)
        .create_multi(activity_input(30), &[link(2, 10), link(1, 10)], date(2025, 3, 10))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::MixedAsignaturas { .. })
    ));
    assert!(err.to_string().contains("same asignatura"));
}

#[tokio::test]
async fn multi_link_with_repeated_ra_is_rejected() {
    let db = mock_db().into_connection();

    let err = ActivityService::new(&db)
        .create_multi(activity_input(30), &[link(1, 10), link(1, 20)], date(2025, 3, 10))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::DuplicateRa { ra_id: 1 })
    ));
}

#[tokio::test]
async fn multi_link_is_rejected_when_any_ra_overflows() {
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![ra(2, 10)]])
        .append_query_results([vec![sum_row(pct(50))]])
        .append_query_results([vec![sum_row(pct(95))]])
        .into_connection();

    let err = ActivityService::new(&db)
        .create_multi(activity_input(30), &[link(1, 30), link(2, 10)], date(2025, 3, 10))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::BudgetExceeded { ra_id: 2, .. })
    ));
}

#[tokio::test]
async fn multi_link_creates_one_edge_per_ra() {
    let today = date(2025, 3, 10);
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![ra(2, 10)]])
        .append_query_results([vec![sum_row(pct(50))]])
        .append_query_results([vec![null_sum_row()]])
        .append_query_results([vec![actividad(3, 30, today)]])
        .append_query_results([vec![edge(8, 3, 1, 30)]])
        .append_query_results([vec![edge(9, 3, 2, 40)]])
        .append_query_results([vec![sum_row(pct(80))]])
        .append_query_results([vec![sum_row(pct(40))]])
        .into_connection();

    let created = ActivityService::new(&db)
        .create_multi(activity_input(30), &[link(2, 40), link(1, 30)], today)
        .await
        .unwrap();

    let ras: Vec<i64> = created.relaciones.iter().map(|e| e.id_ra).collect();
    assert_eq!(ras, vec![1, 2]);
}

#[tokio::test]
async fn weight_update_does_not_count_the_old_weight() {
    // Other links of RA 1 sum to 70; this link moves from 30 to 25.
    let db = mock_db()
        .append_query_results([vec![edge(10, 3, 1, 30)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(70))]])
        .append_query_results([vec![edge(10, 3, 1, 25)]])
        .append_query_results([vec![sum_row(pct(95))]])
        .into_connection();

    let updated = ActivityService::new(&db)
        .update_edge_weight(10, pct(25))
        .await
        .unwrap();

    assert_eq!(updated.porcentaje_ra_actividad, pct(25));
}

#[tokio::test]
async fn weight_update_over_budget_is_rejected() {
    let db = mock_db()
        .append_query_results([vec![edge(10, 3, 1, 30)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(70))]])
        .into_connection();

    let err = ActivityService::new(&db)
        .update_edge_weight(10, pct(40))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::BudgetExceeded { ra_id: 1, .. })
    ));
}

#[tokio::test]
async fn close_date_before_creation_is_rejected_on_update() {
    let db = mock_db()
        .append_query_results([vec![actividad(3, 20, date(2025, 3, 5))]])
        .into_connection();

    let updates = ActividadUpdate {
        nombre_actividad: None,
        descripcion: None,
        porcentaje_actividad: None,
        fecha_cierre: Some(date(2025, 3, 1)),
    };
    let err = ActivityService::new(&db)
        .update_actividad(3, updates)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::CloseDateBeforeCreation { .. })
    ));
}

#[tokio::test]
async fn overflow_found_after_write_is_a_fatal_conflict() {
    let db = mock_db()
        .append_query_results([vec![sum_row(Decimal::new(12000, 2))]])
        .into_connection();

    let err = ledger::enforce_ra_budget(&db, 1).await.unwrap_err();

    assert!(matches!(err, AcademicError::ConflictFatal(_)));
    assert_eq!(err.status_code(), http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn weight_pushing_total_to_100_000001_is_rejected() {
    // RA 1 is at 80; 20.000001 would land just above 100.
    let db = mock_db().into_connection();

    let err = ActivityService::new(&db)
        .create_for_ra(
            1,
            activity_input(20),
            Some(Decimal::new(20_000_001, 6)),
            &[],
            date(2025, 3, 10),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::TooManyDecimals {
            field: "porcentaje_ra_actividad",
            ..
        })
    ));
}

#[tokio::test]
async fn weight_written_with_trailing_zeros_lands_on_100() {
    let today = date(2025, 3, 10);
    let db = mock_db()
        .append_query_results([vec![tipo(1)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(80))]])
        .append_query_results([vec![actividad(3, 20, today)]])
        .append_query_results([vec![edge(8, 3, 1, 20)]])
        .append_query_results([vec![sum_row(pct(100))]])
        .into_connection();

    let created = ActivityService::new(&db)
        .create_for_ra(1, activity_input(20), Some(Decimal::new(20_000_000, 6)), &[], today)
        .await
        .unwrap();

    assert_eq!(created.relaciones[0].porcentaje_ra_actividad, pct(20));
}

#[tokio::test]
async fn weight_update_to_fractional_overflow_is_rejected() {
    let db = mock_db().into_connection();

    let err = ActivityService::new(&db)
        .update_edge_weight(10, Decimal::new(30_000_001, 6))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::TooManyDecimals { .. })
    ));
}

fn percentage_update(porcentaje: i64) -> ActividadUpdate {
    ActividadUpdate {
        nombre_actividad: None,
        descripcion: None,
        porcentaje_actividad: Some(pct(porcentaje)),
        fecha_cierre: None,
    }
}

#[tokio::test]
async fn activity_percentage_change_rechecks_every_linked_ra() {
    let creado = date(2025, 3, 1);
    let db = mock_db()
        .append_query_results([vec![actividad(3, 20, creado)]])
        .append_query_results([vec![edge(8, 3, 1, 40), edge(9, 3, 2, 30)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(60))]])
        .append_query_results([vec![ra(2, 10)]])
        .append_query_results([vec![sum_row(pct(50))]])
        .append_query_results([vec![actividad(3, 35, creado)]])
        .append_query_results([vec![sum_row(pct(100))]])
        .append_query_results([vec![sum_row(pct(80))]])
        .into_connection();

    let updated = ActivityService::new(&db)
        .update_actividad(3, percentage_update(35))
        .await
        .unwrap();
    assert_eq!(updated.porcentaje_actividad, pct(35));

    let log = format!("{:?}", db.into_transaction_log());
    assert_eq!(log.matches("FOR UPDATE").count(), 2);
}

#[tokio::test]
async fn activity_percentage_change_on_overfull_ra_is_rejected() {
    // Links of RA 1 other than this one already add up to 70.
    let creado = date(2025, 3, 1);
    let db = mock_db()
        .append_query_results([vec![actividad(3, 20, creado)]])
        .append_query_results([vec![edge(8, 3, 1, 40)]])
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![sum_row(pct(70))]])
        .into_connection();

    let err = ActivityService::new(&db)
        .update_actividad(3, percentage_update(35))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::BudgetExceeded {
            ra_id: 1,
            ..
        })
    ));
}

#[tokio::test]
async fn indicators_of_unknown_ra_are_not_found() {
    let db = mock_db()
        .append_query_results([Vec::<grading_service::entities::resultado_de_aprendizaje::Model>::new()])
        .into_connection();

    let err = ActivityService::new(&db)
        .list_indicators(42)
        .await
        .unwrap_err();

    assert!(matches!(err, AcademicError::NotFound { entity: "RA", .. }));
}

#[tokio::test]
async fn indicators_of_ra_are_listed() {
    let db = mock_db()
        .append_query_results([vec![ra(1, 10)]])
        .append_query_results([vec![indicator(4, 1), indicator(5, 1)]])
        .into_connection();

    let indicadores = ActivityService::new(&db).list_indicators(1).await.unwrap();

    let ids: Vec<i64> = indicadores.iter().map(|i| i.id_ind).collect();
    assert_eq!(ids, vec![4, 5]);
}
