mod common;

use common::*;
use grading_service::errors::{AcademicError, ValidationError};
use grading_service::entities::notas_actividad;
use grading_service::services::{GradeInput, GradeService};
use sea_orm::prelude::Decimal;

fn input(nota: Option<Decimal>, id_ind: Option<i64>) -> GradeInput {
    GradeInput {
        id_matricula: Some(1),
        id_ra_actividad: Some(10),
        nota,
        retroalimentacion: Some("bien".to_string()),
        id_ind,
    }
}

#[tokio::test]
async fn indicator_of_another_ra_is_rejected() {
    let db = mock_db()
        .append_query_results([vec![matricula(1, 1)]])
        .append_query_results([vec![edge(10, 3, 1, 40)]])
        .append_query_results([vec![indicator(5, 2)]])
        .into_connection();

    let err = GradeService::new(&db)
        .record_grade(input(Some(pct(4)), Some(5)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::InconsistentIndicator {
            id_ind: 5,
            indicator_ra: 2,
            edge_ra: 1
        })
    ));
}

#[tokio::test]
async fn first_grade_is_created() {
    let mut stored = nota(99, 1, 10, Some(pct(4)));
    stored.retroalimentacion = Some("bien".to_string());
    stored.id_ind = Some(5);

    let db = mock_db()
        .append_query_results([vec![matricula(1, 1)]])
        .append_query_results([vec![edge(10, 3, 1, 40)]])
        .append_query_results([vec![indicator(5, 1)]])
        .append_query_results([Vec::<notas_actividad::Model>::new()])
        .append_query_results([vec![stored.clone()]])
        .into_connection();

    let record = GradeService::new(&db)
        .record_grade(input(Some(pct(4)), Some(5)))
        .await
        .unwrap();

    assert!(record.created);
    assert_eq!(record.nota, stored);
}

#[tokio::test]
async fn second_grade_updates_in_place() {
    let existing = nota(99, 1, 10, Some(pct(2)));
    let mut updated = existing.clone();
    updated.nota_ra_actividad = Some(Decimal::new(45, 1));
    updated.retroalimentacion = Some("bien".to_string());

    let db = mock_db()
        .append_query_results([vec![matricula(1, 1)]])
        .append_query_results([vec![edge(10, 3, 1, 40)]])
        .append_query_results([vec![existing]])
        .append_query_results([vec![updated.clone()]])
        .into_connection();

    let record = GradeService::new(&db)
        .record_grade(input(Some(Decimal::new(45, 1)), None))
        .await
        .unwrap();

    assert!(!record.created);
    assert_eq!(record.nota.id, 99);
    assert_eq!(record.nota.nota_ra_actividad, Some(Decimal::new(45, 1)));
}

#[tokio::test]
async fn grade_above_five_is_rejected_before_any_query() {
    let db = mock_db().into_connection();

    let err = GradeService::new(&db)
        .record_grade(input(Some(Decimal::new(51, 1)), None))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::GradeOutOfRange { .. })
    ));
}

#[tokio::test]
async fn missing_link_is_not_found() {
    let db = mock_db()
        .append_query_results([vec![matricula(1, 1)]])
        .append_query_results([Vec::<grading_service::entities::ra_actividad::Model>::new()])
        .into_connection();

    let err = GradeService::new(&db)
        .record_grade(input(None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, AcademicError::NotFound { entity: "ra_actividad", .. }));
}

#[tokio::test]
async fn missing_matricula_field_is_reported() {
    let db = mock_db().into_connection();
    let mut payload = input(None, None);
    payload.id_matricula = None;

    let err = GradeService::new(&db).record_grade(payload).await.unwrap_err();

    assert!(matches!(
        err,
        AcademicError::Validation(ValidationError::MissingField("id_matricula"))
    ));
}

#[tokio::test]
async fn enrollment_row_is_locked_before_the_upsert() {
    let db = mock_db()
        .append_query_results([vec![matricula(1, 1)]])
        .append_query_results([vec![edge(10, 3, 1, 40)]])
        .append_query_results([Vec::<notas_actividad::Model>::new()])
        .append_query_results([vec![nota(99, 1, 10, Some(pct(3)))]])
        .into_connection();

    let record = GradeService::new(&db)
        .record_grade(input(Some(pct(3)), None))
        .await
        .unwrap();
    assert!(record.created);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("FOR UPDATE"));
    assert!(log.contains("FOR SHARE"));
}

#[tokio::test]
async fn grade_is_rounded_half_away_from_zero() {
    let db = mock_db()
        .append_query_results([vec![matricula(1, 1)]])
        .append_query_results([vec![edge(10, 3, 1, 40)]])
        .append_query_results([Vec::<notas_actividad::Model>::new()])
        .append_query_results([vec![nota(99, 1, 10, Some(Decimal::new(435, 2)))]])
        .into_connection();

    GradeService::new(&db)
        .record_grade(input(Some(Decimal::new(4_345, 3)), None))
        .await
        .unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("4.35"));
}
