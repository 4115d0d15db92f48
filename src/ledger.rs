//! Running sums of weighted percentages, read inside the caller's transaction.

use sea_orm::prelude::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::budget;
use crate::entities::{indicadores_de_logro, ra_actividad, resultado_de_aprendizaje};
use crate::errors::{AcademicError, AcademicResult};

/// Sum of `porcentaje_ra_actividad` over the links of `ra_id`, optionally
/// leaving one link out (the one being replaced by an update).
pub async fn current_sum<C>(
    conn: &C,
    ra_id: i64,
    exclude_edge_id: Option<i64>,
) -> Result<Decimal, DbErr>
where
    C: ConnectionTrait,
{
    let mut query = ra_actividad::Entity::find()
        .select_only()
        .column_as(Expr::col(ra_actividad::Column::PorcentajeRaActividad).sum(), "suma")
        .filter(ra_actividad::Column::IdRa.eq(ra_id));

    if let Some(edge_id) = exclude_edge_id {
        query = query.filter(ra_actividad::Column::IdRaActividad.ne(edge_id));
    }

    let suma: Option<Option<Decimal>> = query.into_tuple().one(conn).await?;
    Ok(suma.flatten().unwrap_or(Decimal::ZERO))
}

/// Sum of `porcentaje_ind` over the indicators of `ra_id`.
pub async fn indicator_sum<C>(conn: &C, ra_id: i64) -> Result<Decimal, DbErr>
where
    C: ConnectionTrait,
{
    let suma: Option<Option<Decimal>> = indicadores_de_logro::Entity::find()
        .select_only()
        .column_as(Expr::col(indicadores_de_logro::Column::PorcentajeInd).sum(), "suma")
        .filter(indicadores_de_logro::Column::IdRa.eq(ra_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(suma.flatten().unwrap_or(Decimal::ZERO))
}

/// Sum of `porcentaje_ra` over the RAs of an asignatura.
pub async fn ra_sum<C>(conn: &C, asignatura_id: i64) -> Result<Decimal, DbErr>
where
    C: ConnectionTrait,
{
    let suma: Option<Option<Decimal>> = resultado_de_aprendizaje::Entity::find()
        .select_only()
        .column_as(Expr::col(resultado_de_aprendizaje::Column::PorcentajeRa).sum(), "suma")
        .filter(resultado_de_aprendizaje::Column::IdAsignatura.eq(asignatura_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(suma.flatten().unwrap_or(Decimal::ZERO))
}

/// Takes the row lock (`SELECT ... FOR UPDATE`) that serializes budget
/// check-then-write sequences on one RA. Writers on other RAs are not blocked.
pub async fn lock_ra<C>(conn: &C, ra_id: i64) -> AcademicResult<resultado_de_aprendizaje::Model>
where
    C: ConnectionTrait,
{
    resultado_de_aprendizaje::Entity::find_by_id(ra_id)
        .lock_exclusive()
        .one(conn)
        .await?
        .ok_or_else(|| AcademicError::not_found("RA", ra_id))
}

/// Re-asserts the budget of `ra_id` after a write, inside the same
/// transaction. Every code path that inserts or updates `ra_actividad` calls
/// this before committing. Failing here means the service-level validation was
/// skipped, so it is reported as [`AcademicError::ConflictFatal`].
pub async fn enforce_ra_budget<C>(conn: &C, ra_id: i64) -> AcademicResult<Decimal>
where
    C: ConnectionTrait,
{
    let total = current_sum(conn, ra_id, None).await?;

    if !budget::within_budget(total) {
        tracing::error!(ra_id, %total, "RA budget invariant violated after write");
        return Err(AcademicError::ConflictFatal(format!(
            "RA {ra_id} total {total} exceeds 100%"
        )));
    }

    Ok(total)
}
