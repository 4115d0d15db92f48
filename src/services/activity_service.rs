use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::budget::{self, EdgeChange};
use crate::entities::{
    actividad, indicadores_de_logro, notas_actividad, ra_actividad, resultado_de_aprendizaje,
};
use crate::errors::{AcademicError, AcademicResult, ValidationError};
use crate::ledger;
use crate::repositories::{
    ActividadRepository, ActividadUpdate, GradeRepository, NewActividad, RaRepository,
};

/// Fields shared by the single-RA and multi-RA activity creation paths.
#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub nombre_actividad: Option<String>,
    pub id_tipo_actividad: Option<i64>,
    pub porcentaje_actividad: Option<Decimal>,
    pub descripcion: Option<String>,
    pub fecha_cierre: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaLink {
    pub ra_id: i64,
    pub porcentaje_ra_actividad: Decimal,
}

#[derive(Debug, Clone)]
pub struct CreatedActivity {
    pub actividad: actividad::Model,
    pub relaciones: Vec<ra_actividad::Model>,
}

/// One row of the RA activity listing.
#[derive(Debug, Clone)]
pub struct RaActivityView {
    pub edge: ra_actividad::Model,
    pub actividad: actividad::Model,
    pub tipo_actividad: Option<String>,
    pub indicadores: Vec<indicadores_de_logro::Model>,
    pub nota: Option<notas_actividad::Model>,
}

/// Validated form of [`ActivityInput`].
struct ValidActivity {
    nombre_actividad: String,
    id_tipo_actividad: i64,
    porcentaje_actividad: Decimal,
    descripcion: Option<String>,
    fecha_cierre: Option<NaiveDate>,
}

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an activity and links it to one RA, tagging the given
    /// indicators. Indicator ids that do not belong to the RA are ignored.
    pub async fn create_for_ra(
        &self,
        ra_id: i64,
        input: ActivityInput,
        porcentaje_ra_actividad: Option<Decimal>,
        indicadores: &[i64],
        today: NaiveDate,
    ) -> AcademicResult<CreatedActivity> {
        let activity = validate_activity(input, today)?;
        let weight = budget::normalize_percentage(
            "porcentaje_ra_actividad",
            porcentaje_ra_actividad.ok_or(ValidationError::MissingField("porcentaje_ra_actividad"))?,
        )?;

        let txn = self.db.begin().await?;
        let actividades = ActividadRepository::new(&txn);

        ensure_tipo_exists(&actividades, activity.id_tipo_actividad).await?;

        ledger::lock_ra(&txn, ra_id).await?;
        let current = ledger::current_sum(&txn, ra_id, None).await?;
        budget::validate_insert(ra_id, current, weight).into_result()?;

        let actividad = actividades
            .create(activity.into_new(today))
            .await?;
        let edge = actividades
            .create_edge(actividad.id_actividad, ra_id, weight)
            .await?;
        ledger::enforce_ra_budget(&txn, ra_id).await?;

        if !indicadores.is_empty() {
            let available = RaRepository::new(&txn).indicators_of(ra_id).await?;
            let tagged = filter_ra_indicators(indicadores, &available);
            actividades.tag_indicators(edge.id_ra_actividad, &tagged).await?;
        }

        txn.commit().await?;

        tracing::info!(
            ra_id,
            id_actividad = actividad.id_actividad,
            id_ra_actividad = edge.id_ra_actividad,
            %weight,
            "activity linked to RA"
        );

        Ok(CreatedActivity {
            actividad,
            relaciones: vec![edge],
        })
    }

    /// Creates one activity linked to several RAs of the same asignatura.
    /// Either every link is written or none is.
    pub async fn create_multi(
        &self,
        input: ActivityInput,
        links: &[RaLink],
        today: NaiveDate,
    ) -> AcademicResult<CreatedActivity> {
        let activity = validate_activity(input, today)?;
        let links = validate_links(links)?;

        let txn = self.db.begin().await?;
        let actividades = ActividadRepository::new(&txn);

        ensure_tipo_exists(&actividades, activity.id_tipo_actividad).await?;

        // Ascending id order keeps concurrent multi-RA writers from deadlocking.
        let mut ras = Vec::with_capacity(links.len());
        for link in &links {
            ras.push(ledger::lock_ra(&txn, link.ra_id).await?);
        }
        single_asignatura(&ras)?;

        for link in &links {
            let current = ledger::current_sum(&txn, link.ra_id, None).await?;
            budget::validate_insert(link.ra_id, current, link.porcentaje_ra_actividad)
                .into_result()?;
        }

        let actividad = actividades.create(activity.into_new(today)).await?;

        let mut relaciones = Vec::with_capacity(links.len());
        for link in &links {
            let edge = actividades
                .create_edge(actividad.id_actividad, link.ra_id, link.porcentaje_ra_actividad)
                .await?;
            relaciones.push(edge);
        }
        for link in &links {
            ledger::enforce_ra_budget(&txn, link.ra_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            id_actividad = actividad.id_actividad,
            links = relaciones.len(),
            "activity linked to RAs"
        );

        Ok(CreatedActivity {
            actividad,
            relaciones,
        })
    }

    /// Changes the weight of an existing link. The link's previous weight is
    /// left out of the running sum before the new one is added.
    pub async fn update_edge_weight(
        &self,
        id_ra_actividad: i64,
        porcentaje_ra_actividad: Decimal,
    ) -> AcademicResult<ra_actividad::Model> {
        let weight = budget::normalize_percentage("porcentaje_ra_actividad", porcentaje_ra_actividad)?;

        let txn = self.db.begin().await?;
        let actividades = ActividadRepository::new(&txn);

        let edge = actividades
            .find_edge(id_ra_actividad)
            .await?
            .ok_or_else(|| AcademicError::not_found("ra_actividad", id_ra_actividad))?;

        ledger::lock_ra(&txn, edge.id_ra).await?;

        let change = EdgeChange::weight_only(edge.porcentaje_ra_actividad, weight);
        if !change.needs_revalidation() {
            txn.commit().await?;
            return Ok(edge);
        }

        let without_edge = ledger::current_sum(&txn, edge.id_ra, Some(edge.id_ra_actividad)).await?;
        budget::validate_update(edge.id_ra, without_edge, &change).into_result()?;

        let ra_id = edge.id_ra;
        let updated = actividades.update_edge_weight(edge, weight).await?;
        ledger::enforce_ra_budget(&txn, ra_id).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Updates an activity. When its own percentage changes, every RA it is
    /// linked to is re-validated under lock.
    pub async fn update_actividad(
        &self,
        id_actividad: i64,
        mut updates: ActividadUpdate,
    ) -> AcademicResult<actividad::Model> {
        if let Some(porcentaje) = updates.porcentaje_actividad {
            updates.porcentaje_actividad =
                Some(budget::normalize_percentage("porcentaje_actividad", porcentaje)?);
        }

        let txn = self.db.begin().await?;
        let actividades = ActividadRepository::new(&txn);

        let current = actividades
            .find_by_id(id_actividad)
            .await?
            .ok_or_else(|| AcademicError::not_found("actividad", id_actividad))?;

        if let Some(fecha_cierre) = updates.fecha_cierre {
            validate_close_date_against_creation(fecha_cierre, current.fecha_creacion)?;
        }

        let new_pct = updates
            .porcentaje_actividad
            .unwrap_or(current.porcentaje_actividad);
        let edges = actividades.edges_of_actividad(id_actividad).await?;

        let mut touched = Vec::new();
        for edge in &edges {
            let change = EdgeChange {
                old_weight: edge.porcentaje_ra_actividad,
                new_weight: edge.porcentaje_ra_actividad,
                old_activity_pct: current.porcentaje_actividad,
                new_activity_pct: new_pct,
            };
            if !change.needs_revalidation() {
                continue;
            }
            ledger::lock_ra(&txn, edge.id_ra).await?;
            let without_edge =
                ledger::current_sum(&txn, edge.id_ra, Some(edge.id_ra_actividad)).await?;
            budget::validate_update(edge.id_ra, without_edge, &change).into_result()?;
            touched.push(edge.id_ra);
        }

        let updated = actividades.update(current, updates).await?;
        for ra_id in touched {
            ledger::enforce_ra_budget(&txn, ra_id).await?;
        }

        txn.commit().await?;
        Ok(updated)
    }

    /// Activity links of an RA, with indicator tags and, when `id_matricula`
    /// is given, that enrollment's grade for each link.
    pub async fn list_for_ra(
        &self,
        ra_id: i64,
        id_matricula: Option<i64>,
    ) -> AcademicResult<Vec<RaActivityView>> {
        let ras = RaRepository::new(self.db);
        if ras.find_by_id(ra_id).await?.is_none() {
            return Err(AcademicError::not_found("RA", ra_id));
        }

        let actividades = ActividadRepository::new(self.db);
        let edges = actividades.edges_of_ra(ra_id).await?;

        let tipo_ids: Vec<i64> = edges
            .iter()
            .filter_map(|(_, act)| act.as_ref().map(|a| a.id_tipo_actividad))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let tipos: HashMap<i64, String> = actividades
            .tipos(&tipo_ids)
            .await?
            .into_iter()
            .map(|t| (t.id_tipo_actividad, t.descripcion))
            .collect();

        let edge_ids: Vec<i64> = edges.iter().map(|(e, _)| e.id_ra_actividad).collect();
        let mut tags: HashMap<i64, Vec<indicadores_de_logro::Model>> = HashMap::new();
        for (tag, indicator) in actividades.indicator_tags(&edge_ids).await? {
            if let Some(indicator) = indicator {
                tags.entry(tag.id_ra_actividad).or_default().push(indicator);
            }
        }

        let mut grades: HashMap<i64, notas_actividad::Model> = HashMap::new();
        if let Some(id_matricula) = id_matricula {
            for nota in GradeRepository::new(self.db)
                .grades_of_matricula(id_matricula)
                .await?
            {
                grades.insert(nota.id_ra_actividad, nota);
            }
        }

        let rows = edges
            .into_iter()
            .filter_map(|(edge, actividad)| {
                let actividad = actividad?;
                Some(RaActivityView {
                    tipo_actividad: tipos.get(&actividad.id_tipo_actividad).cloned(),
                    indicadores: tags.remove(&edge.id_ra_actividad).unwrap_or_default(),
                    nota: grades.remove(&edge.id_ra_actividad),
                    actividad,
                    edge,
                })
            })
            .collect();

        Ok(rows)
    }

    pub async fn list_indicators(&self, ra_id: i64) -> AcademicResult<Vec<indicadores_de_logro::Model>> {
        let ras = RaRepository::new(self.db);
        if ras.find_by_id(ra_id).await?.is_none() {
            return Err(AcademicError::not_found("RA", ra_id));
        }
        Ok(ras.indicators_of(ra_id).await?)
    }
}

impl ValidActivity {
    fn into_new(self, today: NaiveDate) -> NewActividad {
        NewActividad {
            id_tipo_actividad: self.id_tipo_actividad,
            nombre_actividad: self.nombre_actividad,
            descripcion: self.descripcion,
            porcentaje_actividad: self.porcentaje_actividad,
            fecha_creacion: today,
            fecha_cierre: self.fecha_cierre,
        }
    }
}

async fn ensure_tipo_exists<C>(
    actividades: &ActividadRepository<'_, C>,
    id_tipo_actividad: i64,
) -> AcademicResult<()>
where
    C: sea_orm::ConnectionTrait,
{
    if actividades.find_tipo(id_tipo_actividad).await?.is_none() {
        return Err(AcademicError::not_found("tipo_actividad", id_tipo_actividad));
    }
    Ok(())
}

fn validate_activity(input: ActivityInput, today: NaiveDate) -> Result<ValidActivity, ValidationError> {
    let nombre_actividad = input
        .nombre_actividad
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::MissingField("nombre_actividad"))?;
    let id_tipo_actividad = input
        .id_tipo_actividad
        .ok_or(ValidationError::MissingField("id_tipo_actividad"))?;
    let porcentaje_actividad = budget::normalize_percentage(
        "porcentaje_actividad",
        input
            .porcentaje_actividad
            .ok_or(ValidationError::MissingField("porcentaje_actividad"))?,
    )?;
    validate_close_date(input.fecha_cierre, today)?;

    Ok(ValidActivity {
        nombre_actividad,
        id_tipo_actividad,
        porcentaje_actividad,
        descripcion: input.descripcion,
        fecha_cierre: input.fecha_cierre,
    })
}

/// A new activity cannot close before the day it is created.
pub fn validate_close_date(fecha_cierre: Option<NaiveDate>, today: NaiveDate) -> Result<(), ValidationError> {
    match fecha_cierre {
        Some(fecha_cierre) if fecha_cierre < today => {
            Err(ValidationError::CloseDateBeforeToday { fecha_cierre, today })
        }
        _ => Ok(()),
    }
}

pub fn validate_close_date_against_creation(
    fecha_cierre: NaiveDate,
    fecha_creacion: NaiveDate,
) -> Result<(), ValidationError> {
    if fecha_cierre < fecha_creacion {
        return Err(ValidationError::CloseDateBeforeCreation {
            fecha_cierre,
            fecha_creacion,
        });
    }
    Ok(())
}

/// Normalizes the requested links and sorts them by RA id.
pub fn validate_links(links: &[RaLink]) -> Result<Vec<RaLink>, ValidationError> {
    if links.is_empty() {
        return Err(ValidationError::EmptyRaList);
    }

    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(links.len());
    for link in links {
        if !seen.insert(link.ra_id) {
            return Err(ValidationError::DuplicateRa { ra_id: link.ra_id });
        }
        normalized.push(RaLink {
            ra_id: link.ra_id,
            porcentaje_ra_actividad: budget::normalize_percentage(
                "porcentaje_ra_actividad",
                link.porcentaje_ra_actividad,
            )?,
        });
    }
    normalized.sort_by_key(|link| link.ra_id);

    Ok(normalized)
}

/// All RAs of one request must belong to a single asignatura.
pub fn single_asignatura(ras: &[resultado_de_aprendizaje::Model]) -> Result<i64, ValidationError> {
    let asignaturas: BTreeSet<i64> = ras.iter().map(|ra| ra.id_asignatura).collect();
    match (asignaturas.first().copied(), asignaturas.len()) {
        (None, _) => Err(ValidationError::EmptyRaList),
        (Some(id_asignatura), 1) => Ok(id_asignatura),
        _ => Err(ValidationError::MixedAsignaturas {
            asignaturas: asignaturas.into_iter().collect(),
        }),
    }
}

/// Keeps the requested indicator ids that belong to the RA, without
/// duplicates, in ascending order.
pub fn filter_ra_indicators(requested: &[i64], available: &[indicadores_de_logro::Model]) -> Vec<i64> {
    let available: HashSet<i64> = available.iter().map(|ind| ind.id_ind).collect();
    requested
        .iter()
        .copied()
        .filter(|id| available.contains(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
