use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::RepoResult;
use crate::entities::{
    actividad, indicadores_de_logro, ra_actividad, ra_actividad_indicador, tipo_actividad,
};

/// Activities, their RA links (`ra_actividad`) and indicator tags.
///
/// Writes to `ra_actividad` go through here only; callers must follow each
/// one with [`crate::ledger::enforce_ra_budget`] before committing.
pub struct ActividadRepository<'a, C> {
    conn: &'a C,
}

pub struct NewActividad {
    pub id_tipo_actividad: i64,
    pub nombre_actividad: String,
    pub descripcion: Option<String>,
    pub porcentaje_actividad: Decimal,
    pub fecha_creacion: NaiveDate,
    pub fecha_cierre: Option<NaiveDate>,
}

pub struct ActividadUpdate {
    pub nombre_actividad: Option<String>,
    pub descripcion: Option<String>,
    pub porcentaje_actividad: Option<Decimal>,
    pub fecha_cierre: Option<NaiveDate>,
}

impl<'a, C> ActividadRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(&self, new: NewActividad) -> RepoResult<actividad::Model> {
        let model = actividad::ActiveModel {
            id_tipo_actividad: Set(new.id_tipo_actividad),
            nombre_actividad: Set(new.nombre_actividad),
            descripcion: Set(new.descripcion),
            porcentaje_actividad: Set(new.porcentaje_actividad),
            fecha_creacion: Set(new.fecha_creacion),
            fecha_cierre: Set(new.fecha_cierre),
            ..Default::default()
        };

        model.insert(self.conn).await
    }

    pub async fn find_by_id(&self, id_actividad: i64) -> RepoResult<Option<actividad::Model>> {
        actividad::Entity::find_by_id(id_actividad).one(self.conn).await
    }

    pub async fn update(
        &self,
        actividad: actividad::Model,
        updates: ActividadUpdate,
    ) -> RepoResult<actividad::Model> {
        let mut active_model: actividad::ActiveModel = actividad.into();

        if let Some(nombre) = updates.nombre_actividad {
            active_model.nombre_actividad = Set(nombre);
        }
        if let Some(descripcion) = updates.descripcion {
            active_model.descripcion = Set(Some(descripcion));
        }
        if let Some(porcentaje) = updates.porcentaje_actividad {
            active_model.porcentaje_actividad = Set(porcentaje);
        }
        if let Some(fecha_cierre) = updates.fecha_cierre {
            active_model.fecha_cierre = Set(Some(fecha_cierre));
        }

        active_model.update(self.conn).await
    }

    pub async fn find_tipo(&self, id_tipo_actividad: i64) -> RepoResult<Option<tipo_actividad::Model>> {
        tipo_actividad::Entity::find_by_id(id_tipo_actividad)
            .one(self.conn)
            .await
    }

    pub async fn create_edge(
        &self,
        id_actividad: i64,
        id_ra: i64,
        porcentaje_ra_actividad: Decimal,
    ) -> RepoResult<ra_actividad::Model> {
        let edge = ra_actividad::ActiveModel {
            id_actividad: Set(id_actividad),
            id_ra: Set(id_ra),
            porcentaje_ra_actividad: Set(porcentaje_ra_actividad),
            ..Default::default()
        };

        edge.insert(self.conn).await
    }

    pub async fn find_edge(&self, id_ra_actividad: i64) -> RepoResult<Option<ra_actividad::Model>> {
        ra_actividad::Entity::find_by_id(id_ra_actividad)
            .one(self.conn)
            .await
    }

    /// Reads the link with `FOR SHARE` so it cannot be re-pointed to another
    /// RA until the surrounding transaction ends.
    pub async fn find_edge_for_share(
        &self,
        id_ra_actividad: i64,
    ) -> RepoResult<Option<ra_actividad::Model>> {
        ra_actividad::Entity::find_by_id(id_ra_actividad)
            .lock_shared()
            .one(self.conn)
            .await
    }

    pub async fn update_edge_weight(
        &self,
        edge: ra_actividad::Model,
        porcentaje_ra_actividad: Decimal,
    ) -> RepoResult<ra_actividad::Model> {
        let mut active_model: ra_actividad::ActiveModel = edge.into();
        active_model.porcentaje_ra_actividad = Set(porcentaje_ra_actividad);
        active_model.update(self.conn).await
    }

    pub async fn edges_of_actividad(&self, id_actividad: i64) -> RepoResult<Vec<ra_actividad::Model>> {
        ra_actividad::Entity::find()
            .filter(ra_actividad::Column::IdActividad.eq(id_actividad))
            .order_by_asc(ra_actividad::Column::IdRa)
            .all(self.conn)
            .await
    }

    /// Links of an RA together with their activity.
    pub async fn edges_of_ra(
        &self,
        id_ra: i64,
    ) -> RepoResult<Vec<(ra_actividad::Model, Option<actividad::Model>)>> {
        ra_actividad::Entity::find()
            .filter(ra_actividad::Column::IdRa.eq(id_ra))
            .find_also_related(actividad::Entity)
            .order_by_asc(ra_actividad::Column::IdRaActividad)
            .all(self.conn)
            .await
    }

    /// Links of every RA of an asignatura, with their activity.
    pub async fn edges_of_asignatura(
        &self,
        id_asignatura: i64,
    ) -> RepoResult<Vec<(ra_actividad::Model, Option<actividad::Model>)>> {
        use crate::entities::resultado_de_aprendizaje;

        ra_actividad::Entity::find()
            .inner_join(resultado_de_aprendizaje::Entity)
            .filter(resultado_de_aprendizaje::Column::IdAsignatura.eq(id_asignatura))
            .find_also_related(actividad::Entity)
            .order_by_asc(ra_actividad::Column::IdRaActividad)
            .all(self.conn)
            .await
    }

    pub async fn tipos(&self, ids: &[i64]) -> RepoResult<Vec<tipo_actividad::Model>> {
        tipo_actividad::Entity::find()
            .filter(tipo_actividad::Column::IdTipoActividad.is_in(ids.iter().copied()))
            .all(self.conn)
            .await
    }

    /// Tags a link with indicators. Pairs that already exist are skipped.
    pub async fn tag_indicators(&self, id_ra_actividad: i64, indicator_ids: &[i64]) -> RepoResult<()> {
        if indicator_ids.is_empty() {
            return Ok(());
        }

        let rows = indicator_ids.iter().map(|id_ind| ra_actividad_indicador::ActiveModel {
            id_ra_actividad: Set(id_ra_actividad),
            id_ind: Set(*id_ind),
            ..Default::default()
        });

        ra_actividad_indicador::Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    ra_actividad_indicador::Column::IdRaActividad,
                    ra_actividad_indicador::Column::IdInd,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(self.conn)
            .await?;

        Ok(())
    }

    /// Indicator tags of the given links.
    pub async fn indicator_tags(
        &self,
        edge_ids: &[i64],
    ) -> RepoResult<Vec<(ra_actividad_indicador::Model, Option<indicadores_de_logro::Model>)>> {
        if edge_ids.is_empty() {
            return Ok(Vec::new());
        }

        ra_actividad_indicador::Entity::find()
            .filter(ra_actividad_indicador::Column::IdRaActividad.is_in(edge_ids.iter().copied()))
            .find_also_related(indicadores_de_logro::Entity)
            .order_by_asc(ra_actividad_indicador::Column::IdInd)
            .all(self.conn)
            .await
    }
}
