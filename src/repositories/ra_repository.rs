use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use super::RepoResult;
use crate::entities::{asignatura, indicadores_de_logro, resultado_de_aprendizaje};

/// Learning outcomes (RA), their indicators and owning asignatura.
pub struct RaRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C> RaRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, ra_id: i64) -> RepoResult<Option<resultado_de_aprendizaje::Model>> {
        let ra = resultado_de_aprendizaje::Entity::find_by_id(ra_id)
            .one(self.conn)
            .await?;
        Ok(ra)
    }

    /// RAs whose id is in `ra_ids`, ordered by id.
    pub async fn find_many(&self, ra_ids: &[i64]) -> RepoResult<Vec<resultado_de_aprendizaje::Model>> {
        let ras = resultado_de_aprendizaje::Entity::find()
            .filter(resultado_de_aprendizaje::Column::IdRa.is_in(ra_ids.iter().copied()))
            .order_by_asc(resultado_de_aprendizaje::Column::IdRa)
            .all(self.conn)
            .await?;
        Ok(ras)
    }

    pub async fn find_by_asignatura(
        &self,
        asignatura_id: i64,
    ) -> RepoResult<Vec<resultado_de_aprendizaje::Model>> {
        let ras = resultado_de_aprendizaje::Entity::find()
            .filter(resultado_de_aprendizaje::Column::IdAsignatura.eq(asignatura_id))
            .order_by_asc(resultado_de_aprendizaje::Column::IdRa)
            .all(self.conn)
            .await?;
        Ok(ras)
    }

    pub async fn indicators_of(&self, ra_id: i64) -> RepoResult<Vec<indicadores_de_logro::Model>> {
        let indicators = indicadores_de_logro::Entity::find()
            .filter(indicadores_de_logro::Column::IdRa.eq(ra_id))
            .order_by_asc(indicadores_de_logro::Column::IdInd)
            .all(self.conn)
            .await?;
        Ok(indicators)
    }

    /// All indicators of every RA of an asignatura.
    pub async fn indicators_of_asignatura(
        &self,
        asignatura_id: i64,
    ) -> RepoResult<Vec<indicadores_de_logro::Model>> {
        let indicators = indicadores_de_logro::Entity::find()
            .inner_join(resultado_de_aprendizaje::Entity)
            .filter(resultado_de_aprendizaje::Column::IdAsignatura.eq(asignatura_id))
            .order_by_asc(indicadores_de_logro::Column::IdInd)
            .all(self.conn)
            .await?;
        Ok(indicators)
    }

    pub async fn find_indicator(&self, id_ind: i64) -> RepoResult<Option<indicadores_de_logro::Model>> {
        let indicator = indicadores_de_logro::Entity::find_by_id(id_ind)
            .one(self.conn)
            .await?;
        Ok(indicator)
    }

    pub async fn find_asignatura_by_codigo(
        &self,
        codigo_asignatura: &str,
    ) -> RepoResult<Option<asignatura::Model>> {
        let asignatura = asignatura::Entity::find()
            .filter(asignatura::Column::CodigoAsignatura.eq(codigo_asignatura))
            .one(self.conn)
            .await?;
        Ok(asignatura)
    }

    pub async fn find_asignatura(&self, id_asignatura: i64) -> RepoResult<Option<asignatura::Model>> {
        asignatura::Entity::find_by_id(id_asignatura).one(self.conn).await
    }
}
