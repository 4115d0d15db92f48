use sea_orm::prelude::Decimal;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::RepoResult;
use crate::entities::{matricula, notas_actividad};

/// Enrollments (`matricula`) and activity grades (`notas_actividad`).
pub struct GradeRepository<'a, C> {
    conn: &'a C,
}

/// Values written by a grade upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeValues {
    pub nota_ra_actividad: Option<Decimal>,
    pub retroalimentacion: Option<String>,
    pub id_ind: Option<i64>,
}

impl<'a, C> GradeRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Reads the enrollment with `FOR UPDATE`, serializing grade writes of one
    /// enrollment so two first recordings of the same link cannot both insert.
    pub async fn find_matricula_for_update(
        &self,
        id_matricula: i64,
    ) -> RepoResult<Option<matricula::Model>> {
        matricula::Entity::find_by_id(id_matricula)
            .lock_exclusive()
            .one(self.conn)
            .await
    }

    /// Most recent enrollment of a student in an asignatura.
    pub async fn latest_matricula(
        &self,
        id_asignatura: i64,
        id_estudiante: i64,
    ) -> RepoResult<Option<matricula::Model>> {
        matricula::Entity::find()
            .filter(matricula::Column::IdAsignatura.eq(id_asignatura))
            .filter(matricula::Column::IdEstudiante.eq(id_estudiante))
            .order_by_desc(matricula::Column::IdMatricula)
            .one(self.conn)
            .await
    }

    pub async fn matriculas_of_estudiante(&self, id_estudiante: i64) -> RepoResult<Vec<matricula::Model>> {
        matricula::Entity::find()
            .filter(matricula::Column::IdEstudiante.eq(id_estudiante))
            .order_by_asc(matricula::Column::IdMatricula)
            .all(self.conn)
            .await
    }

    pub async fn find_grade(
        &self,
        id_matricula: i64,
        id_ra_actividad: i64,
    ) -> RepoResult<Option<notas_actividad::Model>> {
        notas_actividad::Entity::find()
            .filter(notas_actividad::Column::IdMatricula.eq(id_matricula))
            .filter(notas_actividad::Column::IdRaActividad.eq(id_ra_actividad))
            .one(self.conn)
            .await
    }

    pub async fn grades_of_matricula(&self, id_matricula: i64) -> RepoResult<Vec<notas_actividad::Model>> {
        notas_actividad::Entity::find()
            .filter(notas_actividad::Column::IdMatricula.eq(id_matricula))
            .all(self.conn)
            .await
    }

    pub async fn create_grade(
        &self,
        id_matricula: i64,
        id_ra_actividad: i64,
        values: GradeValues,
    ) -> RepoResult<notas_actividad::Model> {
        let model = notas_actividad::ActiveModel {
            id_matricula: Set(id_matricula),
            id_ra_actividad: Set(id_ra_actividad),
            nota_ra_actividad: Set(values.nota_ra_actividad),
            retroalimentacion: Set(values.retroalimentacion),
            id_ind: Set(values.id_ind),
            ..Default::default()
        };

        model.insert(self.conn).await
    }

    pub async fn update_grade(
        &self,
        existing: notas_actividad::Model,
        values: GradeValues,
    ) -> RepoResult<notas_actividad::Model> {
        let mut active_model: notas_actividad::ActiveModel = existing.into();
        active_model.nota_ra_actividad = Set(values.nota_ra_actividad);
        active_model.retroalimentacion = Set(values.retroalimentacion);
        active_model.id_ind = Set(values.id_ind);
        active_model.update(self.conn).await
    }

    /// Average grade of an enrollment for one indicator; `None` without grades.
    pub async fn average_for_indicator(
        &self,
        id_matricula: i64,
        id_ind: i64,
    ) -> RepoResult<Option<Decimal>> {
        let avg: Option<Option<Decimal>> = notas_actividad::Entity::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col(notas_actividad::Column::NotaRaActividad))),
                "avg_nota",
            )
            .filter(notas_actividad::Column::IdMatricula.eq(id_matricula))
            .filter(notas_actividad::Column::IdInd.eq(id_ind))
            .into_tuple()
            .one(self.conn)
            .await?;
        Ok(avg.flatten())
    }
}
