use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::indicadores_de_logro;
use crate::routes::actividades::dto::ActividadResponse;
use crate::services::{ActivityInput, RaActivityView};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndicadorResponse {
    pub id_ind: i64,
    pub id_ra: i64,
    pub descripcion: Option<String>,
    pub porcentaje_ind: Decimal,
}

impl From<indicadores_de_logro::Model> for IndicadorResponse {
    fn from(ind: indicadores_de_logro::Model) -> Self {
        Self {
            id_ind: ind.id_ind,
            id_ra: ind.id_ra,
            descripcion: ind.descripcion,
            porcentaje_ind: ind.porcentaje_ind,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RaActividadesQuery {
    /// When set, each row carries this enrollment's grade.
    pub id_matricula: Option<i64>,
}

/// An activity as seen from one RA.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RaActividadRow {
    pub id_ra_actividad: i64,
    pub porcentaje_ra_actividad: Decimal,
    pub actividad: ActividadResponse,
    pub tipo_actividad: Option<String>,
    pub indicadores: Vec<IndicadorResponse>,
    pub id_nota: Option<i64>,
    pub nota: Option<Decimal>,
    pub retroalimentacion: Option<String>,
    pub id_ind: Option<i64>,
}

impl From<RaActivityView> for RaActividadRow {
    fn from(view: RaActivityView) -> Self {
        let (id_nota, nota, retroalimentacion, id_ind) = match view.nota {
            Some(n) => (Some(n.id), n.nota_ra_actividad, n.retroalimentacion, n.id_ind),
            None => (None, None, None, None),
        };

        Self {
            id_ra_actividad: view.edge.id_ra_actividad,
            porcentaje_ra_actividad: view.edge.porcentaje_ra_actividad,
            actividad: view.actividad.into(),
            tipo_actividad: view.tipo_actividad,
            indicadores: view.indicadores.into_iter().map(Into::into).collect(),
            id_nota,
            nota,
            retroalimentacion,
            id_ind,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRaActividadRequest {
    pub nombre_actividad: Option<String>,
    pub id_tipo_actividad: Option<i64>,
    pub porcentaje_actividad: Option<Decimal>,
    pub porcentaje_ra_actividad: Option<Decimal>,
    pub descripcion: Option<String>,
    pub fecha_cierre: Option<NaiveDate>,
    /// Indicator ids to tag; ids of other RAs are ignored.
    #[serde(default)]
    pub indicadores: Vec<i64>,
}

impl CreateRaActividadRequest {
    pub fn activity_input(&self) -> ActivityInput {
        ActivityInput {
            nombre_actividad: self.nombre_actividad.clone(),
            id_tipo_actividad: self.id_tipo_actividad,
            porcentaje_actividad: self.porcentaje_actividad,
            descripcion: self.descripcion.clone(),
            fecha_cierre: self.fecha_cierre,
        }
    }
}
