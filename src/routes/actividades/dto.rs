use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{actividad, ra_actividad};
use crate::repositories::ActividadUpdate;
use crate::services::{ActivityInput, CreatedActivity, RaLink};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActividadResponse {
    pub id_actividad: i64,
    pub id_tipo_actividad: i64,
    pub nombre_actividad: String,
    pub descripcion: Option<String>,
    pub porcentaje_actividad: Decimal,
    pub fecha_creacion: NaiveDate,
    pub fecha_cierre: Option<NaiveDate>,
}

impl From<actividad::Model> for ActividadResponse {
    fn from(a: actividad::Model) -> Self {
        Self {
            id_actividad: a.id_actividad,
            id_tipo_actividad: a.id_tipo_actividad,
            nombre_actividad: a.nombre_actividad,
            descripcion: a.descripcion,
            porcentaje_actividad: a.porcentaje_actividad,
            fecha_creacion: a.fecha_creacion,
            fecha_cierre: a.fecha_cierre,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RaActividadResponse {
    pub id_ra_actividad: i64,
    pub id_actividad: i64,
    pub id_ra: i64,
    pub porcentaje_ra_actividad: Decimal,
}

impl From<ra_actividad::Model> for RaActividadResponse {
    fn from(e: ra_actividad::Model) -> Self {
        Self {
            id_ra_actividad: e.id_ra_actividad,
            id_actividad: e.id_actividad,
            id_ra: e.id_ra,
            porcentaje_ra_actividad: e.porcentaje_ra_actividad,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedActividadResponse {
    pub actividad: ActividadResponse,
    pub relaciones: Vec<RaActividadResponse>,
}

impl From<CreatedActivity> for CreatedActividadResponse {
    fn from(created: CreatedActivity) -> Self {
        Self {
            actividad: created.actividad.into(),
            relaciones: created.relaciones.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct RaLinkRequest {
    pub ra_id: i64,
    pub porcentaje_ra_actividad: Decimal,
}

/// One activity linked to several RAs of the same asignatura.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMultiActividadRequest {
    pub nombre_actividad: Option<String>,
    pub id_tipo_actividad: Option<i64>,
    pub porcentaje_actividad: Option<Decimal>,
    pub descripcion: Option<String>,
    pub fecha_cierre: Option<NaiveDate>,
    #[serde(default)]
    pub ras: Vec<RaLinkRequest>,
}

impl CreateMultiActividadRequest {
    pub fn into_parts(self) -> (ActivityInput, Vec<RaLink>) {
        let links = self
            .ras
            .iter()
            .map(|r| RaLink {
                ra_id: r.ra_id,
                porcentaje_ra_actividad: r.porcentaje_ra_actividad,
            })
            .collect();
        let input = ActivityInput {
            nombre_actividad: self.nombre_actividad,
            id_tipo_actividad: self.id_tipo_actividad,
            porcentaje_actividad: self.porcentaje_actividad,
            descripcion: self.descripcion,
            fecha_cierre: self.fecha_cierre,
        };
        (input, links)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateActividadRequest {
    pub nombre_actividad: Option<String>,
    pub descripcion: Option<String>,
    pub porcentaje_actividad: Option<Decimal>,
    pub fecha_cierre: Option<NaiveDate>,
}

impl From<UpdateActividadRequest> for ActividadUpdate {
    fn from(req: UpdateActividadRequest) -> Self {
        Self {
            nombre_actividad: req.nombre_actividad,
            descripcion: req.descripcion,
            porcentaje_actividad: req.porcentaje_actividad,
            fecha_cierre: req.fecha_cierre,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateRaActividadRequest {
    pub porcentaje_ra_actividad: Option<Decimal>,
}
