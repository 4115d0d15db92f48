use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::{IndicatorAverage, Notification, NotificationKind};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndicatorAverageResponse {
    pub id_ind: i64,
    pub ra_id: i64,
    pub descripcion: Option<String>,
    pub porcentaje_ind: Decimal,
    pub avg_nota: Option<Decimal>,
    /// `avg_nota` on a 0-100 scale.
    pub avg_pct: Option<Decimal>,
}

impl From<IndicatorAverage> for IndicatorAverageResponse {
    fn from(row: IndicatorAverage) -> Self {
        Self {
            id_ind: row.indicador.id_ind,
            ra_id: row.indicador.id_ra,
            descripcion: row.indicador.descripcion,
            porcentaje_ind: row.indicador.porcentaje_ind,
            avg_nota: row.avg_nota,
            avg_pct: row.avg_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKindDto {
    Warning,
    Danger,
}

impl From<NotificationKind> for NotificationKindDto {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Warning => Self::Warning,
            NotificationKind::Danger => Self::Danger,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponse {
    pub kind: NotificationKindDto,
    pub text: String,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            kind: n.kind.into(),
            text: n.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_kind_serializes_lowercase() {
        let body = serde_json::to_value(NotificationResponse {
            kind: NotificationKindDto::Danger,
            text: "Vas bajo".to_string(),
        })
        .unwrap();
        assert_eq!(body["kind"], "danger");
    }
}
