use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;

use crate::config::{
    LOW_AVERAGE_THRESHOLD, MAX_NOTIFICATIONS, MAX_NOTIFICATIONS_PER_KIND, NOTIFICATION_WINDOW_DAYS,
};
use crate::entities::{actividad, asignatura, indicadores_de_logro, notas_actividad};
use crate::errors::{AcademicError, AcademicResult};
use crate::repositories::{ActividadRepository, GradeRepository, RaRepository};

/// Grades are on a 0-5 scale; percentages multiply by this.
const GRADE_TO_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorAverage {
    pub indicador: indicadores_de_logro::Model,
    pub avg_nota: Option<Decimal>,
    pub avg_pct: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Average grade per indicator of the asignatura for the student's most
    /// recent enrollment. Not being enrolled yields an empty list.
    pub async fn indicator_averages(
        &self,
        codigo_asignatura: &str,
        id_estudiante: i64,
    ) -> AcademicResult<Vec<IndicatorAverage>> {
        let ras = RaRepository::new(self.db);
        let asignatura = ras
            .find_asignatura_by_codigo(codigo_asignatura)
            .await?
            .ok_or_else(|| AcademicError::not_found("asignatura", codigo_asignatura))?;

        let grades = GradeRepository::new(self.db);
        let Some(matricula) = grades
            .latest_matricula(asignatura.id_asignatura, id_estudiante)
            .await?
        else {
            return Ok(Vec::new());
        };

        let mut rows = Vec::new();
        for indicador in ras.indicators_of_asignatura(asignatura.id_asignatura).await? {
            let avg_nota = grades
                .average_for_indicator(matricula.id_matricula, indicador.id_ind)
                .await?;
            rows.push(indicator_average(indicador, avg_nota));
        }

        Ok(rows)
    }

    /// Activities closing soon without a grade, and courses with a low
    /// average, over every enrollment of the student.
    pub async fn notifications(
        &self,
        id_estudiante: i64,
        today: NaiveDate,
    ) -> AcademicResult<Vec<Notification>> {
        let grades = GradeRepository::new(self.db);
        let ras = RaRepository::new(self.db);
        let actividades = ActividadRepository::new(self.db);

        let mut due_soon = Vec::new();
        let mut low = Vec::new();

        for matricula in grades.matriculas_of_estudiante(id_estudiante).await? {
            let Some(asignatura) = ras.find_asignatura(matricula.id_asignatura).await? else {
                tracing::warn!(
                    id_matricula = matricula.id_matricula,
                    "enrollment references a missing asignatura"
                );
                continue;
            };

            let notas = grades.grades_of_matricula(matricula.id_matricula).await?;
            let edges = actividades
                .edges_of_asignatura(matricula.id_asignatura)
                .await?;

            let graded: HashMap<i64, &notas_actividad::Model> =
                notas.iter().map(|n| (n.id_ra_actividad, n)).collect();
            for (edge, actividad) in &edges {
                let Some(actividad) = actividad else { continue };
                let nota = graded.get(&edge.id_ra_actividad).copied();
                if let Some(notice) = due_soon_notice(actividad, &asignatura, nota, today) {
                    due_soon.push(notice);
                }
            }

            if let Some(notice) = low_average_notice(&asignatura, &notas) {
                low.push(notice);
            }
        }

        Ok(merge_notifications(due_soon, low))
    }
}

pub fn indicator_average(
    indicador: indicadores_de_logro::Model,
    avg_nota: Option<Decimal>,
) -> IndicatorAverage {
    IndicatorAverage {
        indicador,
        avg_pct: avg_nota.map(|avg| avg * GRADE_TO_PERCENT),
        avg_nota,
    }
}

/// Mean of the non-null grades, `None` when there are none.
pub fn average_grade(notas: &[notas_actividad::Model]) -> Option<Decimal> {
    let values: Vec<Decimal> = notas.iter().filter_map(|n| n.nota_ra_actividad).collect();
    if values.is_empty() {
        return None;
    }
    let total: Decimal = values.iter().sum();
    Some(total / Decimal::from(values.len()))
}

/// Warns about an activity that closes within the notification window and
/// has not been graded yet.
pub fn due_soon_notice(
    actividad: &actividad::Model,
    asignatura: &asignatura::Model,
    nota: Option<&notas_actividad::Model>,
    today: NaiveDate,
) -> Option<Notification> {
    let fecha_cierre = actividad.fecha_cierre?;
    let limit = today + Duration::days(NOTIFICATION_WINDOW_DAYS);
    let graded = nota.is_some_and(|n| n.nota_ra_actividad.is_some());

    if fecha_cierre < today || fecha_cierre > limit || graded {
        return None;
    }

    Some(Notification {
        kind: NotificationKind::Warning,
        text: format!(
            "Actividad \"{}\" de {} vence {}",
            actividad.nombre_actividad, asignatura.nombre, fecha_cierre
        ),
    })
}

pub fn low_average_notice(
    asignatura: &asignatura::Model,
    notas: &[notas_actividad::Model],
) -> Option<Notification> {
    let avg = average_grade(notas)?;
    if avg >= LOW_AVERAGE_THRESHOLD {
        return None;
    }

    Some(Notification {
        kind: NotificationKind::Danger,
        text: format!(
            "Vas bajo en {}: promedio {:.2}/5",
            asignatura.nombre,
            avg.round_dp(2)
        ),
    })
}

/// Due-soon notices first, then low averages; each kind and the total capped.
pub fn merge_notifications(due_soon: Vec<Notification>, low: Vec<Notification>) -> Vec<Notification> {
    due_soon
        .into_iter()
        .take(MAX_NOTIFICATIONS_PER_KIND)
        .chain(low.into_iter().take(MAX_NOTIFICATIONS_PER_KIND))
        .take(MAX_NOTIFICATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn asignatura() -> asignatura::Model {
        asignatura::Model {
            id_asignatura: 1,
            nombre: "Bases de Datos".to_string(),
            codigo_asignatura: "BD-101".to_string(),
            grupo: None,
        }
    }

    fn actividad(fecha_cierre: Option<NaiveDate>) -> actividad::Model {
        actividad::Model {
            id_actividad: 9,
            id_tipo_actividad: 1,
            nombre_actividad: "Parcial 1".to_string(),
            descripcion: None,
            porcentaje_actividad: Decimal::from(30),
            fecha_creacion: date(2025, 3, 1),
            fecha_cierre,
        }
    }

    fn nota(id: i64, value: Option<Decimal>) -> notas_actividad::Model {
        notas_actividad::Model {
            id,
            id_matricula: 1,
            id_ra_actividad: id,
            nota_ra_actividad: value,
            retroalimentacion: None,
            id_ind: None,
        }
    }

    fn notice(kind: NotificationKind, n: usize) -> Vec<Notification> {
        (0..n)
            .map(|i| Notification {
                kind,
                text: format!("{i}"),
            })
            .collect()
    }

    #[test]
    fn ungraded_activity_closing_this_week_is_announced() {
        let today = date(2025, 3, 10);
        let act = actividad(Some(date(2025, 3, 17)));

        let notice = due_soon_notice(&act, &asignatura(), None, today).unwrap();
        assert_eq!(notice.kind, NotificationKind::Warning);
        assert_eq!(
            notice.text,
            "Actividad \"Parcial 1\" de Bases de Datos vence 2025-03-17"
        );

        let pending = nota(1, None);
        assert!(due_soon_notice(&act, &asignatura(), Some(&pending), today).is_some());
    }

    #[test]
    fn graded_past_or_distant_activities_are_skipped() {
        let today = date(2025, 3, 10);
        let graded = nota(1, Some(Decimal::from(4)));

        assert!(due_soon_notice(&actividad(Some(date(2025, 3, 12))), &asignatura(), Some(&graded), today).is_none());
        assert!(due_soon_notice(&actividad(Some(date(2025, 3, 9))), &asignatura(), None, today).is_none());
        assert!(due_soon_notice(&actividad(Some(date(2025, 3, 18))), &asignatura(), None, today).is_none());
        assert!(due_soon_notice(&actividad(None), &asignatura(), None, today).is_none());
    }

    #[test]
    fn average_ignores_missing_grades() {
        let notas = [
            nota(1, Some(Decimal::from(2))),
            nota(2, None),
            nota(3, Some(Decimal::from(3))),
        ];
        assert_eq!(average_grade(&notas), Some(Decimal::new(25, 1)));
        assert_eq!(average_grade(&[nota(1, None)]), None);
    }

    #[test]
    fn low_average_is_flagged_below_three() {
        let low = [nota(1, Some(Decimal::from(2))), nota(2, Some(Decimal::from(3)))];
        let notice = low_average_notice(&asignatura(), &low).unwrap();
        assert_eq!(notice.kind, NotificationKind::Danger);
        assert_eq!(notice.text, "Vas bajo en Bases de Datos: promedio 2.50/5");

        let passing = [nota(1, Some(Decimal::from(3)))];
        assert!(low_average_notice(&asignatura(), &passing).is_none());
    }

    #[test]
    fn notifications_are_capped_per_kind() {
        let merged = merge_notifications(
            notice(NotificationKind::Warning, 15),
            notice(NotificationKind::Danger, 12),
        );
        assert_eq!(merged.len(), 20);
        assert_eq!(merged[9].kind, NotificationKind::Warning);
        assert_eq!(merged[10].kind, NotificationKind::Danger);

        let few = merge_notifications(Vec::new(), notice(NotificationKind::Danger, 2));
        assert_eq!(few.len(), 2);
    }

    #[test]
    fn indicator_average_converts_to_percent() {
        let indicador = indicadores_de_logro::Model {
            id_ind: 1,
            id_ra: 1,
            porcentaje_ind: Decimal::from(50),
            descripcion: None,
        };
        let row = indicator_average(indicador.clone(), Some(Decimal::new(35, 1)));
        assert_eq!(row.avg_pct, Some(Decimal::from(70)));

        let empty = indicator_average(indicador, None);
        assert_eq!(empty.avg_pct, None);
    }
}
