pub mod activity_service;
pub mod grade_service;
pub mod notification_service;
pub mod report_service;

pub use activity_service::{ActivityInput, ActivityService, CreatedActivity, RaActivityView, RaLink};
pub use grade_service::{GradeInput, GradeRecord, GradeService};
pub use notification_service::{IndicatorAverage, Notification, NotificationKind, NotificationService};
pub use report_service::{AsignaturaReport, BudgetReport, RaReport, ReportService};
