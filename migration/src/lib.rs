pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_catalog_tables;
mod m20250301_000002_create_academic_records;
mod m20250301_000003_install_ra_budget_trigger;

/// Marker embedded in the error raised by the `ra_actividad` budget trigger.
pub const RA_BUDGET_VIOLATION_TAG: &str = "ra_budget_exceeded";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_catalog_tables::Migration),
            Box::new(m20250301_000002_create_academic_records::Migration),
            Box::new(m20250301_000003_install_ra_budget_trigger::Migration),
        ]
    }
}
