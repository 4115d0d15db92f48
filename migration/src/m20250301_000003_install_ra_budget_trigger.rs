use sea_orm_migration::prelude::*;

use crate::RA_BUDGET_VIOLATION_TAG;

/// Storage-side mirror of the RA budget rule: the activity weights linked to
/// one RA must not add up to more than 100%.
///
/// Earlier schema revisions enforced "exactly 100" under other trigger and
/// function names. Those are dropped here so that only one rule stays active.
/// Every statement runs inside the migration transaction, so concurrent
/// writers either see the old trigger or the new one, never neither.
#[derive(DeriveMigrationName)]
pub struct Migration;

const DROP_LEGACY_TRIGGERS: &str = r#"
DO $$
DECLARE r record;
BEGIN
  FOR r IN (
    SELECT tgname FROM pg_trigger
    WHERE tgrelid = 'ra_actividad'::regclass
      AND NOT tgisinternal
      AND (tgname ILIKE '%sum_acts_por_ra%' OR tgname = 'chk_sum_acts_por_ra_aiud')
  ) LOOP
    EXECUTE format('DROP TRIGGER IF EXISTS %I ON ra_actividad', r.tgname);
  END LOOP;
END $$;

DROP FUNCTION IF EXISTS public.trg_check_sum_acts_por_ra() CASCADE;
DROP FUNCTION IF EXISTS public.check_sum_acts_por_ra() CASCADE;
"#;

fn install_sql() -> String {
    format!(
        r#"
CREATE OR REPLACE FUNCTION public.check_ra_actividad_budget()
RETURNS trigger AS $$
DECLARE
  total numeric := 0;
BEGIN
  -- AFTER ROW: NEW is already part of the table, nothing to add on top
  SELECT COALESCE(SUM(porcentaje_ra_actividad), 0)
    INTO total
  FROM ra_actividad
  WHERE id_ra = NEW.id_ra;

  IF total >= 100.000001 THEN
    RAISE EXCEPTION '{tag}: RA % total %', NEW.id_ra, total
      USING ERRCODE = 'check_violation';
  END IF;

  RETURN NEW;
END;
$$ LANGUAGE plpgsql;

DROP TRIGGER IF EXISTS trg_ra_actividad_budget ON ra_actividad;

CREATE TRIGGER trg_ra_actividad_budget
AFTER INSERT OR UPDATE OF id_ra, porcentaje_ra_actividad ON ra_actividad
FOR EACH ROW
EXECUTE FUNCTION public.check_ra_actividad_budget();
"#,
        tag = RA_BUDGET_VIOLATION_TAG
    )
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(DROP_LEGACY_TRIGGERS).await?;
        db.execute_unprepared(&install_sql()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS trg_ra_actividad_budget ON ra_actividad;
                DROP FUNCTION IF EXISTS public.check_ra_actividad_budget();
                "#,
            )
            .await?;

        Ok(())
    }
}
