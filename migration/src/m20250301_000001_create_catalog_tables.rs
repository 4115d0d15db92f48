use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TipoActividad::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TipoActividad::IdTipoActividad)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TipoActividad::Descripcion)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Estudiante::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Estudiante::IdEstudiante)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Estudiante::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Estudiante::Apellido).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Estudiante::CodigoEstudiante)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Estudiante::Correo)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PeriodoAcademico::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PeriodoAcademico::IdPeriodo)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PeriodoAcademico::Descripcion)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PeriodoAcademico::FechaInicio).date().not_null())
                    .col(
                        ColumnDef::new(PeriodoAcademico::FechaFinalizacion)
                            .date()
                            .not_null(),
                    )
                    .check(
                        Expr::col(PeriodoAcademico::FechaFinalizacion)
                            .gte(Expr::col(PeriodoAcademico::FechaInicio)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Asignatura::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Asignatura::IdAsignatura)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Asignatura::Nombre).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Asignatura::CodigoAsignatura)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Asignatura::Grupo).string_len(20).null())
                    .to_owned(),
            )
            .await?;

        // Activity types used by the instructor UI
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO "tipo_actividad" ("descripcion")
                VALUES ('Examen'), ('Taller'), ('Proyecto'), ('Quiz'), ('Exposicion')
                ON CONFLICT ("descripcion") DO NOTHING
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asignatura::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(PeriodoAcademico::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Estudiante::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(TipoActividad::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum TipoActividad {
    Table,
    IdTipoActividad,
    Descripcion,
}

#[derive(DeriveIden)]
pub enum Estudiante {
    Table,
    IdEstudiante,
    Nombre,
    Apellido,
    CodigoEstudiante,
    Correo,
}

#[derive(DeriveIden)]
pub enum PeriodoAcademico {
    Table,
    IdPeriodo,
    Descripcion,
    FechaInicio,
    FechaFinalizacion,
}

#[derive(DeriveIden)]
pub enum Asignatura {
    Table,
    IdAsignatura,
    Nombre,
    CodigoAsignatura,
    Grupo,
}
