use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_catalog_tables::{
    Asignatura, Estudiante, PeriodoAcademico, TipoActividad,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Learning outcomes (RA) of an asignatura
        manager
            .create_table(
                Table::create()
                    .table(ResultadoDeAprendizaje::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResultadoDeAprendizaje::IdRa)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResultadoDeAprendizaje::IdAsignatura)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResultadoDeAprendizaje::PorcentajeRa)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResultadoDeAprendizaje::Descripcion)
                            .text()
                            .null(),
                    )
                    .check(Expr::col(ResultadoDeAprendizaje::PorcentajeRa).between(0, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ra_asignatura")
                            .from_tbl(ResultadoDeAprendizaje::Table)
                            .from_col(ResultadoDeAprendizaje::IdAsignatura)
                            .to_tbl(Asignatura::Table)
                            .to_col(Asignatura::IdAsignatura)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IndicadoresDeLogro::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IndicadoresDeLogro::IdInd)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IndicadoresDeLogro::IdRa).big_integer().not_null())
                    .col(
                        ColumnDef::new(IndicadoresDeLogro::PorcentajeInd)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(IndicadoresDeLogro::Descripcion).text().null())
                    .check(Expr::col(IndicadoresDeLogro::PorcentajeInd).between(0, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicador_ra")
                            .from_tbl(IndicadoresDeLogro::Table)
                            .from_col(IndicadoresDeLogro::IdRa)
                            .to_tbl(ResultadoDeAprendizaje::Table)
                            .to_col(ResultadoDeAprendizaje::IdRa)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actividad::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actividad::IdActividad)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Actividad::IdTipoActividad)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Actividad::NombreActividad)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Actividad::Descripcion).text().null())
                    .col(
                        ColumnDef::new(Actividad::PorcentajeActividad)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Actividad::FechaCreacion)
                            .date()
                            .not_null()
                            .extra("DEFAULT CURRENT_DATE".to_string()),
                    )
                    .col(ColumnDef::new(Actividad::FechaCierre).date().null())
                    .check(Expr::col(Actividad::PorcentajeActividad).between(0, 100))
                    .check(
                        Expr::col(Actividad::FechaCierre)
                            .is_null()
                            .or(Expr::col(Actividad::FechaCierre)
                                .gte(Expr::col(Actividad::FechaCreacion))),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actividad_tipo")
                            .from_tbl(Actividad::Table)
                            .from_col(Actividad::IdTipoActividad)
                            .to_tbl(TipoActividad::Table)
                            .to_col(TipoActividad::IdTipoActividad)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // RA <-> Actividad edge carrying the per-RA weight
        manager
            .create_table(
                Table::create()
                    .table(RaActividad::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RaActividad::IdRaActividad)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RaActividad::IdActividad).big_integer().not_null())
                    .col(ColumnDef::new(RaActividad::IdRa).big_integer().not_null())
                    .col(
                        ColumnDef::new(RaActividad::PorcentajeRaActividad)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .check(Expr::col(RaActividad::PorcentajeRaActividad).between(0, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ra_actividad_actividad")
                            .from_tbl(RaActividad::Table)
                            .from_col(RaActividad::IdActividad)
                            .to_tbl(Actividad::Table)
                            .to_col(Actividad::IdActividad)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ra_actividad_ra")
                            .from_tbl(RaActividad::Table)
                            .from_col(RaActividad::IdRa)
                            .to_tbl(ResultadoDeAprendizaje::Table)
                            .to_col(ResultadoDeAprendizaje::IdRa)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_ra_act")
                    .table(RaActividad::Table)
                    .col(RaActividad::IdActividad)
                    .col(RaActividad::IdRa)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ra_actividad_id_ra")
                    .table(RaActividad::Table)
                    .col(RaActividad::IdRa)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RaActividadIndicador::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RaActividadIndicador::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RaActividadIndicador::IdRaActividad)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RaActividadIndicador::IdInd)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rai_ra_actividad")
                            .from_tbl(RaActividadIndicador::Table)
                            .from_col(RaActividadIndicador::IdRaActividad)
                            .to_tbl(RaActividad::Table)
                            .to_col(RaActividad::IdRaActividad)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rai_indicador")
                            .from_tbl(RaActividadIndicador::Table)
                            .from_col(RaActividadIndicador::IdInd)
                            .to_tbl(IndicadoresDeLogro::Table)
                            .to_col(IndicadoresDeLogro::IdInd)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_ra_actividad_indicador")
                    .table(RaActividadIndicador::Table)
                    .col(RaActividadIndicador::IdRaActividad)
                    .col(RaActividadIndicador::IdInd)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Matricula::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matricula::IdMatricula)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Matricula::IdEstudiante).big_integer().not_null())
                    .col(ColumnDef::new(Matricula::IdPeriodo).big_integer().not_null())
                    .col(ColumnDef::new(Matricula::IdAsignatura).big_integer().not_null())
                    .col(ColumnDef::new(Matricula::NotaFinal).decimal_len(5, 2).null())
                    .check(
                        Expr::col(Matricula::NotaFinal)
                            .is_null()
                            .or(Expr::col(Matricula::NotaFinal).between(0, 5)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matricula_estudiante")
                            .from_tbl(Matricula::Table)
                            .from_col(Matricula::IdEstudiante)
                            .to_tbl(Estudiante::Table)
                            .to_col(Estudiante::IdEstudiante)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matricula_periodo")
                            .from_tbl(Matricula::Table)
                            .from_col(Matricula::IdPeriodo)
                            .to_tbl(PeriodoAcademico::Table)
                            .to_col(PeriodoAcademico::IdPeriodo)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matricula_asignatura")
                            .from_tbl(Matricula::Table)
                            .from_col(Matricula::IdAsignatura)
                            .to_tbl(Asignatura::Table)
                            .to_col(Asignatura::IdAsignatura)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_matricula")
                    .table(Matricula::Table)
                    .col(Matricula::IdEstudiante)
                    .col(Matricula::IdPeriodo)
                    .col(Matricula::IdAsignatura)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NotasActividad::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NotasActividad::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NotasActividad::IdMatricula)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotasActividad::IdRaActividad)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotasActividad::NotaRaActividad)
                            .decimal_len(5, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(NotasActividad::Retroalimentacion).text().null())
                    .col(ColumnDef::new(NotasActividad::IdInd).big_integer().null())
                    .check(
                        Expr::col(NotasActividad::NotaRaActividad)
                            .is_null()
                            .or(Expr::col(NotasActividad::NotaRaActividad).between(0, 5)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notas_matricula")
                            .from_tbl(NotasActividad::Table)
                            .from_col(NotasActividad::IdMatricula)
                            .to_tbl(Matricula::Table)
                            .to_col(Matricula::IdMatricula)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notas_ra_actividad")
                            .from_tbl(NotasActividad::Table)
                            .from_col(NotasActividad::IdRaActividad)
                            .to_tbl(RaActividad::Table)
                            .to_col(RaActividad::IdRaActividad)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notas_indicador")
                            .from_tbl(NotasActividad::Table)
                            .from_col(NotasActividad::IdInd)
                            .to_tbl(IndicadoresDeLogro::Table)
                            .to_col(IndicadoresDeLogro::IdInd)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_notas_actividad")
                    .table(NotasActividad::Table)
                    .col(NotasActividad::IdMatricula)
                    .col(NotasActividad::IdRaActividad)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotasActividad::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matricula::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(RaActividadIndicador::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(RaActividad::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actividad::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(IndicadoresDeLogro::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ResultadoDeAprendizaje::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ResultadoDeAprendizaje {
    Table,
    IdRa,
    IdAsignatura,
    PorcentajeRa,
    Descripcion,
}

#[derive(DeriveIden)]
enum IndicadoresDeLogro {
    Table,
    IdInd,
    IdRa,
    PorcentajeInd,
    Descripcion,
}

#[derive(DeriveIden)]
enum Actividad {
    Table,
    IdActividad,
    IdTipoActividad,
    NombreActividad,
    Descripcion,
    PorcentajeActividad,
    FechaCreacion,
    FechaCierre,
}

#[derive(DeriveIden)]
enum RaActividad {
    Table,
    IdRaActividad,
    IdActividad,
    IdRa,
    PorcentajeRaActividad,
}

#[derive(DeriveIden)]
enum RaActividadIndicador {
    Table,
    Id,
    IdRaActividad,
    IdInd,
}

#[derive(DeriveIden)]
enum Matricula {
    Table,
    IdMatricula,
    IdEstudiante,
    IdPeriodo,
    IdAsignatura,
    NotaFinal,
}

#[derive(DeriveIden)]
enum NotasActividad {
    Table,
    Id,
    IdMatricula,
    IdRaActividad,
    NotaRaActividad,
    Retroalimentacion,
    IdInd,
}
