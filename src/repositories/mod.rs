pub mod actividad_repository;
pub mod grade_repository;
pub mod ra_repository;

pub use actividad_repository::{ActividadRepository, ActividadUpdate, NewActividad};
pub use grade_repository::{GradeRepository, GradeValues};
pub use ra_repository::RaRepository;

pub type RepoResult<T> = Result<T, sea_orm::DbErr>;
