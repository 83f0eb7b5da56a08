//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits on top of SQLx.
//! Queries are built with `query_as` and private `FromRow` row types, and
//! always bind parameters.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Accounts and credentials
//! - [`PgSessionRepository`] - Login sessions
//! - [`PgVacancyRepository`] - Job postings
//! - [`PgApplicationRepository`] - Candidate applications
//! - [`PgFavoriteRepository`] - Bookmarked vacancies
//! - [`PgResumeRepository`] - Resume aggregates
//! - [`PgHealthCheck`] - Database liveness probe

pub mod health;
pub mod pg_application_repository;
pub mod pg_favorite_repository;
pub mod pg_resume_repository;
pub mod pg_session_repository;
pub mod pg_user_repository;
pub mod pg_vacancy_repository;
mod rows;

pub use health::{HealthCheck, PgHealthCheck};
pub use pg_application_repository::PgApplicationRepository;
pub use pg_favorite_repository::PgFavoriteRepository;
pub use pg_resume_repository::PgResumeRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;
pub use pg_vacancy_repository::PgVacancyRepository;

#[cfg(test)]
pub use health::MockHealthCheck;
