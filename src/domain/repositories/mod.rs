//! Repository trait definitions for the domain layer.
//!
//! The traits abstract data access so that services can be tested against
//! `mockall` mocks. Concrete implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Accounts and credentials
//! - [`SessionRepository`] - Login sessions
//! - [`VacancyRepository`] - Job postings
//! - [`ApplicationRepository`] - Candidate applications
//! - [`FavoriteRepository`] - Bookmarked vacancies
//! - [`ResumeRepository`] - Resume aggregates
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod application_repository;
pub mod favorite_repository;
pub mod resume_repository;
pub mod session_repository;
pub mod user_repository;
pub mod vacancy_repository;

pub use application_repository::ApplicationRepository;
pub use favorite_repository::FavoriteRepository;
pub use resume_repository::ResumeRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;
pub use vacancy_repository::VacancyRepository;

#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use resume_repository::MockResumeRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use vacancy_repository::MockVacancyRepository;
