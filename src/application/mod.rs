//! Application layer services implementing business logic.
//!
//! Services consume repository traits, enforce role and ownership rules, and
//! validate input before anything reaches the database. HTTP handlers only
//! translate between DTOs and service calls.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login and session tokens
//! - [`services::vacancy_service::VacancyService`] - Vacancy listing and publishing
//! - [`services::application_service::ApplicationService`] - Applying and reviewing
//! - [`services::favorite_service::FavoriteService`] - Bookmarked vacancies
//! - [`services::resume_service::ResumeService`] - Resume aggregates

pub mod services;
