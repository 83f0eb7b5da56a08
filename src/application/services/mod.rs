//! Business logic services for the application layer.

pub mod application_service;
pub mod auth_service;
pub mod favorite_service;
pub mod resume_service;
pub mod vacancy_service;

pub use application_service::{ApplicationList, ApplicationService};
pub use auth_service::{AuthService, AuthSettings, IssuedSession, ProfileUpdate, Registration};
pub use favorite_service::FavoriteService;
pub use resume_service::ResumeService;
pub use vacancy_service::{VacancyPage, VacancyService};
