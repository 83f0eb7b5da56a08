//! Core domain entities representing the job board data model.
//!
//! Entities are plain data structures. Rows that are returned to clients
//! unchanged derive `Serialize` directly; creation and update inputs have
//! their own types.
//!
//! # Entity Types
//!
//! - [`User`] / [`UserType`] - An account and its role
//! - [`Session`] - A login session
//! - [`Vacancy`] - A job posting
//! - [`Application`] - A candidate's response to a vacancy
//! - [`FavoriteVacancy`] - A bookmarked vacancy
//! - [`Resume`] - The resume aggregate with its child rows

pub mod application;
pub mod favorite;
pub mod resume;
pub mod session;
pub mod user;
pub mod vacancy;

pub use application::{
    Application, ApplicationStatus, CandidateApplication, EmployerApplication, NewApplication,
};
pub use favorite::FavoriteVacancy;
pub use resume::{
    DEFAULT_RESUME_TITLE, Education, EducationDraft, Experience, ExperienceDraft, Resume,
    ResumeDraft, Skill, SkillDraft,
};
pub use session::Session;
pub use user::{NewUser, ProfilePatch, User, UserCredentials, UserType};
pub use vacancy::{Vacancy, VacancyFields, VacancyFilter, VacancyStatus};
