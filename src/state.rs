//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    ApplicationService, AuthService, AuthSettings, FavoriteService, ResumeService, VacancyService,
};
use crate::domain::repositories::{
    ApplicationRepository, FavoriteRepository, ResumeRepository, SessionRepository,
    UserRepository, VacancyRepository,
};
use crate::infrastructure::persistence::HealthCheck;

pub type DynAuthService = AuthService<dyn UserRepository, dyn SessionRepository>;
pub type DynVacancyService = VacancyService<dyn VacancyRepository>;
pub type DynApplicationService =
    ApplicationService<dyn ApplicationRepository, dyn VacancyRepository, dyn ResumeRepository>;
pub type DynFavoriteService = FavoriteService<dyn FavoriteRepository, dyn VacancyRepository>;
pub type DynResumeService = ResumeService<dyn ResumeRepository>;

/// Services behind trait objects, so the same router runs on PostgreSQL
/// repositories in production and on mocks in tests.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<DynAuthService>,
    pub vacancy_service: Arc<DynVacancyService>,
    pub application_service: Arc<DynApplicationService>,
    pub favorite_service: Arc<DynFavoriteService>,
    pub resume_service: Arc<DynResumeService>,
    pub health: Arc<dyn HealthCheck>,
}

/// Repository set used to assemble an [`AppState`].
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub vacancies: Arc<dyn VacancyRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub resumes: Arc<dyn ResumeRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wires every service from one repository set.
    pub fn new(repos: Repositories, auth: AuthSettings) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(repos.users, repos.sessions, auth)),
            vacancy_service: Arc::new(VacancyService::new(repos.vacancies.clone())),
            application_service: Arc::new(ApplicationService::new(
                repos.applications,
                repos.vacancies.clone(),
                repos.resumes.clone(),
            )),
            favorite_service: Arc::new(FavoriteService::new(repos.favorites, repos.vacancies)),
            resume_service: Arc::new(ResumeService::new(repos.resumes)),
            health: repos.health,
        }
    }
}
