//! Applying to vacancies and reviewing applications.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{
    ApplicationStatus, CandidateApplication, EmployerApplication, NewApplication, User,
};
use crate::domain::repositories::{ApplicationRepository, ResumeRepository, VacancyRepository};
use crate::error::AppError;

/// Applications visible to the caller. The shape depends on the caller's role.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApplicationList {
    Candidate(Vec<CandidateApplication>),
    Employer(Vec<EmployerApplication>),
}

impl ApplicationList {
    pub fn len(&self) -> usize {
        match self {
            ApplicationList::Candidate(items) => items.len(),
            ApplicationList::Employer(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Service for the application workflow.
///
/// Candidates apply (optionally attaching one of their resumes); employers see
/// and review applications to their own vacancies.
pub struct ApplicationService<A, V, R>
where
    A: ApplicationRepository + ?Sized,
    V: VacancyRepository + ?Sized,
    R: ResumeRepository + ?Sized,
{
    applications: Arc<A>,
    vacancies: Arc<V>,
    resumes: Arc<R>,
}

impl<A, V, R> ApplicationService<A, V, R>
where
    A: ApplicationRepository + ?Sized,
    V: VacancyRepository + ?Sized,
    R: ResumeRepository + ?Sized,
{
    pub fn new(applications: Arc<A>, vacancies: Arc<V>, resumes: Arc<R>) -> Self {
        Self {
            applications,
            vacancies,
            resumes,
        }
    }

    /// Lists applications for the caller.
    ///
    /// Candidates get their own applications; `vacancy_id` is ignored for them.
    /// Employers get applications to their vacancies, optionally narrowed to one.
    pub async fn list(
        &self,
        user: &User,
        vacancy_id: Option<i64>,
    ) -> Result<ApplicationList, AppError> {
        if user.is_employer() {
            let items = self
                .applications
                .list_for_employer(user.id, vacancy_id)
                .await?;
            Ok(ApplicationList::Employer(items))
        } else {
            let items = self.applications.list_for_candidate(user.id).await?;
            Ok(ApplicationList::Candidate(items))
        }
    }

    /// Submits an application.
    ///
    /// # Errors
    ///
    /// - [`AppError::Forbidden`] if the caller is not a candidate or the resume is not theirs
    /// - [`AppError::NotFound`] if the vacancy or resume does not exist
    /// - [`AppError::Validation`] if the vacancy is not active
    /// - [`AppError::Conflict`] if the caller already applied
    pub async fn apply(
        &self,
        candidate: &User,
        vacancy_id: i64,
        resume_id: Option<i64>,
        cover_letter: Option<String>,
    ) -> Result<i64, AppError> {
        if !candidate.is_candidate() {
            return Err(AppError::forbidden(
                "Only candidates can apply to vacancies",
                json!({ "user_type": candidate.user_type }),
            ));
        }

        let vacancy = self
            .vacancies
            .find_by_id(vacancy_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Vacancy not found", json!({ "vacancy_id": vacancy_id }))
            })?;

        if !vacancy.is_active() {
            return Err(AppError::bad_request(
                "Vacancy is not accepting applications",
                json!({ "vacancy_id": vacancy_id, "status": vacancy.status }),
            ));
        }

        if let Some(resume_id) = resume_id {
            match self.resumes.owner_of(resume_id).await? {
                None => {
                    return Err(AppError::not_found(
                        "Resume not found",
                        json!({ "resume_id": resume_id }),
                    ));
                }
                Some(owner) if owner != candidate.id => {
                    return Err(AppError::forbidden(
                        "You can only attach your own resume",
                        json!({ "resume_id": resume_id }),
                    ));
                }
                Some(_) => {}
            }
        }

        let id = self
            .applications
            .create(NewApplication {
                vacancy_id,
                applicant_id: candidate.id,
                resume_id,
                cover_letter: cover_letter.unwrap_or_default().trim().to_string(),
            })
            .await?;

        tracing::info!(
            application_id = id,
            vacancy_id,
            applicant_id = candidate.id,
            "Application submitted"
        );
        Ok(id)
    }

    /// Sets the review status of an application to one of the employer's vacancies.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an unknown status
    /// - [`AppError::Forbidden`] if the caller does not own the vacancy
    /// - [`AppError::NotFound`] if the application does not exist
    pub async fn update_status(
        &self,
        employer: &User,
        application_id: i64,
        status: &str,
    ) -> Result<ApplicationStatus, AppError> {
        let status = status.parse::<ApplicationStatus>().map_err(|reason| {
            AppError::bad_request(
                "Invalid status",
                json!({ "reason": reason, "allowed": ["pending", "accepted", "rejected"] }),
            )
        })?;

        if !employer.is_employer() {
            return Err(AppError::forbidden(
                "Only employers can review applications",
                json!({ "user_type": employer.user_type }),
            ));
        }

        let owner = self
            .applications
            .employer_of(application_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Application not found", json!({ "id": application_id }))
            })?;

        if owner != employer.id {
            return Err(AppError::forbidden(
                "Application belongs to another employer's vacancy",
                json!({ "id": application_id }),
            ));
        }

        self.applications
            .update_status(application_id, status)
            .await?;

        tracing::info!(application_id, status = status.as_str(), "Application reviewed");
        Ok(status)
    }
}
