//! Vacancy listing, viewing and publishing.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{User, Vacancy, VacancyFields, VacancyFilter};
use crate::domain::repositories::VacancyRepository;
use crate::error::AppError;

/// One page of vacancies and the number of matches across all pages.
#[derive(Debug, Clone)]
pub struct VacancyPage {
    pub items: Vec<Vacancy>,
    pub total: i64,
}

/// Service for job postings.
///
/// Reads are public. Writes are restricted to employers, and updates to the
/// employer who owns the vacancy.
pub struct VacancyService<V: VacancyRepository + ?Sized> {
    vacancies: Arc<V>,
}

impl<V: VacancyRepository + ?Sized> VacancyService<V> {
    pub fn new(vacancies: Arc<V>) -> Self {
        Self { vacancies }
    }

    /// Lists vacancies. Blank text filters are ignored.
    pub async fn list(&self, mut filter: VacancyFilter) -> Result<VacancyPage, AppError> {
        filter.query = non_blank(filter.query);
        filter.location = non_blank(filter.location);

        let (items, total) = tokio::try_join!(
            self.vacancies.list(filter.clone()),
            self.vacancies.count(filter),
        )?;

        Ok(VacancyPage { items, total })
    }

    /// Returns a vacancy and counts the view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vacancy does not exist.
    pub async fn view(&self, id: i64) -> Result<Vacancy, AppError> {
        self.vacancies
            .record_view(id)
            .await?
            .ok_or_else(|| AppError::not_found("Vacancy not found", json!({ "id": id })))
    }

    /// Publishes a new vacancy on behalf of `employer`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the caller is not an employer.
    /// Returns [`AppError::Validation`] if title or company is blank or the
    /// salary range is inverted.
    pub async fn create(&self, employer: &User, fields: VacancyFields) -> Result<i64, AppError> {
        if !employer.is_employer() {
            return Err(AppError::forbidden(
                "Only employers can create vacancies",
                json!({ "user_type": employer.user_type }),
            ));
        }

        let fields = normalize_fields(fields)?;
        let id = self.vacancies.create(employer.id, fields).await?;

        tracing::info!(vacancy_id = id, employer_id = employer.id, "Vacancy created");
        Ok(id)
    }

    /// Replaces every editable field of a vacancy owned by `employer`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the caller is not an employer or does
    /// not own the vacancy.
    /// Returns [`AppError::NotFound`] if the vacancy does not exist.
    pub async fn update(
        &self,
        employer: &User,
        id: i64,
        fields: VacancyFields,
    ) -> Result<(), AppError> {
        if !employer.is_employer() {
            return Err(AppError::forbidden(
                "Only employers can update vacancies",
                json!({ "user_type": employer.user_type }),
            ));
        }

        let vacancy = self
            .vacancies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Vacancy not found", json!({ "id": id })))?;

        if !vacancy.is_owned_by(employer.id) {
            return Err(AppError::forbidden(
                "You can only update your own vacancies",
                json!({ "id": id }),
            ));
        }

        let fields = normalize_fields(fields)?;
        self.vacancies.update(id, fields).await?;

        tracing::info!(vacancy_id = id, status = %vacancy.status, "Vacancy updated");
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_fields(mut fields: VacancyFields) -> Result<VacancyFields, AppError> {
    fields.title = fields.title.trim().to_string();
    fields.company = fields.company.trim().to_string();

    if fields.title.is_empty() || fields.company.is_empty() {
        return Err(AppError::bad_request(
            "Title and company are required",
            json!({}),
        ));
    }

    if let (Some(min), Some(max)) = (fields.salary_min, fields.salary_max)
        && min > max
    {
        return Err(AppError::bad_request(
            "salary_min must not exceed salary_max",
            json!({ "salary_min": min, "salary_max": max }),
        ));
    }

    fields.location = non_blank(fields.location);
    fields.employment_type = non_blank(fields.employment_type);
    fields.experience = non_blank(fields.experience);
    fields.tags = fields
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(fields)
}
