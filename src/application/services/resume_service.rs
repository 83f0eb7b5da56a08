//! Resume aggregate management.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{DEFAULT_RESUME_TITLE, Resume, ResumeDraft, User};
use crate::domain::repositories::ResumeRepository;
use crate::error::AppError;

/// Service for resumes and their experience, education and skill rows.
///
/// Every write replaces the whole aggregate; partial child updates do not exist.
pub struct ResumeService<R: ResumeRepository + ?Sized> {
    resumes: Arc<R>,
}

impl<R: ResumeRepository + ?Sized> ResumeService<R> {
    pub fn new(resumes: Arc<R>) -> Self {
        Self { resumes }
    }

    /// Returns the caller's most recent resume.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the caller has no resume yet.
    pub async fn get_mine(&self, user: &User) -> Result<Resume, AppError> {
        self.resumes
            .find_latest_for_user(user.id)
            .await?
            .ok_or_else(|| AppError::not_found("Resume not found", json!({})))
    }

    /// Returns a resume if the caller may see it.
    ///
    /// A resume is visible to its owner, to everyone once published, and to an
    /// employer who received an application carrying it. Hidden resumes are
    /// reported as missing.
    pub async fn get(&self, user: &User, id: i64) -> Result<Resume, AppError> {
        let not_found = || AppError::not_found("Resume not found", json!({ "id": id }));

        let resume = self.resumes.find_by_id(id).await?.ok_or_else(not_found)?;

        if resume.is_owned_by(user.id) || resume.is_published {
            return Ok(resume);
        }

        if user.is_employer() && self.resumes.is_shared_with_employer(id, user.id).await? {
            return Ok(resume);
        }

        Err(not_found())
    }

    /// Creates a resume for the caller.
    ///
    /// Blank `title`, `full_name` and `email` fall back to the default title and
    /// the caller's own name and email.
    pub async fn create(&self, user: &User, draft: ResumeDraft) -> Result<i64, AppError> {
        let draft = normalize_draft(user, draft)?;
        let id = self.resumes.create(user.id, draft).await?;

        tracing::info!(resume_id = id, user_id = user.id, "Resume created");
        Ok(id)
    }

    /// Replaces a resume owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the resume does not exist.
    /// Returns [`AppError::Forbidden`] if it belongs to someone else.
    pub async fn update(&self, user: &User, id: i64, draft: ResumeDraft) -> Result<(), AppError> {
        self.ensure_owner(user, id).await?;

        let draft = normalize_draft(user, draft)?;
        self.resumes.replace(id, draft).await?;

        tracing::info!(resume_id = id, user_id = user.id, "Resume updated");
        Ok(())
    }

    /// Deletes a resume owned by the caller.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update`].
    pub async fn delete(&self, user: &User, id: i64) -> Result<(), AppError> {
        self.ensure_owner(user, id).await?;

        self.resumes.delete(id).await?;
        tracing::info!(resume_id = id, user_id = user.id, "Resume deleted");
        Ok(())
    }

    async fn ensure_owner(&self, user: &User, id: i64) -> Result<(), AppError> {
        match self.resumes.owner_of(id).await? {
            None => Err(AppError::not_found("Resume not found", json!({ "id": id }))),
            Some(owner) if owner != user.id => Err(AppError::forbidden(
                "You can only modify your own resume",
                json!({ "id": id }),
            )),
            Some(_) => Ok(()),
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn normalize_draft(user: &User, mut draft: ResumeDraft) -> Result<ResumeDraft, AppError> {
    draft.title = or_default(draft.title, DEFAULT_RESUME_TITLE);
    draft.full_name = or_default(draft.full_name, &user.full_name);
    draft.email = or_default(draft.email, &user.email);

    if let (Some(min), Some(max)) = (draft.salary_min, draft.salary_max)
        && min > max
    {
        return Err(AppError::bad_request(
            "salary_min must not exceed salary_max",
            json!({ "salary_min": min, "salary_max": max }),
        ));
    }

    draft.skills.retain(|s| !s.skill_name.trim().is_empty());
    for skill in &mut draft.skills {
        skill.skill_name = skill.skill_name.trim().to_string();
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SkillDraft, UserType};
    use crate::domain::repositories::MockResumeRepository;
    use chrono::Utc;

    fn user(id: i64, user_type: UserType) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            full_name: format!("User {id}"),
            user_type,
            created_at: Utc::now(),
        }
    }

    fn resume(id: i64, user_id: i64, is_published: bool) -> Resume {
        let now = Utc::now();
        Resume {
            id,
            user_id,
            title: DEFAULT_RESUME_TITLE.to_string(),
            full_name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            phone: None,
            location: None,
            position: None,
            salary_min: None,
            salary_max: None,
            about_me: None,
            photo_url: None,
            is_published,
            created_at: now,
            updated_at: now,
            experience: vec![],
            education: vec![],
            skills: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_fills_defaults() {
        let mut repo = MockResumeRepository::new();
        repo.expect_create()
            .withf(|user_id, d| {
                *user_id == 1
                    && d.title == DEFAULT_RESUME_TITLE
                    && d.full_name == "User 1"
                    && d.email == "user1@example.com"
                    && d.skills.len() == 1
                    && d.skills[0].skill_name == "Rust"
            })
            .times(1)
            .returning(|_, _| Ok(10));

        let svc = ResumeService::new(Arc::new(repo));
        let draft = ResumeDraft {
            skills: vec![
                SkillDraft {
                    skill_name: " Rust ".to_string(),
                    skill_level: None,
                },
                SkillDraft::default(),
            ],
            ..Default::default()
        };

        let id = svc.create(&user(1, UserType::Candidate), draft).await.unwrap();
        assert_eq!(id, 10);
    }

    #[tokio::test]
    async fn test_get_mine_missing() {
        let mut repo = MockResumeRepository::new();
        repo.expect_find_latest_for_user().returning(|_| Ok(None));

        let svc = ResumeService::new(Arc::new(repo));
        let err = svc.get_mine(&user(1, UserType::Candidate)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_published_resume_by_stranger() {
        let mut repo = MockResumeRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(resume(id, 1, true))));
        repo.expect_is_shared_with_employer().never();

        let svc = ResumeService::new(Arc::new(repo));
        assert!(svc.get(&user(5, UserType::Candidate), 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_hidden_resume_by_stranger() {
        let mut repo = MockResumeRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(resume(id, 1, false))));

        let svc = ResumeService::new(Arc::new(repo));
        let err = svc.get(&user(5, UserType::Candidate), 10).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_hidden_resume_by_employer_with_application() {
        let mut repo = MockResumeRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(resume(id, 1, false))));
        repo.expect_is_shared_with_employer()
            .withf(|resume_id, employer_id| *resume_id == 10 && *employer_id == 2)
            .times(1)
            .returning(|_, _| Ok(true));

        let svc = ResumeService::new(Arc::new(repo));
        assert!(svc.get(&user(2, UserType::Employer), 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_foreign_resume_is_forbidden() {
        let mut repo = MockResumeRepository::new();
        repo.expect_owner_of().returning(|_| Ok(Some(9)));
        repo.expect_replace().never();

        let svc = ResumeService::new(Arc::new(repo));
        let err = svc
            .update(&user(1, UserType::Candidate), 10, ResumeDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_update_rejects_inverted_salary() {
        let mut repo = MockResumeRepository::new();
        repo.expect_owner_of().returning(|_| Ok(Some(1)));
        repo.expect_replace().never();

        let svc = ResumeService::new(Arc::new(repo));
        let draft = ResumeDraft {
            salary_min: Some(300),
            salary_max: Some(100),
            ..Default::default()
        };
        let err = svc
            .update(&user(1, UserType::Candidate), 10, draft)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_own_resume() {
        let mut repo = MockResumeRepository::new();
        repo.expect_owner_of().returning(|_| Ok(Some(1)));
        repo.expect_delete()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|_| Ok(true));

        let svc = ResumeService::new(Arc::new(repo));
        assert!(svc.delete(&user(1, UserType::Candidate), 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_resume() {
        let mut repo = MockResumeRepository::new();
        repo.expect_owner_of().returning(|_| Ok(None));

        let svc = ResumeService::new(Arc::new(repo));
        let err = svc
            .delete(&user(1, UserType::Candidate), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
