//! Registration, login and session authentication.

use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use validator::ValidateEmail;

use crate::domain::entities::{NewUser, ProfilePatch, User, UserType};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::token::{generate_token, keyed_digest};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A freshly issued session. `token` is shown to the client once and never stored.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub user: User,
}

/// Registration input as received from the client, before normalization.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: Option<String>,
}

/// Profile change request. Password change needs both password fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Secrets and tuning for [`AuthService`].
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// HMAC key for session token digests. Rotating it ends every session
    /// but leaves passwords valid.
    pub signing_secret: String,
    pub session_ttl: Duration,
    /// bcrypt work factor, 4..=31.
    pub password_cost: u32,
}

impl AuthSettings {
    pub fn new(signing_secret: impl Into<String>, session_ttl: Duration) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            session_ttl,
            password_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }
}

/// Service for accounts and sessions.
///
/// Session tokens are stored as HMAC-SHA256 digests keyed by the signing
/// secret. Passwords are stored as bcrypt hashes, which carry their own salt
/// and cost.
pub struct AuthService<U: UserRepository + ?Sized, S: SessionRepository + ?Sized> {
    users: Arc<U>,
    sessions: Arc<S>,
    settings: AuthSettings,
}

impl<U: UserRepository + ?Sized, S: SessionRepository + ?Sized> AuthService<U, S> {
    /// Creates a new authentication service.
    pub fn new(users: Arc<U>, sessions: Arc<S>, settings: AuthSettings) -> Self {
        Self {
            users,
            sessions,
            settings,
        }
    }

    fn hash_token(&self, token: &str) -> String {
        keyed_digest(&self.settings.signing_secret, token.as_bytes())
    }

    fn session_expiry(&self) -> chrono::DateTime<Utc> {
        Utc::now() + self.settings.session_ttl
    }

    /// bcrypt is CPU bound, so it runs on the blocking pool.
    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.settings.password_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AppError::internal("Internal server error", json!({}))
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AppError::internal("Internal server error", json!({}))
            })
    }

    /// Malformed stored hashes never match.
    async fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let stored = stored.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored).unwrap_or(false))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                AppError::internal("Internal server error", json!({}))
            })
    }

    /// Registers a new account and opens its first session.
    ///
    /// Email is trimmed and lowercased, full name trimmed. `user_type`
    /// defaults to candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing fields, a malformed email,
    /// a short password or an unknown user type.
    /// Returns [`AppError::Conflict`] if the email is taken.
    pub async fn register(&self, input: Registration) -> Result<IssuedSession, AppError> {
        let email = normalize_email(&input.email);
        let full_name = input.full_name.trim().to_string();

        if email.is_empty() || input.password.is_empty() || full_name.is_empty() {
            return Err(AppError::bad_request(
                "Email, password and full name are required",
                json!({}),
            ));
        }

        validate_email(&email)?;
        validate_password(&input.password)?;

        let user_type = match input.user_type.as_deref() {
            None => UserType::Candidate,
            Some(raw) => raw.parse::<UserType>().map_err(|reason| {
                AppError::bad_request("Invalid user type", json!({ "reason": reason }))
            })?,
        };

        let token = generate_token();
        let new_user = NewUser {
            email,
            password_hash: self.hash_password(&input.password).await?,
            full_name,
            user_type,
        };

        let user = self
            .users
            .create_with_session(new_user, &self.hash_token(&token), self.session_expiry())
            .await?;

        tracing::info!(user_id = user.id, user_type = %user.user_type, "User registered");

        Ok(IssuedSession { token, user })
    }

    /// Checks credentials and opens a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is missing.
    /// Returns [`AppError::Unauthorized`] for an unknown email or wrong
    /// password, without telling the two apart.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        let email = normalize_email(email);

        if email.is_empty() || password.is_empty() {
            return Err(AppError::bad_request(
                "Email and password are required",
                json!({}),
            ));
        }

        let credentials = self.users.find_by_email(&email).await?;

        let user = match credentials {
            Some(c) if self.verify_password(password, &c.password_hash).await? => c.user,
            _ => {
                tracing::debug!("Login rejected");
                return Err(AppError::unauthorized(
                    "Invalid email or password",
                    json!({}),
                ));
            }
        };

        let token = generate_token();
        self.sessions
            .create(user.id, &self.hash_token(&token), self.session_expiry())
            .await?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(IssuedSession { token, user })
    }

    /// Resolves a raw session token to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or the
    /// session has expired.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let found = self.sessions.find_with_user(&self.hash_token(token)).await?;

        let Some((session, user)) = found else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid session token" }),
            ));
        };

        if session.is_expired() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session expired" }),
            ));
        }

        Ok(user)
    }

    /// Expires the session identified by `token`. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let expired = self.sessions.expire(&self.hash_token(token)).await?;
        tracing::debug!(expired, "Logout");
        Ok(())
    }

    /// Returns the current state of a user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account no longer exists.
    pub async fn profile(&self, user_id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|c| c.user)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))
    }

    /// Updates name, email and/or password.
    ///
    /// A password change expires every other session of the user; the
    /// session identified by `current_token` stays live.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for blank values, a malformed email, a
    /// short new password, or a new password without the current one.
    /// Returns [`AppError::Unauthorized`] if `current_password` is wrong.
    /// Returns [`AppError::Conflict`] if the new email is taken.
    pub async fn update_profile(
        &self,
        user_id: i64,
        current_token: &str,
        update: ProfileUpdate,
    ) -> Result<User, AppError> {
        let mut patch = ProfilePatch::default();

        if let Some(name) = update.full_name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::bad_request(
                    "Full name must not be empty",
                    json!({ "field": "full_name" }),
                ));
            }
            patch.full_name = Some(name);
        }

        if let Some(email) = update.email {
            let email = normalize_email(&email);
            validate_email(&email)?;
            patch.email = Some(email);
        }

        if let Some(new_password) = update.new_password.filter(|p| !p.is_empty()) {
            let Some(current) = update.current_password.filter(|p| !p.is_empty()) else {
                return Err(AppError::bad_request(
                    "Current password is required to set a new one",
                    json!({ "field": "current_password" }),
                ));
            };

            let credentials = self
                .users
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))?;

            if !self
                .verify_password(&current, &credentials.password_hash)
                .await?
            {
                return Err(AppError::unauthorized(
                    "Current password is incorrect",
                    json!({}),
                ));
            }

            validate_password(&new_password)?;
            patch.password_hash = Some(self.hash_password(&new_password).await?);
        }

        let password_changed = patch.password_hash.is_some();
        let user = self.users.update_profile(user_id, patch).await?;

        if password_changed {
            let expired = self
                .sessions
                .expire_others_for_user(user_id, &self.hash_token(current_token))
                .await?;
            tracing::info!(user_id, expired, "Password changed, other sessions expired");
        } else {
            tracing::info!(user_id, "Profile updated");
        }

        Ok(user)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if !email.validate_email() {
        return Err(AppError::bad_request(
            "Invalid email address",
            json!({ "field": "email" }),
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            json!({ "field": "password" }),
        ));
    }
    Ok(())
}
