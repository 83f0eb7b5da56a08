//! DTOs for registration, login and profile endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{IssuedSession, ProfileUpdate, Registration};
use crate::domain::entities::{User, UserType};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 128))]
    pub password: String,

    #[validate(length(max = 255))]
    pub full_name: String,

    /// `candidate` (default) or `employer`; `applicant` / `company` are accepted too.
    pub user_type: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Registration {
            email: r.email,
            password: r.password,
            full_name: r.full_name,
            user_type: r.user_type,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 128))]
    pub password: String,
}

/// Public view of an account.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        UserSummary {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            user_type: u.user_type,
        }
    }
}

/// Returned by register and login. `session_token` is never shown again.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub session_token: String,
    pub user: UserSummary,
}

impl From<IssuedSession> for AuthResponse {
    fn from(s: IssuedSession) -> Self {
        AuthResponse {
            success: true,
            session_token: s.token,
            user: s.user.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: User,
}

/// Partial profile update. Omitted fields stay unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 255))]
    pub full_name: Option<String>,

    #[validate(length(max = 255))]
    pub email: Option<String>,

    #[validate(length(max = 128))]
    pub current_password: Option<String>,

    #[validate(length(max = 128))]
    pub new_password: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(r: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            full_name: r.full_name,
            email: r.email,
            current_password: r.current_password,
            new_password: r.new_password,
        }
    }
}
