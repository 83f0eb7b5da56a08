//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use Serde with `#[serde(default)]` so that missing fields
//! reach the service layer and fail with a JSON `400` instead of an extractor
//! rejection. Size limits are enforced with `validator`.

pub mod application;
pub mod auth;
pub mod common;
pub mod favorite;
pub mod health;
pub mod pagination;
pub mod resume;
pub mod vacancy;
