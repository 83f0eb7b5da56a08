//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod applications;
pub mod auth;
pub mod favorites;
pub mod health;
pub mod resumes;
pub mod vacancies;

pub use applications::{application_list_handler, apply_handler, update_application_handler};
pub use auth::{
    login_handler, logout_handler, me_handler, profile_handler, register_handler,
    update_profile_handler,
};
pub use favorites::{
    add_favorite_handler, favorite_list_handler, remove_favorite_by_query_handler,
    remove_favorite_handler,
};
pub use health::health_handler;
pub use resumes::{
    create_resume_handler, delete_resume_handler, my_resume_handler, resume_get_handler,
    update_resume_handler,
};
pub use vacancies::{
    create_vacancy_handler, update_vacancy_handler, vacancy_get_handler, vacancy_list_handler,
};
