//! Helpers shared across layers.
//!
//! - [`db_error`] - Classification of database errors
//! - [`month_date`] - `YYYY-MM` date (de)serialization for resume entries
//! - [`token`] - Session token generation and HMAC digests

pub mod db_error;
pub mod month_date;
pub mod token;
