//! # eduhub-core
//!
//! Core crate for the EduHub admin console. Contains configuration
//! schemas, typed identifiers, pagination/sorting types, the response
//! envelope, and the unified error system.
//!
//! This crate has **no** internal dependencies on other EduHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
