//! # eduhub-entity
//!
//! Domain entity models for the EduHub admin console. Every struct in this
//! crate mirrors a backend wire shape (response body or request DTO) or a
//! client-side value object. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`; field names follow the backend exactly,
//! including its mix of snake_case responses and camelCase request bodies.

pub mod banner;
pub mod chat;
pub mod course;
pub mod node;
pub mod test;
pub mod upload;
pub mod user;
