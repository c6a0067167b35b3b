//! Per-resource API surfaces.
//!
//! Each surface is a thin borrow of the [`ApiClient`](crate::ApiClient);
//! construct them through the accessor methods (`client.files()`,
//! `client.courses()`, ...) defined alongside each surface.

pub mod auth;
pub mod banner;
pub mod chat;
pub mod courses;
pub mod files;
pub mod structure;
pub mod tests;
pub mod upload;

pub use auth::AuthApi;
pub use banner::BannerApi;
pub use chat::ChatApi;
pub use courses::CoursesApi;
pub use files::FileManagerApi;
pub use structure::{CourseStructureApi, SectionTreeStore};
pub use tests::TestsApi;
pub use upload::{UploadApi, UploadedFile};
