//! Upload DTOs: presigned grants, the shared file library, and the
//! course-structure file form.

pub mod model;

pub use model::{LibraryFile, PresignGrant, PresignRequest, SaveUpload, VideoChapter};
