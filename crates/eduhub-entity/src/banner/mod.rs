//! Landing-page banner entity.

pub mod model;

pub use model::{Banner, SetBanner};
