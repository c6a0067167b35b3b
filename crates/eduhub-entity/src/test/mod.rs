//! Test and question-bank entities.

pub mod category;
pub mod model;
pub mod question;

pub use category::{TestCategory, TestCategoryForm};
pub use model::{CreateTest, TestDetails, TestSummary, UpdateTest};
pub use question::Question;
