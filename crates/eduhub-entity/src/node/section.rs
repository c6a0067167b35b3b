//! Course-structure sections: three independent forests per course.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::Node;

/// The three tabs of the course-structure editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Course syllabus content.
    Syllabus,
    /// Mock-test material.
    #[serde(rename = "mock")]
    MockTest,
    /// Practice material.
    Practice,
}

impl SectionKind {
    /// All sections in display order.
    pub const ALL: [SectionKind; 3] = [Self::Syllabus, Self::MockTest, Self::Practice];

    /// Return the wire name for this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syllabus => "syllabus",
            Self::MockTest => "mock",
            Self::Practice => "practice",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = eduhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "syllabus" => Ok(Self::Syllabus),
            "mock" => Ok(Self::MockTest),
            "practice" => Ok(Self::Practice),
            _ => Err(eduhub_core::AppError::validation(format!(
                "Invalid section: '{s}'. Expected one of: syllabus, mock, practice"
            ))),
        }
    }
}

/// The per-course section forests, as fetched and saved whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionSet {
    /// Syllabus forest.
    #[serde(default)]
    pub syllabus: Vec<Node>,
    /// Mock-test forest.
    #[serde(default)]
    pub mock: Vec<Node>,
    /// Practice forest.
    #[serde(default)]
    pub practice: Vec<Node>,
}

impl SectionSet {
    /// Borrow one section's forest.
    pub fn get(&self, kind: SectionKind) -> &Vec<Node> {
        match kind {
            SectionKind::Syllabus => &self.syllabus,
            SectionKind::MockTest => &self.mock,
            SectionKind::Practice => &self.practice,
        }
    }

    /// Mutably borrow one section's forest.
    pub fn get_mut(&mut self, kind: SectionKind) -> &mut Vec<Node> {
        match kind {
            SectionKind::Syllabus => &mut self.syllabus,
            SectionKind::MockTest => &mut self.mock,
            SectionKind::Practice => &mut self.practice,
        }
    }

    /// Replace one section's forest.
    pub fn set(&mut self, kind: SectionKind, forest: Vec<Node>) {
        *self.get_mut(kind) = forest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_wire_names() {
        assert_eq!(
            serde_json::to_string(&SectionKind::MockTest).unwrap(),
            "\"mock\""
        );
        assert_eq!("practice".parse::<SectionKind>().unwrap(), SectionKind::Practice);
        assert!("homework".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let set: SectionSet = serde_json::from_str(r#"{"syllabus": []}"#).unwrap();
        assert!(set.mock.is_empty());
        assert!(set.practice.is_empty());
    }
}
