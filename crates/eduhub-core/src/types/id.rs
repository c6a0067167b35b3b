//! Newtype wrappers around the backend's integer identifiers.
//!
//! The backend assigns opaque integer ids to every entity. Using distinct
//! types prevents accidentally passing a `CourseId` where a `NodeId` is
//! expected — a real hazard in the tree editor, where node, course, and
//! test ids travel through the same flows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw backend value.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the inner value.
            pub fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a content-tree node (folder or file).
    NodeId
);

define_id!(
    /// Unique identifier for a course.
    CourseId
);

define_id!(
    /// Unique identifier for a course category.
    CategoryId
);

define_id!(
    /// Unique identifier for a test.
    TestId
);

define_id!(
    /// Unique identifier for a test category.
    TestCategoryId
);

define_id!(
    /// Unique identifier for a question within a test.
    QuestionId
);

define_id!(
    /// Unique identifier for a platform user.
    UserId
);

define_id!(
    /// Unique identifier for a chat group.
    GroupId
);

define_id!(
    /// Unique identifier for a chat message.
    MessageId
);

define_id!(
    /// Unique identifier for a file-library entry.
    LibraryFileId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display_and_parse() {
        let id = NodeId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<NodeId>().unwrap(), id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CourseId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: CourseId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_distinct_types_do_not_compare() {
        // Compile-time property; keep a value-level sanity check.
        let node = NodeId::new(1);
        let course = CourseId::new(1);
        assert_eq!(node.into_inner(), course.into_inner());
    }
}
