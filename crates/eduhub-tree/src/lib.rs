//! # eduhub-tree
//!
//! The content-tree core shared by the file manager, the file-manager
//! picker, and the course-structure editor. Everything here is a pure
//! function over a forest of [`Node`]s: operations take the current
//! forest by reference and return a new one, leaving the input untouched.
//! No I/O happens in this crate — persistence is the remote-sync
//! adapter's job, and the server remains the source of truth for
//! structure after every mutation.
//!
//! [`Node`]: eduhub_entity::node::Node

pub mod mutate;
pub mod query;
pub mod select;
pub mod view;

pub use mutate::{flatten_sort_updates, remove, rename, reorder, resolve_move_parent};
pub use query::{contains, find, node_count};
pub use select::{collect_selected, compute_state, toggle_select};
pub use view::{toggle_open, visible_rows, TreeRow};
