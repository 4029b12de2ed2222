//! Core types - pure abstractions shared across the codebase.

mod link;

pub use link::{RefKind, is_external};
