//! # tourlog-core
//!
//! Core types, traits, and abstractions for tourlog.
//!
//! This crate provides the foundational data structures and trait
//! definitions that other tourlog crates depend on.

pub mod category;
pub mod error;
pub mod ids;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use category::{NoteCategory, ALL_CATEGORIES};
pub use error::{Error, Result};
pub use ids::new_v7;
pub use models::*;
pub use traits::*;
