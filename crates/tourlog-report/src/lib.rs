//! # tourlog-report
//!
//! Report synthesis and structured-text rendering for tourlog.
//!
//! Two pure components decoupled through a plain-text document:
//!
//! - [`compose`] aggregates a visit's notes and photos into a markup
//!   document that is persisted verbatim.
//! - [`render`] interprets a persisted document back into discrete
//!   presentational block elements, one per line.
//!
//! [`ReportService`] wires the composer to the record-store traits for the
//! "generate" action.

pub mod compose;
pub mod export;
pub mod render;
pub mod service;

pub use compose::{compose, compose_at};
pub use export::report_filename;
pub use render::{classify_line, render, BlockElement, InlineRun};
pub use service::ReportService;
