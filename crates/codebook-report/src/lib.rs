//! HTML report rendering for codebook diffs.
//!
//! Substitutes a computed change table into an HTML template and writes
//! the result to the fixed output path. The template sees the table as a
//! list variable named `rows`; each row exposes `entry.id`, `entry.code`,
//! `entry.name`, and `state`. Values are HTML-escaped on the way in.
//!
//! # Key Types
//!
//! - [`render`] / [`write_report`] -- Template substitution and the full report cycle
//! - [`ReportError`] -- Failure taxonomy (template read, render, output write)

pub mod error;
pub mod render;

pub use error::{ReportError, ReportResult};
pub use render::{render, render_table, write_report, OUTPUT_PATH, TEMPLATE_PATH};
