//! Diff engine for codebook snapshots.
//!
//! Computes the change table between two versions of a codebook by keyed
//! set reconciliation: every identifier present in either snapshot yields
//! exactly one row tagged with how its entry changed.
//!
//! # Key Types
//!
//! - [`DiffTable`] / [`DiffRow`] -- The ordered change table and its rows
//! - [`diff`] -- Snapshot reconciliation entry point

pub mod engine;
pub mod table;

pub use engine::diff;
pub use table::{DiffRow, DiffTable};
