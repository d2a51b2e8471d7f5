//! Foundation types for codebook diffing.
//!
//! A *codebook* is a reference directory of coded entries: classification
//! codes with a numeric identifier, a short string code, and a name. This
//! crate defines the entry type and the change-state vocabulary shared by
//! the diff engine and the report renderer.
//!
//! # Key Types
//!
//! - [`CodeEntry`] — One coded entry (identifier, code, name)
//! - [`ChangeState`] — How an entry changed between two snapshots

pub mod entry;
pub mod state;

pub use entry::CodeEntry;
pub use state::ChangeState;
