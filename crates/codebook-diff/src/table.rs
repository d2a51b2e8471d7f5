//! The change table produced by a diff: rows pairing entries with states.

use serde::{Deserialize, Serialize};

use codebook_types::{ChangeState, CodeEntry};

/// One row of the change table.
///
/// For entries present in both snapshots the row carries the after-side
/// value; for deleted entries it carries the before-side value. Rows are
/// serialized into the report template context, which reads `entry.id`,
/// `entry.code`, `entry.name`, and `state`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    /// The entry the row describes.
    pub entry: CodeEntry,
    /// How the entry changed between the snapshots.
    pub state: ChangeState,
}

impl DiffRow {
    /// Create a new row.
    pub fn new(entry: CodeEntry, state: ChangeState) -> Self {
        Self { entry, state }
    }
}

/// The result of diffing two codebook snapshots.
///
/// Holds one row per identifier seen in either snapshot, in table order:
/// after-side entries first in their snapshot order, then before-only
/// entries in theirs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffTable {
    /// The rows of the change table.
    pub rows: Vec<DiffRow>,
}

impl DiffTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Number of newly added entries.
    pub fn additions(&self) -> usize {
        self.count(ChangeState::New)
    }

    /// Number of updated entries.
    pub fn updates(&self) -> usize {
        self.count(ChangeState::Updated)
    }

    /// Number of deleted entries.
    pub fn deletions(&self) -> usize {
        self.count(ChangeState::Deleted)
    }

    /// Number of unmodified entries.
    pub fn unchanged(&self) -> usize {
        self.count(ChangeState::Unmodified)
    }

    fn count(&self, state: ChangeState) -> usize {
        self.rows.iter().filter(|r| r.state == state).count()
    }
}
