use std::fmt;

use serde::{Deserialize, Serialize};

/// A single codebook entry.
///
/// The `id` is the reconciliation identity: two snapshots describe the same
/// entry when the ids match. Change detection compares all three fields, so
/// an entry whose `code` or `name` differs between snapshots counts as
/// updated even though its `id` is unchanged.
///
/// The serialized form is a JSON object with exactly the fields `id`,
/// `code`, and `name`; unknown fields are ignored on input, missing or
/// wrong-typed fields are a parse error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// Numeric identifier, unique within a snapshot.
    pub id: i64,
    /// Short classification code (e.g. "01.11").
    pub code: String,
    /// Human-readable name.
    pub name: String,
}

impl CodeEntry {
    /// Create a new entry.
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for CodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}
