use std::fmt;

use serde::{Deserialize, Serialize};

/// How an entry changed between the before and after snapshots.
///
/// The serialized form is the lowercase state name; report templates match
/// on these strings (for example as CSS class names).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeState {
    /// Present in both snapshots with identical fields.
    Unmodified,
    /// Present in both snapshots, but the code or name differs.
    Updated,
    /// Present only in the after snapshot.
    New,
    /// Present only in the before snapshot.
    Deleted,
}

impl fmt::Display for ChangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmodified => write!(f, "unmodified"),
            Self::Updated => write!(f, "updated"),
            Self::New => write!(f, "new"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}
