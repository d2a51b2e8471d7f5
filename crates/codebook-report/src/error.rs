//! Error types for report rendering.

use std::io;
use std::path::PathBuf;

/// Errors produced while rendering a change report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The template file could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template failed to parse or render.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// The rendered report could not be written.
    #[error("failed to write report {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
