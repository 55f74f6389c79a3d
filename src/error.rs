use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading measurement tables or rendering figures.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The input file does not exist.
    #[error("missing input file {}", .path.display())]
    MissingFile { path: PathBuf },

    /// A required column is absent, a cell is not numeric, or the rows break
    /// the table invariants.
    #[error("malformed table {}: {reason}", .path.display())]
    MalformedTable { path: PathBuf, reason: String },

    /// The figure could not be written to `path`.
    #[error("failed to render {}: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
}

impl PlotError {
    pub fn malformed(path: &Path, reason: impl ToString) -> Self {
        Self::MalformedTable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn render(path: &Path, reason: impl ToString) -> Self {
        Self::Render {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
