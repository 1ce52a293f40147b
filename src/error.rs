//! Error types for source context loading

use serde_json::error::Category;
use std::path::PathBuf;

/// Failures produced while reading or parsing the source context file.
///
/// Most of these never escape the crate: benign failures degrade to an
/// absent context instead of propagating (see [`SourceContextError::is_benign`]).
#[derive(Debug, thiserror::Error)]
pub enum SourceContextError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl SourceContextError {
    /// Whether this failure means "no usable source context" rather than a
    /// problem worth surfacing.
    ///
    /// Every read failure is benign: a missing file and unreadable content
    /// both mean the binary was deployed without a source context. Parse
    /// failures are benign only for the recognized malformed-input
    /// categories; an I/O failure reported by the parser is not a parse
    /// failure and does not degrade to an absent context.
    pub(crate) fn is_benign(&self) -> bool {
        match self {
            Self::Read { .. } => true,
            Self::Parse { source, .. } => matches!(
                source.classify(),
                Category::Syntax | Category::Eof | Category::Data
            ),
        }
    }
}
