//! Source Context - best-effort git provenance for deployed binaries
//!
//! Deploy tooling can drop a `source-context.json` next to an application's
//! executable, recording which repository and commit the binary was built
//! from. This library locates that file, parses it once per process, and
//! exposes the commit SHA and repository URL so diagnostic and telemetry
//! consumers can tag their reports with them.
//!
//! Every anticipated failure (missing file, I/O error, malformed JSON)
//! degrades to "no data available" rather than an error: provenance is
//! decoration, never a dependency.

pub mod context;
mod document;
pub mod error;

pub use context::{SourceContext, SOURCE_CONTEXT_FILE};
pub use error::SourceContextError;

/// Result type alias for source context operations
pub type Result<T> = std::result::Result<T, SourceContextError>;
