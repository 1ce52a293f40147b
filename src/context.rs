//! The source context lookup: locate, read, and cache provenance metadata

use crate::document::Document;
use crate::error::SourceContextError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File name probed in the executable's directory.
pub const SOURCE_CONTEXT_FILE: &str = "source-context.json";

/// Process-wide cached context, loaded at most once.
static CURRENT: OnceLock<SourceContext> = OnceLock::new();

/// Source control provenance of the running build, read from the
/// `source-context.json` deployed next to the executable.
///
/// Provenance is decorative: it tags diagnostics with the commit that
/// produced the binary and must never become a hard dependency. The
/// accessors therefore cannot fail; a missing or malformed file just reads
/// as an empty context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    git_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    git_repo_url: Option<String>,
}

impl SourceContext {
    /// The context for the running process.
    ///
    /// The first call resolves the executable's directory and loads
    /// `source-context.json` from it; every later call returns the same
    /// cached result without touching the file system again. Concurrent
    /// first calls block until the single load finishes, then all observe
    /// the identical result.
    ///
    /// A load failure outside the absorbed classes (see [`Self::from_dir`])
    /// panics the first caller and leaves the cell uninitialized, so the
    /// next access retries the load.
    pub fn current() -> &'static SourceContext {
        CURRENT.get_or_init(|| match base_dir() {
            Some(dir) => match SourceContext::from_dir(&dir) {
                Ok(context) => context,
                Err(err) => panic!("source context load failed: {}", err),
            },
            // No resolvable executable directory reads the same as a
            // missing file.
            None => SourceContext::default(),
        })
    }

    /// Load the context from `source-context.json` inside `dir`.
    ///
    /// One read per call, no caching. Absorbed failures (any I/O error,
    /// malformed JSON) yield `Ok` with an empty context; only a parser
    /// failure outside the malformed-input categories is an error.
    pub fn from_dir(dir: &Path) -> crate::Result<SourceContext> {
        let path = dir.join(SOURCE_CONTEXT_FILE);
        let document = match read_document(&path)? {
            Some(document) => document,
            None => return Ok(SourceContext::default()),
        };
        Ok(SourceContext {
            git_sha: document.git_revision_id().map(String::from),
            git_repo_url: document.url().map(String::from),
        })
    }

    /// Commit SHA the binary was built from (`git.revisionId` in the
    /// document), or `None` if unavailable.
    pub fn git_sha(&self) -> Option<&str> {
        self.git_sha.as_deref()
    }

    /// URL of the repository the binary was built from (`url` in the
    /// document), or `None` if unavailable.
    pub fn git_repo_url(&self) -> Option<&str> {
        self.git_repo_url.as_deref()
    }

    /// Whether no provenance data is available.
    pub fn is_empty(&self) -> bool {
        self.git_sha.is_none() && self.git_repo_url.is_none()
    }
}

/// Directory holding the running executable, where deploy tooling drops
/// `source-context.json`.
fn base_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.to_path_buf())
}

/// Read and parse the document at `path`, absorbing the failures that mean
/// "no usable source context".
fn read_document(path: &Path) -> crate::Result<Option<Document>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            return absorb(SourceContextError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Ok(Some(Document::new(value))),
        Err(source) => absorb(SourceContextError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Apply the classification policy: benign failures become "no document",
/// everything else propagates.
fn absorb(err: SourceContextError) -> crate::Result<Option<Document>> {
    if err.is_benign() {
        Ok(None)
    } else {
        Err(err)
    }
}
