//! Best-effort navigation over the parsed source context document

use serde_json::Value;

/// Parsed source context document.
///
/// The on-disk schema is a superset this crate does not model, so the
/// document stays a generic JSON value and only the two consulted paths are
/// exposed. Every lookup is non-throwing: a missing key, a non-object
/// intermediate, or a non-string leaf reads as `None`.
#[derive(Debug)]
pub(crate) struct Document(Value);

impl Document {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// Top-level `url`: the repository URL.
    pub(crate) fn url(&self) -> Option<&str> {
        self.0.get("url")?.as_str()
    }

    /// `revisionId` under the top-level `git` object: the commit SHA.
    ///
    /// `Value::get` returns `None` unless the value is an object holding
    /// the key, so a `git` that is a string or number reads as absent.
    pub(crate) fn git_revision_id(&self) -> Option<&str> {
        self.0.get("git")?.get("revisionId")?.as_str()
    }
}
