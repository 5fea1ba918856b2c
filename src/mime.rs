//! MIME Resolver Module
//!
//! Maps file extensions to content-type labels. The table is built once
//! at startup and handed to the request handlers through `AppState`,
//! never reached through ambient global state.

use std::collections::HashMap;

/// Label used when the extension is unknown or absent.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

// == Mime Table ==
/// Extension -> content-type lookup, case-insensitive on the extension.
#[derive(Debug)]
pub struct MimeTable {
    types: HashMap<&'static str, &'static str>,
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MimeTable {
    /// Builds the table of types the server knows how to label.
    pub fn new() -> Self {
        let types = HashMap::from([
            ("html", "text/html"),
            ("htm", "text/html"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("txt", "text/plain"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("png", "image/png"),
        ]);
        Self { types }
    }

    /// Resolves the content type for `path` from its last extension.
    ///
    /// Falls back to [`DEFAULT_MIME_TYPE`] when the path has no
    /// extension or the extension is not in the table.
    pub fn lookup(&self, path: &str) -> &'static str {
        let ext = match path.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => ext,
            _ => return DEFAULT_MIME_TYPE,
        };

        self.types
            .get(ext.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_MIME_TYPE)
    }
}
