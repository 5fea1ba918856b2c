//! Storage Backend Module
//!
//! Disk reads for the file server. Resolves request paths under the
//! configured root, rejecting anything that would escape it, and
//! normalizes directory requests to their index file. The cache never
//! touches the filesystem itself; this module is its only supplier.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::fs;

use crate::error::{CacheError, Result};

/// File served when a request resolves to a directory.
const INDEX_FILE: &str = "index.html";

// == Path Resolution ==
/// Maps a request path to a location under `root`.
///
/// Only plain path segments are accepted; `..`, drive prefixes, and
/// absolute components fail with [`CacheError::InvalidPath`] so a
/// request can never read outside the server root.
pub fn resolve(root: &Path, request_path: &str) -> Result<PathBuf> {
    let relative = request_path.trim_start_matches('/');

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            Component::CurDir => {}
            _ => return Err(CacheError::InvalidPath(request_path.to_string())),
        }
    }
    Ok(resolved)
}

// == Path Normalization ==
/// Canonicalizes a request path into the cache key it is served under.
///
/// Directory requests become requests for the directory's index file,
/// so `/docs/` and `/docs` both key as `/docs/index.html`. Plain file
/// paths pass through unchanged.
pub async fn normalize(root: &Path, request_path: &str) -> Result<String> {
    let resolved = resolve(root, request_path)?;

    if request_path.ends_with('/') {
        return Ok(format!("{}{}", request_path, INDEX_FILE));
    }

    match fs::metadata(&resolved).await {
        Ok(meta) if meta.is_dir() => Ok(format!("{}/{}", request_path, INDEX_FILE)),
        _ => Ok(request_path.to_string()),
    }
}

// == File Reads ==
/// Reads the file a (normalized) request path points at.
///
/// A missing file is reported as [`CacheError::NotFound`]; any other
/// filesystem failure surfaces as [`CacheError::Io`].
pub async fn read(root: &Path, request_path: &str) -> Result<Vec<u8>> {
    let resolved = resolve(root, request_path)?;

    match fs::read(&resolved).await {
        Ok(bytes) => Ok(bytes),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(CacheError::NotFound(request_path.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn test_root() -> TempDir {
        let root = TempDir::new().unwrap();
        std_fs::write(root.path().join("index.html"), b"<h1>home</h1>").unwrap();
        std_fs::create_dir(root.path().join("docs")).unwrap();
        std_fs::write(root.path().join("docs/index.html"), b"<h1>docs</h1>").unwrap();
        root
    }

    #[test]
    fn test_resolve_plain_path() {
        let root = test_root();
        let resolved = resolve(root.path(), "/docs/index.html").unwrap();
        assert_eq!(resolved, root.path().join("docs/index.html"));
    }

    #[test]
    fn test_resolve_rejects_parent_components() {
        let root = test_root();
        let result = resolve(root.path(), "/../secret.txt");
        assert!(matches!(result, Err(CacheError::InvalidPath(_))));

        let result = resolve(root.path(), "/docs/../../secret.txt");
        assert!(matches!(result, Err(CacheError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn test_normalize_root_slash() {
        let root = test_root();
        let key = normalize(root.path(), "/").await.unwrap();
        assert_eq!(key, "/index.html");
    }

    #[tokio::test]
    async fn test_normalize_directory_without_slash() {
        let root = test_root();
        let key = normalize(root.path(), "/docs").await.unwrap();
        assert_eq!(key, "/docs/index.html");
    }

    #[tokio::test]
    async fn test_normalize_directory_with_slash() {
        let root = test_root();
        let key = normalize(root.path(), "/docs/").await.unwrap();
        assert_eq!(key, "/docs/index.html");
    }

    #[tokio::test]
    async fn test_normalize_plain_file_passes_through() {
        let root = test_root();
        let key = normalize(root.path(), "/index.html").await.unwrap();
        assert_eq!(key, "/index.html");
    }

    #[tokio::test]
    async fn test_read_existing_file() {
        let root = test_root();
        let bytes = read(root.path(), "/docs/index.html").await.unwrap();
        assert_eq!(bytes, b"<h1>docs</h1>");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let root = test_root();
        let result = read(root.path(), "/nope.html").await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }
}
