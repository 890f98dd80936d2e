//! Path parameter helpers for the save/open tools

use std::path::{Path, PathBuf};

/// Extension added to save paths that have none
pub const DOCUMENT_EXTENSION: &str = "json";

/// Resolve an optional path parameter
///
/// A missing or blank path selects `default`. Other paths are trimmed.
///
/// # Examples
/// ```
/// # use checklist_mcp::validation::resolve_path;
/// # use std::path::{Path, PathBuf};
/// let default = Path::new("list.json");
/// assert_eq!(resolve_path(None, default), PathBuf::from("list.json"));
/// assert_eq!(resolve_path(Some("  "), default), PathBuf::from("list.json"));
/// assert_eq!(resolve_path(Some(" other.json "), default), PathBuf::from("other.json"));
/// ```
pub fn resolve_path(path: Option<&str>, default: &Path) -> PathBuf {
    match path.map(str::trim) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => default.to_path_buf(),
    }
}

/// Add the `.json` extension to a path that has no extension
pub fn with_document_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DOCUMENT_EXTENSION)
    }
}

/// Resolve the target of a save
///
/// Like [`resolve_path`], but an explicitly given path without an extension
/// gets `.json` appended. The default path is used unchanged.
pub fn resolve_save_path(path: Option<&str>, default: &Path) -> PathBuf {
    match path.map(str::trim) {
        Some(p) if !p.is_empty() => with_document_extension(PathBuf::from(p)),
        _ => default.to_path_buf(),
    }
}
