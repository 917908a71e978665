//! Content addressing for artifact files
//!
//! Each artifact is stored in the report archive under
//! `{md5 of content}/{base name}`. Identical files share the hash segment, so
//! the address doubles as the deduplication key when packing.

use crate::error::{ReportError, ReportResult};
use md5::{Digest, Md5};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Compute the archive path of a file: `{md5 lowercase hex}/{base name}`.
pub fn compute_address(file_path: &Path) -> ReportResult<String> {
    let hash = md5_hex_from_file(file_path)?;
    let name = base_name(file_path).ok_or_else(|| ReportError::ArtifactNotFound {
        path: file_path.to_path_buf(),
    })?;
    Ok(format!("{}/{}", hash, name))
}

/// MD5 of the whole file content, lowercase hex.
pub fn md5_hex_from_file(file_path: &Path) -> ReportResult<String> {
    let data = fs::read(extended_path(file_path))?;
    Ok(md5_hex(&data))
}

/// MD5 of `data`, lowercase hex.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

/// Path to hand to the OS when opening `path`.
///
/// On Windows, absolute local and UNC paths are rewritten to their extended
/// form so that files nested deeper than `MAX_PATH` can be opened.
/// Everywhere else this is the identity.
pub fn extended_path(path: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(extend_windows_path(&path.to_string_lossy()))
    }
    #[cfg(not(windows))]
    {
        path.to_path_buf()
    }
}

/// Rewrite a Windows path string into its extended-length form.
///
/// - `C:\dir\..\file` becomes `\\?\C:\file` (normalized)
/// - `\\server\share\file` becomes `\\?\UNC\server\share\file`
/// - already extended (`\\?\...`) and relative paths are returned unchanged
pub fn extend_windows_path(source: &str) -> String {
    let bytes = source.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' {
        return format!(r"\\?\{}", normalize_windows(source));
    }
    if source.starts_with(r"\\") && !source.starts_with(r"\\?\") {
        let rest = source.trim_start_matches('\\');
        return format!(r"\\?\UNC\{}", normalize_windows(rest));
    }
    source.to_string()
}

/// Collapse `.`/`..` segments and turn forward slashes into backslashes.
fn normalize_windows(path: &str) -> String {
    let unified = path.replace('/', "\\");
    let mut parts: Vec<&str> = Vec::new();
    for part in unified.split('\\') {
        match part {
            "" | "." => {}
            ".." => {
                // never pop the drive or the UNC host
                if parts.len() > 1 {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }
    let mut joined = parts.join("\\");
    // a bare drive ("C:") still names the root
    if parts.len() == 1 && joined.ends_with(':') {
        joined.push('\\');
    }
    joined
}

/// Base name of a path as a string, if it has one.
pub(crate) fn base_name(path: &Path) -> Option<String> {
    match path.components().next_back() {
        Some(Component::Normal(name)) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}
