//! Module specifier resolution.
//!
//! `require("./foo")` and `import("./foo.js")` name the same file. Specifiers
//! are resolved against the directory of the importing file, normalized
//! lexically (no filesystem access) and given the default extension when
//! they carry none, so both spellings produce the same registry key.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Resolve `specifier` relative to the directory containing `containing_file`.
///
/// Absolute specifiers replace the directory entirely. `default_extension`
/// (including the leading dot) is appended when the resolved path has no
/// extension.
pub fn resolve_specifier(
    containing_file: &Path,
    specifier: &str,
    default_extension: &str,
) -> PathBuf {
    let dir = containing_file.parent().unwrap_or_else(|| Path::new(""));
    let resolved = normalize_path(&dir.join(specifier));
    with_default_extension(resolved, default_extension)
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` above the root is dropped; `..` at the start of a relative path is
/// kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

fn with_default_extension(path: PathBuf, default_extension: &str) -> PathBuf {
    if path.extension().is_some() || default_extension.is_empty() {
        return path;
    }
    let mut raw: OsString = path.into_os_string();
    raw.push(default_extension);
    PathBuf::from(raw)
}
