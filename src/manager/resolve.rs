//! Path resolution
//!
//! Converts user-supplied path arguments into normalized absolute paths
//! against the cursor. Resolution is pure: no filesystem access, no
//! failure for syntactically valid input. Whether the target exists is
//! the calling operation's concern.

use std::path::{Component, Path, PathBuf};

use crate::error::FmError;

/// Resolve `input` against `cursor`.
///
/// Absolute inputs pass through normalization unchanged; relative inputs
/// are joined to the cursor first. `cursor` must be absolute.
pub fn resolve(cursor: &Path, input: &str) -> Result<PathBuf, FmError> {
    if input.is_empty() {
        return Err(FmError::InvalidInput("empty path argument".into()));
    }

    let candidate = Path::new(input);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        cursor.join(candidate)
    };

    Ok(normalize(&joined))
}

/// Collapse `.` and `..` segments lexically.
///
/// `..` at the filesystem root maps to the root itself, so resolving
/// `".."` from `/` is stable rather than an error.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() is false once only the root remains
                let _ = normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}
