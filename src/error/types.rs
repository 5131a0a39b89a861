//! Error types
//!
//! Defines domain-specific error types for the file manager core and
//! the command dispatcher.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::manager::EntryKind;

/// File manager errors
///
/// Every variant carries the resolved path it refers to, so the shell can
/// print a message that names the offending target. No variant is fatal to
/// the session.
#[derive(Debug)]
pub enum FmError {
    /// The resolved path does not exist where existence was required.
    NotFound(PathBuf),
    /// The resolved path exists where absence was required.
    AlreadyExists { path: PathBuf, kind: EntryKind },
    /// Expected a directory, found something else.
    NotADirectory(PathBuf),
    /// Expected a file, found a directory.
    IsADirectory(PathBuf),
    /// Malformed argument caught before touching the filesystem.
    InvalidInput(String),
    /// I/O failure mid-transfer (disk full, permission revoked, corrupt
    /// compressed input).
    Stream { path: PathBuf, source: io::Error },
    /// `mv`: the copy succeeded but removing the source failed. The
    /// destination holds a complete duplicate; the caller may retry the
    /// deletion. No rollback is attempted.
    PartialMove {
        source: PathBuf,
        destination: PathBuf,
        cause: Box<FmError>,
    },
}

impl fmt::Display for FmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmError::NotFound(p) => write!(f, "Path not found: {}", p.display()),
            FmError::AlreadyExists { path, kind } => match kind {
                EntryKind::Directory => {
                    write!(f, "A directory with this name already exists: {}", path.display())
                }
                EntryKind::File => write!(f, "File already exists: {}", path.display()),
            },
            FmError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
            FmError::IsADirectory(p) => write!(f, "Is a directory: {}", p.display()),
            FmError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            FmError::Stream { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            FmError::PartialMove {
                source,
                destination,
                cause,
            } => write!(
                f,
                "Copied {} to {} but failed to remove the source: {}",
                source.display(),
                destination.display(),
                cause
            ),
        }
    }
}

impl std::error::Error for FmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FmError::Stream { source, .. } => Some(source),
            FmError::PartialMove { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl FmError {
    /// Map an `io::Error` raised while operating on `path` to the matching
    /// domain error. Used where the kernel call itself is the check, e.g.
    /// `create_new` racing against a concurrent create.
    pub fn from_io(path: PathBuf, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FmError::NotFound(path),
            io::ErrorKind::AlreadyExists => {
                let kind = if path.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                FmError::AlreadyExists { path, kind }
            }
            _ => FmError::Stream {
                path,
                source: error,
            },
        }
    }
}

/// Dispatcher errors
///
/// Raised above the file manager: unknown command names and arity
/// mismatches never reach the core.
#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    ArgumentsError { expected: usize },
    InvalidInput(String),
    Fm(FmError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(_) => write!(f, "Invalid input"),
            CommandError::ArgumentsError { expected: 0 } => {
                write!(f, "Operation doesn't have arguments")
            }
            CommandError::ArgumentsError { expected } => {
                write!(f, "Number of arguments required: {}", expected)
            }
            CommandError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CommandError::Fm(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Fm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FmError> for CommandError {
    fn from(error: FmError) -> Self {
        CommandError::Fm(error)
    }
}
