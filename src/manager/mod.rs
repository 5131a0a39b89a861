//! Virtual file manager
//!
//! Owns the current-directory cursor and implements every operation that
//! touches the host filesystem: navigation, listing, file mutations, and
//! the streaming transfers (copy, move, read, hash, gzip).
//!
//! The cursor is an absolute, normalized directory path. It is mutated
//! only by a successful `cd`/`up` and is not re-validated between
//! operations; a directory deleted underneath the shell surfaces as
//! `NotFound` on the next operation that needs it.

mod operations;
pub mod resolve;
mod results;

pub use results::{DirectoryListing, EntryKind};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::FmError;

/// Stateful file manager with an injected starting directory.
///
/// Constructed once at process start and threaded through the command
/// dispatcher. Single-threaded by design: one operation runs to
/// completion before the next is issued.
pub struct FileManager {
    cursor: PathBuf,
    buffer_size: usize,
}

impl FileManager {
    /// Create a manager whose cursor starts at `start_dir`.
    ///
    /// The starting directory is trusted (it comes from configuration or
    /// a test fixture); it is normalized but not probed.
    pub fn new(start_dir: PathBuf, buffer_size: usize) -> Self {
        FileManager {
            cursor: resolve::normalize(&start_dir),
            buffer_size,
        }
    }

    /// The current cursor path.
    pub fn current_path(&self) -> &Path {
        &self.cursor
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Resolve a user path argument against the cursor. Pure; see
    /// [`resolve::resolve`].
    pub fn resolve(&self, input: &str) -> Result<PathBuf, FmError> {
        resolve::resolve(&self.cursor, input)
    }

    /// Change the cursor to `path`.
    ///
    /// The target is opened as a directory to verify it exists and is
    /// readable; on success the cursor becomes the canonicalized target
    /// and the handle is released. On failure the cursor is unchanged.
    pub fn cd(&mut self, path: &str) -> Result<(), FmError> {
        let target = self.resolve(path)?;

        let metadata = match fs::metadata(&target) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FmError::NotFound(target));
            }
            Err(e) => {
                return Err(FmError::Stream {
                    path: target,
                    source: e,
                });
            }
        };

        if !metadata.is_dir() {
            return Err(FmError::NotADirectory(target));
        }

        // Open as a directory; the handle is dropped right away.
        fs::read_dir(&target).map_err(|e| FmError::Stream {
            path: target.clone(),
            source: e,
        })?;

        let canonical = fs::canonicalize(&target).map_err(|e| FmError::Stream {
            path: target,
            source: e,
        })?;

        info!("Changed directory to {}", canonical.display());
        self.cursor = canonical;
        Ok(())
    }

    /// Move the cursor to its parent. At the filesystem root this is a
    /// no-op, not an error.
    pub fn up(&mut self) -> Result<(), FmError> {
        self.cd("..")
    }

    /// Enumerate the direct children of the cursor.
    ///
    /// Classification uses the dirent's own type indicator, avoiding a
    /// second stat per entry. Entries that are neither plain files nor
    /// directories (symlinks, devices) are bucketed as files.
    pub fn ls(&self) -> Result<DirectoryListing, FmError> {
        let entries = match fs::read_dir(&self.cursor) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FmError::NotFound(self.cursor.clone()));
            }
            Err(e) => {
                return Err(FmError::Stream {
                    path: self.cursor.clone(),
                    source: e,
                });
            }
        };

        let mut listing = DirectoryListing::default();
        for entry in entries {
            let entry = entry.map_err(|e| FmError::Stream {
                path: self.cursor.clone(),
                source: e,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => listing.dirs.push(name),
                _ => listing.files.push(name),
            }
        }

        listing.dirs.sort();
        listing.files.sort();
        Ok(listing)
    }
}
