//! File operations
//!
//! Create, rename, delete, copy, move, and read. Every operation resolves
//! its arguments against the cursor, runs its existence/type pre-checks,
//! then performs a single mutating call. Pre-checks are time-of-check /
//! time-of-use by design; where the platform offers an atomic
//! create-exclusive primitive it is used, so a lost race reports
//! `AlreadyExists` instead of silently overwriting.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::compressor;
use crate::error::FmError;
use crate::hashing;
use crate::manager::{EntryKind, FileManager};
use crate::transfer;

impl FileManager {
    /// Create an empty file. Fails with `AlreadyExists` if anything of
    /// that name exists, distinguishing file from directory in the
    /// message.
    pub fn add(&self, name: &str) -> Result<(), FmError> {
        let path = self.resolve(name)?;
        ensure_absent(&path)?;

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| FmError::from_io(path.clone(), e))?;
        drop(file);

        info!("Created empty file {}", path.display());
        Ok(())
    }

    /// Rename a file. The destination is resolved like any path argument
    /// and must not exist; the rename itself is a single atomic
    /// filesystem call, never a copy+delete.
    pub fn rn(&self, path: &str, new_path: &str) -> Result<(), FmError> {
        let source = self.resolve(path)?;
        let destination = self.resolve(new_path)?;
        ensure_absent(&destination)?;

        fs::rename(&source, &destination).map_err(|e| FmError::from_io(source.clone(), e))?;

        info!("Renamed {} to {}", source.display(), destination.display());
        Ok(())
    }

    /// Delete a file. Directories are never removed.
    pub fn rm(&self, path: &str) -> Result<(), FmError> {
        let path = self.resolve(path)?;

        let metadata =
            fs::symlink_metadata(&path).map_err(|_| FmError::NotFound(path.clone()))?;
        if metadata.is_dir() {
            return Err(FmError::IsADirectory(path));
        }

        fs::remove_file(&path).map_err(|e| FmError::from_io(path.clone(), e))?;

        info!("Deleted file {}", path.display());
        Ok(())
    }

    /// Copy a file via streamed transfer.
    ///
    /// If the resolved destination is an existing directory, the copy
    /// lands at `<destination>/<basename(source)>`; an existing file is
    /// `AlreadyExists`; anything else is used literally. The destination
    /// is created exclusively, so a file that springs into existence
    /// between the pre-check and the create still fails rather than
    /// being overwritten. Returns the effective destination path.
    pub fn cp(&self, source: &str, destination: &str) -> Result<PathBuf, FmError> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        let destination = effective_destination(&source, destination)?;

        let metadata = fs::metadata(&source).map_err(|_| FmError::NotFound(source.clone()))?;
        if metadata.is_dir() {
            return Err(FmError::IsADirectory(source));
        }

        transfer::copy_file(&source, &destination, self.buffer_size())?;
        Ok(destination)
    }

    /// Move a file: copy then delete, sequentially.
    ///
    /// If the copy fails the source is untouched. If the copy succeeds
    /// but the delete fails, both files exist; that partial state is
    /// surfaced as `PartialMove` so the caller can retry the deletion.
    /// No rollback of the copy is attempted.
    pub fn mv(&self, source: &str, destination: &str) -> Result<(), FmError> {
        let copied_to = self.cp(source, destination)?;

        match self.rm(source) {
            Ok(()) => {
                info!("Moved {} to {}", source, copied_to.display());
                Ok(())
            }
            Err(cause) => Err(FmError::PartialMove {
                source: self.resolve(source)?,
                destination: copied_to,
                cause: Box::new(cause),
            }),
        }
    }

    /// Stream a file's bytes into `sink`.
    ///
    /// The sink is flushed but never closed; its lifecycle belongs to the
    /// caller (typically a shared output stream reused across commands).
    pub fn cat(&self, path: &str, sink: &mut dyn Write) -> Result<(), FmError> {
        let path = self.resolve(path)?;

        let metadata = fs::metadata(&path).map_err(|_| FmError::NotFound(path.clone()))?;
        if metadata.is_dir() {
            return Err(FmError::IsADirectory(path));
        }

        let mut file = fs::File::open(&path).map_err(|e| FmError::from_io(path.clone(), e))?;
        transfer::stream_copy(&mut file, sink, self.buffer_size()).map_err(|e| {
            FmError::Stream {
                path: path.clone(),
                source: e,
            }
        })?;

        info!("Streamed {} to output", path.display());
        Ok(())
    }

    /// SHA-256 digest of a file's content, lowercase hex.
    pub fn hash(&self, path: &str) -> Result<String, FmError> {
        let path = self.resolve(path)?;

        let metadata = fs::metadata(&path).map_err(|_| FmError::NotFound(path.clone()))?;
        if metadata.is_dir() {
            return Err(FmError::IsADirectory(path));
        }

        hashing::digest_file(&path, self.buffer_size())
    }

    /// Gzip-compress `source` into `destination`. The destination must
    /// not already exist in any form.
    pub fn compress(&self, source: &str, destination: &str) -> Result<(), FmError> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        compressor::compress(&source, &destination, self.buffer_size())
    }

    /// Decompress a gzip `source` into `destination`. On a corrupt input
    /// stream the partially written destination is deleted before the
    /// error is surfaced.
    pub fn decompress(&self, source: &str, destination: &str) -> Result<(), FmError> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        compressor::decompress(&source, &destination, self.buffer_size())
    }
}

/// Pre-check that nothing exists at `path`, reporting what was found.
fn ensure_absent(path: &Path) -> Result<(), FmError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) => Err(FmError::AlreadyExists {
            path: path.to_path_buf(),
            kind: if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        }),
        Err(_) => Ok(()),
    }
}

/// Apply the copy destination policy: an existing directory redirects the
/// copy inside it, an existing file is a conflict, an absent path is used
/// literally.
fn effective_destination(source: &Path, destination: PathBuf) -> Result<PathBuf, FmError> {
    match fs::metadata(&destination) {
        Ok(metadata) if metadata.is_dir() => {
            let name = source.file_name().ok_or_else(|| {
                FmError::InvalidInput(format!("{} has no file name", source.display()))
            })?;
            Ok(destination.join(name))
        }
        Ok(_) => Err(FmError::AlreadyExists {
            path: destination,
            kind: EntryKind::File,
        }),
        Err(_) => Ok(destination),
    }
}
