//! Gzip compression
//!
//! Streamed gzip encode/decode between two files. Both directions share
//! the copy pre-checks on the source, but the destination policy is
//! stricter than `cp`: it must not already exist in any form, directory
//! included. A transfer that fails mid-stream deletes the partially
//! written destination before surfacing the error; a truncated archive
//! or corrupt output file is never left on disk.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{info, warn};

use crate::error::FmError;
use crate::manager::EntryKind;
use crate::transfer::stream_copy;

/// Gzip-compress `source` into `destination`.
pub fn compress(source: &Path, destination: &Path, buffer_size: usize) -> Result<(), FmError> {
    ensure_destination_absent(destination)?;
    let mut reader = open_source(source)?;

    let writer = create_destination(destination)?;
    let mut encoder = GzEncoder::new(writer, Compression::default());

    let result = stream_copy(&mut reader, &mut encoder, buffer_size)
        .and_then(|_| encoder.finish().map(drop));

    if let Err(e) = result {
        remove_partial(destination);
        return Err(FmError::Stream {
            path: destination.to_path_buf(),
            source: e,
        });
    }

    info!(
        "Compressed {} to {}",
        source.display(),
        destination.display()
    );
    Ok(())
}

/// Decompress a gzip `source` into `destination`.
pub fn decompress(source: &Path, destination: &Path, buffer_size: usize) -> Result<(), FmError> {
    ensure_destination_absent(destination)?;
    let reader = open_source(source)?;

    let mut decoder = GzDecoder::new(reader);
    let mut writer = create_destination(destination)?;

    match stream_copy(&mut decoder, &mut writer, buffer_size) {
        Ok(bytes) => {
            info!(
                "Decompressed {} to {} ({} bytes)",
                source.display(),
                destination.display(),
                bytes
            );
            Ok(())
        }
        Err(e) => {
            drop(writer);
            remove_partial(destination);
            Err(FmError::Stream {
                path: source.to_path_buf(),
                source: e,
            })
        }
    }
}

/// The destination must not exist at all, unlike `cp` which tolerates an
/// existing directory.
fn ensure_destination_absent(destination: &Path) -> Result<(), FmError> {
    match fs::symlink_metadata(destination) {
        Ok(metadata) => Err(FmError::AlreadyExists {
            path: destination.to_path_buf(),
            kind: if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        }),
        Err(_) => Ok(()),
    }
}

fn open_source(source: &Path) -> Result<File, FmError> {
    let metadata = fs::metadata(source).map_err(|_| FmError::NotFound(source.to_path_buf()))?;
    if metadata.is_dir() {
        return Err(FmError::IsADirectory(source.to_path_buf()));
    }
    File::open(source).map_err(|e| FmError::from_io(source.to_path_buf(), e))
}

fn create_destination(destination: &Path) -> Result<File, FmError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|e| FmError::from_io(destination.to_path_buf(), e))
}

fn remove_partial(destination: &Path) {
    if let Err(e) = fs::remove_file(destination) {
        warn!(
            "Failed to remove partial output {}: {}",
            destination.display(),
            e
        );
    }
}
