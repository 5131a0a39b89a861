//! Transfer operations implementation

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use log::info;

use crate::error::FmError;

/// Pump bytes from `reader` to `writer` in `buffer_size` chunks.
///
/// The writer is flushed once the reader is exhausted but is not closed;
/// handle lifecycle stays with the caller. Returns the byte count.
pub fn stream_copy<R, W>(reader: &mut R, writer: &mut W, buffer_size: usize) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; buffer_size];
    let mut total = 0u64;

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n])?;
        total += n as u64;
    }

    writer.flush()?;
    Ok(total)
}

/// Stream `source` into a newly created `destination`.
///
/// The destination is opened with create-exclusive semantics: if it
/// sprang into existence since the caller's pre-check, this fails with
/// `AlreadyExists` rather than overwriting.
pub fn copy_file(source: &Path, destination: &Path, buffer_size: usize) -> Result<u64, FmError> {
    let mut reader =
        File::open(source).map_err(|e| FmError::from_io(source.to_path_buf(), e))?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|e| FmError::from_io(destination.to_path_buf(), e))?;

    let bytes = stream_copy(&mut reader, &mut writer, buffer_size).map_err(|e| {
        FmError::Stream {
            path: destination.to_path_buf(),
            source: e,
        }
    })?;

    info!(
        "Copied {} to {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes
    );
    Ok(bytes)
}
