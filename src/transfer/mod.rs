//! Streaming transfer
//!
//! Bounded-buffer byte transfer shared by copy, read, hash, and the gzip
//! codec paths. Memory use is one reusable chunk buffer regardless of
//! file size.

mod operations;

pub use operations::{copy_file, stream_copy};
