//! OS info queries
//!
//! Host facts surfaced by the `os` command: line ending, logical CPU
//! count, home directory, account username, CPU architecture.

use std::path::PathBuf;

use directories::UserDirs;

/// Platform line ending.
pub fn eol() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

/// Logical CPU count.
pub fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// The invoking user's home directory, if the platform reports one.
pub fn home_dir() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// OS account name of the invoking user.
pub fn username() -> String {
    whoami::username()
}

/// CPU architecture the binary was built for.
pub fn architecture() -> &'static str {
    std::env::consts::ARCH
}
