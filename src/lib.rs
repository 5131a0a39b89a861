pub mod commands;
pub mod compressor;
pub mod config;
pub mod error;
pub mod hashing;
pub mod manager;
pub mod osinfo;
pub mod shell;
pub mod transfer;

pub use manager::FileManager;
pub use shell::Shell;
