//! File Manager Shell - Entry Point
//!
//! An interactive, stateful file-navigation and manipulation shell.

use log::{error, info};

use rfm_shell::commands::parser;
use rfm_shell::config::ShellConfig;
use rfm_shell::osinfo;
use rfm_shell::Shell;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching file manager shell...");

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let username = parser::parse_params(&argv)
        .remove("username")
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_else(osinfo::username);

    let mut shell = Shell::new(&config, username);
    shell.run().await;
}
