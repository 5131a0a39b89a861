//! Interactive shell
//!
//! The REPL loop: banner, current-path trailer, line reading, dispatch,
//! and colored status output. Reads stdin line by line and races each
//! read against Ctrl-C; `.exit`, EOF, and Ctrl-C all take the same
//! goodbye path. Errors are reported and the session continues.

use std::io;

use console::style;
use log::error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::commands::{self, Outcome};
use crate::config::ShellConfig;
use crate::manager::FileManager;

pub struct Shell {
    manager: FileManager,
    username: String,
}

impl Shell {
    pub fn new(config: &ShellConfig, username: String) -> Self {
        Shell {
            manager: FileManager::new(config.start_path(), config.buffer_size),
            username,
        }
    }

    /// Run the interactive session to completion.
    pub async fn run(&mut self) {
        println!(
            "{}",
            style(format!("Welcome to the File Manager, {}!", self.username)).blue()
        );
        self.show_current_path();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    println!();
                    break;
                }
                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => {
                            let input = line.trim();
                            if input.is_empty() {
                                self.show_current_path();
                                continue;
                            }
                            if input == ".exit" {
                                break;
                            }
                            self.handle_line(input);
                            self.show_current_path();
                        }
                        // EOF: the input stream is gone, leave cleanly.
                        Ok(None) => break,
                        Err(e) => {
                            error!("Failed to read from stdin: {}", e);
                            break;
                        }
                    }
                }
            }
        }

        println!(
            "{}",
            style(format!(
                "Thank you for using File Manager, {}, goodbye!",
                self.username
            ))
            .blue()
        );
    }

    fn handle_line(&mut self, input: &str) {
        let parsed = match commands::parse_line(input) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return,
            Err(e) => {
                println!("{}", style(e).red());
                return;
            }
        };

        // cat streams file bytes straight to stdout; the handle is shared
        // per command and stays open across the session.
        let mut stdout = io::stdout();

        match commands::dispatch(&parsed, &mut self.manager, &mut stdout) {
            Ok(Outcome::Done) => println!("{}", style("Operation completed").green()),
            Ok(Outcome::Text(text)) => println!("{}", text),
            Err(e) => {
                error!("Command {} failed: {}", parsed.name, e);
                println!("{}", style(e).red());
            }
        }
    }

    fn show_current_path(&self) {
        println!(
            "\nYou are currently in {}",
            style(self.manager.current_path().display()).bold()
        );
    }
}
