//! Command handlers
//!
//! One handler per table entry, invoking the file manager and shaping
//! the text the shell prints. Arity is enforced here, before any
//! handler body runs; a mismatch never reaches the core.

use std::io::Write;

use console::style;
use log::info;

use crate::error::CommandError;
use crate::manager::{DirectoryListing, FileManager};
use crate::osinfo;

use super::parser::CommandLine;
use super::registry::{lookup, CommandKind};

/// What a successful command hands back to the shell.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing to print beyond the generic success indicator.
    Done,
    /// A payload to print verbatim.
    Text(String),
}

/// Dispatch one parsed line against the file manager.
///
/// `sink` receives raw byte output (`cat`); it is shared with the shell
/// and never closed here.
pub fn dispatch(
    line: &CommandLine,
    manager: &mut FileManager,
    sink: &mut dyn Write,
) -> Result<Outcome, CommandError> {
    let spec =
        lookup(&line.name).ok_or_else(|| CommandError::UnknownCommand(line.name.clone()))?;

    if line.args.len() != spec.arity {
        return Err(CommandError::ArgumentsError {
            expected: spec.arity,
        });
    }

    info!("Dispatching command {:?}", line.name);

    match spec.kind {
        CommandKind::Up => {
            manager.up()?;
            Ok(Outcome::Done)
        }
        CommandKind::Cd => {
            manager.cd(&line.args[0])?;
            Ok(Outcome::Done)
        }
        CommandKind::Ls => Ok(Outcome::Text(format_listing(&manager.ls()?))),
        CommandKind::Cat => {
            manager.cat(&line.args[0], sink)?;
            Ok(Outcome::Done)
        }
        CommandKind::Add => {
            manager.add(&line.args[0])?;
            Ok(Outcome::Done)
        }
        CommandKind::Rn => {
            manager.rn(&line.args[0], &line.args[1])?;
            Ok(Outcome::Done)
        }
        CommandKind::Rm => {
            manager.rm(&line.args[0])?;
            Ok(Outcome::Done)
        }
        CommandKind::Cp => {
            manager.cp(&line.args[0], &line.args[1])?;
            Ok(Outcome::Done)
        }
        CommandKind::Mv => {
            manager.mv(&line.args[0], &line.args[1])?;
            Ok(Outcome::Done)
        }
        CommandKind::Os => handle_os(line),
        CommandKind::Hash => {
            let digest = manager.hash(&line.args[0])?;
            Ok(Outcome::Text(format!("Hash: {}", style(digest).bold())))
        }
        CommandKind::Compress => {
            manager.compress(&line.args[0], &line.args[1])?;
            Ok(Outcome::Done)
        }
        CommandKind::Decompress => {
            manager.decompress(&line.args[0], &line.args[1])?;
            Ok(Outcome::Done)
        }
    }
}

/// Directory listing, directories first, with a type column.
fn format_listing(listing: &DirectoryListing) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        style(format!("Total directories: {}", listing.dirs.len())).magenta()
    ));
    output.push_str(&format!(
        "{}\n",
        style(format!("Total files: {}", listing.files.len())).magenta()
    ));

    for dir in &listing.dirs {
        output.push_str(&format!("{} {}\n", style("d").cyan(), style(dir).bold()));
    }
    for file in &listing.files {
        output.push_str(&format!("- {}\n", file));
    }

    output.trim_end().to_string()
}

/// `os` is parameter-driven: exactly one `--parameter` selects the query.
fn handle_os(line: &CommandLine) -> Result<Outcome, CommandError> {
    if line.params.is_empty() {
        return Err(CommandError::InvalidInput(
            "os requires one parameter, e.g. os --EOL".into(),
        ));
    }
    if line.params.len() > 1 {
        return Err(CommandError::ArgumentsError { expected: 1 });
    }

    let name = line.params.keys().next().map(String::as_str);
    let text = match name {
        Some("EOL") => format!("EOL is equal to: {}", style(format!("{:?}", osinfo::eol())).bold()),
        Some("cpus") => format!(
            "Overall amount of CPUS: {}",
            style(osinfo::cpu_count()).bold()
        ),
        Some("homedir") => match osinfo::home_dir() {
            Some(home) => format!("Your home dir is: {}", style(home.display()).bold()),
            None => return Err(CommandError::InvalidInput("home directory unknown".into())),
        },
        Some("username") => format!("Username is: {}", style(osinfo::username()).bold()),
        Some("architecture") => {
            format!("Architecture is: {}", style(osinfo::architecture()).bold())
        }
        _ => {
            return Err(CommandError::InvalidInput(
                "unknown os parameter".into(),
            ));
        }
    };

    Ok(Outcome::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parser::parse_line;
    use crate::error::FmError;

    fn manager_at(dir: &std::path::Path) -> FileManager {
        FileManager::new(dir.to_path_buf(), 8192)
    }

    fn run(line: &str, manager: &mut FileManager) -> Result<Outcome, CommandError> {
        let parsed = parse_line(line).unwrap().unwrap();
        let mut sink = Vec::new();
        dispatch(&parsed, manager, &mut sink)
    }

    #[test]
    fn test_unknown_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_at(dir.path());

        assert!(matches!(
            run("frobnicate", &mut manager),
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_arity_mismatch_never_reaches_core() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_at(dir.path());

        assert!(matches!(
            run("cd", &mut manager),
            Err(CommandError::ArgumentsError { expected: 1 })
        ));
        assert!(matches!(
            run("ls extra", &mut manager),
            Err(CommandError::ArgumentsError { expected: 0 })
        ));
        assert!(matches!(
            run("rn only-one", &mut manager),
            Err(CommandError::ArgumentsError { expected: 2 })
        ));
    }

    #[test]
    fn test_add_then_ls_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_at(dir.path());

        assert!(matches!(run("add note.txt", &mut manager), Ok(Outcome::Done)));
        match run("ls", &mut manager).unwrap() {
            Outcome::Text(text) => assert!(text.contains("note.txt")),
            other => panic!("expected listing text, got {:?}", other),
        }
    }

    #[test]
    fn test_cat_streams_to_sink() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("greeting"), b"hello sink").unwrap();
        let mut manager = manager_at(dir.path());

        let parsed = parse_line("cat greeting").unwrap().unwrap();
        let mut sink = Vec::new();
        dispatch(&parsed, &mut manager, &mut sink).unwrap();

        assert_eq!(sink, b"hello sink");
    }

    #[test]
    fn test_session_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_at(dir.path());

        assert!(matches!(
            run("rm missing.txt", &mut manager),
            Err(CommandError::Fm(FmError::NotFound(_)))
        ));
        // Same manager still works.
        assert!(matches!(run("ls", &mut manager), Ok(Outcome::Text(_))));
    }

    #[test]
    fn test_os_requires_exactly_one_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_at(dir.path());

        assert!(matches!(
            run("os", &mut manager),
            Err(CommandError::InvalidInput(_))
        ));
        assert!(matches!(
            run("os --cpus --EOL", &mut manager),
            Err(CommandError::ArgumentsError { expected: 1 })
        ));
        assert!(matches!(run("os --architecture", &mut manager), Ok(Outcome::Text(_))));
    }
}
