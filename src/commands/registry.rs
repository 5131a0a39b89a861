//! Command table
//!
//! Explicit mapping from command name to a typed handler, with arity as
//! declared metadata. The dispatcher checks the positional-argument
//! count against `arity` before a handler runs.

/// Which operation a command invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Up,
    Cd,
    Ls,
    Cat,
    Add,
    Rn,
    Rm,
    Cp,
    Mv,
    Os,
    Hash,
    Compress,
    Decompress,
}

/// One entry of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    /// Exact number of positional arguments the handler takes. Named
    /// parameters are not counted; `os` is parameter-driven.
    pub arity: usize,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { name: "up", kind: CommandKind::Up, arity: 0 },
    CommandSpec { name: "cd", kind: CommandKind::Cd, arity: 1 },
    CommandSpec { name: "ls", kind: CommandKind::Ls, arity: 0 },
    CommandSpec { name: "cat", kind: CommandKind::Cat, arity: 1 },
    CommandSpec { name: "add", kind: CommandKind::Add, arity: 1 },
    CommandSpec { name: "rn", kind: CommandKind::Rn, arity: 2 },
    CommandSpec { name: "rm", kind: CommandKind::Rm, arity: 1 },
    CommandSpec { name: "cp", kind: CommandKind::Cp, arity: 2 },
    CommandSpec { name: "mv", kind: CommandKind::Mv, arity: 2 },
    CommandSpec { name: "os", kind: CommandKind::Os, arity: 0 },
    CommandSpec { name: "hash", kind: CommandKind::Hash, arity: 1 },
    CommandSpec { name: "compress", kind: CommandKind::Compress, arity: 2 },
    CommandSpec { name: "decompress", kind: CommandKind::Decompress, arity: 2 },
];

/// Look up a command by name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}
