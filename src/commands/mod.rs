//! Command dispatch
//!
//! Turns a raw input line into a command invocation against the file
//! manager: tokenizing (quote-aware), separating named parameters from
//! positional arguments, looking up the handler in the command table,
//! and enforcing its declared arity before the core is ever touched.

pub mod handlers;
pub mod parser;
pub mod registry;

pub use handlers::{dispatch, Outcome};
pub use parser::{parse_line, parse_params, CommandLine, ParamValue};
pub use registry::{lookup, CommandKind, CommandSpec, COMMANDS};
