//! Input line parsing
//!
//! Splits a raw line into whitespace-separated tokens, honoring quoted
//! substrings (single or double) as part of one token, then separates
//! `--name=value` / `--name value` / bare `--flag` named parameters from
//! positional arguments. The same grammar parses the process argv for
//! start parameters like `--username`.

use std::collections::BTreeMap;

use crate::error::CommandError;

/// A named parameter's value: `--flag` carries no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Flag,
    Value(String),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Flag => None,
            ParamValue::Value(v) => Some(v),
        }
    }
}

/// A parsed input line: command name, positional args, named params.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
    pub params: BTreeMap<String, ParamValue>,
}

/// Parse a full input line. Returns `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, CommandError> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let (mut positional, params) = split_params(&tokens);
    if positional.is_empty() {
        // The line held only named parameters.
        return Err(CommandError::InvalidInput("missing command name".into()));
    }

    let name = positional.remove(0);
    Ok(Some(CommandLine {
        name,
        args: positional,
        params,
    }))
}

/// Extract named parameters from an argv-style token list, dropping the
/// positionals. Used for process start parameters.
pub fn parse_params(tokens: &[String]) -> BTreeMap<String, ParamValue> {
    split_params(tokens).1
}

/// Whitespace tokenizer with quote support. A quoted substring joins the
/// surrounding characters into a single token, so `cp "a b.txt" out`
/// yields three tokens.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CommandError::InvalidInput("unterminated quote".into()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Separate `--name[=value]` tokens from positionals. A `--name` with no
/// inline value consumes the following token as its value unless that
/// token is itself a parameter; otherwise it is a bare flag.
fn split_params(tokens: &[String]) -> (Vec<String>, BTreeMap<String, ParamValue>) {
    let mut positional = Vec::new();
    let mut params = BTreeMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if let Some(stripped) = token.strip_prefix("--") {
            match stripped.split_once('=') {
                Some((name, value)) => {
                    params.insert(name.to_string(), ParamValue::Value(value.to_string()));
                }
                None => match tokens.get(i + 1) {
                    Some(next) if !next.starts_with("--") => {
                        params.insert(stripped.to_string(), ParamValue::Value(next.clone()));
                        i += 1;
                    }
                    _ => {
                        params.insert(stripped.to_string(), ParamValue::Flag);
                    }
                },
            }
        } else {
            positional.push(token.clone());
        }
        i += 1;
    }

    (positional, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(input: &str) -> CommandLine {
        parse_line(input).unwrap().unwrap()
    }

    #[test]
    fn test_parse_basic_commands() {
        let parsed = line("ls");
        assert_eq!(parsed.name, "ls");
        assert!(parsed.args.is_empty());
        assert!(parsed.params.is_empty());

        let parsed = line("cd /tmp");
        assert_eq!(parsed.name, "cd");
        assert_eq!(parsed.args, vec!["/tmp"]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = line("  rm   old.txt  ");
        assert_eq!(parsed.name, "rm");
        assert_eq!(parsed.args, vec!["old.txt"]);
    }

    #[test]
    fn test_quoted_arguments_keep_spaces() {
        let parsed = line(r#"cp "my file.txt" backup"#);
        assert_eq!(parsed.args, vec!["my file.txt", "backup"]);

        let parsed = line("cat 'a b c.log'");
        assert_eq!(parsed.args, vec!["a b c.log"]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        let parsed = line(r#"cat pre"mid dle"post"#);
        assert_eq!(parsed.args, vec!["premid dlepost"]);
    }

    #[test]
    fn test_unterminated_quote_rejected() {
        assert!(matches!(
            parse_line(r#"cat "oops"#),
            Err(CommandError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_named_parameter_forms() {
        let parsed = line("os --EOL");
        assert_eq!(parsed.params.get("EOL"), Some(&ParamValue::Flag));

        let parsed = line("os --format=long");
        assert_eq!(
            parsed.params.get("format"),
            Some(&ParamValue::Value("long".into()))
        );

        let parsed = line("os --format long");
        assert_eq!(
            parsed.params.get("format"),
            Some(&ParamValue::Value("long".into()))
        );
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_flag_before_flag_takes_no_value() {
        let parsed = line("os --cpus --EOL");
        assert_eq!(parsed.params.get("cpus"), Some(&ParamValue::Flag));
        assert_eq!(parsed.params.get("EOL"), Some(&ParamValue::Flag));
    }

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("").unwrap(), None);
    }

    #[test]
    fn test_argv_start_params() {
        let argv: Vec<String> = vec!["--username=alice".into(), "ignored".into()];
        let params = parse_params(&argv);
        assert_eq!(
            params.get("username"),
            Some(&ParamValue::Value("alice".into()))
        );

        let argv: Vec<String> = vec!["--username".into(), "bob".into()];
        let params = parse_params(&argv);
        assert_eq!(
            params.get("username"),
            Some(&ParamValue::Value("bob".into()))
        );
    }
}
