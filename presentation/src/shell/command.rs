//! Edit shell command parsing

use crate::output::listing::{ListOptions, SortKey};

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List(ListOptions),
    Show(String),
    Edit(String),
    Set { name: String, value: String },
    Toggle(String),
    Revert(String),
    Diff,
    Save,
    Reload,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a trimmed, non-empty input line.
    ///
    /// `set` takes the rest of the line as the value, so values may contain
    /// spaces: `set Signature Kind regards`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "list" | "ls" => Self::parse_list(rest),
            "show" => Self::require_name(rest, "show").map(ShellCommand::Show),
            "edit" => Self::require_name(rest, "edit").map(ShellCommand::Edit),
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                let name = Self::require_name(name, "set")?;
                Ok(ShellCommand::Set {
                    name,
                    value: value.to_string(),
                })
            }
            "toggle" => Self::require_name(rest, "toggle").map(ShellCommand::Toggle),
            "revert" => Self::require_name(rest, "revert").map(ShellCommand::Revert),
            "diff" => Ok(ShellCommand::Diff),
            "save" => Ok(ShellCommand::Save),
            "reload" => Ok(ShellCommand::Reload),
            "help" | "h" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }

    fn parse_list(rest: &str) -> Result<Self, String> {
        let mut options = ListOptions::default();
        for word in rest.split_whitespace() {
            match word {
                "--dirty" => options = options.dirty_only(true),
                "--by-current" => options = options.sorted_by(SortKey::Current),
                "--by-name" => options = options.sorted_by(SortKey::Name),
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown list option: {}", flag));
                }
                filter => options = options.with_filter(filter),
            }
        }
        Ok(ShellCommand::List(options))
    }

    fn require_name(rest: &str, verb: &str) -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("Usage: {} <NAME>", verb))
        } else {
            Ok(rest.to_string())
        }
    }
}

pub const HELP: &str = "\
Commands:
  list [TEXT] [--dirty] [--by-current]  List settings
  show <NAME>                           Show one setting in detail
  edit <NAME>                           Start editing a setting
  set <NAME> <VALUE>                    Stage a value (starts editing if needed)
  toggle <NAME>                         Flip a staged Boolean value
  revert <NAME>                         Discard the staged value
  diff                                  Show the update payload
  save                                  Write all staged values
  reload                                Re-read live values
  help                                  Show this help
  quit                                  Exit";
