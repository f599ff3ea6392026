//! ArgMatches → Command/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Contract functions → `CliAction::Execute(Command)`
//! - `init-config` → `CliAction::InitConfig`
//! - REPL meta-commands are recognised before clap by [`check_meta_command`]

use clap::ArgMatches;
use insurechain_executor::{function_params, Command, FUNCTION_NAMES};

/// The result of parsing user input.
#[derive(Debug)]
pub enum CliAction {
    /// A contract transaction to execute.
    Execute(Command),
    /// Write the default config file.
    InitConfig,
}

/// REPL meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => Some(MetaCommand::Help {
            command: parts.next().map(str::to_string),
        }),
        _ => None,
    }
}

/// Exact-case function name for `name`, if it names one.
pub fn canonical_function(name: &str) -> Option<&'static str> {
    FUNCTION_NAMES
        .iter()
        .copied()
        .find(|f| f.eq_ignore_ascii_case(name))
}

/// Tokenize a REPL/pipe line, normalizing the function name's case.
///
/// Returns `None` on unbalanced quotes.
pub fn tokenize(line: &str) -> Option<Vec<String>> {
    let mut tokens = shlex::split(line)?;
    if let Some(first) = tokens.first_mut() {
        if let Some(name) = canonical_function(first) {
            *first = name.to_string();
        }
    }
    Some(tokens)
}

/// Global flags that consume the following token as their value.
const VALUE_FLAGS: &[&str] = &["--state", "--config"];

/// Normalize the function name's case in a shell-mode argv.
///
/// Only the first positional token after the program name is rewritten;
/// flag values such as `--state PATH` are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--" {
            i += 1;
            break;
        }
        if arg.starts_with('-') {
            i += if VALUE_FLAGS.contains(&arg) { 2 } else { 1 };
            continue;
        }
        break;
    }
    if let Some(first) = args.get_mut(i) {
        if let Some(name) = canonical_function(first) {
            *first = name.to_string();
        }
    }
    args
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No function provided".to_string())?;

    if sub_name == "init-config" {
        return Ok(CliAction::InitConfig);
    }

    let params =
        function_params(sub_name).ok_or_else(|| format!("Unknown function '{}'", sub_name))?;
    let args = params
        .iter()
        .map(|param| {
            sub_matches
                .get_one::<String>(param)
                .cloned()
                .ok_or_else(|| format!("Missing argument <{}>", param))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Command::parse(sub_name, &args)
        .map(CliAction::Execute)
        .map_err(|e| e.to_string())
}
