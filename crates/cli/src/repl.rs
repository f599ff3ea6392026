//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use insurechain_executor::{function_params, FUNCTION_NAMES};

use crate::commands::{build_repl_cmd, function_about};
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{
    canonical_function, check_meta_command, matches_to_action, tokenize, CliAction, MetaCommand,
};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<LedgerHelper, DefaultHistory> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(LedgerHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help { command } => print_help(command.as_deref()),
                    }
                    continue;
                }

                execute_line(trimmed, state, mode);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns 1 if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if !execute_line(trimmed, state, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Tokenize, parse and execute one line. Returns true on success.
fn execute_line(line: &str, state: &mut SessionState, mode: OutputMode) -> bool {
    let tokens = match tokenize(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return true,
        None => {
            eprintln!("(error) Invalid quoting: {}", line);
            return false;
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    execute_action(&matches, state, mode)
}

/// Execute a parsed action. Returns true on success, false on error.
pub fn execute_action(
    matches: &clap::ArgMatches,
    state: &mut SessionState,
    mode: OutputMode,
) -> bool {
    match matches_to_action(matches) {
        Ok(CliAction::Execute(cmd)) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                true
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                false
            }
        },
        Ok(CliAction::InitConfig) => {
            eprintln!("(error) init-config is only available from the command line");
            false
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.insurechain_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        let name = canonical_function(cmd).unwrap_or(cmd);
        match build_repl_cmd().try_get_matches_from(vec![name, "--help"]) {
            Ok(_) => {}
            Err(e) => println!("{}", e),
        }
    } else {
        println!("Contract functions:");
        for name in FUNCTION_NAMES {
            println!("  {:<24}{}", name, usage(name));
        }
        println!();
        println!("Meta-commands:");
        println!("  help [function]         Show help");
        println!("  quit / exit             Exit REPL");
        println!("  clear                   Clear screen");
    }
}

fn usage(name: &str) -> String {
    let params = function_params(name).unwrap_or(&[]);
    let args: Vec<String> = params.iter().map(|p| format!("<{}>", p)).collect();
    if args.is_empty() {
        function_about(name).to_string()
    } else {
        format!("{}  {}", args.join(" "), function_about(name))
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

const META_COMMANDS: &[&str] = &["help", "quit", "exit", "clear"];

struct LedgerHelper;

impl Helper for LedgerHelper {}
impl Validator for LedgerHelper {}
impl Highlighter for LedgerHelper {}

impl Hinter for LedgerHelper {
    type Hint = String;

    /// After a complete function name, hint its parameters.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || !line.ends_with(' ') {
            return None;
        }
        let mut parts = line.split_whitespace();
        let name = canonical_function(parts.next()?)?;
        let params = function_params(name)?;
        let remaining: Vec<String> = params
            .iter()
            .skip(parts.count())
            .map(|p| format!("<{}>", p))
            .collect();
        if remaining.is_empty() {
            None
        } else {
            Some(remaining.join(" "))
        }
    }
}

impl Completer for LedgerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(' ');

        if parts.len() > 1 || (parts.len() == 1 && trailing_space) {
            return Ok((pos, vec![]));
        }

        let prefix = parts.first().copied().unwrap_or("").to_ascii_lowercase();
        let start = pos - prefix.len();
        let candidates = FUNCTION_NAMES
            .iter()
            .chain(META_COMMANDS)
            .filter(|cmd| cmd.to_ascii_lowercase().starts_with(&prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}
