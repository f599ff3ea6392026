//! InsureChain CLI: submit and evaluate record-contract transactions.
//!
//! Three modes:
//! - **Shell mode**: `insurechain [flags] FUNCTION ARGS...`: one transaction, exit
//! - **REPL mode**: `insurechain [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "ReadCustomer 1" | insurechain`: line-by-line from stdin

mod commands;
mod config;
mod format;
mod logging;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use insurechain_executor::{AccessMode, Ledger, OpenOptions};
use tracing::debug;

use commands::build_cli;
use config::{Config, CONFIG_FILE_NAME};
use format::OutputMode;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches_from(parse::normalize_args(std::env::args()));

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    // Handle `init-config` before reading config or opening any ledger.
    if matches.subcommand_name() == Some("init-config") {
        let path = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        process::exit(run_init_config(&path));
    }

    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(matches.get_count("verbose"), &config.log_level) {
        eprintln!("Warning: {}", e);
    }

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let (ledger, label) = match open_ledger(&matches, &config) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let mut state = SessionState::new(ledger, label);

    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let ok = repl::execute_action(&matches, &mut state, output_mode);
        process::exit(if ok { 0 } else { 1 });
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn open_ledger(matches: &clap::ArgMatches, config: &Config) -> Result<(Ledger, String), String> {
    let mut opts = OpenOptions::new().access_mode(config.access_mode);
    if matches.get_flag("read-only") {
        opts = opts.access_mode(AccessMode::ReadOnly);
    }
    if config.init_ledger || matches.get_flag("init") {
        opts = opts.init_ledger(true);
    }

    if matches.get_flag("ephemeral") {
        let ledger = Ledger::ephemeral_with(opts)
            .map_err(|e| format!("Failed to open ledger: {}", e))?;
        return Ok((ledger, "ephemeral".to_string()));
    }

    let path = matches
        .get_one::<String>("state")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.state.clone());
    debug!(path = %path.display(), mode = %opts.access_mode, "Opening ledger");

    let ledger = Ledger::open(&path, opts)
        .map_err(|e| format!("Failed to open ledger '{}': {}", path.display(), e))?;
    Ok((ledger, state_label(&path)))
}

fn state_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run_init_config(path: &Path) -> i32 {
    match Config::write_default_if_missing(path) {
        Ok(true) => {
            println!("Wrote {}", path.display());
            0
        }
        Ok(false) => {
            println!("{} already exists", path.display());
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}
