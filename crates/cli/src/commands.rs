//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`). Every contract function
//! becomes a subcommand whose positional arguments are its parameters.

use clap::{Arg, ArgAction, Command};
use insurechain_executor::{function_params, FUNCTION_NAMES};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    let cli = Command::new("insurechain")
        .about("Command-line client for the InsureChain record contract")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("state")
                .long("state")
                .value_name("PATH")
                .help("World-state snapshot file (default: from config)")
                .global(true),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .help("In-memory world state, nothing written to disk")
                .action(ArgAction::SetTrue)
                .conflicts_with("state")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: ./insurechain.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (contract payload as returned to clients)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("read-only")
                .long("read-only")
                .help("Refuse write transactions")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("init")
                .long("init")
                .help("Seed the ledger if it is empty")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("init-config")
                .about("Write a default insurechain.toml if none exists"),
        );
    with_functions(cli)
}

/// Build a command tree for REPL mode (no global flags).
pub fn build_repl_cmd() -> Command {
    with_functions(
        Command::new("repl")
            .multicall(true)
            .subcommand_required(true),
    )
}

fn with_functions(cmd: Command) -> Command {
    FUNCTION_NAMES
        .iter()
        .copied()
        .fold(cmd, |cmd, name| cmd.subcommand(build_function(name)))
}

fn build_function(name: &'static str) -> Command {
    let params = function_params(name).unwrap_or(&[]);
    let cmd = Command::new(name)
        .about(function_about(name))
        .alias(name.to_ascii_lowercase());

    params.iter().fold(cmd, |cmd, param| {
        cmd.arg(
            Arg::new(*param)
                .required(true)
                .allow_hyphen_values(true)
                .help(param_help(param)),
        )
    })
}

/// One-line description of a contract function.
pub fn function_about(name: &str) -> &'static str {
    if name == "InitLedger" {
        "Seed six records of every kind"
    } else if name.starts_with("GetAll") {
        "List every record of the kind as a JSON array"
    } else if name.starts_with("Create") {
        "Create a record; fails if the id is taken"
    } else if name.starts_with("Read") {
        "Read a record's stored JSON"
    } else if name.starts_with("Update") {
        "Replace a record's fields; fails if it does not exist"
    } else if name.starts_with("Delete") {
        "Delete a record"
    } else if name.starts_with("Transfer") {
        "Hand a record to a new owner, printing the previous one"
    } else if name.ends_with("Exists") {
        "Check whether a record exists"
    } else {
        ""
    }
}

fn param_help(param: &str) -> &'static str {
    match param {
        "id" => "Numeric record id",
        "role" => "Role label",
        "name" => "Display name",
        "new_owner" => "Owner to transfer to",
        "type" => "Insured object type, e.g. Car",
        "status" => "Claim stage: 0 filed, 1 inspected, 2 approved, 3 rejected",
        "amount" => "Claimed amount",
        "adhar" => "Identity document reference",
        "damage_images" => "Damage image reference",
        "verified_invoice" => "Verified invoice reference",
        _ => "",
    }
}
