//! # cardsim CLI Library
//!
//! Command-line front end for the `cardsim_engine` blackjack simulator:
//! configuration loading, logging setup and the parallel session driver.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand, writing to
//! the given streams and returning the process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["cardsim", "deal", "--seed", "42"];
//! let code = cardsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `cfg`: Show the resolved configuration and value sources
//! - `deal`: Deal a single hand for inspection
//! - `sim`: Run many sessions in parallel, optionally writing JSONL summaries
//! - `round`: Play one session and print each round as JSON

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{CardsimCli, Commands, SimArgs};
use commands::{
    handle_cfg_command, handle_deal_command, handle_round_command, handle_sim_command,
};

pub use config::ConfigError;
pub use error::CliError;

const COMMANDS: &[&str] = &["cfg", "deal", "sim", "round"];

/// Main entry point for the CLI application.
///
/// Returns [`exit_code::SUCCESS`] on success and [`exit_code::ERROR`] for
/// argument errors or a failing command. Help and version go to `out`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardsimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: cardsim <command> [options]\n\nCommands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: cardsim --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal { seed, decks } => handle_deal_command(seed, decks, out),
        Commands::Sim {
            sessions,
            rounds,
            betting,
            stake,
            limit,
            decks,
            hit_threshold,
            dealer_rule,
            seed,
            output,
        } => handle_sim_command(
            SimArgs {
                sessions,
                rounds,
                betting,
                stake,
                limit,
                decks,
                hit_threshold,
                dealer_rule,
                seed,
                output,
            },
            out,
            err,
        ),
        Commands::Round {
            seed,
            betting,
            rounds,
            limit,
        } => handle_round_command(seed, betting, rounds, limit, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
