//! Command handlers, one module per subcommand.
//!
//! Every handler takes its parsed arguments plus the output streams as
//! `&mut dyn Write` and returns `Result<(), CliError>`; [`crate::run`] turns
//! the result into an exit code.

pub mod cfg;
pub mod deal;
pub mod round;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use round::handle_round_command;
pub use sim::handle_sim_command;
