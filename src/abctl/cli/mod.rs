//! # CLI Behavior
//!
//! One client of the abctl library. The only place that knows about terminal
//! output, logging setup and exit codes. For the overall architecture see the
//! crate-level documentation of `abctl`.
//!
//! ## Naked Execution
//!
//! `abctl players` with no subcommand lists players, same as `abctl players list`.
//!
//! ## Output
//!
//! `list` and `create` print a table of players (or JSON with `--output json`).
//! `delete` prints nothing on success. Errors print a single `Error:` line on
//! stderr and the process exits with status 1; no table is printed in that case.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Player tables and JSON output
//! - `setup`: Argument parsing via clap, logging initialization
//! - `styles`: Terminal styling constants

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
