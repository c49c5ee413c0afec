use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "abctl", bin_name = "abctl", version)]
#[command(about = "Manage AI players on a tournament server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Address of the tournament server (overrides ABCTL_HTTPD and the config file)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub httpd: Option<String>,

    /// Output format for player listings
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Table,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Verbose output (debug logging on stderr)
    #[arg(long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage AI players (lists players when no subcommand is given)
    #[command(alias = "p")]
    Players {
        #[command(subcommand)]
        command: Option<PlayerCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommands {
    /// Create a player by uploading its executable
    #[command(alias = "c", display_order = 1)]
    Create {
        /// Name used to identify the player
        #[arg(short, long)]
        name: Option<String>,

        /// Player version, required (first uploads are usually 1)
        #[arg(short = 'v', long = "version", value_name = "INT")]
        version: Option<i64>,

        /// Path where the player's executable binary can be found
        #[arg(
            short = 'e',
            long = "exe",
            visible_alias = "path",
            short_alias = 'p',
            value_name = "FILE"
        )]
        exe: Option<PathBuf>,

        /// Id of the player's author (user)
        #[arg(short, long)]
        author: Option<i64>,
    },

    /// List players
    #[command(alias = "l", display_order = 2)]
    List,

    /// Delete a player by id
    #[command(alias = "d", display_order = 3)]
    Delete {
        /// Id of the player to delete
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },
}

/// Logs go to stderr. Quiet unless `--verbose`; `RUST_LOG` overrides both.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "abctl=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
