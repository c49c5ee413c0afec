use super::render::render_players;
use super::setup::{init_tracing, Cli, Commands, OutputMode, PlayerCommands};
use abctl::api::{AbctlApi, CreateArgs};
use abctl::client::PlayerService;
use abctl::error::Result;
use abctl::init::initialize;
use abctl::model::Player;
use clap::Parser;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Commands::Players { command } = cli.command;
    let api = initialize(cli.httpd);

    match command.unwrap_or(PlayerCommands::List) {
        PlayerCommands::Create {
            name,
            version,
            exe,
            author,
        } => handle_create(&api, name, version, exe, author, cli.output),
        PlayerCommands::List => handle_list(&api, cli.output),
        PlayerCommands::Delete { id } => handle_delete(&api, id),
    }
}

fn handle_list<S: PlayerService>(api: &AbctlApi<S>, output: OutputMode) -> Result<()> {
    let result = api.list_players()?;
    print_players(&result.listed_players, output)
}

fn handle_create<S: PlayerService>(
    api: &AbctlApi<S>,
    name: Option<String>,
    version: Option<i64>,
    exe: Option<PathBuf>,
    author: Option<i64>,
    output: OutputMode,
) -> Result<()> {
    let args = CreateArgs {
        name,
        version,
        author,
        exe,
    };
    let result = api.create_player(&args)?;
    print_players(&result.listed_players, output)
}

fn handle_delete<S: PlayerService>(api: &AbctlApi<S>, id: Option<String>) -> Result<()> {
    api.delete_player(id.as_deref())?;
    Ok(())
}

fn print_players(players: &[Player], output: OutputMode) -> Result<()> {
    let rendered = render_players(players, output)?;
    print!("{}", rendered);
    Ok(())
}
