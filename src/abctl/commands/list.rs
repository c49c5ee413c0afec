use crate::client::PlayerService;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<S: PlayerService>(service: &S) -> Result<CmdResult> {
    let players = service.list()?;
    Ok(CmdResult::default().with_listed_players(players))
}
