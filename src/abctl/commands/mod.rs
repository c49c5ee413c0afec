//! # Command Layer
//!
//! One module per workflow. Each `run` validates its inputs, makes at most one
//! call to the [`PlayerService`](crate::client::PlayerService) and returns a
//! [`CmdResult`] for the caller to present. Nothing here prints.

use crate::model::Player;

pub mod create;
pub mod delete;
pub mod list;
pub mod validate;

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to present, in the order the server gave them.
    pub listed_players: Vec<Player>,
    pub deleted_id: Option<i64>,
}

impl CmdResult {
    pub fn with_listed_players(mut self, players: Vec<Player>) -> Self {
        self.listed_players = players;
        self
    }

    pub fn with_deleted_id(mut self, id: i64) -> Self {
        self.deleted_id = Some(id);
        self
    }
}
