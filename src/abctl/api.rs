//! # API Facade
//!
//! The single entry point for abctl operations, whatever the UI.
//!
//! `AbctlApi<S: PlayerService>` is generic over the service:
//! - Production: `AbctlApi<HttpClient>`
//! - Testing: `AbctlApi<InMemoryService>`
//!
//! The facade only dispatches. Validation and workflow live in `commands/*.rs`;
//! presentation lives in the CLI.

use crate::client::PlayerService;
use crate::commands;
use crate::error::Result;

pub struct AbctlApi<S: PlayerService> {
    service: S,
}

impl<S: PlayerService> AbctlApi<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn list_players(&self) -> Result<CmdResult> {
        commands::list::run(&self.service)
    }

    pub fn create_player(&self, args: &CreateArgs) -> Result<CmdResult> {
        commands::create::run(&self.service, args)
    }

    pub fn delete_player(&self, raw_id: Option<&str>) -> Result<CmdResult> {
        commands::delete::run(&self.service, raw_id)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

pub use commands::create::CreateArgs;
pub use commands::CmdResult;
