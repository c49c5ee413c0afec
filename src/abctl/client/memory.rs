use super::PlayerService;
use crate::error::{AbctlError, RemoteError, Result};
use crate::model::{Player, PlayerDraft};
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::io::Read;

/// In-process [`PlayerService`] for tests.
///
/// Behaves like the server: ids are assigned sequentially and the storage path is
/// derived from the id. Every trait call counts as one network call, including
/// ones that fail.
#[derive(Debug)]
pub struct InMemoryService {
    players: RefCell<Vec<Player>>,
    uploads: RefCell<Vec<Vec<u8>>>,
    next_id: Cell<i64>,
    calls: Cell<usize>,
    unavailable: bool,
}

impl Default for InMemoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryService {
    pub fn new() -> Self {
        Self {
            players: RefCell::new(Vec::new()),
            uploads: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            calls: Cell::new(0),
            unavailable: false,
        }
    }

    /// Seeds the service with existing records. New ids continue after the highest one.
    pub fn with_players(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let service = Self::new();
        service.next_id.set(next_id);
        *service.players.borrow_mut() = players;
        service
    }

    /// A service that fails every call, as if the server were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.borrow().clone()
    }

    /// Binary content of every successful upload, oldest first.
    pub fn uploads(&self) -> Vec<Vec<u8>> {
        self.uploads.borrow().clone()
    }

    fn begin_call(&self) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if self.unavailable {
            return Err(RemoteError::Unavailable("in-memory service is down".to_string()).into());
        }
        Ok(())
    }
}

impl PlayerService for InMemoryService {
    fn list(&self) -> Result<Vec<Player>> {
        self.begin_call()?;
        Ok(self.players())
    }

    fn upload(&self, author_id: i64, draft: &PlayerDraft, exe: &mut dyn Read) -> Result<Player> {
        self.begin_call()?;

        let mut content = Vec::new();
        exe.read_to_end(&mut content)
            .map_err(AbctlError::ExeStream)?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let now = Utc::now();
        let player = Player {
            id,
            name: draft.name.clone(),
            version: draft.version,
            author_id,
            path: format!("players/{}/{}", id, draft.name),
            created_at: now,
            updated_at: now,
        };

        self.players.borrow_mut().push(player.clone());
        self.uploads.borrow_mut().push(content);
        Ok(player)
    }

    fn delete(&self, id: i64) -> Result<()> {
        self.begin_call()?;

        let mut players = self.players.borrow_mut();
        match players.iter().position(|p| p.id == id) {
            Some(pos) => {
                players.remove(pos);
                Ok(())
            }
            None => Err(RemoteError::Status {
                status: 404,
                body: format!("player {} not found", id),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_assigns_server_fields() {
        let service = InMemoryService::new();
        let draft = PlayerDraft::new("bot1", 2, 7);

        let created = service
            .upload(7, &draft, &mut &b"\x7fELF"[..])
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.path, "players/1/bot1");
        assert_eq!(service.uploads(), vec![b"\x7fELF".to_vec()]);
        assert_eq!(service.calls(), 1);
    }

    #[test]
    fn delete_unknown_id_is_a_remote_error() {
        let service = InMemoryService::new();
        let err = service.delete(99).unwrap_err();
        assert!(matches!(
            err,
            AbctlError::Remote(RemoteError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn unavailable_service_counts_failed_calls() {
        let service = InMemoryService::unavailable();
        assert!(service.list().is_err());
        assert_eq!(service.calls(), 1);
    }
}
