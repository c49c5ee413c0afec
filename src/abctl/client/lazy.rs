use super::PlayerService;
use crate::error::Result;
use crate::model::{Player, PlayerDraft};
use once_cell::unsync::OnceCell;
use std::io::Read;

type Connect<S> = Box<dyn Fn() -> Result<S>>;

/// A [`PlayerService`] that is only built on its first call.
///
/// Connecting can fail (bad config file, bad address). Deferring it means
/// argument errors are reported first and a command that never reaches the
/// network never builds a client.
pub struct LazyService<S> {
    connect: Connect<S>,
    service: OnceCell<S>,
}

impl<S: PlayerService> LazyService<S> {
    pub fn new(connect: impl Fn() -> Result<S> + 'static) -> Self {
        Self {
            connect: Box::new(connect),
            service: OnceCell::new(),
        }
    }

    /// Whether the underlying service has been built yet.
    pub fn is_connected(&self) -> bool {
        self.service.get().is_some()
    }

    fn get(&self) -> Result<&S> {
        self.service.get_or_try_init(|| (self.connect)())
    }
}

impl<S: PlayerService> PlayerService for LazyService<S> {
    fn list(&self) -> Result<Vec<Player>> {
        self.get()?.list()
    }

    fn upload(&self, author_id: i64, draft: &PlayerDraft, exe: &mut dyn Read) -> Result<Player> {
        self.get()?.upload(author_id, draft, exe)
    }

    fn delete(&self, id: i64) -> Result<()> {
        self.get()?.delete(id)
    }
}
