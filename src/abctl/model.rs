use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered AI player as stored by the tournament server.
///
/// `id`, `path` and both timestamps are assigned by the server; a client only ever
/// reads them back after a successful upload or listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub version: i64,
    pub author_id: i64,
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The fields a caller supplies when uploading a new player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub version: i64,
    pub author_id: i64,
}

impl PlayerDraft {
    pub fn new(name: impl Into<String>, version: i64, author_id: i64) -> Self {
        Self {
            name: name.into(),
            version,
            author_id,
        }
    }
}
