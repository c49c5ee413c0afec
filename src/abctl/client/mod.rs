//! # Client Layer
//!
//! The tournament server is reached through the [`PlayerService`] trait so the
//! command layer never depends on a transport.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: Production client, blocking HTTP against a [`BaseUrl`]
//!   - `GET    {base}/api/players`
//!   - `POST   {base}/api/users/{author}/players` (multipart: `player` + `executable`)
//!   - `DELETE {base}/api/players/{id}`
//!
//! - [`memory::InMemoryService`]: In-process stand-in for tests
//!   - Assigns ids, paths and timestamps the way the server does
//!   - Counts calls so tests can assert that nothing reached the network
//!
//! - [`lazy::LazyService`]: Wraps another service and builds it on first use
//!
//! No implementation caches or retries. An upload either returns the fully
//! populated record or an error.

use crate::error::{AbctlError, Result};
use crate::model::{Player, PlayerDraft};
use std::fmt;
use std::io::Read;

pub mod http;
pub mod lazy;
pub mod memory;

/// Remote operations over registered players.
pub trait PlayerService {
    /// All players, in the order the server returns them.
    fn list(&self) -> Result<Vec<Player>>;

    /// Upload a new player binary. Returns the record with server-assigned fields.
    ///
    /// The content is read to the end and buffered in memory before the request is
    /// sent; nothing is streamed.
    fn upload(&self, author_id: i64, draft: &PlayerDraft, exe: &mut dyn Read) -> Result<Player>;

    /// Remove a player by id.
    fn delete(&self, id: i64) -> Result<()>;
}

/// Normalized base address of the tournament server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Accepts `host:port`, `http://host:port/` and similar forms.
    ///
    /// A missing scheme defaults to `http://`; trailing slashes are dropped.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AbctlError::MalformedArgument(
                "httpd address is empty".to_string(),
            ));
        }

        if trimmed.contains("://") {
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(AbctlError::MalformedArgument(format!(
                    "unsupported scheme in httpd address: {}",
                    raw
                )));
            }
            Ok(Self(trimmed.to_string()))
        } else {
            Ok(Self(format!("http://{}", trimmed)))
        }
    }

    /// Joins an API path (without leading slash) onto the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.0, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
