use super::{BaseUrl, PlayerService};
use crate::error::{AbctlError, RemoteError, Result};
use crate::model::{Player, PlayerDraft};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use std::io::Read;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the tournament server.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: BaseUrl,
    http: Client,
}

impl HttpClient {
    pub fn new(base: BaseUrl) -> Result<Self> {
        Self::with_timeout(base, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base: BaseUrl, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RemoteError::from)?;
        Ok(Self { base, http })
    }
}

/// Turns non-2xx responses into [`RemoteError::Status`], keeping the body for context.
fn check_status(response: Response) -> std::result::Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().unwrap_or_default();
    warn!(%url, status = status.as_u16(), "server rejected request");
    Err(RemoteError::Status {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

impl PlayerService for HttpClient {
    fn list(&self) -> Result<Vec<Player>> {
        let url = self.base.endpoint("players");
        debug!(%url, "listing players");

        let response = self.http.get(&url).send().map_err(RemoteError::from)?;
        let players: Vec<Player> = check_status(response)?
            .json()
            .map_err(RemoteError::from)?;

        debug!(count = players.len(), "received players");
        Ok(players)
    }

    fn upload(&self, author_id: i64, draft: &PlayerDraft, exe: &mut dyn Read) -> Result<Player> {
        let mut content = Vec::new();
        exe.read_to_end(&mut content)
            .map_err(AbctlError::ExeStream)?;

        let url = self.base.endpoint(&format!("users/{}/players", author_id));
        debug!(%url, name = %draft.name, bytes = content.len(), "uploading player");

        let player_part = Part::text(serde_json::to_string(draft)?)
            .mime_str("application/json")
            .map_err(RemoteError::from)?;
        let exe_part = Part::bytes(content)
            .file_name(draft.name.clone())
            .mime_str("application/octet-stream")
            .map_err(RemoteError::from)?;
        let form = Form::new()
            .part("player", player_part)
            .part("executable", exe_part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .map_err(RemoteError::from)?;
        let created: Player = check_status(response)?
            .json()
            .map_err(RemoteError::from)?;

        info!(id = created.id, path = %created.path, "player created");
        Ok(created)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let url = self.base.endpoint(&format!("players/{}", id));
        debug!(%url, "deleting player");

        let response = self.http.delete(&url).send().map_err(RemoteError::from)?;
        check_status(response)?;

        info!(id, "player deleted");
        Ok(())
    }
}
