use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbctlError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("malformed argument: {0}")]
    MalformedArgument(String),

    #[error("could not read {}: {source}", .path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read executable: {0}")]
    ExeStream(#[source] std::io::Error),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures reported by a [`crate::client::PlayerService`].
///
/// The underlying cause is carried as-is; callers never reinterpret it.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, AbctlError>;
