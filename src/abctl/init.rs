use crate::api::AbctlApi;
use crate::client::http::HttpClient;
use crate::client::lazy::LazyService;
use crate::client::BaseUrl;
use crate::config::AbctlConfig;
use crate::error::Result;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the configured server address.
pub const HTTPD_ENV: &str = "ABCTL_HTTPD";
/// Overrides the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "ABCTL_CONFIG_DIR";

/// Where the config file lives: `$ABCTL_CONFIG_DIR` if set, otherwise the
/// platform config directory. `None` when neither can be determined.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "abctl", "abctl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Picks the server address: flag, then environment, then config file.
pub fn resolve_httpd(flag: Option<&str>, env: Option<String>, config: &AbctlConfig) -> String {
    flag.map(str::to_string)
        .or(env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| config.httpd.clone())
}

/// Builds an API backed by the HTTP client for the resolved server address.
///
/// Nothing is loaded until the first remote call, so argument errors are
/// reported before configuration or address errors.
pub fn initialize(httpd_flag: Option<String>) -> AbctlApi<LazyService<HttpClient>> {
    AbctlApi::new(LazyService::new(move || connect(httpd_flag.as_deref())))
}

/// Loads configuration and builds the HTTP client.
pub fn connect(httpd_flag: Option<&str>) -> Result<HttpClient> {
    let config = match config_dir() {
        Some(dir) => AbctlConfig::load(dir)?,
        None => AbctlConfig::default(),
    };

    let httpd = resolve_httpd(httpd_flag, std::env::var(HTTPD_ENV).ok(), &config);
    let base = BaseUrl::parse(&httpd)?;
    debug!(%base, "using tournament server");

    HttpClient::with_timeout(base, config.timeout())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(httpd: &str) -> AbctlConfig {
        AbctlConfig {
            httpd: httpd.to_string(),
            ..AbctlConfig::default()
        }
    }

    #[test]
    fn flag_beats_everything() {
        let config = config_with("from-config:1");
        let chosen = resolve_httpd(Some("from-flag:1"), Some("from-env:1".into()), &config);
        assert_eq!(chosen, "from-flag:1");
    }

    #[test]
    fn env_beats_config() {
        let config = config_with("from-config:1");
        let chosen = resolve_httpd(None, Some("from-env:1".into()), &config);
        assert_eq!(chosen, "from-env:1");
    }

    #[test]
    fn blank_env_falls_back_to_config() {
        let config = config_with("from-config:1");
        let chosen = resolve_httpd(None, Some("  ".into()), &config);
        assert_eq!(chosen, "from-config:1");
    }
}
