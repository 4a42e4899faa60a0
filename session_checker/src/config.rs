use std::{path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

/// Where the config is looked for if no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "check_session.json";

/// How long the whole check may take unless the config says otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Session_String is empty")]
    EmptySession,
    #[error("bad Api_Url: {0}")]
    BadApiUrl(#[from] url::ParseError),
}

/// On-disk shape of the config file.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(rename = "Session_String")]
    session_string: String,
    #[serde(rename = "Api_Url", default)]
    api_url: Option<String>,
    #[serde(rename = "Timeout_Secs", default)]
    timeout_secs: Option<u64>,
}

/// Everything needed to run one check.
pub struct CheckerConfig {
    pub session: String,
    pub api_url: Option<Url>,
    pub timeout: Duration,
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for CheckerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerConfig")
            .field("session", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CheckerConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;

        let session = raw.session_string.trim().to_owned();
        if session.is_empty() {
            return Err(ConfigError::EmptySession);
        }

        let api_url = raw.api_url.as_deref().map(Url::parse).transpose()?;

        let timeout = raw
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self {
            session,
            api_url,
            timeout,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }
}
