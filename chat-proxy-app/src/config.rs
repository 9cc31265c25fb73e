use chat_proxy_errors::ConfigError;
use std::fmt;
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Server-held upstream API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Replaces any occurrence of the key in `text` so error details can be
    /// shown to callers.
    pub fn redact(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            return text.to_string();
        }
        text.replace(&self.api_key, "[redacted]")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub base_url: Url,
    pub credentials: Option<Credentials>,
    pub require_credentials: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("CHAT_PROXY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse()
            .map_err(|e| ConfigError::invalid("CHAT_PROXY_ADDR", format!("{addr_raw}: {e}")))?;

        let base_raw = lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_raw)
            .map_err(|e| ConfigError::invalid("OPENAI_BASE_URL", format!("{base_raw}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "OPENAI_BASE_URL",
                format!("unsupported scheme {}", base_url.scheme()),
            ));
        }

        let credentials = lookup("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(Credentials::new);

        let require_credentials = match lookup("CHAT_PROXY_REQUIRE_API_KEY") {
            None => true,
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid("CHAT_PROXY_REQUIRE_API_KEY", raw))?,
        };

        Ok(Self {
            addr,
            base_url,
            credentials,
            require_credentials,
        })
    }

    /// Startup check: a missing key is fatal unless explicitly allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.require_credentials && self.credentials.is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
