use crate::analysis::ConfidencePolicy;
use std::env;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub confidence: ConfidencePolicy,
}

impl Config {
    /// Reads `PORT`, `MOOD_API_URL` and `MOOD_CONFIDENCE`.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|err| format!("invalid PORT {value:?}: {err}"))?,
            None => DEFAULT_PORT,
        };
        let api_url = lookup("MOOD_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let confidence = match lookup("MOOD_CONFIDENCE") {
            Some(value) => value.parse()?,
            None => ConfidencePolicy::default(),
        };

        Ok(Self {
            port,
            api_url,
            confidence,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
