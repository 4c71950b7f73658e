use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the Nominatim-compatible reverse-geocoding service.
    pub geocoder_url: String,
    pub geocoder_timeout_secs: u64,
    pub geocoder_user_agent: String,
    /// Delay applied by the simulated submission before it resolves.
    pub submit_delay_ms: u64,
    /// Idle time after which an unfinished wizard session is evicted.
    pub session_ttl_secs: u64,
    pub max_sessions: usize,
    pub rate_limit_per_minute: usize,
}

impl AppConfig {
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self.env, Environment::Development)
    }
}
