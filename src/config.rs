//! Application configuration loaded from environment variables.

use serde::{Deserialize, Deserializer};

/// Default TCP listen port when `PORT` is absent or unusable.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
///
/// Read once at startup and never re-read per request.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// TCP listen port. Taken from `PORT`; absent, non-numeric, or zero
    /// values fall back to [`DEFAULT_PORT`].
    #[serde(default = "default_port", deserialize_with = "lenient_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Deserialize a port leniently: anything that is not a positive integer in
/// the TCP port range becomes the default instead of a load failure.
fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_port(&raw))
}

/// Parse a port string, falling back to [`DEFAULT_PORT`] when the value is
/// not a positive integer in 1-65535.
pub(crate) fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => DEFAULT_PORT,
        Ok(port) => port,
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be in range 1-65535".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
