//! Client configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (include_str! from mapbox.toml)
//! 2. `~/.config/mapbox/mapbox.toml`
//! 3. `./mapbox.toml`
//! 4. `MAPBOX_`-prefixed environment variables, e.g. `MAPBOX_API_KEY`

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use mapbox_error::{ConfigError, MapboxError, MapboxResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a [`Client`](crate::Client).
///
/// # Example
///
/// ```
/// use mapbox_client::MapboxConfig;
///
/// let config = MapboxConfig::default()
///     .with_api_key("pk.test")
///     .with_referer("https://example.com/");
/// assert_eq!(config.api_key(), "pk.test");
/// assert_eq!(*config.timeout_secs(), 30);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct MapboxConfig {
    /// Mapbox access token
    #[serde(default)]
    #[setters(into)]
    api_key: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    /// Referer header for URL-restricted tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(into, strip_option)]
    referer: Option<String>,

    /// API root
    #[serde(default = "default_base_url")]
    #[setters(into)]
    base_url: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            referer: None,
            base_url: default_base_url(),
        }
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .field("referer", &self.referer)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl MapboxConfig {
    /// Configuration with the given token and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Per-request timeout; zero falls back to the default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    /// Load configuration from a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MapboxResult<Self> {
        debug!("Loading configuration from file");

        let path = path.as_ref();
        Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                MapboxError::from(
                    ConfigError::new(format!("Failed to read configuration: {}", e))
                        .with_path(path),
                )
            })?
            .try_deserialize()
            .map_err(|e| {
                MapboxError::from(
                    ConfigError::new(format!("Failed to parse configuration: {}", e))
                        .with_path(path),
                )
            })
    }

    /// Load configuration from every source, in order of precedence.
    ///
    /// Missing user files are skipped.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mapbox_client::MapboxConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = MapboxConfig::load()?;
    /// println!("Calling {}", config.base_url());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> MapboxResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../mapbox.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mapbox/mapbox.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("mapbox").required(false))
            .add_source(Environment::with_prefix("MAPBOX"));

        builder
            .build()
            .map_err(|e| {
                MapboxError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MapboxError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
