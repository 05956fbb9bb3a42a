//! Configuration error types.

use std::path::{Path, PathBuf};

/// Client configuration could not be loaded or is unusable.
///
/// `path` names the configuration file involved, when there was one; a
/// missing API key or a bad base URL has none.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Configuration file that failed to load
    pub path: Option<PathBuf>,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Configuration error at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapbox_error::ConfigError;
    ///
    /// let err = ConfigError::new("missing Mapbox API key");
    /// assert!(err.path.is_none());
    /// assert!(err.to_string().starts_with("Configuration Error: missing Mapbox API key"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the configuration file the error came from.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: {}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " ({})", path.display())?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for ConfigError {}
