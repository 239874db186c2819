//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and client initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{OneAuthApi, OneAuthClient};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Context for command execution: API client and resolved output format.
pub struct CommandContext {
    /// API client
    pub client: Arc<dyn OneAuthApi>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context from global options.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed, names an unknown
    /// output format, or the API URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;
        let format = resolve_format(opts.format, &config)?;

        let client = OneAuthClient::new(&config.api_url(opts.api_url_ref()), config.timeout())?;
        debug!("Using API at {}", client.base_url());

        Ok(Self::from_parts(Arc::new(client), format))
    }

    /// Assemble a context from already-built parts.
    pub fn from_parts(client: Arc<dyn OneAuthApi>, format: OutputFormat) -> Self {
        Self { client, format }
    }

    /// Whether to draw spinners and colours for humans.
    pub fn interactive(&self) -> bool {
        self.format == OutputFormat::Pretty
    }
}

/// Flag (or env) format, then the config preference, then pretty.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.preferences.format.as_deref() {
        None => Ok(OutputFormat::default()),
        Some(name) => OutputFormat::from_name(name).ok_or_else(|| {
            ConfigError::Invalid(format!("unknown output format '{}'", name)).into()
        }),
    }
}
