use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// API URL of the production environment, used when nothing else is configured
pub const DEFAULT_URL: &str = "https://api.openshift.com";

/// Location of the OCM configuration file relative to the home directory
const DEFAULT_CONFIG_FILE: &str = ".config/ocm/ocm.json";

/// Connection settings loaded from the OCM configuration file
///
/// The file written by the OCM tooling is JSON; it is read with the YAML
/// parser so hand written YAML files work as well. Unknown keys such as
/// `refresh_token` or `client_id` are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  /// Base URL of the clusters management API
  #[serde(default = "default_url")]
  pub url: String,

  /// Bearer token sent with every request
  #[serde(default)]
  pub access_token: Option<String>,

  /// Request timeout in seconds
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_url() -> String {
  DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
  30
}

impl Default for Config {
  fn default() -> Self {
    Self {
      url: default_url(),
      access_token: None,
      timeout_secs: default_timeout_secs(),
    }
  }
}

impl Config {
  /// Apply overrides from the environment or command line
  ///
  /// Empty values are treated as unset.
  pub fn with_overrides(mut self, url: Option<String>, access_token: Option<String>) -> Self {
    if let Some(url) = url.filter(|u| !u.is_empty()) {
      self.url = url;
    }
    if let Some(token) = access_token.filter(|t| !t.is_empty()) {
      self.access_token = Some(token);
    }
    self
  }
}

/// Load configuration from an explicit path, `$OCM_CONFIG`, the default
/// `~/.config/ocm/ocm.json`, or fall back to `Config::default()`.
///
/// `$OCM_URL` and `$OCM_TOKEN` override the values read from the file.
pub fn load(path: Option<&str>) -> Result<Config> {
  let default_path = match std::env::var_os("OCM_CONFIG") {
    Some(path) => Some(PathBuf::from(path)),
    None => std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE)),
  };

  let config = load_from(path, default_path.as_deref())?;
  Ok(config.with_overrides(std::env::var("OCM_URL").ok(), std::env::var("OCM_TOKEN").ok()))
}

fn load_from(path: Option<&str>, default_path: Option<&Path>) -> Result<Config> {
  if let Some(p) = path {
    let contents = std::fs::read_to_string(p).with_context(|| format!("Failed to read config file: {p}"))?;
    let config: Config =
      serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse config file: {p}"))?;
    return Ok(config);
  }

  if let Some(default_path) = default_path
    && default_path.exists()
  {
    debug!("Loading configuration from {}", default_path.display());
    let contents = std::fs::read_to_string(default_path)
      .with_context(|| format!("Failed to read config file: {}", default_path.display()))?;
    let config: Config = serde_yaml::from_str(&contents)
      .with_context(|| format!("Failed to parse config file: {}", default_path.display()))?;
    return Ok(config);
  }

  Ok(Config::default())
}
