use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REMOTE_PROVIDER_URL: &str = "https://dev.azure.com";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub remote_provider_url: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config = serde_json::from_str(&data).context("parse config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }

    /// Configured provider URL, an explicit override winning over the file.
    pub fn remote_provider_url_or_default(&self, host: Option<&str>) -> String {
        host.or(self.remote_provider_url.as_deref())
            .unwrap_or(DEFAULT_REMOTE_PROVIDER_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project = ProjectDirs::from("com", "iver-wharf", "wharf-provider-azuredevops")
        .context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}

/// Static settings an adapter is built with. Never mutated after construction.
#[derive(Clone)]
pub struct ProviderConfig {
    token: String,
    remote_provider_url: String,
}

impl ProviderConfig {
    pub fn new(token: impl Into<String>, remote_provider_url: &str) -> Self {
        Self {
            token: token.into(),
            remote_provider_url: remote_provider_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn remote_provider_url(&self) -> &str {
        &self.remote_provider_url
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("token", &"<redacted>")
            .field("remote_provider_url", &self.remote_provider_url)
            .finish()
    }
}
