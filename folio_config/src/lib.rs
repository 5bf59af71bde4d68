use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::i18n::Language;
use serde::Deserialize;
use url::Url;

mod duration;

pub use duration::Duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads and merges the given TOML config files, later paths overriding
/// earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub contact: ContactConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the Firebase Realtime Database instance.
    pub url: Url,
    /// Optional legacy database secret, sent as the `auth` query parameter.
    pub auth: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// How long the confirmation panel stays up before the form is restored.
    pub auto_reset_delay: Duration,
}

#[derive(Debug, Deserialize)]
pub struct I18nConfig {
    pub default_language: Language,
}
