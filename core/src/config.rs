use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory tree to watch (`VIGIL_WATCH_ROOT`). Defaults to the
    /// current directory.
    pub watch_root: Option<String>,

    /// Name of the per-root ignore file loaded alongside `.gitignore`
    /// (`VIGIL_IGNORE_FILE`).
    pub ignore_file: String,

    /// Whether to seed new sets with the built-in default patterns
    /// (`VIGIL_USE_DEFAULTS`).
    pub use_defaults: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // .env next to the invocation, if present
        let _ = dotenvy::dotenv();

        let builder = Config::builder()
            .set_default("ignore_file", ".vigilignore")?
            .set_default("use_defaults", true)?
            .add_source(File::with_name("vigil").required(false))
            .add_source(Environment::with_prefix("VIGIL"));

        builder.build()?.try_deserialize()
    }

    /// Configured watch root, tilde-expanded; falls back to the current
    /// directory.
    pub fn root(&self) -> PathBuf {
        match &self.watch_root {
            Some(root) => paths::get_path(root),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}
