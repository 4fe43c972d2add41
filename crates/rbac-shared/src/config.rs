//! Configuration management

use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;

use crate::constants::DEFAULT_FIXTURE_PATH;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub menu: MenuSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    /// JSON fixture holding menus, roles and their grants.
    pub fixture_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Self::finish(config)
    }

    /// Loads configuration from an inline TOML document on top of the defaults.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::finish(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "menu-console")?
            .set_default("menu.fixture_path", DEFAULT_FIXTURE_PATH)?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?)
    }

    fn finish(config: Config) -> Result<Self, AppError> {
        let settings: Self = config.try_deserialize()?;
        if settings.menu.fixture_path.trim().is_empty() {
            return Err(AppError::InvalidSetting {
                key: "menu.fixture_path".to_string(),
                value: settings.menu.fixture_path,
            });
        }
        Ok(settings)
    }
}
