#[cfg(feature = "cli")]
use std::path::Path;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{ScrollAnimationSettings, ServiceCatalog};
use crate::model::scroll_effects::ScrollThresholds;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLoaderConfig {
    pub delay_ms: u64,
    pub fade_ms: u64,
}

impl Default for PageLoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            fade_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    pub header_threshold: f64,
    pub back_to_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            back_to_top_threshold: 500.0,
        }
    }
}

impl From<ScrollConfig> for ScrollThresholds {
    fn from(config: ScrollConfig) -> Self {
        Self {
            header: config.header_threshold,
            back_to_top: config.back_to_top_threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub autoplay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { autoplay_ms: 7000 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Page identifier assumed when the location path has no last segment
    pub home_page: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_page: "index.html".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub page_loader: PageLoaderConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub scroll_animation: ScrollAnimationSettings,
    #[serde(default)]
    pub services: ServiceCatalog,
}

impl Config {
    /// The configuration compiled into the binary, service catalog included
    pub fn embedded() -> Result<Self> {
        let cfg = json5::from_str(CONFIG)?;
        Ok(cfg)
    }

    /// Embedded defaults overlaid with any config file in the config directory
    #[cfg(feature = "cli")]
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Like [`Config::new`], with `extra` applied last when given
    #[cfg(feature = "cli")]
    pub fn load(extra: Option<&Path>) -> Result<Self, config::ConfigError> {
        let data_dir = crate::utils::get_data_dir();
        let config_dir = crate::utils::get_config_dir();
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                tracing::info!("loading config from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        if let Some(path) = extra {
            if !path.exists() {
                return Err(config::ConfigError::NotFound(path.display().to_string()));
            }
            builder = builder.add_source(config::File::from(path));
        }

        builder.build()?.try_deserialize()
    }
}
