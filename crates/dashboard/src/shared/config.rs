use contracts::domain::a002_inventory::aggregate::ItemQuantities;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub restock: RestockConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// JSON с начальными данными; если не задан - встроенный набор
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WizardConfig {
    /// Время следующей поставки по умолчанию (HH:MM)
    #[serde(default = "default_delivery_time")]
    pub default_delivery_time: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_delivery_time: default_delivery_time(),
        }
    }
}

fn default_delivery_time() -> String {
    "10:00".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RestockConfig {
    /// Переопределение норм расхода в день (все шесть категорий)
    pub daily_consumption: Option<ItemQuantities>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[wizard]
default_delivery_time = "10:00"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("cannot read config {}", config_path.display()))?;
                return parse_config(&contents)
                    .with_context(|| format!("cannot parse config {}", config_path.display()));
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents).context("invalid config.toml contents")?;
    Ok(config)
}

/// Resolve the seed file path relative to the executable directory
pub fn resolve_seed_path(config: &Config) -> Option<PathBuf> {
    let path_str = config.seed.path.as_deref()?;
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }

    Some(PathBuf::from(path_str))
}
