use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_code: String,
}

impl Default for AdminSeed {
    fn default() -> Self {
        AdminSeed {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            admin_code: "ADMIN001".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSeed {
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
    #[serde(default)]
    pub default_admin: AdminSeed,
    #[serde(default = "default_events")]
    pub events: Vec<EventSeed>,
    /// `EnvFilter` directives, e.g. `info` or `grandprix_tickets=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            seed_defaults: true,
            default_admin: AdminSeed::default(),
            events: default_events(),
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

fn default_data_dir() -> String {
    "ticketing_data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "./logs/ticketing.log".to_string()
}

fn default_true() -> bool {
    true
}

fn default_events() -> Vec<EventSeed> {
    ["2025-05-10", "2025-05-11", "2025-05-12"]
        .iter()
        .map(|date| EventSeed {
            date: date.to_string(),
            location: "Yas Marina Circuit".to_string(),
        })
        .collect()
}

const ENV_PREFIX: &str = "TICKETING";

/// Reads `Config.toml` (optional) and `TICKETING_*` environment overrides,
/// e.g. `TICKETING_DATA_DIR` or `TICKETING_LOG_LEVEL`.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_from("Config")
}

pub fn load_from(file_stem: &str) -> Result<AppConfig, ConfigError> {
    load_with_env_prefix(file_stem, ENV_PREFIX)
}

fn load_with_env_prefix(file_stem: &str, env_prefix: &str) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(file_stem).required(false))
        .add_source(Environment::with_prefix(env_prefix).prefix_separator("_"))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
