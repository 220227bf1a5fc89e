pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, BackendConfig, GenerationApiConfig};
pub use loader::{CONFIG_ENV, DEFAULT_CONFIG_FILE, load_config, parse_config_content};
