// src/config/mod.rs

pub mod settings;

pub use settings::{default_config_path, CatalogConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
