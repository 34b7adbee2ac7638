mod config;

pub use config::{load_config, resolve_store_path, save_config, Config};
