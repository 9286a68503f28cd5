//! Configuration loaded from `.sigparse.toml`.

mod core;
mod loader;

pub use self::core::{BatchConfig, InputConfig, OutputConfig, SigparseConfig, CONFIG_FILE_NAME};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
};
