//! Store configuration: diagnostic toggles loaded from TOML or built in code.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::StoreConfig;
