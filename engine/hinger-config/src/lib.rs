//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared by
//! the path-search and agent crates, plus tracing initialization for whatever
//! process embeds them.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`HINGER_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! HINGER_<SECTION>_<KEY>=value
//!
//! Examples:
//!     HINGER_COMMON_LOG_LEVEL=debug
//!     HINGER_PATH_SEARCH_DFS_STEP_LIMIT=500
//!     HINGER_AGENT_MODE=alphabeta
//!     HINGER_AGENT_SEED=42
//! ```

mod defaults;
mod loader;
mod logging;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use logging::{init_tracing, init_tracing_from};
pub use structs::*;

#[cfg(test)]
mod tests;
