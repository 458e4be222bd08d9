//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the HINGER_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var("HINGER_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from HINGER_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "HINGER_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (usize, u32, f64, bool, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
    // Optional parseable field (Option<u64>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = Some(v);
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: HINGER_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "HINGER_COMMON_LOG_LEVEL");

    // Path search
    env_override!(
        config,
        path_search.dfs_step_limit,
        "HINGER_PATH_SEARCH_DFS_STEP_LIMIT",
        parse
    );
    env_override!(
        config,
        path_search.iddfs_max_depth,
        "HINGER_PATH_SEARCH_IDDFS_MAX_DEPTH",
        parse
    );

    // Agent
    env_override!(config, agent.name, "HINGER_AGENT_NAME");
    env_override!(config, agent.mode, "HINGER_AGENT_MODE");
    env_override!(config, agent.depth, "HINGER_AGENT_DEPTH", parse);
    env_override!(config, agent.maximizing, "HINGER_AGENT_MAXIMIZING", parse);
    env_override!(
        config,
        agent.mcts_iterations,
        "HINGER_AGENT_MCTS_ITERATIONS",
        parse
    );
    env_override!(config, agent.exploration, "HINGER_AGENT_EXPLORATION", parse);
    env_override!(config, agent.seed, "HINGER_AGENT_SEED", optional_parse);

    config
}
