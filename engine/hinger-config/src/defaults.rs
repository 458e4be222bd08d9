//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so the library and any
//! deployed config.toml agree on the baseline values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    path_search: PathSearchDefaults,
    agent: AgentDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct PathSearchDefaults {
    dfs_step_limit: usize,
    iddfs_max_depth: usize,
}

#[derive(Debug, Deserialize)]
struct AgentDefaults {
    name: String,
    mode: String,
    depth: u32,
    maximizing: bool,
    mcts_iterations: u32,
    exploration: f64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Path search
pub fn dfs_step_limit() -> usize {
    DEFAULTS.path_search.dfs_step_limit
}
pub fn iddfs_max_depth() -> usize {
    DEFAULTS.path_search.iddfs_max_depth
}

// Agent
pub fn agent_name() -> &'static str {
    &DEFAULTS.agent.name
}
pub fn agent_mode() -> &'static str {
    &DEFAULTS.agent.mode
}
pub fn search_depth() -> u32 {
    DEFAULTS.agent.depth
}
pub fn maximizing() -> bool {
    DEFAULTS.agent.maximizing
}
pub fn mcts_iterations() -> u32 {
    DEFAULTS.agent.mcts_iterations
}
pub fn exploration() -> f64 {
    DEFAULTS.agent.exploration
}
