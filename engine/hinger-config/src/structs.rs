//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_dfs_step_limit() -> usize {
    defaults::dfs_step_limit()
}
fn d_iddfs_max_depth() -> usize {
    defaults::iddfs_max_depth()
}
fn d_agent_name() -> String {
    defaults::agent_name().into()
}
fn d_agent_mode() -> String {
    defaults::agent_mode().into()
}
fn d_depth() -> u32 {
    defaults::search_depth()
}
fn d_maximizing() -> bool {
    defaults::maximizing()
}
fn d_mcts_iterations() -> u32 {
    defaults::mcts_iterations()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub path_search: PathSearchConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    /// Filter for [`init_tracing_from`](crate::init_tracing_from) when
    /// `RUST_LOG` is unset
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Bounds for the uninformed path searches
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathSearchConfig {
    #[serde(default = "d_dfs_step_limit")]
    pub dfs_step_limit: usize,
    #[serde(default = "d_iddfs_max_depth")]
    pub iddfs_max_depth: usize,
}

impl Default for PathSearchConfig {
    fn default() -> Self {
        Self {
            dfs_step_limit: defaults::dfs_step_limit(),
            iddfs_max_depth: defaults::iddfs_max_depth(),
        }
    }
}

/// Move-selection agent configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AgentConfig {
    #[serde(default = "d_agent_name")]
    pub name: String,
    /// Strategy name: "minimax", "alphabeta" or "mcts"
    #[serde(default = "d_agent_mode")]
    pub mode: String,
    /// Ply limit for minimax and alpha-beta
    #[serde(default = "d_depth")]
    pub depth: u32,
    #[serde(default = "d_maximizing")]
    pub maximizing: bool,
    #[serde(default = "d_mcts_iterations")]
    pub mcts_iterations: u32,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    /// Seed for the MCTS random source. None = seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: defaults::agent_name().into(),
            mode: defaults::agent_mode().into(),
            depth: defaults::search_depth(),
            maximizing: defaults::maximizing(),
            mcts_iterations: defaults::mcts_iterations(),
            exploration: defaults::exploration(),
            seed: None,
        }
    }
}
