//! Tests for the configuration module.

use super::*;
use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::Mutex;

/// Serializes tests that read or write HINGER_* environment variables
static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.path_search.dfs_step_limit, 100);
    assert_eq!(config.path_search.iddfs_max_depth, 20);
}

#[test]
fn test_agent_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.agent.name, "B1");
    assert_eq!(config.agent.mode, "mcts");
    assert_eq!(config.agent.depth, 3);
    assert!(config.agent.maximizing);
    assert_eq!(config.agent.mcts_iterations, 500);
    assert!((config.agent.exploration - 2.0).abs() < f64::EPSILON);
    assert!(config.agent.seed.is_none());
}

#[test]
fn test_hinger_env_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap();
    std::env::set_var("HINGER_PATH_SEARCH_DFS_STEP_LIMIT", "250");
    std::env::set_var("HINGER_AGENT_MODE", "alphabeta");
    std::env::set_var("HINGER_AGENT_SEED", "7");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.path_search.dfs_step_limit, 250);
    assert_eq!(config.agent.mode, "alphabeta");
    assert_eq!(config.agent.seed, Some(7));

    std::env::remove_var("HINGER_PATH_SEARCH_DFS_STEP_LIMIT");
    std::env::remove_var("HINGER_AGENT_MODE");
    std::env::remove_var("HINGER_AGENT_SEED");
}

#[test]
fn test_unparsable_env_override_is_ignored() {
    let _guard = ENV_MUTEX.lock().unwrap();
    std::env::set_var("HINGER_PATH_SEARCH_IDDFS_MAX_DEPTH", "deep");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.path_search.iddfs_max_depth, 20);

    std::env::remove_var("HINGER_PATH_SEARCH_IDDFS_MAX_DEPTH");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"

[path_search]
dfs_step_limit = 1000

[agent]
name = "AgentA"
mode = "minimax"
depth = 2
seed = 42
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.path_search.dfs_step_limit, 1000);
    assert_eq!(config.path_search.iddfs_max_depth, 20); // Default
    assert_eq!(config.agent.name, "AgentA");
    assert_eq!(config.agent.mode, "minimax");
    assert_eq!(config.agent.depth, 2);
    assert_eq!(config.agent.seed, Some(42));
    assert_eq!(config.agent.mcts_iterations, 500); // Default
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[agent]
mcts_iterations = 50
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.agent.mcts_iterations, 50);
    assert_eq!(config.agent.mode, "mcts"); // Default
    assert_eq!(config.common.log_level, "info"); // Default
}

#[test]
fn test_load_from_path() {
    let _guard = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[agent]\nexploration = 1.5\nmaximizing = false").unwrap();

    let config = load_from_path(file.path());
    assert!((config.agent.exploration - 1.5).abs() < f64::EPSILON);
    assert!(!config.agent.maximizing);
}

#[test]
fn test_load_from_malformed_path_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[agent\nmode = ").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.agent.depth, 3);
    assert_eq!(config.path_search.dfs_step_limit, 100);
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = load_from_path(&dir.path().join("missing.toml"));
    assert_eq!(config.common.log_level, "info");
}

#[test]
fn test_init_tracing_only_once() {
    let _ = init_tracing("debug");
    // A global subscriber is now installed either way
    assert!(init_tracing("trace").is_err());
}

#[test]
fn test_init_tracing_from_common_config() {
    let config = CentralConfig::default();
    let _ = init_tracing_from(&config.common);
    assert!(init_tracing_from(&config.common).is_err());
}
