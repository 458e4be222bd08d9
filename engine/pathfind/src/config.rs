//! Path-search bounds.

/// Bounds for the strategies that need one to terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearchConfig {
    /// Stack pops allowed before depth-first search gives up.
    pub dfs_step_limit: usize,

    /// Deepest limit tried by iterative deepening.
    pub iddfs_max_depth: usize,
}

impl Default for PathSearchConfig {
    fn default() -> Self {
        Self {
            dfs_step_limit: hinger_config::dfs_step_limit(),
            iddfs_max_depth: hinger_config::iddfs_max_depth(),
        }
    }
}

impl From<&hinger_config::PathSearchConfig> for PathSearchConfig {
    fn from(config: &hinger_config::PathSearchConfig) -> Self {
        Self {
            dfs_step_limit: config.dfs_step_limit,
            iddfs_max_depth: config.iddfs_max_depth,
        }
    }
}

impl PathSearchConfig {
    /// Builder pattern: set the DFS step limit.
    pub fn with_dfs_step_limit(mut self, limit: usize) -> Self {
        self.dfs_step_limit = limit;
        self
    }

    /// Builder pattern: set the IDDFS maximum depth.
    pub fn with_iddfs_max_depth(mut self, depth: usize) -> Self {
        self.iddfs_max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PathSearchConfig::default();
        assert_eq!(config.dfs_step_limit, 100);
        assert_eq!(config.iddfs_max_depth, 20);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PathSearchConfig::default()
            .with_dfs_step_limit(5)
            .with_iddfs_max_depth(3);

        assert_eq!(config.dfs_step_limit, 5);
        assert_eq!(config.iddfs_max_depth, 3);
    }

    #[test]
    fn test_from_central_config() {
        let central = hinger_config::PathSearchConfig {
            dfs_step_limit: 42,
            iddfs_max_depth: 7,
        };
        let config = PathSearchConfig::from(&central);
        assert_eq!(config, PathSearchConfig::default().with_dfs_step_limit(42).with_iddfs_max_depth(7));
    }
}
