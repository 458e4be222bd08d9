//! Search configuration: MCTS parameters and the mode selector.

use std::str::FromStr;

use crate::error::AgentError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations.
    pub iterations: u32,

    /// Constant inside the UCT exploration term
    /// `sqrt(exploration * ln(N_parent) / N)`. 2.0 gives classic UCB1.
    pub exploration: f64,

    /// Fixed seed for this search's random source. `None` uses the agent's
    /// own generator.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: hinger_config::mcts_iterations(),
            exploration: hinger_config::exploration(),
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Create a fast, seeded config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 50,
            exploration: 2.0,
            seed: Some(42),
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Move-selection strategy together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMode {
    Minimax { depth: u32, maximizing: bool },
    AlphaBeta { depth: u32, maximizing: bool },
    Mcts(MctsConfig),
}

impl Default for SearchMode {
    fn default() -> Self {
        // The embedded defaults always name a valid mode
        hinger_config::agent_mode()
            .parse()
            .unwrap_or_else(|_| SearchMode::Mcts(MctsConfig::default()))
    }
}

impl SearchMode {
    /// Every mode name, in display order.
    pub const NAMES: [&'static str; 3] = ["minimax", "alphabeta", "mcts"];

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Minimax { .. } => "minimax",
            SearchMode::AlphaBeta { .. } => "alphabeta",
            SearchMode::Mcts(_) => "mcts",
        }
    }

    /// Build a mode from the agent section of the central config.
    pub fn from_config(config: &hinger_config::AgentConfig) -> Result<Self, AgentError> {
        let mcts = MctsConfig {
            iterations: config.mcts_iterations,
            exploration: config.exploration,
            seed: config.seed,
        };
        Self::parse_with(&config.mode, config.depth, config.maximizing, mcts)
    }

    /// Reject bounds that leave a non-terminal position without a move.
    pub fn validate(&self) -> Result<(), AgentError> {
        match self {
            SearchMode::Minimax { depth: 0, .. } | SearchMode::AlphaBeta { depth: 0, .. } => {
                Err(AgentError::InvalidBound { field: "depth" })
            }
            SearchMode::Mcts(config) if config.iterations == 0 => {
                Err(AgentError::InvalidBound {
                    field: "mcts_iterations",
                })
            }
            _ => Ok(()),
        }
    }

    fn parse_with(
        name: &str,
        depth: u32,
        maximizing: bool,
        mcts: MctsConfig,
    ) -> Result<Self, AgentError> {
        let mode = match name.trim().to_ascii_lowercase().as_str() {
            "minimax" => SearchMode::Minimax { depth, maximizing },
            "alphabeta" | "alpha-beta" | "alpha_beta" => SearchMode::AlphaBeta { depth, maximizing },
            "mcts" => SearchMode::Mcts(mcts),
            _ => return Err(AgentError::UnknownMode(name.to_string())),
        };
        mode.validate()?;
        Ok(mode)
    }
}

impl FromStr for SearchMode {
    type Err = AgentError;

    /// Parse a mode name, filling parameters from the embedded defaults.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse_with(
            name,
            hinger_config::search_depth(),
            hinger_config::maximizing(),
            MctsConfig::default(),
        )
    }
}
