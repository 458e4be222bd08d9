//! Move-selecting agent.
//!
//! An [`Agent`] owns a name, a default [`SearchMode`], an evaluator for the
//! depth-limited searches and the random source that drives MCTS.

use std::fmt;

use hinger_core::{GridState, Move};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::config::SearchMode;
use crate::error::AgentError;
use crate::evaluator::{Evaluator, HingerEvaluator};
use crate::minimax::{alpha_beta, minimax};
use crate::rollout::RandomRollout;
use crate::search::run_mcts;
use crate::terminal::{is_terminal, is_win};

/// A named player that picks moves with one of three searches.
pub struct Agent<E: Evaluator = HingerEvaluator> {
    name: String,
    mode: SearchMode,
    evaluator: E,
    /// RNG for MCTS expansion and rollouts
    rng: ChaCha20Rng,
}

impl<E: Evaluator> fmt::Debug for Agent<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .finish()
    }
}

impl Agent {
    /// Create an agent with the default mode and an entropy-seeded RNG.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: SearchMode::default(),
            evaluator: HingerEvaluator::default(),
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Build an agent from the agent section of the central config.
    ///
    /// A configured seed makes every MCTS decision reproducible.
    pub fn from_config(config: &hinger_config::AgentConfig) -> Result<Self, AgentError> {
        let agent = Self::new(config.name.clone()).with_mode(SearchMode::from_config(config)?);
        Ok(match config.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }
}

impl<E: Evaluator> Agent<E> {
    /// Set the mode used by [`Agent::choose_move`].
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reseed the agent's RNG for determinism (used in tests).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self
    }

    /// Swap the evaluator used by minimax and alpha-beta.
    pub fn with_evaluator<F: Evaluator>(self, evaluator: F) -> Agent<F> {
        Agent {
            name: self.name,
            mode: self.mode,
            evaluator,
            rng: self.rng,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }

    /// Pick a move with the agent's own mode.
    ///
    /// Returns `None` when the state is terminal.
    pub fn choose_move(&mut self, state: &GridState) -> Option<Move> {
        let mode = self.mode.clone();
        self.choose_move_with(state, &mode)
    }

    /// Pick a move with the mode named `name`, using default parameters.
    pub fn choose_move_named(
        &mut self,
        state: &GridState,
        name: &str,
    ) -> Result<Option<Move>, AgentError> {
        let mode: SearchMode = name.parse()?;
        Ok(self.choose_move_with(state, &mode))
    }

    /// Pick a move with an explicit mode.
    ///
    /// A zero depth or iteration count is raised to 1, so only a terminal
    /// state yields `None`.
    pub fn choose_move_with(&mut self, state: &GridState, mode: &SearchMode) -> Option<Move> {
        if is_win(state) {
            info!(agent = %self.name, "Hinger on the board, the side to move can win");
        }
        if is_terminal(state) {
            debug!(agent = %self.name, "No active cells, no move available");
            return None;
        }

        if let Err(err) = mode.validate() {
            warn!(agent = %self.name, mode = mode.name(), %err, "Raising search bound to 1");
        }

        let chosen = match mode {
            SearchMode::Minimax { depth, maximizing } => {
                let decision = minimax(state, (*depth).max(1), *maximizing, &self.evaluator);
                debug!(score = decision.score, nodes = decision.nodes, "Minimax decision");
                decision.best_move
            }
            SearchMode::AlphaBeta { depth, maximizing } => {
                let decision = alpha_beta(state, (*depth).max(1), *maximizing, &self.evaluator);
                debug!(score = decision.score, nodes = decision.nodes, "Alpha-beta decision");
                decision.best_move
            }
            SearchMode::Mcts(config) => {
                let config = config.clone().with_iterations(config.iterations.max(1));
                let seed = config.seed;
                let result = match seed {
                    Some(seed) => {
                        let mut rng = ChaCha20Rng::seed_from_u64(seed);
                        run_mcts(state, &RandomRollout, config, &mut rng)
                    }
                    None => run_mcts(state, &RandomRollout, config, &mut self.rng),
                };
                result.map(|r| r.best_move)
            }
        };

        if let Some(mv) = chosen {
            debug!(agent = %self.name, mode = mode.name(), mv = %mv, "Move chosen");
        }
        chosen
    }
}

impl<E: Evaluator> fmt::Display for Agent<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Agent name: {}, Modes: {}",
            self.name,
            SearchMode::NAMES.join(", ")
        )
    }
}
