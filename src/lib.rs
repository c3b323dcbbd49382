//! Othello playing agent: a bitset board engine, a phase-aware evaluator and
//! a negamax search with alpha-beta pruning.
//!
//! ```
//! use othello_engine::{Agent, Player, Side};
//!
//! let mut agent = Agent::new(Side::Black);
//! let answer = agent.take_turn(None, None);
//! assert!(answer.is_some());
//! ```

pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::algorithms::{Algorithm, NegamaxBot};
pub use crate::core::definitions::{GameEndState, GameState, Player};
pub use crate::core::engine::{Board, Move, Side};
pub use crate::core::game::{Agent, AgentConfig, Match, MatchResult};
