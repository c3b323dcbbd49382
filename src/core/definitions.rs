use std::time::Duration;

use crate::core::engine::{Move, Side};

/** Anything that can sit at the table: receives the opponent's last move
 * (`None` when the opponent passed or on the very first turn) and answers
 * with its own move, `None` to pass.
 *
 * `ms_left` is the remaining game time as the orchestrator sees it, `None`
 * meaning no limit. It is advisory; going over it is for the orchestrator to
 * punish. */
pub trait Player {
    fn side(&self) -> Side;
    fn take_turn(&mut self, opponent_move: Option<Move>, ms_left: Option<Duration>) -> Option<Move>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    PlayerMove(Side),
    Finished,
}

/** Why a match stopped */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndState {
    /** Neither side can move */
    Completed,
    /** The side played an illegal move */
    IllegalMove(Side),
    /** The side went over its time budget */
    OutOfTime(Side),
}
