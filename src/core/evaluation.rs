//! Phase-aware position scoring.
//!
//! A score is always taken from one side's point of view: higher is better
//! for that side. The board handed in is the position *after* the pending
//! move; the move itself only tells whether the side had anything to play.
//!
//! Scoring runs in two stages. Late in the game (or when the side has just
//! passed) only the disc differential counts. Otherwise every rule of
//! [`RULES`] whose phase predicate holds contributes its weighted partial
//! score.

use std::fmt::{self, Debug};

use crate::core::engine::{Board, Move, Side};
use crate::core::utils::CORNERS;

/** Move count from which only the disc differential matters */
pub const ENDGAME_MOVE_COUNT: u32 = 45;
/** Positional table is used strictly below this move count */
pub const OPENING_MOVE_COUNT: u32 = 30;
/** Mobility and corner control are used strictly below this move count */
pub const MIDGAME_MOVE_COUNT: u32 = 50;

#[rustfmt::skip]
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 20, 10, 10, 20, -20, 100],
    [-20, -50, -6, -4, -4, -6, -50, -20],
    [ 20,  -6,  7,  4,  4,  7,  -6,  20],
    [ 10,  -4,  4,  0,  0,  4,  -4,  10],
    [ 10,  -4,  4,  0,  0,  4,  -4,  10],
    [ 20,  -6,  7,  4,  4,  7,  -6,  20],
    [-20, -50, -6, -4, -4, -6, -50, -20],
    [100, -20, 20, 10, 10, 20, -20, 100],
];

/** Everything the rules look at, extracted once per evaluation. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub move_count: u32,
    pub disc_diff: i32,
    pub positional: i32,
    pub own_mobility: i32,
    pub other_mobility: i32,
    pub corner_diff: i32,
}

impl Features {
    pub fn extract(board: &Board, side: Side) -> Features {
        let other = side.opposite();
        let mut positional = 0;
        for (y, row) in POSITION_WEIGHTS.iter().enumerate() {
            for (x, weight) in row.iter().enumerate() {
                let (x, y) = (x as u8, y as u8);
                if board.get(side, x, y) {
                    positional += *weight;
                } else if board.get(other, x, y) {
                    positional -= *weight;
                }
            }
        }
        let corner_diff = CORNERS
            .iter()
            .map(|&pos| match board.owner(pos) {
                Some(owner) if owner == side => 1,
                Some(_) => -1,
                None => 0,
            })
            .sum();
        Features {
            move_count: board.move_count(),
            disc_diff: disc_differential(board, side),
            positional,
            own_mobility: board.mobility(side) as i32,
            other_mobility: board.mobility(other) as i32,
            corner_diff,
        }
    }
}

/** One heuristic regime: active while `applies` holds, adds `weight * score`. */
#[derive(Clone, Copy)]
pub struct PhaseRule {
    pub name: &'static str,
    pub weight: i32,
    pub applies: fn(&Features) -> bool,
    pub score: fn(&Features) -> i32,
}

impl PhaseRule {
    pub fn contribution(&self, features: &Features) -> Option<i32> {
        (self.applies)(features).then(|| self.weight * (self.score)(features))
    }
}

impl Debug for PhaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseRule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

fn in_opening(f: &Features) -> bool {
    f.move_count < OPENING_MOVE_COUNT
}

fn in_midgame(f: &Features) -> bool {
    f.move_count < MIDGAME_MOVE_COUNT
}

// No move left after this one: judge by material before the table misreads a
// locked position.
fn immobile(f: &Features) -> bool {
    f.own_mobility == 0
}

fn positional(f: &Features) -> i32 {
    f.positional
}

fn mobility_and_corners(f: &Features) -> i32 {
    15 * f.corner_diff + 4 * (f.own_mobility - f.other_mobility)
}

fn material(f: &Features) -> i32 {
    f.disc_diff
}

pub const RULES: [PhaseRule; 3] = [
    PhaseRule {
        name: "positional",
        weight: 1,
        applies: in_opening,
        score: positional,
    },
    PhaseRule {
        name: "mobility-corners",
        weight: 10,
        applies: in_midgame,
        score: mobility_and_corners,
    },
    PhaseRule {
        name: "zero-mobility",
        weight: 15,
        applies: immobile,
        score: material,
    },
];

pub fn disc_differential(board: &Board, side: Side) -> i32 {
    board.disc_count(side) as i32 - board.disc_count(side.opposite()) as i32
}

/** Disc differential only, with the [`crate::core::algorithms::EvaluationFunc`]
 * signature. */
pub fn naive(board: &Board, _pending: Option<Move>, side: Side) -> i32 {
    disc_differential(board, side)
}

fn greedy_only(board: &Board, pending: Option<Move>) -> bool {
    pending.is_none() || board.move_count() >= ENDGAME_MOVE_COUNT
}

pub fn evaluate(board: &Board, pending: Option<Move>, side: Side) -> i32 {
    if greedy_only(board, pending) {
        return disc_differential(board, side);
    }
    let features = Features::extract(board, side);
    RULES
        .iter()
        .filter_map(|rule| rule.contribution(&features))
        .sum()
}

/** Per-rule contributions behind [`evaluate`]. The greedy regime shows up as
 * a single `disc-differential` entry. */
pub fn breakdown(board: &Board, pending: Option<Move>, side: Side) -> Vec<(&'static str, i32)> {
    if greedy_only(board, pending) {
        return vec![("disc-differential", disc_differential(board, side))];
    }
    let features = Features::extract(board, side);
    RULES
        .iter()
        .filter_map(|rule| rule.contribution(&features).map(|score| (rule.name, score)))
        .collect()
}
