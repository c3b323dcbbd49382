use std::{fmt::Display, ops::AddAssign};

use crate::core::engine::{Board, Move, Side};

/** Leaf statistics of a fixed-depth move tree. A pass counts as a move. */
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub all: usize,
    pub passes: usize,
    pub flips: usize,
    pub game_ends: usize,
}

impl PerftResult {
    pub fn combine(self, other: PerftResult) -> Self {
        PerftResult {
            all: self.all + other.all,
            passes: self.passes + other.passes,
            flips: self.flips + other.flips,
            game_ends: self.game_ends + other.game_ends,
        }
    }
}

impl AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: Self) {
        self.all += rhs.all;
        self.passes += rhs.passes;
        self.flips += rhs.flips;
        self.game_ends += rhs.game_ends;
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - pass: {:<6} flips: {:<8} ends: {:<6}",
            self.all, self.passes, self.flips, self.game_ends
        )
    }
}

/** Moves for `side`, with a lone pass when nothing can be placed */
fn moves_or_pass(board: &Board, side: Side) -> Vec<Option<Move>> {
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        vec![None]
    } else {
        moves.into_iter().map(Some).collect()
    }
}

fn perft_step(board: Board, side: Side, depth: usize) -> PerftResult {
    if board.is_terminal() {
        return PerftResult {
            all: 1,
            game_ends: 1,
            ..Default::default()
        };
    }
    if depth == 0 {
        return PerftResult {
            all: 1,
            ..Default::default()
        };
    }
    moves_or_pass(&board, side)
        .into_iter()
        .map(|_move| {
            let mut board = board;
            let flips = board.apply(_move, side);
            let mut result = perft_step(board, side.opposite(), depth - 1);
            if depth == 1 {
                result.flips += flips as usize;
                result.passes += _move.is_none() as usize;
            }
            result
        })
        .reduce(PerftResult::combine)
        .unwrap_or_default()
}

/// Counts the positions reached after `depth` plies from `board` with `side`
/// to move. Finished games stop early and count as a single leaf.
pub fn perft(board: &Board, side: Side, depth: usize) -> PerftResult {
    perft_step(*board, side, depth)
}

/** Same as `perft`, printing the count below every root move */
pub fn perft_divide(board: &Board, side: Side, depth: usize) -> PerftResult {
    if depth == 0 || board.is_terminal() {
        return perft(board, side, depth);
    }
    let mut total = PerftResult::default();
    for _move in moves_or_pass(board, side) {
        let mut child = *board;
        let flips = child.apply(_move, side);
        let mut result = perft(&child, side.opposite(), depth - 1);
        if depth == 1 {
            result.flips += flips as usize;
            result.passes += _move.is_none() as usize;
        }
        match _move {
            Some(_move) => println!(" {_move} : {result}"),
            None => println!(" pass : {result}"),
        }
        total += result;
    }
    println!("+ total: {total}");
    total
}
