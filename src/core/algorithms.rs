use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::engine::{Board, Move, Side};
use crate::core::evaluation;

/** Outside of any reachable score, still safe to negate */
pub const INF: i32 = i32::MAX;

/** Scores `board` (already showing `pending`) for `side`. */
pub type EvaluationFunc = fn(&Board, Option<Move>, Side) -> i32;

pub trait Algorithm {
    /** Picks a move for `side`, `None` to pass. The board is only read;
     * exploration happens on copies. */
    fn solve(&mut self, board: &Board, side: Side) -> Option<Move>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationKind {
    /** Phase-aware heuristic */
    #[default]
    Phased,
    /** Disc differential only */
    Naive,
}

impl EvaluationKind {
    pub fn function(self) -> EvaluationFunc {
        match self {
            EvaluationKind::Phased => evaluation::evaluate,
            EvaluationKind::Naive => evaluation::naive,
        }
    }
}

/** Outcome of a root search */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
    pub nodes: u64,
}

/** One tree walk. Holds nothing but the scoring function and counters, every
 * position lives in the recursion frames. */
#[derive(Debug)]
pub struct Search {
    evaluate_fn: EvaluationFunc,
    pub nodes: u64,
    pub cutoffs: u64,
}

impl Search {
    pub fn new(evaluate_fn: EvaluationFunc) -> Self {
        Search {
            evaluate_fn,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /** Negamax with a fail-hard alpha-beta window.
     *
     * `to_move` is played by `player` on a private copy of `board`, then the
     * opponent picks its best reply, searched `depth` plies deep. The result
     * is from `player`'s point of view and bounded by `[alpha, beta]` unless
     * it comes straight from the evaluation function. */
    pub fn negamax(
        &mut self,
        board: &Board,
        to_move: Option<Move>,
        depth: u32,
        player: Side,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        let mut board = *board;
        board.apply(to_move, player);
        if depth == 0 {
            return (self.evaluate_fn)(&board, to_move, player);
        }
        let opponent = player.opposite();
        let replies = board.legal_moves(opponent);
        if replies.is_empty() {
            if to_move.is_none() {
                // Both sides passed in a row, nothing left to search.
                return (self.evaluate_fn)(&board, to_move, player);
            }
            return -self.negamax(&board, None, depth - 1, opponent, -beta, -alpha);
        }
        // The opponent maximizes its own score inside the mirrored window.
        let (mut best, bound) = (-beta, -alpha);
        for reply in replies {
            let score = self.negamax(&board, Some(reply), depth - 1, opponent, best, bound);
            if score >= bound {
                self.cutoffs += 1;
                trace!("Cutoff after {reply} at depth {depth}");
                return alpha;
            }
            best = best.max(score);
        }
        -best
    }

    /** Same tree as `negamax` without any pruning */
    pub fn minimax(&mut self, board: &Board, to_move: Option<Move>, depth: u32, player: Side) -> i32 {
        self.nodes += 1;
        let mut board = *board;
        board.apply(to_move, player);
        if depth == 0 {
            return (self.evaluate_fn)(&board, to_move, player);
        }
        let opponent = player.opposite();
        let replies = board.legal_moves(opponent);
        if replies.is_empty() {
            if to_move.is_none() {
                return (self.evaluate_fn)(&board, to_move, player);
            }
            return -self.minimax(&board, None, depth - 1, opponent);
        }
        let best_reply = replies
            .into_iter()
            .map(|reply| self.minimax(&board, Some(reply), depth - 1, opponent))
            .max()
            .unwrap_or(-INF);
        -best_reply
    }
}

#[derive(Debug, Clone)]
pub struct NegamaxBot {
    max_depth: u32,
    evaluate_fn: EvaluationFunc,
}

impl NegamaxBot {
    pub fn new(max_depth: u32, evaluate_fn: EvaluationFunc) -> Self {
        NegamaxBot {
            max_depth,
            evaluate_fn,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /** Full-window search of every own move; the first move reaching the best
     * score wins. */
    pub fn decide(&self, board: &Board, side: Side, depth: u32) -> Decision {
        let mut search = Search::new(self.evaluate_fn);
        let mut best_move = None;
        let mut best_score = -INF;
        for candidate in board.legal_moves(side) {
            let score = search.negamax(board, Some(candidate), depth, side, -INF, INF);
            debug!("{side} {candidate}: {score}");
            if score > best_score {
                best_score = score;
                best_move = Some(candidate);
            }
        }
        Decision {
            best_move,
            score: best_score,
            depth,
            nodes: search.nodes,
        }
    }

    /** Deepens one full depth at a time up to `max_depth`. `keep_going` is
     * asked before each depth after the first and can stop the deepening;
     * the last completed depth is returned. */
    pub fn decide_iterative(
        &self,
        board: &Board,
        side: Side,
        mut keep_going: impl FnMut(u32) -> bool,
    ) -> Decision {
        let mut decision = self.decide(board, side, 0);
        let mut nodes = decision.nodes;
        for depth in 1..=self.max_depth {
            if decision.best_move.is_none() || !keep_going(depth) {
                break;
            }
            decision = self.decide(board, side, depth);
            nodes += decision.nodes;
        }
        decision.nodes = nodes;
        decision
    }
}

impl Default for NegamaxBot {
    fn default() -> Self {
        NegamaxBot::new(4, evaluation::evaluate)
    }
}

impl Algorithm for NegamaxBot {
    fn solve(&mut self, board: &Board, side: Side) -> Option<Move> {
        let decision = self.decide(board, side, self.max_depth);
        debug!(
            "{side} picks {:?} with score {} after {} nodes",
            decision.best_move, decision.score, decision.nodes
        );
        decision.best_move
    }
}

/** Exhaustive search of the same tree, for cross-checking the pruned one */
#[derive(Debug, Clone)]
pub struct MinimaxBot {
    max_depth: u32,
    evaluate_fn: EvaluationFunc,
}

impl MinimaxBot {
    pub fn new(max_depth: u32, evaluate_fn: EvaluationFunc) -> Self {
        MinimaxBot {
            max_depth,
            evaluate_fn,
        }
    }
}

impl Algorithm for MinimaxBot {
    fn solve(&mut self, board: &Board, side: Side) -> Option<Move> {
        let mut search = Search::new(self.evaluate_fn);
        let mut best = None;
        let mut best_score = -INF;
        for candidate in board.legal_moves(side) {
            let score = search.minimax(board, Some(candidate), self.max_depth, side);
            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
        best
    }
}

/** Uniformly random legal move */
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        RandomBot {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        RandomBot::new()
    }
}

impl Algorithm for RandomBot {
    fn solve(&mut self, board: &Board, side: Side) -> Option<Move> {
        board.legal_moves(side).choose(&mut self.rng).copied()
    }
}
