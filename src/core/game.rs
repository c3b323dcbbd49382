use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::core::algorithms::{Algorithm, EvaluationKind, NegamaxBot};
use crate::core::definitions::{GameEndState, GameState, Player};
use crate::core::engine::{Board, Move, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    /** Plies searched below each own candidate move */
    pub depth: u32,
    pub evaluation: EvaluationKind,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            depth: 4,
            evaluation: EvaluationKind::Phased,
        }
    }
}

/** Keeps the authoritative board of a real game and answers turns with the
 * help of an [`Algorithm`]. The algorithm only ever sees a shared reference. */
#[derive(Debug)]
pub struct Agent<A: Algorithm = NegamaxBot> {
    board: Board,
    side: Side,
    algorithm: A,
    history: Vec<Option<Move>>,
}

impl Agent<NegamaxBot> {
    pub fn new(side: Side) -> Self {
        Agent::with_config(side, AgentConfig::default())
    }

    pub fn with_config(side: Side, config: AgentConfig) -> Self {
        Agent::with_algorithm(
            side,
            NegamaxBot::new(config.depth, config.evaluation.function()),
        )
    }
}

impl<A: Algorithm> Agent<A> {
    pub fn with_algorithm(side: Side, algorithm: A) -> Self {
        Agent::from_board(Board::new(), side, algorithm)
    }

    /** Joins a game already in progress */
    pub fn from_board(board: Board, side: Side, algorithm: A) -> Self {
        Agent {
            board,
            side,
            algorithm,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /** Own answers so far, `None` for passes */
    pub fn history(&self) -> &[Option<Move>] {
        &self.history
    }
}

impl<A: Algorithm> Player for Agent<A> {
    fn side(&self) -> Side {
        self.side
    }

    fn take_turn(&mut self, opponent_move: Option<Move>, _ms_left: Option<Duration>) -> Option<Move> {
        self.board.apply(opponent_move, self.side.opposite());
        if !self.board.has_legal_moves(self.side) {
            debug!("{} has no legal move, passing", self.side);
            self.history.push(None);
            return None;
        }
        let chosen = self.algorithm.solve(&self.board, self.side);
        self.board.apply(chosen, self.side);
        self.history.push(chosen);
        chosen
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub black: u32,
    pub white: u32,
    pub end: GameEndState,
    /** Turns taken, passes included */
    pub turns: usize,
}

impl MatchResult {
    /** `None` for a draw */
    pub fn winner(&self) -> Option<Side> {
        match self.end {
            GameEndState::IllegalMove(side) | GameEndState::OutOfTime(side) => {
                Some(side.opposite())
            }
            GameEndState::Completed if self.black > self.white => Some(Side::Black),
            GameEndState::Completed if self.white > self.black => Some(Side::White),
            GameEndState::Completed => None,
        }
    }
}

/** Referee for two players: keeps its own board, checks every answer and
 * tracks the time budget. Black moves first. */
pub struct Match {
    board: Board,
    players: [Box<dyn Player>; 2],
    current_player: Side,
    last_move: Option<Move>,
    time_left: [Option<Duration>; 2],
    history: Vec<(Side, Option<Move>)>,
    end: Option<GameEndState>,
}

fn slot(side: Side) -> usize {
    match side {
        Side::Black => 0,
        Side::White => 1,
    }
}

impl Match {
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>) -> Match {
        assert!(black.side() == Side::Black, "First player must play Black!");
        assert!(white.side() == Side::White, "Second player must play White!");
        Match {
            board: Board::new(),
            players: [black, white],
            current_player: Side::Black,
            last_move: None,
            time_left: [None, None],
            history: Vec::new(),
            end: None,
        }
    }

    /** Gives each side `budget` for the whole game. */
    pub fn with_time_limit(mut self, budget: Duration) -> Match {
        self.time_left = [Some(budget), Some(budget)];
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[(Side, Option<Move>)] {
        &self.history
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    pub fn step(&mut self) -> GameState {
        if self.end.is_some() {
            return GameState::Finished;
        }
        if self.board.is_terminal() {
            self.end = Some(GameEndState::Completed);
            return GameState::Finished;
        }
        let side = self.current_player;
        let budget = self.time_left[slot(side)];
        let started = Instant::now();
        let answer = self.players[slot(side)].take_turn(self.last_move, budget);
        let spent = started.elapsed();

        if let Some(budget) = budget {
            match budget.checked_sub(spent) {
                Some(rest) => self.time_left[slot(side)] = Some(rest),
                None => {
                    warn!("{side} ran out of time");
                    self.end = Some(GameEndState::OutOfTime(side));
                    return GameState::Finished;
                }
            }
        }
        if !self.board.is_legal(answer, side) {
            warn!("{side} answered with illegal move {answer:?}");
            self.end = Some(GameEndState::IllegalMove(side));
            return GameState::Finished;
        }

        self.board.apply(answer, side);
        match answer {
            Some(_move) => debug!("{side} plays {_move}"),
            None => debug!("{side} passes"),
        }
        self.history.push((side, answer));
        self.last_move = answer;
        self.current_player = side.opposite();
        GameState::PlayerMove(self.current_player)
    }

    pub fn play(&mut self) -> MatchResult {
        while self.step() != GameState::Finished {}
        let result = self.result();
        info!(
            "Match over ({:?}): Black {} - White {}",
            result.end, result.black, result.white
        );
        result
    }

    pub fn result(&self) -> MatchResult {
        MatchResult {
            black: self.board.disc_count(Side::Black),
            white: self.board.disc_count(Side::White),
            end: self.end.unwrap_or(GameEndState::Completed),
            turns: self.history.len(),
        }
    }
}
