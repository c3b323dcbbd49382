use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::utils::{
    bit, compact_pos, in_direction, pos_to_str, str_to_pos, unpack_pos, DIRECTIONS,
};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Side::Black => "Black",
            Side::White => "White",
        })
    }
}

/** A disc placement. A pass is represented as `Option::<Move>::None`. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    x: u8,
    y: u8,
}

impl Move {
    pub fn new(x: u8, y: u8) -> Move {
        assert!(x < 8 && y < 8, "Move ({x}, {y}) is outside of the board!");
        Move { x, y }
    }

    pub fn try_new(x: u8, y: u8) -> Option<Move> {
        (x < 8 && y < 8).then_some(Move { x, y })
    }

    pub(crate) fn from_pos(pos: u8) -> Move {
        let (x, y) = unpack_pos(pos);
        Move { x, y }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /** Cell index, `x + 8 * y` */
    pub fn position(&self) -> u8 {
        compact_pos(self.x, self.y)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(pos_to_str(self.position()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError {
    input: String,
}

impl Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a square between a1 and h8", self.input)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        str_to_pos(s.trim())
            .map(Move::from_pos)
            .ok_or_else(|| ParseMoveError {
                input: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /** Cell marker other than `b`, `w`, `.` or `-` */
    UnexpectedChar { index: usize, found: char },
    /** Layout did not describe exactly 64 cells */
    WrongLength(usize),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnexpectedChar { index, found } => {
                write!(f, "unexpected `{found}` for cell {index}")
            }
            LayoutError::WrongLength(len) => write!(f, "layout has {len} cells, expected 64"),
        }
    }
}

impl std::error::Error for LayoutError {}

/** Two 64-bit sets indexed by `x + 8 * y`.
 * `taken` -- a disc sits on the cell
 * `black` -- the disc is black, only meaningful where `taken` is set
 *
 * The board is a plain value: copying it is the way to explore a line of play
 * without touching the original. */
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    taken: u64,
    black: u64,
}

impl Board {
    /** Standard opening position */
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.set(Side::White, 3, 3);
        board.set(Side::White, 4, 4);
        board.set(Side::Black, 4, 3);
        board.set(Side::Black, 3, 4);
        board
    }

    pub const fn empty() -> Board {
        Board { taken: 0, black: 0 }
    }

    /** Builds a board from 64 cell markers in row-major order: `b` for black,
     * `w` for white, `.` or `-` for an empty cell. Whitespace is ignored, so
     * the output of `Display` parses back. */
    pub fn from_layout(layout: &str) -> Result<Board, LayoutError> {
        let mut board = Board::empty();
        let mut cells = 0;
        for (index, marker) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            if index >= 64 {
                cells = index + 1;
                continue;
            }
            let pos = index as u8;
            match marker {
                'b' | 'B' => board.place(Side::Black, pos),
                'w' | 'W' => board.place(Side::White, pos),
                '.' | '-' => (),
                found => return Err(LayoutError::UnexpectedChar { index, found }),
            }
            cells = index + 1;
        }
        if cells != 64 {
            return Err(LayoutError::WrongLength(cells));
        }
        Ok(board)
    }

    pub fn occupied(&self, x: u8, y: u8) -> bool {
        self.taken & bit(compact_pos(x, y)) != 0
    }

    pub fn get(&self, side: Side, x: u8, y: u8) -> bool {
        self.discs(side) & bit(compact_pos(x, y)) != 0
    }

    /** Overwrites the cell with a disc of `side`. */
    pub fn set(&mut self, side: Side, x: u8, y: u8) {
        self.place(side, compact_pos(x, y));
    }

    pub fn owner(&self, pos: u8) -> Option<Side> {
        let mask = bit(pos);
        if self.taken & mask == 0 {
            None
        } else if self.black & mask != 0 {
            Some(Side::Black)
        } else {
            Some(Side::White)
        }
    }

    /** A pass is legal only without any legal placement. */
    pub fn is_legal(&self, _move: Option<Move>, side: Side) -> bool {
        match _move {
            None => !self.has_legal_moves(side),
            Some(_move) => self.captures(_move.position(), side) != 0,
        }
    }

    /** Plays `_move` for `side` and returns the number of flipped discs.
     * Passes and illegal moves leave the board untouched and return 0. */
    pub fn apply(&mut self, _move: Option<Move>, side: Side) -> u32 {
        let Some(_move) = _move else {
            trace!("{side} passes, board unchanged");
            return 0;
        };
        let flips = self.captures(_move.position(), side);
        if flips == 0 {
            trace!("Ignoring illegal move {_move} for {side}");
            return 0;
        }
        let changed = flips | bit(_move.position());
        self.taken |= changed;
        match side {
            Side::Black => self.black |= changed,
            Side::White => self.black &= !changed,
        }
        flips.count_ones()
    }

    /** Legal placements in row-major order */
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        (0..64u8)
            .filter(|&pos| self.captures(pos, side) != 0)
            .map(Move::from_pos)
            .collect()
    }

    /** Number of legal placements, without collecting them */
    pub fn mobility(&self, side: Side) -> usize {
        (0..64u8)
            .filter(|&pos| self.captures(pos, side) != 0)
            .count()
    }

    pub fn has_legal_moves(&self, side: Side) -> bool {
        (0..64u8).any(|pos| self.captures(pos, side) != 0)
    }

    /** Neither side can place a disc. */
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Side::Black) && !self.has_legal_moves(Side::White)
    }

    pub fn disc_count(&self, side: Side) -> u32 {
        self.discs(side).count_ones()
    }

    pub fn total_discs(&self) -> u32 {
        self.taken.count_ones()
    }

    /** Discs placed since the four-disc opening */
    pub fn move_count(&self) -> u32 {
        self.total_discs().saturating_sub(4)
    }

    /** Cell owners in row-major order */
    pub fn iter(&self) -> impl Iterator<Item = Option<Side>> + '_ {
        (0..64u8).map(|pos| self.owner(pos))
    }

    fn discs(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.taken & self.black,
            Side::White => self.taken & !self.black,
        }
    }

    fn place(&mut self, side: Side, pos: u8) {
        let mask = bit(pos);
        self.taken |= mask;
        match side {
            Side::Black => self.black |= mask,
            Side::White => self.black &= !mask,
        }
    }

    /** Opponent discs sandwiched between `origin` and the nearest own disc in
     * `direction`. The run must be non-empty and closed by an own disc;
     * anything else (empty cell, board edge) yields an empty mask. */
    fn flip_run(&self, origin: u8, direction: (i8, i8), side: Side) -> u64 {
        let own = self.discs(side);
        let other = self.discs(side.opposite());
        let mut run = 0;
        for pos in in_direction(origin, direction) {
            let mask = bit(pos);
            if other & mask != 0 {
                run |= mask;
            } else if own & mask != 0 {
                return run;
            } else {
                return 0;
            }
        }
        0
    }

    /** Every disc flipped by placing on `pos`, empty when the move is illegal. */
    fn captures(&self, pos: u8, side: Side) -> u64 {
        if self.taken & bit(pos) != 0 {
            return 0;
        }
        DIRECTIONS
            .iter()
            .fold(0, |flips, &direction| flips | self.flip_run(pos, direction, side))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8u8 {
            let row: Vec<&str> = (0..8u8)
                .map(|x| match self.owner(compact_pos(x, y)) {
                    Some(Side::Black) => "b",
                    Some(Side::White) => "w",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("taken", &format_args!("{:#018x}", self.taken))
            .field("black", &format_args!("{:#018x}", self.black))
            .field("black_discs", &self.disc_count(Side::Black))
            .field("white_discs", &self.disc_count(Side::White))
            .finish()
    }
}
