/** The eight compass steps as `(dx, dy)` pairs */
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/** Cell indexes of the four corners */
pub const CORNERS: [u8; 4] = [0, 7, 56, 63];

#[derive(Debug)]
pub struct DirectionIterator {
    x: i8,
    y: i8,
    dx: i8,
    dy: i8,
}

impl Iterator for DirectionIterator {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.x += self.dx;
        self.y += self.dy;
        if is_valid_coord(self.x, self.y) {
            Some(compact_pos(self.x as u8, self.y as u8))
        } else {
            None
        }
    }
}

/** Walks from `position` (exclusive) towards the board edge one step at a time. */
pub fn in_direction(position: u8, (dx, dy): (i8, i8)) -> DirectionIterator {
    let (x, y): (u8, u8) = unpack_pos(position);
    DirectionIterator {
        x: x as i8,
        y: y as i8,
        dx,
        dy,
    }
}

#[inline]
pub fn is_valid_coord(x: i8, y: i8) -> bool {
    (0..8).contains(&x) && (0..8).contains(&y)
}

#[inline]
pub fn compact_pos(x: u8, y: u8) -> u8 {
    debug_assert!(x < 8 && y < 8, "Cell ({x}, {y}) is outside of the board!");
    x + 8 * y
}

#[inline]
pub fn unpack_pos<T: From<u8>, V: Into<u8>>(pos: V) -> (T, T) {
    let pos: u8 = pos.into();
    ((pos & 0x07).into(), (pos >> 3).into())
}

#[inline]
pub fn bit(pos: u8) -> u64 {
    debug_assert!(pos < 64, "Cell index {pos} is outside of the board!");
    1u64 << pos
}

#[rustfmt::skip]
const POS_TO_STRING: [&str; 64] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

pub fn pos_to_str(pos: u8) -> &'static str {
    POS_TO_STRING[pos as usize]
}

pub fn str_to_pos(name: &str) -> Option<u8> {
    POS_TO_STRING
        .iter()
        .position(|&candidate| candidate.eq_ignore_ascii_case(name))
        .map(|pos| pos as u8)
}
