use std::env;

use anyhow::{bail, Context};
use othello_engine::{utils::perft_divide, Board, Side};

/// perft-debug <depth> <expected> [black|white] [layout]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("usage: {} <depth> <expected> [black|white] [layout]", args[0]);
    }
    let depth: usize = args[1].parse().context("depth must be a number")?;
    let expected: usize = args[2].parse().context("expected must be a number")?;
    let side = match args.get(3).map(String::as_str) {
        None | Some("black") => Side::Black,
        Some("white") => Side::White,
        Some(other) => bail!("unknown side `{other}`"),
    };
    let board = match args.get(4) {
        Some(layout) => Board::from_layout(layout).context("invalid layout")?,
        None => Board::new(),
    };
    let result = perft_divide(&board, side, depth);
    if result.all != expected {
        bail!("Found {} positions, expected {expected}", result.all);
    }
    Ok(())
}
