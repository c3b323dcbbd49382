pub mod algorithms;
pub mod definitions;
pub mod engine;
pub mod evaluation;
pub mod game;
pub mod utils;
