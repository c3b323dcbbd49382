use std::env;
use std::time::Duration;

use anyhow::{bail, Context};
use log::info;
use othello_engine::core::algorithms::{EvaluationKind, MinimaxBot, RandomBot};
use othello_engine::{Agent, AgentConfig, Match, Player, Side};

fn usage() -> &'static str {
    "othello [--black KIND] [--white KIND] [--depth N] [--seed N] [--time-ms N]\n\
     KIND: negamax | naive | minimax | random"
}

struct Options {
    black: String,
    white: String,
    depth: u32,
    seed: Option<u64>,
    time_limit: Option<Duration>,
}

fn parse_options() -> anyhow::Result<Options> {
    let mut options = Options {
        black: "negamax".into(),
        white: "random".into(),
        depth: AgentConfig::default().depth,
        seed: None,
        time_limit: None,
    };
    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .with_context(|| format!("missing value for {flag}\n{}", usage()))
        };
        match flag.as_str() {
            "--black" => options.black = value()?,
            "--white" => options.white = value()?,
            "--depth" => options.depth = value()?.parse().context("depth must be a number")?,
            "--seed" => options.seed = Some(value()?.parse().context("seed must be a number")?),
            "--time-ms" => {
                let millis: u64 = value()?.parse().context("time must be a number")?;
                options.time_limit = Some(Duration::from_millis(millis));
            }
            "--help" | "-h" => bail!("{}", usage()),
            other => bail!("unknown argument `{other}`\n{}", usage()),
        }
    }
    Ok(options)
}

fn make_player(kind: &str, side: Side, options: &Options) -> anyhow::Result<Box<dyn Player>> {
    let config = AgentConfig {
        depth: options.depth,
        ..Default::default()
    };
    let player: Box<dyn Player> = match kind {
        "negamax" => Box::new(Agent::with_config(side, config)),
        "naive" => Box::new(Agent::with_config(
            side,
            AgentConfig {
                evaluation: EvaluationKind::Naive,
                ..config
            },
        )),
        "minimax" => Box::new(Agent::with_algorithm(
            side,
            MinimaxBot::new(options.depth, EvaluationKind::Naive.function()),
        )),
        "random" => {
            let bot = match options.seed {
                Some(seed) => RandomBot::seeded(seed.wrapping_add(side as u64)),
                None => RandomBot::new(),
            };
            Box::new(Agent::with_algorithm(side, bot))
        }
        other => bail!("unknown player kind `{other}`\n{}", usage()),
    };
    Ok(player)
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = parse_options()?;
    info!(
        "{} (Black) vs {} (White), depth {}",
        options.black, options.white, options.depth
    );
    let black = make_player(&options.black, Side::Black, &options)?;
    let white = make_player(&options.white, Side::White, &options)?;
    let mut game = Match::new(black, white);
    if let Some(limit) = options.time_limit {
        game = game.with_time_limit(limit);
    }
    let result = game.play();
    println!("{}", game.board());
    println!(
        "Black {} - White {} after {} turns ({:?})",
        result.black, result.white, result.turns, result.end
    );
    match result.winner() {
        Some(side) => println!("{side} wins"),
        None => println!("Draw"),
    }
    Ok(())
}
