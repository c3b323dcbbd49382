use criterion::{black_box, criterion_group, criterion_main, Criterion};
use othello_engine::{
    core::algorithms::{Search, INF},
    core::evaluation::evaluate,
    utils::perft,
    Board, Move, NegamaxBot, Side,
};

const MIDGAME: &str = "
    . . . . . . . .
    . . . . . . . .
    . . w b b . . .
    . . w w b w . .
    . . b w w b . .
    . . . b w b . .
    . . . . w . . .
    . . . . . . . .
";

fn board_benchmark(c: &mut Criterion) {
    let midgame = Board::from_layout(MIDGAME).expect("benchmark layout is valid");
    c.bench_function("legal moves opening", |b| {
        b.iter(|| black_box(Board::new()).legal_moves(Side::Black))
    });
    c.bench_function("legal moves midgame", |b| {
        b.iter(|| black_box(midgame).legal_moves(Side::White))
    });
    c.bench_function("apply midgame", |b| {
        b.iter(|| {
            let mut board = black_box(midgame);
            board.apply(Some(Move::new(2, 5)), Side::White)
        })
    });
    c.bench_function("evaluate midgame", |b| {
        b.iter(|| evaluate(black_box(&midgame), Some(Move::new(2, 5)), Side::White))
    });
}

fn search_benchmark(c: &mut Criterion) {
    for depth in [1usize, 4, 5] {
        c.bench_function(&format!("perft {depth}"), |b| {
            b.iter(|| perft(black_box(&Board::new()), Side::Black, depth))
        });
    }
    c.bench_function("negamax depth 4", |b| {
        b.iter(|| NegamaxBot::default().decide(black_box(&Board::new()), Side::Black, 4))
    });
    c.bench_function("minimax depth 3", |b| {
        b.iter(|| {
            let mut search = Search::new(evaluate);
            search.minimax(black_box(&Board::new()), Some(Move::new(2, 3)), 3, Side::Black)
        })
    });
    c.bench_function("negamax window depth 3", |b| {
        b.iter(|| {
            let mut search = Search::new(evaluate);
            search.negamax(
                black_box(&Board::new()),
                Some(Move::new(2, 3)),
                3,
                Side::Black,
                -INF,
                INF,
            )
        })
    });
}

criterion_group!(benches, board_benchmark, search_benchmark);
criterion_main!(benches);
