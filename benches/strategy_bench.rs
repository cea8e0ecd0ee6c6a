use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pawns_board::{
    parse_deck, run_match, Card, FillFirst, GameEngine, ReadonlyGame, Strategy, StrategyKind,
};

const DECK: &str = include_str!("../decks/red_deck.txt");

fn midgame() -> GameEngine {
    let deck: Vec<Card> = parse_deck(DECK).unwrap();
    let mut engine = GameEngine::seeded(42);
    engine.init_game(5, 7, &deck, &deck, 3).unwrap();
    engine.start_game().unwrap();

    // A few opening placements so both sides have options
    for _ in 0..6 {
        let player = engine.current_player();
        match FillFirst.choose_move(&engine, player).unwrap() {
            Some(mv) => engine.place_card(mv.card_index, mv.row, mv.col).unwrap(),
            None => engine.pass_turn().unwrap(),
        }
    }
    engine
}

fn bench_strategies(c: &mut Criterion) {
    let engine = midgame();
    let player = engine.current_player();

    for kind in StrategyKind::ALL {
        let strategy = kind.build();
        c.bench_function(&format!("choose_move_{}", kind.name()), |b| {
            b.iter(|| strategy.choose_move(black_box(&engine), black_box(player)))
        });
    }
}

fn bench_copy(c: &mut Criterion) {
    let engine = midgame();
    c.bench_function("engine_copy", |b| b.iter(|| black_box(&engine).copy()));
}

fn bench_full_match(c: &mut Criterion) {
    let deck: Vec<Card> = parse_deck(DECK).unwrap();
    let red = StrategyKind::Chained.build();
    let blue = StrategyKind::Minmax.build();

    c.bench_function("full_match_chained_vs_minmax", |b| {
        b.iter(|| {
            let mut engine = GameEngine::seeded(7);
            engine.init_game(5, 7, &deck, &deck, 3).unwrap();
            engine.start_game().unwrap();
            run_match(&mut engine, red.as_ref(), blue.as_ref()).unwrap()
        })
    });
}

criterion_group!(benches, bench_strategies, bench_copy, bench_full_match);
criterion_main!(benches);
