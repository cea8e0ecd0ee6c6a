//! End-to-end game scenarios.
//!
//! These drive the public engine API through whole turns and check the
//! board, hands and scores the way a controller would see them.

use pawns_board::{
    Card, Cell, ChainedStrategy, ControlBoard, FillFirst, GameEngine, GameError, GameResult,
    InfluenceMask, MaximizeRowScore, MinMax, Player, Position, ReadonlyGame, Strategy,
};

fn card(name: &str, cost: u8, value: u32, offsets: &[(i32, i32)]) -> Card {
    Card::new(name, cost, value, InfluenceMask::from_offsets(offsets).unwrap()).unwrap()
}

/// `n` distinct cost-1 cards influencing the cell to the mover's right.
fn deck(prefix: &str, n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| card(&format!("{prefix}{i}"), 1, 1, &[(0, 1)]))
        .collect()
}

fn all_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(FillFirst),
        Box::new(MaximizeRowScore),
        Box::new(ControlBoard),
        Box::new(MinMax),
        Box::new(ChainedStrategy::new(vec![Box::new(FillFirst), Box::new(MinMax)]).unwrap()),
    ]
}

/// 1x3 board: the opening layout and a first placement.
#[test]
fn test_single_row_opening() {
    let mut engine = GameEngine::seeded(5);
    engine
        .init_game(1, 3, &deck("r", 3), &deck("b", 3), 1)
        .unwrap();
    engine.start_game().unwrap();

    assert_eq!(
        engine.cell(0, 0),
        Some(&Cell::Pawns { owner: Player::Red, count: 1 })
    );
    assert_eq!(engine.cell(0, 1), Some(&Cell::Empty));
    assert_eq!(
        engine.cell(0, 2),
        Some(&Cell::Pawns { owner: Player::Blue, count: 1 })
    );
    assert_eq!(engine.hand(Player::Red).len(), 1);
    assert_eq!(engine.hand(Player::Blue).len(), 1);

    let played = engine.hand(Player::Red)[0].clone();
    engine.place_card(0, 0, 0).unwrap();

    assert_eq!(
        engine.cell(0, 0),
        Some(&Cell::Card { owner: Player::Red, card: played.clone() })
    );
    assert_eq!(
        engine.cell(0, 1),
        Some(&Cell::Pawns { owner: Player::Red, count: 1 })
    );
    assert_eq!(engine.row_score(Player::Red, 0), played.value_score());
    assert_eq!(engine.current_player(), Player::Blue);
}

/// Blue's right-pointing mask lands on the cell to Blue's left.
#[test]
fn test_blue_mask_is_mirrored() {
    let mut engine = GameEngine::seeded(5);
    engine
        .init_game(1, 3, &deck("r", 3), &deck("b", 3), 1)
        .unwrap();
    engine.start_game().unwrap();
    engine.pass_turn().unwrap();

    engine.place_card(0, 0, 2).unwrap();
    assert_eq!(
        engine.cell(0, 1),
        Some(&Cell::Pawns { owner: Player::Blue, count: 1 })
    );
}

/// Influence on an enemy stack converts it without changing the count.
#[test]
fn test_capture_keeps_count() {
    let red = vec![
        card("push", 1, 1, &[(0, 1)]),
        card("r1", 1, 1, &[]),
        card("r2", 1, 1, &[]),
    ];
    let blue = vec![
        card("left", 1, 1, &[(0, 1)]),
        card("b1", 1, 1, &[]),
        card("b2", 1, 1, &[]),
    ];

    // Keep dealing until RED holds "push" and BLUE holds "left".
    let mut engine = (0..200u64)
        .map(|seed| {
            let mut engine = GameEngine::seeded(seed);
            engine.init_game(1, 3, &red, &blue, 1).unwrap();
            engine.start_game().unwrap();
            engine
        })
        .find(|e| {
            e.hand(Player::Red)[0].name() == "push" && e.hand(Player::Blue)[0].name() == "left"
        })
        .expect("some seed deals both influence cards");

    engine.pass_turn().unwrap();
    engine.place_card(0, 0, 2).unwrap();
    assert_eq!(
        engine.cell(0, 1),
        Some(&Cell::Pawns { owner: Player::Blue, count: 1 })
    );

    engine.place_card(0, 0, 0).unwrap();
    assert_eq!(
        engine.cell(0, 1),
        Some(&Cell::Pawns { owner: Player::Red, count: 1 })
    );
}

/// With nothing to play every strategy passes, and the game ends only on
/// back-to-back passes.
#[test]
fn test_empty_hands_and_consecutive_passes() {
    let position = Position::new(3, 5)
        .with_pawns(0, 0, Player::Red, 1)
        .with_pawns(0, 4, Player::Blue, 1);
    for strategy in all_strategies() {
        assert_eq!(
            strategy.choose_move(&position, Player::Red).unwrap(),
            None,
            "{} should pass",
            strategy.name()
        );
    }

    let mut engine = GameEngine::seeded(9);
    engine
        .init_game(3, 5, &deck("r", 15), &deck("b", 15), 2)
        .unwrap();
    engine.start_game().unwrap();

    engine.pass_turn().unwrap();
    assert!(!engine.is_game_over());
    engine.place_card(0, 0, 4).unwrap();
    assert!(!engine.is_game_over());
    engine.pass_turn().unwrap();
    assert!(!engine.is_game_over());
    engine.pass_turn().unwrap();
    assert!(engine.is_game_over());

    assert_eq!(engine.winner().unwrap(), GameResult::Winner(Player::Blue));
    assert!(matches!(engine.pass_turn(), Err(GameError::State(_))));
    assert!(matches!(engine.place_card(0, 0, 0), Err(GameError::State(_))));
}

#[test]
fn test_chain_matches_its_first_successful_link() {
    let mut engine = GameEngine::seeded(2);
    engine
        .init_game(3, 5, &deck("r", 15), &deck("b", 15), 3)
        .unwrap();
    engine.start_game().unwrap();

    let chain =
        ChainedStrategy::new(vec![Box::new(FillFirst), Box::new(MaximizeRowScore)]).unwrap();
    let expected = FillFirst.choose_move(&engine, Player::Red).unwrap();
    assert!(expected.is_some());
    assert_eq!(chain.choose_move(&engine, Player::Red).unwrap(), expected);
}

#[test]
fn test_strategy_moves_are_legal_throughout_a_game() {
    for strategy in all_strategies() {
        let mut engine = GameEngine::seeded(13);
        engine
            .init_game(3, 5, &deck("r", 15), &deck("b", 15), 3)
            .unwrap();
        engine.start_game().unwrap();

        while !engine.is_game_over() {
            let player = engine.current_player();
            match strategy.choose_move(&engine, player).unwrap() {
                Some(mv) => {
                    assert!(engine.is_legal_move(mv.card_index, mv.row, mv.col));
                    engine.place_card(mv.card_index, mv.row, mv.col).unwrap();
                }
                None => engine.pass_turn().unwrap(),
            }
        }
        assert!(engine.winner().is_ok(), "{} game should finish", strategy.name());
    }
}

/// A tied row scores for nobody.
#[test]
fn test_tied_row_scores_nothing() {
    let position = Position::new(2, 5)
        .with_card(0, 1, Player::Red, card("r", 1, 3, &[]))
        .with_card(0, 3, Player::Blue, card("b", 1, 3, &[]))
        .with_card(1, 1, Player::Red, card("r2", 1, 2, &[]));

    assert_eq!(position.row_score(Player::Red, 0), 3);
    assert_eq!(position.row_score(Player::Blue, 0), 3);
    assert_eq!(position.total_score(Player::Red), 2);
    assert_eq!(position.total_score(Player::Blue), 0);
}
