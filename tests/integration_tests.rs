//! Integration tests for othello-engine
//!
//! These exercise the public API end to end: the opening position, the
//! three computer strategies, terminal detection and complete games.

use othello_engine::board::{Board, Color, Point, Square, parse_coord, str_coord};
use othello_engine::config::EngineConfig;
use othello_engine::constants::N;
use othello_engine::error::MoveError;
use othello_engine::game::{Game, Outcome};
use othello_engine::heuristic::HeuristicStrategy;
use othello_engine::mcts::{MctsStrategy, SearchTree, most_urgent};
use othello_engine::minimax::MinimaxStrategy;
use othello_engine::player::Player;
use othello_engine::rules::{apply_move, is_terminal, legal_moves};
use othello_engine::strategy::{Agent, Strategy, StrategyKind};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a board from coordinate strings for each color.
fn setpos(black: &[&str], white: &[&str]) -> Board {
    let mut board = Board::empty();
    for (stones, color) in [(black, Color::Black), (white, Color::White)] {
        for s in stones {
            let pt = parse_coord(s).expect("valid test coordinate");
            board.set(pt, Square::Owned(color));
        }
    }
    board
}

fn players(board: &Board, me: Color) -> (Player, Player) {
    (
        Player::from_board(me, board),
        Player::from_board(me.opponent(), board),
    )
}

fn small_config() -> EngineConfig {
    EngineConfig {
        iterations: 30,
        seed: Some(2024),
        ..EngineConfig::default()
    }
}

// =============================================================================
// Opening position
// =============================================================================

#[test]
fn test_opening_has_four_single_origin_moves() {
    let board = Board::new();
    let moves = legal_moves(&board, Color::Black);

    let dests: Vec<String> = moves.keys().map(|&pt| str_coord(pt)).collect();
    assert_eq!(dests, vec!["D3", "C4", "F5", "E6"]);
    for (dest, origins) in &moves {
        assert_eq!(origins.len(), 1, "{} should have one origin", str_coord(*dest));
        assert_eq!(board.get(*dest), Some(Square::Empty));
    }
}

#[test]
fn test_opening_is_symmetric_for_white() {
    let board = Board::new();
    let moves = legal_moves(&board, Color::White);
    let dests: Vec<Point> = moves.keys().copied().collect();
    assert_eq!(dests, vec![(2, 4), (3, 5), (4, 2), (5, 3)]);
}

// =============================================================================
// Strategies
// =============================================================================

#[test]
fn test_minimax_is_deterministic() {
    let board = setpos(&["D4", "E5", "F5", "F6"], &["E4", "D5", "C5"]);
    let (me, opp) = players(&board, Color::White);

    let first = MinimaxStrategy::new(3).select_move(&board, &me, &opp);
    for _ in 0..3 {
        let again = MinimaxStrategy::new(3).select_move(&board, &me, &opp);
        assert_eq!(again, first);
    }
    assert!(first.is_some());
}

#[test]
fn test_heuristic_evaluates_fewer_nodes_than_minimax() {
    let mut game = Game::new(Color::Black, Color::White).expect("distinct colors");
    game.play(parse_coord("D3").expect("coord")).expect("legal");
    game.play(parse_coord("C3").expect("coord")).expect("legal");

    for depth in [2, 3] {
        let (me, opp) = players(game.board(), game.turn());
        let mut heuristic = HeuristicStrategy::new(depth);
        let mut minimax = MinimaxStrategy::new(depth);
        heuristic.select_move(game.board(), &me, &opp);
        minimax.select_move(game.board(), &me, &opp);
        assert!(
            heuristic.nodes_evaluated() < minimax.nodes_evaluated(),
            "depth {depth}: heuristic {} vs minimax {}",
            heuristic.nodes_evaluated(),
            minimax.nodes_evaluated()
        );
    }
}

#[test]
fn test_mcts_move_is_legal_and_empty() {
    let board = setpos(&["D4", "E5", "F5", "F6"], &["E4", "D5", "C5"]);
    let (me, opp) = players(&board, Color::Black);
    let legal = legal_moves(&board, Color::Black);

    for seed in 0..5 {
        let mut mcts = MctsStrategy::new(40, std::f64::consts::SQRT_2, Some(seed));
        let mv = mcts.select_move(&board, &me, &opp).expect("black has moves");
        assert_eq!(board.get(mv.dest), Some(Square::Empty));
        assert_eq!(legal.get(&mv.dest), Some(&mv.origins));
    }
}

#[test]
fn test_mcts_prefers_unvisited_child() {
    let board = Board::new();
    let mut mcts = MctsStrategy::new(2, std::f64::consts::SQRT_2, Some(1));
    let (_, tree) = mcts.search(&board, Color::Black);

    // Two rounds visit two of the four children; the next pick is unvisited.
    assert_eq!(tree.root().v, 2);
    let pick = most_urgent(&tree, SearchTree::ROOT, std::f64::consts::SQRT_2);
    assert_eq!(tree.node(pick).v, 0);
}

#[test]
fn test_strategies_pass_without_moves() {
    let board = setpos(&["A1"], &["H8"]);
    let config = small_config();
    for kind in [StrategyKind::Minimax, StrategyKind::Heuristic, StrategyKind::Mcts] {
        let mut agent = Agent::new(kind, &config).expect("valid config");
        let (me, opp) = players(&board, Color::Black);
        assert_eq!(agent.select_move(&board, &me, &opp), None, "{kind}");
    }
}

// =============================================================================
// Terminal detection
// =============================================================================

#[test]
fn test_full_board_is_terminal() {
    let mut board = Board::empty();
    for x in 0..N {
        for y in 0..N {
            let color = if (x + y) % 3 == 0 { Color::White } else { Color::Black };
            board.set((x, y), Square::Owned(color));
        }
    }
    assert!(is_terminal(&board));
}

#[test]
fn test_blocked_board_with_empties_is_terminal() {
    let board = setpos(&["A1", "B1"], &["H8"]);
    assert!(board.empty_count() > 0);
    assert!(is_terminal(&board));
    assert!(!is_terminal(&Board::new()));
}

// =============================================================================
// Move application and the game driver
// =============================================================================

#[test]
fn test_apply_move_keeps_indexes_consistent() {
    let mut board = Board::new();
    let (mut black, mut white) = players(&board, Color::Black);
    let dest = parse_coord("D3").expect("coord");
    let origins = legal_moves(&board, Color::Black)
        .remove(&dest)
        .expect("opening move");

    apply_move(&mut board, &mut black, &mut white, dest, &origins);
    assert_eq!(black.owned_count(), board.count(Color::Black));
    assert_eq!(white.owned_count(), board.count(Color::White));
    assert!(black.is_consistent_with(&board));
    assert!(white.is_consistent_with(&board));
}

#[test]
fn test_invalid_move_rejected_without_change() {
    let mut game = Game::new(Color::Black, Color::White).expect("distinct colors");
    let before = game.board().clone();

    let a1 = parse_coord("A1").expect("coord");
    assert!(matches!(game.play(a1), Err(MoveError::NotLegal { .. })));
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.moves_played(), 0);
}

#[test]
fn test_full_games_between_strategies() {
    let config = small_config();
    let pairings = [
        (StrategyKind::Minimax, StrategyKind::Heuristic),
        (StrategyKind::Heuristic, StrategyKind::Mcts),
        (StrategyKind::Mcts, StrategyKind::Minimax),
    ];

    for (b, w) in pairings {
        let mut black = Agent::new(b, &config).expect("valid config");
        let mut white = Agent::new(w, &config).expect("valid config");
        let mut game = Game::new(Color::Black, Color::White).expect("distinct colors");

        while !game.is_over() {
            let agent = match game.turn() {
                Color::Black => &mut black,
                Color::White => &mut white,
            };
            let mv = game.step(agent).expect("strategies only choose legal moves");
            assert!(mv.is_some(), "{b} vs {w}: side to act offered no move");
            assert!(game.player(Color::Black).is_consistent_with(game.board()));
            assert!(game.player(Color::White).is_consistent_with(game.board()));
        }

        assert!(game.moves_played() <= N * N - 4);
        let (black_count, white_count) = game.score();
        assert_eq!(black_count, game.board().count(Color::Black));
        assert_eq!(white_count, game.board().count(Color::White));
        assert_ne!(game.outcome(), Outcome::InProgress);
    }
}

#[test]
fn test_agent_names_resolve() {
    let config = EngineConfig::default();
    assert_eq!(
        Agent::from_name("MCTS", &config).expect("known name").kind(),
        StrategyKind::Mcts
    );
    assert!(Agent::from_name("random", &config).is_err());
}
