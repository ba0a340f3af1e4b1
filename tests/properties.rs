//! Property tests over positions reached by random legal play.

use proptest::prelude::*;

use othello_engine::board::{Board, Color, Point, Square};
use othello_engine::game::Game;
use othello_engine::mcts::MctsStrategy;
use othello_engine::player::Player;
use othello_engine::rules::{has_legal_move, is_terminal, legal_moves};
use othello_engine::strategy::Strategy as _;

/// Play up to `choices.len()` moves from the opening, each picked by index
/// from the legal moves of the side to act. Stops early if the game ends.
fn play_out(choices: &[usize]) -> Game {
    let mut game = Game::new(Color::Black, Color::White).expect("distinct colors");
    for &choice in choices {
        if game.is_over() {
            break;
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let Some(&dest) = moves.keys().nth(choice % moves.len()) else {
            break;
        };
        game.play(dest).expect("chosen from the legal set");
    }
    game
}

fn choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..64, 0..60)
}

/// Squares strictly between `a` and `b`, or `None` if they do not share a line.
fn between(a: Point, b: Point) -> Option<Vec<Point>> {
    let dx = b.0 as isize - a.0 as isize;
    let dy = b.1 as isize - a.1 as isize;
    if (dx == 0 && dy == 0) || !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
        return None;
    }
    let steps = dx.abs().max(dy.abs());
    let (sx, sy) = (dx.signum(), dy.signum());
    Some(
        (1..steps)
            .map(|i| ((a.0 as isize + sx * i) as usize, (a.1 as isize + sy * i) as usize))
            .collect(),
    )
}

fn assert_moves_sound(board: &Board, color: Color) -> Result<(), TestCaseError> {
    for (dest, origins) in legal_moves(board, color) {
        prop_assert_eq!(board.get(dest), Some(Square::Empty));
        prop_assert!(!origins.is_empty());
        for origin in origins {
            prop_assert!(board.get(origin).is_some_and(|sq| sq.is_owned_by(color)));
            let path = between(origin, dest);
            prop_assert!(path.is_some(), "{:?} not aligned with {:?}", origin, dest);
            let path = path.unwrap_or_default();
            prop_assert!(!path.is_empty(), "origin {:?} adjacent to {:?}", origin, dest);
            for pt in path {
                prop_assert!(board.get(pt).is_some_and(|sq| sq.is_owned_by(color.opponent())));
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_legal_moves_are_sound(choices in choices()) {
        let game = play_out(&choices);
        assert_moves_sound(game.board(), Color::Black)?;
        assert_moves_sound(game.board(), Color::White)?;
    }

    #[test]
    fn prop_ownership_indexes_match_board(choices in choices()) {
        let game = play_out(&choices);
        for color in [Color::Black, Color::White] {
            let player = game.player(color);
            prop_assert_eq!(player.owned_count(), game.board().count(color));
            prop_assert!(player.is_consistent_with(game.board()));
        }
        let (black, white) = game.score();
        prop_assert_eq!(black + white + game.board().empty_count(), 64);
    }

    #[test]
    fn prop_terminal_iff_full_or_both_blocked(choices in choices()) {
        let game = play_out(&choices);
        let board = game.board();
        let blocked = !has_legal_move(board, Color::Black) && !has_legal_move(board, Color::White);
        prop_assert_eq!(is_terminal(board), board.is_full() || blocked);
    }

    #[test]
    fn prop_side_to_act_can_move_until_over(choices in choices()) {
        let game = play_out(&choices);
        if !game.is_over() {
            prop_assert!(!game.legal_moves().is_empty());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_mcts_move_is_legal(choices in choices(), seed in any::<u64>()) {
        let game = play_out(&choices);
        let color = game.turn();
        let board = game.board();
        let me = Player::from_board(color, board);
        let opp = Player::from_board(color.opponent(), board);

        let mut mcts = MctsStrategy::new(8, std::f64::consts::SQRT_2, Some(seed));
        let legal = legal_moves(board, color);
        match mcts.select_move(board, &me, &opp) {
            Some(mv) => {
                prop_assert_eq!(board.get(mv.dest), Some(Square::Empty));
                prop_assert_eq!(legal.get(&mv.dest), Some(&mv.origins));
            }
            None => prop_assert!(legal.is_empty()),
        }
    }
}
