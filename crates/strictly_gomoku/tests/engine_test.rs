//! Integration tests for the engine: scenarios and seeded random play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_gomoku::rules::{has_run_anywhere, is_draw, is_winning_move};
use strictly_gomoku::{
    Action, Board, BoardSize, Cell, Engine, GameState, IllegalMove, Outcome, Player,
};

/// Plays uniformly random legal moves until the game ends.
fn random_game(engine: &mut Engine, rng: &mut StdRng) {
    engine.reset();
    while !engine.state().is_over() {
        let actions = engine.state().possible_actions();
        let action = actions[rng.random_range(0..actions.len())];
        engine.step(action).expect("Possible action is legal");
    }
}

fn boards() -> Vec<(BoardSize, usize)> {
    vec![
        (BoardSize::square(3), 3),
        (BoardSize::square(3), 2),
        (BoardSize::new(4, 7), 4),
        (BoardSize::new(6, 2), 3),
        (BoardSize::square(9), 5),
        (BoardSize::new(1, 8), 4),
    ]
}

#[test]
fn test_win_on_literal_board() {
    let board = Board::from_values(&[[0i8, 1, 0], [-1, -1, -1], [1, 0, 1]]).unwrap();
    assert!(is_winning_move(&board, 1, 2, 3));

    let board = Board::from_values(&[[0i8, 1, 0], [-1, 1, -1], [1, 0, 1]]).unwrap();
    assert!(!is_winning_move(&board, 1, 2, 3));
}

#[test]
fn test_full_game_vertical_win() {
    let mut engine = Engine::new(BoardSize::new(6, 4), 4).unwrap();
    let moves = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)];
    for (row, col) in moves {
        let state = engine.step(Action::new(row, col)).unwrap();
        assert!(!state.is_over());
    }

    let state = engine.step(Action::new(3, 0)).unwrap();
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::One)));
    assert_eq!(engine.history().len(), 8);
    assert!(engine.verify_history().is_ok());

    let err = engine.step(Action::new(3, 1)).unwrap_err();
    assert_eq!(err, IllegalMove::GameOver);
    assert_eq!(engine.history().len(), 8);
}

#[test]
fn test_run_of_win_len_minus_one_does_not_win_but_win_len_does() {
    let mut engine = Engine::square(7, 5).unwrap();
    for col in 0..4 {
        engine.step(Action::new(0, col)).unwrap();
        engine.step(Action::new(6, col)).unwrap();
    }
    assert!(!engine.state().is_over());

    let state = engine.step(Action::new(0, 4)).unwrap();
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::One)));
}

#[test]
fn test_copy_is_independent_of_history() {
    let mut engine = Engine::square(4, 3).unwrap();
    engine.step(Action::new(2, 2)).unwrap();

    let snapshot: GameState = engine.state().copy();
    engine.step(Action::new(0, 0)).unwrap();

    assert_eq!(snapshot.board().get(0, 0), Some(Cell::Empty));
    assert_eq!(snapshot.board().empty_count(), 15);
    assert_eq!(engine.history()[1], snapshot);
}

#[test]
fn test_empty_count_drops_by_one_per_move() {
    let mut rng = StdRng::seed_from_u64(7);
    for (size, win_len) in boards() {
        let mut engine = Engine::new(size, win_len).unwrap();
        for _ in 0..10 {
            random_game(&mut engine, &mut rng);
            for (k, state) in engine.history().iter().enumerate() {
                assert_eq!(state.board().empty_count(), size.cell_count() - k);
                assert_eq!(state.board().scan_empty_count(), size.cell_count() - k);
                assert_eq!(state.possible_actions().len(), size.cell_count() - k);
            }
        }
    }
}

#[test]
fn test_active_player_alternates() {
    let mut rng = StdRng::seed_from_u64(11);
    for (size, win_len) in boards() {
        let mut engine = Engine::new(size, win_len).unwrap();
        for _ in 0..10 {
            random_game(&mut engine, &mut rng);
            let history = engine.history();
            assert_eq!(history[0].active_player(), Player::One);
            for pair in history.windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                match after.winner() {
                    Some(Outcome::Winner(p)) => {
                        assert_eq!(p, before.active_player());
                        assert_eq!(after.active_player(), before.active_player());
                    }
                    _ => assert_ne!(after.active_player(), before.active_player()),
                }
            }
        }
    }
}

#[test]
fn test_outcome_matches_full_board_scan() {
    let mut rng = StdRng::seed_from_u64(42);
    for (size, win_len) in boards() {
        let mut engine = Engine::new(size, win_len).unwrap();
        for _ in 0..10 {
            random_game(&mut engine, &mut rng);
            let history = engine.history();
            let (last, running) = history.split_last().unwrap();

            for state in running {
                assert!(!state.is_over());
                assert!(!has_run_anywhere(state.board(), Player::One, win_len));
                assert!(!has_run_anywhere(state.board(), Player::Two, win_len));
            }

            match last.winner() {
                Some(Outcome::Winner(p)) => {
                    assert!(has_run_anywhere(last.board(), p, win_len));
                    assert!(!has_run_anywhere(last.board(), p.opponent(), win_len));
                }
                Some(Outcome::Draw) => assert!(is_draw(last.board(), win_len)),
                None => panic!("Random game ended without an outcome"),
            }
        }
    }
}

#[test]
fn test_marks_are_never_rewritten() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut engine = Engine::new(BoardSize::new(5, 6), 4).unwrap();
    for _ in 0..20 {
        random_game(&mut engine, &mut rng);
        assert!(engine.verify_history().is_ok());
        for pair in engine.history().windows(2) {
            for (old, new) in pair[0].board().cells().iter().zip(pair[1].board().cells()) {
                if !old.is_empty() {
                    assert_eq!(old, new);
                }
            }
        }
    }
}

#[test]
fn test_reset_after_random_games() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut engine = Engine::square(5, 3).unwrap();
    random_game(&mut engine, &mut rng);

    let state = engine.reset().clone();
    assert_eq!(state, GameState::new(BoardSize::square(5)));
    assert_eq!(engine.history().len(), 1);
}
