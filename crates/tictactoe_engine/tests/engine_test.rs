//! Tests for the game engine through its public API.

use tictactoe_engine::{Cell, GameEngine, Mark, Phase, Position};

fn play_all(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        engine
            .apply_move(row, col)
            .expect("coordinates on the board")
            .expect("move accepted");
    }
}

fn assert_initial(engine: &GameEngine) {
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(engine.cell_mark(row, col), Ok(Cell::Empty));
        }
    }
    assert_eq!(engine.turn_mark(), Mark::X);
    assert_eq!(engine.current_phase(), Phase::InProgress);
    assert!(engine.is_fresh());
}

#[test]
fn test_row_win_after_fifth_move() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
    assert_eq!(engine.current_phase(), Phase::InProgress);

    let placement = engine.apply_move(0, 2).unwrap().unwrap();
    assert_eq!(placement.played.mark, Mark::X);
    assert_eq!(placement.played.position, Position::TopRight);
    assert_eq!(placement.phase, Phase::WonBy(Mark::X));
    assert_eq!(engine.current_phase(), Phase::WonBy(Mark::X));
}

#[test]
fn test_tie_after_ninth_move() {
    let mut engine = GameEngine::new();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    play_all(&mut engine, &moves[..8]);
    assert_eq!(engine.current_phase(), Phase::InProgress);

    play_all(&mut engine, &moves[8..]);
    assert_eq!(engine.current_phase(), Phase::Tied);
}

#[test]
fn test_last_cell_completing_line_is_win_not_tie() {
    // O O X
    // X O X
    // O X .   X at (2,2) completes column 2 and fills the board.
    let mut engine = GameEngine::new();
    play_all(
        &mut engine,
        &[(1, 0), (0, 0), (2, 1), (1, 1), (0, 2), (2, 0), (1, 2), (0, 1)],
    );
    assert_eq!(engine.current_phase(), Phase::InProgress);
    assert_eq!(engine.turn_mark(), Mark::X);

    play_all(&mut engine, &[(2, 2)]);
    assert_eq!(engine.board().occupied(), 9);
    assert_eq!(engine.current_phase(), Phase::WonBy(Mark::X));
}

#[test]
fn test_main_diagonal_win() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(engine.current_phase(), Phase::WonBy(Mark::X));
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(engine.current_phase(), Phase::WonBy(Mark::X));
}

#[test]
fn test_o_can_win() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(engine.current_phase(), Phase::WonBy(Mark::O));
}

#[test]
fn test_same_cell_twice_is_no_op() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(1, 1)]);
    let before = engine.clone();

    assert_eq!(engine.apply_move(1, 1), Ok(None));
    assert_eq!(engine, before);
    assert_eq!(engine.turn_mark(), Mark::O);
}

#[test]
fn test_moves_after_game_over_are_no_ops() {
    let mut won = GameEngine::new();
    play_all(&mut won, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let before = won.clone();
    for pos in Position::empty_positions(won.board()) {
        assert_eq!(won.play(pos), None);
    }
    assert_eq!(won, before);

    let mut tied = GameEngine::new();
    play_all(
        &mut tied,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    let before = tied.clone();
    assert_eq!(tied.apply_move(0, 0), Ok(None));
    assert_eq!(tied, before);
}

#[test]
fn test_turn_alternates_strictly() {
    let mut engine = GameEngine::new();
    let mut expected = Mark::X;
    for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1)] {
        assert_eq!(engine.turn_mark(), expected);
        let placement = engine.apply_move(row, col).unwrap().unwrap();
        assert_eq!(placement.played.mark, expected);
        expected = expected.opponent();
        assert_eq!(engine.turn_mark(), expected);
    }
}

#[test]
fn test_reset_from_every_phase() {
    let mut engine = GameEngine::new();
    engine.reset();
    assert_initial(&engine);

    play_all(&mut engine, &[(0, 0), (1, 1)]);
    engine.reset();
    assert_initial(&engine);

    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    engine.reset();
    engine.reset();
    assert_initial(&engine);

    play_all(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    engine.reset();
    assert_initial(&engine);
}

#[test]
fn test_history_records_accepted_moves_only() {
    let mut engine = GameEngine::new();
    engine.play(Position::Center);
    engine.play(Position::Center);
    engine.play(Position::TopLeft);

    let history: Vec<_> = engine
        .history()
        .iter()
        .map(|m| (m.mark, m.position))
        .collect();
    assert_eq!(
        history,
        vec![(Mark::X, Position::Center), (Mark::O, Position::TopLeft)]
    );
}
