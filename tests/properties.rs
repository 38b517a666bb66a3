//! Property tests over random legal move histories.

use minimax_connect_four::ai::{AlignmentHeuristic, EvalCache, Heuristic, MinimaxSearch};
use minimax_connect_four::error::MoveError;
use minimax_connect_four::game::{GameState, Player, COLS, ROWS};
use proptest::prelude::*;

/// Turn arbitrary column picks into a legal history by redirecting picks that
/// land on a full column to one of the remaining legal columns.
fn legal_history(picks: &[usize]) -> Vec<GameState> {
    let mut states = vec![GameState::initial()];
    for &pick in picks {
        let current = states.last().expect("at least the initial state");
        let legal = current.legal_moves();
        if legal.is_empty() {
            break;
        }
        let column = if legal.contains(&pick) {
            pick
        } else {
            legal[pick % legal.len()]
        };
        let next = current.apply_move(column).expect("legal column");
        states.push(next);
    }
    states
}

fn picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..COLS, 0..60)
}

proptest! {
    #[test]
    fn occupancy_is_disjoint_and_complete(picks in picks()) {
        let state = legal_history(&picks).pop().unwrap();
        let occupancy = state.occupancy();
        let red = occupancy.grid(Player::Red);
        let yellow = occupancy.grid(Player::Yellow);

        for row in 0..ROWS {
            for col in 0..COLS {
                prop_assert!(red[row][col] + yellow[row][col] <= 1);
            }
        }
        prop_assert_eq!(
            occupancy.disc_count(Player::Red) + occupancy.disc_count(Player::Yellow),
            state.ply_count()
        );
        prop_assert_eq!(occupancy.disc_count(Player::Red), state.ply_count().div_ceil(2));
    }

    #[test]
    fn full_columns_are_never_legal(picks in picks()) {
        let state = legal_history(&picks).pop().unwrap();
        for col in 0..COLS {
            let full = state.column_height(col) == ROWS;
            prop_assert_eq!(state.legal_moves().contains(&col), !full);
            if full {
                prop_assert_eq!(
                    state.apply_move(col),
                    Err(MoveError::ColumnFull { column: col })
                );
            }
        }
    }

    #[test]
    fn has_win_is_monotonic(picks in picks()) {
        let states = legal_history(&picks);
        let mut seen_win = false;
        for state in &states {
            let win = state.has_win();
            prop_assert!(!seen_win || win, "win vanished at {}", state);
            seen_win |= win;
        }
    }

    #[test]
    fn evaluate_is_antisymmetric(picks in picks()) {
        let state = legal_history(&picks).pop().unwrap();
        let occupancy = state.occupancy();
        prop_assert_eq!(
            AlignmentHeuristic.evaluate(&occupancy.swapped()),
            -AlignmentHeuristic.evaluate(&occupancy)
        );
    }

    #[test]
    fn winning_line_belongs_to_winner(picks in picks()) {
        let state = legal_history(&picks).pop().unwrap();
        prop_assert_eq!(state.has_win(), state.winner().is_some());
        if let Some(line) = state.winning_line() {
            prop_assert_eq!(Some(line.player), state.winner());
            let occupancy = state.occupancy();
            for cell in line.cells() {
                prop_assert_eq!(occupancy.get(cell.row, cell.col), line.player.to_cell());
            }
        }
    }

    #[test]
    fn notation_roundtrips(picks in picks()) {
        let state = legal_history(&picks).pop().unwrap();
        let parsed: GameState = state.to_string().parse().unwrap();
        prop_assert_eq!(parsed, state);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn search_returns_a_legal_move_until_game_over(picks in picks()) {
        let state = legal_history(&picks).pop().unwrap();
        let search = MinimaxSearch::new(2);
        let mut cache = EvalCache::new();
        let chosen = search.best_move(&state, &mut cache);

        if state.is_game_over() {
            prop_assert_eq!(chosen, None);
        } else {
            let column = chosen.expect("undecided game has a move");
            prop_assert!(state.legal_moves().contains(&column));
        }
    }
}
