//! Property tests for the match reducer.

use chorus_lapilli::{
    MatchState, Phase, Player, RejectionPolicy, Selection, Transition, is_adjacent,
    legal_movements, legal_placements,
};
use proptest::prelude::*;

/// A click or a time-travel request, as a front-end would send them.
#[derive(Debug, Clone, Copy)]
enum Input {
    Click(usize),
    Jump(usize),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        9 => (0usize..11).prop_map(Input::Click),
        1 => (0usize..40).prop_map(Input::Jump),
    ]
}

fn apply(state: &MatchState, input: Input) -> MatchState {
    match input {
        Input::Click(cell) => state.apply_cell_action(cell),
        Input::Jump(step) => state.jump_to_step(step),
    }
}

/// Every state reached while feeding `inputs` from a fresh match.
fn trajectory(inputs: &[Input]) -> Vec<MatchState> {
    let mut states = vec![MatchState::new()];
    for input in inputs {
        let next = apply(states.last().expect("non-empty"), *input);
        states.push(next);
    }
    states
}

proptest! {
    #[test]
    fn prop_turn_parity(inputs in prop::collection::vec(input(), 0..120)) {
        for state in trajectory(&inputs) {
            prop_assert_eq!(state.x_is_next(), state.step_number() % 2 == 0);
            prop_assert_eq!(state.to_move() == Player::X, state.x_is_next());
            prop_assert!(state.step_number() < state.history().len());
        }
    }

    #[test]
    fn prop_invariants_hold(inputs in prop::collection::vec(input(), 0..120)) {
        for state in trajectory(&inputs) {
            prop_assert!(state.validate().is_ok(), "{:?}", state.validate());
        }
    }

    #[test]
    fn prop_commit_truncates_then_appends(
        inputs in prop::collection::vec(input(), 0..80),
        cell in 0usize..9,
    ) {
        let states = trajectory(&inputs);
        let before = states.last().expect("non-empty");
        if let Ok(transition) = before.resolve(cell) {
            let after = before.apply_cell_action(cell);
            if transition.commits() {
                prop_assert_eq!(after.step_number(), before.step_number() + 1);
                prop_assert_eq!(after.history().len(), before.step_number() + 2);
            } else {
                prop_assert_eq!(after.history(), before.history());
                prop_assert_eq!(after.step_number(), before.step_number());
            }
        }
    }

    #[test]
    fn prop_movement_conserves_pieces(inputs in prop::collection::vec(input(), 0..120)) {
        let states = trajectory(&inputs);
        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let committed = after.step_number() == before.step_number() + 1
                && after.history().len() == before.step_number() + 2;
            if committed && before.phase() == Phase::Movement {
                for player in [Player::X, Player::O] {
                    prop_assert_eq!(
                        before.current_board().count(player),
                        after.current_board().count(player)
                    );
                }
            }
        }
    }

    #[test]
    fn prop_rejections_follow_policy(
        inputs in prop::collection::vec(input(), 0..80),
        cell in 0usize..12,
    ) {
        let states = trajectory(&inputs);
        let before = states.last().expect("non-empty");
        if let Err(rejection) = before.resolve(cell) {
            let after = before.apply_cell_action(cell);
            prop_assert_eq!(after.history(), before.history());
            prop_assert_eq!(after.step_number(), before.step_number());
            prop_assert_eq!(after.x_is_next(), before.x_is_next());
            match rejection.policy() {
                RejectionPolicy::Silent => prop_assert_eq!(&after, before),
                RejectionPolicy::Reset => {
                    prop_assert_eq!(after.selection(), Selection::AwaitingFirstSelection);
                    prop_assert!(after.hint().is_some());
                }
            }
        }
    }

    #[test]
    fn prop_terminal_absorbs(
        inputs in prop::collection::vec(input(), 0..120),
        cell in 0usize..12,
    ) {
        let states = trajectory(&inputs);
        let state = states.last().expect("non-empty");
        if state.is_terminal() {
            prop_assert_eq!(&state.apply_cell_action(cell), state);
        }
    }

    #[test]
    fn prop_engine_agrees_with_legal_move_lists(inputs in prop::collection::vec(input(), 0..120)) {
        let states = trajectory(&inputs);
        let state = states.last().expect("non-empty");
        if state.is_terminal() {
            return Ok(());
        }
        let board = state.current_board();
        match (state.phase(), state.selection()) {
            (Phase::Placement, _) => {
                let legal = legal_placements(board);
                for cell in 0..9 {
                    let accepted = state.resolve(cell).is_ok();
                    let listed = legal.iter().any(|pos| pos.to_index() == cell);
                    prop_assert_eq!(accepted, listed);
                }
            }
            (Phase::Movement, Selection::AwaitingDestination { from }) => {
                let legal = legal_movements(board, state.to_move());
                for cell in 0..9 {
                    let accepted = matches!(state.resolve(cell), Ok(Transition::Moved { .. }));
                    let listed = legal
                        .iter()
                        .any(|m| m.from == from && m.to.to_index() == cell);
                    prop_assert_eq!(accepted, listed);
                }
            }
            (Phase::Movement, Selection::AwaitingFirstSelection) => {}
        }
    }

    #[test]
    fn prop_adjacency_symmetric(i in 0usize..12, j in 0usize..12) {
        prop_assert_eq!(is_adjacent(i, j), is_adjacent(j, i));
    }
}
