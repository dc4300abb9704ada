//! Property-Based Tests
//!
//! Generative coverage for the validator's acceptance rules and the
//! transition engine's invariants: accepted definitions are structurally
//! sound, and no sequence of execution attempts can leave an instance in
//! an unresolvable state or with a torn history.

use chrono::Utc;
use proptest::prelude::*;

use flowstate::error::WorkflowError;
use flowstate::models::{Action, State, WorkflowDefinition, WorkflowInstance};
use flowstate::state_machine::TransitionEngine;
use flowstate::validation::validate_definition;

/// Well-formed definitions: unique state/action ids, exactly one initial
/// state, every action endpoint referencing a real state.
fn arb_definition() -> impl Strategy<Value = WorkflowDefinition> {
    (1usize..6)
        .prop_flat_map(|state_count| {
            (
                Just(state_count),
                0..state_count,
                proptest::collection::vec(any::<bool>(), state_count),
                proptest::collection::vec(
                    (
                        0..state_count,
                        proptest::collection::vec(0..state_count, 1..4),
                        any::<bool>(),
                    ),
                    0..8,
                ),
            )
        })
        .prop_map(|(state_count, initial_idx, finals, raw_actions)| {
            let states: Vec<State> = (0..state_count)
                .map(|i| State {
                    id: format!("s{i}"),
                    name: format!("State {i}"),
                    is_initial: i == initial_idx,
                    is_final: finals[i],
                    enabled: true,
                    description: None,
                })
                .collect();

            let actions: Vec<Action> = raw_actions
                .into_iter()
                .enumerate()
                .map(|(i, (to, froms, enabled))| Action {
                    id: format!("a{i}"),
                    name: format!("Action {i}"),
                    enabled,
                    from_states: froms.into_iter().map(|f| format!("s{f}")).collect(),
                    to_state: format!("s{to}"),
                })
                .collect();

            WorkflowDefinition {
                id: "def-generated".to_string(),
                name: "Generated".to_string(),
                states,
                actions,
                created_at: Utc::now(),
            }
        })
}

proptest! {
    #[test]
    fn generated_definitions_always_validate(definition in arb_definition()) {
        prop_assert!(
            validate_definition(&definition.name, &definition.states, &definition.actions).is_ok()
        );
        prop_assert_eq!(definition.states.iter().filter(|s| s.is_initial).count(), 1);
    }

    #[test]
    fn duplicating_any_state_id_always_rejects(
        definition in arb_definition(),
        dup_index in any::<proptest::sample::Index>(),
    ) {
        let mut states = definition.states.clone();
        let duplicate = dup_index.get(&states).clone();
        states.push(duplicate);

        prop_assert!(
            matches!(
                validate_definition(&definition.name, &states, &definition.actions),
                Err(WorkflowError::InvalidDefinition { .. })
            ),
            "expected InvalidDefinition error"
        );
    }

    #[test]
    fn engine_preserves_instance_invariants(
        definition in arb_definition(),
        requested in proptest::collection::vec(0usize..10, 0..12),
    ) {
        let initial = definition.initial_state().unwrap().id.clone();
        let mut instance =
            WorkflowInstance::new("inst".to_string(), definition.id.clone(), initial);
        let engine = TransitionEngine::new();

        for idx in requested {
            let action_id = format!("a{idx}");
            let before_state = instance.current_state_id.clone();
            let before_len = instance.history.len();

            match engine.execute(&mut instance, &definition, &action_id) {
                Ok(entry) => {
                    prop_assert_eq!(&entry.from_state_id, &before_state);
                    prop_assert_eq!(instance.history.len(), before_len + 1);
                    prop_assert_eq!(&instance.current_state_id, &entry.to_state_id);
                }
                Err(_) => {
                    prop_assert_eq!(&instance.current_state_id, &before_state);
                    prop_assert_eq!(instance.history.len(), before_len);
                }
            }

            // The current state must always resolve within the definition
            prop_assert!(definition.find_state(&instance.current_state_id).is_some());
        }
    }
}
