use hvadan_core::{update, Msg, WidgetState};

#[test]
fn update_is_noop() {
    let state = WidgetState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::Tick);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
