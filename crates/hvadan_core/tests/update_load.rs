use std::sync::Once;

use hvadan_core::{
    parse_records, update, Effect, LoadStatus, Msg, WidgetState, NO_DATA_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hvadan_logging::initialize_for_tests);
}

const SHEET: &str = "Country,,Phrase,,Languages\n\
                     Iceland,,Íslandi,,\"íslensku, ensku\"\n\
                     France,,Frakklandi,,frönsku\n";

#[test]
fn load_requested_emits_fetch_and_marks_loading() {
    init_logging();
    let (state, effects) = update(WidgetState::new(), Msg::LoadRequested);

    assert_eq!(effects, vec![Effect::FetchData { request_id: 1 }]);
    assert_eq!(state.view().status, LoadStatus::Loading);
}

#[test]
fn duplicate_request_while_loading_is_ignored() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, effects) = update(state, Msg::RetryClicked);

    assert!(effects.is_empty());
    assert_eq!(state.request_id(), 1);
}

#[test]
fn data_loaded_fills_sorted_country_options() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, effects) = update(
        state,
        Msg::DataLoaded {
            request_id: 1,
            records: parse_records(SHEET),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.options, ["France", "Iceland"]);
    // Records themselves keep sheet order.
    assert_eq!(state.records()[0].country(), "Iceland");
}

#[test]
fn empty_result_becomes_no_data_failure() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 1,
            records: parse_records("Country,,Phrase,,Languages\n"),
        },
    );

    assert_eq!(
        state.view().status,
        LoadStatus::Failed(NO_DATA_MESSAGE.to_string())
    );
}

#[test]
fn failure_then_retry_issues_new_request() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::LoadFailed {
            request_id: 1,
            message: "network error".to_string(),
        },
    );
    assert_eq!(
        state.view().status,
        LoadStatus::Failed("network error".to_string())
    );

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(effects, vec![Effect::FetchData { request_id: 2 }]);
    assert_eq!(state.view().status, LoadStatus::Loading);
}

#[test]
fn stale_responses_are_ignored() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::LoadFailed {
            request_id: 1,
            message: "timeout".to_string(),
        },
    );
    let (state, _) = update(state, Msg::RetryClicked);

    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 1,
            records: parse_records(SHEET),
        },
    );
    assert_eq!(state.view().status, LoadStatus::Loading);
    assert!(state.records().is_empty());

    let (state, _) = update(
        state,
        Msg::LoadFailed {
            request_id: 7,
            message: "late".to_string(),
        },
    );
    assert_eq!(state.view().status, LoadStatus::Loading);
}

#[test]
fn refetch_replaces_records_and_keeps_surviving_selection() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 1,
            records: parse_records(SHEET),
        },
    );
    let (state, _) = update(state, Msg::CountrySelected("Iceland".to_string()));
    let (state, _) = update(state, Msg::LanguageSelected("ensku".to_string()));

    let (state, effects) = update(state, Msg::LoadRequested);
    assert_eq!(effects, vec![Effect::FetchData { request_id: 2 }]);

    let refreshed = "h\nIceland,,Íslandi,,\"íslensku; ensku; pólsku\"\nNorway,,Noregi,,norsku\n";
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 2,
            records: parse_records(refreshed),
        },
    );
    let view = state.view();
    assert_eq!(view.options, ["Iceland", "Norway"]);
    assert_eq!(view.selected_country.as_deref(), Some("Iceland"));
    assert_eq!(view.languages, ["íslensku", "ensku", "pólsku"]);
    assert_eq!(view.selected_language.as_deref(), Some("ensku"));
}

#[test]
fn refetch_falls_back_to_first_language_when_selection_is_dropped() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 1,
            records: parse_records("h\nMalta,,Möltu,,\"a, b\"\n"),
        },
    );
    let (state, _) = update(state, Msg::CountrySelected("Malta".to_string()));
    let (state, _) = update(state, Msg::LanguageSelected("b".to_string()));
    assert_eq!(state.view().selected_language.as_deref(), Some("b"));

    let (state, _) = update(state, Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 2,
            records: parse_records("h\nMalta,,Möltu,,\"c; a\"\n"),
        },
    );
    let view = state.view();
    assert_eq!(view.selected_country.as_deref(), Some("Malta"));
    assert_eq!(view.languages, ["c", "a"]);
    assert_eq!(view.selected_language.as_deref(), Some("c"));
}

#[test]
fn refetch_clears_selection_of_vanished_country() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 1,
            records: parse_records(SHEET),
        },
    );
    let (state, _) = update(state, Msg::CountrySelected("France".to_string()));
    let (state, _) = update(state, Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::DataLoaded {
            request_id: 2,
            records: parse_records("h\nIceland,,Íslandi,,íslensku\n"),
        },
    );

    let view = state.view();
    assert_eq!(view.selected_country, None);
    assert_eq!(view.selected_language, None);
    assert_eq!(view.sentence.text(), None);
}
