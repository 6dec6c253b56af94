use crate::{Effect, Msg, WidgetState, NO_DATA_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WidgetState, msg: Msg) -> (WidgetState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested | Msg::RetryClicked => {
            if state.is_loading() {
                Vec::new()
            } else {
                let request_id = state.begin_request();
                vec![Effect::FetchData { request_id }]
            }
        }
        Msg::DataLoaded {
            request_id,
            records,
        } => {
            // Answers to superseded requests are dropped.
            if state.is_pending(request_id) {
                if records.is_empty() {
                    state.fail(NO_DATA_MESSAGE.to_string());
                } else {
                    state.replace_records(records);
                }
            }
            Vec::new()
        }
        Msg::LoadFailed {
            request_id,
            message,
        } => {
            if state.is_pending(request_id) {
                state.fail(message);
            }
            Vec::new()
        }
        Msg::DropdownToggled => {
            if state.is_ready() {
                let open = !state.dropdown_open();
                state.set_dropdown_open(open);
            }
            Vec::new()
        }
        Msg::SearchChanged(term) => {
            if state.is_ready() {
                state.set_search(term);
            }
            Vec::new()
        }
        Msg::DropdownDismissed => {
            state.set_dropdown_open(false);
            Vec::new()
        }
        Msg::CountrySelected(country) => {
            if state.is_ready() {
                state.select_country(country);
            }
            Vec::new()
        }
        Msg::LanguageSelected(language) => {
            if state.has_selection() {
                let language = Some(language.trim().to_owned()).filter(|l| !l.is_empty());
                state.select_language(language);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
