use hvadan_core::{LoadStatus, WidgetViewModel};

pub const NO_RESULTS: &str = "No results found";
pub const MISSING_PHRASE_NOTICE: &str = "This entry is missing location data (Column C).";

pub fn render_status(view: &WidgetViewModel) -> String {
    match &view.status {
        LoadStatus::Idle => "Not loaded".to_string(),
        LoadStatus::Loading => "Loading countries...".to_string(),
        LoadStatus::Ready => format!("{} countries", view.options.len()),
        LoadStatus::Failed(message) => message.clone(),
    }
}

/// One option per line, the selected one marked.
pub fn render_options(view: &WidgetViewModel) -> String {
    if view.no_results {
        return NO_RESULTS.to_string();
    }
    view.options
        .iter()
        .map(|option| {
            let marker = if view.selected_country.as_deref() == Some(option.as_str()) {
                "*"
            } else {
                " "
            };
            format!("{marker} {option}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_selection(view: &WidgetViewModel) -> String {
    let mut lines = Vec::new();
    if let Some(country) = &view.selected_country {
        lines.push(country.clone());
    }
    if view.missing_phrase {
        lines.push(MISSING_PHRASE_NOTICE.to_string());
    }
    lines.push(view.sentence.template_text());
    if view.languages.len() > 1 {
        let choices: Vec<String> = view
            .languages
            .iter()
            .map(|language| {
                if view.selected_language.as_deref() == Some(language.as_str()) {
                    format!("[{language}]")
                } else {
                    language.clone()
                }
            })
            .collect();
        lines.push(format!("Languages: {}", choices.join(", ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvadan_core::{parse_records, update, Msg, WidgetState};

    fn ready() -> WidgetState {
        let sheet = "h\nIceland,,Íslandi,,\"íslensku, ensku\"\nAtlantis\nJapan,,Japan,,japönsku\n";
        let (state, _) = update(WidgetState::new(), Msg::LoadRequested);
        let (state, _) = update(
            state,
            Msg::DataLoaded {
                request_id: 1,
                records: parse_records(sheet),
            },
        );
        state
    }

    #[test]
    fn options_mark_selection() {
        let (state, _) = update(ready(), Msg::CountrySelected("Japan".to_string()));
        assert_eq!(
            render_options(&state.view()),
            "  Atlantis\n  Iceland\n* Japan"
        );
        assert_eq!(render_status(&state.view()), "3 countries");
    }

    #[test]
    fn empty_search_result_has_placeholder() {
        let (state, _) = update(ready(), Msg::SearchChanged("qq".to_string()));
        assert_eq!(render_options(&state.view()), NO_RESULTS);
    }

    #[test]
    fn selection_shows_sentence_and_language_choices() {
        let (state, _) = update(ready(), Msg::CountrySelected("Iceland".to_string()));
        let (state, _) = update(state, Msg::LanguageSelected("ensku".to_string()));
        assert_eq!(
            render_selection(&state.view()),
            "Iceland\nÉg er frá Íslandi og ég tala ensku\nLanguages: íslensku, [ensku]"
        );
    }

    #[test]
    fn missing_phrase_shows_notice_and_placeholders() {
        let (state, _) = update(ready(), Msg::CountrySelected("Atlantis".to_string()));
        assert_eq!(
            render_selection(&state.view()),
            format!("Atlantis\n{MISSING_PHRASE_NOTICE}\nÉg er frá ___ og ég tala ___")
        );
    }
}
