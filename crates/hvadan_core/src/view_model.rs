use crate::{LoadStatus, SentenceView};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetViewModel {
    pub status: LoadStatus,
    /// Country options after applying the search term.
    pub options: Vec<String>,
    pub dropdown_open: bool,
    pub search: String,
    /// Dropdown is open but the search matches nothing.
    pub no_results: bool,
    pub selected_country: Option<String>,
    pub descriptive_phrase: String,
    /// A country is selected but the sheet has no phrase for it.
    pub missing_phrase: bool,
    pub languages: Vec<String>,
    pub selected_language: Option<String>,
    pub sentence: SentenceView,
}
