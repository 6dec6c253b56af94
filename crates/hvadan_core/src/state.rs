use crate::record::{country_names, filter_options, find_record};
use crate::view_model::WidgetViewModel;
use crate::{CountryRecord, SentenceView};

pub type RequestId = u64;

/// Failure message when a load succeeds but yields no usable rows.
pub const NO_DATA_MESSAGE: &str = "No valid data found.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    status: LoadStatus,
    request_id: RequestId,
    records: Vec<CountryRecord>,
    countries: Vec<String>,
    dropdown_open: bool,
    search: String,
    selected_country: Option<String>,
    selected_language: Option<String>,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Id of the most recently issued fetch.
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn selected_record(&self) -> Option<&CountryRecord> {
        self.selected_country
            .as_deref()
            .and_then(|country| find_record(&self.records, country))
    }

    pub fn view(&self) -> WidgetViewModel {
        let options: Vec<String> = filter_options(&self.countries, &self.search)
            .into_iter()
            .map(ToOwned::to_owned)
            .collect();
        let record = self.selected_record();
        let phrase = record.map(CountryRecord::descriptive_phrase).unwrap_or("");
        let languages = record
            .map(|r| r.languages().to_vec())
            .unwrap_or_default();
        let sentence =
            SentenceView::compose(phrase, &languages, self.selected_language.as_deref());

        WidgetViewModel {
            status: self.status.clone(),
            no_results: self.dropdown_open && options.is_empty(),
            options,
            dropdown_open: self.dropdown_open,
            search: self.search.clone(),
            selected_country: self.selected_country.clone(),
            missing_phrase: self.selected_country.is_some() && phrase.is_empty(),
            descriptive_phrase: phrase.to_owned(),
            languages,
            selected_language: self.selected_language.clone(),
            sentence,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.request_id += 1;
        self.status = LoadStatus::Loading;
        self.dropdown_open = false;
        self.search.clear();
        self.request_id
    }

    pub(crate) fn is_pending(&self, request_id: RequestId) -> bool {
        self.is_loading() && request_id == self.request_id
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = LoadStatus::Failed(message);
    }

    /// Replace the whole record list and re-resolve the current selection.
    pub(crate) fn replace_records(&mut self, records: Vec<CountryRecord>) {
        self.countries = country_names(&records);
        self.records = records;
        self.status = LoadStatus::Ready;

        if let Some(country) = self.selected_country.take() {
            if find_record(&self.records, &country).is_some() {
                let language = self.selected_language.take();
                self.select_country(country);
                if let Some(language) = language {
                    let still_spoken = self
                        .selected_record()
                        .is_some_and(|r| r.languages().contains(&language));
                    if still_spoken {
                        self.selected_language = Some(language);
                    }
                }
            } else {
                self.selected_language = None;
            }
        }
    }

    /// Closing the dropdown also drops the search term.
    pub(crate) fn set_dropdown_open(&mut self, open: bool) {
        self.dropdown_open = open;
        if !open {
            self.search.clear();
        }
    }

    pub(crate) fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub(crate) fn set_search(&mut self, term: String) {
        self.search = term;
        self.dropdown_open = true;
    }

    pub(crate) fn select_country(&mut self, country: String) {
        self.selected_language = find_record(&self.records, &country)
            .and_then(CountryRecord::default_language)
            .map(ToOwned::to_owned);
        self.selected_country = Some(country);
        self.dropdown_open = false;
        self.search.clear();
    }

    pub(crate) fn has_selection(&self) -> bool {
        self.selected_country.is_some()
    }

    pub(crate) fn select_language(&mut self, language: Option<String>) {
        self.selected_language = language;
    }
}
