#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Widget mounted; load the data for the first time.
    LoadRequested,
    /// User clicked Retry on the error placeholder.
    RetryClicked,
    /// Loader finished with parsed records (possibly none).
    DataLoaded {
        request_id: crate::RequestId,
        records: Vec<crate::CountryRecord>,
    },
    /// Loader gave up.
    LoadFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// User clicked the country dropdown button.
    DropdownToggled,
    /// User typed into the dropdown search box.
    SearchChanged(String),
    /// Escape pressed or click outside the dropdown.
    DropdownDismissed,
    /// User picked a country option.
    CountrySelected(String),
    /// User picked a language from the inline selector.
    LanguageSelected(String),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
