//! Hvadan core: CSV ingestion, country records and the pure widget state machine.
mod csv;
mod effect;
mod msg;
mod record;
mod sentence;
mod state;
mod update;
mod view_model;

pub use csv::{parse, Row};
pub use effect::Effect;
pub use msg::Msg;
pub use record::{
    country_names, extract, filter_options, find_record, parse_records, split_languages,
    CountryRecord,
};
pub use sentence::{SentenceView, SENTENCE_CONNECTOR, SENTENCE_LEAD, SLOT_PLACEHOLDER};
pub use state::{LoadStatus, RequestId, WidgetState, NO_DATA_MESSAGE};
pub use update::update;
pub use view_model::WidgetViewModel;
