use hvadan_core::{parse_records, CountryRecord};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Csv,
    /// Prebuilt snapshot: an array of record objects.
    Json,
}

impl PayloadFormat {
    /// JSON when the server says so or the URL path ends in `.json`; CSV otherwise.
    pub fn detect(content_type: Option<&str>, url: &str) -> Self {
        let declared_json =
            content_type.is_some_and(|ct| media_type(ct).eq_ignore_ascii_case("application/json"));
        let path = url.split(['?', '#']).next().unwrap_or(url);
        if declared_json || path.to_ascii_lowercase().ends_with(".json") {
            PayloadFormat::Json
        } else {
            PayloadFormat::Csv
        }
    }

    /// Format of an HTTP response, or `None` when the declared media type is
    /// neither a sheet export nor a snapshot (an HTML sign-in page, say).
    ///
    /// A response without a content type is judged by its URL alone.
    pub fn for_response(content_type: Option<&str>, url: &str) -> Option<Self> {
        let Some(media_type) = content_type.map(media_type) else {
            return Some(Self::detect(None, url));
        };
        if media_type.eq_ignore_ascii_case("application/json") {
            return Some(PayloadFormat::Json);
        }
        SHEET_MEDIA_TYPES
            .iter()
            .any(|sheet| sheet.eq_ignore_ascii_case(media_type))
            .then(|| Self::detect(None, url))
    }
}

/// Media types a published sheet or a static snapshot file is served with.
/// Some spreadsheet exports arrive as opaque downloads.
const SHEET_MEDIA_TYPES: [&str; 3] = ["text/csv", "text/plain", "application/octet-stream"];

fn media_type(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or(content_type).trim()
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("malformed JSON snapshot: {0}")]
    Json(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRecord {
    #[serde(default)]
    country: String,
    #[serde(default, alias = "fromC")]
    descriptive_phrase: String,
    #[serde(default)]
    languages: Vec<String>,
}

/// Turn decoded text into records.
///
/// CSV never fails. JSON snapshots go through the same record invariants, so
/// entries without a country are dropped rather than rejected.
pub fn records_from_payload(
    text: &str,
    format: PayloadFormat,
) -> Result<Vec<CountryRecord>, PayloadError> {
    match format {
        PayloadFormat::Csv => Ok(parse_records(text)),
        PayloadFormat::Json => {
            let snapshot: Vec<SnapshotRecord> =
                serde_json::from_str(text).map_err(|err| PayloadError::Json(err.to_string()))?;
            Ok(snapshot
                .into_iter()
                .filter_map(|entry| {
                    CountryRecord::new(&entry.country, &entry.descriptive_phrase, entry.languages)
                })
                .collect())
        }
    }
}
