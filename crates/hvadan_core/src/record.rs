use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::csv::{parse, Row};

const COUNTRY_COLUMN: usize = 0;
const PHRASE_COLUMN: usize = 2;
const LANGUAGES_COLUMN: usize = 4;

/// A country with its descriptive phrase and the languages spoken there.
///
/// Constructed only through [`CountryRecord::new`], which enforces a
/// non-empty country and a trimmed, duplicate-free language list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    country: String,
    descriptive_phrase: String,
    languages: Vec<String>,
}

impl CountryRecord {
    /// Returns `None` when `country` is blank.
    pub fn new<I, S>(country: &str, descriptive_phrase: &str, languages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let country = country.trim();
        if country.is_empty() {
            return None;
        }
        Some(Self {
            country: country.to_owned(),
            descriptive_phrase: descriptive_phrase.trim().to_owned(),
            languages: dedupe_trimmed(languages),
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Empty when the spreadsheet has no phrase for this country.
    pub fn descriptive_phrase(&self) -> &str {
        &self.descriptive_phrase
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Language preselected when the country is chosen.
    pub fn default_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }
}

/// Turn parsed rows into records.
///
/// The first row is always treated as a header. Columns A, C and E hold the
/// country, the descriptive phrase and the language list; short rows read
/// missing columns as empty. Rows without a country are skipped and the
/// remaining records keep their row order.
pub fn extract(rows: &[Row]) -> Vec<CountryRecord> {
    rows.iter()
        .skip(1)
        .filter_map(|row| {
            CountryRecord::new(
                cell(row, COUNTRY_COLUMN),
                cell(row, PHRASE_COLUMN),
                split_languages(cell(row, LANGUAGES_COLUMN)),
            )
        })
        .collect()
}

/// `extract(&parse(text))`.
pub fn parse_records(text: &str) -> Vec<CountryRecord> {
    extract(&parse(text))
}

/// Split a raw language cell on `,` `;` `/` `|` and line breaks.
pub fn split_languages(raw: &str) -> Vec<String> {
    dedupe_trimmed(raw.split([',', ';', '/', '|', '\n', '\r']))
}

/// Exact, case-sensitive lookup by country name.
pub fn find_record<'a>(records: &'a [CountryRecord], country: &str) -> Option<&'a CountryRecord> {
    records.iter().find(|record| record.country == country)
}

/// Sorted, deduplicated country names for the dropdown.
pub fn country_names(records: &[CountryRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options containing `term`, ignoring case. A blank term keeps everything.
pub fn filter_options<'a>(options: &'a [String], term: &str) -> Vec<&'a str> {
    let needle = term.trim().to_lowercase();
    options
        .iter()
        .map(String::as_str)
        .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
        .collect()
}

fn cell(row: &Row, index: usize) -> &str {
    row.get(index).map(|value| value.trim()).unwrap_or("")
}

fn dedupe_trimmed<I, S>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for piece in pieces {
        let piece = piece.as_ref().trim();
        if !piece.is_empty() && seen.insert(piece.to_owned()) {
            out.push(piece.to_owned());
        }
    }
    out
}
