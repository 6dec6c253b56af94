/// Fixed opening of the sentence ("I am from").
pub const SENTENCE_LEAD: &str = "Ég er frá";
/// Text between the place and the language ("and I speak").
pub const SENTENCE_CONNECTOR: &str = "og ég tala";
/// Shown by renderers in place of a missing slot.
pub const SLOT_PLACEHOLDER: &str = "___";

/// The two fillable slots of "Ég er frá {place} og ég tala {language}".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentenceView {
    pub place: Option<String>,
    pub language: Option<String>,
}

impl SentenceView {
    /// The explicitly selected language wins; otherwise a country with a
    /// single language fills the slot on its own.
    pub(crate) fn compose(phrase: &str, languages: &[String], selected: Option<&str>) -> Self {
        let place = Some(phrase.trim())
            .filter(|p| !p.is_empty())
            .map(ToOwned::to_owned);
        let language = selected
            .map(ToOwned::to_owned)
            .or_else(|| match languages {
                [only] => Some(only.clone()),
                _ => None,
            });
        Self { place, language }
    }

    /// Complete sentence, or `None` while the place is unknown.
    pub fn text(&self) -> Option<String> {
        let place = self.place.as_deref()?;
        Some(match self.language.as_deref() {
            Some(language) => format!("{SENTENCE_LEAD} {place} {SENTENCE_CONNECTOR} {language}"),
            None => format!("{SENTENCE_LEAD} {place}"),
        })
    }

    /// Sentence with placeholders for the empty slots, as the widget shows it.
    pub fn template_text(&self) -> String {
        format!(
            "{SENTENCE_LEAD} {} {SENTENCE_CONNECTOR} {}",
            self.place.as_deref().unwrap_or(SLOT_PLACEHOLDER),
            self.language.as_deref().unwrap_or(SLOT_PLACEHOLDER),
        )
    }
}
