use hvadan_core::SentenceView;

#[test]
fn place_only_sentence_omits_language_clause() {
    let sentence = SentenceView {
        place: Some("Íslandi".to_string()),
        language: None,
    };
    assert_eq!(sentence.text().as_deref(), Some("Ég er frá Íslandi"));
    assert_eq!(sentence.template_text(), "Ég er frá Íslandi og ég tala ___");
}

#[test]
fn full_sentence_fills_both_slots() {
    let sentence = SentenceView {
        place: Some("Póllandi".to_string()),
        language: Some("pólsku".to_string()),
    };
    assert_eq!(
        sentence.text().as_deref(),
        Some("Ég er frá Póllandi og ég tala pólsku")
    );
    assert_eq!(sentence.template_text(), sentence.text().unwrap());
}

#[test]
fn sentence_needs_a_place() {
    let sentence = SentenceView {
        place: None,
        language: Some("ensku".to_string()),
    };
    assert_eq!(sentence.text(), None);
}
