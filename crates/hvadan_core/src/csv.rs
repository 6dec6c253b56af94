use std::iter::Peekable;
use std::str::Chars;

/// One parsed CSV record: trimmed fields in source column order.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    Unquoted,
    InQuotes,
}

/// Parse a complete CSV payload into rows.
///
/// Permissive by design: never fails. Quoted fields may contain commas,
/// doubled quotes and line breaks; `\n`, `\r\n` and a lone `\r` all end a
/// row. Rows whose fields are all empty after trimming are dropped, and an
/// unterminated quote simply runs to the end of the input.
pub fn parse(text: &str) -> Vec<Row> {
    let mut tokenizer = Tokenizer::default();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        tokenizer.step(ch, &mut chars);
    }
    tokenizer.finish()
}

struct Tokenizer {
    quoting: Quoting,
    field: String,
    row: Row,
    rows: Vec<Row>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            quoting: Quoting::Unquoted,
            field: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl Tokenizer {
    fn step(&mut self, ch: char, rest: &mut Peekable<Chars<'_>>) {
        match (self.quoting, ch) {
            (Quoting::InQuotes, '"') if rest.peek() == Some(&'"') => {
                rest.next();
                self.field.push('"');
            }
            (Quoting::InQuotes, '"') => self.quoting = Quoting::Unquoted,
            (Quoting::Unquoted, '"') => self.quoting = Quoting::InQuotes,
            (Quoting::Unquoted, ',') => self.end_field(),
            (Quoting::Unquoted, '\n') => self.end_row(),
            (Quoting::Unquoted, '\r') => {
                if rest.peek() == Some(&'\n') {
                    rest.next();
                }
                self.end_row();
            }
            (_, other) => self.field.push(other),
        }
    }

    fn end_field(&mut self) {
        let value = self.field.trim().to_owned();
        self.field.clear();
        self.row.push(value);
    }

    fn end_row(&mut self) {
        self.end_field();
        let row = std::mem::take(&mut self.row);
        if row.iter().any(|field| !field.is_empty()) {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Vec<Row> {
        self.end_row();
        self.rows
    }
}
