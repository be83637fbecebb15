//! Document templates as data.
//!
//! A [`DocumentTemplate`] is an ordered list of [`SectionTemplate`]s whose text
//! contains `{field}` placeholders. Filling it against a set of [`Answers`] produces
//! the [`Section`]s the writer lays out; any field left unanswered is replaced with an
//! underscore run so the printed form can be completed by hand.
//!
//! Placeholder syntax:
//!
//! * `{field}` is replaced by the answer, or by [`BLANK`] when there is none
//! * `{field:N}` uses a blank of `N` underscores instead
//! * `{{` and `}}` are literal braces
//!
//! ```
//! use pdf_paginate::template::{fill_placeholders, Answers};
//!
//! let mut answers = Answers::new();
//! answers.set("landlord", "Jane Doe");
//!
//! let text = fill_placeholders("{landlord} leases to {tenant:8}.", &answers).unwrap();
//! assert_eq!(text, "Jane Doe leases to ________.");
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::DocError;
use crate::layout::{Page, PaginatedTextWriter, Section, TextMeasure, WriterConfig};
use crate::units::Pt;

/// What an unanswered field prints as
pub const BLANK: &str = "________________";

/// The answers collected for one document, keyed by field name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Answers {
    values: BTreeMap<String, String>,
}

impl Answers {
    pub fn new() -> Answers {
        Answers::default()
    }

    /// Record an answer, replacing any previous one
    pub fn set<K: ToString, V: ToString>(&mut self, field: K, value: V) -> &mut Self {
        self.values.insert(field.to_string(), value.to_string());
        self
    }

    /// Record a date answer, written out as e.g. "March 7, 2024"
    pub fn set_date<K: ToString>(&mut self, field: K, date: NaiveDate) -> &mut Self {
        self.set(field, date.format("%B %-d, %Y"))
    }

    /// Record a monetary answer given in cents, written out as e.g. "$1,250.00"
    pub fn set_amount<K: ToString>(&mut self, field: K, cents: i64) -> &mut Self {
        self.set(field, format_currency(cents))
    }

    /// The answer for `field`, or `None` if it was never given or is blank
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (field, value) in iter {
            answers.set(field, value);
        }
        answers
    }
}

/// Format an amount of cents as dollars with thousands separators
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[derive(Debug, PartialEq)]
enum Piece {
    Literal(String),
    Field {
        name: String,
        blank_width: Option<usize>,
    },
}

fn template_error<S: ToString>(offset: usize, reason: S) -> DocError {
    DocError::Template {
        offset,
        reason: reason.to_string(),
    }
}

fn parse(template: &str) -> Result<Vec<Piece>, DocError> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().map(|&(_, c)| c) == Some('{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek().map(|&(_, c)| c) == Some('}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(template_error(offset, "unmatched `}`")),
            '{' => {
                let mut inner = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(template_error(offset, "nested `{` in placeholder")),
                        c => inner.push(c),
                    }
                }
                if !closed {
                    return Err(template_error(offset, "unterminated placeholder"));
                }

                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(parse_field(&inner, offset)?);
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

fn parse_field(inner: &str, offset: usize) -> Result<Piece, DocError> {
    let (name, blank_width) = match inner.split_once(':') {
        Some((name, width)) => {
            let width: usize = width
                .trim()
                .parse()
                .map_err(|_| template_error(offset, format!("invalid blank width {width:?}")))?;
            if width == 0 {
                return Err(template_error(offset, "blank width must be at least 1"));
            }
            (name.trim(), Some(width))
        }
        None => (inner.trim(), None),
    };

    if name.is_empty() {
        return Err(template_error(offset, "empty field name"));
    }

    Ok(Piece::Field {
        name: name.to_string(),
        blank_width,
    })
}

/// Substitute every placeholder in `template` from `answers`
pub fn fill_placeholders(template: &str, answers: &Answers) -> Result<String, DocError> {
    let mut out = String::with_capacity(template.len());
    for piece in parse(template)? {
        match piece {
            Piece::Literal(text) => out.push_str(&text),
            Piece::Field { name, blank_width } => match answers.get(&name) {
                Some(value) => out.push_str(value),
                None => match blank_width {
                    Some(width) => out.push_str(&"_".repeat(width)),
                    None => out.push_str(BLANK),
                },
            },
        }
    }
    Ok(out)
}

/// One titled (or untitled, if `title` is empty) block of a document template
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionTemplate {
    pub title: String,
    pub body: String,
}

impl SectionTemplate {
    pub fn new<T: ToString, B: ToString>(title: T, body: B) -> SectionTemplate {
        SectionTemplate {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    /// Fill this template into a [`Section`] ready for layout
    pub fn fill(&self, answers: &Answers) -> Result<Section, DocError> {
        let title = fill_placeholders(&self.title, answers)?;
        let body = fill_placeholders(&self.body, answers)?;
        Ok(Section {
            title: Some(title).filter(|t| !t.trim().is_empty()),
            body,
        })
    }
}

/// A complete legal document: its kind (used for file names), its title and its
/// sections in print order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocumentTemplate {
    pub kind: String,
    pub title: String,
    pub sections: Vec<SectionTemplate>,
}

impl DocumentTemplate {
    pub fn new<K: ToString, T: ToString>(kind: K, title: T) -> DocumentTemplate {
        DocumentTemplate {
            kind: kind.to_string(),
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    /// Append a section, returning the template for chaining
    pub fn section<T: ToString, B: ToString>(mut self, title: T, body: B) -> DocumentTemplate {
        self.sections.push(SectionTemplate::new(title, body));
        self
    }

    /// Every field referenced by the template, in order of first use
    pub fn fields(&self) -> Result<Vec<String>, DocError> {
        let mut fields: Vec<String> = Vec::new();
        let texts = std::iter::once(&self.title).chain(
            self.sections
                .iter()
                .flat_map(|section| [&section.title, &section.body]),
        );
        for text in texts {
            for piece in parse(text)? {
                if let Piece::Field { name, .. } = piece {
                    if !fields.contains(&name) {
                        fields.push(name);
                    }
                }
            }
        }
        Ok(fields)
    }

    /// The fields the template uses that have no answer yet
    pub fn missing_fields(&self, answers: &Answers) -> Result<Vec<String>, DocError> {
        Ok(self
            .fields()?
            .into_iter()
            .filter(|field| answers.get(field).is_none())
            .collect())
    }

    /// Fill every section from `answers`
    pub fn sections(&self, answers: &Answers) -> Result<Vec<Section>, DocError> {
        self.sections
            .iter()
            .map(|section| section.fill(answers))
            .collect()
    }

    /// Fill the template and lay it out: the title bold and centered at 4pt above the
    /// heading size, followed by every section in order
    pub fn render<M: TextMeasure>(
        &self,
        answers: &Answers,
        config: WriterConfig,
        measure: M,
    ) -> Result<Vec<Page>, DocError> {
        let title = fill_placeholders(&self.title, answers)?;
        let sections = self.sections(answers)?;

        let mut writer = PaginatedTextWriter::new(config, measure)?;
        let title_size = writer.config().heading_font_size + Pt(4.0);
        writer.write_title(&title, title_size, true, true);
        writer.write_sections(&sections);

        let pages = writer.into_pages();
        log::debug!(
            "rendered {} ({} sections) onto {} page(s)",
            self.kind,
            sections.len(),
            pages.len()
        );
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedAdvance;

    fn lease() -> DocumentTemplate {
        DocumentTemplate::new("lease_agreement", "LEASE AGREEMENT")
            .section(
                "1. Parties",
                "This lease is made between {landlord} (Landlord) and {tenant} (Tenant).",
            )
            .section("2. Rent", "Rent of {rent} is due on {due_date:10}.")
            .section("", "Signed by {landlord}.")
    }

    #[test]
    fn substitutes_answers_and_blanks() {
        let answers: Answers = [("landlord", "Jane Doe")].into_iter().collect();
        let sections = lease().sections(&answers).unwrap();
        assert_eq!(
            sections[0].body,
            "This lease is made between Jane Doe (Landlord) and ________________ (Tenant)."
        );
        assert_eq!(sections[1].body, "Rent of ________________ is due on __________.");
        assert_eq!(sections[2].title, None);
    }

    #[test]
    fn blank_answers_count_as_missing() {
        let mut answers = Answers::new();
        answers.set("tenant", "   ");
        assert_eq!(answers.get("tenant"), None);
        assert_eq!(
            fill_placeholders("{tenant}", &answers).unwrap(),
            BLANK.to_string()
        );
    }

    #[test]
    fn escaped_braces_are_literal() {
        let answers = Answers::new();
        assert_eq!(
            fill_placeholders("{{not a field}}", &answers).unwrap(),
            "{not a field}"
        );
    }

    #[test]
    fn malformed_placeholders_are_errors() {
        let answers = Answers::new();
        for (template, offset) in [
            ("abc {tenant", 4),
            ("{}", 0),
            ("x {rent:wide}", 2),
            ("{rent:0}", 0),
            ("a } b", 2),
            ("{a{b}}", 0),
        ] {
            match fill_placeholders(template, &answers) {
                Err(DocError::Template { offset: at, .. }) => assert_eq!(at, offset, "{template}"),
                other => panic!("expected template error for {template:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn formats_dates_and_amounts() {
        let mut answers = Answers::new();
        answers
            .set_date("start", NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
            .set_amount("rent", 125_000);
        assert_eq!(answers.get("start"), Some("March 7, 2024"));
        assert_eq!(answers.get("rent"), Some("$1,250.00"));
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(99_999), "$999.99");
        assert_eq!(format_currency(123_456_789), "$1,234,567.89");
        assert_eq!(format_currency(-250_000), "-$2,500.00");
    }

    #[test]
    fn lists_missing_fields_in_order() {
        let answers: Answers = [("tenant", "Sam Roe")].into_iter().collect();
        assert_eq!(
            lease().fields().unwrap(),
            vec!["landlord", "tenant", "rent", "due_date"]
        );
        assert_eq!(
            lease().missing_fields(&answers).unwrap(),
            vec!["landlord", "rent", "due_date"]
        );
    }

    #[test]
    fn renders_title_then_sections() {
        let answers = Answers::new();
        let pages = lease()
            .render(&answers, WriterConfig::legal_a4(), FixedAdvance(Pt(4.0)))
            .unwrap();
        assert_eq!(pages.len(), 1);
        let first = &pages[0].fragments[0];
        assert_eq!(first.text, "LEASE AGREEMENT");
        assert_eq!(first.font_size, Pt(16.0));
        assert_eq!(pages[0].fragments[1].text, "1. Parties");
    }
}
