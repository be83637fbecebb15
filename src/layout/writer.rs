use crate::error::{ConfigError, DocError};
use crate::font::FontStyle;
use crate::layout::{wrap_text, Margins, TextMeasure};
use crate::pagesize::{self, PageSize};
use crate::units::{Mm, Pt};

/// One positioned piece of text on a page. `y` is the baseline, measured downwards
/// from the top edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub style: FontStyle,
    pub font_size: Pt,
}

/// A laid out page: its 1-based page number and its fragments in the order they
/// were written
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub fragments: Vec<Fragment>,
}

impl Page {
    pub fn new(number: usize) -> Page {
        Page {
            number,
            fragments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The text of every fragment on the page, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|f| f.text.as_str())
    }
}

/// A block of text to lay out: an optional bold heading followed by a body that
/// may contain paragraph breaks
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Section {
    pub title: Option<String>,
    pub body: String,
}

impl Section {
    pub fn new<T: ToString, B: ToString>(title: T, body: B) -> Section {
        Section {
            title: Some(title.to_string()),
            body: body.to_string(),
        }
    }

    pub fn untitled<B: ToString>(body: B) -> Section {
        Section {
            title: None,
            body: body.to_string(),
        }
    }
}

/// Page geometry and spacing for a render. Fixed for the lifetime of a
/// [`PaginatedTextWriter`] and checked when the writer is created.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Page width and height
    pub page_size: PageSize,
    /// `left`/`right` bound the text column, `top` is the cursor position after a
    /// page break and `bottom` is the page break threshold
    pub margins: Margins,
    /// Vertical advance per body line
    pub line_height: Pt,
    /// Vertical advance after a section heading
    pub title_advance: Pt,
    /// Extra vertical space after each section
    pub section_spacing: Pt,
    /// Where the cursor starts on the first page, usually below the document title
    pub first_line_y: Pt,
    /// Where the document title is placed
    pub title_y: Pt,
    pub body_font_size: Pt,
    pub heading_font_size: Pt,
}

impl WriterConfig {
    /// A configuration for the given page with 11pt body text on 14pt lines. The
    /// title sits on the top margin and the body starts two lines below it.
    pub fn new(page_size: PageSize, margins: Margins) -> WriterConfig {
        let line_height = Pt(14.0);
        WriterConfig {
            page_size,
            margins,
            line_height,
            title_advance: line_height,
            section_spacing: line_height,
            first_line_y: margins.top + line_height * 2.0,
            title_y: margins.top,
            body_font_size: Pt(11.0),
            heading_font_size: Pt(12.0),
        }
    }

    /// The layout the legal form documents are printed with: A4 paper, a 170mm
    /// column, the title at 20mm, the body from 35mm on 6mm lines, and a page break
    /// whenever a line would end below 280mm.
    pub fn legal_a4() -> WriterConfig {
        let line_height: Pt = Mm(6.0).into();
        WriterConfig {
            page_size: pagesize::A4,
            margins: Margins::trbl(Mm(20.0), Mm(20.0), Mm(17.0), Mm(20.0)),
            line_height,
            title_advance: line_height,
            section_spacing: line_height,
            first_line_y: Mm(35.0).into(),
            title_y: Mm(20.0).into(),
            body_font_size: Pt(11.0),
            heading_font_size: Pt(12.0),
        }
    }

    pub fn with_line_height<P: Into<Pt>>(self, line_height: P) -> WriterConfig {
        WriterConfig {
            line_height: line_height.into(),
            ..self
        }
    }

    pub fn with_title_advance<P: Into<Pt>>(self, title_advance: P) -> WriterConfig {
        WriterConfig {
            title_advance: title_advance.into(),
            ..self
        }
    }

    pub fn with_section_spacing<P: Into<Pt>>(self, section_spacing: P) -> WriterConfig {
        WriterConfig {
            section_spacing: section_spacing.into(),
            ..self
        }
    }

    pub fn with_first_line_y<P: Into<Pt>>(self, first_line_y: P) -> WriterConfig {
        WriterConfig {
            first_line_y: first_line_y.into(),
            ..self
        }
    }

    pub fn with_title_y<P: Into<Pt>>(self, title_y: P) -> WriterConfig {
        WriterConfig {
            title_y: title_y.into(),
            ..self
        }
    }

    pub fn with_font_sizes<B: Into<Pt>, H: Into<Pt>>(self, body: B, heading: H) -> WriterConfig {
        WriterConfig {
            body_font_size: body.into(),
            heading_font_size: heading.into(),
            ..self
        }
    }

    /// Width available for wrapped text
    pub fn column_width(&self) -> Pt {
        self.margins.column_width(self.page_size.0)
    }

    /// The lowest point a line may reach: `page_height - bottom`
    pub fn page_limit(&self) -> Pt {
        self.page_size.1 - self.margins.bottom
    }

    /// Check that every page can hold at least one line and that the cursor starts
    /// inside the writable band
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (page_width, page_height) = self.page_size;
        let named = [
            ("page width", page_width),
            ("page height", page_height),
            ("top margin", self.margins.top),
            ("right margin", self.margins.right),
            ("bottom threshold", self.margins.bottom),
            ("left margin", self.margins.left),
            ("line height", self.line_height),
            ("title advance", self.title_advance),
            ("section spacing", self.section_spacing),
            ("first line position", self.first_line_y),
            ("title position", self.title_y),
            ("body font size", self.body_font_size),
            ("heading font size", self.heading_font_size),
        ];
        if let Some(&(name, _)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite { name });
        }

        for (name, value) in [
            ("page width", page_width),
            ("page height", page_height),
            ("line height", self.line_height),
            ("title advance", self.title_advance),
            ("body font size", self.body_font_size),
            ("heading font size", self.heading_font_size),
        ] {
            if value <= Pt(0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("top margin", self.margins.top),
            ("right margin", self.margins.right),
            ("bottom threshold", self.margins.bottom),
            ("left margin", self.margins.left),
            ("section spacing", self.section_spacing),
        ] {
            if value < Pt(0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.margins.bottom >= page_height {
            return Err(ConfigError::ThresholdExceedsPage {
                threshold: self.margins.bottom,
                page_height,
            });
        }

        let column = self.column_width();
        if column <= Pt(0.0) {
            return Err(ConfigError::NoColumn(column));
        }

        let limit = self.page_limit();
        if self.margins.top + self.line_height > limit {
            return Err(ConfigError::LineDoesNotFit {
                start: self.margins.top,
                line_height: self.line_height,
                limit,
            });
        }

        if self.first_line_y < self.margins.top {
            return Err(ConfigError::AboveTopMargin {
                first_line_y: self.first_line_y,
                top: self.margins.top,
            });
        }
        if self.first_line_y + self.line_height > limit {
            return Err(ConfigError::LineDoesNotFit {
                start: self.first_line_y,
                line_height: self.line_height,
                limit,
            });
        }

        if self.title_y < self.margins.top || self.title_y > limit {
            return Err(ConfigError::TitleOutsideBand {
                title_y: self.title_y,
                top: self.margins.top,
                limit,
            });
        }

        Ok(())
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig::legal_a4()
    }
}

/// Lays out titles, sections and lines top to bottom, starting a new page whenever
/// the next line would run past the page limit.
///
/// A line is placed at the cursor only if `cursor + line_height <= page_height - bottom`;
/// otherwise a page is appended and the cursor reset to the top margin first. Pages
/// therefore only ever break between lines. Once created the writer cannot fail.
///
/// ```
/// use pdf_paginate::layout::{FixedAdvance, PaginatedTextWriter, WriterConfig};
/// use pdf_paginate::Pt;
///
/// let mut writer = PaginatedTextWriter::new(WriterConfig::legal_a4(), FixedAdvance(Pt(5.0)))
///     .expect("valid configuration");
/// writer.write_title("Bill of Sale", Pt(16.0), true, true);
/// writer.write_section("1. Parties", "The seller sells and the buyer buys.", None);
///
/// let pages = writer.finish();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].fragments.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PaginatedTextWriter<M> {
    config: WriterConfig,
    measure: M,
    pages: Vec<Page>,
    cursor_y: Pt,
}

impl<M: TextMeasure> PaginatedTextWriter<M> {
    /// Create a writer for a single render. Fails if the configuration cannot lay
    /// out a page safely.
    pub fn new(config: WriterConfig, measure: M) -> Result<Self, DocError> {
        config.validate()?;
        let cursor_y = config.first_line_y;
        Ok(PaginatedTextWriter {
            config,
            measure,
            pages: Vec::new(),
            cursor_y,
        })
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn column_width(&self) -> Pt {
        self.config.column_width()
    }

    /// Current vertical write position on the last page
    pub fn cursor_y(&self) -> Pt {
        self.cursor_y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Place a document title at the fixed title position on the current page. The
    /// cursor is not moved and no page break is considered. Meant to be called before
    /// the first section; a late title is still kept in top-to-bottom order.
    pub fn write_title(&mut self, text: &str, font_size: Pt, bold: bool, centered: bool) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let style = if bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        let x = if centered {
            let width = self.measure.width_of(text, style, font_size);
            ((self.config.page_size.0 - width) / 2.0).max(Pt(0.0))
        } else {
            self.config.margins.left
        };
        let y = self.config.title_y;

        let page = self.current_page();
        let at = page.fragments.partition_point(|f| f.y <= y);
        if at < page.fragments.len() {
            log::warn!("title {text:?} written after body text on page {}", page.number);
        }
        page.fragments.insert(
            at,
            Fragment {
                text: text.to_string(),
                x,
                y,
                style,
                font_size,
            },
        );
    }

    /// Write a bold heading (if `title` is not blank) followed by the body wrapped to
    /// `body_max_width`, or the column width when `None`.
    pub fn write_section(&mut self, title: &str, body: &str, body_max_width: Option<Pt>) {
        let title = title.trim();
        let mut wrote_anything = false;

        if !title.is_empty() {
            let size = self.config.heading_font_size;
            self.place_line(title, FontStyle::Bold, size);
            self.cursor_y += self.config.title_advance;
            wrote_anything = true;
        }

        let max_width = body_max_width.unwrap_or_else(|| self.config.column_width());
        let size = self.config.body_font_size;
        let lines = wrap_text(body, &self.measure, FontStyle::Normal, size, max_width);
        log::trace!(
            "section {:?}: {} line(s) from y={} on page {}",
            title,
            lines.len(),
            self.cursor_y,
            self.pages.len().max(1)
        );

        for line in lines.iter() {
            self.place_line(line, FontStyle::Normal, size);
            self.cursor_y += self.config.line_height;
            wrote_anything = true;
        }

        if wrote_anything {
            self.cursor_y += self.config.section_spacing;
        }
    }

    /// Write sections in order
    pub fn write_sections<'a, I>(&mut self, sections: I)
    where
        I: IntoIterator<Item = &'a Section>,
    {
        for section in sections {
            let title = section.title.as_deref().unwrap_or_default();
            self.write_section(title, &section.body, None);
        }
    }

    /// Write a single unwrapped line at the cursor in the body font size
    pub fn write_line(&mut self, text: &str, style: FontStyle) {
        let size = self.config.body_font_size;
        self.place_line(text, style, size);
        self.cursor_y += self.config.line_height;
    }

    /// The pages laid out so far. Does not change the writer, so it may be called
    /// at any point of a render.
    pub fn finish(&self) -> Vec<Page> {
        self.pages.clone()
    }

    /// Consume the writer, returning its pages
    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    fn current_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::new(1));
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn break_page(&mut self) {
        let number = self.pages.len() + 1;
        log::debug!(
            "page break at y={} (limit {}), continuing on page {}",
            self.cursor_y,
            self.config.page_limit(),
            number
        );
        self.pages.push(Page::new(number));
        self.cursor_y = self.config.margins.top;
    }

    /// Make sure a line fits below the cursor, then place `text` there. Empty text
    /// still claims the line but leaves no fragment.
    fn place_line(&mut self, text: &str, style: FontStyle, font_size: Pt) {
        if self.cursor_y + self.config.line_height > self.config.page_limit() {
            self.break_page();
        }

        let x = self.config.margins.left;
        let y = self.cursor_y;
        let page = self.current_page();
        if !text.is_empty() {
            page.fragments.push(Fragment {
                text: text.to_string(),
                x,
                y,
                style,
                font_size,
            });
        }
    }
}
