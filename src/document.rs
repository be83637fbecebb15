use crate::{
    error::DocError,
    font::{to_winansi_bytes, FontFamily, FontStyle},
    info::Info,
    layout::{Page, WriterConfig},
    pagesize::PageSize,
    refs::{ObjectReferences, RefType},
};
use chrono::{Local, NaiveDateTime};
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Str};
use std::io::Write;
use std::time::Instant;

/// The finished, paginated document, ready to be written out as a PDF.
///
/// Fragments are placed with the standard fonts of [`Document::family`], which should
/// be the same family the pages were measured with during layout.
#[derive(Debug, Clone)]
pub struct Document {
    pub info: Option<Info>,
    pub page_size: PageSize,
    pub family: FontFamily,
    pub pages: Vec<Page>,
    /// Deflate page content streams (on by default)
    pub compress: bool,
}

impl Document {
    pub fn new(page_size: PageSize, family: FontFamily) -> Document {
        Document {
            info: None,
            page_size,
            family,
            pages: Vec::new(),
            compress: true,
        }
    }

    /// A document sized for pages laid out with `config`
    pub fn for_config(config: &WriterConfig, family: FontFamily) -> Document {
        Document::new(config.page_size, family)
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Append pages to the end of the document
    pub fn add_pages<I: IntoIterator<Item = Page>>(&mut self, pages: I) {
        self.pages.extend(pages);
    }

    /// Render the whole document to PDF bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocError> {
        if self.pages.is_empty() {
            return Err(DocError::NoPages);
        }

        let t0 = Instant::now();
        let (page_width, page_height) = self.page_size;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let styles = [FontStyle::Normal, FontStyle::Bold];
        for style in styles {
            let id = refs.gen(RefType::Font(style));
            writer
                .type1_font(id)
                .base_font(Name(self.family.font(style).base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let page_refs: Vec<_> = (0..self.pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        for (i, page) in self.pages.iter().enumerate() {
            let content_id = refs.gen(RefType::ContentForPage(i));

            let mut pdf_page = writer.page(page_refs[i]);
            pdf_page.media_box(Rect::new(0.0, 0.0, *page_width, *page_height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(content_id);
            {
                let mut resources = pdf_page.resources();
                let mut fonts = resources.fonts();
                for style in styles {
                    if let Some(font_id) = refs.get(RefType::Font(style)) {
                        fonts.pair(Name(font_resource_name(style)), font_id);
                    }
                }
            }
            drop(pdf_page);

            let raw = render_page(page, page_height);
            if self.compress {
                let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
                writer
                    .stream(content_id, &compressed)
                    .filter(Filter::FlateDecode);
            } else {
                writer.stream(content_id, &raw);
            }
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        let bytes = writer.finish();
        log::info!(
            "wrote {} page(s), {} bytes in {:.1}ms",
            self.pages.len(),
            bytes.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Ok(bytes)
    }

    /// Write the document as a PDF. The entire document is rendered in memory first.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), DocError> {
        let bytes = self.to_bytes()?;
        w.write_all(&bytes)?;
        Ok(())
    }
}

fn font_resource_name(style: FontStyle) -> &'static [u8] {
    match style {
        FontStyle::Normal => b"F0",
        FontStyle::Bold => b"F1",
    }
}

/// Turn a page's fragments into a content stream. Fragment y runs down from the top
/// of the page, PDF y runs up from the bottom.
fn render_page(page: &Page, page_height: crate::units::Pt) -> Vec<u8> {
    let mut content = Content::new();
    for fragment in page.fragments.iter() {
        let text = to_winansi_bytes(&fragment.text);
        let replaced = text.iter().filter(|&&b| b == b'?').count();
        if replaced > fragment.text.matches('?').count() {
            log::warn!(
                "page {}: {:?} has characters WinAnsi cannot encode, printing '?'",
                page.number,
                fragment.text
            );
        }

        content.begin_text();
        content.set_font(Name(font_resource_name(fragment.style)), *fragment.font_size);
        content.next_line(*fragment.x, *(page_height - fragment.y));
        content.show(Str(&text));
        content.end_text();
    }
    content.finish().to_vec()
}

/// File name for a generated document: `<kind>_<YYYYMMDD_HHmmss>.pdf`.
/// Anything other than ASCII letters, digits, `-` and `_` in `kind` becomes `_`.
pub fn suggested_filename(kind: &str, at: NaiveDateTime) -> String {
    let kind: String = kind
        .trim()
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => ch,
            _ => '_',
        })
        .collect();
    let kind = if kind.is_empty() {
        "document".to_string()
    } else {
        kind
    };
    format!("{kind}_{}.pdf", at.format("%Y%m%d_%H%M%S"))
}

/// [`suggested_filename`] stamped with the current local time
pub fn suggested_filename_now(kind: &str) -> String {
    suggested_filename(kind, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Fragment;
    use crate::units::Pt;
    use chrono::NaiveDate;

    fn page(number: usize, text: &str) -> Page {
        Page {
            number,
            fragments: vec![Fragment {
                text: text.to_string(),
                x: Pt(20.0),
                y: Pt(100.0),
                style: FontStyle::Normal,
                font_size: Pt(11.0),
            }],
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn no_pages_is_an_error() {
        let doc = Document::new((Pt(200.0), Pt(300.0)), FontFamily::Helvetica);
        assert!(matches!(doc.to_bytes(), Err(DocError::NoPages)));
    }

    #[test]
    fn flips_y_into_pdf_space() {
        let raw = render_page(&page(1, "Tenant"), Pt(300.0));
        assert!(contains(&raw, b"20 200 Td"));
        assert!(contains(&raw, b"(Tenant) Tj"));
        assert!(contains(&raw, b"/F0 11 Tf"));
    }

    #[test]
    fn writes_standard_fonts_and_pages() {
        let mut doc = Document::new((Pt(200.0), Pt(300.0)), FontFamily::Courier);
        doc.compress = false;
        doc.add_pages([page(1, "one"), page(2, "two")]);

        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Courier-Bold"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
        assert!(contains(&bytes, b"/Count 2"));
        assert!(contains(&bytes, b"(two) Tj"));
    }

    #[test]
    fn filename_uses_kind_and_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap();
        assert_eq!(
            suggested_filename("lease_agreement", at),
            "lease_agreement_20240307_090530.pdf"
        );
        assert_eq!(
            suggested_filename("Bill of Sale", at),
            "Bill_of_Sale_20240307_090530.pdf"
        );
        assert_eq!(suggested_filename("", at), "document_20240307_090530.pdf");
    }
}
