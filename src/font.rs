use crate::layout::TextMeasure;
use crate::units::Pt;

/// Weight of a placed piece of text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
}

/// One of the PDF standard Type1 fonts. These are available in every PDF viewer
/// without being embedded, which keeps generated documents small.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

/// A regular/bold pair of standard fonts, used both to measure text during layout
/// and to select fonts when the document is exported.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

// advance widths in 1/1000 em for printable ASCII (0x20..=0x7E), from the Adobe AFM files
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// widths for WinAnsi 0x80..=0xFF; the unused codes 0x81, 0x8D, 0x8F, 0x90 and 0x9D hold
// the width of `?`
#[rustfmt::skip]
const HELVETICA_UPPER_WIDTHS: [u16; 128] = [
    556, 556, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
    556, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 556, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_UPPER_WIDTHS: [u16; 128] = [
    556, 611, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 611, 611, 611,
    611, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 611, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

const COURIER_WIDTH: u16 = 600;

impl StandardFont {
    /// The PostScript name the PDF refers to the font by
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Advance width of a single character in 1/1000 em, as it will be drawn: a
    /// character WinAnsi cannot encode is measured as the `?` that replaces it
    pub fn char_width(&self, ch: char) -> u16 {
        let (lower, upper) = match self {
            StandardFont::Helvetica => (&HELVETICA_WIDTHS, &HELVETICA_UPPER_WIDTHS),
            StandardFont::HelveticaBold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_UPPER_WIDTHS),
            StandardFont::Courier | StandardFont::CourierBold => return COURIER_WIDTH,
        };
        match winansi_byte(ch).unwrap_or(b'?') {
            code @ 0x80..=0xFF => upper[code as usize - 0x80],
            code @ 0x20..=0x7E => lower[code as usize - 0x20],
            _ => lower[(b'?' - 0x20) as usize],
        }
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }
}

impl FontFamily {
    /// The concrete font used for a given style
    pub fn font(&self, style: FontStyle) -> StandardFont {
        match (self, style) {
            (FontFamily::Helvetica, FontStyle::Normal) => StandardFont::Helvetica,
            (FontFamily::Helvetica, FontStyle::Bold) => StandardFont::HelveticaBold,
            (FontFamily::Courier, FontStyle::Normal) => StandardFont::Courier,
            (FontFamily::Courier, FontStyle::Bold) => StandardFont::CourierBold,
        }
    }
}

impl TextMeasure for FontFamily {
    fn width_of(&self, text: &str, style: FontStyle, size: Pt) -> Pt {
        self.font(style).width_of_text(text, size)
    }
}

/// The Windows-1252 code for a character, if it has one
pub(crate) fn winansi_byte(c: char) -> Option<u8> {
    let code = match c as u32 {
        0x0020..=0x007E | 0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes, the encoding the standard
/// fonts are written with. Characters with no WinAnsi code point become `?`.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars().map(|c| winansi_byte(c).unwrap_or(b'?')).collect()
}
