use crate::font::FontStyle;
use crate::units::Pt;

/// Measures how wide a run of text is once placed on the page.
///
/// Widths must be additive: the width of `a + b` equals the width of `a` plus the
/// width of `b`. Word wrapping relies on this to measure lines incrementally.
pub trait TextMeasure {
    /// Width of `text` set in `style` at `size`
    fn width_of(&self, text: &str, style: FontStyle, size: Pt) -> Pt;
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn width_of(&self, text: &str, style: FontStyle, size: Pt) -> Pt {
        (**self).width_of(text, style, size)
    }
}

/// Measures text in character-layout units: every character is `advance` wide,
/// whatever its style or size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedAdvance(pub Pt);

impl TextMeasure for FixedAdvance {
    fn width_of(&self, text: &str, _style: FontStyle, _size: Pt) -> Pt {
        self.0 * text.chars().count() as f32
    }
}
