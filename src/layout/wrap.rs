use crate::font::FontStyle;
use crate::layout::TextMeasure;
use crate::units::Pt;

/// Splits `text` into lines no wider than `max_width`, greedily.
///
/// Paragraph breaks (`\n`, `\r\n` or `\r`) always end a line, and an empty paragraph
/// becomes an empty line. Within a paragraph, whitespace-delimited words are packed
/// onto a line while the measured width (words joined by single spaces) stays at or
/// below `max_width`. A word wider than `max_width` is placed on its own line whole.
///
/// Leading and trailing blank paragraphs are dropped, so a body that is empty or only
/// whitespace wraps to no lines at all.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    text: &str,
    measure: &M,
    style: FontStyle,
    size: Pt,
    max_width: Pt,
) -> Vec<String> {
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.trim_matches(|ch: char| ch.is_whitespace());
    if text.is_empty() {
        return Vec::new();
    }

    let space_width = measure.width_of(" ", style, size);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = Pt(0.0);

        for word in paragraph.split_whitespace() {
            let word_width = measure.width_of(word, style, size);
            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            if line_width + space_width + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space_width + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedAdvance;

    fn wrap(text: &str, max: f32) -> Vec<String> {
        wrap_text(
            text,
            &FixedAdvance(Pt(1.0)),
            FontStyle::Normal,
            Pt(12.0),
            Pt(max),
        )
    }

    #[test]
    fn packs_words_greedily() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10.0),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        // "aaaa bbbbb" is exactly 10 wide
        assert_eq!(wrap("aaaa bbbbb c", 10.0), vec!["aaaa bbbbb", "c"]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let long = "x".repeat(300);
        let text = format!("a {long} b");
        assert_eq!(wrap(&text, 170.0), vec!["a".to_string(), long, "b".to_string()]);
    }

    #[test]
    fn paragraph_breaks_end_lines() {
        assert_eq!(
            wrap("first line\r\nsecond\rthird\n\nfifth", 40.0),
            vec!["first line", "second", "third", "", "fifth"]
        );
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap("  a \t  b   c  ", 40.0), vec!["a b c"]);
    }

    #[test]
    fn blank_body_has_no_lines() {
        assert!(wrap("", 40.0).is_empty());
        assert!(wrap(" \n\t\n ", 40.0).is_empty());
    }

    #[test]
    fn measures_with_the_given_style_and_size() {
        let measure = crate::font::FontFamily::Courier;
        // 6pt per char at 10pt
        let lines = wrap_text(
            "abcd efghi jk",
            &measure,
            FontStyle::Normal,
            Pt(10.0),
            Pt(61.0),
        );
        assert_eq!(lines, vec!["abcd efghi", "jk"]);
    }
}
