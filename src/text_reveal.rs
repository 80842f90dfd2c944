//! Character-by-character reveal for `.reveal-text` headings.

const NO_BREAK_SPACE: char = '\u{00A0}';

#[derive(Clone, Debug, PartialEq)]
pub struct RevealChar {
    pub text: char,
    pub delay_seconds: f64,
}

impl RevealChar {
    pub fn animation_delay(&self) -> String {
        let rounded = (self.delay_seconds * 1_000.0).round() / 1_000.0;
        format!("{rounded}s")
    }
}

/// One entry per character; spaces become no-break spaces so the inline
/// spans keep their width.
pub fn reveal_chars(text: &str, step_seconds: f64) -> Vec<RevealChar> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| RevealChar {
            text: if ch == ' ' { NO_BREAK_SPACE } else { ch },
            delay_seconds: index as f64 * step_seconds,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_no_break_spaces() {
        let chars = reveal_chars("Hi you", 0.05);
        assert_eq!(chars.len(), 6);
        assert_eq!(chars[2].text, NO_BREAK_SPACE);
        assert_eq!(chars[5].animation_delay(), "0.25s");
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(reveal_chars("", 0.05).is_empty());
    }
}
