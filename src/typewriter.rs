//! Typewriter effect: types a phrase, holds it, deletes it, moves on.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
    pub gap_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            hold_delay: Duration::from_millis(2_000),
            gap_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Text to render now and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    phrase: usize,
    position: usize,
    phase: Phase,
}

impl Typewriter {
    /// Empty phrases are dropped; returns `None` when nothing is left to type.
    pub fn new<I, S>(phrases: I, timing: TypewriterTiming) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().chars().collect::<Vec<char>>())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            timing,
            phrase: 0,
            position: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn tick(&mut self) -> TypewriterFrame {
        let current = &self.phrases[self.phrase];

        match self.phase {
            Phase::Typing => {
                self.position += 1;
                let text: String = current[..self.position].iter().collect();

                let delay = if self.position == current.len() {
                    self.phase = Phase::Deleting;
                    self.timing.hold_delay
                } else {
                    self.timing.type_delay
                };

                TypewriterFrame { text, delay }
            }
            Phase::Deleting => {
                self.position -= 1;
                let text: String = current[..self.position].iter().collect();

                let delay = if self.position == 0 {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.timing.gap_delay
                } else {
                    self.timing.delete_delay
                };

                TypewriterFrame { text, delay }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PhraseSource {
    /// The attribute held a usable JSON array.
    Attribute(Vec<String>),
    /// The attribute was absent.
    Default,
    /// The attribute was present but unusable; the message says why.
    Invalid(String),
}

/// Interprets the `data-typewriter` attribute.
pub fn parse_phrases(attribute: Option<&str>) -> PhraseSource {
    let Some(raw) = attribute else {
        return PhraseSource::Default;
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(phrases) if phrases.iter().any(|phrase| !phrase.is_empty()) => {
            PhraseSource::Attribute(phrases)
        }
        Ok(_) => PhraseSource::Invalid("no non-empty phrases".to_string()),
        Err(err) => PhraseSource::Invalid(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn frame(text: &str, delay: u64) -> TypewriterFrame {
        TypewriterFrame {
            text: text.to_string(),
            delay: ms(delay),
        }
    }

    #[test]
    fn types_holds_deletes_and_wraps() {
        let mut writer =
            Typewriter::new(["ab", "c"], TypewriterTiming::default()).expect("phrases");

        let frames: Vec<TypewriterFrame> = (0..8).map(|_| writer.tick()).collect();
        assert_eq!(
            frames,
            vec![
                frame("a", 100),
                frame("ab", 2_000),
                frame("a", 50),
                frame("", 500),
                frame("c", 2_000),
                frame("", 500),
                frame("a", 100),
                frame("ab", 2_000),
            ]
        );
        assert_eq!(writer.phrase_index(), 0);
    }

    #[test]
    fn multibyte_phrases_advance_by_character() {
        let mut writer = Typewriter::new(["héllo"], TypewriterTiming::default()).expect("phrases");
        assert_eq!(writer.tick().text, "h");
        assert_eq!(writer.tick().text, "hé");
        assert_eq!(writer.tick().text, "hél");
    }

    #[test]
    fn empty_phrases_are_dropped() {
        assert!(Typewriter::new(Vec::<String>::new(), TypewriterTiming::default()).is_none());
        assert!(Typewriter::new([""], TypewriterTiming::default()).is_none());

        let mut writer =
            Typewriter::new(["", "x"], TypewriterTiming::default()).expect("phrases");
        assert_eq!(writer.tick(), frame("x", 2_000));
    }

    #[test]
    fn phrase_attribute_parsing() {
        assert_eq!(parse_phrases(None), PhraseSource::Default);
        assert_eq!(
            parse_phrases(Some(r#"["Rustacean", "Designer"]"#)),
            PhraseSource::Attribute(vec!["Rustacean".to_string(), "Designer".to_string()])
        );
        assert!(matches!(parse_phrases(Some("[1, 2]")), PhraseSource::Invalid(_)));
        assert!(matches!(parse_phrases(Some(r#"[""]"#)), PhraseSource::Invalid(_)));
        assert!(matches!(parse_phrases(Some("Developer")), PhraseSource::Invalid(_)));
    }
}
