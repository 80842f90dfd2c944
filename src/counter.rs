//! Numeric counter animation for `.stat-number` elements.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate value to display; the animation continues.
    Step(String),
    /// Final text (the original literal); the interval must be cleared.
    Done(String),
}

impl CounterFrame {
    pub fn text(&self) -> &str {
        match self {
            Self::Step(text) | Self::Done(text) => text,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    literal: String,
    target: f64,
    increment: f64,
    current: f64,
    plus_suffix: bool,
    finished: bool,
}

impl CounterAnimation {
    /// Builds an animation for `literal`, or `None` when the text is not a
    /// count (anything but digits once `+` and `-` are removed).
    pub fn parse(literal: &str, steps: u32) -> Option<Self> {
        let stripped: String = literal.chars().filter(|c| *c != '+' && *c != '-').collect();
        if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let target: f64 = stripped.parse().ok()?;
        let steps = f64::from(steps.max(1));

        Some(Self {
            literal: literal.to_string(),
            target,
            increment: target / steps,
            current: 0.0,
            plus_suffix: literal.contains('+'),
            finished: false,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one interval tick. Returns `None` once the final frame has
    /// been emitted.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }

        self.current += self.increment;
        if self.current >= self.target {
            self.finished = true;
            return Some(CounterFrame::Done(self.literal.clone()));
        }

        let suffix = if self.plus_suffix { "+" } else { "" };
        Some(CounterFrame::Step(format!("{}{suffix}", self.current.floor())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(animation: &mut CounterAnimation) -> Vec<CounterFrame> {
        std::iter::from_fn(|| animation.tick()).collect()
    }

    fn leading_number(text: &str) -> u64 {
        text.trim_end_matches('+').parse().expect("numeric frame")
    }

    #[test]
    fn plus_suffixed_counter_ends_on_original_text() {
        let mut animation = CounterAnimation::parse("150+", 50).expect("numeric literal");
        let frames = run(&mut animation);

        assert_eq!(frames.len(), 50);
        assert_eq!(frames.last(), Some(&CounterFrame::Done("150+".to_string())));
        assert_eq!(frames[0], CounterFrame::Step("3+".to_string()));

        let values: Vec<u64> = frames.iter().map(|frame| leading_number(frame.text())).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(frames[..frames.len() - 1].iter().all(|frame| frame.text().ends_with('+')));
        assert!(animation.is_finished());
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn non_numeric_literal_is_skipped() {
        assert!(CounterAnimation::parse("N/A", 50).is_none());
        assert!(CounterAnimation::parse("+", 50).is_none());
        assert!(CounterAnimation::parse("", 50).is_none());
        assert!(CounterAnimation::parse("1,200", 50).is_none());
    }

    #[test]
    fn plain_counter_has_no_suffix() {
        let mut animation = CounterAnimation::parse("20", 4).expect("numeric literal");
        let frames = run(&mut animation);
        assert_eq!(
            frames,
            vec![
                CounterFrame::Step("5".to_string()),
                CounterFrame::Step("10".to_string()),
                CounterFrame::Step("15".to_string()),
                CounterFrame::Done("20".to_string()),
            ]
        );
    }

    #[test]
    fn zero_finishes_on_first_tick() {
        let mut animation = CounterAnimation::parse("0", 50).expect("numeric literal");
        assert_eq!(animation.tick(), Some(CounterFrame::Done("0".to_string())));
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn signed_literal_is_restored_verbatim() {
        let mut animation = CounterAnimation::parse("-7", 50).expect("numeric literal");
        let frames = run(&mut animation);
        assert_eq!(frames.last().map(CounterFrame::text), Some("-7"));
        assert!(frames.iter().all(|frame| !frame.text().starts_with('-') || frame.is_done()));
    }

    proptest! {
        #[test]
        fn frames_never_decrease_and_end_on_literal(target in 0u32..1_000_000, plus in any::<bool>()) {
            let literal = if plus { format!("{target}+") } else { target.to_string() };
            let mut animation = CounterAnimation::parse(&literal, 50).expect("numeric literal");
            let frames = run(&mut animation);

            prop_assert!(frames.len() <= 51);
            let last = frames.last().expect("at least one frame");
            prop_assert_eq!(last, &CounterFrame::Done(literal.clone()));

            let values: Vec<u64> = frames.iter().map(|frame| leading_number(frame.text())).collect();
            prop_assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert!(values.iter().all(|value| *value <= u64::from(target)));
        }
    }
}
