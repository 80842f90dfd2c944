//! Scroll-synchronized section highlighting.

/// Vertical extent of one labelled section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Section whose extent contains `scroll_y + probe`. Later sections win when
/// extents overlap.
pub fn section_at(sections: &[SectionExtent], scroll_y: f64, probe: f64) -> Option<&str> {
    let offset = scroll_y + probe;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(offset))
        .map(|section| section.id.as_str())
}

/// The `href` a nav link must carry to represent `section_id`.
pub fn link_target(section_id: &str) -> String {
    format!("#{section_id}")
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Tracks which section is highlighted across scroll frames.
#[derive(Debug, Default)]
pub struct SectionHighlighter {
    active: Option<String>,
}

impl SectionHighlighter {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recomputes the highlight. Returns the new section id when it changed;
    /// a probe outside every section keeps the previous highlight.
    pub fn update(&mut self, sections: &[SectionExtent], scroll_y: f64, probe: f64) -> Option<&str> {
        let current = section_at(sections, scroll_y, probe)?;
        if self.active.as_deref() == Some(current) {
            return None;
        }

        self.active = Some(current.to_string());
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout() -> Vec<SectionExtent> {
        vec![
            SectionExtent::new("home", 0.0, 800.0),
            SectionExtent::new("about", 800.0, 600.0),
            SectionExtent::new("skills", 1400.0, 900.0),
            SectionExtent::new("contact", 2300.0, 500.0),
        ]
    }

    #[test]
    fn probe_margin_selects_next_section_early() {
        let sections = layout();
        assert_eq!(section_at(&sections, 650.0, 100.0), Some("home"));
        assert_eq!(section_at(&sections, 700.0, 100.0), Some("about"));
    }

    #[test]
    fn section_end_is_exclusive() {
        let sections = layout();
        assert_eq!(section_at(&sections, 1300.0, 100.0), Some("skills"));
    }

    #[test]
    fn past_the_last_section_nothing_matches() {
        let sections = layout();
        assert_eq!(section_at(&sections, 5000.0, 100.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_later_one() {
        let sections = vec![
            SectionExtent::new("hero", 0.0, 1000.0),
            SectionExtent::new("intro", 500.0, 400.0),
        ];
        assert_eq!(section_at(&sections, 550.0, 0.0), Some("intro"));
    }

    #[test]
    fn highlighter_reports_changes_only() {
        let sections = layout();
        let mut highlighter = SectionHighlighter::default();

        assert_eq!(highlighter.update(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(highlighter.update(&sections, 10.0, 100.0), None);
        assert_eq!(highlighter.update(&sections, 900.0, 100.0), Some("about"));
        assert_eq!(highlighter.update(&sections, 9000.0, 100.0), None);
        assert_eq!(highlighter.active(), Some("about"));
    }

    #[test]
    fn scrolled_state_is_strictly_past_threshold() {
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
    }

    #[test]
    fn link_target_is_fragment() {
        assert_eq!(link_target("about"), "#about");
    }

    proptest! {
        #[test]
        fn exactly_the_containing_section_is_active(
            heights in proptest::collection::vec(1u32..2_000, 1..8),
            pick in any::<proptest::sample::Index>(),
            within in any::<proptest::sample::Index>(),
        ) {
            let mut top = 0.0;
            let sections: Vec<SectionExtent> = heights
                .iter()
                .enumerate()
                .map(|(index, height)| {
                    let height = f64::from(*height);
                    let section = SectionExtent::new(format!("s{index}"), top, height);
                    top += height;
                    section
                })
                .collect();

            let chosen = &sections[pick.index(sections.len())];
            let offset = chosen.top + within.index(chosen.height as usize) as f64;

            let active: Vec<&SectionExtent> =
                sections.iter().filter(|section| section.contains(offset)).collect();
            prop_assert_eq!(active.len(), 1);

            let probe = 100.0;
            prop_assert_eq!(section_at(&sections, offset - probe, probe), Some(chosen.id.as_str()));
        }
    }
}
