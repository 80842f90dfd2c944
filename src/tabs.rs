//! Exactly-one-active selectors backing the skills categories and the
//! qualifications tabs, plus the small formatting rules their panels use.

#[derive(Debug, Clone)]
pub struct TabSelector {
    keys: Vec<String>,
    active: Option<usize>,
}

impl TabSelector {
    /// `initial` is usually the key whose button was rendered with `active`.
    pub fn new<I, S>(keys: I, initial: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let active = initial.and_then(|initial| keys.iter().position(|key| key == initial));
        Self { keys, active }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|index| self.keys[index].as_str())
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Activates `key`. Unknown keys leave the selection unchanged and
    /// return `false`.
    pub fn select(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|candidate| candidate == key) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    /// Like [`select`](Self::select), but also refuses a key whose panel is
    /// missing from the page, so some panel always stays shown.
    pub fn select_present(&mut self, key: &str, panel_exists: bool) -> bool {
        panel_exists && self.select(key)
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active() == Some(key)
    }
}

/// CSS width for a skill bar from its `data-width`, clamped to 0–100 %.
pub fn progress_width(data_width: &str) -> Option<String> {
    let value: f64 = data_width.trim().trim_end_matches('%').parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

/// `animation-delay` for the `index`-th staggered item.
pub fn stagger_delay(index: usize, step_seconds: f64) -> String {
    let seconds = (index as f64 * step_seconds * 1_000.0).round() / 1_000.0;
    format!("{seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_key_is_active() {
        let mut tabs = TabSelector::new(["frontend", "backend", "tools"], Some("frontend"));
        assert!(tabs.select("tools"));

        let active: Vec<&String> = tabs.keys().iter().filter(|key| tabs.is_active(key)).collect();
        assert_eq!(active, vec!["tools"]);
    }

    #[test]
    fn unknown_key_keeps_selection() {
        let mut tabs = TabSelector::new(["education", "experience"], Some("education"));
        assert!(!tabs.select("hobbies"));
        assert_eq!(tabs.active(), Some("education"));
    }

    #[test]
    fn key_without_panel_keeps_selection() {
        let mut tabs = TabSelector::new(["education", "experience"], Some("education"));
        assert!(!tabs.select_present("experience", false));
        assert_eq!(tabs.active(), Some("education"));
        assert!(!tabs.is_active("experience"));

        assert!(tabs.select_present("experience", true));
        assert_eq!(tabs.active(), Some("experience"));
    }

    #[test]
    fn unknown_initial_starts_empty() {
        let tabs = TabSelector::new(["a", "b"], Some("z"));
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn progress_width_is_clamped_percentage() {
        assert_eq!(progress_width("85").as_deref(), Some("85%"));
        assert_eq!(progress_width(" 92.5% ").as_deref(), Some("92.5%"));
        assert_eq!(progress_width("140").as_deref(), Some("100%"));
        assert_eq!(progress_width("-3").as_deref(), Some("0%"));
        assert_eq!(progress_width("lots"), None);
        assert_eq!(progress_width("NaN"), None);
    }

    #[test]
    fn stagger_delays_step_evenly() {
        assert_eq!(stagger_delay(0, 0.1), "0s");
        assert_eq!(stagger_delay(3, 0.1), "0.3s");
        assert_eq!(stagger_delay(7, 0.05), "0.35s");
    }
}
