//! Visibility-triggered animation bookkeeping.
//!
//! The browser observer reports `(target, ratio)` pairs; [`VisibilityTrigger`]
//! decides what to do with them. One-shot triggers remember which targets
//! already fired and ask the caller to stop observing them, so a counter or a
//! skill bar can never animate twice from scrolling.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fire once per target, then unobserve.
    Once,
    /// Fire every time the target becomes visible.
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    Ignore,
    Fire,
    FireAndUnobserve,
}

impl TriggerAction {
    pub fn fires(self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

#[derive(Debug)]
pub struct VisibilityTrigger<K> {
    threshold: f64,
    mode: TriggerMode,
    fired: HashSet<K>,
}

impl<K: Eq + Hash> VisibilityTrigger<K> {
    pub fn new(threshold: f64, mode: TriggerMode) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            mode,
            fired: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Handles one observer report. `intersecting` is the browser's own
    /// verdict, `ratio` the visible fraction of the target.
    pub fn observe(&mut self, target: K, intersecting: bool, ratio: f64) -> TriggerAction {
        if !intersecting || ratio < self.threshold {
            return TriggerAction::Ignore;
        }

        match self.mode {
            TriggerMode::Repeat => TriggerAction::Fire,
            TriggerMode::Once => {
                if self.fired.insert(target) {
                    TriggerAction::FireAndUnobserve
                } else {
                    TriggerAction::Ignore
                }
            }
        }
    }

    pub fn has_fired(&self, target: &K) -> bool {
        self.fired.contains(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_per_target() {
        let mut trigger = VisibilityTrigger::new(0.5, TriggerMode::Once);

        assert_eq!(trigger.observe(1, true, 0.6), TriggerAction::FireAndUnobserve);
        assert_eq!(trigger.observe(1, true, 0.9), TriggerAction::Ignore);
        assert_eq!(trigger.observe(2, true, 0.5), TriggerAction::FireAndUnobserve);
        assert!(trigger.has_fired(&1));
        assert!(!trigger.has_fired(&3));
    }

    #[test]
    fn below_threshold_is_ignored() {
        let mut trigger = VisibilityTrigger::new(0.5, TriggerMode::Once);
        assert_eq!(trigger.observe("bar", true, 0.49), TriggerAction::Ignore);
        assert!(!trigger.has_fired(&"bar"));
        assert_eq!(trigger.observe("bar", true, 0.51), TriggerAction::FireAndUnobserve);
    }

    #[test]
    fn non_intersecting_report_is_ignored() {
        let mut trigger = VisibilityTrigger::new(0.0, TriggerMode::Repeat);
        assert_eq!(trigger.observe(7, false, 0.0), TriggerAction::Ignore);
    }

    #[test]
    fn repeating_trigger_refires() {
        let mut trigger = VisibilityTrigger::new(0.1, TriggerMode::Repeat);
        assert_eq!(trigger.observe(1, true, 0.2), TriggerAction::Fire);
        assert_eq!(trigger.observe(1, true, 0.2), TriggerAction::Fire);
        assert!(trigger.observe(1, true, 0.2).fires());
    }

    #[test]
    fn threshold_is_clamped() {
        let trigger: VisibilityTrigger<u32> = VisibilityTrigger::new(3.0, TriggerMode::Once);
        assert_eq!(trigger.threshold(), 1.0);
    }
}
