//! Tunable timings, thresholds and counts for every page behaviour.
//!
//! Defaults match the shipped page. A page may override individual values
//! through a JSON block (`<script type="application/json"
//! id="portfolio-config">`); each override is only accepted inside its
//! bounds, otherwise the default is kept.

use serde::Deserialize;
use std::fmt;

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
const DEFAULT_TYPEWRITER_PHRASE: &str = "Full Stack Developer";

const PIXEL_OFFSET_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const RATIO_BOUNDS: (f64, f64) = (0.0, 1.0);
const DELAY_MS_BOUNDS: (u32, u32) = (0, 60_000);
const TICK_MS_BOUNDS: (u32, u32) = (1, 10_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 1_000);
const CLICK_THRESHOLD_BOUNDS: (u32, u32) = (1, 100);
const PARTICLE_COUNT_BOUNDS: (u32, u32) = (0, 500);
const CONFETTI_COUNT_BOUNDS: (u32, u32) = (0, 500);
const BREAKPOINT_BOUNDS: (f64, f64) = (200.0, 4_000.0);

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub theme_storage_key: String,

    pub nav_scrolled_threshold: f64,
    pub section_probe_offset: f64,
    pub back_to_top_threshold: f64,
    pub smooth_scroll_offset: f64,
    pub parallax_factor: f64,

    pub skill_bar_threshold: f64,
    pub skill_bar_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    pub counter_steps: u32,
    pub counter_interval_ms: u32,
    pub reveal_char_delay_s: f64,

    pub typewriter_type_ms: u32,
    pub typewriter_delete_ms: u32,
    pub typewriter_hold_ms: u32,
    pub typewriter_gap_ms: u32,
    pub typewriter_default_phrase: String,

    pub loading_screen_delay_ms: u32,
    pub loading_screen_fade_ms: u32,

    pub click_egg_threshold: u32,
    pub click_egg_idle_ms: u32,
    pub confetti_count: u32,
    pub confetti_lifetime_ms: u32,
    pub secret_mode_ms: u32,

    pub mobile_breakpoint: f64,
    pub particles_mobile: u32,
    pub particles_desktop: u32,
    pub resize_debounce_ms: u32,
    pub nav_toggle_delay_ms: u32,
    pub tech_tag_stagger_ms: u32,
    pub timeline_stagger_s: f64,

    pub contact_submit_delay_ms: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),

            nav_scrolled_threshold: 100.0,
            section_probe_offset: 100.0,
            back_to_top_threshold: 300.0,
            smooth_scroll_offset: 80.0,
            parallax_factor: 0.1,

            skill_bar_threshold: 0.5,
            skill_bar_delay_ms: 200,
            reveal_threshold: 0.1,
            reveal_root_margin: "-50px".to_string(),

            counter_steps: 50,
            counter_interval_ms: 50,
            reveal_char_delay_s: 0.05,

            typewriter_type_ms: 100,
            typewriter_delete_ms: 50,
            typewriter_hold_ms: 2_000,
            typewriter_gap_ms: 500,
            typewriter_default_phrase: DEFAULT_TYPEWRITER_PHRASE.to_string(),

            loading_screen_delay_ms: 2_000,
            loading_screen_fade_ms: 500,

            click_egg_threshold: 5,
            click_egg_idle_ms: 3_000,
            confetti_count: 50,
            confetti_lifetime_ms: 3_000,
            secret_mode_ms: 3_000,

            mobile_breakpoint: 768.0,
            particles_mobile: 30,
            particles_desktop: 50,
            resize_debounce_ms: 250,
            nav_toggle_delay_ms: 300,
            tech_tag_stagger_ms: 100,
            timeline_stagger_s: 0.1,

            contact_submit_delay_ms: 2_000,
        }
    }
}

/// Partial override document. Unknown keys are ignored so an older page can
/// keep shipping a newer config block.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigOverrides {
    theme_storage_key: Option<String>,

    nav_scrolled_threshold: Option<f64>,
    section_probe_offset: Option<f64>,
    back_to_top_threshold: Option<f64>,
    smooth_scroll_offset: Option<f64>,
    parallax_factor: Option<f64>,

    skill_bar_threshold: Option<f64>,
    skill_bar_delay_ms: Option<u32>,
    reveal_threshold: Option<f64>,
    reveal_root_margin: Option<String>,

    counter_steps: Option<u32>,
    counter_interval_ms: Option<u32>,
    reveal_char_delay_s: Option<f64>,

    typewriter_type_ms: Option<u32>,
    typewriter_delete_ms: Option<u32>,
    typewriter_hold_ms: Option<u32>,
    typewriter_gap_ms: Option<u32>,
    typewriter_default_phrase: Option<String>,

    loading_screen_delay_ms: Option<u32>,
    loading_screen_fade_ms: Option<u32>,

    click_egg_threshold: Option<u32>,
    click_egg_idle_ms: Option<u32>,
    confetti_count: Option<u32>,
    confetti_lifetime_ms: Option<u32>,
    secret_mode_ms: Option<u32>,

    mobile_breakpoint: Option<f64>,
    particles_mobile: Option<u32>,
    particles_desktop: Option<u32>,
    resize_debounce_ms: Option<u32>,
    nav_toggle_delay_ms: Option<u32>,
    tech_tag_stagger_ms: Option<u32>,
    timeline_stagger_s: Option<f64>,

    contact_submit_delay_ms: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(message) => write!(f, "malformed interaction config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl InteractionConfig {
    /// Parses an override document on top of the defaults.
    ///
    /// Returns the config together with the names of overrides that were
    /// rejected for falling outside their bounds.
    pub fn from_json(raw: &str) -> Result<(Self, Vec<&'static str>), ConfigError> {
        let overrides: ConfigOverrides =
            serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(key) = non_empty(overrides.theme_storage_key) {
            config.theme_storage_key = key;
        }
        if let Some(phrase) = non_empty(overrides.typewriter_default_phrase) {
            config.typewriter_default_phrase = phrase;
        }
        if let Some(margin) = non_empty(overrides.reveal_root_margin) {
            config.reveal_root_margin = margin;
        }

        macro_rules! bounded {
            ($field:ident, $bounds:expr) => {
                apply_bounded(
                    &mut config.$field,
                    overrides.$field,
                    $bounds,
                    stringify!($field),
                    &mut rejected,
                );
            };
        }

        bounded!(nav_scrolled_threshold, PIXEL_OFFSET_BOUNDS);
        bounded!(section_probe_offset, PIXEL_OFFSET_BOUNDS);
        bounded!(back_to_top_threshold, PIXEL_OFFSET_BOUNDS);
        bounded!(smooth_scroll_offset, PIXEL_OFFSET_BOUNDS);
        bounded!(parallax_factor, RATIO_BOUNDS);

        bounded!(skill_bar_threshold, RATIO_BOUNDS);
        bounded!(skill_bar_delay_ms, DELAY_MS_BOUNDS);
        bounded!(reveal_threshold, RATIO_BOUNDS);

        bounded!(counter_steps, COUNTER_STEPS_BOUNDS);
        bounded!(counter_interval_ms, TICK_MS_BOUNDS);
        bounded!(reveal_char_delay_s, RATIO_BOUNDS);

        bounded!(typewriter_type_ms, TICK_MS_BOUNDS);
        bounded!(typewriter_delete_ms, TICK_MS_BOUNDS);
        bounded!(typewriter_hold_ms, DELAY_MS_BOUNDS);
        bounded!(typewriter_gap_ms, DELAY_MS_BOUNDS);

        bounded!(loading_screen_delay_ms, DELAY_MS_BOUNDS);
        bounded!(loading_screen_fade_ms, DELAY_MS_BOUNDS);

        bounded!(click_egg_threshold, CLICK_THRESHOLD_BOUNDS);
        bounded!(click_egg_idle_ms, TICK_MS_BOUNDS);
        bounded!(confetti_count, CONFETTI_COUNT_BOUNDS);
        bounded!(confetti_lifetime_ms, DELAY_MS_BOUNDS);
        bounded!(secret_mode_ms, DELAY_MS_BOUNDS);

        bounded!(mobile_breakpoint, BREAKPOINT_BOUNDS);
        bounded!(particles_mobile, PARTICLE_COUNT_BOUNDS);
        bounded!(particles_desktop, PARTICLE_COUNT_BOUNDS);
        bounded!(resize_debounce_ms, DELAY_MS_BOUNDS);
        bounded!(nav_toggle_delay_ms, DELAY_MS_BOUNDS);
        bounded!(tech_tag_stagger_ms, DELAY_MS_BOUNDS);
        bounded!(timeline_stagger_s, RATIO_BOUNDS);

        bounded!(contact_submit_delay_ms, DELAY_MS_BOUNDS);

        Ok((config, rejected))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn apply_bounded<T: PartialOrd + Copy>(
    slot: &mut T,
    value: Option<T>,
    bounds: (T, T),
    name: &'static str,
    rejected: &mut Vec<&'static str>,
) {
    let Some(value) = value else {
        return;
    };

    if value >= bounds.0 && value <= bounds.1 {
        *slot = value;
    } else {
        rejected.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        let (config, rejected) = InteractionConfig::from_json("{}").expect("valid json");
        assert_eq!(config, InteractionConfig::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn in_bounds_overrides_are_applied() {
        let (config, rejected) = InteractionConfig::from_json(
            r#"{"counterSteps": 20, "sectionProbeOffset": 64.5, "themeStorageKey": "site-theme"}"#,
        )
        .expect("valid json");

        assert_eq!(config.counter_steps, 20);
        assert_eq!(config.section_probe_offset, 64.5);
        assert_eq!(config.theme_storage_key, "site-theme");
        assert!(rejected.is_empty());
    }

    #[test]
    fn out_of_bounds_overrides_fall_back_to_default() {
        let (config, rejected) =
            InteractionConfig::from_json(r#"{"counterSteps": 0, "revealThreshold": 1.5}"#)
                .expect("valid json");

        assert_eq!(config.counter_steps, 50);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(rejected, vec!["reveal_threshold", "counter_steps"]);
    }

    #[test]
    fn blank_strings_are_ignored() {
        let (config, _) =
            InteractionConfig::from_json(r#"{"themeStorageKey": "   "}"#).expect("valid json");
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn malformed_document_is_an_error() {
        let result = InteractionConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (config, rejected) =
            InteractionConfig::from_json(r#"{"someFutureKnob": true}"#).expect("valid json");
        assert_eq!(config, InteractionConfig::default());
        assert!(rejected.is_empty());
    }
}
