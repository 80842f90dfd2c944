use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use super::dom;
use super::effects::{launch_confetti, trigger_secret_mode};
use crate::config::InteractionConfig;
use crate::easter_eggs::{ClickBurst, SequenceMatcher, Shortcut};

pub fn mount_easter_eggs(config: &InteractionConfig) {
    let Some(win) = window() else {
        return;
    };

    dom::listen(&win, "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(shortcut) = Shortcut::from_key(event.ctrl_key(), &event.key()) else {
            return;
        };

        event.prevent_default();
        run_shortcut(shortcut);
    });

    let mut matcher = SequenceMatcher::default();
    let secret_config = config.clone();
    dom::listen(&win, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if matcher.feed(&event.code()) {
            trigger_secret_mode(&secret_config);
        }
    });

    let Some(brand) = dom::query(".navbar-brand") else {
        return;
    };
    let mut burst = ClickBurst::new(config.click_egg_threshold, config.click_egg_idle_ms);
    let confetti_config = config.clone();
    dom::listen(&brand, "click", move |event| {
        event.prevent_default();
        if burst.click(dom::monotonic_ms()) {
            launch_confetti(&confetti_config);
        }
    });
}

fn run_shortcut(shortcut: Shortcut) {
    match shortcut {
        Shortcut::ToggleTheme => {
            if let Some(toggle) = dom::by_id("theme-toggle")
                .and_then(|toggle| toggle.dyn_into::<HtmlElement>().ok())
            {
                toggle.click();
            }
        }
        Shortcut::ScrollHome => {
            if let Some(home) = dom::by_id("home") {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                home.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}
