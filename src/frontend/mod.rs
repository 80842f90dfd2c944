//! Browser bindings: binds the page's DOM to the state machines in the
//! rest of the crate.

mod animations;
mod contact;
mod dom;
mod easter_eggs;
mod effects;
mod mobile;
mod navigation;
mod panels;

use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, ErrorEvent};

use crate::config::{InteractionConfig, CONFIG_ELEMENT_ID};
use crate::loading::{loading_schedule, LoadingStep};
use crate::particles::particles_enabled;
use crate::viewport::should_start_particles;

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = Rc::new(load_config());

    on_dom_ready({
        let config = config.clone();
        move || init(&config)
    });
    on_window_load({
        let config = config.clone();
        move || hide_loading_screen(config)
    });

    install_error_reporter();
    install_resize_handler(config);

    log::info!("Portfolio loaded");
    log::info!("Tip: try the classic cheat code for a surprise");
}

fn load_config() -> InteractionConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|element| element.text_content())
    else {
        return InteractionConfig::default();
    };

    match InteractionConfig::from_json(&raw) {
        Ok((config, rejected)) => {
            for name in rejected {
                log::warn!("config override `{name}` is out of bounds; keeping the default");
            }
            config
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            InteractionConfig::default()
        }
    }
}

fn on_dom_ready(callback: impl FnOnce() + 'static) {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() != "loading" {
        callback();
        return;
    }

    let mut callback = Some(callback);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(callback) = callback.take() {
            callback();
        }
    });
}

fn on_window_load(callback: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };

    let loaded = win
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        callback();
        return;
    }

    let mut callback = Some(callback);
    dom::listen(&win, "load", move |_| {
        if let Some(callback) = callback.take() {
            callback();
        }
    });
}

fn init(config: &InteractionConfig) {
    navigation::mount_theme_toggle(config);

    let nav = navigation::Navigation::mount(config);
    let scroll_effects = navigation::ScrollEffects::mount(config);
    navigation::install_scroll_dispatcher(nav, scroll_effects);

    panels::mount_skills(config);
    panels::mount_qualifications(config);
    contact::mount_contact_form(config);
    animations::mount_scroll_reveal(config);
    navigation::mount_smooth_scroll(config);
    animations::mount_counters(config);
    report("text reveal", animations::mount_text_reveal(config));
    panels::mount_project_cards(config);
    mobile::mount_mobile(config);
    mobile::optimize_for_mobile(config);
    animations::mount_lazy_images();
    report("resource preload", mobile::preload_critical_resources());
    easter_eggs::mount_easter_eggs(config);

    if particles_enabled(dom::viewport().width, config.mobile_breakpoint) {
        effects::start_particles(config);
    }

    report("effect keyframes", effects::inject_keyframes());
}

fn report(component: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{component} setup failed: {err:?}");
    }
}

fn hide_loading_screen(config: Rc<InteractionConfig>) {
    let Some(screen) = dom::by_id("loading-screen") else {
        animations::start_deferred(&config);
        return;
    };

    let schedule = loading_schedule(config.loading_screen_delay_ms, config.loading_screen_fade_ms);
    for (offset_ms, step) in schedule {
        let screen = screen.clone();
        let config = config.clone();
        Timeout::new(offset_ms, move || match step {
            LoadingStep::Reveal => {
                dom::set_class(&screen, "hidden", true);
                animations::start_deferred(&config);
            }
            LoadingStep::Remove => screen.remove(),
        })
        .forget();
    }
}

fn install_error_reporter() {
    let Some(win) = window() else {
        return;
    };

    dom::listen(&win, "error", |event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .unwrap_or_else(|| "unknown error".to_string());
        log::error!("page error: {message}");
    });
}

/// Re-applies mobile tweaks once resizing settles, and starts the particle
/// field if the window grew past the breakpoint.
fn install_resize_handler(config: Rc<InteractionConfig>) {
    let Some(win) = window() else {
        return;
    };

    let mut pending: Option<Timeout> = None;
    dom::listen(&win, "resize", move |_| {
        let config = config.clone();
        let debounced = Timeout::new(config.resize_debounce_ms, move || {
            mobile::optimize_for_mobile(&config);

            let field_present = dom::query(".particles-container").is_some();
            if should_start_particles(dom::viewport().width, config.mobile_breakpoint, field_present)
            {
                effects::start_particles(&config);
            }
        });

        if let Some(previous) = pending.replace(debounced) {
            previous.cancel();
        }
    });
}
