use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Function, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlImageElement};

use super::dom;
use crate::config::InteractionConfig;
use crate::counter::{CounterAnimation, CounterFrame};
use crate::text_reveal::reveal_chars;
use crate::typewriter::{parse_phrases, PhraseSource, Typewriter, TypewriterTiming};
use crate::visibility::{TriggerMode, VisibilityTrigger};
use crate::viewport::lazy_source;

const SCROLL_LIBRARY_DURATION_MS: f64 = 1_000.0;
const SCROLL_LIBRARY_EASING: &str = "ease-out-cubic";
const SCROLL_LIBRARY_OFFSET_PX: f64 = 100.0;

/// `.animate-on-scroll` elements gain `animated` whenever they come into view.
pub fn mount_scroll_reveal(config: &InteractionConfig) {
    dom::observe_visibility(
        dom::query_all(".animate-on-scroll"),
        VisibilityTrigger::new(config.reveal_threshold, TriggerMode::Repeat),
        Some(config.reveal_root_margin.as_str()),
        |element| dom::set_class(element, "animated", true),
    );
}

pub fn mount_counters(config: &InteractionConfig) {
    let steps = config.counter_steps;
    let interval_ms = config.counter_interval_ms;

    dom::observe_visibility(
        dom::query_all(".stat-number"),
        VisibilityTrigger::new(0.0, TriggerMode::Once),
        None,
        move |element| start_counter(element.clone(), steps, interval_ms),
    );
}

fn start_counter(element: Element, steps: u32, interval_ms: u32) {
    let literal = element.text_content().unwrap_or_default();
    let Some(mut animation) = CounterAnimation::parse(&literal, steps) else {
        return;
    };

    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = handle.clone();

    let interval = Interval::new(interval_ms, move || {
        let Some(frame) = animation.tick() else {
            slot.borrow_mut().take();
            return;
        };

        element.set_text_content(Some(frame.text()));
        if let CounterFrame::Done(_) = frame {
            slot.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(interval);
}

/// Splits each `.reveal-text` into per-character spans with staggered delays.
pub fn mount_text_reveal(config: &InteractionConfig) -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };

    for element in dom::query_all(".reveal-text") {
        let text = element.text_content().unwrap_or_default();
        element.set_inner_html("");

        for ch in reveal_chars(&text, config.reveal_char_delay_s) {
            let span = document.create_element("span")?;
            span.set_text_content(Some(&ch.text.to_string()));
            dom::set_style(&span, "animation-delay", &ch.animation_delay());
            dom::set_class(&span, "char", true);
            element.append_child(&span)?;
        }
    }
    Ok(())
}

pub fn mount_lazy_images() {
    dom::observe_visibility(
        dom::query_all("img[data-src]"),
        VisibilityTrigger::new(0.0, TriggerMode::Once),
        None,
        |element| {
            let Some(image) = element.dyn_ref::<HtmlImageElement>() else {
                return;
            };
            let data_src = image.get_attribute("data-src");
            if let Some(src) = lazy_source(data_src.as_deref()) {
                image.set_src(src);
            }
            dom::set_class(image, "loading", false);
        },
    );
}

/// Starts animations that wait for the loading screen to clear.
pub fn start_deferred(config: &InteractionConfig) {
    init_scroll_library();
    start_typewriter(config);
}

fn init_scroll_library() {
    let global = js_sys::global();
    let Ok(library) = Reflect::get(&global, &JsValue::from_str("AOS")) else {
        return;
    };
    if library.is_undefined() || library.is_null() {
        return;
    }

    let Ok(init) = Reflect::get(&library, &JsValue::from_str("init")) else {
        return;
    };
    let Some(init) = init.dyn_ref::<Function>() else {
        return;
    };

    let options = Object::new();
    let _ = Reflect::set(&options, &"duration".into(), &SCROLL_LIBRARY_DURATION_MS.into());
    let _ = Reflect::set(&options, &"easing".into(), &SCROLL_LIBRARY_EASING.into());
    let _ = Reflect::set(&options, &"once".into(), &JsValue::TRUE);
    let _ = Reflect::set(&options, &"offset".into(), &SCROLL_LIBRARY_OFFSET_PX.into());

    if let Err(err) = init.call1(&library, &options) {
        log::warn!("animate-on-scroll init failed: {err:?}");
    }
}

fn start_typewriter(config: &InteractionConfig) {
    let Some(element) = dom::query(".typewriter") else {
        return;
    };

    let default_phrase = vec![config.typewriter_default_phrase.clone()];
    let phrases = match parse_phrases(element.get_attribute("data-typewriter").as_deref()) {
        PhraseSource::Attribute(phrases) => phrases,
        PhraseSource::Default => default_phrase,
        PhraseSource::Invalid(reason) => {
            log::warn!("ignoring data-typewriter ({reason}); using the default phrase");
            default_phrase
        }
    };

    let timing = TypewriterTiming {
        type_delay: Duration::from_millis(u64::from(config.typewriter_type_ms)),
        delete_delay: Duration::from_millis(u64::from(config.typewriter_delete_ms)),
        hold_delay: Duration::from_millis(u64::from(config.typewriter_hold_ms)),
        gap_delay: Duration::from_millis(u64::from(config.typewriter_gap_ms)),
    };

    let Some(writer) = Typewriter::new(phrases, timing) else {
        return;
    };
    type_next(writer, element);
}

fn type_next(mut writer: Typewriter, element: Element) {
    let frame = writer.tick();
    element.set_text_content(Some(&frame.text));

    let delay_ms = u32::try_from(frame.delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(delay_ms, move || type_next(writer, element)).forget();
}
