//! Thin helpers over `web-sys` so the components read as behaviour rather
//! than binding boilerplate. Every lookup is optional: a missing element is
//! skipped, never an error.

use js_sys::Array;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    HtmlInputElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Storage,
};

use crate::particles::Viewport;
use crate::theme::PreferenceStore;
use crate::visibility::{TriggerAction, VisibilityTrigger};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|document| document.query_selector_all(selector).ok())
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Sets an inline style property; an empty value removes it.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

/// Value of a form control, for the control kinds the page uses.
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

pub fn event_element(event: &Event) -> Option<Element> {
    event.current_target()?.dyn_into::<Element>().ok()
}

pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("could not listen for `{event}`: {err:?}");
    }
    closure.forget();
}

/// Like [`listen`] but marked passive, for scroll handlers.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("could not listen for `{event}`: {err:?}");
    }
    closure.forget();
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport() -> Viewport {
    let Some(win) = window() else {
        return Viewport::new(1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    Viewport::new(width, height)
}

/// Milliseconds on the page's monotonic clock (`performance.now()`).
pub fn monotonic_ms() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

pub fn random_seed() -> u64 {
    let entropy = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    entropy ^ js_sys::Date::now().to_bits()
}

/// Runs `callback` on the next animation frame. Returns `false` when no
/// frame could be requested.
pub fn request_frame_once<F>(callback: F) -> bool
where
    F: FnOnce() + 'static,
{
    let Some(win) = window() else {
        return false;
    };
    let callback = Closure::once_into_js(callback);
    win.request_animation_frame(callback.unchecked_ref()).is_ok()
}

/// Calls `on_frame` every animation frame until dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let next = slot.clone();
        let alive = running.clone();
        *slot.borrow_mut() = Some(Closure::new(move || {
            if !alive.get() {
                next.borrow_mut().take();
                return;
            }
            on_frame();
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(callback);
            }
        }));

        if let Some(callback) = slot.borrow().as_ref() {
            request_frame(callback);
        }

        Self { running }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(win) = window() {
        let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Observes `targets` and calls `on_fire` whenever `trigger` decides a
/// report counts. One-shot triggers unobserve the target before firing.
pub fn observe_visibility<F>(
    targets: Vec<Element>,
    mut trigger: VisibilityTrigger<usize>,
    root_margin: Option<&str>,
    mut on_fire: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(&Element) + 'static,
{
    if targets.is_empty() {
        return None;
    }

    let threshold = trigger.threshold();
    let tracked = targets.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = tracked.iter().position(|candidate| *candidate == target) else {
                    continue;
                };

                match trigger.observe(index, entry.is_intersecting(), entry.intersection_ratio()) {
                    TriggerAction::Ignore => {}
                    TriggerAction::Fire => on_fire(&target),
                    TriggerAction::FireAndUnobserve => {
                        observer.unobserve(&target);
                        on_fire(&target);
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::error!("intersection observer unavailable: {err:?}");
                return None;
            }
        };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Some(observer)
}

/// `localStorage`-backed preference store; silently inert when storage is
/// blocked.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        Self {
            storage: window().and_then(|win| win.local_storage().ok().flatten()),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}
