use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::dom::{self, LocalStorage};
use crate::config::InteractionConfig;
use crate::navigation::{is_scrolled, link_target, SectionExtent, SectionHighlighter};
use crate::scroll::{
    anchor_scroll_top, back_to_top_visible, in_page_fragment, parallax_offset, FrameThrottle,
};
use crate::theme::{Theme, ThemePreference};

pub struct Navigation {
    navbar: Option<Element>,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    highlighter: RefCell<SectionHighlighter>,
    scrolled_threshold: f64,
    probe_offset: f64,
}

impl Navigation {
    pub fn mount(config: &InteractionConfig) -> Rc<Self> {
        let sections = dom::query_all("section[id]")
            .into_iter()
            .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
            .collect();

        Rc::new(Self {
            navbar: dom::by_id("navbar"),
            links: dom::query_all(".nav-link"),
            sections,
            highlighter: RefCell::new(SectionHighlighter::default()),
            scrolled_threshold: config.nav_scrolled_threshold,
            probe_offset: config.section_probe_offset,
        })
    }

    pub fn handle_scroll(&self, scroll_y: f64) {
        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, "scrolled", is_scrolled(scroll_y, self.scrolled_threshold));
        }
    }

    pub fn update_active_section(&self, scroll_y: f64) {
        // Layout can shift (images, fonts), so extents are measured per frame.
        let extents: Vec<SectionExtent> = self
            .sections
            .iter()
            .map(|section| {
                SectionExtent::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect();

        let mut highlighter = self.highlighter.borrow_mut();
        let Some(active) = highlighter.update(&extents, scroll_y, self.probe_offset) else {
            return;
        };

        let target = link_target(active);
        for link in &self.links {
            let matches = link.get_attribute("href").as_deref() == Some(target.as_str());
            dom::set_class(link, "active", matches);
        }
    }
}

pub struct ScrollEffects {
    back_to_top: Option<Element>,
    parallax_layers: Vec<Element>,
    back_to_top_threshold: f64,
    parallax_factor: f64,
}

impl ScrollEffects {
    pub fn mount(config: &InteractionConfig) -> Rc<Self> {
        Rc::new(Self {
            back_to_top: dom::by_id("backToTop"),
            parallax_layers: dom::query_all(".floating-shapes, .profile-container"),
            back_to_top_threshold: config.back_to_top_threshold,
            parallax_factor: config.parallax_factor,
        })
    }

    pub fn handle_back_to_top(&self, scroll_y: f64) {
        if let Some(button) = &self.back_to_top {
            dom::set_class(
                button,
                "show",
                back_to_top_visible(scroll_y, self.back_to_top_threshold),
            );
        }
    }

    pub fn apply_parallax(&self, scroll_y: f64) {
        for (index, layer) in self.parallax_layers.iter().enumerate() {
            let offset = parallax_offset(scroll_y, index, self.parallax_factor);
            dom::set_style(layer, "transform", &format!("translateY({offset}px)"));
        }
    }
}

fn run_scroll_frame(navigation: &Navigation, effects: &ScrollEffects) {
    let scroll_y = dom::scroll_y();
    navigation.handle_scroll(scroll_y);
    navigation.update_active_section(scroll_y);
    effects.handle_back_to_top(scroll_y);
    effects.apply_parallax(scroll_y);
}

/// Single passive scroll listener; all scroll-driven work runs at most once
/// per animation frame.
pub fn install_scroll_dispatcher(navigation: Rc<Navigation>, effects: Rc<ScrollEffects>) {
    run_scroll_frame(&navigation, &effects);

    let Some(win) = window() else {
        return;
    };

    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
    dom::listen_passive(&win, "scroll", move |_| {
        if !throttle.borrow_mut().request() {
            return;
        }

        let navigation = navigation.clone();
        let effects = effects.clone();
        let frame_throttle = throttle.clone();
        let scheduled = dom::request_frame_once(move || {
            run_scroll_frame(&navigation, &effects);
            frame_throttle.borrow_mut().complete();
        });

        if !scheduled {
            throttle.borrow_mut().complete();
        }
    });
}

/// In-page anchors scroll smoothly, stopping short of the fixed navbar.
pub fn mount_smooth_scroll(config: &InteractionConfig) {
    let offset = config.smooth_scroll_offset;

    for anchor in dom::query_all("a[href^=\"#\"]") {
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();

            let Some(target) = in_page_fragment(&href)
                .and_then(dom::by_id)
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };

            scroll_to_smooth(anchor_scroll_top(f64::from(target.offset_top()), offset));
        });
    }
}

pub fn scroll_to_smooth(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn current_theme() -> Option<Theme> {
    let value = dom::document()?
        .document_element()?
        .get_attribute("data-theme")?;
    Theme::from_str(&value)
}

fn apply_theme(theme: Theme) {
    if let Some(root) = dom::document().and_then(|document| document.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    if let Some(icon) = dom::query("#theme-toggle i") {
        icon.set_class_name(theme.icon_class());
    }
}

/// Applies the stored theme and wires `#theme-toggle`.
pub fn mount_theme_toggle(config: &InteractionConfig) {
    let preference = ThemePreference::new(LocalStorage::open(), config.theme_storage_key.clone());
    let initial = preference.load();
    apply_theme(initial);
    log::debug!("theme restored: {}", initial.as_str());

    let Some(toggle) = dom::by_id("theme-toggle") else {
        return;
    };

    dom::listen(&toggle, "click", move |_| {
        let current = current_theme().unwrap_or_else(|| preference.load());
        let next = preference.toggle(current);
        apply_theme(next);
    });
}
