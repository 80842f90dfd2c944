use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

use super::dom;
use crate::config::InteractionConfig;
use crate::tabs::{progress_width, stagger_delay, TabSelector};
use crate::visibility::{TriggerMode, VisibilityTrigger};

fn animate_progress_bars(container: &Element, delay_ms: u32) {
    for bar in dom::query_within(container, ".skill-progress") {
        let Some(width) = bar
            .get_attribute("data-width")
            .and_then(|value| progress_width(&value))
        else {
            continue;
        };

        Timeout::new(delay_ms, move || dom::set_style(&bar, "width", &width)).forget();
    }
}

fn selector_from(buttons: &[Element], key_attribute: &str) -> TabSelector {
    let keys = buttons
        .iter()
        .filter_map(|button| button.get_attribute(key_attribute));
    let initial = buttons
        .iter()
        .find(|button| dom::has_class(button, "active"))
        .and_then(|button| button.get_attribute(key_attribute));
    TabSelector::new(keys, initial.as_deref())
}

/// Skills category buttons and the progress bars of each category.
pub fn mount_skills(config: &InteractionConfig) {
    let buttons = Rc::new(dom::query_all(".category-item"));
    let groups = Rc::new(dom::query_all(".skills-category"));
    let selector = Rc::new(RefCell::new(selector_from(&buttons, "data-category")));
    let delay_ms = config.skill_bar_delay_ms;

    for button in buttons.iter() {
        let buttons = buttons.clone();
        let groups = groups.clone();
        let selector = selector.clone();

        dom::listen(button, "click", move |event| {
            let Some(key) =
                dom::event_element(&event).and_then(|button| button.get_attribute("data-category"))
            else {
                return;
            };

            let group_exists = groups.iter().any(|group| {
                group.get_attribute("data-category-content").as_deref() == Some(key.as_str())
            });
            let mut selector = selector.borrow_mut();
            if !selector.select_present(&key, group_exists) {
                return;
            }

            for button in buttons.iter() {
                let active = button
                    .get_attribute("data-category")
                    .is_some_and(|category| selector.is_active(&category));
                dom::set_class(button, "active", active);
            }

            for group in groups.iter() {
                let active = group
                    .get_attribute("data-category-content")
                    .is_some_and(|category| selector.is_active(&category));
                dom::set_class(group, "active", active);
                if active {
                    animate_progress_bars(group, delay_ms);
                }
            }
        });
    }

    dom::observe_visibility(
        groups.to_vec(),
        VisibilityTrigger::new(config.skill_bar_threshold, TriggerMode::Once),
        None,
        move |group| animate_progress_bars(group, delay_ms),
    );
}

/// Qualifications tabs: one `.tab-btn` and one `.tab-pane` active at a time.
pub fn mount_qualifications(config: &InteractionConfig) {
    let buttons = Rc::new(dom::query_all(".tab-btn"));
    let panes = Rc::new(dom::query_all(".tab-pane"));
    let selector = Rc::new(RefCell::new(selector_from(&buttons, "data-tab")));
    let stagger = config.timeline_stagger_s;

    for button in buttons.iter() {
        let buttons = buttons.clone();
        let panes = panes.clone();
        let selector = selector.clone();
        let clicked = button.clone();

        dom::listen(button, "click", move |_| {
            let Some(target) = clicked.get_attribute("data-tab") else {
                return;
            };
            let pane = dom::by_id(&target);
            let mut selector = selector.borrow_mut();
            if !selector.select_present(&target, pane.is_some()) {
                return;
            }

            for button in buttons.iter() {
                let active = button
                    .get_attribute("data-tab")
                    .is_some_and(|tab| selector.is_active(&tab));
                dom::set_class(button, "active", active);
            }
            for pane in panes.iter() {
                dom::set_class(pane, "active", selector.is_active(&pane.id()));
            }

            if let Some(pane) = pane {
                for (index, item) in dom::query_within(&pane, ".timeline-item").iter().enumerate() {
                    dom::set_style(item, "animation-delay", &stagger_delay(index, stagger));
                }
            }
        });
    }
}

/// Project cards lift their tech tags one after another on hover. Leaving
/// the card cancels tags that have not lifted yet.
pub fn mount_project_cards(config: &InteractionConfig) {
    let stagger_ms = config.tech_tag_stagger_ms;

    for card in dom::query_all(".project-card") {
        let pending: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

        {
            let pending = pending.clone();
            let hovered = card.clone();
            dom::listen(&card, "mouseenter", move |_| {
                let mut pending = pending.borrow_mut();
                pending.clear();
                for (index, tag) in dom::query_within(&hovered, ".tech-tag").into_iter().enumerate() {
                    let delay = stagger_ms.saturating_mul(index as u32);
                    pending.push(Timeout::new(delay, move || {
                        dom::set_style(&tag, "transform", "translateY(-3px)");
                        dom::set_style(&tag, "background", "var(--primary-gradient)");
                        dom::set_style(&tag, "color", "white");
                    }));
                }
            });
        }

        let left = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            pending.borrow_mut().clear();
            for tag in dom::query_within(&left, ".tech-tag") {
                dom::set_style(&tag, "transform", "");
                dom::set_style(&tag, "background", "");
                dom::set_style(&tag, "color", "");
            }
        });
    }
}
