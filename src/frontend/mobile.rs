use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlLinkElement};

use super::dom;
use crate::config::InteractionConfig;
use crate::viewport::{body_overflow, DeviceClass, CRITICAL_STYLESHEETS};

fn is_touch_device() -> bool {
    let Some(win) = window() else {
        return false;
    };
    Reflect::has(&win, &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

/// Touch detection and the collapsing navbar's scroll lock.
pub fn mount_mobile(config: &InteractionConfig) {
    if is_touch_device() {
        if let Some(body) = dom::body() {
            dom::set_class(&body, "touch-device", true);
        }
    }

    let Some(toggler) = dom::query(".navbar-toggler") else {
        return;
    };
    let delay_ms = config.nav_toggle_delay_ms;

    dom::listen(&toggler, "click", move |_| {
        // Bootstrap finishes toggling `show` after the click.
        Timeout::new(delay_ms, || {
            let open = dom::query(".navbar-collapse")
                .map(|menu| dom::has_class(&menu, "show"))
                .unwrap_or(false);
            if let Some(body) = dom::body() {
                dom::set_style(&body, "overflow", body_overflow(open));
            }
        })
        .forget();
    });
}

pub fn optimize_for_mobile(config: &InteractionConfig) {
    let device = DeviceClass::from_width(dom::viewport().width, config.mobile_breakpoint);
    if device != DeviceClass::Mobile {
        return;
    }

    if let Some(body) = dom::body() {
        dom::set_class(&body, "mobile-device", true);
    }

    for (index, shape) in dom::query_all(".floating-shapes .shape").iter().enumerate() {
        if !device.shows_shape(index) {
            dom::set_style(shape, "display", "none");
        }
    }
}

pub fn preload_critical_resources() -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };
    let Some(head) = document.head() else {
        return Ok(());
    };

    for href in CRITICAL_STYLESHEETS {
        let link = document.create_element("link")?.dyn_into::<HtmlLinkElement>()?;
        link.set_rel("preload");
        link.set_href(href);
        link.set_attribute("as", "style")?;
        head.append_child(&link)?;
    }
    Ok(())
}
