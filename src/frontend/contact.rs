use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Element, HtmlButtonElement, HtmlFormElement};

use super::dom;
use crate::config::InteractionConfig;
use crate::contact::{
    field_styles, is_valid, validate, ContactMessage, FieldStatus, FormField, SubmitError,
    Submission, Transport, LABEL_LIFT_COLOR, LABEL_LIFT_TRANSFORM,
};

const CONTROL_SELECTOR: &str = "input, textarea";

fn read_fields(controls: &[Element]) -> Vec<FormField> {
    controls
        .iter()
        .map(|control| {
            let name = control
                .get_attribute("name")
                .unwrap_or_else(|| control.id());
            FormField::new(
                name,
                dom::control_value(control).unwrap_or_default(),
                control.has_attribute("required"),
            )
        })
        .collect()
}

fn mark_fields(controls: &[Element], report: &[(usize, FieldStatus)]) {
    for (index, status) in report {
        let Some(control) = controls.get(*index) else {
            continue;
        };
        for (property, value) in field_styles(*status) {
            dom::set_style(control, property, value);
        }
    }
}

fn set_loading(button: Option<&HtmlButtonElement>, loading: bool) {
    if let Some(button) = button {
        dom::set_class(button, "loading", loading);
        button.set_disabled(loading);
    }
}

async fn deliver(transport: Transport, fields: Vec<FormField>, delay_ms: u32) -> Result<(), SubmitError> {
    match transport {
        Transport::Simulated => {
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        Transport::Endpoint(url) => {
            let message = ContactMessage::from_fields(&fields);
            let response = Request::post(&url)
                .json(&message)
                .map_err(|err| SubmitError::Network(err.to_string()))?
                .send()
                .await
                .map_err(|err| SubmitError::Network(err.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Rejected(response.status()))
            }
        }
    }
}

/// Shows `#successToast` through Bootstrap when it is loaded, otherwise by
/// adding `show` to it.
fn show_success_toast() {
    let Some(toast) = dom::by_id("successToast") else {
        return;
    };

    if show_with_bootstrap(&toast).is_none() {
        dom::set_class(&toast, "show", true);
    }
}

fn show_with_bootstrap(toast: &Element) -> Option<()> {
    let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() {
        return None;
    }
    let constructor = Reflect::get(&bootstrap, &JsValue::from_str("Toast"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;

    let instance = Reflect::construct(&constructor, &Array::of1(toast)).ok()?;
    let show = Reflect::get(&instance, &JsValue::from_str("show"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    show.call0(&instance).ok()?;
    Some(())
}

fn report_failure(err: &SubmitError) {
    log::error!("contact form submission failed: {err}");
    if let Some(win) = window() {
        let _ = win.alert_with_message(err.alert_message());
    }
}

pub fn mount_contact_form(config: &InteractionConfig) {
    let Some(form) = dom::by_id("contactForm").and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let transport = Transport::from_attribute(form.get_attribute("data-endpoint").as_deref());
    let delay_ms = config.contact_submit_delay_ms;
    let submission = Rc::new(RefCell::new(Submission::default()));
    let submitted = form.clone();

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();

        let controls = dom::query_within(&submitted, CONTROL_SELECTOR);
        let fields = read_fields(&controls);
        let report = validate(&fields);
        mark_fields(&controls, &report);
        if !is_valid(&report) {
            return;
        }

        if !submission.borrow_mut().begin() {
            return;
        }

        let button = dom::query_within(&submitted, ".btn-submit")
            .into_iter()
            .next()
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());
        set_loading(button.as_ref(), true);

        let transport = transport.clone();
        let submission = submission.clone();
        let form = submitted.clone();
        spawn_local(async move {
            let outcome = deliver(transport, fields, delay_ms).await;

            match &outcome {
                Ok(()) => {
                    show_success_toast();
                    form.reset();
                }
                Err(err) => report_failure(err),
            }

            submission.borrow_mut().finish(outcome);
            set_loading(button.as_ref(), false);
        });
    });

    mount_floating_labels();
}

/// Labels inside `.form-group` lift while their control has focus or a value.
fn mount_floating_labels() {
    for group in dom::query_all(".form-group") {
        let Some(control) = dom::query_within(&group, CONTROL_SELECTOR).into_iter().next() else {
            continue;
        };
        let Some(label) = dom::query_within(&group, "label").into_iter().next() else {
            continue;
        };

        {
            let label = label.clone();
            dom::listen(&control, "focus", move |_| lift_label(&label, true));
        }

        let blurred = control.clone();
        dom::listen(&control, "blur", move |_| {
            let filled = dom::control_value(&blurred)
                .map(|value| !value.is_empty())
                .unwrap_or(false);
            lift_label(&label, filled);
        });
    }
}

fn lift_label(label: &Element, lifted: bool) {
    if lifted {
        dom::set_style(label, "transform", LABEL_LIFT_TRANSFORM);
        dom::set_style(label, "color", LABEL_LIFT_COLOR);
    } else {
        dom::set_style(label, "transform", "");
        dom::set_style(label, "color", "");
    }
}
