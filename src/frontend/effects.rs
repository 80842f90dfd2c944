use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{self, FrameLoop};
use crate::config::InteractionConfig;
use crate::particles::{confetti_burst, particle_count, ConfettiPiece, ParticleField, Viewport};

const PARTICLE_CONTAINER_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; \
     height: 100%; pointer-events: none; z-index: -1; overflow: hidden;";

pub const EFFECT_KEYFRAMES: &str = r#"
@keyframes confetti-fall {
    0% { transform: translateY(-10px) rotate(0deg); opacity: 1; }
    100% { transform: translateY(100vh) rotate(360deg); opacity: 0; }
}

.char {
    display: inline-block;
    opacity: 0;
    animation: charReveal 0.5s ease forwards;
}

@keyframes charReveal {
    0% { opacity: 0; transform: translateY(20px); }
    100% { opacity: 1; transform: translateY(0); }
}

.touch-device .hover-lift:hover,
.touch-device .card:hover {
    transform: none;
}

.mobile-device .floating-shapes {
    opacity: 0.3;
}

.mobile-device .shape {
    animation-duration: 8s;
}
"#;

struct ParticleState {
    field: ParticleField,
}

impl Reducible for ParticleState {
    type Action = Viewport;

    fn reduce(self: Rc<Self>, viewport: Viewport) -> Rc<Self> {
        let mut field = self.field.clone();
        field.step(viewport);
        Rc::new(Self { field })
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleLayerProps {
    pub count: u32,
    pub seed: u64,
}

#[function_component(ParticleLayer)]
pub fn particle_layer(props: &ParticleLayerProps) -> Html {
    let count = props.count;
    let seed = props.seed;
    let state = use_reducer(move || {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        ParticleState {
            field: ParticleField::spawn(&mut rng, count, dom::viewport()),
        }
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let frames = FrameLoop::start(move || dispatcher.dispatch(dom::viewport()));
            move || drop(frames)
        });
    }

    html! {
        <div class="particles-container" style={PARTICLE_CONTAINER_STYLE}>
            { for state.field.particles().iter().map(|particle| html! {
                <div class="particle" style={particle.style()} />
            }) }
        </div>
    }
}

/// Appends a host node to `<body>` and renders the particle field into it.
pub fn start_particles(config: &InteractionConfig) {
    let Some(host) = append_host() else {
        return;
    };

    let count = particle_count(
        dom::viewport().width,
        config.mobile_breakpoint,
        config.particles_mobile,
        config.particles_desktop,
    );
    yew::Renderer::<ParticleLayer>::with_root_and_props(
        host,
        ParticleLayerProps {
            count,
            seed: dom::random_seed(),
        },
    )
    .render();
    log::debug!("particle field started with {count} particles");
}

#[derive(Properties, PartialEq)]
pub struct ConfettiBurstProps {
    pub pieces: Vec<ConfettiPiece>,
}

#[function_component(ConfettiBurst)]
pub fn confetti_burst_view(props: &ConfettiBurstProps) -> Html {
    html! {
        <>
            { for props.pieces.iter().map(|piece| html! {
                <div class="confetti" style={piece.style()} />
            }) }
        </>
    }
}

/// Drops a burst of confetti that cleans itself up after its fall.
pub fn launch_confetti(config: &InteractionConfig) {
    let Some(host) = append_host() else {
        return;
    };

    let mut rng = Pcg64Mcg::seed_from_u64(dom::random_seed());
    let pieces = confetti_burst(&mut rng, config.confetti_count);
    let app = yew::Renderer::<ConfettiBurst>::with_root_and_props(
        host.clone(),
        ConfettiBurstProps { pieces },
    )
    .render();

    Timeout::new(config.confetti_lifetime_ms, move || {
        app.destroy();
        host.remove();
    })
    .forget();
}

/// Rotates the page hue for a few seconds.
pub fn trigger_secret_mode(config: &InteractionConfig) {
    let Some(body) = dom::body() else {
        return;
    };

    dom::set_style(&body, "filter", "hue-rotate(180deg)");
    Timeout::new(config.secret_mode_ms, move || {
        dom::set_style(&body, "filter", "");
    })
    .forget();

    log::info!("secret mode activated: you found the cheat code");
}

fn append_host() -> Option<Element> {
    let document = dom::document()?;
    let host = document.create_element("div").ok()?;
    document.body()?.append_child(&host).ok()?;
    Some(host)
}

pub fn inject_keyframes() -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };
    let Some(head) = document.head() else {
        return Ok(());
    };

    let style = document.create_element("style")?;
    style.set_text_content(Some(EFFECT_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}
