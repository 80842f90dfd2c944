//! Interactivity for the portfolio page.
//!
//! Every behaviour is a plain state machine or function in one of the
//! platform-independent modules below; `frontend` (wasm32 only) binds them to
//! the DOM.

pub mod config;
pub mod contact;
pub mod counter;
pub mod easter_eggs;
pub mod loading;
pub mod navigation;
pub mod particles;
pub mod scroll;
pub mod tabs;
pub mod text_reveal;
pub mod theme;
pub mod typewriter;
pub mod viewport;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::InteractionConfig;
pub use theme::Theme;
