//! Loading screen timeline, measured from the window `load` event.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStep {
    /// Add `hidden` and start the deferred animations in the same tick.
    Reveal,
    /// Drop the faded-out node.
    Remove,
}

/// Steps with their offsets in milliseconds, in firing order.
pub fn loading_schedule(delay_ms: u32, fade_ms: u32) -> [(u32, LoadingStep); 2] {
    [
        (delay_ms, LoadingStep::Reveal),
        (delay_ms.saturating_add(fade_ms), LoadingStep::Remove),
    ]
}
