//! Scroll choreography: sticky header, active nav section, reveal stagger.
//!
//! The thresholds here are presentation constants carried over literally
//! from the original design; they have no deeper rationale.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical scroll offset in CSS pixels past which the header is stuck.
pub const STICKY_THRESHOLD_PX: f64 = 100.0;

/// Lookahead margin in CSS pixels when deciding the active section.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 150.0;

/// Delay step between consecutive project-card reveals.
pub const STAGGER_STEP_MS: u32 = 300;

/// Scroll-derived view state, recomputed on every scroll event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Whether the header has adopted the stuck style.
    pub sticky: bool,
    /// Id of the section the viewport is currently scrolled into, if any.
    pub active: Option<String>,
}

impl ScrollState {
    /// Derive the full state from the scroll offset and the `(id, top)`
    /// pairs of all sections in document order.
    #[must_use]
    pub fn recompute(scroll_y: f64, sections: &[(String, f64)]) -> Self {
        Self {
            sticky: is_sticky(scroll_y),
            active: active_section(scroll_y, sections).map(str::to_owned),
        }
    }
}

/// Whether the header is stuck at the given scroll offset.
#[must_use]
pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD_PX
}

/// The id of the active section: the last section in document order whose
/// top, less the lookahead margin, is at or above the scroll offset.
///
/// Returns `None` when no section has been reached yet.
#[must_use]
pub fn active_section<S: AsRef<str>>(scroll_y: f64, sections: &[(S, f64)]) -> Option<&str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - ACTIVE_LOOKAHEAD_PX {
            current = Some(id.as_ref());
        }
    }
    current
}

/// Reveal delay for the `index`-th project card (0-based, document order).
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_STEP_MS)
}
