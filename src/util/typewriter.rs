//! Cyclic typewriter text animation.
//!
//! [`TypewriterCore`] is the browser-free state machine: it cycles through an
//! ordered string list forever, typing one character per tick at the type
//! speed, holding on the complete word, then deleting one character per tick
//! at the back speed. [`Typewriter`] drives the core against a DOM element
//! with self-rescheduling one-shot timers; dropping or stopping it cancels
//! the pending timer so a detached view is never written to.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Milliseconds per typed character.
pub const TYPE_SPEED_MS: u32 = 70;

/// Milliseconds per deleted character.
pub const BACK_SPEED_MS: u32 = 40;

/// Hold on the fully-typed word before deleting begins.
pub const HOLD_MS: u32 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// The typewriter state machine.
#[derive(Clone, Debug)]
pub struct TypewriterCore {
    strings: Vec<String>,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl TypewriterCore {
    #[must_use]
    pub fn new<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// The text currently on display.
    #[must_use]
    pub fn current(&self) -> &str {
        let Some(word) = self.strings.get(self.word) else {
            return "";
        };
        let end = word
            .char_indices()
            .nth(self.shown)
            .map_or(word.len(), |(i, _)| i);
        &word[..end]
    }

    /// Delay before the very first tick.
    #[must_use]
    pub fn initial_delay_ms(&self) -> u32 {
        TYPE_SPEED_MS
    }

    /// Advance one tick and return the delay until the next one.
    pub fn advance(&mut self) -> u32 {
        let Some(word_len) = self.strings.get(self.word).map(|w| w.chars().count()) else {
            return HOLD_MS;
        };
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= word_len {
                    self.shown = word_len;
                    self.phase = Phase::Holding;
                    HOLD_MS
                } else {
                    TYPE_SPEED_MS
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                BACK_SPEED_MS
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.strings.len();
                    self.phase = Phase::Typing;
                    TYPE_SPEED_MS
                } else {
                    BACK_SPEED_MS
                }
            }
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use web_sys::HtmlElement;

    use super::TypewriterCore;

    struct Inner {
        core: TypewriterCore,
        el: HtmlElement,
        pending: Option<Timeout>,
    }

    /// Owns the animation over a DOM element. Dropping the handle (or
    /// calling [`Typewriter::stop`]) cancels the pending timer.
    pub struct Typewriter {
        inner: Rc<RefCell<Inner>>,
    }

    impl Typewriter {
        /// Begin animating `strings` into `el`.
        #[must_use]
        pub fn start<I, S>(el: HtmlElement, strings: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let core = TypewriterCore::new(strings);
            let delay = core.initial_delay_ms();
            let inner = Rc::new(RefCell::new(Inner {
                core,
                el,
                pending: None,
            }));
            schedule(&inner, delay);
            Self { inner }
        }

        /// Cancel the pending tick; the display keeps its last text.
        pub fn stop(&self) {
            self.inner.borrow_mut().pending = None;
        }
    }

    impl Drop for Typewriter {
        fn drop(&mut self) {
            self.stop();
        }
    }

    fn schedule(inner: &Rc<RefCell<Inner>>, delay_ms: u32) {
        let tick_inner = Rc::clone(inner);
        let handle = Timeout::new(delay_ms, move || {
            let next_delay = {
                let mut guard = tick_inner.borrow_mut();
                let delay = guard.core.advance();
                let text = guard.core.current().to_owned();
                guard.el.set_text_content(Some(&text));
                delay
            };
            schedule(&tick_inner, next_delay);
        });
        inner.borrow_mut().pending = Some(handle);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::Typewriter;
