//! Page-wide presentation behaviors.
//!
//! Independent DOM-event handlers: sticky header, mobile nav, smooth-scroll
//! navigation with scroll-spy, fade-in reveals, button ripples, parallax
//! backgrounds and the hero background slider. Every anchor lookup is
//! guarded; absent markup skips its wiring silently.

pub mod legacy;
pub mod nav;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod slider;

use std::rc::Rc;

use crate::core::dom::Dom;
use crate::core::events::EventSource;
use crate::core::storage::SettingsStore;
use crate::core::timing::{Scheduler, TimerHandle};

/// Handles to behaviors that keep running after mount.
#[derive(Debug, Default)]
pub struct PageHandles {
    /// Rotation timer for the hero slider, when one was started.
    pub slider: Option<TimerHandle>,
}

/// Wire every page behavior. The returned handles belong to the page
/// session.
pub fn mount<D, E, S, T>(dom: &Rc<D>, events: &E, store: &Rc<S>, timers: &Rc<T>) -> PageHandles
where
    D: Dom + 'static,
    E: EventSource<D>,
    S: SettingsStore + 'static,
    T: Scheduler + 'static,
{
    scroll::wire(dom, events);
    nav::wire(dom, events);
    reveal::wire(dom, events);
    ripple::wire(dom, events, timers);
    legacy::wire(dom, events, store);

    PageHandles {
        slider: slider::wire(dom, timers),
    }
}
