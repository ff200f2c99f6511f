//! Click ripples on buttons.

use std::rc::Rc;

use crate::core::dom::{Dom, Rect, RippleSpec};
use crate::core::events::{ClickOpts, ClickPoint, EventSource};
use crate::core::timing::Scheduler;

/// Lifetime of a ripple overlay, matching its keyframe animation.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Styles backing the ripple overlay; injected once at wiring time.
pub const RIPPLE_CSS: &str = "\
.btn {
    position: relative;
    overflow: hidden;
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
";

/// Overlay sized to the larger button dimension and centered on the click.
pub fn spec_for_click(rect: &Rect, click: &ClickPoint) -> RippleSpec {
    let size = rect.width.max(rect.height);
    RippleSpec {
        size,
        left: click.client_x - rect.left - size / 2.0,
        top: click.client_y - rect.top - size / 2.0,
    }
}

pub(super) fn wire<D, E, T>(dom: &Rc<D>, events: &E, timers: &Rc<T>)
where
    D: Dom + 'static,
    E: EventSource<D>,
    T: Scheduler + 'static,
{
    let buttons = dom.query_all(".btn");
    if buttons.is_empty() {
        return;
    }
    dom.inject_stylesheet(RIPPLE_CSS);

    for button in buttons {
        let dom = Rc::clone(dom);
        let timers = Rc::clone(timers);
        let button_el = button.clone();
        events.on_click(
            &button,
            ClickOpts::default(),
            Box::new(move |click| {
                let rect = dom.bounding_rect(&button_el);
                let spec = spec_for_click(&rect, &click);
                if let Some(overlay) = dom.append_ripple(&button_el, &spec) {
                    let dom = Rc::clone(&dom);
                    timers.after(RIPPLE_LIFETIME_MS, Box::new(move || dom.remove(&overlay)));
                }

                #[cfg(debug_assertions)]
                crate::core::console::log(&format!(
                    "Button clicked: {}",
                    dom.text(&button_el).trim()
                ));
            }),
        );
    }
}
