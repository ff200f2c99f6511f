//! Fade-in-on-visible reveals for animated cards.

use std::rc::Rc;

use crate::core::dom::Dom;
use crate::core::events::EventSource;

/// Card selectors that participate in the reveal animation.
pub const ANIMATED_SELECTOR: &str = ".sport-card, .story-card, .step";

/// Viewport share required before an element counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Bottom margin shrinking the observation root.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

pub(super) fn wire<D, E>(dom: &Rc<D>, events: &E)
where
    D: Dom + 'static,
    E: EventSource<D>,
{
    let els = dom.query_all(ANIMATED_SELECTOR);
    if els.is_empty() {
        return;
    }
    for el in &els {
        dom.add_class(el, FADE_IN_CLASS);
    }

    let dom = Rc::clone(dom);
    events.observe_first_visible(
        &els,
        VISIBILITY_THRESHOLD,
        ROOT_MARGIN,
        Box::new(move |el| {
            // One-way: the class stays once granted.
            dom.add_class(&el, VISIBLE_CLASS);
        }),
    );
}
