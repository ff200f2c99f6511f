//! Click-driven navigation: mobile menu toggle and smooth-scroll links.

use std::rc::Rc;

use crate::core::dom::Dom;
use crate::core::events::{ClickOpts, EventSource};

use super::scroll;

pub(super) fn wire<D, E>(dom: &Rc<D>, events: &E)
where
    D: Dom + 'static,
    E: EventSource<D>,
{
    let toggle = dom
        .query("#mobile-menu-btn")
        .or_else(|| dom.query("#mobileMenuToggle"));
    let nav = dom.query("#nav");

    if let (Some(toggle_el), Some(nav_el)) = (toggle.clone(), nav.clone()) {
        let dom = Rc::clone(dom);
        let button = toggle_el.clone();
        events.on_click(
            &toggle_el,
            ClickOpts::default(),
            Box::new(move |_| {
                dom.toggle_class(&nav_el, "active");
                dom.toggle_class(&button, "active");
            }),
        );
    }

    for link in dom.query_all(".nav-link") {
        let dom = Rc::clone(dom);
        let link_el = link.clone();
        let toggle = toggle.clone();
        let nav = nav.clone();
        events.on_click(
            &link,
            ClickOpts {
                prevent_default: true,
                ..ClickOpts::default()
            },
            Box::new(move |_| {
                if let Some(target) = dom
                    .attr(&link_el, "href")
                    .and_then(|href| dom.query(&href))
                {
                    dom.scroll_to(scroll::smooth_scroll_target(dom.offset_top(&target)));
                }

                // Collapse the mobile menu after navigating.
                if let Some(nav) = &nav {
                    dom.remove_class(nav, "active");
                }
                if let Some(toggle) = &toggle {
                    dom.remove_class(toggle, "active");
                }

                for other in dom.query_all(".nav-link") {
                    dom.remove_class(&other, "active");
                }
                dom.add_class(&link_el, "active");
            }),
        );
    }
}
