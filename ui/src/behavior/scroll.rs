//! Scroll-driven behaviors: sticky header, section scroll-spy, parallax.

use std::rc::Rc;

use crate::core::dom::Dom;
use crate::core::events::EventSource;

/// Vertical offset past which the header collapses into its sticky state.
pub const STICKY_THRESHOLD_PX: f64 = 50.0;

/// Fixed-header allowance subtracted from smooth-scroll targets.
pub const HEADER_ALLOWANCE_PX: f64 = 80.0;

/// Lookahead applied when deciding which section owns the viewport.
pub const SPY_LOOKAHEAD_PX: f64 = 100.0;

/// Fraction of the scroll offset applied to parallax backgrounds.
pub const PARALLAX_SPEED: f64 = 0.5;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD_PX
}

pub fn smooth_scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_ALLOWANCE_PX
}

/// Id of the section owning the viewport: the last one, in document order,
/// whose top minus the lookahead has been reached.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [(String, f64)]) -> Option<&'a str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - SPY_LOOKAHEAD_PX {
            current = Some(id.as_str());
        }
    }
    current
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_SPEED
}

pub(super) fn wire<D, E>(dom: &Rc<D>, events: &E)
where
    D: Dom + 'static,
    E: EventSource<D>,
{
    // Sticky header.
    if let Some(header) = dom.query("#header") {
        let dom = Rc::clone(dom);
        events.on_scroll(Box::new(move |y| {
            if header_is_scrolled(y) {
                dom.add_class(&header, "scrolled");
            } else {
                dom.remove_class(&header, "scrolled");
            }
        }));
    }

    // Scroll-spy over sections carrying an id.
    {
        let dom = Rc::clone(dom);
        events.on_scroll(Box::new(move |y| {
            let sections: Vec<(String, f64)> = dom
                .query_all("section")
                .into_iter()
                .filter_map(|el| dom.attr(&el, "id").map(|id| (id, dom.offset_top(&el))))
                .collect();
            let current = active_section(y, &sections);

            for link in dom.query_all(".nav-link") {
                dom.remove_class(&link, "active");
                if let (Some(current), Some(href)) = (current, dom.attr(&link, "href")) {
                    if href == format!("#{current}") {
                        dom.add_class(&link, "active");
                    }
                }
            }
        }));
    }

    // Parallax backgrounds.
    {
        let dom = Rc::clone(dom);
        events.on_scroll(Box::new(move |y| {
            let offset = parallax_offset(y);
            for el in dom.query_all(".animated-bg") {
                dom.set_style(&el, "transform", &format!("translateY({offset}px)"));
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_collapses_past_the_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.1));
        assert!(header_is_scrolled(400.0));
    }

    #[test]
    fn smooth_scroll_allows_for_the_fixed_header() {
        assert_eq!(smooth_scroll_target(600.0), 520.0);
        assert_eq!(smooth_scroll_target(0.0), -80.0);
    }

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("sports".to_string(), 600.0),
            ("stories".to_string(), 1400.0),
        ]
    }

    #[test]
    fn spy_boundary_is_inclusive_at_top_minus_lookahead() {
        // Exactly at 600 - 100 the sports section takes over.
        assert_eq!(active_section(500.0, &sections()), Some("sports"));
        // One pixel above it does not.
        assert_eq!(active_section(499.0, &sections()), Some("home"));
    }

    #[test]
    fn last_qualifying_section_wins() {
        assert_eq!(active_section(5000.0, &sections()), Some("stories"));
    }

    #[test]
    fn no_section_qualifies_above_the_first_threshold() {
        let below_fold = vec![("sports".to_string(), 600.0)];
        assert_eq!(active_section(0.0, &below_fold), None);
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(100.0), 50.0);
        assert_eq!(parallax_offset(0.0), 0.0);
    }
}
