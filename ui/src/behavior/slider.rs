//! Timed hero background rotation.

use std::rc::Rc;

use crate::core::dom::Dom;
use crate::core::timing::{Scheduler, TimerHandle};

/// Pause between slides.
pub const SLIDE_INTERVAL_MS: u32 = 6000;

pub const ACTIVE_CLASS: &str = "active";

/// Wrapping slide cursor. Only exists for decks with at least two slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideLoop {
    current: usize,
    len: usize,
}

/// One rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStep {
    pub prev: usize,
    pub next: usize,
}

impl SlideLoop {
    pub fn new(len: usize) -> Option<Self> {
        (len >= 2).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn advance(&mut self) -> SlideStep {
        let prev = self.current;
        let next = (self.current + 1) % self.len;
        self.current = next;
        SlideStep { prev, next }
    }
}

/// Extract the URL from an inline `background-image` style value.
pub fn background_url(style_value: &str) -> Option<String> {
    let start = style_value.find("url(")? + 4;
    let rest = &style_value[start..];
    let end = rest.find(')')?;
    let url = rest[..end].trim().trim_matches(|c| c == '"' || c == '\'');
    (!url.is_empty()).then(|| url.to_string())
}

/// Start the rotation when the deck and the user's motion preference allow
/// it. Slide images are preloaded up front so swaps never flash.
pub(super) fn wire<D, T>(dom: &Rc<D>, timers: &Rc<T>) -> Option<TimerHandle>
where
    D: Dom + 'static,
    T: Scheduler + 'static,
{
    let slider = dom.query("#hero-slider")?;
    let slides = dom.query_within(&slider, ".hero-slide");
    let mut cursor = SlideLoop::new(slides.len())?;

    if dom.prefers_reduced_motion() {
        return None;
    }

    for slide in &slides {
        if let Some(url) = dom
            .style(slide, "background-image")
            .as_deref()
            .and_then(background_url)
        {
            dom.preload_image(&url);
        }
    }

    let dom = Rc::clone(dom);
    Some(timers.every(
        SLIDE_INTERVAL_MS,
        Box::new(move || {
            let step = cursor.advance();
            dom.remove_class(&slides[step.prev], ACTIVE_CLASS);
            dom.add_class(&slides[step.next], ACTIVE_CLASS);
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slide_decks_do_not_rotate() {
        assert!(SlideLoop::new(0).is_none());
        assert!(SlideLoop::new(1).is_none());
        assert!(SlideLoop::new(2).is_some());
    }

    #[test]
    fn rotation_wraps_around_the_deck() {
        let mut cursor = SlideLoop::new(3).expect("three slides");
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.advance(), SlideStep { prev: 0, next: 1 });
        assert_eq!(cursor.advance(), SlideStep { prev: 1, next: 2 });
        assert_eq!(cursor.advance(), SlideStep { prev: 2, next: 0 });
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn background_url_handles_all_quote_styles() {
        assert_eq!(
            background_url("url(\"/img/a.jpg\")").as_deref(),
            Some("/img/a.jpg")
        );
        assert_eq!(
            background_url("url('/img/b.jpg')").as_deref(),
            Some("/img/b.jpg")
        );
        assert_eq!(
            background_url("url(/img/c.jpg)").as_deref(),
            Some("/img/c.jpg")
        );
    }

    #[test]
    fn background_url_rejects_non_urls() {
        assert_eq!(background_url("none"), None);
        assert_eq!(background_url("url()"), None);
        assert_eq!(background_url(""), None);
    }
}
