//! Abstract document surface the controllers run against.
//!
//! The wasm adapter (`crate::platform::web`) binds this to web-sys; the test
//! harness (`crate::harness`) binds it to a synthetic in-memory tree. Every
//! operation is fail-soft: querying something that is not there yields
//! `None`/empty, and writes against stale handles are ignored.

use crate::i18n::Direction;

/// Rectangle in viewport coordinates, as returned by bounding-rect queries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Position and size of a ripple overlay, relative to its host button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleSpec {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub trait Dom {
    /// Handle to a live element. Cheap to clone, owned (no borrows into the
    /// document).
    type El: Clone + 'static;

    fn query(&self, selector: &str) -> Option<Self::El>;
    /// All matches, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::El>;
    /// All matches within `root`'s subtree, in document order.
    fn query_within(&self, root: &Self::El, selector: &str) -> Vec<Self::El>;

    fn attr(&self, el: &Self::El, name: &str) -> Option<String>;
    fn set_attr(&self, el: &Self::El, name: &str, value: &str);
    fn has_attr(&self, el: &Self::El, name: &str) -> bool;

    /// Rendered content of the element; localized values may carry markup.
    fn content(&self, el: &Self::El) -> String;
    fn set_content(&self, el: &Self::El, html: &str);
    fn text(&self, el: &Self::El) -> String;
    fn set_text(&self, el: &Self::El, text: &str);
    /// Form-control value (`<select>`, `<input>`).
    fn set_value(&self, el: &Self::El, value: &str);

    /// Upper-case tag name, DOM style (`"INPUT"`, `"DIV"`).
    fn tag_name(&self, el: &Self::El) -> String;

    fn add_class(&self, el: &Self::El, class: &str);
    fn remove_class(&self, el: &Self::El, class: &str);
    fn toggle_class(&self, el: &Self::El, class: &str);
    fn has_class(&self, el: &Self::El, class: &str) -> bool;

    fn set_style(&self, el: &Self::El, property: &str, value: &str);
    fn style(&self, el: &Self::El, property: &str) -> Option<String>;

    /// Whether `target` is `root` itself or one of its descendants.
    fn contains(&self, root: &Self::El, target: &Self::El) -> bool;

    // Document-level surface.
    fn set_root_attr(&self, name: &str, value: &str);
    fn set_body_class(&self, class: &str, on: bool);
    fn set_body_style(&self, property: &str, value: &str);
    fn inject_stylesheet(&self, css: &str);

    // Geometry and scrolling.
    fn scroll_y(&self) -> f64;
    /// Smooth-scroll the viewport to a vertical offset.
    fn scroll_to(&self, top: f64);
    fn offset_top(&self, el: &Self::El) -> f64;
    fn bounding_rect(&self, el: &Self::El) -> Rect;

    // Decorations and environment.
    fn append_ripple(&self, host: &Self::El, spec: &RippleSpec) -> Option<Self::El>;
    fn remove(&self, el: &Self::El);
    fn preload_image(&self, url: &str);
    fn prefers_reduced_motion(&self) -> bool;

    /// Page-wide notification fired after a successful language switch.
    fn dispatch_language_changed(&self, code: &str, dir: Direction);
}
