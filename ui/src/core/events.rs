//! Explicit event-handler registration against an abstract event source.
//!
//! Handlers registered here live for the rest of the page session; there is
//! deliberately no unsubscribe, matching how the page wires itself once at
//! load.

use super::dom::Dom;

/// Pointer position of a click, viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClickPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// Listener options applied at registration time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickOpts {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

pub trait EventSource<D: Dom> {
    /// Window scroll; the handler receives the current vertical offset.
    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>);

    fn on_click(&self, el: &D::El, opts: ClickOpts, handler: Box<dyn FnMut(ClickPoint)>);

    /// Document-level click; the handler receives the event target, if any.
    fn on_document_click(&self, handler: Box<dyn FnMut(Option<D::El>)>);

    /// `change` on a form control; the handler receives the new value.
    fn on_change(&self, el: &D::El, handler: Box<dyn FnMut(String)>);

    /// One-way visibility observation: the handler fires whenever an observed
    /// element intersects the viewport under the given threshold and root
    /// margin.
    fn observe_first_visible(
        &self,
        els: &[D::El],
        threshold: f64,
        root_margin: &str,
        handler: Box<dyn FnMut(D::El)>,
    );
}
