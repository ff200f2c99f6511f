//! web-sys bindings for the page capabilities.
//!
//! Everything here is wasm-only. Handlers and timers registered through
//! these adapters live for the page session: closures are handed over to the
//! JS side with `forget`, and repeating timers are owned by the scheduler
//! until their handle cancels them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, HtmlElement, HtmlImageElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage, Window,
};

use crate::core::dom::{Dom, Rect, RippleSpec};
use crate::core::events::{ClickOpts, ClickPoint, EventSource};
use crate::core::storage::SettingsStore;
use crate::core::timing::{Scheduler, TimerHandle};
use crate::i18n::Direction;

/// Name of the notification event fired after a language switch.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Live browser document.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn html_el(el: &Element) -> Option<&HtmlElement> {
        el.dyn_ref::<HtmlElement>()
    }

    fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
        let mut out = Vec::new();
        if let Ok(list) = list {
            for i in 0..list.length() {
                if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    out.push(el);
                }
            }
        }
        out
    }
}

impl Dom for WebDom {
    type El = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        Self::collect(self.document.query_selector_all(selector))
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        Self::collect(root.query_selector_all(selector))
    }

    fn attr(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attr(&self, el: &Element, name: &str, value: &str) {
        let _ = el.set_attribute(name, value);
    }

    fn has_attr(&self, el: &Element, name: &str) -> bool {
        el.has_attribute(name)
    }

    fn content(&self, el: &Element) -> String {
        el.inner_html()
    }

    fn set_content(&self, el: &Element, html: &str) {
        el.set_inner_html(html);
    }

    fn text(&self, el: &Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_value(&self, el: &Element, value: &str) {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn tag_name(&self, el: &Element) -> String {
        el.tag_name()
    }

    fn add_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn toggle_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().toggle(class);
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        if let Some(html) = Self::html_el(el) {
            let _ = html.style().set_property(property, value);
        }
    }

    fn style(&self, el: &Element, property: &str) -> Option<String> {
        Self::html_el(el)
            .and_then(|html| html.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn contains(&self, root: &Element, target: &Element) -> bool {
        root.contains(target.dyn_ref::<web_sys::Node>())
    }

    fn set_root_attr(&self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(name, value);
        }
    }

    fn set_body_class(&self, class: &str, on: bool) {
        if let Some(body) = self.document.body() {
            if on {
                let _ = body.class_list().add_1(class);
            } else {
                let _ = body.class_list().remove_1(class);
            }
        }
    }

    fn set_body_style(&self, property: &str, value: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property(property, value);
        }
    }

    fn inject_stylesheet(&self, css: &str) {
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        style.set_text_content(Some(css));
        if let Some(head) = self.document.head() {
            let _ = head.append_child(&style);
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn offset_top(&self, el: &Element) -> f64 {
        Self::html_el(el)
            .map(|html| html.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn bounding_rect(&self, el: &Element) -> Rect {
        let rect = el.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn append_ripple(&self, host: &Element, spec: &RippleSpec) -> Option<Element> {
        let overlay = self.document.create_element("span").ok()?;
        let _ = overlay.set_attribute("class", "ripple");
        if let Some(html) = Self::html_el(&overlay) {
            let style = html.style();
            let _ = style.set_property("width", &format!("{}px", spec.size));
            let _ = style.set_property("height", &format!("{}px", spec.size));
            let _ = style.set_property("left", &format!("{}px", spec.left));
            let _ = style.set_property("top", &format!("{}px", spec.top));
        }
        host.append_child(&overlay).ok()?;
        Some(overlay)
    }

    fn remove(&self, el: &Element) {
        el.remove();
    }

    fn preload_image(&self, url: &str) {
        if let Ok(img) = HtmlImageElement::new() {
            img.set_src(url);
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|list| list.matches())
            .unwrap_or(false)
    }

    fn dispatch_language_changed(&self, code: &str, dir: Direction) {
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("language"),
            &JsValue::from_str(code),
        );
        let _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("dir"),
            &JsValue::from_str(dir.as_str()),
        );
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init) {
            let _ = self.window.dispatch_event(&event);
        }
    }
}

/// Browser event registration.
pub struct WebEvents {
    window: Window,
    document: Document,
}

impl WebEvents {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl EventSource<WebDom> for WebEvents {
    fn on_scroll(&self, mut handler: Box<dyn FnMut(f64)>) {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            handler(window.page_y_offset().unwrap_or(0.0));
        });
        let _ = self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_click(&self, el: &Element, opts: ClickOpts, mut handler: Box<dyn FnMut(ClickPoint)>) {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if opts.prevent_default {
                event.prevent_default();
            }
            if opts.stop_propagation {
                event.stop_propagation();
            }
            handler(ClickPoint {
                client_x: event.client_x() as f64,
                client_y: event.client_y() as f64,
            });
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_document_click(&self, mut handler: Box<dyn FnMut(Option<Element>)>) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            handler(event.target().and_then(|t| t.dyn_into::<Element>().ok()));
        });
        let _ = self
            .document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_change(&self, el: &Element, mut handler: Box<dyn FnMut(String)>) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let value = event.target().and_then(|target| {
                let el: Element = target.dyn_into().ok()?;
                if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
                    Some(select.value())
                } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                    Some(input.value())
                } else {
                    None
                }
            });
            if let Some(value) = value {
                handler(value);
            }
        });
        let _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn observe_first_visible(
        &self,
        els: &[Element],
        threshold: f64,
        root_margin: &str,
        mut handler: Box<dyn FnMut(Element)>,
    ) {
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        handler(entry.target());
                    }
                }
            },
        );

        let opts = IntersectionObserverInit::new();
        opts.set_threshold(&JsValue::from_f64(threshold));
        opts.set_root_margin(root_margin);

        if let Ok(observer) =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &opts)
        {
            for el in els {
                observer.observe(el);
            }
        }
        closure.forget();
    }
}

/// localStorage-backed settings.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            let _ = s.set_item(key, value);
        }
    }
}

/// gloo-timers scheduler. Repeating timers are owned here for the page
/// lifetime; a cancelled handle drops its interval.
#[derive(Default)]
pub struct WebScheduler {
    intervals: RefCell<Vec<Rc<RefCell<Option<Interval>>>>>,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for WebScheduler {
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, f).forget();
    }

    fn every(&self, period_ms: u32, mut f: Box<dyn FnMut()>) -> TimerHandle {
        let slot = Rc::new(RefCell::new(Some(Interval::new(period_ms, move || f()))));
        self.intervals.borrow_mut().push(Rc::clone(&slot));
        TimerHandle::new(move || {
            slot.borrow_mut().take();
        })
    }
}
