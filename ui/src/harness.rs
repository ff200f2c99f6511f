//! Synthetic DOM harness.
//!
//! In-memory implementations of the capability seams so the switcher and the
//! page behaviors can be exercised end-to-end from plain host tests: a
//! recorded element tree with just enough selector support for the page's
//! anchors, a hand-fired event source and a manually advanced scheduler.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::dom::{Dom, Rect, RippleSpec};
use crate::core::events::{ClickOpts, ClickPoint, EventSource};
use crate::core::timing::{Scheduler, TimerHandle};
use crate::i18n::Direction;

pub use crate::core::storage::MemoryStore;

/// Handle into the fake tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeElement(usize);

#[derive(Debug, Default, Clone)]
struct NodeState {
    tag: String,
    parent: Option<usize>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    content: String,
    text: String,
    value: String,
    offset_top: f64,
    rect: Rect,
    removed: bool,
}

#[derive(Debug, Default)]
struct DomState {
    nodes: Vec<NodeState>,
    root_attrs: BTreeMap<String, String>,
    body_classes: Vec<String>,
    body_styles: BTreeMap<String, String>,
    injected_css: Vec<String>,
    preloaded: Vec<String>,
    dispatched: Vec<(String, Direction)>,
    scroll_y: f64,
    scrolled_to: Vec<f64>,
    reduced_motion: bool,
}

/// Synthetic document.
#[derive(Debug, Default)]
pub struct FakeDom {
    state: RefCell<DomState>,
}

/// Incremental description of a new fake element.
pub struct FakeElementBuilder<'a> {
    dom: &'a FakeDom,
    node: NodeState,
}

impl<'a> FakeElementBuilder<'a> {
    pub fn id(mut self, id: &str) -> Self {
        self.node.attrs.insert("id".to_string(), id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.node.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.node.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn content(mut self, html: &str) -> Self {
        self.node.content = html.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.node.text = text.to_string();
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.node
            .styles
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn parent(mut self, parent: &FakeElement) -> Self {
        self.node.parent = Some(parent.0);
        self
    }

    pub fn offset_top(mut self, top: f64) -> Self {
        self.node.offset_top = top;
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.node.rect = rect;
        self
    }

    pub fn insert(self) -> FakeElement {
        let mut state = self.dom.state.borrow_mut();
        state.nodes.push(self.node);
        FakeElement(state.nodes.len() - 1)
    }
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start describing a new element.
    pub fn element(&self, tag: &str) -> FakeElementBuilder<'_> {
        FakeElementBuilder {
            dom: self,
            node: NodeState {
                tag: tag.to_ascii_uppercase(),
                ..NodeState::default()
            },
        }
    }

    pub fn set_reduced_motion(&self, on: bool) {
        self.state.borrow_mut().reduced_motion = on;
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
    }

    // Inspection helpers for assertions.

    pub fn root_attr(&self, name: &str) -> Option<String> {
        self.state.borrow().root_attrs.get(name).cloned()
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.state.borrow().body_classes.iter().any(|c| c == class)
    }

    pub fn body_style(&self, property: &str) -> Option<String> {
        self.state.borrow().body_styles.get(property).cloned()
    }

    pub fn dispatched_events(&self) -> Vec<(String, Direction)> {
        self.state.borrow().dispatched.clone()
    }

    pub fn preloaded_images(&self) -> Vec<String> {
        self.state.borrow().preloaded.clone()
    }

    pub fn injected_css(&self) -> Vec<String> {
        self.state.borrow().injected_css.clone()
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        self.state.borrow().scrolled_to.clone()
    }

    pub fn value(&self, el: &FakeElement) -> String {
        self.state.borrow().nodes[el.0].value.clone()
    }

    pub fn is_removed(&self, el: &FakeElement) -> bool {
        self.state.borrow().nodes[el.0].removed
    }

    /// Stable dump of the whole document state, for idempotence checks.
    pub fn snapshot(&self) -> String {
        format!("{:?}", self.state.borrow())
    }

    fn matches(node: &NodeState, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .any(|sel| Self::matches_simple(node, sel))
    }

    // Supports the selector shapes the page actually uses: `#id`, `.class`,
    // `[attr]` and bare tag names.
    fn matches_simple(node: &NodeState, sel: &str) -> bool {
        if let Some(id) = sel.strip_prefix('#') {
            node.attrs.get("id").map(String::as_str) == Some(id)
        } else if let Some(class) = sel.strip_prefix('.') {
            node.classes.iter().any(|c| c == class)
        } else if let Some(rest) = sel.strip_prefix('[') {
            rest.strip_suffix(']')
                .is_some_and(|name| node.attrs.contains_key(name))
        } else {
            node.tag.eq_ignore_ascii_case(sel)
        }
    }

    fn is_descendant(state: &DomState, node: usize, root: usize) -> bool {
        let mut cursor = state.nodes[node].parent;
        while let Some(parent) = cursor {
            if parent == root {
                return true;
            }
            cursor = state.nodes[parent].parent;
        }
        false
    }
}

impl Dom for FakeDom {
    type El = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let state = self.state.borrow();
        state
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.removed && Self::matches(node, selector))
            .map(|(i, _)| FakeElement(i))
            .collect()
    }

    fn query_within(&self, root: &FakeElement, selector: &str) -> Vec<FakeElement> {
        let state = self.state.borrow();
        state
            .nodes
            .iter()
            .enumerate()
            .filter(|(i, node)| {
                !node.removed
                    && Self::matches(node, selector)
                    && Self::is_descendant(&state, *i, root.0)
            })
            .map(|(i, _)| FakeElement(i))
            .collect()
    }

    fn attr(&self, el: &FakeElement, name: &str) -> Option<String> {
        self.state.borrow().nodes[el.0].attrs.get(name).cloned()
    }

    fn set_attr(&self, el: &FakeElement, name: &str, value: &str) {
        self.state.borrow_mut().nodes[el.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn has_attr(&self, el: &FakeElement, name: &str) -> bool {
        self.state.borrow().nodes[el.0].attrs.contains_key(name)
    }

    fn content(&self, el: &FakeElement) -> String {
        self.state.borrow().nodes[el.0].content.clone()
    }

    fn set_content(&self, el: &FakeElement, html: &str) {
        self.state.borrow_mut().nodes[el.0].content = html.to_string();
    }

    fn text(&self, el: &FakeElement) -> String {
        self.state.borrow().nodes[el.0].text.clone()
    }

    fn set_text(&self, el: &FakeElement, text: &str) {
        self.state.borrow_mut().nodes[el.0].text = text.to_string();
    }

    fn set_value(&self, el: &FakeElement, value: &str) {
        self.state.borrow_mut().nodes[el.0].value = value.to_string();
    }

    fn tag_name(&self, el: &FakeElement) -> String {
        self.state.borrow().nodes[el.0].tag.clone()
    }

    fn add_class(&self, el: &FakeElement, class: &str) {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, el: &FakeElement, class: &str) {
        self.state.borrow_mut().nodes[el.0]
            .classes
            .retain(|c| c != class);
    }

    fn toggle_class(&self, el: &FakeElement, class: &str) {
        if self.has_class(el, class) {
            self.remove_class(el, class);
        } else {
            self.add_class(el, class);
        }
    }

    fn has_class(&self, el: &FakeElement, class: &str) -> bool {
        self.state.borrow().nodes[el.0].classes.iter().any(|c| c == class)
    }

    fn set_style(&self, el: &FakeElement, property: &str, value: &str) {
        self.state.borrow_mut().nodes[el.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn style(&self, el: &FakeElement, property: &str) -> Option<String> {
        self.state.borrow().nodes[el.0].styles.get(property).cloned()
    }

    fn contains(&self, root: &FakeElement, target: &FakeElement) -> bool {
        root.0 == target.0 || Self::is_descendant(&self.state.borrow(), target.0, root.0)
    }

    fn set_root_attr(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .root_attrs
            .insert(name.to_string(), value.to_string());
    }

    fn set_body_class(&self, class: &str, on: bool) {
        let mut state = self.state.borrow_mut();
        state.body_classes.retain(|c| c != class);
        if on {
            state.body_classes.push(class.to_string());
        }
    }

    fn set_body_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .body_styles
            .insert(property.to_string(), value.to_string());
    }

    fn inject_stylesheet(&self, css: &str) {
        self.state.borrow_mut().injected_css.push(css.to_string());
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn scroll_to(&self, top: f64) {
        self.state.borrow_mut().scrolled_to.push(top);
    }

    fn offset_top(&self, el: &FakeElement) -> f64 {
        self.state.borrow().nodes[el.0].offset_top
    }

    fn bounding_rect(&self, el: &FakeElement) -> Rect {
        self.state.borrow().nodes[el.0].rect
    }

    fn append_ripple(&self, host: &FakeElement, spec: &RippleSpec) -> Option<FakeElement> {
        let overlay = self
            .element("span")
            .class("ripple")
            .parent(host)
            .style("width", &format!("{}px", spec.size))
            .style("height", &format!("{}px", spec.size))
            .style("left", &format!("{}px", spec.left))
            .style("top", &format!("{}px", spec.top))
            .insert();
        Some(overlay)
    }

    fn remove(&self, el: &FakeElement) {
        self.state.borrow_mut().nodes[el.0].removed = true;
    }

    fn preload_image(&self, url: &str) {
        self.state.borrow_mut().preloaded.push(url.to_string());
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.state.borrow().reduced_motion
    }

    fn dispatch_language_changed(&self, code: &str, dir: Direction) {
        self.state
            .borrow_mut()
            .dispatched
            .push((code.to_string(), dir));
    }
}

type ClickHandler = Box<dyn FnMut(ClickPoint)>;

struct ObserverRecord {
    observed: Vec<FakeElement>,
    threshold: f64,
    root_margin: String,
    handler: Box<dyn FnMut(FakeElement)>,
}

#[derive(Default)]
struct EventsState {
    scroll: Vec<Box<dyn FnMut(f64)>>,
    clicks: Vec<(FakeElement, ClickOpts, ClickHandler)>,
    document_clicks: Vec<Box<dyn FnMut(Option<FakeElement>)>>,
    changes: Vec<(FakeElement, Box<dyn FnMut(String)>)>,
    observers: Vec<ObserverRecord>,
}

/// Hand-fired event source.
///
/// Dispatch is explicit: `click` fires only the element's own handlers, and
/// simulating a click outside some container means calling `document_click`
/// with the target. Handlers run in registration order.
#[derive(Default)]
pub struct FakeEvents {
    state: RefCell<EventsState>,
}

impl FakeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire_scroll(&self, y: f64) {
        let mut handlers = std::mem::take(&mut self.state.borrow_mut().scroll);
        for handler in handlers.iter_mut() {
            handler(y);
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.scroll);
        state.scroll = handlers;
        state.scroll.extend(added);
    }

    pub fn click(&self, el: &FakeElement) {
        self.click_at(el, ClickPoint::default());
    }

    pub fn click_at(&self, el: &FakeElement, point: ClickPoint) {
        let mut clicks = std::mem::take(&mut self.state.borrow_mut().clicks);
        for (target, _, handler) in clicks.iter_mut() {
            if *target == *el {
                handler(point);
            }
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.clicks);
        state.clicks = clicks;
        state.clicks.extend(added);
    }

    pub fn document_click(&self, target: Option<&FakeElement>) {
        let mut handlers = std::mem::take(&mut self.state.borrow_mut().document_clicks);
        for handler in handlers.iter_mut() {
            handler(target.copied());
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.document_clicks);
        state.document_clicks = handlers;
        state.document_clicks.extend(added);
    }

    pub fn change(&self, el: &FakeElement, value: &str) {
        let mut changes = std::mem::take(&mut self.state.borrow_mut().changes);
        for (target, handler) in changes.iter_mut() {
            if *target == *el {
                handler(value.to_string());
            }
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.changes);
        state.changes = changes;
        state.changes.extend(added);
    }

    /// Report an observed element as intersecting the viewport.
    pub fn reveal(&self, el: &FakeElement) {
        let mut observers = std::mem::take(&mut self.state.borrow_mut().observers);
        for record in observers.iter_mut() {
            if record.observed.contains(el) {
                (record.handler)(*el);
            }
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.observers);
        state.observers = observers;
        state.observers.extend(added);
    }

    pub fn scroll_handler_count(&self) -> usize {
        self.state.borrow().scroll.len()
    }

    pub fn click_handler_count(&self, el: &FakeElement) -> usize {
        self.state
            .borrow()
            .clicks
            .iter()
            .filter(|(target, _, _)| target == el)
            .count()
    }

    pub fn total_click_handlers(&self) -> usize {
        self.state.borrow().clicks.len()
    }

    pub fn change_handler_count(&self) -> usize {
        self.state.borrow().changes.len()
    }

    /// (threshold, root margin) of each registered visibility observation.
    pub fn observer_configs(&self) -> Vec<(f64, String)> {
        self.state
            .borrow()
            .observers
            .iter()
            .map(|record| (record.threshold, record.root_margin.clone()))
            .collect()
    }
}

impl EventSource<FakeDom> for FakeEvents {
    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>) {
        self.state.borrow_mut().scroll.push(handler);
    }

    fn on_click(&self, el: &FakeElement, opts: ClickOpts, handler: Box<dyn FnMut(ClickPoint)>) {
        self.state.borrow_mut().clicks.push((*el, opts, handler));
    }

    fn on_document_click(&self, handler: Box<dyn FnMut(Option<FakeElement>)>) {
        self.state.borrow_mut().document_clicks.push(handler);
    }

    fn on_change(&self, el: &FakeElement, handler: Box<dyn FnMut(String)>) {
        self.state.borrow_mut().changes.push((*el, handler));
    }

    fn observe_first_visible(
        &self,
        els: &[FakeElement],
        threshold: f64,
        root_margin: &str,
        handler: Box<dyn FnMut(FakeElement)>,
    ) {
        self.state.borrow_mut().observers.push(ObserverRecord {
            observed: els.to_vec(),
            threshold,
            root_margin: root_margin.to_string(),
            handler,
        });
    }
}

struct IntervalSlot {
    period_ms: u32,
    live: Rc<Cell<bool>>,
    tick: Box<dyn FnMut()>,
}

#[derive(Default)]
struct SchedulerState {
    timeouts: Vec<(u32, Box<dyn FnOnce()>)>,
    intervals: Vec<IntervalSlot>,
}

/// Manually advanced scheduler.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<SchedulerState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every pending one-shot, in registration order, including any that
    /// get scheduled while draining.
    pub fn run_timeouts(&self) {
        loop {
            let pending = std::mem::take(&mut self.state.borrow_mut().timeouts);
            if pending.is_empty() {
                break;
            }
            for (_, f) in pending {
                f();
            }
        }
    }

    /// Delays of the currently pending one-shots.
    pub fn pending_timeouts(&self) -> Vec<u32> {
        self.state
            .borrow()
            .timeouts
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Fire every live repeating timer once.
    pub fn tick(&self) {
        let mut slots = std::mem::take(&mut self.state.borrow_mut().intervals);
        for slot in slots.iter_mut() {
            if slot.live.get() {
                (slot.tick)();
            }
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.intervals);
        state.intervals = slots;
        state.intervals.extend(added);
    }

    /// Periods of the repeating timers that are still live.
    pub fn live_intervals(&self) -> Vec<u32> {
        self.state
            .borrow()
            .intervals
            .iter()
            .filter(|slot| slot.live.get())
            .map(|slot| slot.period_ms)
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) {
        self.state.borrow_mut().timeouts.push((delay_ms, f));
    }

    fn every(&self, period_ms: u32, f: Box<dyn FnMut()>) -> TimerHandle {
        let live = Rc::new(Cell::new(true));
        self.state.borrow_mut().intervals.push(IntervalSlot {
            period_ms,
            live: Rc::clone(&live),
            tick: f,
        });
        TimerHandle::new(move || live.set(false))
    }
}
