//! Whole page session: switcher initialization, dropdown and behaviors
//! started together against the synthetic harness.

use std::rc::Rc;

use ui::core::dom::Dom;
use ui::harness::{FakeDom, FakeEvents, ManualScheduler, MemoryStore};
use ui::i18n::TranslationRegistry;
use ui::session::PageSession;

#[test]
fn session_start_wires_the_language_layer_and_the_behaviors() {
    let dom = Rc::new(FakeDom::new());

    // Enough of the page for every subsystem to find its anchors.
    dom.element("header").id("header").insert();
    let greeting = dom
        .element("h1")
        .attr("data-i18n", "hero-title")
        .content("placeholder")
        .insert();
    let dropdown = dom.element("div").id("language-dropdown").insert();
    dom.element("button")
        .class("dropdown-trigger")
        .parent(&dropdown)
        .insert();
    dom.element("ul")
        .class("dropdown-menu")
        .parent(&dropdown)
        .insert();
    dom.element("a")
        .class("dropdown-item")
        .attr("data-lang", "ar")
        .parent(&dropdown)
        .insert();
    let slider = dom.element("div").id("hero-slider").insert();
    dom.element("div")
        .class("hero-slide")
        .class("active")
        .parent(&slider)
        .insert();
    dom.element("div").class("hero-slide").parent(&slider).insert();

    let events = FakeEvents::new();
    let store = Rc::new(MemoryStore::new());
    let timers = Rc::new(ManualScheduler::new());

    let mut session = PageSession::start(
        TranslationRegistry::embedded(),
        Rc::clone(&dom),
        &events,
        Rc::clone(&store),
        Rc::clone(&timers),
    );

    // Language applied from the embedded fallback.
    assert_eq!(dom.root_attr("lang").as_deref(), Some("en"));
    assert_eq!(dom.content(&greeting), "Discover. Connect. Succeed.");
    assert_eq!(session.switcher().current_code(), "en");

    // Dropdown and behaviors are live.
    assert!(events.total_click_handlers() > 0);
    assert_eq!(timers.live_intervals(), vec![6000]);

    // Rotation is cancellable for headless lifecycles.
    session.stop_slider();
    assert!(timers.live_intervals().is_empty());
}
