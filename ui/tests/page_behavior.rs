//! Page behavior controller tests against the synthetic DOM harness.

use std::rc::Rc;

use ui::behavior::{self, PageHandles};
use ui::core::dom::{Dom, Rect};
use ui::core::events::ClickPoint;
use ui::core::storage::{SettingsStore, LEGACY_LANGUAGE_KEY};
use ui::harness::{FakeDom, FakeElement, FakeEvents, ManualScheduler, MemoryStore};

struct Fixture {
    dom: Rc<FakeDom>,
    events: FakeEvents,
    store: Rc<MemoryStore>,
    timers: Rc<ManualScheduler>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dom: Rc::new(FakeDom::new()),
            events: FakeEvents::new(),
            store: Rc::new(MemoryStore::new()),
            timers: Rc::new(ManualScheduler::new()),
        }
    }

    fn mount(&self) -> PageHandles {
        behavior::mount(&self.dom, &self.events, &self.store, &self.timers)
    }

    fn injected_ripple_css(&self) -> bool {
        self.dom
            .injected_css()
            .iter()
            .any(|css| css.contains(".ripple"))
    }
}

#[test]
fn empty_page_mounts_without_wiring_anything_clickable() {
    let fx = Fixture::new();
    fx.mount();

    assert_eq!(fx.events.total_click_handlers(), 0);
    assert_eq!(fx.events.change_handler_count(), 0);
    assert!(fx.timers.live_intervals().is_empty());
    // Scroll-driven handlers are registered up front and tolerate absent
    // anchors per event.
    fx.events.fire_scroll(500.0);
}

#[test]
fn sticky_header_tracks_the_scroll_threshold() {
    let fx = Fixture::new();
    let header = fx.dom.element("header").id("header").insert();
    fx.mount();

    fx.events.fire_scroll(51.0);
    assert!(fx.dom.has_class(&header, "scrolled"));

    fx.events.fire_scroll(50.0);
    assert!(!fx.dom.has_class(&header, "scrolled"));
}

#[test]
fn mobile_toggle_flips_both_active_classes() {
    let fx = Fixture::new();
    let toggle = fx.dom.element("button").id("mobile-menu-btn").insert();
    let nav = fx.dom.element("nav").id("nav").insert();
    fx.mount();

    fx.events.click(&toggle);
    assert!(fx.dom.has_class(&nav, "active"));
    assert!(fx.dom.has_class(&toggle, "active"));

    fx.events.click(&toggle);
    assert!(!fx.dom.has_class(&nav, "active"));
    assert!(!fx.dom.has_class(&toggle, "active"));
}

struct NavParts {
    toggle: FakeElement,
    nav: FakeElement,
    link_home: FakeElement,
    link_sports: FakeElement,
}

fn build_nav(dom: &FakeDom) -> NavParts {
    let toggle = dom.element("button").id("mobile-menu-btn").insert();
    let nav = dom.element("nav").id("nav").insert();
    let link_home = dom
        .element("a")
        .class("nav-link")
        .attr("href", "#home")
        .parent(&nav)
        .insert();
    let link_sports = dom
        .element("a")
        .class("nav-link")
        .attr("href", "#sports")
        .parent(&nav)
        .insert();
    dom.element("section").id("home").offset_top(0.0).insert();
    dom.element("section")
        .id("sports")
        .offset_top(600.0)
        .insert();
    NavParts {
        toggle,
        nav,
        link_home,
        link_sports,
    }
}

#[test]
fn nav_click_scrolls_to_the_section_minus_the_header_allowance() {
    let fx = Fixture::new();
    let parts = build_nav(&fx.dom);
    fx.mount();

    // Open the mobile menu first so the click is seen closing it.
    fx.events.click(&parts.toggle);
    assert!(fx.dom.has_class(&parts.nav, "active"));

    fx.events.click(&parts.link_sports);

    assert_eq!(fx.dom.scrolled_to(), vec![520.0]);
    assert!(!fx.dom.has_class(&parts.nav, "active"));
    assert!(!fx.dom.has_class(&parts.toggle, "active"));
    assert!(fx.dom.has_class(&parts.link_sports, "active"));
    assert!(!fx.dom.has_class(&parts.link_home, "active"));
}

#[test]
fn nav_click_with_a_dangling_target_still_updates_the_active_link() {
    let fx = Fixture::new();
    let nav = fx.dom.element("nav").id("nav").insert();
    let dangling = fx
        .dom
        .element("a")
        .class("nav-link")
        .attr("href", "#missing")
        .parent(&nav)
        .insert();
    fx.mount();

    fx.events.click(&dangling);

    assert!(fx.dom.scrolled_to().is_empty());
    assert!(fx.dom.has_class(&dangling, "active"));
}

#[test]
fn scroll_spy_marks_the_section_at_its_boundary() {
    let fx = Fixture::new();
    let parts = build_nav(&fx.dom);
    fx.mount();

    // One pixel above the sports threshold the first section still owns the
    // viewport.
    fx.events.fire_scroll(499.0);
    assert!(fx.dom.has_class(&parts.link_home, "active"));
    assert!(!fx.dom.has_class(&parts.link_sports, "active"));

    // Exactly at top - 100 the lower section takes over.
    fx.events.fire_scroll(500.0);
    assert!(fx.dom.has_class(&parts.link_sports, "active"));
    assert!(!fx.dom.has_class(&parts.link_home, "active"));
}

#[test]
fn reveal_observation_is_one_way() {
    let fx = Fixture::new();
    let card = fx.dom.element("div").class("sport-card").insert();
    let step = fx.dom.element("li").class("step").insert();
    fx.mount();

    assert!(fx.dom.has_class(&card, "fade-in"));
    assert!(fx.dom.has_class(&step, "fade-in"));
    assert_eq!(
        fx.events.observer_configs(),
        vec![(0.1, "0px 0px -50px 0px".to_string())]
    );

    fx.events.reveal(&card);
    assert!(fx.dom.has_class(&card, "visible"));
    assert!(!fx.dom.has_class(&step, "visible"));

    // Re-reporting the intersection changes nothing.
    fx.events.reveal(&card);
    assert!(fx.dom.has_class(&card, "visible"));
}

#[test]
fn button_click_spawns_a_centered_ripple_that_expires() {
    let fx = Fixture::new();
    let button = fx
        .dom
        .element("button")
        .class("btn")
        .text("Get started")
        .rect(Rect {
            left: 10.0,
            top: 20.0,
            width: 200.0,
            height: 40.0,
        })
        .insert();
    fx.mount();

    assert!(fx.injected_ripple_css());

    fx.events.click_at(
        &button,
        ClickPoint {
            client_x: 110.0,
            client_y: 40.0,
        },
    );

    let ripples = fx.dom.query_all(".ripple");
    assert_eq!(ripples.len(), 1);
    let ripple = &ripples[0];
    assert_eq!(fx.dom.style(ripple, "width").as_deref(), Some("200px"));
    assert_eq!(fx.dom.style(ripple, "height").as_deref(), Some("200px"));
    assert_eq!(fx.dom.style(ripple, "left").as_deref(), Some("0px"));
    assert_eq!(fx.dom.style(ripple, "top").as_deref(), Some("-80px"));
    assert_eq!(fx.timers.pending_timeouts(), vec![600]);

    fx.timers.run_timeouts();
    assert!(fx.dom.query_all(".ripple").is_empty());
}

#[test]
fn parallax_translates_backgrounds_at_half_speed() {
    let fx = Fixture::new();
    let bg = fx.dom.element("div").class("animated-bg").insert();
    fx.mount();

    fx.events.fire_scroll(100.0);
    assert_eq!(
        fx.dom.style(&bg, "transform").as_deref(),
        Some("translateY(50px)")
    );

    fx.events.fire_scroll(0.0);
    assert_eq!(
        fx.dom.style(&bg, "transform").as_deref(),
        Some("translateY(0px)")
    );
}

struct SliderParts {
    slides: Vec<FakeElement>,
}

fn build_slider(dom: &FakeDom, count: usize) -> SliderParts {
    let slider = dom.element("div").id("hero-slider").insert();
    let slides = (0..count)
        .map(|i| {
            let builder = dom
                .element("div")
                .class("hero-slide")
                .parent(&slider)
                .style(
                    "background-image",
                    &format!("url('/assets/hero/slide-{i}.jpg')"),
                );
            let builder = if i == 0 { builder.class("active") } else { builder };
            builder.insert()
        })
        .collect();
    SliderParts { slides }
}

#[test]
fn slider_preloads_and_cycles_through_the_deck() {
    let fx = Fixture::new();
    let parts = build_slider(&fx.dom, 3);
    let handles = fx.mount();

    assert!(handles.slider.is_some());
    assert_eq!(fx.timers.live_intervals(), vec![6000]);
    assert_eq!(
        fx.dom.preloaded_images(),
        vec![
            "/assets/hero/slide-0.jpg".to_string(),
            "/assets/hero/slide-1.jpg".to_string(),
            "/assets/hero/slide-2.jpg".to_string(),
        ]
    );

    fx.timers.tick();
    assert!(!fx.dom.has_class(&parts.slides[0], "active"));
    assert!(fx.dom.has_class(&parts.slides[1], "active"));

    fx.timers.tick();
    assert!(fx.dom.has_class(&parts.slides[2], "active"));

    // Wraps back to the first slide.
    fx.timers.tick();
    assert!(fx.dom.has_class(&parts.slides[0], "active"));
    assert!(!fx.dom.has_class(&parts.slides[2], "active"));
}

#[test]
fn slider_respects_reduced_motion() {
    let fx = Fixture::new();
    fx.dom.set_reduced_motion(true);
    let parts = build_slider(&fx.dom, 3);
    let handles = fx.mount();

    assert!(handles.slider.is_none());
    assert!(fx.timers.live_intervals().is_empty());
    assert!(fx.dom.preloaded_images().is_empty());
    assert!(fx.dom.has_class(&parts.slides[0], "active"));
}

#[test]
fn slider_needs_at_least_two_slides() {
    let fx = Fixture::new();
    build_slider(&fx.dom, 1);
    let handles = fx.mount();

    assert!(handles.slider.is_none());
    assert!(fx.timers.live_intervals().is_empty());
}

#[test]
fn cancelling_the_slider_handle_stops_rotation() {
    let fx = Fixture::new();
    let parts = build_slider(&fx.dom, 3);
    let mut handles = fx.mount();

    handles.slider.take().expect("rotation running").cancel();
    assert!(fx.timers.live_intervals().is_empty());

    fx.timers.tick();
    assert!(fx.dom.has_class(&parts.slides[0], "active"));
    assert!(!fx.dom.has_class(&parts.slides[1], "active"));
}

#[test]
fn legacy_switch_persists_its_own_key_and_direction() {
    let fx = Fixture::new();
    let control = fx.dom.element("select").class("language-switch").insert();
    fx.mount();

    fx.events.change(&control, "ar");
    assert_eq!(fx.dom.root_attr("dir").as_deref(), Some("rtl"));
    assert_eq!(fx.store.get(LEGACY_LANGUAGE_KEY).as_deref(), Some("ar"));

    fx.events.change(&control, "en");
    assert_eq!(fx.dom.root_attr("dir").as_deref(), Some("ltr"));
    assert_eq!(fx.store.get(LEGACY_LANGUAGE_KEY).as_deref(), Some("en"));
}

#[test]
fn legacy_switch_restores_a_saved_preference_at_mount() {
    let fx = Fixture::new();
    let control = fx.dom.element("select").class("language-switch").insert();
    fx.store.set(LEGACY_LANGUAGE_KEY, "ar");
    fx.mount();

    assert_eq!(fx.dom.value(&control), "ar");
    assert_eq!(fx.dom.root_attr("dir").as_deref(), Some("rtl"));
}
