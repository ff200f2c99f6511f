//! Secondary language-preference control.
//!
//! Leftover `.language-switch` select kept as found: it persists to its own
//! storage key and never touches the main switcher's state. Do not unify
//! without product clarification.

use std::rc::Rc;

use crate::core::console;
use crate::core::dom::Dom;
use crate::core::events::EventSource;
use crate::core::storage::{SettingsStore, LEGACY_LANGUAGE_KEY};

pub(super) fn wire<D, E, S>(dom: &Rc<D>, events: &E, store: &Rc<S>)
where
    D: Dom + 'static,
    E: EventSource<D>,
    S: SettingsStore + 'static,
{
    let Some(control) = dom.query(".language-switch") else {
        return;
    };

    {
        let dom = Rc::clone(dom);
        let store = Rc::clone(store);
        events.on_change(
            &control,
            Box::new(move |value| {
                let dir = if value == "ar" { "rtl" } else { "ltr" };
                dom.set_root_attr("dir", dir);
                store.set(LEGACY_LANGUAGE_KEY, &value);
                console::log(&format!("Language changed to: {value}"));
            }),
        );
    }

    if let Some(saved) = store.get(LEGACY_LANGUAGE_KEY) {
        dom.set_value(&control, &saved);
        if saved == "ar" {
            dom.set_root_attr("dir", "rtl");
        }
    }
}
