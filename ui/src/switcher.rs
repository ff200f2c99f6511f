//! Runtime language switcher with RTL support.
//!
//! Owns the active language code and the dropdown interaction for one page
//! session. All DOM access goes through the `Dom` capability, so the whole
//! flow runs unchanged against the synthetic harness in tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::console;
use crate::core::dom::Dom;
use crate::core::events::{ClickOpts, EventSource};
use crate::core::storage::{SettingsStore, LANGUAGE_KEY};
use crate::core::timing::Scheduler;
use crate::i18n::{Direction, TranslationRegistry, DEFAULT_LANG, RTL_CLASS};

/// Body fade applied around a switch, milliseconds.
const FADE_MS: u32 = 200;

const DROPDOWN_SELECTOR: &str = "#language-dropdown";
const MENU_OPEN_CLASS: &str = "show";
const TRIGGER_OPEN_CLASS: &str = "open";
const ITEM_SELECTED_CLASS: &str = "selected";

struct State {
    current: String,
    dropdown_open: bool,
}

/// Clonable handle; clones share the same switcher state.
pub struct LanguageSwitcher<D: Dom, S: SettingsStore, T: Scheduler> {
    state: Rc<RefCell<State>>,
    registry: Rc<TranslationRegistry>,
    dom: Rc<D>,
    store: Rc<S>,
    timers: Rc<T>,
}

impl<D: Dom, S: SettingsStore, T: Scheduler> Clone for LanguageSwitcher<D, S, T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            registry: Rc::clone(&self.registry),
            dom: Rc::clone(&self.dom),
            store: Rc::clone(&self.store),
            timers: Rc::clone(&self.timers),
        }
    }
}

impl<D, S, T> LanguageSwitcher<D, S, T>
where
    D: Dom + 'static,
    S: SettingsStore + 'static,
    T: Scheduler + 'static,
{
    /// Reads the persisted language code, defaulting to English.
    pub fn new(
        registry: Rc<TranslationRegistry>,
        dom: Rc<D>,
        store: Rc<S>,
        timers: Rc<T>,
    ) -> Self {
        let current = store
            .get(LANGUAGE_KEY)
            .unwrap_or_else(|| DEFAULT_LANG.to_string());
        Self {
            state: Rc::new(RefCell::new(State {
                current,
                dropdown_open: false,
            })),
            registry,
            dom,
            store,
            timers,
        }
    }

    /// Apply the active language to the document.
    ///
    /// An unregistered active code resets to the default and leaves the DOM
    /// untouched for this call; the next call applies the default.
    pub fn initialize(&self) {
        let current = self.current_code();
        let Some(entry) = self.registry.get(&current) else {
            self.state.borrow_mut().current = DEFAULT_LANG.to_string();
            return;
        };
        let dir = entry.dir;

        self.dom.set_root_attr("lang", &current);
        self.dom.set_root_attr("dir", dir.as_str());
        self.dom.set_body_class(RTL_CLASS, dir.is_rtl());

        self.refresh_content();
        self.refresh_dropdown_selection();
    }

    /// Re-apply every translatable element from the active table.
    ///
    /// Keys missing from the table leave their element untouched.
    pub fn refresh_content(&self) {
        let current = self.current_code();
        let Some(entry) = self.registry.get(&current) else {
            return;
        };

        for el in self.dom.query_all("[data-i18n]") {
            let Some(key) = self.dom.attr(&el, "data-i18n") else {
                continue;
            };
            let Some(text) = entry.lookup(&key) else {
                continue;
            };
            let tag = self.dom.tag_name(&el);
            if tag == "INPUT" || tag == "TEXTAREA" {
                // Placeholder-bearing controls only; values stay untouched.
                if self.dom.has_attr(&el, "placeholder") {
                    self.dom.set_attr(&el, "placeholder", text);
                }
            } else {
                self.dom.set_content(&el, text);
            }
        }

        for el in self.dom.query_all("[data-i18n-aria]") {
            let Some(key) = self.dom.attr(&el, "data-i18n-aria") else {
                continue;
            };
            if let Some(text) = entry.lookup(&key) {
                self.dom.set_attr(&el, "aria-label", text);
            }
        }

        for el in self.dom.query_all("[data-i18n-title]") {
            let Some(key) = self.dom.attr(&el, "data-i18n-title") else {
                continue;
            };
            if let Some(text) = entry.lookup(&key) {
                self.dom.set_attr(&el, "title", text);
            }
        }
    }

    /// Mirror the active language in the dropdown.
    fn refresh_dropdown_selection(&self) {
        let Some(dropdown) = self.dom.query(DROPDOWN_SELECTOR) else {
            return;
        };
        let current = self.current_code();
        let Some(entry) = self.registry.get(&current) else {
            return;
        };

        if let Some(selected) = self
            .dom
            .query_within(&dropdown, ".selected-code")
            .into_iter()
            .next()
        {
            self.dom.set_text(&selected, &entry.display_code);
        }

        for item in self.dom.query_within(&dropdown, ".dropdown-item") {
            if self.dom.attr(&item, "data-lang").as_deref() == Some(current.as_str()) {
                self.dom.add_class(&item, ITEM_SELECTED_CLASS);
            } else {
                self.dom.remove_class(&item, ITEM_SELECTED_CLASS);
            }
        }
    }

    /// Switch the active language, with a short body fade around the swap.
    ///
    /// Unknown codes are logged and ignored: state stays as it was and
    /// nothing is persisted. On success the `languageChanged` notification
    /// fires once the fade timer re-applies the document.
    pub fn switch_to(&self, code: &str) {
        if !self.registry.contains(code) {
            console::error(&format!("Language not found: {code}"));
            return;
        }

        self.state.borrow_mut().current = code.to_string();
        self.store.set(LANGUAGE_KEY, code);

        self.dom.set_body_style("transition", "opacity 0.2s ease");
        self.dom.set_body_style("opacity", "0.7");

        let this = self.clone();
        let code = code.to_string();
        self.timers.after(
            FADE_MS,
            Box::new(move || {
                this.initialize();
                this.dom.set_body_style("opacity", "1");
                let dir = this
                    .registry
                    .get(&code)
                    .map(|entry| entry.dir)
                    .unwrap_or(Direction::Ltr);
                this.dom.dispatch_language_changed(&code, dir);
            }),
        );
    }

    /// Wire the dropdown trigger, items and outside-click dismissal.
    ///
    /// A no-op when any of the dropdown anchors is missing.
    pub fn setup_dropdown<E: EventSource<D>>(&self, events: &E) {
        let Some(dropdown) = self.dom.query(DROPDOWN_SELECTOR) else {
            return;
        };
        let Some(trigger) = self
            .dom
            .query_within(&dropdown, ".dropdown-trigger")
            .into_iter()
            .next()
        else {
            return;
        };
        let Some(menu) = self
            .dom
            .query_within(&dropdown, ".dropdown-menu")
            .into_iter()
            .next()
        else {
            return;
        };
        let items = self.dom.query_within(&dropdown, ".dropdown-item");
        if items.is_empty() {
            return;
        }

        {
            let this = self.clone();
            let trigger_el = trigger.clone();
            let menu_el = menu.clone();
            events.on_click(
                &trigger,
                ClickOpts {
                    stop_propagation: true,
                    ..ClickOpts::default()
                },
                Box::new(move |_| this.toggle_dropdown(&trigger_el, &menu_el)),
            );
        }

        for item in &items {
            let code = self.dom.attr(item, "data-lang");
            let this = self.clone();
            let trigger_el = trigger.clone();
            let menu_el = menu.clone();
            events.on_click(
                item,
                ClickOpts {
                    prevent_default: true,
                    ..ClickOpts::default()
                },
                Box::new(move |_| {
                    if let Some(code) = &code {
                        if *code != this.current_code() {
                            this.switch_to(code);
                        }
                    }
                    this.close_dropdown(&trigger_el, &menu_el);
                }),
            );
        }

        let this = self.clone();
        let dropdown_el = dropdown;
        let trigger_el = trigger;
        let menu_el = menu;
        events.on_document_click(Box::new(move |target| {
            let Some(target) = target else {
                return;
            };
            if !this.dom.contains(&dropdown_el, &target) {
                this.close_dropdown(&trigger_el, &menu_el);
            }
        }));
    }

    fn toggle_dropdown(&self, trigger: &D::El, menu: &D::El) {
        let open = {
            let mut state = self.state.borrow_mut();
            state.dropdown_open = !state.dropdown_open;
            state.dropdown_open
        };
        if open {
            self.dom.add_class(menu, MENU_OPEN_CLASS);
            self.dom.add_class(trigger, TRIGGER_OPEN_CLASS);
        } else {
            self.dom.remove_class(menu, MENU_OPEN_CLASS);
            self.dom.remove_class(trigger, TRIGGER_OPEN_CLASS);
        }
    }

    fn close_dropdown(&self, trigger: &D::El, menu: &D::El) {
        self.state.borrow_mut().dropdown_open = false;
        self.dom.remove_class(menu, MENU_OPEN_CLASS);
        self.dom.remove_class(trigger, TRIGGER_OPEN_CLASS);
    }

    pub fn current_code(&self) -> String {
        self.state.borrow().current.clone()
    }

    /// Whether the active language lays out right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.registry
            .get(&self.current_code())
            .map(|entry| entry.dir.is_rtl())
            .unwrap_or(false)
    }

    /// Single-key lookup in the active table, falling back to the key itself.
    pub fn get(&self, key: &str) -> String {
        self.registry
            .get(&self.current_code())
            .and_then(|entry| entry.lookup(key))
            .unwrap_or(key)
            .to_string()
    }

    /// Dropdown open flag (exposed for the test harness).
    pub fn dropdown_open(&self) -> bool {
        self.state.borrow().dropdown_open
    }
}
