use dioxus::prelude::*;

use ui::components::SiteHeader;
use ui::views::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Wire the imperative page layer (switcher + behaviors) once the shell
    // is in the document.
    use_effect(|| {
        page::start();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteHeader {}
        Home {}
    }
}

/// Page-session bootstrap plus the script-facing language API.
mod page {
    #[cfg(target_arch = "wasm32")]
    pub use wasm::start;

    #[cfg(not(target_arch = "wasm32"))]
    pub fn start() {}

    #[cfg(target_arch = "wasm32")]
    mod wasm {
        use std::cell::RefCell;

        use ui::core::console;
        use ui::i18n::DEFAULT_LANG;
        use ui::platform::web::{LocalStore, WebDom, WebEvents, WebScheduler};
        use ui::session::{self, PageSession};
        use wasm_bindgen::prelude::*;

        thread_local! {
            static SESSION: RefCell<Option<PageSession<WebDom, LocalStore, WebScheduler>>> =
                RefCell::new(None);
        }

        pub fn start() {
            SESSION.with(|cell| {
                let mut cell = cell.borrow_mut();
                if cell.is_none() {
                    *cell = session::start_web();
                    console::log("🏆 Welcome to Sport Planet! 🏆");
                    console::log("Discover. Connect. Succeed.");
                }
            });
        }

        /// Switch the active site language.
        #[wasm_bindgen]
        pub fn switch_language(code: String) {
            SESSION.with(|cell| {
                if let Some(session) = cell.borrow().as_ref() {
                    session.switcher().switch_to(&code);
                }
            });
        }

        /// Currently active language code.
        #[wasm_bindgen]
        pub fn current_language() -> String {
            SESSION.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map(|session| session.switcher().current_code())
                    .unwrap_or_else(|| DEFAULT_LANG.to_string())
            })
        }

        /// Look a key up in the active table, falling back to the key.
        #[wasm_bindgen]
        pub fn translate(key: String) -> String {
            SESSION.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map(|session| session.switcher().get(&key))
                    .unwrap_or(key)
            })
        }

        /// Whether the active language lays out right-to-left.
        #[wasm_bindgen]
        pub fn is_rtl() -> bool {
            SESSION.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map(|session| session.switcher().is_rtl())
                    .unwrap_or(false)
            })
        }
    }
}
