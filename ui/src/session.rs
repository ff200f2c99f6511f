//! Page-session controller owning the switcher and behavior handles.

use std::rc::Rc;

use crate::behavior::{self, PageHandles};
use crate::core::dom::Dom;
use crate::core::events::EventSource;
use crate::core::storage::SettingsStore;
use crate::core::timing::Scheduler;
use crate::i18n::TranslationRegistry;
use crate::switcher::LanguageSwitcher;

pub struct PageSession<D: Dom, S: SettingsStore, T: Scheduler> {
    switcher: LanguageSwitcher<D, S, T>,
    handles: PageHandles,
}

impl<D, S, T> PageSession<D, S, T>
where
    D: Dom + 'static,
    S: SettingsStore + 'static,
    T: Scheduler + 'static,
{
    /// Initialize the language layer, then wire every page behavior.
    pub fn start<E: EventSource<D>>(
        registry: TranslationRegistry,
        dom: Rc<D>,
        events: &E,
        store: Rc<S>,
        timers: Rc<T>,
    ) -> Self {
        let switcher = LanguageSwitcher::new(
            Rc::new(registry),
            Rc::clone(&dom),
            Rc::clone(&store),
            Rc::clone(&timers),
        );
        switcher.initialize();
        switcher.setup_dropdown(events);

        let handles = behavior::mount(&dom, events, &store, &timers);
        Self { switcher, handles }
    }

    pub fn switcher(&self) -> &LanguageSwitcher<D, S, T> {
        &self.switcher
    }

    /// Stop the hero rotation; headless lifecycles should not leak timers.
    pub fn stop_slider(&mut self) {
        if let Some(handle) = self.handles.slider.take() {
            handle.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_start::start_web;

#[cfg(target_arch = "wasm32")]
mod web_start {
    use std::rc::Rc;

    use super::PageSession;
    use crate::i18n::TranslationRegistry;
    use crate::platform::web::{LocalStore, WebDom, WebEvents, WebScheduler};

    /// Build the browser adapters and start the session.
    ///
    /// Returns `None` outside a window/document context.
    pub fn start_web() -> Option<PageSession<WebDom, LocalStore, WebScheduler>> {
        let dom = Rc::new(WebDom::new()?);
        let events = WebEvents::new()?;
        let store = Rc::new(LocalStore::new());
        let timers = Rc::new(WebScheduler::new());
        Some(PageSession::start(
            TranslationRegistry::embedded(),
            dom,
            &events,
            store,
            timers,
        ))
    }
}
