//! Leptos binding of [`FilterController`] to the browser address bar.
//!
//! # Usage
//!
//! ```rust,ignore
//! const FACETS: &[FacetDef] = &[FacetDef::new("provinces", "Province")];
//!
//! let filter = use_facet_filter(FACETS);
//! let rows = Memo::new(move |_| filter.state().with(|s| apply_filter(&all.get(), s)));
//! filter.set_facet_values("provinces", vec!["Kigali".to_string()]);
//! ```

use leptos::prelude::*;
use web_sys::window;

use super::controller::{FilterController, UrlPort};
use super::state::{FacetDef, FilterState};

/// `location.search` read / `history.replaceState` write
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUrl;

impl UrlPort for BrowserUrl {
    fn read_search(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn write_search(&self, search: &str) {
        let Some(w) = window() else {
            return;
        };
        let path = w.location().pathname().unwrap_or_default();
        let hash = w.location().hash().unwrap_or_default();
        let new_url = format!("{}{}{}", path, search, hash);
        if let Ok(history) = w.history() {
            if history
                .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
                .is_err()
            {
                log::warn!("history.replaceState rejected `{}`", new_url);
            }
        }
    }
}

/// Handle given to facet widgets: read-only state snapshot plus transitions
#[derive(Clone, Copy)]
pub struct FacetFilter {
    controller: StoredValue<FilterController<BrowserUrl>>,
    state: RwSignal<FilterState>,
}

impl FacetFilter {
    pub fn state(&self) -> Signal<FilterState> {
        self.state.into()
    }

    pub fn defs(&self) -> &'static [FacetDef] {
        self.controller.with_value(|c| c.defs())
    }

    pub fn toggle_facet_active(&self, facet: &str, checked: bool) {
        self.apply(|c| c.toggle_facet_active(facet, checked));
    }

    pub fn set_facet_values(&self, facet: &str, values: Vec<String>) {
        self.apply(|c| c.set_facet_values(facet, values));
    }

    pub fn set_query(&self, text: &str) {
        self.apply(|c| c.set_query(text));
    }

    pub fn set_page(&self, page: usize) {
        self.apply(|c| c.set_page(page));
    }

    pub fn clear_all(&self) {
        self.apply(|c| c.clear_all());
    }

    /// Inbound sync, e.g. after back/forward navigation
    pub fn sync_from_url(&self) {
        self.apply(|c| {
            c.sync_from_url();
        });
    }

    pub fn has_any_selection(&self) -> bool {
        self.state.with(|s| s.has_any_selection())
    }

    fn apply(&self, f: impl FnOnce(&mut FilterController<BrowserUrl>)) {
        let next = self.controller.try_update_value(|c| {
            f(c);
            c.state().clone()
        });
        // Only re-commit the signal when the value really changed
        if let Some(next) = next {
            if self.state.with_untracked(|s| s != &next) {
                self.state.set(next);
            }
        }
    }
}

/// Creates the filter controller of a listing page, seeded from the current
/// URL and kept in sync with back/forward navigation until unmount.
pub fn use_facet_filter(defs: &'static [FacetDef]) -> FacetFilter {
    let mut controller = FilterController::new(defs, BrowserUrl);
    controller.sync_from_url();
    let initial = controller.state().clone();

    let filter = FacetFilter {
        controller: StoredValue::new(controller),
        state: RwSignal::new(initial),
    };

    let handle = window_event_listener(leptos::ev::popstate, move |_| filter.sync_from_url());
    on_cleanup(move || handle.remove());

    filter
}
