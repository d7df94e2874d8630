//! Faceted filter controller: owns a listing page's [`FilterState`] and keeps
//! it consistent with the URL query string.
//!
//! Inbound sync (mount, back/forward) only reads the URL. Outbound writes
//! happen on user transitions and only when the serialized query string
//! actually changes, so one state→URL→state round trip is a fixed point.

use super::query_params::{merge_search, sanitize_values};
use super::state::{FacetDef, FilterState, PAGE_KEY, QUERY_KEY};

/// Access to the page URL's query string
pub trait UrlPort {
    /// Current search string, with or without the leading `?`
    fn read_search(&self) -> String;
    /// Replaces the search string (`""` clears it)
    fn write_search(&self, search: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Uninitialized,
    Synced,
}

pub struct FilterController<U: UrlPort> {
    defs: &'static [FacetDef],
    state: FilterState,
    phase: SyncPhase,
    url: U,
}

impl<U: UrlPort> FilterController<U> {
    pub fn new(defs: &'static [FacetDef], url: U) -> Self {
        Self {
            defs,
            state: FilterState::empty(defs),
            phase: SyncPhase::Uninitialized,
            url,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn defs(&self) -> &'static [FacetDef] {
        self.defs
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    /// Re-derives state from the URL without ever writing it back.
    ///
    /// The first call seeds the state unconditionally; later calls replace
    /// the state only when the URL describes a different selection.
    /// Returns whether the state changed.
    pub fn sync_from_url(&mut self) -> bool {
        let parsed = FilterState::from_search(&self.url.read_search(), self.defs);

        if self.phase == SyncPhase::Uninitialized {
            self.phase = SyncPhase::Synced;
            let changed = parsed != self.state;
            self.state = parsed;
            log::debug!("filter seeded from url (changed: {})", changed);
            return changed;
        }

        if parsed.same_selection(&self.state) {
            return false;
        }
        log::debug!("filter re-synced from external url change");
        self.state = parsed;
        true
    }

    /// Checkbox next to a facet. Unchecking drops the facet's values.
    pub fn toggle_facet_active(&mut self, facet: &str, checked: bool) {
        if !self.knows(facet) {
            return;
        }
        self.ensure_synced();

        let mut next = self.state.clone();
        next.active.insert(facet.to_string(), checked);
        if !checked {
            next.facets.insert(facet.to_string(), Vec::new());
            next.page = 1;
        }
        self.commit(next);
    }

    /// Replaces the selected values of `facet`
    pub fn set_facet_values<I, S>(&mut self, facet: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.knows(facet) {
            return;
        }
        self.ensure_synced();

        let values = sanitize_values(values);
        let mut next = self.state.clone();
        next.active.insert(facet.to_string(), !values.is_empty());
        next.facets.insert(facet.to_string(), values);
        next.page = 1;
        self.commit(next);
    }

    pub fn set_query(&mut self, text: &str) {
        self.ensure_synced();

        let mut next = self.state.clone();
        next.query = text.to_string();
        next.page = 1;
        self.commit(next);
    }

    pub fn set_page(&mut self, page: usize) {
        self.ensure_synced();

        let mut next = self.state.clone();
        next.page = page.max(1);
        self.commit(next);
    }

    /// Empties every facet and the query in a single URL write
    pub fn clear_all(&mut self) {
        self.ensure_synced();
        self.commit(FilterState::empty(self.defs));
    }

    pub fn has_any_selection(&self) -> bool {
        self.state.has_any_selection()
    }

    fn knows(&self, facet: &str) -> bool {
        let known = self.defs.iter().any(|d| d.key == facet);
        if !known {
            log::warn!("ignoring unknown facet `{}`", facet);
        }
        known
    }

    fn ensure_synced(&mut self) {
        if self.phase == SyncPhase::Uninitialized {
            self.sync_from_url();
        }
    }

    fn owned_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![QUERY_KEY, PAGE_KEY];
        keys.extend(self.defs.iter().map(|d| d.key));
        keys
    }

    fn commit(&mut self, next: FilterState) {
        if next == self.state {
            return;
        }
        self.state = next;

        let current = self.url.read_search();
        let target = merge_search(&current, &self.owned_keys(), &self.state.to_params(self.defs));
        if target.trim_start_matches('?') != current.trim_start_matches('?') {
            log::debug!("filter url -> `{}`", target);
            self.url.write_search(&target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    const DEFS: &[FacetDef] = &[
        FacetDef::new("provinces", "Province"),
        FacetDef::new("districts", "District"),
        FacetDef::new("schoolTypes", "Type"),
    ];

    #[derive(Default)]
    struct MemoryUrl {
        search: RefCell<String>,
        writes: Cell<usize>,
    }

    impl MemoryUrl {
        fn with(search: &str) -> Self {
            Self {
                search: RefCell::new(search.to_string()),
                writes: Cell::new(0),
            }
        }

        /// Simulates back/forward navigation: no write is counted
        fn navigate_externally(&self, search: &str) {
            *self.search.borrow_mut() = search.to_string();
        }

        fn current(&self) -> String {
            self.search.borrow().clone()
        }
    }

    impl UrlPort for MemoryUrl {
        fn read_search(&self) -> String {
            self.search.borrow().clone()
        }

        fn write_search(&self, search: &str) {
            self.writes.set(self.writes.get() + 1);
            *self.search.borrow_mut() = search.to_string();
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn synced(search: &str) -> FilterController<MemoryUrl> {
        let mut controller = FilterController::new(DEFS, MemoryUrl::with(search));
        controller.sync_from_url();
        controller
    }

    #[test]
    fn test_initial_sync_seeds_without_writing() {
        let controller = synced("?provinces=Kigali&page=2");
        assert_eq!(controller.phase(), SyncPhase::Synced);
        assert_eq!(controller.state().values("provinces"), strings(&["Kigali"]).as_slice());
        assert_eq!(controller.state().page, 2);
        assert_eq!(controller.url().writes.get(), 0);
    }

    #[test]
    fn test_empty_url_syncs_to_empty_state() {
        let controller = synced("");
        assert_eq!(controller.phase(), SyncPhase::Synced);
        assert_eq!(controller.state(), &FilterState::empty(DEFS));
    }

    #[test]
    fn test_facet_values_round_trip() {
        let mut controller = synced("");
        controller.set_facet_values("provinces", ["Kigali", "Huye"]);
        assert_eq!(controller.url().current(), "?provinces=Kigali,Huye");

        let reparsed = FilterState::from_search(&controller.url().current(), DEFS);
        assert!(reparsed.same_selection(controller.state()));
        assert!(reparsed.is_active("provinces"));
    }

    #[test]
    fn test_set_facet_values_dedupes_and_resets_page() {
        let mut controller = synced("?page=4");
        controller.set_facet_values("districts", ["Huye", "Huye", "", "Gasabo"]);
        assert_eq!(controller.state().values("districts"), strings(&["Huye", "Gasabo"]).as_slice());
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.url().current(), "?districts=Huye,Gasabo");
    }

    #[test]
    fn test_empty_values_remove_parameter() {
        let mut controller = synced("?provinces=Kigali&q=gs");
        controller.set_facet_values("provinces", Vec::<String>::new());
        assert_eq!(controller.url().current(), "?q=gs");
        assert!(!controller.state().is_active("provinces"));
    }

    #[test]
    fn test_uncheck_clears_values() {
        let mut controller = synced("?provinces=Kigali&page=3");
        assert!(controller.state().is_active("provinces"));

        controller.toggle_facet_active("provinces", false);
        assert!(controller.state().values("provinces").is_empty());
        assert!(!controller.state().is_active("provinces"));
        assert_eq!(controller.state().page, 1);
        assert!(!controller.url().current().contains("provinces"));
    }

    #[test]
    fn test_check_alone_does_not_touch_url() {
        let mut controller = synced("?q=gs");
        controller.toggle_facet_active("schoolTypes", true);
        assert!(controller.state().is_active("schoolTypes"));
        assert_eq!(controller.url().writes.get(), 0);
        assert_eq!(controller.url().current(), "?q=gs");
    }

    #[test]
    fn test_set_query_trims_in_url() {
        let mut controller = synced("?page=2");
        controller.set_query("  lycee ");
        assert_eq!(controller.url().current(), "?q=lycee");
        assert_eq!(controller.state().page, 1);

        controller.set_query("   ");
        assert_eq!(controller.url().current(), "");
    }

    #[test]
    fn test_set_page_leaves_facets_alone() {
        let mut controller = synced("?provinces=Kigali");
        controller.set_page(3);
        assert_eq!(controller.url().current(), "?provinces=Kigali&page=3");
        controller.set_page(0);
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.url().current(), "?provinces=Kigali");
    }

    #[test]
    fn test_clear_all_single_write_keeps_foreign_params() {
        let mut controller = synced("?view=schools&q=gs&provinces=Kigali,Huye&districts=Huye&page=2");
        controller.clear_all();
        assert_eq!(controller.url().writes.get(), 1);
        assert_eq!(controller.url().current(), "?view=schools");
        assert_eq!(controller.state(), &FilterState::empty(DEFS));
        assert!(!controller.has_any_selection());
    }

    #[test]
    fn test_external_navigation_reaches_fixed_point() {
        let mut controller = synced("");
        controller.set_query("xyz");
        let writes_before = controller.url().writes.get();

        controller.url().navigate_externally("?q=abc&page=3");
        assert!(controller.sync_from_url());
        assert_eq!(controller.state().query, "abc");
        assert_eq!(controller.state().page, 3);

        // a second sync of the same URL is a no-op
        assert!(!controller.sync_from_url());
        assert_eq!(controller.url().writes.get(), writes_before);
    }

    #[test]
    fn test_resync_ignores_reordered_values() {
        let mut controller = synced("?provinces=Kigali,Huye");
        controller.url().navigate_externally("?provinces=Huye,Kigali");
        assert!(!controller.sync_from_url());
        assert_eq!(controller.state().values("provinces"), strings(&["Kigali", "Huye"]).as_slice());
    }

    #[test]
    fn test_redundant_transition_does_not_write() {
        let mut controller = synced("?provinces=Kigali");
        controller.set_facet_values("provinces", ["Kigali"]);
        controller.set_page(1);
        assert_eq!(controller.url().writes.get(), 0);
    }

    #[test]
    fn test_transition_before_sync_seeds_first() {
        let mut controller = FilterController::new(DEFS, MemoryUrl::with("?districts=Huye"));
        controller.set_query("gs");
        assert_eq!(controller.phase(), SyncPhase::Synced);
        assert_eq!(controller.state().values("districts"), strings(&["Huye"]).as_slice());
        assert_eq!(controller.url().current(), "?q=gs&districts=Huye");
    }

    #[test]
    fn test_unknown_facet_is_ignored() {
        let mut controller = synced("");
        controller.set_facet_values("colors", ["red"]);
        controller.toggle_facet_active("colors", true);
        assert_eq!(controller.url().writes.get(), 0);
        assert!(!controller.state().facets.contains_key("colors"));
    }
}
