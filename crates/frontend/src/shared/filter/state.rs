use std::collections::{BTreeMap, BTreeSet};

use super::query_params::{
    clean_text, encode_list, get_param, parse_page, parse_pairs, parse_raw_pairs, split_list,
};

/// URL key of the free-text query
pub const QUERY_KEY: &str = "q";
/// URL key of the 1-based page number
pub const PAGE_KEY: &str = "page";

/// One multi-select filter dimension of a listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetDef {
    /// URL parameter name, e.g. `"provinces"`
    pub key: &'static str,
    /// Label shown next to the facet checkbox
    pub label: &'static str,
}

impl FacetDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Filter state of a listing page.
///
/// `facets` holds selected values in insertion order; `active` is the
/// per-facet checkbox flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub facets: BTreeMap<String, Vec<String>>,
    pub active: BTreeMap<String, bool>,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            facets: BTreeMap::new(),
            active: BTreeMap::new(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Empty state with a slot for every facet
    pub fn empty(defs: &[FacetDef]) -> Self {
        let mut state = Self::default();
        for def in defs {
            state.facets.insert(def.key.to_string(), Vec::new());
            state.active.insert(def.key.to_string(), false);
        }
        state
    }

    /// State described by a query string. Active flags follow the values.
    pub fn from_search(search: &str, defs: &[FacetDef]) -> Self {
        let pairs = parse_pairs(search);
        let raw_pairs = parse_raw_pairs(search);
        let mut state = Self::empty(defs);

        state.query = get_param(&pairs, QUERY_KEY).map(clean_text).unwrap_or_default();
        state.page = parse_page(get_param(&pairs, PAGE_KEY));

        for def in defs {
            let values = get_param(&raw_pairs, def.key).map(split_list).unwrap_or_default();
            state.active.insert(def.key.to_string(), !values.is_empty());
            state.facets.insert(def.key.to_string(), values);
        }
        state
    }

    /// Encoded `(key, value)` pairs this state contributes to the URL, in
    /// canonical order: `q`, facets in definition order, `page`.
    pub fn to_params(&self, defs: &[FacetDef]) -> Vec<(String, String)> {
        let mut params = Vec::new();

        let query = self.query.trim();
        if !query.is_empty() {
            params.push((QUERY_KEY.to_string(), urlencoding::encode(query).into_owned()));
        }
        for def in defs {
            let values = self.values(def.key);
            if !values.is_empty() {
                params.push((def.key.to_string(), encode_list(values)));
            }
        }
        if self.page > 1 {
            params.push((PAGE_KEY.to_string(), self.page.to_string()));
        }
        params
    }

    pub fn values(&self, facet: &str) -> &[String] {
        self.facets.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_active(&self, facet: &str) -> bool {
        self.active.get(facet).copied().unwrap_or(false)
    }

    /// True if the query or any facet constrains the result set
    pub fn has_any_selection(&self) -> bool {
        !self.query.trim().is_empty() || self.facets.values().any(|v| !v.is_empty())
    }

    /// Number of constraining facets plus the query (badge counter)
    pub fn active_count(&self) -> usize {
        let query = usize::from(!self.query.trim().is_empty());
        query + self.facets.values().filter(|v| !v.is_empty()).count()
    }

    /// Equality of the URL-visible part, facets compared as sets
    pub fn same_selection(&self, other: &Self) -> bool {
        fn as_sets(state: &FilterState) -> BTreeMap<&str, BTreeSet<&str>> {
            state
                .facets
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.as_str(), v.iter().map(String::as_str).collect()))
                .collect()
        }
        self.query.trim() == other.query.trim()
            && self.page == other.page
            && as_sets(self) == as_sets(other)
    }
}

/// Short label for a facet's selection: the values themselves when there
/// are at most two, otherwise a count.
pub fn summarize(values: &[String]) -> String {
    if values.len() <= 2 {
        values.join(", ")
    } else {
        format!("{} selected", values.len())
    }
}

/// Records that can be narrowed by a [`FilterState`]
pub trait FacetRecord {
    /// Whether the record matches any of `selected` for `facet`
    fn matches_facet(&self, facet: &str, selected: &[String]) -> bool;

    /// Whether the record matches the (trimmed, non-empty) free-text query
    fn matches_query(&self, query: &str) -> bool;
}

/// Records matching every non-empty facet and the query
pub fn apply_filter<T: FacetRecord + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    let query = state.query.trim();
    items
        .iter()
        .filter(|item| query.is_empty() || item.matches_query(query))
        .filter(|item| {
            state
                .facets
                .iter()
                .filter(|(_, selected)| !selected.is_empty())
                .all(|(facet, selected)| item.matches_facet(facet, selected))
        })
        .cloned()
        .collect()
}
