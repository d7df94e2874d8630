use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

use crate::shared::filter::query_params::{get_param, merge_search, parse_pairs};

pub const VIEW_KEY: &str = "view";

/// Screens reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Schools,
    Applications,
}

impl AppView {
    pub fn key(&self) -> &'static str {
        match self {
            AppView::Schools => "schools",
            AppView::Applications => "applications",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppView::Schools => "School directory",
            AppView::Applications => "Applications",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppView::Schools => "schools",
            AppView::Applications => "applications",
        }
    }

    pub fn all() -> [AppView; 2] {
        [AppView::Schools, AppView::Applications]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.key() == key)
    }

    /// View named by the `view` param; unknown or missing means the directory
    pub fn from_search(search: &str) -> Self {
        let pairs = parse_pairs(search);
        get_param(&pairs, VIEW_KEY)
            .and_then(Self::from_key)
            .unwrap_or_default()
    }
}

/// `existing` with the `view` param set to `view`; other params are kept.
/// Returns `existing` untouched when it already names `view`.
pub fn search_with_view(existing: &str, view: AppView) -> String {
    if get_param(&parse_pairs(existing), VIEW_KEY) == Some(view.key()) {
        return existing.to_string();
    }
    merge_search(
        existing,
        &[VIEW_KEY],
        &[(VIEW_KEY.to_string(), view.key().to_string())],
    )
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppView::default()),
        }
    }

    /// Reads the starting screen from the address bar and keeps the `view`
    /// param in step with the active screen afterwards.
    pub fn init_url_integration(&self) {
        self.active.set(AppView::from_search(&current_search()));

        let this = *self;
        Effect::new(move |_| {
            let view = this.active.get();
            let current = current_search();
            let next = search_with_view(&current, view);

            // Only update URL if it actually changed
            if current == next {
                return;
            }
            let Some(w) = window() else {
                return;
            };
            let path = w.location().pathname().unwrap_or_default();
            if let Ok(history) = w.history() {
                let url = format!("{}{}", path, next);
                if history
                    .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
                    .is_err()
                {
                    log::warn!("history.replaceState rejected `{}`", url);
                }
            }
        });
    }

    pub fn open(&self, view: AppView) {
        if self.active.get_untracked() != view {
            log::debug!("open view '{}'", view.key());
            self.active.set(view);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
