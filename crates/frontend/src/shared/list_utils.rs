/// Shared list helpers: sorting state, sort indicators and the search box
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait for records that can be sorted by a named column
pub trait Sortable {
    /// Compares two records by `field`.
    ///
    /// String columns compare case-sensitively (byte order).
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Current sort column and direction of a list screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(field: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            direction: SortDirection::Asc,
        }
    }

    /// Header click: a new column starts ascending, the same column flips.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }
}

/// Stable sort of `items` by the column in `sort`; no-op without a column
pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortState) {
    let Some(field) = sort.field.as_deref() else {
        return;
    };
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if sort.direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a header cell
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, direction: SortDirection) -> &'static str {
    if current_field == Some(field) {
        match direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator span
pub fn get_sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Committed value (after debounce)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Debounce delay in milliseconds
    #[prop(optional, default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local text until the debounce fires
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Follow external resets (clear all, back navigation)
    Effect::new(move |_| {
        let committed = value.get();
        if input_value.get_untracked().trim() != committed.trim() {
            set_input_value.set(committed);
        }
    });

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(_) => log::warn!("setTimeout failed, search debounce skipped"),
        }
    };

    let clear_filter = move |_| {
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if value.get().trim().is_empty() {
                    "search-input__field"
                } else {
                    "search-input__field search-input__field--active"
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
