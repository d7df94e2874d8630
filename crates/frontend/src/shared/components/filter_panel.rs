use crate::shared::filter::{summarize, FacetDef, FacetFilter};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter panel
///
/// Header shows the active filter count and a "Clear filters" action that is
/// enabled only while something is selected.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Filter controller of the page
    filter: FacetFilter,

    /// Filter content (search box, facet sections)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let active_count = Signal::derive(move || filter.state().with(|s| s.active_count()));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_count.get();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost"
                        disabled=move || !filter.has_any_selection()
                        on:click=move |_| filter.clear_all()
                    >
                        {icon("x")}
                        " Clear filters"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                    <FilterTags filter=filter />
                </div>
            </div>
        </div>
    }
}

/// One facet: activation checkbox, selection summary and value checkboxes
#[component]
pub fn FacetSection(
    filter: FacetFilter,
    def: FacetDef,
    /// Values the user can pick from
    #[prop(into)]
    options: Signal<Vec<String>>,
) -> impl IntoView {
    let key = def.key;
    let is_active = Signal::derive(move || filter.state().with(|s| s.is_active(key)));
    let selected = Signal::derive(move || filter.state().with(|s| s.values(key).to_vec()));

    view! {
        <div class="facet">
            <label class="facet__header">
                <input
                    type="checkbox"
                    prop:checked=move || is_active.get()
                    on:change=move |ev| filter.toggle_facet_active(key, event_target_checked(&ev))
                />
                <span class="facet__label">{def.label}</span>
                <span class="facet__summary">{move || summarize(&selected.get())}</span>
            </label>
            <Show when=move || is_active.get()>
                <div class="facet__values">
                    {move || {
                        let current = selected.get();
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let checked = current.contains(&option);
                                let value = option.clone();
                                view! {
                                    <label class="facet__value">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |ev| {
                                                let mut next = selected.get_untracked();
                                                if event_target_checked(&ev) {
                                                    next.push(value.clone());
                                                } else {
                                                    next.retain(|v| v != &value);
                                                }
                                                filter.set_facet_values(key, next);
                                            }
                                        />
                                        {option}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Chips for every selected value; removing one narrows that facet
#[component]
fn FilterTags(filter: FacetFilter) -> impl IntoView {
    let defs = filter.defs();

    view! {
        <div class="filter-tags">
            {move || {
                filter.state().with(|state| {
                    defs.iter()
                        .flat_map(|def| {
                            let values = state.values(def.key).to_vec();
                            let chips = values.clone();
                            chips.into_iter().map(move |value| {
                                let key = def.key;
                                let remaining: Vec<String> =
                                    values.iter().filter(|v| **v != value).cloned().collect();
                                view! {
                                    <FilterTag
                                        label=format!("{}: {}", def.label, value)
                                        on_remove=Callback::new(move |_| {
                                            filter.set_facet_values(key, remaining.clone())
                                        })
                                    />
                                }
                            })
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
