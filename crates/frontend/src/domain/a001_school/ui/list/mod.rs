mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a001_school::aggregate::School;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_school::api;
use crate::shared::components::filter_panel::{FacetSection, FilterPanel};
use crate::shared::components::table::paging::page_slice;
use crate::shared::components::table::{DataTable, TableColumn};
use crate::shared::config::config;
use crate::shared::filter::{apply_filter, use_facet_filter};
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_list, SearchInput};
use crate::shared::page_frame::PageFrame;
use state::{create_state, facet_options, SCHOOL_FACETS};

const TABLE_ID: &str = "a001-school-table";

fn school_columns() -> Vec<TableColumn<School>> {
    vec![
        TableColumn::new("name", "School").sortable().min_width(220.0),
        TableColumn::new("province", "Province").sortable(),
        TableColumn::new("district", "District").sortable(),
        TableColumn::new("sector", "Sector").sortable(),
        TableColumn::new("schoolType", "Type").sortable(),
        TableColumn::new("combinations", "Combinations").min_width(140.0),
        TableColumn::new("status", "Accreditation")
            .sortable()
            .render(|value, school: &School| {
                view! {
                    <span class=school.status.badge_class()>{value.unwrap_or_default()}</span>
                }
                .into_any()
            }),
    ]
}

#[component]
pub fn SchoolSearchList() -> impl IntoView {
    let state = create_state();
    let filter = use_facet_filter(SCHOOL_FACETS);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let is_expanded = RwSignal::new(true);
    let page_size = config().table.page_size;

    // Responses arriving after unmount are dropped
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let load_data = Callback::new(move |_: ()| {
        set_loading.set(true);
        set_error.set(None);
        let alive = alive.clone();
        spawn_local(async move {
            let result = api::fetch_schools().await;
            if !alive.load(Ordering::Relaxed) {
                log::debug!("school directory response dropped after unmount");
                return;
            }
            match result {
                Ok(data) => {
                    log::debug!("loaded {} schools", data.len());
                    state.update(|s| {
                        s.all = data;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::warn!("school directory failed to load: {}", e);
                    set_error.set(Some(format!("Could not load schools: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data.run(());
        }
    });

    // Filter, then sort; the table only gets the current page
    let filtered = Memo::new(move |_| {
        let criteria = filter.state().get();
        state.with(|s| {
            let mut rows = apply_filter(&s.all, &criteria);
            sort_list(&mut rows, &s.sort);
            rows
        })
    });

    let current_page = Signal::derive(move || filter.state().with(|s| s.page));
    let total_items = Signal::derive(move || filtered.with(Vec::len));
    let page_rows = Signal::derive(move || {
        filtered.with(|rows| page_slice(rows, current_page.get(), page_size).to_vec())
    });
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));

    let toggle_sort = Callback::new(move |field: String| {
        state.update(|s| s.sort.toggle(&field));
    });

    let go_to_page = Callback::new(move |page: usize| filter.set_page(page));

    let query = Signal::derive(move || filter.state().with(|s| s.query.clone()));

    view! {
        <PageFrame page_id="a001_school--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"School directory"</h1>
                    <Badge>{move || total_items.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data.run(())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel is_expanded=is_expanded filter=filter>
                    <div class="filter-panel__search">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |text: String| filter.set_query(&text))
                            placeholder="School name, code or certificate number..."
                            debounce_ms=config().search.debounce_ms
                        />
                    </div>
                    <div class="filter-panel__facets">
                        {SCHOOL_FACETS
                            .iter()
                            .map(|def| {
                                let key = def.key;
                                let options = Signal::derive(move || {
                                    state.with(|s| facet_options(&s.all, key))
                                });
                                view! { <FacetSection filter=filter def=*def options=options /> }
                            })
                            .collect_view()}
                    </div>
                </FilterPanel>

                <DataTable
                    columns=school_columns()
                    rows=page_rows
                    sort=sort
                    on_sort=toggle_sort
                    current_page=current_page
                    page_size=page_size
                    total_items=total_items
                    on_page_change=go_to_page
                    empty_message="No schools match the current filters"
                    is_loading=loading
                    table_id=TABLE_ID
                />
            </div>
        </PageFrame>
    }
}
