use crate::shared::components::table::paging::{
    next_target, page_change, page_window, prev_target, range_info, total_pages,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - Previous / page window / Next
///
/// Pages are 1-based. `on_page_change` only ever receives a page inside
/// `[1, total_pages]` that differs from the current one.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Total count of items across all pages
    #[prop(into)]
    total_items: Signal<usize>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let pages = Memo::new(move |_| total_pages(total_items.get(), page_size.get()));

    let go = move |page: usize| {
        if let Some(page) = page_change(page, current_page.get_untracked(), pages.get_untracked()) {
            on_page_change.run(page);
        }
    };

    let prev = move || prev_target(current_page.get(), pages.get());
    let next = move || next_target(current_page.get(), pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = prev_target(current_page.get_untracked(), pages.get_untracked()) {
                        go(page);
                    }
                }
                disabled=move || prev().is_none()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, pages.get())
                    .map(|page| {
                        let class = if page == current {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button class=class on:click=move |_| go(page)>
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = next_target(current_page.get_untracked(), pages.get_untracked()) {
                        go(page);
                    }
                }
                disabled=move || next().is_none()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || {
                    let total = total_items.get();
                    let (start, end) = range_info(current_page.get(), page_size.get(), total);
                    format!("{}–{} of {}", start, end, total)
                }}
            </span>
        </div>
    }
}
