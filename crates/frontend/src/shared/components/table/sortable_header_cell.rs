//! Table header cell with a sort indicator
//!
//! # Examples
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     sort=Signal::derive(move || sort_state.get())
//!     on_sort=Callback::new(move |field: String| sort_state.update(|s| s.toggle(&field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortState};
use leptos::prelude::*;
use thaw::*;

/// Header cell that reports clicks through `on_sort`.
///
/// Non-sortable cells draw no indicator and ignore clicks.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Column key passed to `on_sort`
    #[prop(into)]
    sort_field: String,

    /// Sort state owned by the caller
    #[prop(into)]
    sort: Signal<SortState>,

    on_sort: Callback<String>,

    #[prop(optional, default = true)]
    sortable: bool,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();
    let field_for_class = sort_field;

    let handle_click = move |_| {
        if sortable {
            on_sort.run(field_for_click.clone());
        }
    };

    let header_style = if sortable {
        "cursor: pointer; padding-right: 12px;"
    } else {
        "padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {label}
                {sortable.then(|| view! {
                    <span class=move || sort.with(|s| get_sort_class(s.field.as_deref(), &field_for_class))>
                        {move || sort.with(|s| get_sort_indicator(s.field.as_deref(), &field_for_indicator, s.direction))}
                    </span>
                })}
            </div>
        </TableHeaderCell>
    }
}
