//! Generic, stateless table.
//!
//! The caller owns sorting, filtering and paging: `rows` must already be the
//! exact page to show. The table draws headers (with sort indicators), the
//! body (rows, empty state or loading skeleton) and the page controls, and
//! reports clicks through `on_sort` / `on_page_change`.
//!
//! ```rust,ignore
//! let columns = vec![
//!     TableColumn::new("name", "Name").sortable(),
//!     TableColumn::new("status", "Status").render(|value, _row: &School| {
//!         view! { <span class="badge">{value.unwrap_or_default()}</span> }.into_any()
//!     }),
//! ];
//!
//! <DataTable
//!     columns=columns
//!     rows=page_rows
//!     sort=sort
//!     on_sort=Callback::new(move |key: String| sort.update(|s| s.toggle(&key)))
//!     current_page=page
//!     page_size=10usize
//!     total_items=total
//!     on_page_change=Callback::new(move |p| page.set(p))
//!     empty_message="No schools match the filters"
//!     is_loading=loading
//! />
//! ```

use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use super::paging::{body_mode, empty_row_colspan, BodyMode, SKELETON_COLUMNS, SKELETON_ROWS};
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::SortState;

/// Rows the table can display
pub trait TableRecord {
    /// Stable identity used to key rendered rows
    fn row_key(&self) -> String;

    /// Display value of the column `key`; `None` renders a blank cell
    fn field_value(&self, key: &str) -> Option<String>;
}

pub type CellRenderer<T> = Arc<dyn Fn(Option<String>, &T) -> AnyView + Send + Sync>;

/// Column declaration
pub struct TableColumn<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub min_width: f64,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            sortable: self.sortable,
            min_width: self.min_width,
            render: self.render.clone(),
        }
    }
}

impl<T: TableRecord> TableColumn<T> {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: false,
            min_width: 100.0,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    /// Custom cell renderer receiving the field value and the whole row
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<String>, &T) -> AnyView + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn render_cell(&self, row: &T) -> AnyView {
        let value = row.field_value(self.key);
        match &self.render {
            Some(render) => render(value, row),
            None => view! { <span>{value.unwrap_or_default()}</span> }.into_any(),
        }
    }
}

/// Row identity plus every displayed value, so an edited row is redrawn
fn row_fingerprint<T: TableRecord>(row: &T, keys: &[&'static str]) -> String {
    let mut key = row.row_key();
    for column in keys {
        key.push('\u{1f}');
        key.push_str(row.field_value(column).as_deref().unwrap_or_default());
    }
    key
}

#[component]
pub fn DataTable<T>(
    columns: Vec<TableColumn<T>>,

    /// Rows of the current page, already sorted
    #[prop(into)]
    rows: Signal<Vec<T>>,

    /// Drives the header indicators only
    #[prop(into)]
    sort: Signal<SortState>,

    /// Fired with the column key when a sortable header is clicked
    #[prop(optional)]
    on_sort: Option<Callback<String>>,

    /// 1-based
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    #[prop(into)]
    total_items: Signal<usize>,

    on_page_change: Callback<usize>,

    #[prop(into)]
    empty_message: String,

    #[prop(into)]
    is_loading: Signal<bool>,

    #[prop(optional)]
    table_id: &'static str,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let columns: Arc<[TableColumn<T>]> = columns.into();
    let header_columns = columns.clone();
    let column_keys: Arc<[&'static str]> = columns.iter().map(|c| c.key).collect();

    let on_header_click = Callback::new(move |key: String| {
        if let Some(on_sort) = on_sort {
            on_sort.run(key);
        }
    });

    view! {
        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header_columns
                            .iter()
                            .map(|col| view! {
                                <SortableHeaderCell
                                    label=col.header
                                    sort_field=col.key
                                    sort=sort
                                    on_sort=on_header_click
                                    sortable=col.sortable
                                    min_width=col.min_width
                                />
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || {
                        let columns = columns.clone();
                        let column_keys = column_keys.clone();
                        match body_mode(is_loading.get(), rows.with(Vec::len)) {
                            BodyMode::Skeleton => (0..SKELETON_ROWS)
                                .map(|_| view! {
                                    <tr class="table__skeleton-row">
                                        {(0..SKELETON_COLUMNS)
                                            .map(|_| view! { <td><div class="skeleton-line"></div></td> })
                                            .collect_view()}
                                    </tr>
                                })
                                .collect_view()
                                .into_any(),
                            // One full-width row, no data rows
                            BodyMode::Empty => view! {
                                <tr class="table__empty-row">
                                    <td colspan=empty_row_colspan(columns.len()).to_string()>
                                        {empty_message.clone()}
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            BodyMode::Rows => view! {
                                <For
                                    each=move || rows.get()
                                    key=move |row: &T| row_fingerprint(row, &column_keys)
                                    children=move |row: T| {
                                        let cells = columns
                                            .iter()
                                            .map(|col| {
                                                let cell = col.render_cell(&row);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view();
                                        view! { <TableRow>{cells}</TableRow> }
                                    }
                                />
                            }
                            .into_any(),
                        }
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=current_page
                page_size=page_size
                total_items=total_items
                on_page_change=on_page_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: u32,
        status: &'static str,
    }

    impl TableRecord for Row {
        fn row_key(&self) -> String {
            self.id.to_string()
        }

        fn field_value(&self, key: &str) -> Option<String> {
            match key {
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_fingerprint_changes_with_displayed_value() {
        let keys = ["status", "missing"];
        let before = row_fingerprint(&Row { id: 1, status: "Draft" }, &keys);
        let after = row_fingerprint(&Row { id: 1, status: "Submitted" }, &keys);
        assert_ne!(before, after);
        assert_eq!(before, row_fingerprint(&Row { id: 1, status: "Draft" }, &keys));
        assert!(before.starts_with('1'));
    }

    #[test]
    fn test_column_builders() {
        let col: TableColumn<Row> = TableColumn::new("status", "Status")
            .sortable()
            .min_width(140.0);
        assert!(col.sortable);
        assert_eq!(col.min_width, 140.0);
        assert!(col.render.is_none());
        assert!(!TableColumn::<Row>::new("id", "Id").sortable);
    }
}
