pub mod data_table;
pub mod paging;
pub mod sortable_header_cell;

pub use data_table::{DataTable, TableColumn, TableRecord};
pub use sortable_header_cell::SortableHeaderCell;
