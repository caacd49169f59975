pub mod column_filter;
pub mod debounced_input;
pub mod pagination_controls;
pub mod table;

pub use column_filter::ColumnFilter;
pub use debounced_input::DebouncedInput;
pub use pagination_controls::PaginationControls;
