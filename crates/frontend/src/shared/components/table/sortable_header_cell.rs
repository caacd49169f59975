//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sortable=true
//!     direction=Signal::derive(move || state.with(|s| s.sort_direction(column)))
//!     on_sort=Callback::new(move |_| state.update(|s| s.toggle_sort(column)))
//! >
//!     <ColumnFilter ... />
//! </SortableHeaderCell>
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: подпись с индикатором сортировки (▲▼) и слот для фильтра
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    label: &'static str,

    /// Можно ли сортировать по колонке
    #[prop(optional)]
    sortable: bool,

    /// Текущее направление сортировки колонки
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 80.0)]
    min_width: f64,

    /// Фильтр под заголовком
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let handle_click = move |_| {
        if sortable {
            on_sort.run(());
        }
    };

    let header_class = if sortable {
        "table__sortable-header cursor-pointer user-select-none"
    } else {
        "table__header"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div class=header_class on:click=handle_click>
                <b>{label}</b>
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
            {children.map(|c| view! { <div class="table__header-filter">{c()}</div> })}
        </TableHeaderCell>
    }
}
