pub mod columns;
pub mod pipeline;
pub mod state;

use self::columns::{column_set, ColumnId, CARD_FIELDS};
use self::pipeline::{build_table_model, compute_facets, filter_kind, ProductRow};
use self::state::{create_state, CatalogProductListState};
use crate::domain::a001_catalog_product::api::load_products;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{ColumnFilter, PaginationControls};
use crate::shared::config::use_app_config;
use crate::shared::list_utils::FilterValue;
use crate::shared::media_info::use_media_info;
use contracts::domain::a001_catalog_product::Product;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

/// "Edit" только выводит запись в консоль разработчика
fn log_edit(product: &Product) {
    log::info!("edit: {:#?}", product);
}

#[component]
#[allow(non_snake_case)]
pub fn CatalogProductList() -> impl IntoView {
    let config = use_app_config();
    let media = use_media_info();

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let state = create_state(config.default_page_size);

    // Единственная загрузка при монтировании; результат после размонтирования отбрасывается
    let url = config.catalog_url.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let loaded = load_products(&url).await;
        if !loaded.is_empty() && set_products.try_set(loaded).is_none() {
            state.try_update(CatalogProductListState::reset_page_index);
        }
    });

    let columns = Memo::new(move |_| column_set(media.get().class()));
    let filters = Memo::new(move |_| state.with(|s| s.filters.clone()));
    let model = Memo::new(move |_| {
        let visible = columns.get();
        products.with(|p| state.with(|s| build_table_model(p, s, visible)))
    });

    let rows = move || model.with(|m| m.rows.clone());

    view! {
        <div class="content catalog-products">
            <div class="viewport-banner">{move || media.get().class().label()}</div>

            {move || {
                if media.get().is_mobile {
                    view! {
                        <div class="product-cards">
                            <For
                                each=rows
                                key=|row| row.index
                                children=move |row| view! { <ProductCard row=row /> }
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="table-container">
                            <Table class="catalog-products__table" attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        {move || {
                                            columns
                                                .get()
                                                .iter()
                                                .map(|&column| view! {
                                                    <ColumnHeader column=column state=state products=products filters=filters visible=columns />
                                                })
                                                .collect_view()
                                        }}
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || {
                                        let cols = columns.get();
                                        rows()
                                            .into_iter()
                                            .map(|row| view! { <ProductTableRow row=row columns=cols /> })
                                            .collect_view()
                                    }}
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any()
                }
            }}

            <PaginationControls
                current_page=Signal::derive(move || model.with(|m| m.page_index))
                total_pages=Signal::derive(move || model.with(|m| m.page_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page: usize| {
                    let page_count = model.with_untracked(|m| m.page_count);
                    state.update(|s| s.set_page_index(page, page_count));
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| s.set_page_size(size));
                })
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}

#[component]
fn ColumnHeader(
    column: ColumnId,
    state: RwSignal<CatalogProductListState>,
    products: ReadSignal<Vec<Product>>,
    filters: Memo<BTreeMap<ColumnId, FilterValue>>,
    visible: Memo<&'static [ColumnId]>,
) -> impl IntoView {
    let direction = Signal::derive(move || state.with(|s| s.sort_direction(column)));
    let on_sort = Callback::new(move |_: ()| state.update(|s| s.toggle_sort(column)));

    let filter_props = column.can_filter().then(|| {
        let kind = Signal::derive(move || products.with(|p| filter_kind(p, column)));
        let facets = Memo::new(move |_| {
            let visible = visible.get();
            products.with(|p| filters.with(|f| compute_facets(p, f, column, visible)))
        });
        let value = Signal::derive(move || filters.with(|f| f.get(&column).cloned()));
        let on_change = Callback::new(move |v: Option<FilterValue>| {
            state.update(|s| s.set_filter(column, v));
        });
        (kind, facets, value, on_change)
    });

    view! {
        <SortableHeaderCell
            label=column.header()
            sortable=column.can_sort()
            direction=direction
            on_sort=on_sort
        >
            {filter_props.map(|(kind, facets, value, on_change)| view! {
                <ColumnFilter
                    column_key=column.key()
                    kind=kind
                    facets=facets
                    value=value
                    on_change=on_change
                />
            })}
        </SortableHeaderCell>
    }
}

#[component]
fn ProductTableRow(row: ProductRow, columns: &'static [ColumnId]) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|&column| {
            let text = column.display(&row.product, row.index);
            match column {
                ColumnId::Actions => {
                    let product = row.product.clone();
                    view! {
                        <TableCell>
                            <button class="btn btn-secondary" on:click=move |_| log_edit(&product)>
                                "Edit"
                            </button>
                        </TableCell>
                    }
                    .into_any()
                }
                ColumnId::Price => view! {
                    <TableCell class="table__cell--right">
                        <TableCellLayout>{text}</TableCellLayout>
                    </TableCell>
                }
                .into_any(),
                _ => view! {
                    <TableCell>
                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                    </TableCell>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! { <TableRow>{cells}</TableRow> }
}

/// Карточка товара для мобильного экрана
#[component]
fn ProductCard(row: ProductRow) -> impl IntoView {
    let fields = CARD_FIELDS
        .iter()
        .map(|&column| {
            let text = column.display(&row.product, row.index);
            view! {
                <div class="product-card__field">
                    <span class="product-card__label">{column.header()}</span>
                    <span class="product-card__value">{text}</span>
                </div>
            }
        })
        .collect_view();
    let product = row.product.clone();

    view! {
        <div class="product-card">
            <div class="product-card__header">
                <b>{format!("# {}", row.index)}</b>
                <button class="btn btn-secondary" on:click=move |_| log_edit(&product)>
                    "Edit"
                </button>
            </div>
            {fields}
        </div>
    }
}
