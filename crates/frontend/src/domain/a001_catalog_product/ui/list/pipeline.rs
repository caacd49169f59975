//! Производные данные таблицы: фильтр → сортировка → фасеты → страница.
//!
//! Работает с индексами в исходном (загруженном) списке, поэтому индекс строки
//! не зависит от сортировки и фильтров.

use super::columns::ColumnId;
use super::state::{CatalogProductListState, SortKey};
use crate::shared::components::pagination_controls::page_count;
use crate::shared::list_utils::{CellValue, ColumnFacets, FilterKind, FilterValue, SortDirection};
use contracts::domain::a001_catalog_product::Product;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    /// Позиция в загруженном списке
    pub index: usize,
    pub product: Product,
}

/// Текущая страница таблицы
#[derive(Clone, Debug, PartialEq)]
pub struct TableModel {
    pub rows: Vec<ProductRow>,
    /// Количество строк после фильтрации
    pub total_rows: usize,
    /// Действующий индекс страницы (0-based, в пределах page_count)
    pub page_index: usize,
    pub page_count: usize,
}

impl TableModel {
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Числовой фильтр, если значение колонки в первой строке — число
pub fn filter_kind(products: &[Product], column: ColumnId) -> FilterKind {
    match products.first().map(|p| column.value(p)) {
        Some(CellValue::Number(_)) => FilterKind::Numeric,
        _ => FilterKind::Text,
    }
}

/// Индексы строк, прошедших все фильтры, кроме `except`
pub fn filter_rows(
    products: &[Product],
    filters: &BTreeMap<ColumnId, FilterValue>,
    except: Option<ColumnId>,
) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| {
            filters
                .iter()
                .filter(|(column, _)| Some(**column) != except)
                .all(|(column, filter)| column.value(product).matches(filter))
        })
        .map(|(index, _)| index)
        .collect()
}

fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (CellValue::Text(x), CellValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ => {
            let x = a.to_filter_text().unwrap_or_default().to_lowercase();
            let y = b.to_filter_text().unwrap_or_default().to_lowercase();
            x.cmp(&y)
        }
    }
}

/// Категории: большее имя раньше, равные — в обратном порядке загрузки.
/// Никогда не возвращает `Equal` для разных строк.
fn compare_category(products: &[Product], a: usize, b: usize) -> Ordering {
    products[b]
        .category
        .name
        .cmp(&products[a].category.name)
        .then_with(|| b.cmp(&a))
}

fn compare_by_key(products: &[Product], a: usize, b: usize, key: &SortKey) -> Ordering {
    if key.column == ColumnId::Category {
        let cmp = compare_category(products, a, b);
        return match key.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        };
    }

    let va = key.column.value(&products[a]);
    let vb = key.column.value(&products[b]);
    // Пустые значения всегда в конце
    match (&va, &vb) {
        (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
        (CellValue::Empty, _) => Ordering::Greater,
        (_, CellValue::Empty) => Ordering::Less,
        _ => {
            let cmp = compare_values(&va, &vb);
            match key.direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        }
    }
}

/// Сортирует индексы строк; при равенстве — порядок загрузки
pub fn sort_rows(products: &[Product], rows: &mut [usize], sorting: &[SortKey]) {
    if sorting.is_empty() {
        return;
    }
    rows.sort_by(|&a, &b| {
        sorting
            .iter()
            .fold(Ordering::Equal, |acc, key| {
                acc.then_with(|| compare_by_key(products, a, b, key))
            })
            .then_with(|| a.cmp(&b))
    });
}

/// Фильтры только по колонкам, показанным в текущем наборе
fn visible_filters(
    filters: &BTreeMap<ColumnId, FilterValue>,
    visible: &[ColumnId],
) -> BTreeMap<ColumnId, FilterValue> {
    filters
        .iter()
        .filter(|(column, _)| visible.contains(column))
        .map(|(column, filter)| (*column, filter.clone()))
        .collect()
}

/// Фасеты колонки по строкам, отфильтрованным всеми видимыми фильтрами, кроме её собственного
pub fn compute_facets(
    products: &[Product],
    filters: &BTreeMap<ColumnId, FilterValue>,
    column: ColumnId,
    visible: &[ColumnId],
) -> ColumnFacets {
    let rows = filter_rows(products, &visible_filters(filters, visible), Some(column));
    let values: Vec<CellValue> = rows.iter().map(|&i| column.value(&products[i])).collect();
    ColumnFacets::from_values(&values)
}

/// Полный конвейер для текущего состояния.
///
/// Фильтры и сортировка по колонкам вне `visible` сохраняются в состоянии,
/// но не применяются, пока колонка скрыта.
pub fn build_table_model(
    products: &[Product],
    state: &CatalogProductListState,
    visible: &[ColumnId],
) -> TableModel {
    let mut rows = filter_rows(products, &visible_filters(&state.filters, visible), None);
    let sorting: Vec<SortKey> = state
        .sorting
        .iter()
        .filter(|key| visible.contains(&key.column))
        .cloned()
        .collect();
    sort_rows(products, &mut rows, &sorting);

    let total_rows = rows.len();
    let page_size = state.page_size.max(1);
    let page_count = page_count(total_rows, page_size);
    let page_index = state.page_index.min(page_count - 1);

    let rows = rows
        .into_iter()
        .skip(page_index * page_size)
        .take(page_size)
        .map(|index| ProductRow {
            index,
            product: products[index].clone(),
        })
        .collect();

    TableModel {
        rows,
        total_rows,
        page_index,
        page_count,
    }
}
