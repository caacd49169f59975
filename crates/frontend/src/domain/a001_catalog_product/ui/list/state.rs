use super::columns::ColumnId;
use crate::shared::list_utils::{FilterValue, SortDirection};
use leptos::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// Состояние таблицы товаров; живёт только пока открыт список
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogProductListState {
    // Сортировка (по порядку приоритета)
    pub sorting: Vec<SortKey>,

    // Фильтры по колонкам
    pub filters: BTreeMap<ColumnId, FilterValue>,

    // Клиентская пагинация
    pub page_index: usize,
    pub page_size: usize,
}

impl CatalogProductListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sorting: Vec::new(),
            filters: BTreeMap::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn sort_direction(&self, column: ColumnId) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Клик по заголовку: asc → desc → без сортировки.
    /// Заменяет текущую сортировку, а не добавляет к ней.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !column.can_sort() {
            return;
        }
        self.sorting = SortDirection::cycle(self.sort_direction(column))
            .map(|direction| vec![SortKey { column, direction }])
            .unwrap_or_default();
        self.page_index = 0;
    }

    pub fn filter_value(&self, column: ColumnId) -> Option<&FilterValue> {
        self.filters.get(&column)
    }

    /// Установить или снять фильтр колонки (неактивный фильтр снимается)
    pub fn set_filter(&mut self, column: ColumnId, value: Option<FilterValue>) {
        let value = value.and_then(FilterValue::normalized);
        if self.filters.get(&column) == value.as_ref() {
            return;
        }
        match value {
            Some(v) => {
                self.filters.insert(column, v);
            }
            None => {
                self.filters.remove(&column);
            }
        }
        self.page_index = 0;
    }

    pub fn set_page_index(&mut self, page_index: usize, page_count: usize) {
        self.page_index = page_index.min(page_count.saturating_sub(1));
    }

    /// Новый размер страницы; первая строка текущей страницы остаётся видимой
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let first_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.page_index = first_row / page_size;
    }

    pub fn reset_page_index(&mut self) {
        self.page_index = 0;
    }
}

pub fn create_state(page_size: usize) -> RwSignal<CatalogProductListState> {
    RwSignal::new(CatalogProductListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_cycles_and_replaces() {
        let mut state = CatalogProductListState::new(10);
        state.toggle_sort(ColumnId::Price);
        assert_eq!(state.sort_direction(ColumnId::Price), Some(SortDirection::Asc));
        state.toggle_sort(ColumnId::Price);
        assert_eq!(state.sort_direction(ColumnId::Price), Some(SortDirection::Desc));

        state.toggle_sort(ColumnId::Title);
        assert_eq!(state.sorting.len(), 1);
        assert_eq!(state.sort_direction(ColumnId::Title), Some(SortDirection::Asc));
        assert_eq!(state.sort_direction(ColumnId::Price), None);

        state.toggle_sort(ColumnId::Title);
        state.toggle_sort(ColumnId::Title);
        assert!(state.sorting.is_empty());
    }

    #[test]
    fn test_service_columns_ignore_sort_clicks() {
        let mut state = CatalogProductListState::new(10);
        state.toggle_sort(ColumnId::Actions);
        assert!(state.sorting.is_empty());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = CatalogProductListState::new(10);
        state.page_index = 3;
        state.set_filter(ColumnId::Title, Some(FilterValue::Text("wid".to_string())));
        assert_eq!(state.page_index, 0);
        assert!(state.filter_value(ColumnId::Title).is_some());

        state.page_index = 2;
        state.set_filter(ColumnId::Title, Some(FilterValue::Text(String::new())));
        assert_eq!(state.filter_value(ColumnId::Title), None);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_same_filter_keeps_page() {
        let mut state = CatalogProductListState::new(10);
        state.set_filter(ColumnId::Title, Some(FilterValue::Text("a".to_string())));
        state.page_index = 1;
        state.set_filter(ColumnId::Title, Some(FilterValue::Text("a".to_string())));
        assert_eq!(state.page_index, 1);
    }

    #[test]
    fn test_page_size_keeps_first_row_visible() {
        let mut state = CatalogProductListState::new(10);
        state.page_index = 3; // rows 30..40
        state.set_page_size(20);
        assert_eq!(state.page_index, 1); // rows 20..40
        state.set_page_size(50);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_page_index_clamped() {
        let mut state = CatalogProductListState::new(10);
        state.set_page_index(7, 3);
        assert_eq!(state.page_index, 2);
        state.set_page_index(7, 0);
        assert_eq!(state.page_index, 0);
    }
}
