/// Утилиты для работы со списками: сортировка, фильтры колонок, фасеты
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Направление сортировки колонки
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Следующее состояние по клику: asc → desc → без сортировки
    pub fn cycle(current: Option<SortDirection>) -> Option<SortDirection> {
        match current {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        }
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Вид фильтра колонки
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Диапазон min/max
    Numeric,
    /// Поиск подстроки с подсказками
    Text,
}

/// Значение фильтра колонки
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Text(String),
    Range(Option<f64>, Option<f64>),
}

impl FilterValue {
    /// Пустой фильтр не хранится
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Text(text) => !text.is_empty(),
            FilterValue::Range(min, max) => min.is_some() || max.is_some(),
        }
    }

    /// Возвращает `None` для неактивного фильтра
    pub fn normalized(self) -> Option<Self> {
        self.is_active().then_some(self)
    }

    pub fn range_min(&self) -> Option<f64> {
        match self {
            FilterValue::Range(min, _) => *min,
            FilterValue::Text(_) => None,
        }
    }

    pub fn range_max(&self) -> Option<f64> {
        match self {
            FilterValue::Range(_, max) => *max,
            FilterValue::Text(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FilterValue::Text(text) => text,
            FilterValue::Range(..) => "",
        }
    }
}

/// Значение ячейки, по которому работают фильтры, сортировка и фасеты
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Строковое представление значения (`None` для пустого)
    pub fn to_filter_text(&self) -> Option<String> {
        match self {
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Empty => None,
        }
    }

    /// Проверяет значение ячейки на соответствие фильтру.
    ///
    /// Текст: подстрока без учёта регистра. Диапазон: границы включительно,
    /// пустая граница открыта, min > max меняются местами.
    pub fn matches(&self, filter: &FilterValue) -> bool {
        match filter {
            FilterValue::Text(needle) => {
                if needle.is_empty() {
                    return true;
                }
                self.to_filter_text()
                    .map(|hay| hay.to_lowercase().contains(&needle.to_lowercase()))
                    .unwrap_or(false)
            }
            FilterValue::Range(min, max) => {
                let (min, max) = match (*min, *max) {
                    (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
                    bounds => bounds,
                };
                let CellValue::Number(value) = self else {
                    return min.is_none() && max.is_none();
                };
                min.map_or(true, |lo| *value >= lo) && max.map_or(true, |hi| *value <= hi)
            }
        }
    }
}

/// Фасеты колонки: различные значения с количеством и min/max для чисел
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnFacets {
    pub unique_values: BTreeMap<String, usize>,
    pub min_max: Option<(f64, f64)>,
}

impl ColumnFacets {
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut facets = ColumnFacets::default();
        for value in values {
            if let CellValue::Number(n) = value {
                facets.min_max = Some(match facets.min_max {
                    Some((lo, hi)) => (lo.min(*n), hi.max(*n)),
                    None => (*n, *n),
                });
            }
            if let Some(key) = value.to_filter_text() {
                *facets.unique_values.entry(key).or_insert(0) += 1;
            }
        }
        facets
    }

    /// Отсортированные подсказки, не более `limit`
    pub fn suggestions(&self, limit: usize) -> Vec<String> {
        self.unique_values.keys().take(limit).cloned().collect()
    }
}

/// Число без лишних нулей: 9.99 -> "9.99", 10.0 -> "10"
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
