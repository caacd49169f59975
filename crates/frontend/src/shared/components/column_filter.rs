//! Фильтр колонки в заголовке таблицы.
//!
//! Числовая колонка получает пару полей min/max, остальные — поле поиска
//! с подсказками из фасетов. Сама фильтрация выполняется вне компонента.

use super::debounced_input::DebouncedInput;
use crate::shared::config::use_app_config;
use crate::shared::list_utils::{format_number, ColumnFacets, FilterKind, FilterValue};
use leptos::prelude::*;

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn bound_text(bound: Option<f64>) -> String {
    bound.map(format_number).unwrap_or_default()
}

/// Новое значение диапазона после правки одной из границ
pub fn with_range_min(current: Option<&FilterValue>, raw: &str) -> Option<FilterValue> {
    let max = current.and_then(FilterValue::range_max);
    FilterValue::Range(parse_bound(raw), max).normalized()
}

pub fn with_range_max(current: Option<&FilterValue>, raw: &str) -> Option<FilterValue> {
    let min = current.and_then(FilterValue::range_min);
    FilterValue::Range(min, parse_bound(raw)).normalized()
}

pub fn range_placeholder(label: &str, bound: Option<f64>) -> String {
    match bound {
        Some(v) => format!("{} ({})", label, format_number(v)),
        None => label.to_string(),
    }
}

pub fn search_placeholder(facets: &ColumnFacets) -> String {
    format!("Search... ({})", facets.unique_values.len())
}

#[component]
pub fn ColumnFilter(
    /// Ключ колонки, из него строится id datalist
    column_key: &'static str,
    #[prop(into)]
    kind: Signal<FilterKind>,
    #[prop(into)]
    facets: Signal<ColumnFacets>,
    #[prop(into)]
    value: Signal<Option<FilterValue>>,
    on_change: Callback<Option<FilterValue>>,
) -> impl IntoView {
    let max_suggestions = use_app_config().max_suggestions;
    let list_id = format!("{}-list", column_key);

    let min_bound = move || facets.with(|f| f.min_max.map(|(lo, _)| lo));
    let max_bound = move || facets.with(|f| f.min_max.map(|(_, hi)| hi));

    move || match kind.get() {
        FilterKind::Numeric => view! {
            <div class="column-filter column-filter--range">
                <DebouncedInput
                    input_type="number"
                    class="column-filter__input"
                    value=Signal::derive(move || {
                        bound_text(value.with(|v| v.as_ref().and_then(FilterValue::range_min)))
                    })
                    on_change=Callback::new(move |raw: String| {
                        on_change.run(with_range_min(value.get_untracked().as_ref(), &raw));
                    })
                    min=Signal::derive(move || min_bound().map(format_number))
                    max=Signal::derive(move || max_bound().map(format_number))
                    placeholder=Signal::derive(move || range_placeholder("Min", min_bound()))
                />
                <DebouncedInput
                    input_type="number"
                    class="column-filter__input"
                    value=Signal::derive(move || {
                        bound_text(value.with(|v| v.as_ref().and_then(FilterValue::range_max)))
                    })
                    on_change=Callback::new(move |raw: String| {
                        on_change.run(with_range_max(value.get_untracked().as_ref(), &raw));
                    })
                    min=Signal::derive(move || min_bound().map(format_number))
                    max=Signal::derive(move || max_bound().map(format_number))
                    placeholder=Signal::derive(move || range_placeholder("Max", max_bound()))
                />
            </div>
        }
        .into_any(),
        FilterKind::Text => {
            let list_id = list_id.clone();
            view! {
                <div class="column-filter">
                    <datalist id=list_id.clone()>
                        {move || {
                            facets
                                .with(|f| f.suggestions(max_suggestions))
                                .into_iter()
                                .map(|s| view! { <option value=s></option> })
                                .collect_view()
                        }}
                    </datalist>
                    <DebouncedInput
                        class="column-filter__input"
                        value=Signal::derive(move || {
                            value.with(|v| v.as_ref().map(|f| f.text().to_string()).unwrap_or_default())
                        })
                        on_change=Callback::new(move |text: String| {
                            on_change.run(FilterValue::Text(text).normalized());
                        })
                        placeholder=Signal::derive(move || facets.with(search_placeholder))
                        list=list_id
                    />
                </div>
            }
            .into_any()
        }
    }
}
