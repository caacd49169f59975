use leptos::prelude::*;

/// Количество страниц; пустой список всё равно занимает одну страницу
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// Разбор ввода "перейти на страницу" (1-based) в индекс страницы.
///
/// Пустая строка означает первую страницу, нечисловой ввод игнорируется,
/// число зажимается в [1, total_pages].
pub fn parse_page_input(raw: &str, total_pages: usize) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    let page: i64 = raw.parse().ok()?;
    let last = total_pages.max(1) as i64;
    Some((page.clamp(1, last) - 1) as usize)
}

/// PaginationControls component - first/prev/next/last, page jump and page size
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="First page"
            >
                "<<"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Previous page"
            >
                "<"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                ">"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
                disabled=is_last
                title="Last page"
            >
                ">>"
            </button>
            <span class="pagination-info">
                "Page "
                <strong>
                    {move || format!("{} of {}", current_page.get() + 1, total_pages.get().max(1))}
                </strong>
            </span>
            <span class="pagination-jump">
                "| Go to page: "
                <input
                    type="number"
                    class="pagination-jump__input"
                    min="1"
                    max=move || total_pages.get().to_string()
                    value=(current_page.get_untracked() + 1).to_string()
                    on:input=move |ev| {
                        if let Some(page) = parse_page_input(&event_target_value(&ev), total_pages.get()) {
                            on_page_change.run(page);
                        }
                    }
                />
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("Show {}", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 20), 5);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_parse_page_input() {
        assert_eq!(parse_page_input("", 5), Some(0));
        assert_eq!(parse_page_input("3", 5), Some(2));
        assert_eq!(parse_page_input("0", 5), Some(0));
        assert_eq!(parse_page_input("-4", 5), Some(0));
        assert_eq!(parse_page_input("99", 5), Some(4));
        assert_eq!(parse_page_input("abc", 5), None);
        assert_eq!(parse_page_input("2", 0), Some(0));
    }
}
