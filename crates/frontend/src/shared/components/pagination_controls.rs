use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Подпись диапазона строк: "26-50 из 120"
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 || page_size == 0 {
        return "0 из 0".to_string();
    }
    let from = (page * page_size + 1).min(total);
    let to = ((page + 1) * page_size).min(total);
    format!("{}-{} из {}", from, to, total)
}

/// Навигация по страницам списка и выбор размера страницы.
/// `current_page` считается с нуля.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// По умолчанию берётся из конфигурации
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| config().page_size_options.to_vec());

    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= total_pages.get();
    let go = move |page: usize| {
        let last = total_pages.get_untracked().saturating_sub(1);
        on_page_change.run(page.min(last));
    };

    let nav_button = move |glyph: &'static str, title: &'static str, target: fn(usize, usize) -> usize, forward: bool| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || if forward { at_last() } else { at_first() }
                on:click=move |_| go(target(current_page.get_untracked(), total_pages.get_untracked()))
            >
                {icon(glyph)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button("chevrons-left", "Первая страница", |_, _| 0, false)}
            {nav_button("chevron-left", "Предыдущая страница", |p, _| p.saturating_sub(1), false)}
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            {nav_button("chevron-right", "Следующая страница", |p, _| p + 1, true)}
            {nav_button("chevrons-right", "Последняя страница", |_, t| t.saturating_sub(1), true)}
            <select
                class="page-size-select"
                title="Строк на странице"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {sizes
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(0, 25, 120), "1-25 из 120");
        assert_eq!(range_label(4, 25, 120), "101-120 из 120");
        assert_eq!(range_label(0, 25, 0), "0 из 0");
    }
}
