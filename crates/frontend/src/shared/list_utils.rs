/// Универсальные утилиты для работы со списками (сортировка, пагинация, поиск)
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сравнение строк без учёта регистра
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сравнение необязательных строк: пустые в конце при сортировке по возрастанию
pub fn cmp_ci_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_ci(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Одна страница отфильтрованного списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Нарезает страницу. Номер страницы (с нуля) прижимается к последней существующей.
pub fn paginate<T: Clone>(data: &[T], page: usize, page_size: usize) -> ListPage<T> {
    let page_size = page_size.max(1);
    let total_count = data.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    };
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    ListPage {
        items: data.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

/// Индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Переключение сортировки: то же поле меняет направление, новое поле сортирует по возрастанию
pub fn toggle_sort_state(sort_field: &mut String, sort_ascending: &mut bool, field: &str) {
    if sort_field == field {
        *sort_ascending = !*sort_ascending;
    } else {
        *sort_field = field.to_string();
        *sort_ascending = true;
    }
}

/// Поле поиска с задержкой 300 мс и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается после паузы во вводе
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // каждое нажатие увеличивает поколение, устаревшие таймеры ничего не делают
    let generation = StoredValue::new(0u64);

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        rank: u32,
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "rank" => self.rank.cmp(&other.rank),
                _ => cmp_ci(self.name, other.name),
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = vec![
            Item { name: "b", rank: 2 },
            Item { name: "A", rank: 3 },
            Item { name: "c", rank: 1 },
        ];
        sort_list(&mut items, "name", true);
        assert_eq!(items.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["A", "b", "c"]);
        sort_list(&mut items, "rank", false);
        assert_eq!(items.iter().map(|i| i.rank).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let data: Vec<u32> = (1..=23).collect();
        let page = paginate(&data, 2, 10);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 23);

        let clamped = paginate(&data, 9, 10);
        assert_eq!(clamped.page, 2);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 3, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_cmp_ci_opt_puts_missing_last() {
        assert_eq!(cmp_ci_opt(Some("a"), None), Ordering::Less);
        assert_eq!(cmp_ci_opt(None, None), Ordering::Equal);
        assert_eq!(cmp_ci_opt(Some("B"), Some("a")), Ordering::Greater);
    }

    #[test]
    fn test_toggle_sort_state() {
        let mut field = "name".to_string();
        let mut asc = true;
        toggle_sort_state(&mut field, &mut asc, "name");
        assert!(!asc);
        toggle_sort_state(&mut field, &mut asc, "price");
        assert_eq!(field, "price");
        assert!(asc);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
