mod state;

use contracts::domain::a004_news_category::NewsCategory;
use contracts::domain::a005_news::{News, NewsFilter, NewsPatch};
use contracts::enums::NewsStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_news_category::api as category_api;
use crate::domain::a005_news::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::badge::NewsStatusBadge;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, cmp_ci_opt, paginate, sort_list, toggle_sort_state, SearchInput, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::prefs::{save_list_prefs, ListPrefs};
use crate::shared::toast::use_toast;
use state::{create_state, LIST_ID};

impl Sortable for News {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "title" => cmp_ci(&self.title, &other.title),
            "category" => cmp_ci_opt(self.category_name.as_deref(), other.category_name.as_deref()),
            "status" => self.status.code().cmp(other.status.code()),
            "featured" => self.is_featured.cmp(&other.is_featured),
            "views" => self.view_count.cmp(&other.view_count),
            _ => self.display_date().cmp(other.display_date()),
        }
    }
}

impl ExcelExportable for News {
    fn headers() -> Vec<&'static str> {
        vec!["Заголовок", "Slug", "Рубрика", "Статус", "Главная", "Автор", "Теги", "Просмотры", "Дата"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.slug.clone(),
            self.category_name.clone().unwrap_or_default(),
            self.status.display_name().to_string(),
            if self.is_featured { "Да" } else { "Нет" }.to_string(),
            self.author.clone().unwrap_or_default(),
            self.tags.join(", "),
            self.view_count.to_string(),
            format_datetime(self.display_date()),
        ]
    }
}

/// Следующий статус для кнопки «Опубликовать / Снять с публикации»
fn toggled_status(status: NewsStatus) -> NewsStatus {
    match status {
        NewsStatus::Published => NewsStatus::Draft,
        NewsStatus::Draft | NewsStatus::Archived => NewsStatus::Published,
    }
}

#[component]
pub fn NewsList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();
    let state = create_state();
    let all_news: RwSignal<Vec<News>> = RwSignal::new(Vec::new());
    let categories: RwSignal<Vec<NewsCategory>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let pending_delete: RwSignal<Option<News>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let filtered = move || {
        let mut data = all_news.get_untracked();
        state.with_untracked(|s| {
            data.retain(|n| n.matches(&s.filter));
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
        });
        data
    };

    let refresh_view = move || {
        let data = filtered();
        state.update(|s| {
            let page = paginate(&data, s.page, s.page_size);
            s.items = page.items;
            s.page = page.page;
            s.total_pages = page.total_pages;
            s.total_count = page.total_count;
        });
    };

    let persist_prefs = move || {
        state.with_untracked(|s| {
            save_list_prefs(
                LIST_ID,
                &ListPrefs {
                    page_size: s.page_size,
                    sort_field: Some(s.sort_field.clone()),
                    sort_ascending: s.sort_ascending,
                },
            )
        });
    };

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_news().await {
                Ok(data) => {
                    all_news.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => toast.api_error("Не удалось загрузить новости", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            spawn_local(async move {
                match category_api::fetch_categories().await {
                    Ok(list) => categories.set(list),
                    Err(e) => toast.api_error("Не удалось загрузить рубрики", &e),
                }
            });
            load_data();
        }
    });

    let update_filter = move |f: &dyn Fn(&mut NewsFilter)| {
        state.update(|s| {
            f(&mut s.filter);
            s.page = 0;
        });
        refresh_view();
    };

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| toggle_sort_state(&mut s.sort_field, &mut s.sort_ascending, &field));
        persist_prefs();
        refresh_view();
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        persist_prefs();
        refresh_view();
    };

    let open_details = move |news: Option<&News>| {
        let key = detail_key("a005_news", news.map(|n| n.id.as_str()));
        let title = match news {
            Some(n) => detail_tab_label("a005_news", &n.title),
            None => tab_label_for_key(&key).to_string(),
        };
        tabs_store.open_tab(&key, &title);
    };

    // Локальная правка записи без перезагрузки списка
    let patch_local = move |id: String, patch: NewsPatch| {
        all_news.update(|list| {
            if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                if let Some(status) = patch.status {
                    n.status = status;
                }
                if let Some(featured) = patch.is_featured {
                    n.is_featured = featured;
                }
            }
        });
        refresh_view();
    };

    let toggle_featured = move |news: News| {
        let next = NewsPatch {
            is_featured: Some(!news.is_featured),
            ..Default::default()
        };
        let rollback = NewsPatch {
            is_featured: Some(news.is_featured),
            ..Default::default()
        };
        patch_local(news.id.clone(), next.clone());
        spawn_local(async move {
            if let Err(e) = api::patch_news(&news.id, &next).await {
                patch_local(news.id.clone(), rollback);
                toast.api_error("Не удалось изменить отметку «главная»", &e);
            }
        });
    };

    let toggle_published = move |news: News| {
        let status = toggled_status(news.status);
        let next = NewsPatch {
            status: Some(status),
            ..Default::default()
        };
        if status == NewsStatus::Published && news.content.trim().is_empty() {
            toast.error("Нельзя опубликовать новость без текста");
            return;
        }
        spawn_local(async move {
            match api::patch_news(&news.id, &next).await {
                Ok(()) => {
                    patch_local(news.id.clone(), next);
                    toast.success(if status == NewsStatus::Published {
                        "Новость опубликована"
                    } else {
                        "Новость снята с публикации"
                    });
                }
                Err(e) => toast.api_error("Не удалось изменить статус", &e),
            }
        });
    };

    let delete_news = Callback::new(move |news: News| {
        spawn_local(async move {
            match api::delete_news(&news.id).await {
                Ok(()) => {
                    all_news.update(|list| list.retain(|n| n.id != news.id));
                    refresh_view();
                    tabs_store.close_tab(&detail_key("a005_news", Some(&news.id)));
                    toast.success("Новость удалена");
                }
                Err(e) => toast.api_error("Не удалось удалить новость", &e),
            }
        });
    });

    let export = move |_| {
        if let Err(e) = export_to_excel(&filtered(), "news") {
            toast.error(e);
        }
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a005_news--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Новости"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                        {icon("plus")}
                        " Новая новость"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.filter.active_count()))
                    pagination=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().page)
                            total_pages=Signal::derive(move || state.get().total_pages)
                            total_count=Signal::derive(move || state.get().total_count)
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    }
                    actions=move || view! {
                        <Button appearance=ButtonAppearance::Subtle on_click=export>
                            {icon("download")}
                            " Excel"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.filter.query.clone()))
                                on_change=Callback::new(move |q: String| update_filter(&|f: &mut NewsFilter| f.query = q.clone()))
                                placeholder="Заголовок, автор, теги..."
                            />
                        </div>
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                let value = contracts::shared::text::non_empty(&event_target_value(&ev));
                                update_filter(&|f: &mut NewsFilter| f.category_id = value.clone());
                            }
                        >
                            <option value="">"Все рубрики"</option>
                            <For
                                each=move || categories.get()
                                key=|c| c.id.clone()
                                children=|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                            />
                        </select>
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                let status = NewsStatus::from_code(&event_target_value(&ev));
                                update_filter(&|f: &mut NewsFilter| f.status = status);
                            }
                        >
                            <option value="">"Все статусы"</option>
                            {NewsStatus::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.filter.featured_only)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    update_filter(&|f: &mut NewsFilter| f.featured_only = checked);
                                }
                            />
                            " Только главные"
                        </label>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="★" sort_field="featured" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=50.0 />
                                <SortableHeaderCell label="Заголовок" sort_field="title" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=260.0 />
                                <SortableHeaderCell label="Рубрика" sort_field="category" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                                <SortableHeaderCell label="Статус" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Просмотры" sort_field="views" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Дата" sort_field="date" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell min_width=130.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|n| (n.id.clone(), n.status, n.is_featured, n.updated_at.clone())
                                children=move |news| {
                                    let for_open = news.clone();
                                    let for_featured = news.clone();
                                    let for_publish = news.clone();
                                    let for_delete = news.clone();
                                    let published = news.is_published();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <button
                                                    class=if news.is_featured { "icon-toggle icon-toggle--on" } else { "icon-toggle" }
                                                    title="Главная новость"
                                                    on:click=move |_| toggle_featured(for_featured.clone())
                                                >
                                                    {icon("star")}
                                                </button>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            open_details(Some(&for_open));
                                                        }
                                                    >
                                                        {news.title.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{news.category_name.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <NewsStatusBadge status=news.status />
                                            </TableCell>
                                            <TableCell class="text-right">{news.view_count}</TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(news.display_date())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| toggle_published(for_publish.clone())
                                                >
                                                    {if published { "Снять" } else { "Опубликовать" }}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                    attr:title="Удалить"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                        <EmptyState message="Новости не найдены" hint="Измените фильтры или создайте новость" icon_name="news" />
                    </Show>
                </div>

                <ConfirmDialog
                    pending=pending_delete
                    title="Удаление новости"
                    message=Callback::new(|n: News| format!("Удалить новость «{}»?", n.title))
                    on_confirm=delete_news
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_status() {
        assert_eq!(toggled_status(NewsStatus::Published), NewsStatus::Draft);
        assert_eq!(toggled_status(NewsStatus::Draft), NewsStatus::Published);
        assert_eq!(toggled_status(NewsStatus::Archived), NewsStatus::Published);
    }

    #[test]
    fn test_default_sort_is_by_date() {
        let mk = |id: &str, created: &str, published: Option<&str>| News {
            id: id.into(),
            created_at: created.into(),
            published_at: published.map(str::to_string),
            ..Default::default()
        };
        let mut items = vec![
            mk("a", "2025-01-01T00:00:00Z", None),
            mk("b", "2024-06-01T00:00:00Z", Some("2025-03-01T00:00:00Z")),
            mk("c", "2025-02-01T00:00:00Z", None),
        ];
        sort_list(&mut items, "date", false);
        let ids: Vec<&str> = items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
