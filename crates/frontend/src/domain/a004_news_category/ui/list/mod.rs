mod form;

use contracts::domain::a004_news_category::NewsCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_news_category::api;
use crate::shared::components::badge::ActiveBadge;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use form::NewsCategoryForm;

/// Рубрики в порядке вывода на сайте: `sort_order`, затем название
fn display_order(items: &mut [NewsCategory]) {
    items.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| cmp_ci(&a.name, &b.name)));
}

#[component]
pub fn NewsCategoryList() -> impl IntoView {
    let toast = use_toast();
    let categories: RwSignal<Vec<NewsCategory>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);
    // Some(None): создание, Some(Some(c)): редактирование
    let editing: RwSignal<Option<Option<NewsCategory>>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<NewsCategory>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(mut data) => {
                    display_order(&mut data);
                    categories.set(data);
                    set_loaded.set(true);
                }
                Err(e) => toast.api_error("Не удалось загрузить рубрики", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !loaded.get_untracked() {
            load_data();
        }
    });

    let visible = move || {
        let query = search.get();
        categories.with(|list| {
            list.iter()
                .filter(|c| query.trim().is_empty() || c.matches_query(query.trim()))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let delete_category = Callback::new(move |category: NewsCategory| {
        spawn_local(async move {
            match api::delete_category(&category.id).await {
                Ok(()) => {
                    categories.update(|list| list.retain(|c| c.id != category.id));
                    toast.success(format!("Рубрика «{}» удалена", category.name));
                }
                Err(e) => toast.api_error("Не удалось удалить рубрику", &e),
            }
        });
    });

    view! {
        <PageFrame page_id="a004_news_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Рубрики новостей"</h1>
                    <Badge>{move || categories.with(|c| c.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        " Новая рубрика"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div style="max-width: 320px; margin-bottom: 12px;">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=Callback::new(move |q| search.set(q))
                        placeholder="Название или slug..."
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>"№"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Название"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Slug"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Описание"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=visible
                                key=|c| (c.id.clone(), c.name.clone(), c.slug.clone(), c.sort_order, c.is_active)
                                children=move |category| {
                                    let for_edit = category.clone();
                                    let for_delete = category.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{category.sort_order}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{category.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true><code>{category.slug.clone()}</code></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{category.description.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <ActiveBadge active=category.is_active />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
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
                    <Show when=move || loaded.get() && visible().is_empty()>
                        <EmptyState message="Рубрик нет" icon_name="categories" />
                    </Show>
                </div>

                {move || editing.get().map(|category| view! {
                    <NewsCategoryForm
                        category=category
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            load_data();
                        })
                    />
                })}

                <ConfirmDialog
                    pending=pending_delete
                    title="Удаление рубрики"
                    message=Callback::new(|c: NewsCategory| {
                        format!("Удалить рубрику «{}»? Новости останутся без рубрики.", c.name)
                    })
                    on_confirm=delete_category
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let mk = |name: &str, order: i32| NewsCategory {
            name: name.into(),
            sort_order: order,
            ..Default::default()
        };
        let mut items = vec![mk("турниры", 2), mk("Акции", 2), mk("Новости клуба", 1)];
        display_order(&mut items);
        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Новости клуба", "Акции", "турниры"]);
    }
}
