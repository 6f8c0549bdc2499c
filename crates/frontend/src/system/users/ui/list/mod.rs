mod state;

use contracts::enums::UserRole;
use contracts::system::users::{UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::badge::{ActiveBadge, RoleBadge};
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
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::prefs::{save_list_prefs, ListPrefs};
use crate::shared::toast::use_toast;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use crate::system::users::ui::details::{CreateUserForm, EditUserForm};
use state::{create_state, LIST_ID};

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "full_name" => cmp_ci_opt(self.full_name.as_deref(), other.full_name.as_deref()),
            "email" => cmp_ci_opt(self.email.as_deref(), other.email.as_deref()),
            "role" => self.role.code().cmp(other.role.code()),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            "last_login_at" => self.last_login_at.cmp(&other.last_login_at),
            _ => cmp_ci(&self.username, &other.username),
        }
    }
}

impl ExcelExportable for User {
    fn headers() -> Vec<&'static str> {
        vec!["Логин", "ФИО", "Email", "Телефон", "Роль", "Активен", "Создан", "Последний вход"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.full_name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.role.display_name().to_string(),
            if self.is_active { "Да" } else { "Нет" }.to_string(),
            format_datetime(&self.created_at),
            self.last_login_at.as_deref().map(format_datetime).unwrap_or_default(),
        ]
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let toast = use_toast();
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let show_create_form = RwSignal::new(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<User>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let filtered = move || {
        let mut data = all_users.get_untracked();
        state.with_untracked(|s| {
            data.retain(|u| s.matches(u));
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
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => toast.api_error("Не удалось загрузить пользователей", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    });

    let on_role_change = move |code: String| {
        state.update(|s| {
            s.role_filter = UserRole::from_code(&code);
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

    // Блокировка/разблокировка с мгновенным откликом и откатом при ошибке
    let toggle_active = move |user: User| {
        let mut dto = UpdateUserDto::from(&user);
        dto.is_active = !user.is_active;
        let apply = move |active: bool| {
            all_users.update(|list| {
                if let Some(u) = list.iter_mut().find(|u| u.id == user.id) {
                    u.is_active = active;
                }
            });
            refresh_view();
        };
        apply(dto.is_active);
        spawn_local(async move {
            match api::update_user(&dto).await {
                Ok(()) => toast.success(if dto.is_active {
                    "Пользователь разблокирован"
                } else {
                    "Пользователь заблокирован"
                }),
                Err(e) => {
                    apply(!dto.is_active);
                    toast.api_error("Не удалось изменить статус", &e);
                }
            }
        });
    };

    let delete_user = Callback::new(move |user: User| {
        spawn_local(async move {
            match api::delete_user(&user.id).await {
                Ok(()) => {
                    all_users.update(|list| list.retain(|u| u.id != user.id));
                    refresh_view();
                    toast.success(format!("Пользователь {} удалён", user.username));
                }
                Err(e) => toast.api_error("Не удалось удалить пользователя", &e),
            }
        });
    });

    let export = move |_| {
        if let Err(e) = export_to_excel(&filtered(), "users") {
            toast.error(e);
        }
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Пользователи"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create_form.set(true)>
                        {icon("plus")}
                        " Новый"
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
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
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
                                value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                                on_change=on_search
                                placeholder="Логин, ФИО, email или телефон..."
                            />
                        </div>
                        <select
                            class="form__select"
                            on:change=move |ev| on_role_change(event_target_value(&ev))
                        >
                            <option value="">"Все роли"</option>
                            {UserRole::all().into_iter().map(|r| view! {
                                <option value=r.code()>{r.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Логин" sort_field="username" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="ФИО" sort_field="full_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Email" sort_field="email" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Роль" sort_field="role" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Статус" sort_field="is_active" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Создан" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                                <SortableHeaderCell label="Последний вход" sort_field="last_login_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell min_width=110.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| (u.id.clone(), u.is_active, u.role, u.full_name.clone(), u.email.clone())
                                children=move |user| {
                                    let user_for_edit = user.clone();
                                    let user_for_toggle = user.clone();
                                    let user_for_delete = user.clone();
                                    let is_active = user.is_active;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.username.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.full_name.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.email.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><RoleBadge role=user.role /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><ActiveBadge active=is_active /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&user.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {user.last_login_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <input
                                                    type="checkbox"
                                                    class="switch"
                                                    title="Активен"
                                                    prop:checked=is_active
                                                    on:change=move |_| toggle_active(user_for_toggle.clone())
                                                />
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(user_for_delete.clone()))
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
                        <EmptyState message="Пользователи не найдены" hint="Измените условия поиска" icon_name="users" />
                    </Show>
                </div>

                <Show when=move || show_create_form.get()>
                    <CreateUserForm
                        on_close=Callback::new(move |_| show_create_form.set(false))
                        on_created=Callback::new(move |_| {
                            show_create_form.set(false);
                            load_data();
                        })
                    />
                </Show>

                {move || editing_user.get().map(|user| view! {
                    <EditUserForm
                        user=user
                        on_close=Callback::new(move |_| editing_user.set(None))
                        on_saved=Callback::new(move |_| {
                            editing_user.set(None);
                            load_data();
                        })
                    />
                })}

                <ConfirmDialog
                    pending=pending_delete
                    title="Удаление пользователя"
                    message=Callback::new(|u: User| format!("Удалить пользователя «{}»? Действие необратимо.", u.username))
                    on_confirm=delete_user
                />
            </div>
        </PageFrame>
    }
}
