//! Формы создания и редактирования пользователя (модальные окна)

use contracts::enums::UserRole;
use contracts::shared::text::non_empty;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::modal::{form_footer, Modal};
use crate::shared::toast::use_toast;
use crate::system::users::api;

#[component]
fn RoleSelect(role: RwSignal<UserRole>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            disabled=move || disabled.get()
            on:change=move |ev| {
                if let Some(r) = UserRole::from_code(&event_target_value(&ev)) {
                    role.set(r);
                }
            }
        >
            {UserRole::all().into_iter().map(|r| view! {
                <option value=r.code() selected=move || role.get() == r>{r.display_name()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CreateUserForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Customer);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = Callback::new(move |_| {
        let dto = CreateUserDto {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            email: non_empty(&email.get_untracked()),
            full_name: non_empty(&full_name.get_untracked()),
            phone: non_empty(&phone.get_untracked()),
            role: role.get_untracked(),
        };

        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(_) => {
                    toast.success(format!("Пользователь {} создан", dto.username));
                    on_created.run(());
                }
                Err(e) => {
                    toast.form_error("Ошибка сохранения", e, set_error);
                    set_saving.set(false);
                }
            }
        });
    });

    let disabled = Signal::derive(move || saving.get());

    view! {
        <Modal title="Новый пользователь".to_string() on_close=on_close footer=form_footer(saving, on_close, on_save)>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Логин *"</Label>
                <Input value=username disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Пароль *"</Label>
                <Input value=password input_type=InputType::Password disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"ФИО"</Label>
                <Input value=full_name disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=email input_type=InputType::Email disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Телефон"</Label>
                <Input value=phone disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Роль"</Label>
                <RoleSelect role=role disabled=disabled />
            </div>
        </Modal>
    }
}

#[component]
pub fn EditUserForm(user: User, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let full_name = RwSignal::new(user.full_name.clone().unwrap_or_default());
    let phone = RwSignal::new(user.phone.clone().unwrap_or_default());
    let role = RwSignal::new(user.role);
    let is_active = RwSignal::new(user.is_active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let user_id = user.id.clone();
    let title = format!("Редактирование: {}", user.username);

    let on_save = Callback::new(move |_| {
        let dto = UpdateUserDto {
            id: user_id.clone(),
            email: non_empty(&email.get_untracked()),
            full_name: non_empty(&full_name.get_untracked()),
            phone: non_empty(&phone.get_untracked()),
            role: role.get_untracked(),
            is_active: is_active.get_untracked(),
        };

        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_user(&dto).await {
                Ok(()) => {
                    toast.success("Изменения сохранены");
                    on_saved.run(());
                }
                Err(e) => {
                    toast.form_error("Ошибка сохранения", e, set_error);
                    set_saving.set(false);
                }
            }
        });
    });

    let disabled = Signal::derive(move || saving.get());

    view! {
        <Modal title=title on_close=on_close footer=form_footer(saving, on_close, on_save)>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"ФИО"</Label>
                <Input value=full_name disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=email input_type=InputType::Email disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Телефон"</Label>
                <Input value=phone disabled=disabled />
            </div>
            <div class="form__group">
                <Label>"Роль"</Label>
                <RoleSelect role=role disabled=disabled />
            </div>
            <div class="form__group">
                <Checkbox checked=is_active label="Активен" />
            </div>
        </Modal>
    }
}
