//! Системные настройки: общие сведения о сайте и правила бронирования.
//!
//! Каждая форма загружается своим запросом и сохраняется отдельно (PUT),
//! поэтому ошибка в одной не блокирует другую.

use contracts::system::settings::{BookingSettings, GeneralSettings};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::form_fields::{CheckboxField, NumberField, TextField};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toast;
use crate::system::auth::guard::RequireAdmin;
use crate::system::settings::api;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active_tab: RwSignal<&'static str> = RwSignal::new("general");

    view! {
        <RequireAdmin>
            <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">"Настройки"</h1>
                    </div>
                </div>
                <div class="page__tabs">
                    <Button
                        appearance=Signal::derive(move || if active_tab.get() == "general" { ButtonAppearance::Primary } else { ButtonAppearance::Subtle })
                        on_click=move |_| active_tab.set("general")
                    >
                        "Общие"
                    </Button>
                    <Button
                        appearance=Signal::derive(move || if active_tab.get() == "booking" { ButtonAppearance::Primary } else { ButtonAppearance::Subtle })
                        on_click=move |_| active_tab.set("booking")
                    >
                        "Бронирование"
                    </Button>
                </div>
                <div class="page__content">
                    <div class:hidden=move || active_tab.get() != "general">
                        <GeneralSettingsForm />
                    </div>
                    <div class:hidden=move || active_tab.get() != "booking">
                        <BookingSettingsForm />
                    </div>
                </div>
            </PageFrame>
        </RequireAdmin>
    }
}

#[component]
fn GeneralSettingsForm() -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(GeneralSettings::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(true);

    spawn_local(async move {
        match api::fetch_general().await {
            Ok(settings) => form.set(settings),
            Err(e) => toast.api_error("Не удалось загрузить настройки", &e),
        }
        set_busy.set(false);
    });

    let save = move |_| {
        let settings = form.get_untracked();
        if let Err(msg) = settings.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::save_general(&settings).await {
                Ok(()) => toast.success("Общие настройки сохранены"),
                Err(e) => toast.form_error("Ошибка сохранения", e, set_error),
            }
            set_busy.set(false);
        });
    };

    let disabled = Signal::derive(move || busy.get());

    view! {
        <div class="form form--settings">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <TextField
                label="Название сайта *"
                value=Signal::derive(move || form.with(|f| f.site_name.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.site_name = v))
                disabled=disabled
            />
            <TextField
                label="Контактный email *"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.contact_email.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.contact_email = v))
                disabled=disabled
            />
            <TextField
                label="Телефон"
                input_type="tel"
                value=Signal::derive(move || form.with(|f| f.contact_phone.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.contact_phone = contracts::shared::text::non_empty(&v)))
                disabled=disabled
            />
            <TextField
                label="Адрес"
                value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.address = contracts::shared::text::non_empty(&v)))
                disabled=disabled
            />
            <TextField
                label="Валюта (ISO)"
                value=Signal::derive(move || form.with(|f| f.currency.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.currency = v.trim().to_uppercase()))
                disabled=disabled
            />
            <TextField
                label="Часовой пояс"
                placeholder="Asia/Ho_Chi_Minh"
                value=Signal::derive(move || form.with(|f| f.timezone.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.timezone = v))
                disabled=disabled
            />
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=disabled>
                    "Сохранить"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn BookingSettingsForm() -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(BookingSettings::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(true);

    spawn_local(async move {
        match api::fetch_booking().await {
            Ok(settings) => form.set(settings),
            Err(e) => toast.api_error("Не удалось загрузить правила бронирования", &e),
        }
        set_busy.set(false);
    });

    let save = move |_| {
        let settings = form.get_untracked();
        if let Err(msg) = settings.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::save_booking(&settings).await {
                Ok(()) => toast.success("Правила бронирования сохранены"),
                Err(e) => toast.form_error("Ошибка сохранения", e, set_error),
            }
            set_busy.set(false);
        });
    };

    let disabled = Signal::derive(move || busy.get());
    // числовые поля правил: (подпись, getter, setter)
    let minutes_field = move |label: &'static str, get: fn(&BookingSettings) -> u32, set: fn(&mut BookingSettings, u32)| {
        view! {
            <NumberField
                label=label
                min=0.0
                value=Signal::derive(move || form.with(|f| get(f) as f64))
                on_input=Callback::new(move |v: f64| form.update(|f| set(f, v.max(0.0).round() as u32)))
                disabled=disabled
            />
        }
    };

    view! {
        <div class="form form--settings">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <TextField
                    label="Открытие"
                    input_type="time"
                    value=Signal::derive(move || form.with(|f| f.open_time.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.open_time = v))
                    disabled=disabled
                />
                <TextField
                    label="Закрытие"
                    input_type="time"
                    value=Signal::derive(move || form.with(|f| f.close_time.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.close_time = v))
                    disabled=disabled
                />
            </div>
            <div class="form__row">
                {minutes_field("Шаг слота, мин", |f| f.slot_minutes, |f, v| f.slot_minutes = v)}
                {minutes_field("Мин. длительность, мин", |f| f.min_booking_minutes, |f, v| f.min_booking_minutes = v)}
                {minutes_field("Макс. длительность, мин", |f| f.max_booking_minutes, |f, v| f.max_booking_minutes = v)}
            </div>
            <div class="form__row">
                {minutes_field("Бронирование вперёд, дней", |f| f.max_advance_days, |f, v| f.max_advance_days = v)}
                {minutes_field("Отмена не позднее, часов", |f| f.cancellation_hours, |f, v| f.cancellation_hours = v)}
            </div>
            <CheckboxField
                label="Разрешить бронирование без регистрации"
                checked=Signal::derive(move || form.with(|f| f.allow_guest_booking))
                on_change=Callback::new(move |v| form.update(|f| f.allow_guest_booking = v))
                disabled=disabled
            />
            <div class="form__hint">
                {move || format!("Слотов в рабочем дне: {}", form.with(|f| f.slots_per_day()))}
            </div>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=disabled>
                    "Сохранить"
                </Button>
            </div>
        </div>
    }
}
