use contracts::enums::{CourtStatus, SportType};
use contracts::shared::text::non_empty;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CourtDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::image_url;
use crate::shared::components::form_fields::{CheckboxField, NumberField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;

#[component]
pub fn CourtDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = CourtDetailsViewModel::new(use_toast());
    vm.load(id, tabs_store);

    let form = vm.form;
    let disabled = Signal::derive(move || vm.saving.get() || vm.loading.get());
    let number = move |get: fn(&contracts::domain::a002_court::CourtDto) -> f64| {
        Signal::derive(move || form.with(get))
    };

    view! {
        <PageFrame page_id="a002_court--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Редактирование корта" } else { "Новый корт" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(on_close)
                        disabled=disabled
                    >
                        {icon("check")}
                        {move || if vm.saving.get() { " Сохранение..." } else { " Сохранить" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Отмена"
                    </Button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form__row">
                    <TextField
                        label="Название *"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        disabled=disabled
                    />
                    <div class="form__group">
                        <label class="form__label">"Площадка *"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled.get()
                            prop:value=move || form.with(|f| f.venue_id.clone())
                            on:change=move |ev| form.update(|f| f.venue_id = event_target_value(&ev))
                        >
                            <option value="">"Выберите площадку"</option>
                            <For
                                each=move || vm.venues.get()
                                key=|v| v.id.clone()
                                children=move |v| {
                                    let id = v.id.clone();
                                    view! {
                                        <option value=v.id.clone() selected=move || form.with(|f| f.venue_id == id)>
                                            {v.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Вид спорта"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled.get()
                            prop:value=move || form.with(|f| f.sport.code())
                            on:change=move |ev| {
                                if let Some(sport) = SportType::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.sport = sport);
                                }
                            }
                        >
                            {SportType::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Статус"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled.get()
                            prop:value=move || form.with(|f| f.status.code())
                            on:change=move |ev| {
                                if let Some(status) = CourtStatus::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {CourtStatus::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <TextField
                        label="Покрытие"
                        placeholder="хард, трава, паркет..."
                        value=Signal::derive(move || form.with(|f| f.surface.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.surface = non_empty(&v)))
                        disabled=disabled
                    />
                </div>

                <div class="form__row">
                    <NumberField
                        label="Уровень *"
                        min=1.0
                        step=1.0
                        value=number(|f| f.level as f64)
                        on_input=Callback::new(move |v: f64| form.update(|f| f.level = v.max(0.0).round() as u32))
                        disabled=disabled
                    />
                    <NumberField
                        label="Вместимость *"
                        min=1.0
                        step=1.0
                        value=number(|f| f.capacity as f64)
                        on_input=Callback::new(move |v: f64| form.update(|f| f.capacity = v.max(0.0).round() as u32))
                        disabled=disabled
                    />
                    <NumberField
                        label="Дочерних позиций"
                        min=0.0
                        step=1.0
                        value=number(|f| f.sub_court_count as f64)
                        on_input=Callback::new(move |v: f64| form.update(|f| f.sub_court_count = v.max(0.0).round() as u32))
                        disabled=disabled
                    />
                    <NumberField
                        label="Цена за час"
                        min=0.0
                        step=1000.0
                        value=number(|f| f.price_per_hour)
                        on_input=Callback::new(move |v: f64| form.update(|f| f.price_per_hour = v))
                        disabled=disabled
                    />
                </div>

                <CheckboxField
                    label="Крытый корт"
                    checked=Signal::derive(move || form.with(|f| f.is_indoor))
                    on_change=Callback::new(move |v| form.update(|f| f.is_indoor = v))
                    disabled=disabled
                />

                <TextAreaField
                    label="Описание"
                    rows=4
                    value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.description = non_empty(&v)))
                    disabled=disabled
                />

                <TextAreaField
                    label="Фотографии (путь или URL, по одному в строке)"
                    rows=3
                    value=vm.images_text
                    on_input=Callback::new(move |v| vm.set_images_text(v))
                    disabled=disabled
                />
                <div class="details-form__thumbs">
                    {move || form.with(|f| f.images.clone()).into_iter().map(|path| view! {
                        <img class="thumb" src=image_url(&path) alt="" />
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
