use contracts::enums::NewsStatus;
use contracts::shared::text::non_empty;
use leptos::prelude::*;
use thaw::*;

use super::view_model::NewsDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::image_url;
use crate::shared::components::form_fields::{CheckboxField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;

#[component]
pub fn NewsDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = NewsDetailsViewModel::new(use_toast());
    vm.load(id, tabs_store);

    let form = vm.form;
    let disabled = Signal::derive(move || vm.saving.get() || vm.loading.get());

    view! {
        <PageFrame page_id="a005_news--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Редактирование новости" } else { "Новая новость" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.save(on_close) disabled=disabled>
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
                <TextField
                    label="Заголовок *"
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    on_input=Callback::new(move |v| vm.set_title(v))
                    disabled=disabled
                />
                <TextField
                    label="Slug *"
                    value=Signal::derive(move || form.with(|f| f.slug.clone()))
                    on_input=Callback::new(move |v| vm.set_slug(v))
                    disabled=disabled
                />
                <div class="form__hint">
                    {move || if vm.slug_touched.get() { "Slug задан вручную" } else { "Slug формируется из заголовка" }}
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Рубрика"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled.get()
                            on:change=move |ev| form.update(|f| f.category_id = non_empty(&event_target_value(&ev)))
                        >
                            <option value="">"Без рубрики"</option>
                            <For
                                each=move || vm.categories.get()
                                key=|c| c.id.clone()
                                children=move |c| {
                                    let id = c.id.clone();
                                    view! {
                                        <option value=c.id.clone() selected=move || form.with(|f| f.category_id.as_deref() == Some(id.as_str()))>
                                            {c.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Площадка"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled.get()
                            on:change=move |ev| form.update(|f| f.venue_id = non_empty(&event_target_value(&ev)))
                        >
                            <option value="">"Общая новость"</option>
                            <For
                                each=move || vm.venues.get()
                                key=|v| v.id.clone()
                                children=move |v| {
                                    let id = v.id.clone();
                                    view! {
                                        <option value=v.id.clone() selected=move || form.with(|f| f.venue_id.as_deref() == Some(id.as_str()))>
                                            {v.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Статус"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled.get()
                            prop:value=move || form.with(|f| f.status.code())
                            on:change=move |ev| {
                                if let Some(status) = NewsStatus::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {NewsStatus::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <CheckboxField
                    label="Главная новость"
                    checked=Signal::derive(move || form.with(|f| f.is_featured))
                    on_change=Callback::new(move |v| form.update(|f| f.is_featured = v))
                    disabled=disabled
                />

                <TextAreaField
                    label="Краткое описание"
                    rows=2
                    value=Signal::derive(move || form.with(|f| f.summary.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.summary = non_empty(&v)))
                    disabled=disabled
                />
                <TextAreaField
                    label="Текст"
                    rows=12
                    value=Signal::derive(move || form.with(|f| f.content.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.content = v))
                    disabled=disabled
                />
                <TextField
                    label="Теги"
                    placeholder="через запятую"
                    value=vm.tags_text
                    on_input=Callback::new(move |v| vm.set_tags_text(v))
                    disabled=disabled
                />
                <TextField
                    label="Обложка (путь или URL)"
                    value=Signal::derive(move || form.with(|f| f.cover_image.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.cover_image = non_empty(&v)))
                    disabled=disabled
                />
                {move || form.with(|f| f.cover_image.clone()).map(|path| view! {
                    <img class="details-form__cover" src=image_url(&path) alt="" />
                })}
            </div>
        </PageFrame>
    }
}
