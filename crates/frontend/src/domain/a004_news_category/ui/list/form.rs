use contracts::domain::a004_news_category::{NewsCategory, NewsCategoryDto};
use contracts::shared::text::{non_empty, slugify};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_news_category::api;
use crate::shared::components::form_fields::{CheckboxField, NumberField, TextAreaField, TextField};
use crate::shared::modal::{form_footer, Modal};
use crate::shared::toast::use_toast;

/// Модальная форма рубрики. `category = None`: создание.
#[component]
pub fn NewsCategoryForm(
    category: Option<NewsCategory>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = category.is_some();
    let form = RwSignal::new(category.map(NewsCategoryDto::from).unwrap_or_default());
    // у существующей рубрики slug уже опубликован, сами его не трогаем
    let slug_touched = RwSignal::new(is_edit);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = Callback::new(move |_| {
        let dto = form.get_untracked();
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::save_category(&dto).await {
                Ok(_) => {
                    toast.success(if is_edit { "Рубрика сохранена" } else { "Рубрика создана" });
                    on_saved.run(());
                }
                Err(e) => toast.form_error("Ошибка сохранения рубрики", e, set_error),
            }
            set_saving.set(false);
        });
    });

    let title = if is_edit { "Редактирование рубрики" } else { "Новая рубрика" };
    let disabled = Signal::derive(move || saving.get());

    view! {
        <Modal title=title.to_string() on_close=on_close footer=form_footer(saving, on_close, on_save)>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <TextField
                label="Название *"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| {
                    if !slug_touched.get_untracked() {
                        f.slug = slugify(&v);
                    }
                    f.name = v;
                }))
                disabled=disabled
            />
            <TextField
                label="Slug *"
                hint="Латиница, цифры и дефисы"
                value=Signal::derive(move || form.with(|f| f.slug.clone()))
                on_input=Callback::new(move |v: String| {
                    slug_touched.set(!v.is_empty());
                    form.update(|f| f.slug = v);
                })
                disabled=disabled
            />
            <TextAreaField
                label="Описание"
                rows=3
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = non_empty(&v)))
                disabled=disabled
            />
            <NumberField
                label="Порядок вывода"
                step=1.0
                value=Signal::derive(move || form.with(|f| f.sort_order as f64))
                on_input=Callback::new(move |v: f64| form.update(|f| f.sort_order = v.round() as i32))
                disabled=disabled
            />
            <CheckboxField
                label="Активна"
                checked=Signal::derive(move || form.with(|f| f.is_active))
                on_change=Callback::new(move |v| form.update(|f| f.is_active = v))
                disabled=disabled
            />
        </Modal>
    }
}
