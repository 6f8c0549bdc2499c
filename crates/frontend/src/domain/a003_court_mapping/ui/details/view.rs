use contracts::domain::a003_court_mapping::rules::eligible_parents;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CourtMappingDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;

#[component]
pub fn CourtMappingDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = CourtMappingDetailsViewModel::new(use_toast());
    vm.load(id, tabs_store);

    let form = vm.form;
    let disabled = move || vm.saving.get() || vm.loading.get();
    let positions = Memo::new(move |_| vm.positions());
    let children = Memo::new(move |_| vm.children());
    let parent_selected = move || form.with(|f| !f.parent_court_id.is_empty());

    view! {
        <PageFrame page_id="a003_court_mapping--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Редактирование привязки" } else { "Новая привязка" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(on_close)
                        disabled=Signal::derive(disabled)
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
                <div class="form__group">
                    <label class="form__label">"Родительский корт *"</label>
                    <select
                        class="form__select"
                        prop:disabled=disabled
                        on:change=move |ev| vm.select_parent(event_target_value(&ev))
                    >
                        <option value="">"Выберите корт"</option>
                        {move || vm.courts.with(|courts| {
                            eligible_parents(courts)
                                .into_iter()
                                .map(|c| {
                                    let id = c.id.clone();
                                    view! {
                                        <option
                                            value=c.id.clone()
                                            selected=move || form.with(|f| f.parent_court_id == id)
                                        >
                                            {format!("{} · ур. {} · {} поз.", c.name, c.level, c.sub_court_count)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })}
                    </select>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Позиция *"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled() || !parent_selected()
                            on:change=move |ev| {
                                let position = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.position = position);
                            }
                        >
                            {move || positions.get().into_iter()
                                .map(|p| view! {
                                    <option value=p.to_string() selected=move || form.with(|f| f.position == p)>
                                        {p}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                        <Show when=move || parent_selected() && positions.with(|p| p.is_empty())>
                            <div class="form__hint form__hint--warning">"Все позиции родителя заняты"</div>
                        </Show>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Дочерний корт *"</label>
                        <select
                            class="form__select"
                            prop:disabled=move || disabled() || !parent_selected()
                            on:change=move |ev| form.update(|f| f.child_court_id = event_target_value(&ev))
                        >
                            <option value="">"Выберите корт"</option>
                            <For
                                each=move || children.get()
                                key=|c| c.id.clone()
                                children=move |c| {
                                    let id = c.id.clone();
                                    view! {
                                        <option
                                            value=c.id.clone()
                                            selected=move || form.with(|f| f.child_court_id == id)
                                        >
                                            {format!("{} · ур. {} · {} мест", c.name, c.level, c.capacity)}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <Show when=move || parent_selected() && children.with(|c| c.is_empty())>
                            <div class="form__hint form__hint--warning">
                                "Нет подходящих кортов: нужен корт той же площадки с меньшим уровнем и не большей вместимостью"
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
