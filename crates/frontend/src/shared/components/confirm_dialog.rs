use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::modal::Modal;

/// Запрос подтверждения для необратимых действий (удаление и т.п.)
///
/// Окно видно, пока `pending` содержит значение; `on_confirm` получает это значение.
#[component]
pub fn ConfirmDialog<T>(
    /// Что подтверждаем; `None` скрывает окно
    pending: RwSignal<Option<T>>,
    #[prop(into)] title: String,
    /// Текст вопроса по ожидающему значению
    message: Callback<T, String>,
    on_confirm: Callback<T>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let confirm_label = confirm_label.unwrap_or_else(|| "Удалить".to_string());

    move || {
        pending.get().map(|value| {
            let text = message.run(value.clone());
            let title = title.clone();
            let confirm_label = confirm_label.clone();
            let value = StoredValue::new(value);
            let close = Callback::new(move |_| pending.set(None));
            view! {
                <Modal
                    title=title
                    on_close=close
                    class="modal--confirm"
                    footer=Arc::new(move || {
                        let confirm_label = confirm_label.clone();
                        view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| pending.set(None)>
                                "Отмена"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    pending.set(None);
                                    on_confirm.run(value.get_value());
                                }
                            >
                                {confirm_label}
                            </Button>
                        }.into_any()
                    }) as ChildrenFn
                >
                    <p class="confirm-dialog__message">{text}</p>
                </Modal>
            }
        })
    }
}
