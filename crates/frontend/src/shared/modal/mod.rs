use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance};

/// Модальное окно: закрывается по Escape, клику по подложке и кнопке ×
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Кнопки внизу окна (Сохранить, Отмена)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Extra class for the modal surface
    #[prop(optional)]
    class: &'static str,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let modal_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|f| view! { <div class="modal-footer">{f()}</div> })}
            </div>
        </div>
    }
}

/// Стандартный футер формы: Отмена / Сохранить, блокируется на время сохранения
pub fn form_footer(
    saving: ReadSignal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> ChildrenFn {
    Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_cancel.run(())
                disabled=Signal::derive(move || saving.get())
            >
                "Отмена"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_save.run(())
                disabled=Signal::derive(move || saving.get())
            >
                {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
            </Button>
        }
        .into_any()
    })
}
