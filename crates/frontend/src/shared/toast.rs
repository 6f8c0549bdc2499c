//! Всплывающие уведомления.
//!
//! `ToastService` кладётся в контекст в `App`; любая страница получает его через
//! `use_toast()` и показывает результат операции. Уведомления закрываются сами
//! через `config().toast_timeout_ms` или по клику.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::ApiError;
use super::config::config;
use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Info => "toast toast--info",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Info => "info",
            ToastKind::Error => "alert-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let message = message.into();

        match kind {
            ToastKind::Error => log::warn!("toast: {}", message),
            _ => log::debug!("toast: {}", message),
        }

        self.items.update(|items| items.push(Toast { id, kind, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(config().toast_timeout_ms).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    /// Ошибка API с контекстом операции. 401 не показываем: уже идёт редирект на вход.
    pub fn api_error(&self, action: &str, err: &ApiError) {
        if err.is_auth() {
            return;
        }
        self.error(format!("{}: {}", action, err));
    }

    /// Ошибка сохранения формы: сообщение валидации бэкенда показываем в самой форме,
    /// остальное уходит в тост
    pub fn form_error(&self, action: &str, err: ApiError, set_error: WriteSignal<Option<String>>) {
        match err {
            ApiError::Validation(msg) => set_error.set(Some(msg)),
            other => self.api_error(action, &other),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Контейнер уведомлений, рендерится один раз в корне приложения
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|t| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.dismiss(id)>
                            {icon(toast.kind.icon_name())}
                            <span class="toast__message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
