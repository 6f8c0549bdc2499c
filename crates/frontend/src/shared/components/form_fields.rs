//! Поля форм, привязанные к полю DTO через getter/setter
//!
//! ```rust,ignore
//! <TextField
//!     label="Название *"
//!     value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
//!     on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
//! />
//! ```

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// text / email / tel / time / password / url
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {hint.map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Числовое поле. Нечисловой ввод не передаётся в `on_input`.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_input: Callback<f64>,
    #[prop(optional)] min: Option<f64>,
    #[prop(optional)] step: Option<f64>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="number"
                min=min.map(|m| m.to_string())
                step=step.unwrap_or(1.0).to_string()
                prop:value=move || value.get().to_string()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(v) = parse_number(&event_target_value(&ev)) {
                        on_input.run(v);
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// Разбор числа из поля ввода; запятая допускается как десятичный разделитель
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().replace(' ', "").replace(',', ".");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("150000"), Some(150000.0));
        assert_eq!(parse_number(" 1 500,5 "), Some(1500.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
