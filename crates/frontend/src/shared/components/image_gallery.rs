//! Галерея изображений с полноэкранным просмотром (лайтбокс)

use leptos::ev;
use leptos::prelude::*;

use crate::shared::api_utils::image_url;
use crate::shared::icons::icon;

/// Следующий/предыдущий индекс по кругу: с последнего на первый и обратно
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((current as isize + delta) % len + len) % len) as usize
}

#[component]
pub fn ImageGallery(
    /// Пути изображений как они пришли с бэкенда
    #[prop(into)]
    images: Signal<Vec<String>>,
    #[prop(optional, into)] alt: String,
) -> impl IntoView {
    let open_index: RwSignal<Option<usize>> = RwSignal::new(None);
    let alt = StoredValue::new(alt);

    view! {
        <div class="gallery">
            <Show
                when=move || !images.with(|i| i.is_empty())
                fallback=|| view! { <div class="gallery__empty">{icon("image")}" Фотографии пока не добавлены"</div> }
            >
                <div class="gallery__grid">
                    {move || images.get().into_iter().enumerate().map(|(idx, path)| {
                        view! {
                            <button class="gallery__thumb" on:click=move |_| open_index.set(Some(idx))>
                                <img src=image_url(&path) alt=alt.get_value() loading="lazy" />
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
            {move || open_index.get().map(|_| view! {
                <Lightbox images=images index=open_index />
            })}
        </div>
    }
}

#[component]
fn Lightbox(images: Signal<Vec<String>>, index: RwSignal<Option<usize>>) -> impl IntoView {
    let step = move |delta: isize| {
        let len = images.with_untracked(|i| i.len());
        index.update(|i| {
            if let Some(current) = i {
                *current = wrap_index(*current, delta, len);
            }
        });
    };

    let handle = window_event_listener(ev::keydown, move |event| match event.key().as_str() {
        "Escape" => index.set(None),
        "ArrowLeft" => step(-1),
        "ArrowRight" => step(1),
        _ => {}
    });
    on_cleanup(move || handle.remove());

    let current_src = move || {
        let i = index.get().unwrap_or(0);
        images.with(|imgs| imgs.get(i).map(|p| image_url(p)).unwrap_or_default())
    };
    let counter = move || {
        format!(
            "{} / {}",
            index.get().unwrap_or(0) + 1,
            images.with(|i| i.len())
        )
    };

    view! {
        <div class="lightbox" on:click=move |_| index.set(None)>
            <button
                class="lightbox__nav lightbox__nav--prev"
                on:click=move |ev: ev::MouseEvent| { ev.stop_propagation(); step(-1); }
            >
                {icon("chevron-left")}
            </button>
            <img class="lightbox__image" src=current_src on:click=|ev: ev::MouseEvent| ev.stop_propagation() />
            <button
                class="lightbox__nav lightbox__nav--next"
                on:click=move |ev: ev::MouseEvent| { ev.stop_propagation(); step(1); }
            >
                {icon("chevron-right")}
            </button>
            <div class="lightbox__counter">{counter}</div>
            <button class="lightbox__close" on:click=move |_| index.set(None)>{icon("x")}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 1, 3), 1);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(1, -1, 3), 0);
        assert_eq!(wrap_index(0, 1, 1), 0);
        assert_eq!(wrap_index(5, 1, 0), 0);
    }
}
