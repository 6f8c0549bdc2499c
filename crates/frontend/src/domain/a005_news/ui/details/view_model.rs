use contracts::domain::a001_venue::Venue;
use contracts::domain::a004_news_category::NewsCategory;
use contracts::domain::a005_news::NewsDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_venue::api as venue_api;
use crate::domain::a004_news_category::api as category_api;
use crate::domain::a005_news::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label};
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
pub struct NewsDetailsViewModel {
    pub form: RwSignal<NewsDto>,
    pub categories: RwSignal<Vec<NewsCategory>>,
    pub venues: RwSignal<Vec<Venue>>,
    /// slug правили вручную: заголовок его больше не перезаписывает
    pub slug_touched: RwSignal<bool>,
    pub tags_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    toast: ToastService,
}

impl NewsDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: RwSignal::new(NewsDto::default()),
            categories: RwSignal::new(Vec::new()),
            venues: RwSignal::new(Vec::new()),
            slug_touched: RwSignal::new(false),
            tags_text: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
            toast,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn load(&self, id: Option<String>, tabs_store: AppGlobalContext) {
        let vm = *self;
        spawn_local(async move {
            match category_api::fetch_categories().await {
                Ok(list) => vm.categories.set(list),
                Err(e) => vm.toast.api_error("Не удалось загрузить рубрики", &e),
            }
            match venue_api::fetch_venues().await {
                Ok(list) => vm.venues.set(list),
                Err(e) => vm.toast.api_error("Не удалось загрузить площадки", &e),
            }
        });

        let Some(id) = id else {
            return;
        };
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_news_item(&id).await {
                Ok(news) => {
                    tabs_store.update_tab_title(
                        &detail_key("a005_news", Some(&id)),
                        &detail_tab_label("a005_news", &news.title),
                    );
                    vm.tags_text.set(news.tags.join(", "));
                    // у сохранённой новости slug уже в ссылках, автогенерацию выключаем
                    vm.slug_touched.set(true);
                    vm.form.set(NewsDto::from(news));
                }
                Err(e) => {
                    vm.error.set(Some(e.to_string()));
                    vm.toast.api_error("Не удалось загрузить новость", &e);
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn set_title(&self, title: String) {
        let touched = self.slug_touched.get_untracked();
        self.form.update(|f| {
            f.title = title;
            f.sync_slug(touched);
        });
    }

    /// Пустой slug снова включает автогенерацию
    pub fn set_slug(&self, slug: String) {
        let touched = !slug.trim().is_empty();
        self.slug_touched.set(touched);
        self.form.update(|f| {
            f.slug = slug;
            f.sync_slug(touched);
        });
    }

    pub fn set_tags_text(&self, text: String) {
        self.form.update(|f| f.set_tags_from_str(&text));
        self.tags_text.set(text);
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(msg) = dto.validate() {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        self.saving.set(true);

        let vm = *self;
        spawn_local(async move {
            match api::save_news(&dto).await {
                Ok(id) => {
                    log::info!("News saved: {}", id);
                    vm.toast.success(if dto.is_edit() { "Новость сохранена" } else { "Новость создана" });
                    on_saved.run(());
                }
                Err(e) => vm.toast.form_error("Ошибка сохранения новости", e, vm.error.write_only()),
            }
            vm.saving.set(false);
        });
    }
}
