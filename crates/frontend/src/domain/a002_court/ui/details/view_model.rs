use contracts::domain::a001_venue::Venue;
use contracts::domain::a002_court::CourtDto;
use contracts::shared::text::non_empty;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_venue::api as venue_api;
use crate::domain::a002_court::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label};
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
pub struct CourtDetailsViewModel {
    pub form: RwSignal<CourtDto>,
    pub venues: RwSignal<Vec<Venue>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    /// Текст поля фотографий как его набрал пользователь
    pub images_text: RwSignal<String>,
    toast: ToastService,
}

impl CourtDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: RwSignal::new(CourtDto::default()),
            venues: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
            images_text: RwSignal::new(String::new()),
            toast,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    /// Площадки для выпадающего списка и сам корт, если это редактирование
    pub fn load(&self, id: Option<String>, tabs_store: AppGlobalContext) {
        let vm = *self;
        spawn_local(async move {
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
            match api::fetch_court(&id).await {
                Ok(court) => {
                    tabs_store.update_tab_title(
                        &detail_key("a002_court", Some(&id)),
                        &detail_tab_label("a002_court", &court.name),
                    );
                    vm.images_text.set(court.images.join("\n"));
                    vm.form.set(CourtDto::from(court));
                }
                Err(e) => {
                    vm.error.set(Some(e.to_string()));
                    vm.toast.api_error("Не удалось загрузить корт", &e);
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn set_images_text(&self, text: String) {
        self.form.update(|f| f.images = text.lines().filter_map(non_empty).collect());
        self.images_text.set(text);
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
            match api::save_court(&dto).await {
                Ok(id) => {
                    log::info!("Court saved: {}", id);
                    vm.toast.success(if dto.is_edit() { "Корт сохранён" } else { "Корт создан" });
                    on_saved.run(());
                }
                Err(e) => vm.toast.form_error("Ошибка сохранения корта", e, vm.error.write_only()),
            }
            vm.saving.set(false);
        });
    }
}
