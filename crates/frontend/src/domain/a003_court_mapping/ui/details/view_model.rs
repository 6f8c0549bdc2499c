use contracts::domain::a002_court::Court;
use contracts::domain::a003_court_mapping::rules::{available_positions, eligible_children, validate_mapping};
use contracts::domain::a003_court_mapping::{CourtMapping, CourtMappingDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_court::api as court_api;
use crate::domain::a003_court_mapping::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label};
use crate::shared::toast::ToastService;

/// Состояние формы привязки. Списки позиций и потомков пересчитываются
/// из выбранного родителя и уже существующих привязок.
#[derive(Clone, Copy)]
pub struct CourtMappingDetailsViewModel {
    pub form: RwSignal<CourtMappingDto>,
    pub courts: RwSignal<Vec<Court>>,
    pub mappings: RwSignal<Vec<CourtMapping>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    toast: ToastService,
}

impl CourtMappingDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: RwSignal::new(CourtMappingDto::default()),
            courts: RwSignal::new(Vec::new()),
            mappings: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
            toast,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    /// Корты и привязки грузятся всегда: без них нельзя посчитать свободные позиции
    pub fn load(&self, id: Option<String>, tabs_store: AppGlobalContext) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match court_api::fetch_courts().await {
                Ok(list) => vm.courts.set(list),
                Err(e) => vm.toast.api_error("Не удалось загрузить корты", &e),
            }
            match api::fetch_mappings().await {
                Ok(list) => {
                    if let Some(id) = &id {
                        if let Some(existing) = list.iter().find(|m| &m.id == id) {
                            let label = format!(
                                "{} #{}",
                                existing.parent_court_name.clone().unwrap_or_default(),
                                existing.position
                            );
                            tabs_store.update_tab_title(
                                &detail_key("a003_court_mapping", Some(id)),
                                &detail_tab_label("a003_court_mapping", label.trim()),
                            );
                            vm.form.set(CourtMappingDto::from(existing.clone()));
                        } else {
                            vm.error.set(Some("Привязка не найдена".to_string()));
                        }
                    }
                    vm.mappings.set(list);
                }
                Err(e) => vm.toast.api_error("Не удалось загрузить схему кортов", &e),
            }
            vm.loading.set(false);
        });
    }

    fn parent(&self) -> Option<Court> {
        let parent_id = self.form.with(|f| f.parent_court_id.clone());
        self.courts
            .with(|list| list.iter().find(|c| c.id == parent_id).cloned())
    }

    /// Свободные позиции выбранного родителя
    pub fn positions(&self) -> Vec<u32> {
        let Some(parent) = self.parent() else {
            return Vec::new();
        };
        let exclude = self.form.with(|f| f.id.clone());
        self.mappings
            .with(|m| available_positions(&parent, m, exclude.as_deref()))
    }

    /// Допустимые дочерние корты выбранного родителя
    pub fn children(&self) -> Vec<Court> {
        let Some(parent) = self.parent() else {
            return Vec::new();
        };
        let exclude = self.form.with(|f| f.id.clone());
        self.courts.with(|courts| {
            self.mappings.with(|m| {
                eligible_children(&parent, courts, m, exclude.as_deref())
                    .into_iter()
                    .cloned()
                    .collect()
            })
        })
    }

    /// Смена родителя сбрасывает потомка и ставит первую свободную позицию
    pub fn select_parent(&self, parent_id: String) {
        self.form.update(|f| {
            f.parent_court_id = parent_id;
            f.child_court_id.clear();
            f.position = 0;
        });
        let first = self.positions().first().copied().unwrap_or(0);
        self.form.update(|f| f.position = first);
        self.error.set(None);
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        let check = self.courts.with_untracked(|courts| {
            self.mappings
                .with_untracked(|mappings| validate_mapping(&dto, courts, mappings))
        });
        if let Err(e) = check {
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);
        self.saving.set(true);

        let vm = *self;
        spawn_local(async move {
            match api::save_mapping(&dto).await {
                Ok(_) => {
                    vm.toast.success(if dto.is_edit() { "Привязка сохранена" } else { "Привязка создана" });
                    on_saved.run(());
                }
                Err(e) => vm.toast.form_error("Ошибка сохранения привязки", e, vm.error.write_only()),
            }
            vm.saving.set(false);
        });
    }
}
