//! Glue between [`CatalogState`] and the network.
//!
//! `dispatch` applies an event to the state signal and, if the state asks for
//! a page, spawns the request and dispatches its outcome back.

use super::api::{fetch_categories, fetch_page};
use super::state::{CatalogEvent, CatalogState, FetchPage};
use crate::shared::config::AppConfig;
use crate::shared::url_state::write_category_to_url;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CatalogController {
    pub state: RwSignal<CatalogState>,
    config: StoredValue<AppConfig>,
}

impl CatalogController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: RwSignal::new(CatalogState::new(config.api.page_size)),
            config: StoredValue::new(config),
        }
    }

    pub fn dispatch(&self, event: CatalogEvent) {
        let request = self.state.try_update(|state| state.update(event)).flatten();
        if let Some(request) = request {
            self.run(request);
        }
    }

    fn run(&self, request: FetchPage) {
        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let event = match fetch_page(&config, &request).await {
                Ok(products) => CatalogEvent::PageLoaded {
                    epoch: request.epoch,
                    products,
                },
                Err(e) => CatalogEvent::PageFailed {
                    epoch: request.epoch,
                    message: e.to_string(),
                },
            };
            this.dispatch(event);
        });
    }

    pub fn select_category(&self, category: Option<String>) {
        write_category_to_url(category.as_deref());
        self.dispatch(CatalogEvent::CategorySelected(category));
    }

    /// Called by the scroll sentinel
    pub fn advance(&self) {
        if self.state.with_untracked(|state| state.can_advance()) {
            self.dispatch(CatalogEvent::Advance);
        }
    }

    /// Load categories, then the first page.
    ///
    /// `initial` is a slug restored from the URL; it is honoured only when it
    /// names a loaded category. If the category list cannot be fetched no
    /// product request is made.
    pub async fn initialize(self, initial: Option<String>) {
        let config = self.config.get_value();
        match fetch_categories(&config).await {
            Ok(categories) => {
                self.dispatch(CatalogEvent::CategoriesLoaded { categories, initial });
                // Неизвестный slug убирается из адресной строки
                let selected = self.state.with_untracked(|state| state.selected_category.clone());
                write_category_to_url(selected.as_deref());
            }
            Err(e) => {
                self.dispatch(CatalogEvent::CategoriesFailed(e.to_string()));
            }
        }
    }
}

/// Hook to use the catalog controller.
pub fn use_catalog() -> CatalogController {
    use_context::<CatalogController>()
        .expect("CatalogController not found. Render inside CatalogPage.")
}
