use crate::domain::a001_catalog::ui::CatalogPage;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <CatalogPage />
    }
}
