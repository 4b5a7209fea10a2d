//! Catalog page: category sidebar on the left, product grid on the right.

use super::grid::ProductGrid;
use super::sidebar::CategorySidebar;
use crate::domain::a001_catalog::controller::CatalogController;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::url_state::read_category_from_url;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let controller = CatalogController::new(config);
    provide_context(controller);

    let initial = read_category_from_url();
    log!("CatalogPage CREATED, initial category: {:?}", initial);
    spawn_local(controller.initialize(initial));

    on_cleanup(|| {
        log!("CatalogPage DESTROYED");
    });

    view! {
        <Shell
            left=|| view! { <CategorySidebar /> }.into_any()
            center=|| {
                view! {
                    <h1 class="catalog-title">"Discover Amazing Products by Category"</h1>
                    <ProductGrid />
                }
                .into_any()
            }
        />
    }
}
