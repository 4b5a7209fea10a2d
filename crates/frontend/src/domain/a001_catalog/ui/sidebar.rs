//! Category sidebar: "All Categories" plus one entry per loaded category

use crate::domain::a001_catalog::controller::use_catalog;
use crate::domain::a001_catalog::state::LoadStatus;
use contracts::domain::a001_catalog::Category;
use leptos::prelude::*;

#[component]
pub fn CategorySidebar() -> impl IntoView {
    let controller = use_catalog();
    let state = controller.state;

    let categories = Memo::new(move |_| state.with(|s| s.categories.clone()));
    let all_selected = move || state.with(|s| s.is_selected(None));
    let failed = move || state.with(|s| s.categories_status == LoadStatus::Failed);

    view! {
        <div class="catalog-sidebar">
            <h2 class="catalog-sidebar__title">"Categories"</h2>
            <ul class="catalog-sidebar__list">
                <li
                    class="catalog-sidebar__item"
                    class:catalog-sidebar__item--active=all_selected
                    on:click=move |_| controller.select_category(None)
                >
                    "All Categories"
                </li>
                <For
                    each=move || categories.get()
                    key=|category| category.slug.clone()
                    children=move |category: Category| {
                        view! { <CategoryItem category=category /> }
                    }
                />
            </ul>
            <Show when=failed>
                <p class="catalog-sidebar__error">"Categories unavailable"</p>
            </Show>
        </div>
    }
}

#[component]
fn CategoryItem(category: Category) -> impl IntoView {
    let controller = use_catalog();
    let Category { slug, label } = category;

    let slug_for_check = slug.clone();
    let is_active = move || {
        controller
            .state
            .with(|s| s.is_selected(Some(slug_for_check.as_str())))
    };

    view! {
        <li
            class="catalog-sidebar__item"
            class:catalog-sidebar__item--active=is_active
            on:click=move |_| controller.select_category(Some(slug.clone()))
        >
            {label}
        </li>
    }
}
