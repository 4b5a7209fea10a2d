//! Product grid with the infinite scroll sentinel underneath

use crate::domain::a001_catalog::controller::use_catalog;
use crate::domain::a001_catalog::state::{SessionPhase, ViewStatus};
use crate::shared::infinite_scroll::use_infinite_scroll;
use contracts::domain::a001_catalog::Product;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::{Card, Spinner};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let controller = use_catalog();
    let state = controller.state;

    let status = Memo::new(move |_| state.with(|s| s.view_status()));
    let can_advance = Memo::new(move |_| state.with(|s| s.can_advance()));
    let loading_more =
        move || state.with(|s| s.phase() == SessionPhase::Loading && !s.products.is_empty());
    // Ошибка догрузки при уже показанных товарах
    let failure_below = move || {
        state.with(|s| {
            s.failure
                .clone()
                .filter(|_| !s.products.is_empty())
        })
    };

    let sentinel = NodeRef::<Div>::new();
    use_infinite_scroll(
        sentinel,
        can_advance.into(),
        Callback::new(move |_| controller.advance()),
    );

    view! {
        <div class="catalog-grid">
            <For
                // Ключ включает epoch: после смены категории карточки пересоздаются
                each=move || {
                    state.with(|s| {
                        s.products
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, product)| ((s.epoch, index), product))
                            .collect::<Vec<_>>()
                    })
                }
                key=|(key, _)| *key
                children=move |(_, product): ((u64, usize), Product)| {
                    view! { <ProductCard product=product /> }
                }
            />
            {move || match status.get() {
                ViewStatus::Ready => ().into_any(),
                ViewStatus::Loading => view! {
                    <div class="catalog-grid__placeholder">
                        <Spinner />
                    </div>
                }
                .into_any(),
                ViewStatus::Empty => view! {
                    <p class="catalog-grid__placeholder">
                        "No products available for this category."
                    </p>
                }
                .into_any(),
                ViewStatus::Failed(message) => view! {
                    <p class="catalog-grid__placeholder catalog-grid__placeholder--error">
                        {format!("Failed to load products: {}", message)}
                    </p>
                }
                .into_any(),
            }}
        </div>

        <Show when=loading_more>
            <p class="catalog-grid__loading-more">"Loading more products..."</p>
        </Show>
        {move || {
            failure_below()
                .map(|message| {
                    view! {
                        <p class="catalog-grid__loading-more catalog-grid__loading-more--error">
                            {format!("Failed to load more products: {}", message)}
                        </p>
                    }
                })
        }}

        <div node_ref=sentinel class="catalog-grid__sentinel"></div>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let Product {
        title,
        description,
        thumbnail,
        price,
        ..
    } = product;
    let price = format!("Price: ${}", price);

    view! {
        <div class="product-card">
            <Card>
                <img class="product-card__image" src=thumbnail alt=title.clone() />
                <div class="product-card__body">
                    <h2 class="product-card__title">{title}</h2>
                    <p class="product-card__description">{description}</p>
                    <span class="product-card__price">{price}</span>
                </div>
            </Card>
        </div>
    }
}
