use crate::components::star_rating::StarRating;
use crate::models::brand::brand_logo;
use crate::models::part::Part;
use crate::routes::{self, part_path, Navigator};
use crate::store::use_store;
use leptos::logging::error;
use leptos::*;

/// Compatibility entries shown before collapsing into "+N more".
const COMPATIBILITY_SHOWN: usize = 2;

#[component]
pub fn ProductCard(part: Part) -> impl IntoView {
    let store = use_store();
    let navigator = Navigator::new();
    let id = store_value(part.id.clone());
    let saved = create_memo(move |_| id.with_value(|id| store.is_saved(id)));

    let add_to_cart = move |_: ev::MouseEvent| {
        id.with_value(|id| match store.add_to_cart(id, 1) {
            Ok(()) => navigator.go(routes::CART),
            Err(err) => error!("[CART] {}", err),
        });
    };
    let toggle_wishlist = move |_: ev::MouseEvent| {
        id.with_value(|id| store.toggle_saved(id));
    };
    let view_details = move |_: ev::MouseEvent| id.with_value(|id| navigator.go(&part_path(id)));

    let (shown, hidden) = part.compatibility_preview(COMPATIBILITY_SHOWN);
    let compatibility = shown.join(", ");

    view! {
        <article class="product-card">
            <div class="product-media">
                <img src=part.image().to_string() alt=part.name.clone() class="product-image"/>
                <div class="product-badges">
                    {part.is_on_sale().then(|| view! { <span class="badge sale">"Sale"</span> })}
                    {part.featured.then(|| view! { <span class="badge featured">"Featured"</span> })}
                </div>
                <button
                    class="icon-button wishlist-toggle"
                    class:saved=move || saved.get()
                    title="Save to wishlist"
                    on:click=toggle_wishlist
                >
                    {move || if saved.get() { "♥" } else { "♡" }}
                </button>
                <button class="icon-button view-details" title="View details" on:click=view_details>
                    "👁"
                </button>
            </div>
            <div class="product-body">
                <div class="product-brand">
                    <img src=brand_logo(&part.brand) alt=format!("{} logo", part.brand) class="brand-logo"/>
                    <span>{part.brand.clone()}</span>
                </div>
                <h3 class="product-name">{part.name.clone()}</h3>
                <StarRating rating=part.rating review_count=part.review_count/>
                <p class="compatibility">
                    {compatibility}
                    {(hidden > 0).then(|| view! { <span class="more">{format!(" +{hidden} more")}</span> })}
                </p>
                <div class="price-row">
                    <span class="price">{part.price.to_string()}</span>
                    {part
                        .original_price
                        .map(|original| view! { <span class="original-price">{original.to_string()}</span> })}
                </div>
                <p class="delivery">{format!("🚚 {}", part.eta)}</p>
                <button class="button primary add-to-cart" on:click=add_to_cart>
                    "Add to Cart"
                </button>
            </div>
        </article>
    }
}
