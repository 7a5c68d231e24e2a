use crate::components::product_card::ProductCard;
use crate::store::use_store;
use leptos::*;

#[component]
pub fn FeaturedProducts() -> impl IntoView {
    let store = use_store();
    let featured = store
        .catalog
        .with_value(|parts| parts.iter().filter(|p| p.featured).cloned().collect::<Vec<_>>());

    view! {
        <section class="featured-products">
            <h2 class="section-title">"Featured Parts"</h2>
            <p class="section-lead">"Top-rated parts trusted by mechanics and enthusiasts"</p>
            <div class="product-grid">
                {featured
                    .into_iter()
                    .map(|part| view! { <ProductCard part=part/> })
                    .collect_view()}
            </div>
        </section>
    }
}
