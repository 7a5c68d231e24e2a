use crate::components::star_rating::StarRating;
use crate::fixtures;
use crate::models::deal::{filter_deals, Deal, DealType};
use crate::routes::{part_path, Navigator};
use crate::store::use_store;
use crate::utils::format::time_left;
use chrono::Utc;
use leptos::logging::warn;
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn DealsPage() -> impl IntoView {
    let deals = store_value(fixtures::deals(Utc::now()));
    // `/deals?type=flash` opens on one deal type
    let initial = use_query_map().with_untracked(|q| {
        q.get("type").and_then(|kind| match kind.parse::<DealType>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                warn!("[DEALS] {}", err);
                None
            }
        })
    });
    let (filter, set_filter) = create_signal(initial);
    let visible = create_memo(move |_| {
        let filter = filter.get();
        deals.with_value(|d| filter_deals(d, filter))
    });
    let featured = deals.with_value(|d| d.iter().filter(|deal| deal.is_featured).cloned().collect::<Vec<_>>());

    view! {
        <main class="page deals-page">
            <section class="deals-hero">
                <h1>"🔥 Hot Deals & Special Offers"</h1>
                <p class="muted">"Save big on quality auto parts with limited-time offers"</p>
            </section>

            <div class="filter-buttons">
                <button
                    class="button outline"
                    class:active=move || filter.get().is_none()
                    on:click=move |_| set_filter.set(None)
                >
                    "All Deals"
                </button>
                {DealType::ALL
                    .into_iter()
                    .map(|kind| view! {
                        <button
                            class="button outline"
                            class:active=move || filter.get() == Some(kind)
                            on:click=move |_| set_filter.set(Some(kind))
                        >
                            {format!("{} {}", kind.icon(), kind.button_label())}
                        </button>
                    })
                    .collect_view()}
            </div>

            <Show when=move || filter.get().is_none()>
                <section class="featured-deals">
                    <h2 class="section-title">"⭐ Featured Deals"</h2>
                    <div class="deal-grid featured">
                        {featured
                            .iter()
                            .cloned()
                            .map(|deal| view! { <DealCard deal=deal/> })
                            .collect_view()}
                    </div>
                </section>
            </Show>

            <section class="all-deals">
                <h2 class="section-title">
                    {move || {
                        let heading = filter.get().map(DealType::heading).unwrap_or_else(|| "All Deals".to_string());
                        format!("{heading} ({})", visible.with(Vec::len))
                    }}
                </h2>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            <h3>"No deals available"</h3>
                            <p class="muted">"Check back soon for new offers."</p>
                            <button class="button primary" on:click=move |_| set_filter.set(None)>
                                "View All Deals"
                            </button>
                        </div>
                    }
                >
                    <div class="deal-grid">
                        <For
                            each=move || visible.get()
                            key=|deal| deal.id.clone()
                            children=|deal| view! { <DealCard deal=deal/> }
                        />
                    </div>
                </Show>
            </section>
        </main>
    }
}

#[component]
fn DealCard(deal: Deal) -> impl IntoView {
    let store = use_store();
    let navigator = Navigator::new();
    let part_id = store_value(deal.part_id.clone());
    let saved = create_memo(move |_| part_id.with_value(|id| store.is_saved(id)));
    let ends_in = time_left(deal.time_left(Utc::now()));

    let toggle_saved = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        store.toggle_saved(&part_id.get_value());
    };

    view! {
        <article class="card deal-card" on:click=move |_| navigator.go(&part_path(&part_id.get_value()))>
            <div class="deal-media">
                <img src=deal.image.clone() alt=deal.title.clone() class="product-image"/>
                <span class=deal.deal_type.badge_class()>
                    {format!("{} {}", deal.deal_type.icon(), deal.deal_type.as_str().to_uppercase())}
                </span>
                <span class="badge discount">{format!("-{}%", deal.discount_percent())}</span>
                {deal.is_hot.then(|| view! { <span class="badge hot">"🔥 HOT"</span> })}
                <button class="icon-button wishlist-toggle" class:saved=move || saved.get() on:click=toggle_saved>
                    {move || if saved.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <div class="deal-body">
                <p class="muted">{format!("{} · {}", deal.brand, deal.category)}</p>
                <h3>{deal.title.clone()}</h3>
                <p class="muted">{deal.description.clone()}</p>
                <StarRating rating=deal.rating review_count=deal.reviews/>
                <div class="price-row">
                    <span class="price">{deal.sale_price.to_string()}</span>
                    <span class="original-price">{deal.original_price.to_string()}</span>
                </div>
                <p class="ends-in">{format!("⏱ Ends in {ends_in}")}</p>
                {deal.stock_left.map(|left| view! {
                    <div class="stock">
                        <span class="muted">{format!("Only {left} left")}</span>
                    </div>
                })}
                <div class="bar">
                    <div class="bar-fill" style=format!("width: {}%", deal.stock_progress())></div>
                </div>
            </div>
        </article>
    }
}
