use crate::components::star_rating::StarRating;
use crate::models::brand::brand_logo;
use crate::models::part::Part;
use crate::routes::{part_path, Navigator};
use crate::search::{catalog_brands, PartQuery, SortOrder, PRICE_CEILING, PRICE_STEP_DOLLARS};
use crate::store::{use_store, Store};
use leptos::logging::warn;
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn CompatiblePartsPage() -> impl IntoView {
    let store = use_store();
    let params = use_query_map();
    let query = create_rw_signal(PartQuery::default());
    let (show_filters, set_show_filters) = create_signal(false);

    // links into /parts replace the search and navigation filters
    create_effect(move |_| {
        let params = params.get();
        let from_link = PartQuery::from_params(
            params.get("search").map(String::as_str),
            params.get("category").map(String::as_str),
            params.get("brand").map(String::as_str),
        );
        query.update(|q| {
            q.search = from_link.search;
            q.category = from_link.category;
            q.brand = from_link.brand;
        });
    });

    let brands = store.catalog.with_value(|parts| catalog_brands(parts));
    let results = create_memo(move |_| store.catalog.with_value(|parts| query.with(|q| q.apply(parts))));

    let on_sort = move |ev: ev::Event| match event_target_value(&ev).parse::<SortOrder>() {
        Ok(sort) => query.update(|q| q.sort = sort),
        Err(err) => warn!("[SEARCH] {}", err),
    };
    let set_min = move |ev: ev::Event| {
        let min = event_target_value(&ev).parse().unwrap_or(0);
        query.update(|q| q.set_price_range(min, q.max_price.whole_dollars().max(min)));
    };
    let set_max = move |ev: ev::Event| {
        let max = event_target_value(&ev).parse().unwrap_or(PRICE_CEILING.whole_dollars());
        query.update(|q| q.set_price_range(q.min_price.whole_dollars().min(max), max));
    };

    view! {
        <main class="page parts-page">
            <div class="page-heading split">
                <div>
                    <h1>"Compatible Parts"</h1>
                    <p class="muted">
                        "Showing results for: "
                        <span class="strong">
                            {move || query.with(|q| if q.search.trim().is_empty() { "All parts".to_string() } else { q.search.clone() })}
                        </span>
                    </p>
                </div>
                <div class="heading-controls">
                    <input
                        type="text"
                        class="search-input refine"
                        placeholder="Refine search..."
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                    />
                    <button
                        class="button outline"
                        class:active=move || show_filters.get()
                        on:click=move |_| set_show_filters.update(|open| *open = !*open)
                    >
                        "Filters"
                    </button>
                </div>
            </div>

            <div class="parts-layout">
                <Show when=move || show_filters.get()>
                    <aside class="card filters-panel">
                        <h3>"Filters"</h3>
                        <div class="filter-group">
                            <label for="sort-by">"Sort By"</label>
                            <select id="sort-by" on:change=on_sort>
                                {SortOrder::ALL
                                    .into_iter()
                                    .map(|order| {
                                        view! {
                                            <option
                                                value=order.as_str()
                                                selected=move || query.with(|q| q.sort == order)
                                            >
                                                {order.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="filter-group">
                            <label>
                                {move || query.with(|q| format!(
                                    "Price Range: ${} - ${}",
                                    q.min_price.whole_dollars(),
                                    q.max_price.whole_dollars(),
                                ))}
                            </label>
                            <input
                                type="range"
                                class="price-min"
                                min="0"
                                max=PRICE_CEILING.whole_dollars().to_string()
                                step=PRICE_STEP_DOLLARS.to_string()
                                prop:value=move || query.with(|q| q.min_price.whole_dollars().to_string())
                                on:input=set_min
                            />
                            <input
                                type="range"
                                class="price-max"
                                min="0"
                                max=PRICE_CEILING.whole_dollars().to_string()
                                step=PRICE_STEP_DOLLARS.to_string()
                                prop:value=move || query.with(|q| q.max_price.whole_dollars().to_string())
                                on:input=set_max
                            />
                        </div>
                        <div class="filter-group">
                            <label>"Brands"</label>
                            {brands
                                .clone()
                                .into_iter()
                                .map(|brand| {
                                    let key = brand.clone();
                                    let toggled = brand.clone();
                                    view! {
                                        <label class="checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || query.with(|q| q.brands.contains(&key))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    query.update(|q| q.set_brand_checked(&toggled, checked));
                                                }
                                            />
                                            {brand}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="filter-group">
                            <label>"Availability"</label>
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    class="in-stock-only"
                                    prop:checked=move || query.with(|q| q.in_stock_only)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        query.update(|q| q.in_stock_only = checked);
                                    }
                                />
                                "In Stock"
                            </label>
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    class="fit-verified-only"
                                    prop:checked=move || query.with(|q| q.fit_verified_only)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        query.update(|q| q.fit_verified_only = checked);
                                    }
                                />
                                "Fit Verified"
                            </label>
                        </div>
                    </aside>
                </Show>

                <section class="parts-results">
                    <div class="result-meta">
                        <span class="result-count">
                            {move || format!("Showing {} results", results.with(Vec::len))}
                        </span>
                        <Show when=move || query.with(PartQuery::is_narrowed)>
                            <button class="button ghost small clear-filters" on:click=move |_| query.update(PartQuery::clear)>
                                "Clear Filters"
                            </button>
                        </Show>
                        {move || query.with(|q| q.category.clone()).map(|category| view! {
                            <span class="chip">
                                {format!("Category: {category}")}
                                <button class="chip-clear" on:click=move |_| query.update(|q| q.category = None)>"✕"</button>
                            </span>
                        })}
                        {move || query.with(|q| q.brand.clone()).map(|brand| view! {
                            <span class="chip">
                                {format!("Brand: {brand}")}
                                <button class="chip-clear" on:click=move |_| query.update(|q| q.brand = None)>"✕"</button>
                            </span>
                        })}
                    </div>

                    <Show
                        when=move || results.with(|r| !r.is_empty())
                        fallback=move || view! {
                            <div class="empty-state">
                                <h3>"No parts found"</h3>
                                <p class="muted">"Try adjusting your search or filters."</p>
                                <button class="button primary" on:click=move |_| query.update(PartQuery::clear)>
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                    >
                        <div class="product-grid">
                            <For
                                each=move || results.get()
                                key=|part| part.id.clone()
                                children=move |part| view! { <PartListingCard part=part store=store/> }
                            />
                        </div>
                    </Show>
                </section>
            </div>
        </main>
    }
}

#[component]
fn PartListingCard(part: Part, store: Store) -> impl IntoView {
    let navigator = Navigator::new();
    let id = store_value(part.id.clone());
    let saved = create_memo(move |_| id.with_value(|id| store.is_saved(id)));

    view! {
        <article class="card part-card" on:click=move |_| id.with_value(|id| navigator.go(&part_path(id)))>
            <div class="product-media">
                <img src=part.image().to_string() alt=part.name.clone() class="product-image"/>
                {part.fit_verified.then(|| view! { <span class="badge fit-verified">"✓ Fit Verified"</span> })}
                {part.featured.then(|| view! { <span class="badge featured">"Featured"</span> })}
                <button
                    class="icon-button wishlist-toggle"
                    class:saved=move || saved.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        id.with_value(|id| store.toggle_saved(id));
                    }
                >
                    {move || if saved.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <h3 class="product-name">{part.name.clone()}</h3>
            <div class="product-brand">
                <img src=brand_logo(&part.brand) alt=format!("{} logo", part.brand) class="brand-logo"/>
                <span class="muted">{part.brand.clone()}</span>
            </div>
            <StarRating rating=part.rating review_count=part.review_count/>
            <p class="compatibility muted">{part.compatibility.first().cloned().unwrap_or_default()}</p>
            <div class="price-row">
                <span class="price">{part.price.to_string()}</span>
                {part.original_price.map(|original| view! { <span class="original-price">{original.to_string()}</span> })}
            </div>
            <div class="stock-row">
                {if part.in_stock {
                    view! { <span class="badge in-stock">"In Stock"</span> }
                } else {
                    view! { <span class="badge backorder">"Backorder"</span> }
                }}
                <span class="muted eta">{part.eta.clone()}</span>
            </div>
        </article>
    }
}
