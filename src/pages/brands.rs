use crate::components::star_rating::StarRating;
use crate::components::view_toggle::{ViewMode, ViewToggle};
use crate::fixtures;
use crate::models::brand::{filter_brands, Brand, BrandFilter};
use crate::routes::{parts_brand_path, Navigator};
use crate::utils::format::thousands;
use leptos::*;

/// Categories a grid card lists before "+N".
const GRID_CATEGORIES_SHOWN: usize = 2;

#[component]
pub fn BrandsPage() -> impl IntoView {
    let brands = store_value(fixtures::brands());
    let total = brands.with_value(Vec::len);
    let (query, set_query) = create_signal(String::new());
    let (filter, set_filter) = create_signal(BrandFilter::All);
    let mode = create_rw_signal(ViewMode::Grid);

    let results = create_memo(move |_| {
        let filter = filter.get();
        query.with(|q| brands.with_value(|b| filter_brands(b, q, filter)))
    });

    view! {
        <main class="page brands-page">
            <div class="page-heading">
                <h1>"Shop by Brand"</h1>
                <p class="muted">"Trusted manufacturers, from OEM suppliers to performance specialists"</p>
            </div>
            <div class="toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search brands..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <div class="filter-buttons">
                    {BrandFilter::ALL
                        .into_iter()
                        .map(|option| view! {
                            <button
                                class="button outline"
                                class:active=move || filter.get() == option
                                on:click=move |_| set_filter.set(option)
                            >
                                {option.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <ViewToggle mode=mode/>
            </div>
            <p class="muted result-count">
                {move || format!("Showing {} of {} brands", results.with(Vec::len), total)}
            </p>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <h3>"No brands found"</h3>
                        <p class="muted">"Try adjusting your search or filter."</p>
                        <button class="button outline" on:click=move |_| set_query.set(String::new())>
                            "Clear Search"
                        </button>
                        <button class="button primary" on:click=move |_| set_filter.set(BrandFilter::All)>
                            "Show All Brands"
                        </button>
                    </div>
                }
            >
                <div class:brand-grid=move || mode.get() == ViewMode::Grid class:brand-list=move || mode.get() == ViewMode::List>
                    <For
                        each=move || results.get()
                        key=|brand| brand.id.clone()
                        children=move |brand| view! { <BrandCard brand=brand mode=mode/> }
                    />
                </div>
            </Show>
        </main>
    }
}

#[component]
fn BrandCard(brand: Brand, mode: RwSignal<ViewMode>) -> impl IntoView {
    let navigator = Navigator::new();
    let target = store_value(parts_brand_path(&brand.name));
    let categories = store_value(brand.categories.clone());
    let category_chips = move || {
        let grid = mode.get() == ViewMode::Grid;
        categories.with_value(|all| {
            let shown = if grid { GRID_CATEGORIES_SHOWN.min(all.len()) } else { all.len() };
            let hidden = all.len() - shown;
            view! {
                {all[..shown].iter().map(|c| view! { <span class="chip">{c.clone()}</span> }).collect_view()}
                {(hidden > 0).then(|| view! { <span class="chip more">{format!("+{hidden}")}</span> })}
            }
        })
    };

    view! {
        <article class="card brand-card" on:click=move |_| target.with_value(|t| navigator.go(t))>
            <div class="brand-logo-wrap">
                <img src=brand.logo.clone() alt=format!("{} logo", brand.name) class="brand-logo large"/>
                <span class="brand-monogram">{brand.monogram()}</span>
                {brand.badge().map(|badge| view! { <span class="badge brand-badge">{badge}</span> })}
            </div>
            <div class="brand-body">
                <h3>{brand.name.clone()}</h3>
                <p class="muted">{brand.description.clone()}</p>
                <StarRating rating=brand.rating/>
                <p class="part-count">{format!("{} parts", thousands(brand.part_count))}</p>
                <p class="muted origin">
                    {format!("Since {} · {}", brand.founded_year, brand.country_of_origin)}
                </p>
                <div class="brand-categories">{category_chips}</div>
            </div>
        </article>
    }
}
