use crate::fixtures;
use crate::routes::{parts_category_path, Navigator};
use crate::utils::format::thousands;
use leptos::*;

#[component]
pub fn CategoryGrid() -> impl IntoView {
    let navigator = Navigator::new();
    view! {
        <section class="category-grid-section">
            <h2 class="section-title">"Shop by Category"</h2>
            <p class="section-lead">"Find the exact parts you need for your vehicle"</p>
            <div class="category-grid">
                {fixtures::category_tiles()
                    .into_iter()
                    .map(|tile| {
                        let target = parts_category_path(&tile.name);
                        view! {
                            <div class="category-tile" on:click=move |_| navigator.go(&target)>
                                <div class="tile-icon">{tile.icon}</div>
                                <h3 class="tile-name">{tile.name}</h3>
                                <p class="tile-count">{format!("{}+ parts", thousands(tile.part_count))}</p>
                                <p class="tile-description">{tile.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
