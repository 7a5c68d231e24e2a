use crate::components::view_toggle::{ViewMode, ViewToggle};
use crate::fixtures;
use crate::models::category::{filter_categories, partition_featured, Category};
use crate::routes::{parts_category_path, Navigator};
use crate::utils::format::thousands;
use leptos::*;

/// Subcategories listed in list view before "+N more".
const SUBCATEGORIES_SHOWN: usize = 3;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = store_value(fixtures::categories());
    let (query, set_query) = create_signal(String::new());
    let mode = create_rw_signal(ViewMode::Grid);

    let searching = move || query.with(|q| !q.trim().is_empty());
    let results = create_memo(move |_| query.with(|q| categories.with_value(|c| filter_categories(c, q))));

    view! {
        <main class="page categories-page">
            <div class="page-heading">
                <h1>"Browse Categories"</h1>
                <p class="muted">"Find parts organized by system and component type"</p>
            </div>
            <div class="toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search categories..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <ViewToggle mode=mode/>
            </div>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <h3>"No categories found"</h3>
                        <p class="muted">"Try a different search term."</p>
                        <button class="button primary" on:click=move |_| set_query.set(String::new())>
                            "View All Categories"
                        </button>
                    </div>
                }
            >
                {move || {
                    if searching() {
                        let hits = results.get();
                        view! {
                            <section>
                                <h2 class="section-title">{format!("Search Results ({})", hits.len())}</h2>
                                <CategoryCollection categories=hits mode=mode/>
                            </section>
                        }
                        .into_view()
                    } else {
                        let (featured, rest) = categories.with_value(|c| partition_featured(c));
                        view! {
                            <section>
                                <h2 class="section-title">"Featured Categories"</h2>
                                <CategoryCollection categories=featured mode=mode/>
                            </section>
                            <section>
                                <h2 class="section-title">"All Categories"</h2>
                                <CategoryCollection categories=rest mode=mode/>
                            </section>
                        }
                        .into_view()
                    }
                }}
            </Show>
        </main>
    }
}

#[component]
fn CategoryCollection(categories: Vec<Category>, mode: RwSignal<ViewMode>) -> impl IntoView {
    let navigator = Navigator::new();
    let categories = store_value(categories);

    move || {
        let list = mode.get() == ViewMode::List;
        let cards = categories
            .get_value()
            .into_iter()
            .map(|category| {
                let target = parts_category_path(&category.name);
                let hidden = category.subcategories.len().saturating_sub(SUBCATEGORIES_SHOWN);
                let shown = if list { SUBCATEGORIES_SHOWN } else { category.subcategories.len() };
                view! {
                    <article class="card category-card" on:click=move |_| navigator.go(&target)>
                        <span class="category-icon">{category.icon.clone()}</span>
                        <div class="category-body">
                            <h3>{category.name.clone()}</h3>
                            <p class="muted">{category.description.clone()}</p>
                            <span class="badge count">{format!("{} parts", thousands(category.part_count))}</span>
                            <div class="subcategories">
                                {category
                                    .subcategories
                                    .iter()
                                    .take(shown)
                                    .map(|s| view! { <span class="chip">{s.clone()}</span> })
                                    .collect_view()}
                                {(list && hidden > 0).then(|| view! { <span class="chip more">{format!("+{hidden} more")}</span> })}
                            </div>
                        </div>
                    </article>
                }
            })
            .collect_view();
        view! { <div class:category-grid=!list class:category-list=list>{cards}</div> }
    }
}
