use crate::components::search_bar::{submit_search, VinScanner};
use crate::fixtures::{self, RECENT_SEARCHES};
use crate::routes::{self, parts_category_path, Navigator};
use crate::utils::format::compact;
use leptos::*;

const QUICK_ACTIONS: [(&str, &str, &str, &str); 3] = [
    ("💬", "Ask a Mechanic", "Get expert advice and part recommendations", routes::CHAT),
    ("⏱", "Track Orders", "Monitor your order status and delivery", routes::ORDERS),
    ("🔧", "My Garage", "Manage your vehicles and saved parts", routes::PROFILE),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigator = Navigator::new();
    let vin = VinScanner::new();
    let (query, set_query) = create_signal(String::new());

    let search = move || {
        submit_search(navigator, &query.get_untracked());
    };

    view! {
        <main class="page home-page">
            <section class="home-hero">
                <h1 class="hero-title">
                    "Find Your Perfect" <span class="accent">"Auto Parts"</span>
                </h1>
                <p class="hero-lead">
                    "Search by part name, VIN scan, or browse our extensive catalog of verified compatible parts"
                </p>
            </section>

            <div class="card search-card">
                <div class="search-row">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search for parts by name, part number, or description..."
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                search();
                            }
                        }
                    />
                    <button class="button primary" on:click=move |_| search()>
                        "Search"
                    </button>
                </div>
                <div class="vin-row">
                    <button class="button outline vin-button" on:click=move |_| vin.scan()>
                        "Scan VIN"
                    </button>
                    <span class="muted">"or"</span>
                    <button class="button outline" disabled=true title="Coming soon">
                        "Upload Photo"
                    </button>
                </div>
            </div>

            <section class="recent-searches">
                <h3>"Recent Searches"</h3>
                <div class="chip-row">
                    {RECENT_SEARCHES
                        .into_iter()
                        .map(|term| {
                            view! {
                                <button
                                    class="button outline small"
                                    on:click=move |_| {
                                        set_query.set(term.to_string());
                                        submit_search(navigator, term);
                                    }
                                >
                                    {term}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="quick-categories">
                {fixtures::quick_categories()
                    .into_iter()
                    .map(|category| {
                        let target = parts_category_path(&category.name);
                        view! {
                            <div class="card quick-category" on:click=move |_| navigator.go(&target)>
                                <div class="tile-icon">{category.icon}</div>
                                <h3>{category.name}</h3>
                                <p class="muted">{format!("{}+ parts", compact(category.part_count))}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="quick-actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|(icon, title, blurb, href)| {
                        view! {
                            <div class="card quick-action" on:click=move |_| navigator.go(href)>
                                <div class="action-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p class="muted">{blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
