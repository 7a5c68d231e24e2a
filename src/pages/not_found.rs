use crate::routes;
use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    view! {
        <main class="page not-found">
            <div class="empty-state">
                <h1>"404"</h1>
                <p class="muted">{move || format!("No page at {}", location.pathname.get())}</p>
                <A href=routes::HOME class="button primary">"Return to Home"</A>
            </div>
        </main>
    }
}

/// Placeholder for links that exist before their page does.
#[component]
pub fn ComingSoonPage() -> impl IntoView {
    view! {
        <main class="page coming-soon">
            <div class="empty-state">
                <h1>"Coming Soon"</h1>
                <p class="muted">"This page is under construction."</p>
                <A href=routes::PARTS class="button primary">"Browse Parts"</A>
            </div>
        </main>
    }
}
