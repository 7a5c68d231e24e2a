use crate::routes::{self, Navigator};
use leptos::*;

const TRUST_INDICATORS: [(&str, &str, &str); 4] = [
    ("🛡", "Guaranteed Quality", "OEM & Aftermarket"),
    ("🚚", "Fast Shipping", "Same Day Available"),
    ("⏱", "Easy Returns", "30-Day Policy"),
    ("★", "Expert Support", "24/7 Available"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let navigator = Navigator::new();
    view! {
        <section class="hero">
            <span class="badge primary">"✨ New AR Preview Feature Available"</span>
            <h1 class="hero-title">
                "Find the Perfect" <span class="accent">"Car Parts"</span> "for Your Vehicle"
            </h1>
            <p class="hero-lead">
                "Search millions of parts with VIN scanning, AR preview, and instant compatibility checking. \
                 Trusted by over 100,000+ mechanics and car enthusiasts."
            </p>
            <div class="trust-grid">
                {TRUST_INDICATORS
                    .into_iter()
                    .map(|(icon, title, detail)| {
                        view! {
                            <div class="trust-item">
                                <span class="trust-icon">{icon}</span>
                                <div class="trust-title">{title}</div>
                                <div class="trust-detail">{detail}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="hero-actions">
                <button class="button primary" on:click=move |_| navigator.go(routes::PARTS)>
                    "Browse All Parts"
                </button>
                <button class="button outline" on:click=move |_| navigator.go(routes::CHAT)>
                    "Chat with Mechanic"
                </button>
            </div>
        </section>
    }
}
