use crate::components::{
    category_grid::CategoryGrid, featured_products::FeaturedProducts, footer::Footer,
    hero_section::HeroSection, search_bar::SearchBar,
};
use leptos::*;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    view! {
        <main class="page marketplace-page">
            <HeroSection/>
            <section class="search-section">
                <h2 class="section-title">"Search for Parts"</h2>
                <p class="section-lead">
                    "Enter part name, number, or scan your VIN for instant compatibility"
                </p>
                <SearchBar/>
            </section>
            <CategoryGrid/>
            <FeaturedProducts/>
        </main>
        <Footer/>
    }
}
