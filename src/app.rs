//! Root component: shared context, the header, every route and the toast stack.
use crate::components::header::Header;
use crate::components::toast::Toaster;
use crate::config::AppConfig;
use crate::pages::{
    brands::BrandsPage,
    cart::CartPage,
    categories::CategoriesPage,
    compatible_parts::CompatiblePartsPage,
    deals::DealsPage,
    home::HomePage,
    marketplace::MarketplacePage,
    mechanic_chat::MechanicChatPage,
    not_found::{ComingSoonPage, NotFoundPage},
    order_tracker::OrderTrackerPage,
    part_details::PartDetailsPage,
    profile::ProfilePage,
    support::SupportPage,
};
use crate::routes;
use crate::store::provide_app_context;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! { <Shell config=AppConfig::default()/> }
}

/// Everything below the meta context. Tests mount this with their own config.
#[component]
pub fn Shell(config: AppConfig) -> impl IntoView {
    provide_app_context(config);

    view! {
        <Stylesheet href="/pkg/gearnest.css"/>
        <Title text="GearNest - Auto Parts Marketplace"/>
        <Meta name="description" content="Find verified compatible auto parts and talk to a mechanic."/>
        <Router>
            <Header/>
            <Routes>
                <Route path=routes::HOME view=HomePage/>
                <Route path=routes::MARKETPLACE view=MarketplacePage/>
                <Route path=routes::PARTS view=CompatiblePartsPage/>
                <Route path="/part/:id" view=PartDetailsPage/>
                <Route path=routes::CHAT view=MechanicChatPage/>
                <Route path=routes::ORDERS view=OrderTrackerPage/>
                <Route path=routes::PROFILE view=ProfilePage/>
                <Route path=routes::CATEGORIES view=CategoriesPage/>
                <Route path=routes::BRANDS view=BrandsPage/>
                <Route path=routes::DEALS view=DealsPage/>
                <Route path=routes::SUPPORT view=SupportPage/>
                <Route path=routes::CART view=CartPage/>
                <Route path="/products/:id" view=ComingSoonPage/>
                <Route path=routes::WISHLIST view=ComingSoonPage/>
                <Route path=routes::CHECKOUT view=ComingSoonPage/>
                <Route path=routes::ACCOUNT view=ComingSoonPage/>
                <Route path=routes::MESSAGES view=ComingSoonPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
            <Toaster/>
        </Router>
    }
}
