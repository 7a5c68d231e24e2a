use crate::routes;
use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <h4>"GearNest"</h4>
                    <p>"Quality auto parts with expert help, delivered fast."</p>
                </div>
                <div>
                    <h4>"Shop"</h4>
                    <A href=routes::PARTS>"All Parts"</A>
                    <A href=routes::CATEGORIES>"Categories"</A>
                    <A href=routes::BRANDS>"Brands"</A>
                    <A href=routes::DEALS>"Deals"</A>
                </div>
                <div>
                    <h4>"Help"</h4>
                    <A href=routes::SUPPORT>"Support"</A>
                    <A href=routes::ORDERS>"Track Orders"</A>
                    <A href=routes::CHAT>"Ask a Mechanic"</A>
                </div>
            </div>
            <p class="copyright">"© 2024 GearNest. All rights reserved."</p>
        </footer>
    }
}
