use crate::components::theme_toggle::ThemeToggle;
use crate::routes::{self, Navigator};
use crate::store::use_store;
use crate::utils::format::badge_count;
use leptos::*;
use leptos_router::{use_location, A};

const NAV_LINKS: [(&str, &str); 5] = [
    ("Parts", routes::PARTS),
    ("Categories", routes::CATEGORIES),
    ("Brands", routes::BRANDS),
    ("Deals", routes::DEALS),
    ("Support", routes::SUPPORT),
];

// saved parts and account settings both live on the profile page
const MOBILE_ACCOUNT_LINKS: [(&str, &str); 3] = [
    ("Messages", routes::CHAT),
    ("Account", routes::PROFILE),
    ("Orders", routes::ORDERS),
];

/// Site header shared by every page.
#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let navigator = Navigator::new();
    let (menu_open, set_menu_open) = create_signal(false);

    // any route change closes the mobile menu
    let location = use_location();
    create_effect(move |_| {
        location.pathname.track();
        set_menu_open.set(false);
    });

    let cart_count = create_memo(move |_| store.cart_count());
    let wishlist_count = create_memo(move |_| store.wishlist_count());

    view! {
        <header class="site-header">
            <div class="header-inner">
                <A href=routes::HOME class="logo">
                    <span class="logo-mark">"⚙"</span>
                    <span class="logo-text">"GearNest"</span>
                </A>

                <nav class="main-nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| view! { <A href=href class="nav-link">{label}</A> })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button
                        class="icon-button"
                        title="Wishlist"
                        on:click=move |_| navigator.go(routes::PROFILE)
                    >
                        "♡"
                        <Show when=move || { wishlist_count.get() > 0 }>
                            <span class="badge wishlist-count">
                                {move || badge_count(wishlist_count.get())}
                            </span>
                        </Show>
                    </button>
                    <button
                        class="icon-button"
                        title="Cart"
                        on:click=move |_| navigator.go(routes::CART)
                    >
                        "🛒"
                        <Show when=move || { cart_count.get() > 0 }>
                            <span class="badge cart-count">
                                {move || badge_count(cart_count.get())}
                            </span>
                        </Show>
                    </button>
                    <button
                        class="icon-button"
                        title="Chat with a mechanic"
                        on:click=move |_| navigator.go(routes::CHAT)
                    >
                        "💬"
                    </button>
                    <button
                        class="icon-button"
                        title="Profile"
                        on:click=move |_| navigator.go(routes::PROFILE)
                    >
                        "👤"
                    </button>
                    <ThemeToggle/>
                    <button
                        class="icon-button menu-toggle"
                        title="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| view! { <A href=href class="mobile-link">{label}</A> })
                        .collect_view()}
                    <A href=routes::CART class="mobile-link">
                        "Cart"
                        <Show when=move || { cart_count.get() > 0 }>
                            <span class="badge">{move || cart_count.get()}</span>
                        </Show>
                    </A>
                    <A href=routes::PROFILE class="mobile-link">
                        "Wishlist"
                        <Show when=move || { wishlist_count.get() > 0 }>
                            <span class="badge">{move || wishlist_count.get()}</span>
                        </Show>
                    </A>
                    {MOBILE_ACCOUNT_LINKS
                        .into_iter()
                        .map(|(label, href)| view! { <A href=href class="mobile-link">{label}</A> })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
