use crate::fixtures;
use crate::models::cart::{CartItem, FREE_SHIPPING_THRESHOLD};
use crate::models::part::Part;
use crate::routes::{self, part_path, Navigator};
use crate::store::{use_store, Store};
use crate::utils::format::pluralize;
use leptos::logging::{error, log};
use leptos::*;

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_store();
    let navigator = Navigator::new();
    let (promo_input, set_promo_input) = create_signal(String::new());
    let (promo_error, set_promo_error) = create_signal(None::<String>);

    let summary = create_memo(move |_| store.cart.with(|cart| cart.summary()));
    let applied = create_memo(move |_| store.cart.with(|cart| cart.promo()));
    let line_count = create_memo(move |_| store.cart_count());

    let apply_promo = move |_: ev::MouseEvent| {
        let code = promo_input.get_untracked();
        match store.cart.try_update(|cart| cart.apply_promo(&code)) {
            Some(Ok(promo)) => {
                log!("[CART] promo {} applied", promo.code);
                set_promo_error.set(None);
            }
            Some(Err(err)) => set_promo_error.set(Some(err.to_string())),
            None => {}
        }
    };

    let recommended = store.catalog.with_value(|parts| {
        fixtures::recommendations()
            .into_iter()
            .filter_map(|id| parts.iter().find(|part| part.id == id).cloned())
            .collect::<Vec<_>>()
    });

    view! {
        <main class="page cart-page">
            <Show
                when=move || { line_count.get() > 0 }
                fallback=move || view! {
                    <div class="empty-state">
                        <span class="empty-icon">"🛒"</span>
                        <h2>"Your cart is empty"</h2>
                        <p class="muted">"Find the right parts for your vehicle and add them here."</p>
                        <button class="button primary" on:click=move |_| navigator.go(routes::PARTS)>
                            "Browse Parts"
                        </button>
                    </div>
                }
            >
                <h1>"Shopping Cart"</h1>
                <p class="muted">
                    {move || format!("{} in your cart", pluralize(store.cart.with(|c| c.unit_count()) as usize, "item", "items"))}
                </p>

                <Show when=move || store.cart.with(|c| c.has_out_of_stock())>
                    <div class="alert warning out-of-stock-warning">
                        "Some items in your cart are out of stock and will ship when available."
                    </div>
                </Show>

                <div class="cart-layout">
                    <section class="cart-lines">
                        <For
                            each=move || store.cart.with(|c| c.items().to_vec())
                            key=|item| (item.part_id.clone(), item.quantity)
                            children=move |item| view! { <CartLine item=item store=store/> }
                        />
                    </section>

                    <aside class="card order-summary">
                        <h3>"Order Summary"</h3>
                        <div class="promo-row">
                            <input
                                type="text"
                                class="promo-input"
                                placeholder="Promo code"
                                prop:value=promo_input
                                disabled=move || applied.get().is_some()
                                on:input=move |ev| set_promo_input.set(event_target_value(&ev))
                            />
                            <button
                                class="button outline apply-promo"
                                disabled=move || applied.get().is_some()
                                on:click=apply_promo
                            >
                                "Apply"
                            </button>
                        </div>
                        {move || promo_error.get().map(|msg| view! { <p class="form-error promo-error">{msg}</p> })}
                        {move || applied.get().map(|promo| view! {
                            <p class="promo-applied">
                                {format!("Promo code {} applied: {}% off", promo.code, promo.percent_off)}
                            </p>
                        })}

                        <dl class="summary-lines">
                            <div class="summary-line">
                                <dt>"Subtotal"</dt>
                                <dd class="subtotal">{move || summary.get().subtotal.to_string()}</dd>
                            </div>
                            <Show when=move || !summary.get().savings.is_zero()>
                                <div class="summary-line savings">
                                    <dt>"You save"</dt>
                                    <dd>{move || format!("-{}", summary.get().savings)}</dd>
                                </div>
                            </Show>
                            <Show when=move || !summary.get().promo_discount.is_zero()>
                                <div class="summary-line promo">
                                    <dt>"Promo discount"</dt>
                                    <dd class="promo-discount">{move || format!("-{}", summary.get().promo_discount)}</dd>
                                </div>
                            </Show>
                            <div class="summary-line">
                                <dt>"Shipping"</dt>
                                <dd class="shipping">
                                    {move || {
                                        let shipping = summary.get().shipping;
                                        if shipping.is_zero() { "FREE".to_string() } else { shipping.to_string() }
                                    }}
                                </dd>
                            </div>
                            <div class="summary-line">
                                <dt>"Tax"</dt>
                                <dd class="tax">{move || summary.get().tax.to_string()}</dd>
                            </div>
                            <div class="summary-line total">
                                <dt>"Total"</dt>
                                <dd class="total">{move || summary.get().total.to_string()}</dd>
                            </div>
                        </dl>
                        {move || summary.get().free_shipping_remaining().map(|remaining| view! {
                            <p class="free-shipping-note">
                                {format!(
                                    "Add {remaining} more for FREE shipping! (orders over {FREE_SHIPPING_THRESHOLD})"
                                )}
                            </p>
                        })}
                        <button
                            class="button primary checkout"
                            disabled=move || !store.cart.with(|c| c.can_checkout())
                            on:click=move |_| navigator.go(routes::CHECKOUT)
                        >
                            "🔒 Secure Checkout"
                        </button>
                        <button class="button ghost" on:click=move |_| navigator.go(routes::PARTS)>
                            "Continue Shopping"
                        </button>
                    </aside>
                </div>
            </Show>

            <section class="recommendations">
                <h2>"You might also like"</h2>
                <div class="recommendation-grid">
                    {recommended
                        .into_iter()
                        .map(|part| view! { <RecommendedPart part=part store=store/> })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}

#[component]
fn CartLine(item: CartItem, store: Store) -> impl IntoView {
    let navigator = Navigator::new();
    let id = store_value(item.part_id.clone());
    let can_decrease = item.can_decrease();
    let can_increase = item.can_increase();

    let decrement = move |_: ev::MouseEvent| {
        let id = id.get_value();
        store.cart.update(|cart| {
            cart.decrement(&id);
        });
    };
    let increment = move |_: ev::MouseEvent| {
        let id = id.get_value();
        store.cart.update(|cart| {
            cart.increment(&id);
        });
    };
    let remove = move |_: ev::MouseEvent| {
        let id = id.get_value();
        store.cart.update(|cart| {
            cart.remove(&id);
        });
        log!("[CART] removed {}", id);
    };
    let save_for_later = move |_: ev::MouseEvent| store.move_to_wishlist(&id.get_value());

    view! {
        <article class="card cart-line">
            <img src=item.image.clone() alt=item.name.clone() class="cart-image"/>
            <div class="cart-line-body">
                <h3 class="cart-line-name" on:click=move |_| navigator.go(&part_path(&id.get_value()))>
                    {item.name.clone()}
                </h3>
                <p class="muted">{format!("{} · Part #: {}", item.brand, item.part_number)}</p>
                <div class="cart-line-badges">
                    {item.fit_verified.then(|| view! { <span class="badge fit-verified">"✓ Fit Verified"</span> })}
                    {if item.in_stock {
                        view! { <span class="badge in-stock">"In Stock"</span> }
                    } else {
                        view! { <span class="badge backorder">"Out of Stock"</span> }
                    }}
                </div>
                <div class="price-row">
                    <span class="price">{item.price.to_string()}</span>
                    {item.original_price.map(|original| view! { <span class="original-price">{original.to_string()}</span> })}
                </div>
                <div class="cart-line-actions">
                    <div class="stepper">
                        <button class="stepper-button decrease" disabled=!can_decrease on:click=decrement>"−"</button>
                        <span class="stepper-value">{item.quantity}</span>
                        <button class="stepper-button increase" disabled=!can_increase on:click=increment>"+"</button>
                    </div>
                    <button class="button ghost move-to-wishlist" on:click=save_for_later>"♡ Save for later"</button>
                    <button class="button ghost remove" on:click=remove>"🗑 Remove"</button>
                </div>
            </div>
            <div class="line-total">{item.line_total().to_string()}</div>
        </article>
    }
}

#[component]
fn RecommendedPart(part: Part, store: Store) -> impl IntoView {
    let id = store_value(part.id.clone());
    let add = move |_: ev::MouseEvent| {
        if let Err(err) = store.add_to_cart(&id.get_value(), 1) {
            error!("[CART] {}", err);
        }
    };
    view! {
        <article class="card recommendation">
            <img src=part.image().to_string() alt=part.name.clone() class="product-image"/>
            <h4>{part.name.clone()}</h4>
            <span class="price">{part.price.to_string()}</span>
            <button class="button outline add-recommended" on:click=add>"Add"</button>
        </article>
    }
}
