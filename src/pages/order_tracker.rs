use crate::fixtures;
use crate::models::order::{resolve_order, Order, StepKind};
use crate::routes::{self, order_path, part_path, Navigator};
use crate::store::{use_config, use_toasts};
use crate::utils::format::{long_date, short_time};
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn OrderTrackerPage() -> impl IntoView {
    let navigator = Navigator::new();
    let orders = store_value(fixtures::orders());
    let query = use_query_map();

    let resolved = create_memo(move |_| {
        let requested = query.with(|q| q.get("order").cloned());
        orders.with_value(|orders| {
            let (order, err) = resolve_order(orders, requested.as_deref());
            (order.cloned(), err.map(|err| err.to_string()))
        })
    });
    let selected_number = move || resolved.with(|(order, _)| order.as_ref().map(|o| o.number.clone()));

    view! {
        <main class="page orders-page">
            <h1>"Track Your Orders"</h1>
            {move || resolved.with(|(_, notice)| notice.clone()).map(|notice| view! {
                <div class="alert info order-notice">
                    {format!("{notice}. Showing your most recent order instead.")}
                </div>
            })}
            <div class="orders-layout">
                <aside class="card order-list">
                    <h3>"Recent Orders"</h3>
                    {orders
                        .get_value()
                        .into_iter()
                        .map(|order| {
                            let number = store_value(order.number.clone());
                            let selected = move || number.with_value(|n| selected_number().as_deref() == Some(n.as_str()));
                            view! {
                                <button
                                    class="order-row"
                                    class:selected=selected
                                    on:click=move |_| navigator.go(&order_path(&number.get_value()))
                                >
                                    <span class="order-number">{order.number.clone()}</span>
                                    <span class="badge status">{order.status.label()}</span>
                                    <span class="muted">{long_date(order.placed_at.date_naive())}</span>
                                    <span class="order-total">{order.total().to_string()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </aside>
                <section class="order-detail">
                    {move || match resolved.with(|(order, _)| order.clone()) {
                        Some(order) => view! { <OrderDetail order=order/> }.into_view(),
                        None => view! { <p class="muted">"You have no orders yet."</p> }.into_view(),
                    }}
                </section>
            </div>
            <button class="button ghost" on:click=move |_| navigator.go(routes::PARTS)>
                "Continue Shopping"
            </button>
        </main>
    }
}

#[component]
fn OrderDetail(order: Order) -> impl IntoView {
    let navigator = Navigator::new();
    let toasts = use_toasts();
    let toast_duration = use_config().toast_short;
    let steps = order.steps();
    let current = order.current_step();
    let current_kind = StepKind::ALL[current];
    let progress = order.progress_percent();
    let carrier = store_value((order.carrier.clone(), order.tracking_number.clone()));
    let first_part = store_value(order.lines.first().map(|line| line.part_id.clone()));

    let contact_carrier = move |_: ev::MouseEvent| {
        carrier.with_value(|(carrier, tracking)| {
            toasts.show(
                format!("Contacting {carrier}"),
                format!("Reference tracking number {tracking}"),
                toast_duration,
            )
        });
    };
    let rate = move |_: ev::MouseEvent| {
        if let Some(id) = first_part.get_value() {
            navigator.go(&part_path(&id));
        }
    };
    let address = &order.shipping_address;

    view! {
        <div class="card order-summary-card">
            <div class="split">
                <div>
                    <h2 class="order-number">{format!("Order {}", order.number)}</h2>
                    <p class="muted">
                        {format!("Estimated delivery: {}", long_date(order.estimated_delivery.date_naive()))}
                    </p>
                </div>
                <span class="badge status">{order.status.label()}</span>
            </div>
            <dl class="order-facts">
                <div><dt>"Tracking Number"</dt><dd class="tracking">{order.tracking_number.clone()}</dd></div>
                <div><dt>"Carrier"</dt><dd>{order.carrier.clone()}</dd></div>
                <div>
                    <dt>"Shipping Address"</dt>
                    <dd>
                        {address.name.clone()}<br/>
                        {address.street.clone()}<br/>
                        {address.city_line()}
                    </dd>
                </div>
            </dl>
        </div>

        <div class="card order-progress">
            <div class="split">
                <h3>"Delivery Progress"</h3>
                <span class="muted step-counter">
                    {format!("Step {} of {}", current + 1, StepKind::ALL.len())}
                </span>
            </div>
            <div class="bar">
                <div class="bar-fill" style=format!("width: {progress}%")></div>
            </div>
            <ol class="steps">
                {steps
                    .into_iter()
                    .map(|step| view! {
                        <li class=format!("step {}", step.status.css_class())>
                            <span class="step-icon">{step.kind.icon()}</span>
                            <div>
                                <h4>{step.kind.title()}</h4>
                                <p class="muted">{step.kind.description()}</p>
                                {step.at.map(|at| view! {
                                    <span class="muted step-time">
                                        {format!("{} at {}", long_date(at.date_naive()), short_time(at))}
                                    </span>
                                })}
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>
            <p class="current-note">{current_kind.current_note()}</p>
        </div>

        <div class="card order-items">
            <h3>"Order Items"</h3>
            {order
                .lines
                .iter()
                .map(|line| view! {
                    <div class="order-line">
                        <img src=line.image.clone() alt=line.name.clone() class="order-line-image"/>
                        <span class="order-line-name">{line.name.clone()}</span>
                        <span class="muted">{format!("Qty: {}", line.quantity)}</span>
                        <span>{(line.price * line.quantity).to_string()}</span>
                    </div>
                })
                .collect_view()}
            <div class="order-line total">
                <span>"Total"</span>
                <span class="order-total">{order.total().to_string()}</span>
            </div>
        </div>

        <div class="order-actions">
            <button class="button outline" on:click=contact_carrier>"📞 Contact Carrier"</button>
            <button class="button outline" on:click=move |_| navigator.go(routes::CHAT)>"💬 Chat with Support"</button>
            <button class="button outline" on:click=rate>"⭐ Rate & Review"</button>
        </div>
    }
}
