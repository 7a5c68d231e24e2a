use crate::components::star_rating::StarRating;
use crate::fixtures;
use crate::models::brand::brand_logo;
use crate::models::part::{average_rating, rating_distribution, HelpfulVotes, Part, Review, PLACEHOLDER_IMAGE};
use crate::routes::{self, Navigator};
use crate::store::use_store;
use crate::utils::format::long_date;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::{use_params_map, A};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Description,
    Specifications,
    Compatibility,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [
        DetailTab::Description,
        DetailTab::Specifications,
        DetailTab::Compatibility,
    ];

    fn label(self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::Specifications => "Specifications",
            DetailTab::Compatibility => "Compatibility",
        }
    }
}

#[component]
pub fn PartDetailsPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let part = create_memo(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        match store.part(&id) {
            Ok(part) => Some(part),
            Err(err) => {
                log!("[PART] {}", err);
                None
            }
        }
    });

    move || match part.get() {
        Some(part) => view! { <PartDetails part=part/> }.into_view(),
        None => view! {
            <main class="page">
                <div class="empty-state">
                    <h2>"Part not found"</h2>
                    <p class="muted">"The part you are looking for does not exist or was removed."</p>
                    <A href=routes::PARTS class="button primary">"Back to Parts"</A>
                </div>
            </main>
        }
        .into_view(),
    }
}

#[component]
fn PartDetails(part: Part) -> impl IntoView {
    let store = use_store();
    let navigator = Navigator::new();
    let id = store_value(part.id.clone());
    let saved = create_memo(move |_| id.with_value(|id| store.is_saved(id)));
    let max_quantity = part.max_order_quantity.max(1);
    let price = part.price;

    let (selected_image, set_selected_image) = create_signal(0usize);
    let (quantity, set_quantity) = create_signal(1u32);
    let (tab, set_tab) = create_signal(DetailTab::Description);

    let images = store_value(part.images.clone());
    let clamp = store_value(part.clone());
    let step = move |delta: i64| {
        let next = (i64::from(quantity.get_untracked()) + delta).max(0) as u32;
        set_quantity.set(clamp.with_value(|part| part.clamp_quantity(next)));
    };

    let add_to_cart = move |_: ev::MouseEvent| {
        id.with_value(|id| match store.add_to_cart(id, quantity.get_untracked()) {
            Ok(()) => navigator.go(routes::CART),
            Err(err) => error!("[CART] {}", err),
        });
    };

    let stock_label = if part.in_stock {
        format!("In Stock ({} available)", part.stock_count)
    } else {
        "Out of Stock".to_string()
    };

    view! {
        <main class="page part-details">
            <button class="button ghost back-button" on:click=move |_| navigator.back()>
                "← Back to results"
            </button>

            <div class="details-layout">
                <section class="gallery">
                    <div class="gallery-main">
                        <img
                            class="gallery-image"
                            alt=part.name.clone()
                            src=move || images.with_value(|images| {
                                images
                                    .get(selected_image.get())
                                    .cloned()
                                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
                            })
                        />
                    </div>
                    <div class="gallery-thumbs">
                        {part
                            .images
                            .iter()
                            .enumerate()
                            .map(|(index, src)| view! {
                                <button
                                    class="thumb"
                                    class:selected=move || selected_image.get() == index
                                    on:click=move |_| set_selected_image.set(index)
                                >
                                    <img src=src.clone() alt=format!("View {}", index + 1)/>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="details-info">
                    <div class="product-brand">
                        <img src=brand_logo(&part.brand) alt=format!("{} logo", part.brand) class="brand-logo"/>
                        <span>{part.brand.clone()}</span>
                        {part.fit_verified.then(|| view! { <span class="badge fit-verified">"✓ Fit Verified"</span> })}
                    </div>
                    <h1 class="details-name">{part.name.clone()}</h1>
                    <p class="muted part-number">{format!("Part #: {}", part.part_number)}</p>
                    <StarRating rating=part.rating review_count=part.review_count/>

                    <div class="compatibility-list">
                        <h4>"Compatible with:"</h4>
                        <ul>
                            {part.compatibility.iter().map(|fit| view! { <li>{fit.clone()}</li> }).collect_view()}
                        </ul>
                    </div>

                    <div class="price-row large">
                        <span class="price">{part.price.to_string()}</span>
                        {part.original_price.map(|original| view! { <span class="original-price">{original.to_string()}</span> })}
                        {part.savings().map(|saved| view! { <span class="badge sale">{format!("Save {saved}")}</span> })}
                    </div>

                    <div class="stock-row">
                        <span class="badge" class:in-stock=part.in_stock class:backorder=!part.in_stock>
                            {stock_label}
                        </span>
                        <span class="muted eta">{format!("🚚 {}", part.eta)}</span>
                    </div>

                    <div class="quantity-row">
                        <span>"Quantity:"</span>
                        <div class="stepper">
                            <button
                                class="stepper-button decrease"
                                disabled=move || quantity.get() <= 1
                                on:click=move |_| step(-1)
                            >
                                "−"
                            </button>
                            <span class="stepper-value">{quantity}</span>
                            <button
                                class="stepper-button increase"
                                disabled=move || quantity.get() >= max_quantity
                                on:click=move |_| step(1)
                            >
                                "+"
                            </button>
                        </div>
                        <span class="muted">{format!("Max {max_quantity} per order")}</span>
                    </div>

                    <div class="action-row">
                        <button class="button primary add-to-cart" disabled=!part.in_stock on:click=add_to_cart>
                            {move || format!("Add to Cart - {}", price * quantity.get())}
                        </button>
                        <button class="button outline" on:click=move |_| navigator.go(routes::CHAT)>
                            "Ask Expert"
                        </button>
                        <button
                            class="icon-button wishlist-toggle"
                            class:saved=move || saved.get()
                            on:click=move |_| {
                                id.with_value(|id| store.toggle_saved(id));
                            }
                        >
                            {move || if saved.get() { "♥" } else { "♡" }}
                        </button>
                    </div>

                    <p class="warranty">{format!("🛡 {}", part.warranty)}</p>
                </section>
            </div>

            <section class="card details-tabs">
                <div class="tab-list">
                    {DetailTab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                class="tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <DetailTabBody part=part.clone() tab=tab/>
            </section>

            <ReviewSection part_id=part.id.clone()/>
        </main>
    }
}

#[component]
fn DetailTabBody(part: Part, tab: ReadSignal<DetailTab>) -> impl IntoView {
    let part = store_value(part);
    move || {
        part.with_value(|part| match tab.get() {
            DetailTab::Description => view! {
                <div class="tab-panel">
                    <p>{part.description.clone()}</p>
                    <h4>"Key Features"</h4>
                    <ul class="feature-list">
                        {part.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                    </ul>
                </div>
            }
            .into_view(),
            DetailTab::Specifications => view! {
                <div class="tab-panel">
                    <dl class="spec-table">
                        {part
                            .specifications
                            .iter()
                            .map(|(key, value)| view! {
                                <div class="spec-row">
                                    <dt>{key.clone()}</dt>
                                    <dd>{value.clone()}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
            }
            .into_view(),
            DetailTab::Compatibility => view! {
                <div class="tab-panel">
                    <ul class="compatibility-full">
                        {part
                            .compatibility
                            .iter()
                            .map(|fit| view! { <li>{format!("✓ {fit}")}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
            .into_view(),
        })
    }
}

#[component]
fn ReviewSection(part_id: String) -> impl IntoView {
    let reviews = create_rw_signal(fixtures::reviews_for(&part_id));
    let votes = create_rw_signal(HelpfulVotes::default());

    let average = create_memo(move |_| reviews.with(|r| average_rating(r)));
    let distribution = create_memo(move |_| reviews.with(|r| rating_distribution(r)));

    let vote = move |review_id: &str| {
        let mut counted = false;
        votes.update(|votes| reviews.update(|reviews| counted = votes.vote(reviews, review_id)));
        if counted {
            log!("[REVIEW] helpful vote on {}", review_id);
        }
    };

    view! {
        <section class="card reviews">
            <h2>"Customer Reviews"</h2>
            <Show
                when=move || reviews.with(|r| !r.is_empty())
                fallback=|| view! { <p class="muted">"No reviews yet."</p> }
            >
                <div class="review-summary">
                    <div class="review-average">
                        <span class="average-value">
                            {move || average.get().map(|a| format!("{a:.1}")).unwrap_or_default()}
                        </span>
                        {move || average.get().map(|a| view! { <StarRating rating=a/> })}
                        <span class="muted">
                            {move || format!("Based on {} reviews", reviews.with(Vec::len))}
                        </span>
                    </div>
                    <div class="rating-distribution">
                        {move || {
                            distribution
                                .get()
                                .into_iter()
                                .map(|bucket| view! {
                                    <div class="distribution-row">
                                        <span>{format!("{}★", bucket.stars)}</span>
                                        <div class="bar">
                                            <div class="bar-fill" style=format!("width: {}%", bucket.percentage)></div>
                                        </div>
                                        <span class="muted">{format!("{}%", bucket.percentage)}</span>
                                    </div>
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
                <For
                    each=move || reviews.get()
                    key=|review| (review.id.clone(), review.helpful)
                    children=move |review: Review| {
                        let review_id = store_value(review.id.clone());
                        let voted = move || review_id.with_value(|id| votes.with(|v| v.has_voted(id)));
                        view! {
                            <article class="review">
                                <div class="review-header">
                                    <span class="review-author">{review.author.clone()}</span>
                                    {review.verified.then(|| view! { <span class="badge verified">"Verified Purchase"</span> })}
                                    <span class="muted">{long_date(review.date)}</span>
                                </div>
                                <StarRating rating=f32::from(review.rating)/>
                                <h4>{review.title.clone()}</h4>
                                <p>{review.content.clone()}</p>
                                <div class="review-images">
                                    {review
                                        .images
                                        .iter()
                                        .map(|src| view! { <img src=src.clone() alt="Review photo" class="review-image"/> })
                                        .collect_view()}
                                </div>
                                <button
                                    class="button ghost helpful"
                                    disabled=voted
                                    on:click=move |_| vote(&review_id.get_value())
                                >
                                    {format!("👍 Helpful ({})", review.helpful)}
                                </button>
                            </article>
                        }
                    }
                />
            </Show>
        </section>
    }
}
