use crate::fixtures;
use crate::models::profile::{
    Garage, Notification, NotificationPrefs, PersonalInfo, UserProfile, VehicleDraft,
};
use crate::models::wishlist::SavedPart;
use crate::routes::{self, order_path, part_path, parts_search_path, Navigator};
use crate::store::{use_config, use_store, use_toasts, Store};
use crate::utils::format::{initials, long_date};
use chrono::{Datelike, Utc};
use leptos::logging::{error, log};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Saved,
    Garage,
    Orders,
    Addresses,
    Settings,
}

impl ProfileTab {
    const ALL: [ProfileTab; 5] = [
        ProfileTab::Saved,
        ProfileTab::Garage,
        ProfileTab::Orders,
        ProfileTab::Addresses,
        ProfileTab::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            ProfileTab::Saved => "Saved Parts",
            ProfileTab::Garage => "My Garage",
            ProfileTab::Orders => "Orders",
            ProfileTab::Addresses => "Addresses",
            ProfileTab::Settings => "Settings",
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = create_rw_signal(fixtures::user_profile());
    let (tab, set_tab) = create_signal(ProfileTab::Saved);

    view! {
        <main class="page profile-page">
            <div class="profile-layout">
                <aside class="card profile-sidebar">
                    <div class="avatar large">
                        <span class="avatar-initials">{move || profile.with(|p| initials(&p.name))}</span>
                    </div>
                    <h2 class="profile-name">{move || profile.with(|p| p.name.clone())}</h2>
                    <p class="muted">{move || profile.with(|p| p.email.clone())}</p>
                    <p class="muted">
                        {move || profile.with(|p| format!("Member since {}", p.member_since.year()))}
                    </p>
                    <dl class="profile-stats">
                        <div>
                            <dt>"Total Orders"</dt>
                            <dd>{move || profile.with(|p| p.total_orders)}</dd>
                        </div>
                        <div>
                            <dt>"Total Saved"</dt>
                            <dd>{move || profile.with(|p| p.total_saved.to_string())}</dd>
                        </div>
                    </dl>
                </aside>

                <section class="profile-main">
                    <div class="tab-list">
                        {ProfileTab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button class="tab" class:active=move || tab.get() == t on:click=move |_| set_tab.set(t)>
                                    {t.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    {move || match tab.get() {
                        ProfileTab::Saved => view! { <SavedPartsTab/> }.into_view(),
                        ProfileTab::Garage => view! { <GarageTab/> }.into_view(),
                        ProfileTab::Orders => view! { <OrdersTab/> }.into_view(),
                        ProfileTab::Addresses => view! { <AddressesTab profile=profile/> }.into_view(),
                        ProfileTab::Settings => view! { <SettingsTab profile=profile/> }.into_view(),
                    }}
                </section>
            </div>
        </main>
    }
}

#[component]
fn SavedPartsTab() -> impl IntoView {
    let store = use_store();
    let navigator = Navigator::new();

    view! {
        <div class="tab-panel saved-parts">
            <div class="split">
                <h3>{move || format!("Saved Parts ({})", store.wishlist_count())}</h3>
                <Show when=move || { store.wishlist_count() > 0 }>
                    <button
                        class="button ghost clear-saved"
                        on:click=move |_| {
                            store.wishlist.update(|w| w.clear());
                            log!("[WISHLIST] cleared");
                        }
                    >
                        "Clear All"
                    </button>
                </Show>
            </div>
            <Show
                when=move || { store.wishlist_count() > 0 }
                fallback=move || view! {
                    <div class="empty-state">
                        <p class="muted">"No saved parts yet."</p>
                        <button class="button primary" on:click=move |_| navigator.go(routes::PARTS)>
                            "Browse Parts"
                        </button>
                    </div>
                }
            >
                <div class="saved-grid">
                    <For
                        each=move || store.wishlist.with(|w| w.entries().to_vec())
                        key=|entry| entry.part_id.clone()
                        children=move |entry| view! { <SavedPartCard entry=entry store=store navigator=navigator/> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SavedPartCard(entry: SavedPart, store: Store, navigator: Navigator) -> impl IntoView {
    let Ok(part) = store.part(&entry.part_id) else {
        log!("[WISHLIST] saved part {} is no longer listed", entry.part_id);
        return ().into_view();
    };
    let id = store_value(part.id.clone());
    let add_to_cart = move |_: ev::MouseEvent| match store.add_to_cart(&id.get_value(), 1) {
        Ok(()) => navigator.go(routes::CART),
        Err(err) => error!("[CART] {}", err),
    };
    let remove = move |_: ev::MouseEvent| {
        let id = id.get_value();
        store.wishlist.update(|w| {
            w.remove(&id);
        });
    };

    view! {
        <article class="card saved-card">
            <img
                src=part.image().to_string()
                alt=part.name.clone()
                class="product-image"
                on:click=move |_| navigator.go(&part_path(&id.get_value()))
            />
            <h4>{part.name.clone()}</h4>
            <p class="muted">{part.brand.clone()}</p>
            <div class="price-row">
                <span class="price">{part.price.to_string()}</span>
                {part.original_price.map(|original| view! { <span class="original-price">{original.to_string()}</span> })}
            </div>
            {if part.in_stock {
                view! { <span class="badge in-stock">"In Stock"</span> }
            } else {
                view! { <span class="badge backorder">"Out of Stock"</span> }
            }}
            <p class="muted saved-date">{format!("Saved {}", long_date(entry.saved_at.date_naive()))}</p>
            <div class="saved-actions">
                <button class="button primary" disabled=!part.in_stock on:click=add_to_cart>"Add to Cart"</button>
                <button class="button ghost remove-saved" on:click=remove>"Remove"</button>
            </div>
        </article>
    }
    .into_view()
}

#[component]
fn GarageTab() -> impl IntoView {
    let navigator = Navigator::new();
    let garage = create_rw_signal(Garage::new(fixtures::vehicles()));
    let (adding, set_adding) = create_signal(false);

    view! {
        <div class="tab-panel garage">
            <div class="split">
                <h3>"My Garage"</h3>
                <button class="button outline add-vehicle" on:click=move |_| set_adding.update(|open| *open = !*open)>
                    {move || if adding.get() { "Cancel" } else { "+ Add Vehicle" }}
                </button>
            </div>
            <Show when=move || adding.get()>
                <AddVehicleForm garage=garage on_added=move || set_adding.set(false)/>
            </Show>
            <Show
                when=move || garage.with(|g| !g.vehicles().is_empty())
                fallback=|| view! { <p class="muted empty-garage">"No vehicles saved yet."</p> }
            >
                <For
                    each=move || garage.with(|g| g.vehicles().to_vec())
                    key=|v| (v.id.clone(), v.is_default)
                    children=move |vehicle| {
                        let id = store_value(vehicle.id.clone());
                        let terms = vehicle.search_terms();
                        view! {
                            <article class="card vehicle">
                                <div class="split">
                                    <h4>{vehicle.title()}</h4>
                                    {vehicle.is_default.then(|| view! { <span class="badge default">"Default"</span> })}
                                </div>
                                {vehicle.nickname.clone().map(|n| view! { <p class="muted nickname">{n}</p> })}
                                {vehicle.vin.clone().map(|vin| view! { <p class="muted vin">{format!("VIN: {vin}")}</p> })}
                                <div class="vehicle-actions">
                                    <button class="button primary" on:click=move |_| navigator.go(&parts_search_path(&terms))>
                                        "Find Parts"
                                    </button>
                                    {(!vehicle.is_default).then(|| view! {
                                        <button
                                            class="button outline set-default"
                                            on:click=move |_| {
                                                let id = id.get_value();
                                                garage.update(|g| {
                                                    g.set_default(&id);
                                                });
                                            }
                                        >
                                            "Set Default"
                                        </button>
                                    })}
                                    <button
                                        class="button ghost remove-vehicle"
                                        on:click=move |_| {
                                            let id = id.get_value();
                                            garage.update(|g| {
                                                g.remove(&id);
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn AddVehicleForm<F>(garage: RwSignal<Garage>, on_added: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let draft = create_rw_signal(VehicleDraft::default());
    let (form_error, set_form_error) = create_signal(None::<String>);
    let max_year = Utc::now().year() + 1;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(|d| d.validate(Utc::now().date_naive())) {
            Ok(vehicle) => {
                log!("[GARAGE] added {}", vehicle.title());
                garage.update(|g| g.add(vehicle));
                draft.set(VehicleDraft::default());
                set_form_error.set(None);
                on_added();
            }
            Err(err) => set_form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="card vehicle-form" on:submit=on_submit>
            <div class="form-grid">
                <input
                    type="number"
                    class="year-input"
                    placeholder=format!("Year (1950-{max_year})")
                    prop:value=move || draft.with(|d| d.year.clone())
                    on:input=move |ev| draft.update(|d| d.year = event_target_value(&ev))
                />
                <input
                    type="text"
                    class="make-input"
                    placeholder="Make"
                    prop:value=move || draft.with(|d| d.make.clone())
                    on:input=move |ev| draft.update(|d| d.make = event_target_value(&ev))
                />
                <input
                    type="text"
                    class="model-input"
                    placeholder="Model"
                    prop:value=move || draft.with(|d| d.model.clone())
                    on:input=move |ev| draft.update(|d| d.model = event_target_value(&ev))
                />
                <input
                    type="text"
                    class="vin-input"
                    placeholder="VIN (optional, 17 characters)"
                    maxlength="17"
                    prop:value=move || draft.with(|d| d.vin.clone())
                    on:input=move |ev| draft.update(|d| d.vin = event_target_value(&ev))
                />
                <input
                    type="text"
                    class="nickname-input"
                    placeholder="Nickname (optional)"
                    prop:value=move || draft.with(|d| d.nickname.clone())
                    on:input=move |ev| draft.update(|d| d.nickname = event_target_value(&ev))
                />
            </div>
            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="button primary">"Save Vehicle"</button>
        </form>
    }
}

#[component]
fn OrdersTab() -> impl IntoView {
    let navigator = Navigator::new();
    view! {
        <div class="tab-panel profile-orders">
            <h3>"Recent Orders"</h3>
            {fixtures::orders()
                .into_iter()
                .map(|order| {
                    let path = order_path(&order.number);
                    view! {
                        <article class="card order-row">
                            <div>
                                <h4>{order.number.clone()}</h4>
                                <p class="muted">
                                    {format!(
                                        "{} · {} items",
                                        long_date(order.placed_at.date_naive()),
                                        order.lines.iter().map(|l| l.quantity).sum::<u32>(),
                                    )}
                                </p>
                            </div>
                            <span class="badge status">{order.status.label()}</span>
                            <span class="order-total">{order.total().to_string()}</span>
                            <button class="button outline" on:click=move |_| navigator.go(&path)>
                                "View Details"
                            </button>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AddressesTab(profile: RwSignal<UserProfile>) -> impl IntoView {
    let address = profile.with_untracked(|p| p.address.clone());
    view! {
        <div class="tab-panel addresses">
            <h3>"Shipping Addresses"</h3>
            <article class="card address">
                <span class="badge default">"Default"</span>
                <p>{address.name.clone()}</p>
                <p>{address.street.clone()}</p>
                <p>{address.city_line()}</p>
            </article>
        </div>
    }
}

#[component]
fn SettingsTab(profile: RwSignal<UserProfile>) -> impl IntoView {
    let toasts = use_toasts();
    let toast_duration = use_config().toast_short;
    let info = create_rw_signal(profile.with_untracked(PersonalInfo::from_profile));
    let prefs = create_rw_signal(NotificationPrefs::default());
    let (form_error, set_form_error) = create_signal(None::<String>);

    let save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match info.with_untracked(PersonalInfo::validate) {
            Ok(()) => {
                info.with_untracked(|info| profile.update(|p| info.apply_to(p)));
                set_form_error.set(None);
                log!("[PROFILE] settings saved");
                toasts.show("Settings saved", "Your profile has been updated.", toast_duration);
            }
            Err(err) => set_form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="tab-panel settings" on:submit=save>
            <h3>"Personal Information"</h3>
            <label>
                "Name"
                <input
                    type="text"
                    class="name-input"
                    prop:value=move || info.with(|i| i.name.clone())
                    on:input=move |ev| info.update(|i| i.name = event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    class="email-input"
                    prop:value=move || info.with(|i| i.email.clone())
                    on:input=move |ev| info.update(|i| i.email = event_target_value(&ev))
                />
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    class="phone-input"
                    prop:value=move || info.with(|i| i.phone.clone())
                    on:input=move |ev| info.update(|i| i.phone = event_target_value(&ev))
                />
            </label>

            <h3>"Notifications"</h3>
            {Notification::ALL
                .into_iter()
                .map(|kind| view! {
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.with(|p| p.enabled(kind))
                            on:change=move |ev| {
                                let on = event_target_checked(&ev);
                                prefs.update(|p| p.set(kind, on));
                                log!("[PROFILE] {} notifications {}", kind.label(), if on { "on" } else { "off" });
                            }
                        />
                        {kind.label()}
                    </label>
                })
                .collect_view()}

            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="button primary save-settings">"Save Changes"</button>
        </form>
    }
}
