use crate::routes::{parts_search_path, Navigator};
use crate::config::AppConfig;
use crate::store::{use_config, use_toasts, Toasts};
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;

/// Simulated VIN scan: an "activated" toast now, the sample vehicle after
/// the configured delay. Create it in a component body.
#[derive(Clone, Copy)]
pub struct VinScanner {
    config: StoredValue<AppConfig>,
    toasts: Toasts,
}

impl VinScanner {
    pub fn new() -> Self {
        VinScanner {
            config: store_value(use_config()),
            toasts: use_toasts(),
        }
    }

    pub fn scan(self) {
        log!("[VIN] scan started");
        self.config.with_value(|config| {
            self.toasts.show(
                "VIN Scanner Activated",
                "Point your camera at the VIN barcode or dashboard",
                config.toast_short,
            );
            self.toasts.show_after(
                config.vin_scan_delay,
                "VIN Detected!",
                config.vin_detected_message(),
                config.toast_long,
            );
        });
    }
}

impl Default for VinScanner {
    fn default() -> Self {
        VinScanner::new()
    }
}

/// Navigates to the parts listing for a non-blank query.
pub fn submit_search(navigator: Navigator, query: &str) -> bool {
    if query.trim().is_empty() {
        return false;
    }
    navigator.go(&parts_search_path(query));
    true
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let navigator = Navigator::new();
    let vin = VinScanner::new();
    let (query, set_query) = create_signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_search(navigator, &query.get_untracked());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <div class="search-field">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by part name, number, or vehicle..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>
            <button type="button" class="button outline vin-button" on:click=move |_| vin.scan()>
                "Scan VIN"
            </button>
            <button type="submit" class="button primary">
                "Search"
            </button>
        </form>
    }
}
