use crate::store::use_theme;
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="icon-button theme-toggle"
            title="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.dark.get() { "☀" } else { "🌙" }}
        </button>
    }
}
