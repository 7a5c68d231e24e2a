use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Grid/list switch used by the browse pages.
#[component]
pub fn ViewToggle(mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <div class="view-toggle">
            <button
                class="icon-button grid-view"
                title="Grid view"
                class:active=move || mode.get() == ViewMode::Grid
                on:click=move |_| mode.set(ViewMode::Grid)
            >
                "▦"
            </button>
            <button
                class="icon-button list-view"
                title="List view"
                class:active=move || mode.get() == ViewMode::List
                on:click=move |_| mode.set(ViewMode::List)
            >
                "☰"
            </button>
        </div>
    }
}
