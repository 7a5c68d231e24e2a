use crate::store::use_toasts;
use leptos::*;

/// Renders the active toasts in the corner of the viewport.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="toaster" role="status">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class="toast">
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title}</strong>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| toasts.dismiss(&id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
