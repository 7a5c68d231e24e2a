use leptos::logging::error;
use std::panic;

/// Chains a hook after `console_error_panic_hook` that explains the panics
/// this app is most likely to hit: reactive values touched after their
/// component unmounted.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!("[PANIC] {} at {}", message, location);
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            error!("[PANIC] A signal was used after its component unmounted.");
            error!("[PANIC] Check timers (toasts, VIN scan, mechanic reply) and object URL cleanup.");
        }
    }));
}

pub fn init() {
    leptos::logging::log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
