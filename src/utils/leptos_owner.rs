use futures::channel::oneshot;
use futures::future::{self, Either, FutureExt, Shared};
use gloo_timers::future::sleep;
use leptos::logging::log;
use leptos::*;
use std::time::Duration;

/// Delayed callbacks tied to the component that created them.
///
/// Create one in the component body, where a Leptos owner is current, and
/// call [`Timers::after`] from event handlers. Pending callbacks are dropped
/// when the component unmounts; a callback that still races disposal is run
/// through `try_with_owner` and skipped if the owner is gone.
#[derive(Clone, Copy)]
pub struct Timers {
    label: &'static str,
    owner: Option<Owner>,
    unmounted: StoredValue<Shared<oneshot::Receiver<()>>>,
}

impl Timers {
    pub fn new(label: &'static str) -> Self {
        let owner = Owner::current();
        if owner.is_none() {
            log!("[OWNER] No Leptos owner in context: {}", label);
        }
        let (unmount_tx, unmount_rx) = oneshot::channel::<()>();
        on_cleanup(move || drop(unmount_tx));
        Timers {
            label,
            owner,
            unmounted: store_value(unmount_rx.shared()),
        }
    }

    pub fn after<F>(self, delay: Duration, f: F)
    where
        F: FnOnce() + 'static,
    {
        let label = self.label;
        let (Some(owner), Some(unmounted)) = (self.owner, self.unmounted.try_get_value()) else {
            log!("[TIMER] {}: owner already disposed, not scheduling", label);
            return;
        };
        spawn_local(async move {
            match future::select(sleep(delay), unmounted).await {
                Either::Left(_) => {
                    if try_with_owner(owner, f).is_err() {
                        log!("[TIMER] {}: fired after its owner was disposed", label);
                    }
                }
                Either::Right(_) => log!("[TIMER] {}: cancelled on unmount", label),
            }
        });
    }
}
