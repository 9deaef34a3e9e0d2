use std::time::Duration;

use dioxus::prelude::*;

/// fades the active-digit highlight shortly after each keystroke
///
/// Fire-and-forget: a later keystroke just overwrites the signal, so a stale
/// timer firing only ever clears an already-faded highlight.
pub fn use_indicator_decay(mut active: Signal<Option<usize>>) {
    use_effect(move || {
        if active.read().is_some() {
            spawn(async move {
                gloo_timers::future::sleep(Duration::from_millis(600)).await;
                active.set(None);
            });
        }
    });
}
