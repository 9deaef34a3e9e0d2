use dioxus::prelude::*;

use crate::{app::actions, game::CodeEntry};

#[component]
pub fn FailurePanel(game: Signal<CodeEntry>, active: Signal<Option<usize>>) -> Element {
    rsx! {
        div { class: "panel",
            div { class: "emoji-big", "💫" }
            h2 { class: "panel-title failure-title", "You Lost This Round" }
            p { class: "panel-text",
                "The treasure remains hidden. Don't give up! "
                "Try again and unlock the Onam festivities."
            }
            div { class: "emoji-line", "🌺 😔 🌺" }
            button {
                class: "action-button failure-button",
                cursor: "pointer",
                onclick: move |_| actions::handle_try_again(game, active),
                "Try Again 🔍"
            }
        }
    }
}
