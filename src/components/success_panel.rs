use dioxus::prelude::*;

use crate::{app::actions, game::CodeEntry};

#[component]
pub fn SuccessPanel(
    game: Signal<CodeEntry>,
    active: Signal<Option<usize>>,
    team: String,
) -> Element {
    rsx! {
        div { class: "panel",
            div { class: "emoji-big", "🏆" }
            h2 { class: "panel-title success-title", "Team {team} Won the Treasure Hunt!" }
            p { class: "panel-text",
                "Congratulations! Team {team} discovered the hidden Onam treasure. "
                "May this festival bring you prosperity and joy! 🌺"
            }
            div { class: "emoji-line", "🎊 💰 🌸 🎉 ✨" }
            button {
                class: "action-button success-button",
                cursor: "pointer",
                onclick: move |_| actions::handle_play_again(game, active),
                "Play Again 🔄"
            }
        }
    }
}
