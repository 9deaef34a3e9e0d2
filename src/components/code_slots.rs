use dioxus::prelude::*;

use crate::{
    app::{actions, utils::slot_dom_id},
    game::{CODE_LEN, CodeEntry},
};

/// the five single-character digit fields
#[component]
pub fn CodeSlots(game: Signal<CodeEntry>, active: Signal<Option<usize>>) -> Element {
    rsx! {
        div { class: "slot-row",
            for index in 0..CODE_LEN {
                input {
                    id: slot_dom_id(index),
                    class: if *active.read() == Some(index) { "slot-input slot-active" } else { "slot-input" },
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: "1",
                    cursor: "text",
                    value: game.read().slot(index).map(String::from).unwrap_or_default(),
                    oninput: move |evt| actions::handle_slot_input(game, active, index, evt.value()),
                }
            }
        }
        p { class: "slot-hint", "Enter the 5-digit code to unlock the treasure" }
    }
}
