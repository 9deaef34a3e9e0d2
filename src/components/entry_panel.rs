use dioxus::prelude::*;

use crate::{
    app::actions,
    components::{code_slots::CodeSlots, keypad::Keypad},
    game::CodeEntry,
};

/// the Input-phase panel: team name, digit slots, keypad, submit
#[component]
pub fn EntryPanel(game: Signal<CodeEntry>, active: Signal<Option<usize>>) -> Element {
    let team = game.read().team_name().to_owned();
    let can_submit = game.read().can_submit();

    rsx! {
        div { class: "panel",
            input {
                class: "team-input",
                r#type: "text",
                placeholder: "Enter your team name",
                cursor: "text",
                value: "{team}",
                oninput: move |evt| game.write().set_team_name(evt.value()),
            }

            CodeSlots { game, active }
            Keypad { game, active }

            button {
                class: "action-button submit-button",
                cursor: "pointer",
                disabled: !can_submit,
                onclick: move |_| actions::handle_submit(game),
                "Break the Code 🔐"
            }
        }
    }
}
