use dioxus::prelude::*;

use crate::{app::actions, game::CodeEntry};

const KEY_ROWS: [[char; 3]; 3] = [['1', '2', '3'], ['4', '5', '6'], ['7', '8', '9']];

/// on-screen 0-9 keypad with a clear-last key; digit keys go dark once the
/// code is complete, the clear key while there is nothing to clear
#[component]
pub fn Keypad(game: Signal<CodeEntry>, active: Signal<Option<usize>>) -> Element {
    let full = game.read().is_full();
    let empty = game.read().is_empty();

    rsx! {
        div { class: "keypad",
            for row in KEY_ROWS {
                div { class: "keypad-row",
                    for digit in row {
                        button {
                            class: "keypad-key",
                            cursor: "pointer",
                            disabled: full,
                            onclick: move |_| actions::handle_keypad_tap(game, active, digit),
                            "{digit}"
                        }
                    }
                }
            }
            div { class: "keypad-row",
                button {
                    class: "keypad-key keypad-clear",
                    cursor: "pointer",
                    disabled: empty,
                    onclick: move |_| actions::handle_clear_last(game),
                    "⌫"
                }
                button {
                    class: "keypad-key",
                    cursor: "pointer",
                    disabled: full,
                    onclick: move |_| actions::handle_keypad_tap(game, active, '0'),
                    "0"
                }
            }
        }
    }
}
