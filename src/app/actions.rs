use dioxus::prelude::*;

use crate::{
    app::utils::focus_slot,
    game::{CodeEntry, SlotEdit},
};

/// shared reaction to a stored digit: light the indicator on the slot that
/// took it, then move focus along
fn after_edit(edit: SlotEdit, mut active: Signal<Option<usize>>) {
    if let SlotEdit::Stored { index, advance } = edit {
        active.set(Some(index));
        if let Some(next) = advance {
            focus_slot(next);
        }
    }
}

/// direct keyboard entry into one of the digit fields
pub fn handle_slot_input(
    mut game: Signal<CodeEntry>,
    active: Signal<Option<usize>>,
    index: usize,
    value: String,
) {
    trace!("slot {index} edited");
    let edit = game.write().set_slot(index, &value);
    after_edit(edit, active);
}

/// a tap on the on-screen keypad mirrors physical input: same machine, same
/// follow-up effects
pub fn handle_keypad_tap(mut game: Signal<CodeEntry>, active: Signal<Option<usize>>, digit: char) {
    trace!("keypad tap");
    let edit = game.write().keypad_tap(digit);
    after_edit(edit, active);
}

pub fn handle_clear_last(mut game: Signal<CodeEntry>) {
    if let Some(cleared) = game.write().clear_last() {
        focus_slot(cleared);
    }
}

pub fn handle_submit(mut game: Signal<CodeEntry>) {
    trace!("code submitted");
    game.write().submit();
}

/// "Play Again" after a win
pub fn handle_play_again(mut game: Signal<CodeEntry>, mut active: Signal<Option<usize>>) {
    active.set(None);
    game.write().reset();
}

/// "Try Again" after a wrong code
pub fn handle_try_again(mut game: Signal<CodeEntry>, mut active: Signal<Option<usize>>) {
    active.set(None);
    game.write().retry();
}
