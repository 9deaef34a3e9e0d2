use dioxus::prelude::*;

pub fn slot_dom_id(index: usize) -> String {
    format!("code-{index}")
}

/// move keyboard focus to the given digit field; focus is a view concern, the
/// state machine only reports where it should go
pub fn focus_slot(index: usize) {
    let id = slot_dom_id(index);
    let _ = document::eval(&format!("document.getElementById('{id}')?.focus();"));
}
