pub mod code_slots;
pub mod entry_panel;
pub mod failure_panel;
pub mod keypad;
pub mod success_panel;
