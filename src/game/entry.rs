use super::{CODE_LEN, GameConfig, Phase, SlotEdit, Slots};

/// the code-entry state machine: team name, the five digit slots and the
/// current phase, with every transition a synchronous method call
///
/// Focus movement and the active-digit highlight are deliberately not in
/// here; callers react to the returned [`SlotEdit`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeEntry {
    config: GameConfig,
    team_name: String,
    slots: Slots,
    phase: Phase,
}

impl CodeEntry {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            team_name: String::new(),
            slots: Slots::default(),
            phase: Phase::Input,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.team_name = name.into();
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// submission is gated on a named team and a complete code
    pub fn can_submit(&self) -> bool {
        !self.team_name.is_empty() && self.is_full() && self.phase == Phase::Input
    }

    /// direct edit of one slot; `value` is the raw field content, so `""`
    /// clears the slot and anything but a single decimal digit is rejected
    pub fn set_slot(&mut self, index: usize, value: &str) -> SlotEdit {
        let Some(slot) = self.slots.get_mut(index) else {
            return SlotEdit::Rejected;
        };

        if value.is_empty() {
            *slot = None;
            return SlotEdit::Cleared;
        }

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) if digit.is_ascii_digit() => {
                *slot = Some(digit);
                SlotEdit::Stored {
                    index,
                    advance: (index + 1 < CODE_LEN).then_some(index + 1),
                }
            }
            // multi-char paste or non-digit
            _ => SlotEdit::Rejected,
        }
    }

    /// virtual keypad tap: the digit goes into the first empty slot;
    /// rejected when the code is already complete
    pub fn keypad_tap(&mut self, digit: char) -> SlotEdit {
        if !digit.is_ascii_digit() {
            return SlotEdit::Rejected;
        }
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(digit);
                SlotEdit::Stored {
                    index,
                    advance: (index + 1 < CODE_LEN).then_some(index + 1),
                }
            }
            None => SlotEdit::Rejected,
        }
    }

    /// empties the rightmost filled slot, reporting which one it was
    pub fn clear_last(&mut self) -> Option<usize> {
        let last_filled = self.slots.iter().rposition(Option::is_some)?;
        self.slots[last_filled] = None;
        Some(last_filled)
    }

    /// compares the entered code against the target; does nothing while the
    /// submit gate ([`Self::can_submit`]) isn't open
    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }
        let entered: String = self.slots.iter().flatten().collect();
        self.phase = if entered == self.config.target_code {
            Phase::Success(self.team_name.clone())
        } else {
            Phase::Failure
        };
    }

    /// play again after a win: everything back to square one
    pub fn reset(&mut self) {
        self.team_name.clear();
        self.slots = Slots::default();
        self.phase = Phase::Input;
    }

    /// another attempt after a wrong code: only the slots are cleared, the
    /// team keeps its name
    pub fn retry(&mut self) {
        self.slots = Slots::default();
        self.phase = Phase::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CodeEntry {
        CodeEntry::new(GameConfig::new("Vetta", "01964"))
    }

    fn named_entry() -> CodeEntry {
        let mut entry = entry();
        entry.set_team_name("Chingam");
        entry
    }

    fn tap_all(entry: &mut CodeEntry, digits: &str) {
        for digit in digits.chars() {
            entry.keypad_tap(digit);
        }
    }

    #[test]
    fn starts_in_input_with_everything_empty() {
        let entry = entry();
        assert_eq!(*entry.phase(), Phase::Input);
        assert!(entry.team_name().is_empty());
        assert!(entry.is_empty());
        assert!(!entry.can_submit());
    }

    #[test]
    fn set_slot_stores_digit_and_advances() {
        let mut entry = entry();
        assert_eq!(
            entry.set_slot(0, "7"),
            SlotEdit::Stored {
                index: 0,
                advance: Some(1)
            }
        );
        assert_eq!(entry.slot(0), Some('7'));
    }

    /// the last slot has nowhere to advance to
    #[test]
    fn set_slot_on_last_slot_does_not_advance() {
        let mut entry = entry();
        assert_eq!(
            entry.set_slot(4, "3"),
            SlotEdit::Stored {
                index: 4,
                advance: None
            }
        );
    }

    #[test]
    fn set_slot_rejects_non_digits_and_pastes() {
        let mut entry = entry();
        for bad in ["a", "!", "12", "99", " 1", "٣"] {
            assert_eq!(entry.set_slot(0, bad), SlotEdit::Rejected, "input: {bad:?}");
            assert_eq!(entry.slot(0), None);
        }
    }

    #[test]
    fn set_slot_rejects_out_of_range_index() {
        let mut entry = entry();
        assert_eq!(entry.set_slot(CODE_LEN, "1"), SlotEdit::Rejected);
    }

    #[test]
    fn set_slot_with_empty_value_clears() {
        let mut entry = entry();
        entry.set_slot(2, "9");
        assert_eq!(entry.set_slot(2, ""), SlotEdit::Cleared);
        assert_eq!(entry.slot(2), None);
    }

    #[test]
    fn keypad_fills_left_to_right() {
        let mut entry = entry();
        tap_all(&mut entry, "019");
        assert_eq!(entry.slot(0), Some('0'));
        assert_eq!(entry.slot(1), Some('1'));
        assert_eq!(entry.slot(2), Some('9'));
        assert_eq!(entry.slot(3), None);
    }

    /// a gap left by a direct edit is the first slot the keypad fills
    #[test]
    fn keypad_targets_first_empty_slot() {
        let mut entry = entry();
        tap_all(&mut entry, "019");
        entry.set_slot(1, "");
        assert_eq!(
            entry.keypad_tap('5'),
            SlotEdit::Stored {
                index: 1,
                advance: Some(2)
            }
        );
    }

    #[test]
    fn keypad_is_a_noop_when_full() {
        let mut entry = entry();
        tap_all(&mut entry, "01964");
        assert!(entry.is_full());
        assert_eq!(entry.keypad_tap('7'), SlotEdit::Rejected);
        assert_eq!(entry.slot(4), Some('4'));
    }

    #[test]
    fn clear_last_empties_exactly_the_rightmost_filled_slot() {
        let mut entry = entry();
        tap_all(&mut entry, "019");
        assert_eq!(entry.clear_last(), Some(2));
        assert_eq!(entry.slot(2), None);
        assert_eq!(entry.slot(1), Some('1'));
    }

    #[test]
    fn clear_last_is_a_noop_when_empty() {
        let mut entry = entry();
        assert_eq!(entry.clear_last(), None);
    }

    #[test]
    fn correct_code_wins() {
        let mut entry = named_entry();
        tap_all(&mut entry, "01964");
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Success(String::from("Chingam")));
    }

    #[test]
    fn wrong_code_loses() {
        let mut entry = named_entry();
        tap_all(&mut entry, "11111");
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Failure);
    }

    /// same digits, different order must not win
    #[test]
    fn comparison_is_order_sensitive() {
        let mut entry = named_entry();
        tap_all(&mut entry, "46910");
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Failure);
    }

    #[test]
    fn submit_without_team_name_is_gated_off() {
        let mut entry = entry();
        tap_all(&mut entry, "01964");
        assert!(!entry.can_submit());
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Input);
    }

    #[test]
    fn submit_with_incomplete_code_is_gated_off() {
        let mut entry = named_entry();
        tap_all(&mut entry, "0196");
        assert!(!entry.can_submit());
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Input);
    }

    #[test]
    fn reset_clears_everything_from_any_phase() {
        let mut entry = named_entry();
        tap_all(&mut entry, "01964");
        entry.submit();
        entry.reset();
        assert_eq!(*entry.phase(), Phase::Input);
        assert!(entry.team_name().is_empty());
        assert!(entry.is_empty());
    }

    #[test]
    fn retry_clears_slots_but_keeps_the_team() {
        let mut entry = named_entry();
        tap_all(&mut entry, "11111");
        entry.submit();
        entry.retry();
        assert_eq!(*entry.phase(), Phase::Input);
        assert!(entry.is_empty());
        assert_eq!(entry.team_name(), "Chingam");
    }

    /// the game is replayable indefinitely: failure, retry, then win
    #[test]
    fn failure_then_retry_then_success() {
        let mut entry = named_entry();
        tap_all(&mut entry, "11111");
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Failure);
        entry.retry();
        tap_all(&mut entry, "01964");
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Success(String::from("Chingam")));
    }

    #[test]
    fn target_code_is_injected_config() {
        let mut entry = CodeEntry::new(GameConfig::new("Vetta", "90210"));
        entry.set_team_name("Thiruvonam");
        tap_all(&mut entry, "90210");
        entry.submit();
        assert_eq!(*entry.phase(), Phase::Success(String::from("Thiruvonam")));
    }
}
