/// number of digit slots in the treasure code
pub const CODE_LEN: usize = 5;

/// one `Option` per slot, `None` = still empty
pub type Slots = [Option<char>; CODE_LEN];

/// what the game view is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Input,
    /// carries the winning team's name for the success panel
    Success(String),
    Failure,
}

/// outcome of a single slot edit, consumed by the view layer for its
/// focus/highlight side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEdit {
    /// a digit landed in `index`; `advance` names the slot that should take focus next
    Stored { index: usize, advance: Option<usize> },
    /// the slot was emptied
    Cleared,
    /// not a single decimal digit, or no slot available; state unchanged
    Rejected,
}
