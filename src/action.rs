// Input actions, decoupled from crossterm key events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NavigateUp,
    NavigateDown,
    Select,
    Delete,
    ConfirmYes,
    ConfirmNo,
    /// Esc: closes a pending confirmation, otherwise quits.
    Escape,
    /// Ctrl-C: always quits.
    Interrupt,
    Resize,
    None,
}
