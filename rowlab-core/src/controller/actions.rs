//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all user inputs the
//! application can respond to. Raw terminal events are translated into these
//! by the keymap; the dispatcher applies them to the owned state.

/// Which input prompt currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Editing the free-text label.
    Label,

    /// Entering the path of a CSV file to load.
    OpenPath,
}

/// Represents a high-level action that the application can perform.
/// This abstracts away raw terminal events into meaningful commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply the free-text label to the current row. No-op while the
    /// free-text buffer is empty.
    ApplyCustom,

    /// Apply the primary canonical label to the current row.
    ApplyPrimary,

    /// Apply the secondary canonical label to the current row.
    ApplySecondary,

    /// Dismiss the active prompt without applying its buffer.
    CancelPrompt,

    /// Reset the current row's label to unset.
    ClearLabel,

    /// Close the active overlay and dismiss any notification.
    CloseOverlay,

    /// Write the annotated dataset next to the source file.
    Export,

    /// Delete the character before the prompt cursor.
    InputBackspace,

    /// Insert a character at the prompt cursor.
    InputChar(char),

    /// Jump to the next unlabeled row, wrapping past the end.
    JumpToUnlabeled,

    /// Advance to the next row.
    MoveNext,

    /// Step back to the previous row.
    MovePrev,

    /// Select the next field as the query column.
    NextColumn,

    /// Select the previous field as the query column.
    PrevColumn,

    /// Quit the application.
    Quit,

    /// A terminal resize event.
    Resize(u16, u16),

    /// Open an input prompt.
    ShowPrompt(PromptType),

    /// Confirm the active prompt with its current buffer.
    SubmitPrompt,

    /// An internal tick event for periodic updates.
    Tick,

    /// Toggle whether raw row 0 is treated as a header.
    ToggleHeader,

    /// Toggle the help overlay visibility.
    ToggleHelp,
}
