//! Overlay-aware key event translation.
//!
//! The bindings mirror the labeling rhythm: digits label, Backspace clears,
//! arrows and Enter navigate. While a prompt owns the keyboard every global
//! binding is suppressed and keystrokes edit the buffer instead.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::actions::{Action, PromptType};
use crate::model::ui_state::UIOverlay;

/// Translate a key event into an action under the given overlay state.
/// Returns `None` for unbound keys.
pub fn map_key(key: KeyEvent, overlay: UIOverlay) -> Option<Action> {
    // Ctrl-C quits from anywhere, prompts included.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match overlay {
        UIOverlay::Prompt => map_prompt_key(key),
        UIOverlay::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseOverlay),
            _ => None,
        },
        UIOverlay::None => map_browse_key(key),
    }
}

fn map_browse_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),

        // Labeling
        (KeyCode::Char('1'), _) => Some(Action::ApplyPrimary),
        (KeyCode::Char('2'), _) => Some(Action::ApplySecondary),
        (KeyCode::Char('3'), _) => Some(Action::ApplyCustom),
        (KeyCode::Backspace, _) => Some(Action::ClearLabel),

        // Navigation
        (KeyCode::Right | KeyCode::Enter, _) => Some(Action::MoveNext),
        (KeyCode::Left, _) => Some(Action::MovePrev),
        (KeyCode::Char('u'), _) => Some(Action::JumpToUnlabeled),

        // Dataset controls
        (KeyCode::Char('t'), _) => Some(Action::ToggleHeader),
        (KeyCode::Char(']'), _) => Some(Action::NextColumn),
        (KeyCode::Char('['), _) => Some(Action::PrevColumn),

        // Prompts and files
        (KeyCode::Char('i'), _) => Some(Action::ShowPrompt(PromptType::Label)),
        (KeyCode::Char('o'), _) => Some(Action::ShowPrompt(PromptType::OpenPath)),
        (KeyCode::Char('e'), _) => Some(Action::Export),

        // UI controls
        (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => Some(Action::ToggleHelp),
        (KeyCode::Esc, _) => Some(Action::CloseOverlay),

        _ => None,
    }
}

fn map_prompt_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CancelPrompt),
        KeyCode::Enter => Some(Action::SubmitPrompt),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_digits_label() {
        assert_eq!(
            map_key(key('1'), UIOverlay::None),
            Some(Action::ApplyPrimary)
        );
        assert_eq!(
            map_key(key('2'), UIOverlay::None),
            Some(Action::ApplySecondary)
        );
        assert_eq!(map_key(key('3'), UIOverlay::None), Some(Action::ApplyCustom));
    }

    #[test]
    fn test_browse_navigation_keys() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);

        assert_eq!(map_key(enter, UIOverlay::None), Some(Action::MoveNext));
        assert_eq!(map_key(right, UIOverlay::None), Some(Action::MoveNext));
        assert_eq!(map_key(left, UIOverlay::None), Some(Action::MovePrev));
    }

    #[test]
    fn test_prompt_suppresses_global_bindings() {
        // a digit edits the buffer instead of labeling
        assert_eq!(
            map_key(key('1'), UIOverlay::Prompt),
            Some(Action::InputChar('1'))
        );
        assert_eq!(
            map_key(key('q'), UIOverlay::Prompt),
            Some(Action::InputChar('q'))
        );

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(
            map_key(backspace, UIOverlay::Prompt),
            Some(Action::InputBackspace)
        );

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(enter, UIOverlay::Prompt), Some(Action::SubmitPrompt));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_overlay() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, UIOverlay::None), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, UIOverlay::Prompt), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, UIOverlay::Help), Some(Action::Quit));
    }

    #[test]
    fn test_help_overlay_only_closes() {
        assert_eq!(map_key(key('x'), UIOverlay::Help), None);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(esc, UIOverlay::Help), Some(Action::CloseOverlay));
    }
}
