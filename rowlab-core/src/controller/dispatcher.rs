//! Applies actions to the owned application state.
//!
//! Every session-affecting arm goes through an `AppState` command method;
//! recoverable failures become notifications and never escape the loop.

use std::path::PathBuf;

use tracing::{trace, warn};

use crate::controller::actions::{Action, PromptType};
use crate::error::AppError;
use crate::model::app_state::AppState;
use crate::model::ui_state::UIOverlay;

/// Apply one action. Returns false when the event loop should stop.
pub async fn dispatch(app: &mut AppState, action: Action) -> bool {
    trace!("Dispatching action: {action:?}");

    match action {
        Action::Quit => return false,

        // Labeling
        Action::ApplyPrimary => app.apply_primary(),
        Action::ApplySecondary => app.apply_secondary(),
        Action::ApplyCustom => app.apply_custom(),
        Action::ClearLabel => app.clear_label(),

        // Navigation
        Action::MoveNext => app.move_next(),
        Action::MovePrev => app.move_prev(),
        Action::JumpToUnlabeled => app.jump_to_unlabeled(),

        // Dataset controls
        Action::ToggleHeader => app.toggle_header(),
        Action::NextColumn => app.next_column(),
        Action::PrevColumn => app.prev_column(),

        // Files
        Action::Export => {
            if let Err(e) = app.export().await {
                report(app, "export", &e);
            }
        }

        // Prompts
        Action::ShowPrompt(prompt) => app.ui.open_prompt(prompt),
        Action::CancelPrompt => app.ui.close_prompt(),
        Action::SubmitPrompt => submit_prompt(app).await,
        Action::InputChar(c) => app.ui.insert_char(c),
        Action::InputBackspace => {
            app.ui.delete_char_before();
        }

        // UI controls
        Action::ToggleHelp => app.ui.toggle_help(),
        Action::CloseOverlay => {
            app.ui.overlay = UIOverlay::None;
            app.ui.prompt = None;
            app.ui.notification = None;
            app.ui.request_redraw();
        }
        Action::Resize(_, _) => app.ui.request_redraw(),
        Action::Tick => {
            app.ui.update_notification();
        }
    }

    true
}

async fn submit_prompt(app: &mut AppState) {
    match app.ui.prompt {
        Some(PromptType::Label) => {
            app.ui.custom_label = app.ui.input.clone();
            app.ui.close_prompt();
            app.apply_custom();
        }
        Some(PromptType::OpenPath) => {
            let path = app.ui.input.trim().to_owned();
            app.ui.close_prompt();
            app.ui.clear_input();
            if path.is_empty() {
                return;
            }
            if let Err(e) = app.open_file(PathBuf::from(path)).await {
                report(app, "load file", &e);
            }
        }
        None => {}
    }
}

fn report(app: &mut AppState, what: &str, err: &AppError) {
    warn!("Failed to {what}: {err}");
    app.ui.show_error(format!("Failed to {what}: {err}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn loaded_app() -> AppState {
        let mut app = AppState::new(Config::default());
        app.session.load(
            vec![
                vec!["a".to_owned(), "1".to_owned()],
                vec!["b".to_owned(), "2".to_owned()],
                vec!["c".to_owned(), "3".to_owned()],
            ],
            false,
        );
        app
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() {
        let mut app = loaded_app();
        assert!(!dispatch(&mut app, Action::Quit).await);
        assert!(dispatch(&mut app, Action::MoveNext).await);
    }

    #[tokio::test]
    async fn test_labeling_rhythm() {
        let mut app = loaded_app();

        dispatch(&mut app, Action::ApplyPrimary).await;
        assert_eq!(app.session.cursor(), 1);
        assert_eq!(app.session.labels()[0], "natural");

        dispatch(&mut app, Action::MovePrev).await;
        dispatch(&mut app, Action::ClearLabel).await;
        assert_eq!(app.session.labeled_count(), 0);
        assert_eq!(app.session.cursor(), 0);
    }

    #[tokio::test]
    async fn test_label_prompt_submission_applies_buffer() {
        let mut app = loaded_app();

        dispatch(&mut app, Action::ShowPrompt(PromptType::Label)).await;
        for ch in "slang".chars() {
            dispatch(&mut app, Action::InputChar(ch)).await;
        }
        dispatch(&mut app, Action::SubmitPrompt).await;

        assert_eq!(app.ui.overlay, UIOverlay::None);
        assert_eq!(app.session.labels()[0], "slang");
        assert_eq!(app.session.cursor(), 1);

        // key `3` reapplies the saved label on the next row
        dispatch(&mut app, Action::ApplyCustom).await;
        assert_eq!(app.session.labels()[1], "slang");
    }

    #[tokio::test]
    async fn test_empty_custom_label_is_a_noop() {
        let mut app = loaded_app();
        dispatch(&mut app, Action::ApplyCustom).await;
        assert_eq!(app.session.labeled_count(), 0);
        assert_eq!(app.session.cursor(), 0);
    }

    #[tokio::test]
    async fn test_cancel_prompt_keeps_saved_label() {
        let mut app = loaded_app();
        app.ui.custom_label = "slang".into();

        dispatch(&mut app, Action::ShowPrompt(PromptType::Label)).await;
        dispatch(&mut app, Action::InputChar('x')).await;
        dispatch(&mut app, Action::CancelPrompt).await;

        assert_eq!(app.ui.custom_label, "slang");
        assert_eq!(app.session.labeled_count(), 0);
    }

    #[tokio::test]
    async fn test_close_overlay_dismisses_notification() {
        let mut app = loaded_app();
        app.ui.show_error("boom");

        dispatch(&mut app, Action::CloseOverlay).await;
        assert!(app.ui.notification.is_none());
    }

    #[tokio::test]
    async fn test_submit_empty_path_is_a_noop() {
        let mut app = loaded_app();
        dispatch(&mut app, Action::ShowPrompt(PromptType::OpenPath)).await;
        dispatch(&mut app, Action::SubmitPrompt).await;

        // still browsing the previously loaded dataset
        assert_eq!(app.session.data_len(), 3);
        assert!(app.ui.notification.is_none());
    }
}
