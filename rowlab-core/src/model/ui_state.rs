//! UI-side state: overlays, prompt input, notifications, redraw flag.
//!
//! Session data lives in `annotr`; everything here is presentation-only and
//! mutated from the single event loop, so a plain bool is enough for the
//! redraw flag.

use std::time::{Duration, Instant};

use compact_str::CompactString;

use crate::controller::actions::PromptType;

/// Which overlay is on top of the main panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIOverlay {
    #[default]
    None,
    Help,
    Prompt,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Compact notification with timestamp
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub ttl: Option<Duration>,
}

/// Presentation state owned by the event loop.
#[derive(Debug)]
pub struct UIState {
    pub overlay: UIOverlay,
    pub prompt: Option<PromptType>,

    /// Transient buffer of the active prompt.
    pub input: CompactString,
    pub input_cursor: usize,

    /// The free-text label, kept across prompts so key `3` can reapply it.
    pub custom_label: CompactString,

    pub notification: Option<Notification>,
    notification_ttl: Duration,

    needs_redraw: bool,
}

impl UIState {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            overlay: UIOverlay::None,
            prompt: None,
            input: CompactString::default(),
            input_cursor: 0,
            custom_label: CompactString::default(),
            notification: None,
            notification_ttl,
            needs_redraw: true,
        }
    }

    // Redraw management
    #[inline]
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    // Prompt management
    pub fn open_prompt(&mut self, prompt: PromptType) {
        match prompt {
            // editing resumes from the saved label
            PromptType::Label => self.set_input(self.custom_label.clone()),
            PromptType::OpenPath => self.clear_input(),
        }
        self.prompt = Some(prompt);
        self.overlay = UIOverlay::Prompt;
        self.request_redraw();
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
        self.overlay = UIOverlay::None;
        self.request_redraw();
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            _ => UIOverlay::Help,
        };
        self.request_redraw();
    }

    // Notification system with inline helpers
    pub fn show_notification(
        &mut self,
        message: impl Into<CompactString>,
        level: NotificationLevel,
        ttl: Option<Duration>,
    ) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            ttl,
        });
        self.request_redraw();
    }

    #[inline]
    pub fn show_info(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Info, Some(self.notification_ttl));
    }

    #[inline]
    pub fn show_success(&mut self, message: impl Into<CompactString>) {
        self.show_notification(
            message,
            NotificationLevel::Success,
            Some(self.notification_ttl),
        );
    }

    #[inline]
    pub fn show_warning(&mut self, message: impl Into<CompactString>) {
        self.show_notification(
            message,
            NotificationLevel::Warning,
            Some(self.notification_ttl * 2),
        );
    }

    /// Errors stay until dismissed with Esc.
    #[inline]
    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.show_notification(message, NotificationLevel::Error, None);
    }

    /// Auto-dismiss expired notifications. Returns true when one was removed.
    pub fn update_notification(&mut self) -> bool {
        if let Some(notification) = &self.notification
            && let Some(ttl) = notification.ttl
            && notification.timestamp.elapsed() >= ttl
        {
            self.notification = None;
            self.request_redraw();
            return true;
        }
        false
    }

    // Input management
    pub fn clear_input(&mut self) {
        self.input = CompactString::default();
        self.input_cursor = 0;
    }

    pub fn set_input(&mut self, text: impl Into<CompactString>) {
        self.input = text.into();
        self.input_cursor = self.input.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut input_str = self.input.to_string();
        input_str.insert(self.input_cursor, ch);
        self.input = input_str.into();
        self.input_cursor += ch.len_utf8();
        self.request_redraw();
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.input_cursor > 0 {
            let mut input_str = self.input.to_string();
            let char_indices: Vec<_> = input_str.char_indices().collect();

            if let Some((char_pos, _)) = char_indices
                .iter()
                .rev()
                .find(|(pos, _)| *pos < self.input_cursor)
            {
                input_str.remove(*char_pos);
                self.input = input_str.into();
                self.input_cursor = *char_pos;
                self.request_redraw();
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui() -> UIState {
        UIState::new(Duration::from_secs(3))
    }

    #[test]
    fn test_redraw_flag() {
        let mut ui = ui();
        assert!(ui.needs_redraw());

        ui.clear_redraw();
        assert!(!ui.needs_redraw());

        ui.request_redraw();
        assert!(ui.needs_redraw());
    }

    #[test]
    fn test_input_editing_handles_multibyte() {
        let mut ui = ui();
        for ch in "natü".chars() {
            ui.insert_char(ch);
        }
        assert_eq!(ui.input, "natü");

        assert!(ui.delete_char_before());
        assert_eq!(ui.input, "nat");
        assert_eq!(ui.input_cursor, 3);
    }

    #[test]
    fn test_delete_on_empty_input_is_noop() {
        let mut ui = ui();
        assert!(!ui.delete_char_before());
        assert_eq!(ui.input, "");
    }

    #[test]
    fn test_label_prompt_resumes_saved_text() {
        let mut ui = ui();
        ui.custom_label = CompactString::from("slang");

        ui.open_prompt(PromptType::Label);
        assert_eq!(ui.overlay, UIOverlay::Prompt);
        assert_eq!(ui.input, "slang");

        ui.close_prompt();
        assert_eq!(ui.overlay, UIOverlay::None);
        assert_eq!(ui.prompt, None);
    }

    #[test]
    fn test_path_prompt_starts_empty() {
        let mut ui = ui();
        ui.custom_label = CompactString::from("slang");
        ui.set_input("leftover");

        ui.open_prompt(PromptType::OpenPath);
        assert_eq!(ui.input, "");
    }

    #[test]
    fn test_notification_auto_dismiss() {
        let mut ui = UIState::new(Duration::ZERO);
        ui.show_info("done");
        assert!(ui.notification.is_some());

        assert!(ui.update_notification());
        assert!(ui.notification.is_none());
    }

    #[test]
    fn test_error_notification_is_sticky() {
        let mut ui = UIState::new(Duration::ZERO);
        ui.show_error("boom");

        assert!(!ui.update_notification());
        assert!(ui.notification.is_some());
    }
}
