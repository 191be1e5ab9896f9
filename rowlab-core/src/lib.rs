pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::{Action, PromptType};

    pub mod dispatcher;

    pub mod keymap;
}

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, UIOverlay, UIState};
}

pub mod view {
    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod notification_overlay;
        pub use notification_overlay::NotificationOverlay;
        pub mod prompt_overlay;
        pub use prompt_overlay::PromptOverlay;
        pub mod query_panel;
        pub use query_panel::QueryPanel;
        pub mod row_preview;
        pub use row_preview::RowPreview;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}

pub mod logging;
pub use logging::Logger;

pub use config::Config;
pub use error::AppError;

pub use model::{app_state::AppState, ui_state::UIState};
