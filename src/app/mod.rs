mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::store::Store;
use iced::{Color, Size, Theme, window};

/// Launch the prompter window with the loaded configuration.
pub fn run_app(config: AppConfig, store: Store) -> iced::Result {
    let level = if config.always_on_top {
        window::Level::AlwaysOnTop
    } else {
        window::Level::Normal
    };
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        decorations: false,
        transparent: config.transparent,
        level,
        // Close requests go through the reducer so state is persisted first.
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application("Teleprompter", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_app: &App| Theme::Dark)
        .style(|_app: &App, theme: &Theme| iced::application::Appearance {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        })
        .run_with(move || App::bootstrap(config, store))
}
