use crate::mode::AppMode;
use iced::keyboard::{Key, Modifiers};
use iced::widget::text_editor;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(AppMode),
    TogglePlayPause,
    SpeedUp,
    SpeedDown,
    ResetToTop,
    EditorAction(text_editor::Action),
    ClearScript,
    FontSizeChanged(u32),
    ScrollSpeedChanged(u32),
    BackgroundOpacityChanged(u32),
    TextMarginChanged(u32),
    ReadingGuideToggled(bool),
    TextColorChanged(Component, f32),
    BackgroundColorChanged(Component, f32),
    PrompterHovered(bool),
    /// Vertical wheel delta in pixels; positive moves toward later text.
    Wheel(f32),
    DragStarted(f32),
    DragMoved(f32),
    DragEnded,
    Frame(Instant),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PollSystemSignals,
    DragWindow,
    MinimizeWindow,
    CloseWindow,
}

#[derive(Debug, Clone, Copy)]
pub enum Component {
    R,
    G,
    B,
}
