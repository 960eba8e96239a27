use std::time::Duration;

/// Height of the hover control strip at the top of the prompter. Presses
/// inside it never start a drag.
pub(crate) const CONTROL_BAR_HEIGHT: f32 = 44.0;
pub(crate) const TITLE_BAR_HEIGHT: f32 = 40.0;
/// Cadence for draining global shortcuts and the Ctrl+C flag.
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Largest font used by the editor preview.
pub(crate) const MAX_EDITOR_FONT_SIZE: u32 = 32;
pub(crate) const READING_GUIDE_THICKNESS: f32 = 2.0;
