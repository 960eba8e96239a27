mod appearance;
mod core;
mod playback;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Effect {
    SaveSettings,
    SaveScript,
    DragWindow,
    MinimizeWindow,
    QuitSafely,
}
