use super::super::state::App;
use crate::mode::AppMode;

impl App {
    pub(super) fn handle_navigate(&mut self, mode: AppMode) {
        if mode == self.controller.mode() && !self.controller.is_playing() {
            return;
        }
        self.controller.navigate(mode);
    }
}
