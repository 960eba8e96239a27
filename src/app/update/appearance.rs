use super::super::messages::Component;
use super::super::state::{App, apply_component};
use super::Effect;
use crate::settings::{
    MAX_BACKGROUND_OPACITY, MAX_FONT_SIZE, MAX_SCROLL_SPEED, MAX_TEXT_MARGIN, MIN_FONT_SIZE,
    MIN_SCROLL_SPEED, MIN_TEXT_MARGIN,
};
use iced::widget::text_editor;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_font_size_changed(&mut self, size: u32, effects: &mut Vec<Effect>) {
        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped != self.settings.font_size {
            debug!(
                old = self.settings.font_size,
                new = clamped,
                "Font size changed"
            );
            self.settings.font_size = clamped;
            effects.push(Effect::SaveSettings);
        }
    }

    pub(super) fn handle_scroll_speed_changed(&mut self, speed: u32, effects: &mut Vec<Effect>) {
        let clamped = speed.clamp(MIN_SCROLL_SPEED, MAX_SCROLL_SPEED);
        if clamped != self.settings.scroll_speed {
            debug!(speed = clamped, "Scroll speed changed");
            self.settings.scroll_speed = clamped;
            effects.push(Effect::SaveSettings);
        }
    }

    pub(super) fn handle_background_opacity_changed(
        &mut self,
        opacity: u32,
        effects: &mut Vec<Effect>,
    ) {
        let clamped = opacity.min(MAX_BACKGROUND_OPACITY);
        if clamped != self.settings.background_opacity {
            debug!(opacity = clamped, "Background opacity changed");
            self.settings.background_opacity = clamped;
            effects.push(Effect::SaveSettings);
        }
    }

    pub(super) fn handle_text_margin_changed(&mut self, margin: u32, effects: &mut Vec<Effect>) {
        let clamped = margin.clamp(MIN_TEXT_MARGIN, MAX_TEXT_MARGIN);
        if clamped != self.settings.text_margin {
            debug!(text_margin = clamped, "Reading width changed");
            self.settings.text_margin = clamped;
            effects.push(Effect::SaveSettings);
        }
    }

    pub(super) fn handle_reading_guide_toggled(&mut self, enabled: bool, effects: &mut Vec<Effect>) {
        info!(enabled, "Toggled reading guide");
        self.settings.show_reading_guide = enabled;
        effects.push(Effect::SaveSettings);
    }

    pub(super) fn handle_text_color_changed(
        &mut self,
        component: Component,
        value: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.settings.text_color = apply_component(self.settings.text_color, component, value);
        debug!(color = %self.settings.text_color, "Text color changed");
        effects.push(Effect::SaveSettings);
    }

    pub(super) fn handle_background_color_changed(
        &mut self,
        component: Component,
        value: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.settings.background_color =
            apply_component(self.settings.background_color, component, value);
        debug!(color = %self.settings.background_color, "Background color changed");
        effects.push(Effect::SaveSettings);
    }

    pub(super) fn handle_editor_action(
        &mut self,
        action: text_editor::Action,
        effects: &mut Vec<Effect>,
    ) {
        let is_edit = action.is_edit();
        self.editor.perform(action);
        if !is_edit {
            return;
        }
        // The editor reports one trailing newline the user never typed.
        let mut text = self.editor.text();
        if text.ends_with('\n') {
            text.pop();
        }
        if self.script.set(text) {
            effects.push(Effect::SaveScript);
        }
    }

    pub(super) fn handle_clear_script(&mut self, effects: &mut Vec<Effect>) {
        self.editor = text_editor::Content::new();
        if self.script.clear() {
            info!("Cleared script");
            effects.push(Effect::SaveScript);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::config::AppConfig;
    use crate::script::Script;
    use crate::settings::{HexColor, PrompterSettings};
    use crate::store::Store;

    fn build_test_app(name: &str) -> App {
        let store = Store::new(std::env::temp_dir().join(format!(
            "teleprompter-appearance-test-{}-{name}",
            std::process::id()
        )));
        App::from_parts(
            AppConfig::default(),
            store,
            PrompterSettings::default(),
            Script::new("Hello\nWorld"),
            None,
        )
    }

    #[test]
    fn sliders_clamp_and_save() {
        let mut app = build_test_app("sliders");
        assert_eq!(
            app.reduce(Message::FontSizeChanged(500)),
            vec![Effect::SaveSettings]
        );
        assert_eq!(app.settings.font_size, MAX_FONT_SIZE);
        assert!(app.reduce(Message::FontSizeChanged(500)).is_empty());

        app.reduce(Message::TextMarginChanged(0));
        assert_eq!(app.settings.text_margin, MIN_TEXT_MARGIN);
        app.reduce(Message::BackgroundOpacityChanged(130));
        assert_eq!(app.settings.background_opacity, MAX_BACKGROUND_OPACITY);
        app.reduce(Message::ScrollSpeedChanged(0));
        assert_eq!(app.settings.scroll_speed, MIN_SCROLL_SPEED);
    }

    #[test]
    fn color_components_update_hex_channels() {
        let mut app = build_test_app("colors");
        app.reduce(Message::TextColorChanged(Component::G, 0.0));
        assert_eq!(
            app.settings.text_color,
            HexColor {
                r: 0xff,
                g: 0,
                b: 0xff
            }
        );
        app.reduce(Message::BackgroundColorChanged(Component::R, 2.0));
        assert_eq!(app.settings.background_color.r, 0xff);
    }

    #[test]
    fn editing_keeps_script_free_of_editor_trailing_newline() {
        let mut app = build_test_app("edit-newline");
        app.script = Script::new("Hello");
        app.editor = text_editor::Content::with_text("Hello");

        app.reduce(Message::EditorAction(text_editor::Action::Move(
            text_editor::Motion::DocumentEnd,
        )));
        let effects = app.reduce(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('!'),
        )));

        assert_eq!(app.script.text(), "Hello!");
        assert_eq!(effects, vec![Effect::SaveScript]);
    }

    #[test]
    fn clearing_script_requests_save_once() {
        let mut app = build_test_app("clear");
        assert_eq!(app.reduce(Message::ClearScript), vec![Effect::SaveScript]);
        assert_eq!(app.script.text(), "");
        assert!(app.reduce(Message::ClearScript).is_empty());
    }
}
