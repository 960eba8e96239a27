use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveSettings => {
                self.store.save_settings(&self.settings);
                Task::none()
            }
            Effect::SaveScript => {
                self.store.save_script(&self.script);
                Task::none()
            }
            Effect::DragWindow => window::get_latest().and_then(window::drag),
            Effect::MinimizeWindow => {
                window::get_latest().and_then(|id| window::minimize(id, true))
            }
            Effect::QuitSafely => {
                info!(data_dir = %self.store.root().display(), "Persisting state before exit");
                self.persist_all();
                self.prompter = None;
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // A focused text editor captures its keys, which keeps typing from
    // triggering playback shortcuts.
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Window(window::Event::CloseRequested) => Some(Message::CloseWindow),
        _ => None,
    }
}
