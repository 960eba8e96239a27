mod prompter;

use super::messages::{Component, Message};
use super::state::{App, CONTROL_BAR_HEIGHT, MAX_EDITOR_FONT_SIZE, TITLE_BAR_HEIGHT, component_value};
use crate::mode::AppMode;
use crate::settings::{
    HexColor, MAX_BACKGROUND_OPACITY, MAX_FONT_SIZE, MAX_SCROLL_SPEED, MAX_TEXT_MARGIN,
    MIN_FONT_SIZE, MIN_SCROLL_SPEED, MIN_TEXT_MARGIN,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Canvas, Row, button, checkbox, column, container, horizontal_space, mouse_area, row,
    scrollable, slider, stack, text, text_editor,
};
use iced::{Background, Color, Element, Length, Theme};
use prompter::PrompterCanvas;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = match self.mode() {
            AppMode::Edit => self.editor_view(),
            AppMode::Settings => self.settings_panel(),
            AppMode::Prompt => self.prompter_view(),
        };

        let background = self
            .settings
            .background_color
            .to_color(self.settings.background_alpha());
        let foreground = self.settings.text_color.to_color(1.0);

        container(column![self.title_bar(), body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(foreground),
                ..container::Style::default()
            })
            .into()
    }
}

impl App {
    fn mode_button(&self, label: &'static str, mode: AppMode) -> Element<'_, Message> {
        let style = if self.mode() == mode {
            button::primary
        } else {
            button::text
        };
        button(label)
            .style(style)
            .on_press(Message::Navigate(mode))
            .into()
    }

    fn play_button(&self) -> Element<'_, Message> {
        let (label, style): (&str, fn(&Theme, button::Status) -> button::Style) =
            if self.controller.is_playing() {
                ("Pause", button::danger)
            } else {
                ("Play", button::success)
            };
        button(label)
            .style(style)
            .on_press(Message::TogglePlayPause)
            .into()
    }

    fn title_bar(&self) -> Element<'_, Message> {
        let bar = row![
            self.mode_button("Edit", AppMode::Edit),
            self.mode_button("Settings", AppMode::Settings),
            self.play_button(),
            horizontal_space(),
            button("_").style(button::text).on_press(Message::MinimizeWindow),
            button("X").style(button::text).on_press(Message::CloseWindow),
        ]
        .spacing(6)
        .padding([4, 8])
        .align_y(Vertical::Center)
        .height(Length::Fixed(TITLE_BAR_HEIGHT));

        mouse_area(bar).on_press(Message::DragWindow).into()
    }

    fn editor_view(&self) -> Element<'_, Message> {
        let color = self.settings.text_color.to_color(1.0);
        let size = self.settings.font_size.min(MAX_EDITOR_FONT_SIZE) as f32;

        let editor = text_editor(&self.editor)
            .placeholder("Paste your script here...")
            .on_action(Message::EditorAction)
            .size(size)
            .height(Length::Fill)
            .style(move |theme: &Theme, status| {
                let mut style = text_editor::default(theme, status);
                style.value = color;
                style.background = Background::Color(Color::TRANSPARENT);
                style
            });

        let toolbar = row![
            text(format!("{} lines", self.script.line_count())).size(14.0),
            horizontal_space(),
            button("Clear")
                .style(button::secondary)
                .on_press_maybe((!self.script.is_blank()).then_some(Message::ClearScript)),
        ]
        .align_y(Vertical::Center);

        column![toolbar, editor]
            .spacing(6)
            .padding([4, 10])
            .height(Length::Fill)
            .into()
    }

    fn labeled_slider<'a>(
        label: String,
        range: std::ops::RangeInclusive<u32>,
        value: u32,
        on_change: impl Fn(u32) -> Message + 'a,
    ) -> Row<'a, Message> {
        row![
            text(label).width(Length::Fixed(170.0)),
            slider(
                *range.start() as f32..=*range.end() as f32,
                value as f32,
                move |raw| on_change(raw.round() as u32),
            )
            .step(1.0)
        ]
        .spacing(8)
        .align_y(Vertical::Center)
    }

    fn color_row<'a>(
        label: &'a str,
        color: HexColor,
        msg: impl Fn(Component, f32) -> Message + Copy + 'a,
    ) -> Row<'a, Message> {
        row![
            text(format!("{label} {color}")).width(Length::Fixed(170.0)),
            slider(0.0..=1.0, component_value(color, Component::R), move |v| {
                msg(Component::R, v)
            })
            .step(1.0 / 255.0),
            slider(0.0..=1.0, component_value(color, Component::G), move |v| {
                msg(Component::G, v)
            })
            .step(1.0 / 255.0),
            slider(0.0..=1.0, component_value(color, Component::B), move |v| {
                msg(Component::B, v)
            })
            .step(1.0 / 255.0),
        ]
        .spacing(6)
        .align_y(Vertical::Center)
    }

    pub(super) fn settings_panel(&self) -> Element<'_, Message> {
        let settings = &self.settings;
        let panel = column![
            Self::labeled_slider(
                format!("Font size: {} px", settings.font_size),
                MIN_FONT_SIZE..=MAX_FONT_SIZE,
                settings.font_size,
                Message::FontSizeChanged,
            ),
            Self::labeled_slider(
                format!("Scroll speed: {}", settings.scroll_speed),
                MIN_SCROLL_SPEED..=MAX_SCROLL_SPEED,
                settings.scroll_speed,
                Message::ScrollSpeedChanged,
            ),
            Self::labeled_slider(
                format!("Opacity: {}%", settings.background_opacity),
                0..=MAX_BACKGROUND_OPACITY,
                settings.background_opacity,
                Message::BackgroundOpacityChanged,
            ),
            Self::labeled_slider(
                format!("Reading width: {}%", settings.text_margin),
                MIN_TEXT_MARGIN..=MAX_TEXT_MARGIN,
                settings.text_margin,
                Message::TextMarginChanged,
            ),
            checkbox("Show reading guide", settings.show_reading_guide)
                .on_toggle(Message::ReadingGuideToggled),
            Self::color_row("Text", settings.text_color, Message::TextColorChanged),
            Self::color_row(
                "Background",
                settings.background_color,
                Message::BackgroundColorChanged,
            ),
        ]
        .spacing(10)
        .padding([4, 12]);

        scrollable(panel).height(Length::Fill).into()
    }

    fn prompter_view(&self) -> Element<'_, Message> {
        let Some(prompter) = self.prompter.as_ref() else {
            return horizontal_space().into();
        };

        let canvas = Canvas::new(PrompterCanvas {
            text: self.script.text(),
            font_size: self.settings.font_size,
            text_color: self.settings.text_color.to_color(1.0),
            text_margin: self.settings.text_margin,
            show_reading_guide: self.settings.show_reading_guide,
            position: prompter.rendered_position(),
            dragging: prompter.engine.is_dragging(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = stack![canvas];
        if prompter.controls_visible {
            layers = layers.push(self.hover_controls());
        }

        mouse_area(layers)
            .on_enter(Message::PrompterHovered(true))
            .on_exit(Message::PrompterHovered(false))
            .into()
    }

    fn hover_controls(&self) -> Element<'_, Message> {
        let play_label = if self.controller.is_playing() {
            "Pause"
        } else {
            "Play"
        };
        let controls = row![
            button("Top").on_press(Message::ResetToTop),
            button(play_label).on_press(Message::TogglePlayPause),
            button("-").on_press(Message::SpeedDown),
            text(format!("Speed {}", self.settings.scroll_speed)),
            button("+").on_press(Message::SpeedUp),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        container(controls)
            .width(Length::Fill)
            .height(Length::Fixed(CONTROL_BAR_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: 0.55,
                    ..Color::BLACK
                })),
                ..container::Style::default()
            })
            .into()
    }
}
