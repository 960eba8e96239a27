use super::super::messages::Message;
use super::super::state::{CONTROL_BAR_HEIGHT, READING_GUIDE_THICKNESS};
use crate::layout::{chars_per_line, column_width, line_height, wrap_script};
use crate::scroll_engine::WHEEL_LINE_PX;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Text};
use iced::widget::text::{LineHeight, Shaping};
use iced::{Color, Font, Point, Rectangle, Size};

const READING_GUIDE_COLOR: Color = Color {
    r: 1.0,
    g: 0.25,
    b: 0.25,
    a: 0.6,
};

/// Canvas that draws the script as a vertically scrolled, centered column and
/// turns wheel and drag input into scroll messages.
pub(super) struct PrompterCanvas<'a> {
    pub text: &'a str,
    pub font_size: u32,
    pub text_color: Color,
    pub text_margin: u32,
    pub show_reading_guide: bool,
    /// Rendered scroll offset in pixels.
    pub position: f32,
    pub dragging: bool,
}

impl<'a> canvas::Program<Message> for PrompterCanvas<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let canvas::Event::Mouse(event) = event else {
            return (canvas::event::Status::Ignored, None);
        };

        match event {
            mouse::Event::WheelScrolled { delta } if cursor.is_over(bounds) => {
                let pixels = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PX,
                    mouse::ScrollDelta::Pixels { y, .. } => -y,
                };
                (canvas::event::Status::Captured, Some(Message::Wheel(pixels)))
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(relative) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                // The hover controls sit in the top strip.
                if relative.y <= CONTROL_BAR_HEIGHT {
                    return (canvas::event::Status::Ignored, None);
                }
                let absolute_y = cursor.position().map_or(relative.y, |point| point.y);
                (
                    canvas::event::Status::Captured,
                    Some(Message::DragStarted(absolute_y)),
                )
            }
            mouse::Event::CursorMoved { position } if self.dragging => (
                canvas::event::Status::Captured,
                Some(Message::DragMoved(position.y)),
            ),
            mouse::Event::ButtonReleased(mouse::Button::Left) if self.dragging => {
                (canvas::event::Status::Captured, Some(Message::DragEnded))
            }
            mouse::Event::CursorLeft if self.dragging => {
                (canvas::event::Status::Ignored, Some(Message::DragEnded))
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let width = column_width(bounds.width, self.text_margin);
        let lines = wrap_script(self.text, chars_per_line(width, self.font_size));
        let step = line_height(self.font_size);
        let center_x = bounds.width / 2.0;
        // Half a viewport of padding puts the first line on the guide.
        let top = bounds.height / 2.0 - self.position;

        for (index, line) in lines.into_iter().enumerate() {
            let y = top + index as f32 * step;
            if y + step < 0.0 {
                continue;
            }
            if y > bounds.height {
                break;
            }
            if line.is_empty() {
                continue;
            }
            frame.fill_text(Text {
                content: line,
                position: Point::new(center_x, y),
                font: Font::default(),
                size: (self.font_size as f32).into(),
                color: self.text_color,
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Top,
                line_height: LineHeight::Absolute(step.into()),
                shaping: Shaping::Advanced,
            });
        }

        if self.show_reading_guide {
            frame.fill_rectangle(
                Point::new(0.0, bounds.height / 2.0 - READING_GUIDE_THICKNESS / 2.0),
                Size::new(bounds.width, READING_GUIDE_THICKNESS),
                READING_GUIDE_COLOR,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor
            .position_in(bounds)
            .is_some_and(|point| point.y > CONTROL_BAR_HEIGHT)
        {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(600.0, 300.0))
    }

    fn canvas(dragging: bool) -> PrompterCanvas<'static> {
        PrompterCanvas {
            text: "Hello\nWorld",
            font_size: 48,
            text_color: Color::WHITE,
            text_margin: 80,
            show_reading_guide: true,
            position: 0.0,
            dragging,
        }
    }

    fn send(
        program: &PrompterCanvas<'_>,
        event: mouse::Event,
        cursor: Point,
    ) -> (canvas::event::Status, Option<Message>) {
        <PrompterCanvas<'_> as canvas::Program<Message>>::update(
            program,
            &mut (),
            canvas::Event::Mouse(event),
            bounds(),
            mouse::Cursor::Available(cursor),
        )
    }

    #[test]
    fn wheel_down_by_one_line_scrolls_toward_later_text() {
        let (status, message) = send(
            &canvas(false),
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
            },
            Point::new(300.0, 150.0),
        );
        assert_eq!(status, canvas::event::Status::Captured);
        assert!(matches!(message, Some(Message::Wheel(px)) if px == WHEEL_LINE_PX));
    }

    #[test]
    fn pixel_wheel_delta_is_negated() {
        let (_, message) = send(
            &canvas(false),
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Pixels { x: 0.0, y: 25.0 },
            },
            Point::new(300.0, 150.0),
        );
        assert!(matches!(message, Some(Message::Wheel(px)) if px == -25.0));
    }

    #[test]
    fn wheel_outside_canvas_is_ignored() {
        let (status, message) = send(
            &canvas(false),
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
            },
            Point::new(300.0, 500.0),
        );
        assert_eq!(status, canvas::event::Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn press_in_control_strip_does_not_start_drag() {
        let (status, message) = send(
            &canvas(false),
            mouse::Event::ButtonPressed(mouse::Button::Left),
            Point::new(300.0, CONTROL_BAR_HEIGHT - 4.0),
        );
        assert_eq!(status, canvas::event::Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn press_below_control_strip_starts_drag_at_pointer() {
        let (status, message) = send(
            &canvas(false),
            mouse::Event::ButtonPressed(mouse::Button::Left),
            Point::new(300.0, 200.0),
        );
        assert_eq!(status, canvas::event::Status::Captured);
        assert!(matches!(message, Some(Message::DragStarted(y)) if y == 200.0));
    }

    #[test]
    fn drag_follows_pointer_and_ends_outside_canvas() {
        let outside = Point::new(300.0, 900.0);
        let (_, moved) = send(
            &canvas(true),
            mouse::Event::CursorMoved {
                position: Point::new(300.0, 10.0),
            },
            outside,
        );
        assert!(matches!(moved, Some(Message::DragMoved(y)) if y == 10.0));

        let (_, released) = send(
            &canvas(true),
            mouse::Event::ButtonReleased(mouse::Button::Left),
            outside,
        );
        assert!(matches!(released, Some(Message::DragEnded)));
    }

    #[test]
    fn move_and_release_without_drag_are_ignored() {
        let (_, moved) = send(
            &canvas(false),
            mouse::Event::CursorMoved {
                position: Point::new(300.0, 10.0),
            },
            Point::new(300.0, 10.0),
        );
        assert!(moved.is_none());

        let (_, released) = send(
            &canvas(false),
            mouse::Event::ButtonReleased(mouse::Button::Left),
            Point::new(300.0, 200.0),
        );
        assert!(released.is_none());
    }
}
