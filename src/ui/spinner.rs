/// Loading indicator
/// A rotating arc drawn on a canvas, driven by the shell's tick subscription
use iced::widget::canvas::{self, path::Arc, Path, Stroke};
use iced::widget::Canvas;
use iced::{Color, Element, Length, Point, Radians, Rectangle};
use std::f32::consts::PI;

/// Side of the square the spinner is drawn in
const SIZE: f32 = 48.0;

/// Angle the arc advances per animation tick
pub const STEP: f32 = PI / 24.0;

/// Spinner geometry for one frame
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Rotation of the arc's leading edge in radians
    pub angle: f32,
}

impl Spinner {
    /// Angle after one more tick, wrapped to a full turn
    pub fn advance(angle: f32) -> f32 {
        (angle + STEP) % (2.0 * PI)
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let stroke_width = 4.0;
        let radius = (bounds.width.min(bounds.height) - stroke_width) / 2.0;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let palette = theme.palette();

        // Faint full ring as the track
        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_color(Color {
                    a: 0.15,
                    ..palette.text
                })
                .with_width(stroke_width),
        );

        // Three quarters of a turn behind the leading edge
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(self.angle - 1.5 * PI),
                end_angle: Radians(self.angle),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_color(palette.primary)
                .with_width(stroke_width)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

/// Spinner widget at the given rotation
pub fn view<'a, Message: 'a>(angle: f32) -> Element<'a, Message> {
    Canvas::new(Spinner { angle })
        .width(Length::Fixed(SIZE))
        .height(Length::Fixed(SIZE))
        .into()
}
