//! Loading spinner primitive
//!
//! A faint track ring with a rotating arc, drawn on a Canvas. Rotation is
//! supplied by the caller so the spinner advances with the frame clock.

use std::time::Duration;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, path::Arc};
use iced::{Color, Element, Point, Radians, Renderer, Theme, mouse};

/// Time for one full turn
const REVOLUTION: Duration = Duration::from_millis(900);

/// Fraction of the circle covered by the moving arc
const ARC_SWEEP: f32 = 0.28;

/// Spinner configuration
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Rotation in turns (0.0 - 1.0)
    pub phase: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Background ring color
    pub track_color: Color,
    /// Moving arc color
    pub arc_color: Color,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            phase: 0.0,
            stroke_width: 4.0,
            track_color: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            arc_color: crate::ui::theme::ACCENT,
        }
    }
}

impl Spinner {
    pub fn new(phase: f32) -> Self {
        Self {
            phase: phase.rem_euclid(1.0),
            ..Default::default()
        }
    }

    /// Spinner rotated to where it should be after `elapsed`
    pub fn at(elapsed: Duration) -> Self {
        Self::new(phase_at(elapsed))
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn arc_color(mut self, color: Color) -> Self {
        self.arc_color = color;
        self
    }
}

/// Rotation in turns after `elapsed`
pub fn phase_at(elapsed: Duration) -> f32 {
    let period = REVOLUTION.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period
}

impl<Message> Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = (bounds.width.min(bounds.height) / 2.0) - (self.stroke_width / 2.0) - 1.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.track_color),
        );

        // Start from top
        let start_angle = -std::f32::consts::FRAC_PI_2 + self.phase * std::f32::consts::TAU;
        let sweep_angle = ARC_SWEEP * std::f32::consts::TAU;

        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start_angle),
                end_angle: Radians(start_angle + sweep_angle),
            });
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.arc_color)
                .with_line_cap(iced::widget::canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

/// Create a spinner element
pub fn view_spinner<'a, Message: 'a>(spinner: Spinner, size: f32) -> Element<'a, Message> {
    Canvas::new(spinner).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wraps_each_revolution() {
        assert_eq!(phase_at(Duration::ZERO), 0.0);
        let half = phase_at(REVOLUTION / 2);
        assert!((half - 0.5).abs() < 1e-3);
        let wrapped = phase_at(REVOLUTION * 3 + REVOLUTION / 4);
        assert!((wrapped - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_new_normalizes_phase() {
        assert!((Spinner::new(1.25).phase - 0.25).abs() < 1e-6);
        assert!((Spinner::new(-0.25).phase - 0.75).abs() < 1e-6);
    }
}
