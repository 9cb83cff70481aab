//! Radial two-color session backdrop
//!
//! iced has no radial gradient fill, so each stop is drawn as a stack of
//! concentric discs. Disc `i` of `k` (largest first) covers radius
//! `R * (k - i) / k` with alpha `a / (k - a * i)`; after `n` discs the
//! composite opacity is exactly `a * n / k`, a stepped version of the linear
//! `a * (1 - d / R)` falloff of `radial-gradient(circle at X Y, c 0%, transparent R)`.

use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::widget::{Canvas, canvas};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Theme, mouse};

use crate::features::session::{Backdrop, RadialStop};
use crate::ui::theme;
use crate::utils::to_color;

/// Discs per stop
const RINGS: usize = 48;

/// Alpha for each disc, largest disc first
pub fn ring_alphas(rings: usize, peak: f32) -> Vec<f32> {
    let k = rings as f32;
    (0..rings)
        .map(|i| peak / (k - peak * i as f32))
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct BackdropProgram {
    pub backdrop: Backdrop,
    /// Overall fade applied during the page entry
    pub opacity: f32,
}

impl BackdropProgram {
    fn draw_stop(&self, frame: &mut Frame, stop: &RadialStop, width: f32, height: f32) {
        let (cx, cy) = stop.center(width, height);
        let radius = stop.radius(width, height);
        if radius <= 0.0 || stop.color.a <= 0.0 {
            return;
        }

        let peak = (stop.opacity_at(0.0, width, height) * self.opacity).clamp(0.0, 1.0);
        let base = to_color(stop.color);
        for (i, alpha) in ring_alphas(RINGS, peak).into_iter().enumerate() {
            let r = radius * (RINGS - i) as f32 / RINGS as f32;
            frame.fill(
                &Path::circle(Point::new(cx, cy), r),
                Color { a: alpha, ..base },
            );
        }
    }
}

impl<Message> Program<Message> for BackdropProgram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::background(theme));

        for stop in &self.backdrop.stops {
            self.draw_stop(&mut frame, stop, bounds.width, bounds.height);
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size backdrop canvas
pub fn view<'a, Message: 'a>(backdrop: Backdrop, opacity: f32) -> Element<'a, Message> {
    let program: Canvas<BackdropProgram, Message> = canvas(BackdropProgram { backdrop, opacity });
    program.width(Fill).height(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(alphas: &[f32]) -> f32 {
        1.0 - alphas.iter().map(|a| 1.0 - a).product::<f32>()
    }

    #[test]
    fn test_rings_reach_peak_at_center() {
        let alphas = ring_alphas(RINGS, 1.0);
        assert!((composite(&alphas) - 1.0).abs() < 1e-4);
        assert!((alphas[0] - 1.0 / RINGS as f32).abs() < 1e-6);
    }

    #[test]
    fn test_rings_fall_off_linearly() {
        let peak = 0.8;
        let alphas = ring_alphas(10, peak);
        // Halfway out: inside 5 of 10 discs
        assert!((composite(&alphas[..5]) - peak * 0.5).abs() < 1e-4);
        assert!((composite(&alphas) - peak).abs() < 1e-4);
    }

    #[test]
    fn test_transparent_stop_draws_nothing() {
        let alphas = ring_alphas(8, 0.0);
        assert!(alphas.iter().all(|a| *a == 0.0));
    }
}
