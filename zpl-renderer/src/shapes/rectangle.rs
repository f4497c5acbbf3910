use tiny_skia::{FillRule, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::{Drawable, Ink, error::RenderError};

/// Box geometry in dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RectDim {
    width: f32,
    height: f32,
    line_thickness: f32,
    /// Corner rounding from 0 (square) to 8.
    rounding: u8,
}

impl RectDim {
    pub(crate) fn new(width: f32, height: f32, line_thickness: f32, rounding: u8) -> Self {
        Self {
            width,
            height,
            line_thickness,
            rounding,
        }
    }

    fn radius(&self) -> f32 {
        let shorter_side = self.width.min(self.height);
        f32::from(self.rounding.min(8)) / 8. * (shorter_side / 2.)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Rectangle {
    x: f32,
    y: f32,
    dim: RectDim,
    solid: bool,
    ink: Ink,
}

impl Rectangle {
    pub(crate) fn new(x: f32, y: f32, dim: RectDim, solid: bool, ink: Ink) -> Self {
        Self {
            x,
            y,
            dim,
            solid,
            ink,
        }
    }
}

/// Rectangle path with corners bent by quadratic curves.
fn rounded_rect(rect: Rect, radius: f32) -> Option<Path> {
    if radius <= 0. {
        return Some(PathBuilder::from_rect(rect));
    }
    let (left, top, right, bottom) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(left + radius, top);
    pb.line_to(right - radius, top);
    pb.quad_to(right, top, right, top + radius);
    pb.line_to(right, bottom - radius);
    pb.quad_to(right, bottom, right - radius, bottom);
    pb.line_to(left + radius, bottom);
    pb.quad_to(left, bottom, left, bottom - radius);
    pb.line_to(left, top + radius);
    pb.quad_to(left, top, left + radius, top);
    pb.close();
    pb.finish()
}

impl Drawable for Rectangle {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        if self.dim.width <= 0. || self.dim.height <= 0. {
            return Err(RenderError::InvalidShape);
        }
        let rect = Rect::from_xywh(self.x, self.y, self.dim.width, self.dim.height)
            .ok_or(RenderError::InvalidShape)?;
        let radius = self.dim.radius();
        let paint = self.ink.paint();

        // thickness from zpl is drawn inside the box, the stroke is centered
        // on the path
        let inset = self.dim.line_thickness / 2.;
        let inner = (!self.solid).then(|| rect.inset(inset, inset)).flatten();

        match inner {
            Some(inner) => {
                let path = rounded_rect(inner, (radius - inset).max(0.))
                    .ok_or(RenderError::InvalidShape)?;
                let stroke = Stroke {
                    width: self.dim.line_thickness,
                    ..Default::default()
                };
                target.stroke_path(&path, &paint, &stroke, transform, None);
            }
            // solid, or a border too thick to leave any inside
            None => {
                let path = rounded_rect(rect, radius).ok_or(RenderError::InvalidShape)?;
                target.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tiny_skia::Color;

    use super::*;

    fn canvas() -> Pixmap {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        pixmap.fill(Color::WHITE);
        pixmap
    }

    fn red(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).unwrap().red()
    }

    #[test]
    fn radius_test() {
        assert_eq!(RectDim::new(80., 40., 2., 0).radius(), 0.);
        assert_eq!(RectDim::new(80., 40., 2., 8).radius(), 20.);
        assert_eq!(RectDim::new(80., 40., 2., 4).radius(), 10.);
    }

    #[test]
    fn solid_box_fills_interior_test() {
        let mut pixmap = canvas();
        let dim = RectDim::new(60., 60., 60., 0);
        Rectangle::new(20., 20., dim, true, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity())
            .unwrap();
        assert_eq!(red(&pixmap, 50, 50), 0);
        assert_eq!(red(&pixmap, 10, 10), 255);
    }

    #[test]
    fn hollow_box_keeps_interior_test() {
        let mut pixmap = canvas();
        let dim = RectDim::new(60., 60., 4., 0);
        Rectangle::new(20., 20., dim, false, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity())
            .unwrap();
        assert_eq!(red(&pixmap, 50, 50), 255);
        assert_eq!(red(&pixmap, 21, 50), 0);
        assert_eq!(red(&pixmap, 78, 50), 0);
        // border stays inside the box
        assert_eq!(red(&pixmap, 18, 50), 255);
        assert_eq!(red(&pixmap, 81, 50), 255);
    }

    #[test]
    fn thick_border_is_filled_test() {
        let mut pixmap = canvas();
        let dim = RectDim::new(10., 60., 20., 0);
        Rectangle::new(20., 20., dim, false, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity())
            .unwrap();
        assert_eq!(red(&pixmap, 25, 50), 0);
    }

    #[test]
    fn rounded_corners_test() {
        let mut pixmap = canvas();
        let dim = RectDim::new(60., 60., 60., 8);
        Rectangle::new(20., 20., dim, true, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity())
            .unwrap();
        assert_eq!(red(&pixmap, 21, 21), 255);
        assert_eq!(red(&pixmap, 50, 50), 0);
    }

    #[test]
    fn reversed_box_inverts_test() {
        let mut pixmap = canvas();
        let black = RectDim::new(50., 100., 50., 0);
        Rectangle::new(0., 0., black, true, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity())
            .unwrap();

        let band = RectDim::new(100., 20., 20., 0);
        Rectangle::new(0., 40., band, true, Ink::reversed())
            .draw(&mut pixmap, Transform::identity())
            .unwrap();

        assert_eq!(red(&pixmap, 25, 50), 255);
        assert_eq!(red(&pixmap, 75, 50), 0);
        assert_eq!(red(&pixmap, 25, 10), 0);
    }

    #[test]
    fn reversed_hollow_box_inverts_border_only_test() {
        let mut pixmap = canvas();
        let dim = RectDim::new(60., 60., 4., 0);
        Rectangle::new(20., 20., dim, false, Ink::reversed())
            .draw(&mut pixmap, Transform::identity())
            .unwrap();
        assert_eq!(red(&pixmap, 21, 50), 0);
        assert_eq!(red(&pixmap, 50, 50), 255);
    }

    #[test]
    fn zero_sized_box_is_rejected_test() {
        let mut pixmap = canvas();
        let dim = RectDim::new(0., 10., 1., 0);
        let result = Rectangle::new(0., 0., dim, false, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity());
        assert!(matches!(result, Err(RenderError::InvalidShape)));
    }
}
