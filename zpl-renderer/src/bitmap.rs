use tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};
use zpl_interpreter::MonochromeBitmap;

use crate::{Drawable, Ink, error::RenderError};

/// A monochrome bitmap where every set pixel is painted in the ink color and
/// the rest is left untouched.
#[derive(Debug)]
pub(crate) struct Bitmap<'a> {
    x: f32,
    y: f32,
    bitmap: &'a MonochromeBitmap,
    scale_x: f32,
    scale_y: f32,
    ink: Ink,
}

impl<'a> Bitmap<'a> {
    pub(crate) fn new(x: f32, y: f32, bitmap: &'a MonochromeBitmap, ink: Ink) -> Self {
        Self {
            x,
            y,
            bitmap,
            scale_x: 1.,
            scale_y: 1.,
            ink,
        }
    }

    /// Dots covered by a single bitmap pixel.
    pub(crate) fn scaled(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    fn to_pixmap(&self) -> Result<Pixmap, RenderError> {
        let size = IntSize::from_wh(self.bitmap.width as u32, self.bitmap.height as u32)
            .ok_or(RenderError::InvalidShape)?;
        let color = self.ink.color.premultiply().to_color_u8();
        let mut data = Vec::with_capacity(self.bitmap.pixels.len() * 4);
        for &pixel in &self.bitmap.pixels {
            if pixel == 1 {
                data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
            } else {
                data.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
        Pixmap::from_vec(data, size).ok_or(RenderError::InvalidShape)
    }
}

impl Drawable for Bitmap<'_> {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        let pixmap = self.to_pixmap()?;
        let transform = transform
            .pre_translate(self.x, self.y)
            .pre_scale(self.scale_x, self.scale_y);

        target.draw_pixmap(
            0,
            0,
            pixmap.as_ref(),
            &PixmapPaint {
                blend_mode: self.ink.blend_mode,
                quality: FilterQuality::Nearest,
                ..Default::default()
            },
            transform,
            None,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tiny_skia::Color;

    use super::*;

    fn checker() -> MonochromeBitmap {
        MonochromeBitmap {
            width: 2,
            height: 2,
            pixels: vec![1, 0, 0, 1],
        }
    }

    fn white_canvas() -> Pixmap {
        let mut pixmap = Pixmap::new(10, 10).unwrap();
        pixmap.fill(Color::WHITE);
        pixmap
    }

    #[test]
    fn draws_set_pixels_only_test() {
        let bitmap = checker();
        let mut pixmap = white_canvas();
        Bitmap::new(2., 2., &bitmap, Ink::solid(Color::BLACK))
            .draw(&mut pixmap, Transform::identity())
            .unwrap();

        assert_eq!(pixmap.pixel(2, 2).unwrap().red(), 0);
        assert_eq!(pixmap.pixel(3, 2).unwrap().red(), 255);
        assert_eq!(pixmap.pixel(3, 3).unwrap().red(), 0);
        assert_eq!(pixmap.pixel(1, 1).unwrap().red(), 255);
    }

    #[test]
    fn scaled_test() {
        let bitmap = checker();
        let mut pixmap = white_canvas();
        Bitmap::new(0., 0., &bitmap, Ink::solid(Color::BLACK))
            .scaled(3., 3.)
            .draw(&mut pixmap, Transform::identity())
            .unwrap();

        assert_eq!(pixmap.pixel(1, 1).unwrap().red(), 0);
        assert_eq!(pixmap.pixel(4, 1).unwrap().red(), 255);
        assert_eq!(pixmap.pixel(4, 4).unwrap().red(), 0);
    }

    #[test]
    fn reversed_inverts_background_test() {
        let bitmap = MonochromeBitmap {
            width: 1,
            height: 1,
            pixels: vec![1],
        };
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        pixmap.fill(Color::BLACK);
        Bitmap::new(1., 1., &bitmap, Ink::reversed())
            .draw(&mut pixmap, Transform::identity())
            .unwrap();

        assert_eq!(pixmap.pixel(1, 1).unwrap().red(), 255);
        assert_eq!(pixmap.pixel(0, 0).unwrap().red(), 0);
    }
}
