//! Raster export using resvg/usvg.
//!
//! Documents are serialized, parsed back by usvg and drawn into a
//! tiny-skia pixmap at a chosen scale. The result is converted to an
//! `image::RgbaImage` so it can be encoded with the `image` crate.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{self, Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::svg::Document;

/// Settings for [`rasterize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Pixels per document unit.
    pub scale: f32,

    /// Opaque fill drawn under the figure. `None` keeps the background
    /// transparent.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: None,
        }
    }
}

impl RasterOptions {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }
}

/// Draws a document into an RGBA image.
///
/// The image is `ceil(width * scale)` by `ceil(height * scale)` pixels.
pub fn rasterize(document: &Document, options: &RasterOptions) -> Result<RgbaImage> {
    let tree = Tree::from_str(&document.to_svg(), &Options::default())?;

    let viewport = document.viewport();
    let scale = options.scale;
    let width = (viewport.width as f32 * scale).ceil() as u32;
    let height = (viewport.height as f32 * scale).ceil() as u32;
    log::debug!(
        "rasterizing {}x{} document at {}x to {}x{}",
        viewport.width,
        viewport.height,
        scale,
        width,
        height
    );

    let mut pixmap = Pixmap::new(width, height).ok_or(Error::PixmapSize { width, height })?;
    if let Some(background) = options.background {
        let (r, g, b) = background.rgb();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    }
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Rasterizes a document and encodes it as PNG.
pub fn render_png(document: &Document, options: &RasterOptions) -> Result<Vec<u8>> {
    encode_png(&rasterize(document, options)?)
}

fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();

    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let pixel = pixels[(y * width + x) as usize];
        // tiny-skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        Rgba([r, g, b, a])
    })
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        return (0, 0, 0, 0);
    }
    let alpha = a as f32 / 255.0;
    let channel = |c: u8| (c as f32 / alpha).round().min(255.0) as u8;
    (channel(r), channel(g), channel(b), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::compose;
    use crate::config::Configuration;

    #[test]
    fn image_is_scaled_viewport() {
        let doc = compose(&Configuration::default());
        let image = rasterize(&doc, &RasterOptions::default()).unwrap();
        assert_eq!(image.width(), 460);
        assert_eq!(image.height(), 446);
    }

    #[test]
    fn figure_is_drawn_on_transparent_background() {
        let doc = compose(&Configuration::default());
        let image = rasterize(&doc, &RasterOptions::default().with_scale(1.0)).unwrap();

        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert!(image.get_pixel(115, 150)[3] > 0);
    }

    #[test]
    fn background_fills_corners() {
        let doc = compose(&Configuration::default());
        let options = RasterOptions::default()
            .with_scale(0.5)
            .with_background(Some(Color::from_hex(0xFFFFFF)));
        let image = rasterize(&doc, &options).unwrap();
        assert_eq!(image.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let doc = compose(&Configuration::default());
        let err = rasterize(&doc, &RasterOptions::default().with_scale(0.0)).unwrap_err();
        assert!(matches!(err, Error::PixmapSize { width: 0, height: 0 }));
    }

    #[test]
    fn png_has_signature() {
        let doc = compose(&Configuration::new().with_legs(true));
        let png = render_png(&doc, &RasterOptions::default().with_scale(0.25)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn unpremultiply_restores_color() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(51, 17, 0, 51), (255, 85, 0, 51));
        assert_eq!(unpremultiply(10, 20, 30, 255), (10, 20, 30, 255));
    }
}
