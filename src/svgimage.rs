//! Rasterizes SVG weather icons onto the dashboard canvas.
//!
//! This module uses `usvg` for SVG parsing and `resvg` for rendering into an
//! RGBA `tiny_skia::Pixmap`, which is then alpha-blended over the RGB canvas.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::Point;
use resvg::{
    render,
    usvg::{
        Tree as ResvgTree,
        Options as ResvgUsvgOptions,
        Transform,
    }
}; // Use resvg's re-exports for usvg types
use tiny_skia::Pixmap;
use log::debug;
use thiserror::Error;

use crate::vframebuf::Canvas;

/// Icon strokes/fills written as this token take the theme ink colour.
pub const TINT_TOKEN: &str = "currentColor";
/// Fills written in pure white take the theme background colour.
pub const PAPER_TOKEN: &str = "#ffffff";

/// Custom error type for SVG rendering operations.
#[derive(Debug, Error)]
pub enum SvgImageError {
    #[error("SVG parse error: {0}")]
    SvgParseError(String),
    #[error("Pixmap creation error: {0}")]
    PixmapCreationError(String),
    #[error("SVG has no drawable area")]
    EmptyImage,
}

/// Renders SVG data scaled to fit a target box, aspect preserved.
#[derive(Debug)]
pub struct SvgImageRenderer {
    tree: ResvgTree,
    target_width: u32,
    target_height: u32,
}

impl SvgImageRenderer {
    pub fn new(svg_data: &str, target_width: u32, target_height: u32) -> Result<Self, SvgImageError> {
        let usvg_options = ResvgUsvgOptions::default();
        let tree = ResvgTree::from_str(svg_data, &usvg_options)
            .map_err(|e| SvgImageError::SvgParseError(format!("Failed to parse SVG: {:?}", e)))?;
        Ok(SvgImageRenderer {
            tree,
            target_width,
            target_height,
        })
    }

    /// Same as `new` with the ink and paper tokens swapped for theme colours.
    pub fn tinted(
        svg_data: &str,
        target_width: u32,
        target_height: u32,
        ink: Rgb888,
        paper: Rgb888,
    ) -> Result<Self, SvgImageError> {
        let data = svg_data
            .replace(PAPER_TOKEN, &hex(paper))
            .replace(TINT_TOKEN, &hex(ink));
        Self::new(&data, target_width, target_height)
    }

    pub fn render_pixmap(&self) -> Result<Pixmap, SvgImageError> {
        let mut pixmap = Pixmap::new(self.target_width, self.target_height)
            .ok_or_else(|| SvgImageError::PixmapCreationError(format!(
                "{}x{}", self.target_width, self.target_height
            )))?;

        let svg_size = self.tree.size();
        if svg_size.width() <= 0.0 || svg_size.height() <= 0.0 {
            return Err(SvgImageError::EmptyImage);
        }

        // uniform scale, centred in the target box
        let (tw, th) = (self.target_width as f32, self.target_height as f32);
        let scale = (tw / svg_size.width()).min(th / svg_size.height());
        let dx = (tw - svg_size.width() * scale) / 2.0;
        let dy = (th - svg_size.height() * scale) / 2.0;
        let transform = Transform::from_row(scale, 0.0, 0.0, scale, dx, dy);

        render(&self.tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }

    pub fn draw(&self, canvas: &mut Canvas, top_left: Point) -> Result<(), SvgImageError> {
        let pixmap = self.render_pixmap()?;
        blend_pixmap(canvas, &pixmap, top_left);
        debug!("SVG {}x{} blended at {:?}", self.target_width, self.target_height, top_left);
        Ok(())
    }
}

/// Source-over composite of a premultiplied pixmap onto the canvas.
pub fn blend_pixmap(canvas: &mut Canvas, pixmap: &Pixmap, top_left: Point) {
    let w = pixmap.width() as usize;
    if w == 0 {
        return;
    }
    for (i, p) in pixmap.pixels().iter().enumerate() {
        let a = p.alpha();
        if a == 0 {
            continue;
        }
        let x = top_left.x + (i % w) as i32;
        let y = top_left.y + (i / w) as i32;
        let Some(dst) = canvas.pixel(x, y) else { continue };
        let inv = 255 - u16::from(a);
        let mix = |s: u8, d: u8| (u16::from(s) + (u16::from(d) * inv + 127) / 255).min(255) as u8;
        let out = Rgb888::new(mix(p.red(), dst.r()), mix(p.green(), dst.g()), mix(p.blue(), dst.b()));
        canvas.set_pixel(x, y, out);
    }
}

fn hex(c: Rgb888) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
