/*
 *  vframebuf.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Runtime-sized framebuffer and the RGB canvas the dashboard is drawn on
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{PixelColor, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use std::path::Path;
use thiserror::Error;
use tiny_skia::{Pixmap, PremultipliedColorU8};

/// A runtime-sized framebuffer for embedded-graphics.
#[derive(Debug, Clone, PartialEq)]
pub struct VarFrameBuf<C: PixelColor> {
    buf: Vec<C>,
    w: usize,
    h: usize,
}

/// The dashboard canvas.
pub type Canvas = VarFrameBuf<Rgb888>;

impl<C: PixelColor + Clone> VarFrameBuf<C> {
    pub fn new(width: u32, height: u32, fill: C) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![fill; w * h], w, h }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    pub fn as_mut_slice(&mut self) -> &mut [C] { &mut self.buf }
    pub fn as_slice(&self) -> &[C] { &self.buf }

    pub fn clear_color(&mut self, color: C) {
        self.buf.fill(color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<C> {
        self.idx(Point::new(x, y)).map(|i| self.buf[i])
    }

    /// Returns false when (x,y) is off the buffer.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: C) -> bool {
        match self.idx(Point::new(x, y)) {
            Some(i) => { self.buf[i] = color; true }
            None => false,
        }
    }

    /// Map (x,y) to linear index; returns None if out of bounds
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl<C: PixelColor + PartialEq> VarFrameBuf<C> {
    pub fn count(&self, color: C) -> usize {
        self.buf.iter().filter(|&&c| c == color).count()
    }
}

impl<C: PixelColor> OriginDimensions for VarFrameBuf<C> {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl<C: PixelColor + Clone> DrawTarget for VarFrameBuf<C> {
    type Color = C;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = self.idx(p) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clear_color(color);
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // colors arrive row-major over the whole area; clip per pixel
        let Size { width, height } = area.size;
        if width == 0 || height == 0 { return Ok(()); }
        let mut it = colors.into_iter();
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                let Some(c) = it.next() else { return Ok(()) };
                if let Some(i) = self.idx(area.top_left + Point::new(col, row)) {
                    self.buf[i] = c;
                }
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() { return Ok(()); }
        let x0 = clipped.top_left.x as usize;
        let w = clipped.size.width as usize;
        for y in clipped.top_left.y as usize..clipped.top_left.y as usize + clipped.size.height as usize {
            let base = y * self.w + x0;
            self.buf[base..base + w].fill(color);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("cannot allocate a {0}x{1} pixmap")]
    Pixmap(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Canvas {
    /// Opaque RGBA copy for tiny-skia.
    pub fn to_pixmap(&self) -> Result<Pixmap, CanvasError> {
        let (w, h) = (self.w as u32, self.h as u32);
        let mut pixmap = Pixmap::new(w, h).ok_or(CanvasError::Pixmap(w, h))?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(self.buf.iter()) {
            if let Some(p) = PremultipliedColorU8::from_rgba(src.r(), src.g(), src.b(), 255) {
                *dst = p;
            }
        }
        Ok(pixmap)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.to_pixmap()?
            .encode_png()
            .map_err(|e| CanvasError::Encode(e.to_string()))
    }

    /// Write via a temp file so a reader never sees a half-written image.
    pub fn save_png(&self, path: &Path) -> Result<(), CanvasError> {
        let bytes = self.encode_png()?;
        let tmp = path.with_extension("png.tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
