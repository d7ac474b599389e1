/*
 *  display/framebuffer.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Pack the RGB canvas into a sink's wire format
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

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::display::traits::ColorDepth;
use crate::vframebuf::Canvas;

/// Luma below this counts as ink on a monochrome panel.
const MONO_THRESHOLD: u32 = 128;

/// 7-colour e-paper codes (3 bits, one nibble per pixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EpdColor {
    Black = 0b000,
    White = 0b001,
    Green = 0b010,
    Blue = 0b011,
    Red = 0b100,
    Yellow = 0b101,
    Orange = 0b110,
}

const EPD_PALETTE: [(EpdColor, Rgb888); 7] = [
    (EpdColor::Black, Rgb888::new(0, 0, 0)),
    (EpdColor::White, Rgb888::new(255, 255, 255)),
    (EpdColor::Green, Rgb888::new(0, 255, 0)),
    (EpdColor::Blue, Rgb888::new(0, 0, 255)),
    (EpdColor::Red, Rgb888::new(255, 0, 0)),
    (EpdColor::Yellow, Rgb888::new(255, 255, 0)),
    (EpdColor::Orange, Rgb888::new(255, 140, 0)),
];

impl EpdColor {
    /// Nearest palette entry by squared RGB distance.
    pub fn nearest(c: Rgb888) -> Self {
        let dist = |p: Rgb888| {
            let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).pow(2);
            d(c.r(), p.r()) + d(c.g(), p.g()) + d(c.b(), p.b())
        };
        EPD_PALETTE
            .iter()
            .min_by_key(|(_, rgb)| dist(*rgb))
            .map(|(code, _)| *code)
            .unwrap_or(EpdColor::White)
    }
}

fn luma(c: Rgb888) -> u32 {
    (299 * u32::from(c.r()) + 587 * u32::from(c.g()) + 114 * u32::from(c.b())) / 1000
}

/// Convert a canvas to packed bytes for `depth`.
///
/// - Monochrome: rows padded to whole bytes, MSB is the leftmost pixel, set bit = ink
/// - Palette7: two pixels per byte, high nibble first, rows padded
/// - Rgb888: R, G, B per pixel
pub fn to_packed_bytes(canvas: &Canvas, depth: ColorDepth) -> Vec<u8> {
    let (w, h) = (canvas.width(), canvas.height());
    let pixels = canvas.as_slice();
    let mut bytes = vec![0u8; depth.frame_bytes(w as u32, h as u32)];

    match depth {
        ColorDepth::Monochrome => {
            let stride = w.div_ceil(8);
            for (i, &p) in pixels.iter().enumerate() {
                let (x, y) = (i % w, i / w);
                if luma(p) < MONO_THRESHOLD {
                    bytes[y * stride + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        ColorDepth::Palette7 => {
            let stride = w.div_ceil(2);
            // unused trailing nibbles stay white
            if w % 2 == 1 {
                for y in 0..h {
                    bytes[y * stride + stride - 1] = EpdColor::White as u8;
                }
            }
            for (i, &p) in pixels.iter().enumerate() {
                let (x, y) = (i % w, i / w);
                let code = EpdColor::nearest(p) as u8;
                let byte = &mut bytes[y * stride + x / 2];
                if x % 2 == 0 {
                    *byte = (*byte & 0x0F) | (code << 4);
                } else {
                    *byte = (*byte & 0xF0) | code;
                }
            }
        }
        ColorDepth::Rgb888 => {
            for (chunk, p) in bytes.chunks_exact_mut(3).zip(pixels) {
                chunk.copy_from_slice(&[p.r(), p.g(), p.b()]);
            }
        }
    }
    bytes
}
