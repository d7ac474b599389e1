/*
 *  display/traits.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Core trait definitions for display sink abstraction
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

use serde::{Deserialize, Serialize};

use crate::display::error::DisplayError;
use crate::vframebuf::Canvas;

/// Pixel format a sink expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorDepth {
    /// 1 bit per pixel, set bit = ink
    Monochrome,

    /// 7-colour e-paper, one nibble per pixel
    Palette7,

    /// 24-bit RGB, three bytes per pixel
    Rgb888,
}

impl ColorDepth {
    /// Bytes needed for one `width` x `height` frame.
    pub fn frame_bytes(&self, width: u32, height: u32) -> usize {
        let (w, h) = (width as usize, height as usize);
        match self {
            ColorDepth::Monochrome => w.div_ceil(8) * h,
            ColorDepth::Palette7 => w.div_ceil(2) * h,
            ColorDepth::Rgb888 => w * h * 3,
        }
    }
}

/// Display capabilities and metadata
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCapabilities {
    /// Panel width in pixels
    pub width: u32,

    /// Panel height in pixels
    pub height: u32,

    /// Wire pixel format
    pub color_depth: ColorDepth,

    /// Human readable sink name for logs
    pub name: String,
}

/// Anything that accepts a finished dashboard bitmap.
///
/// `set_image` stages a frame, `show` pushes the staged frame to the panel.
/// The renderer sizes its canvas from `resolution()`.
pub trait DisplaySink: Send {
    /// Returns the capabilities of this sink
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the native resolution as (width, height)
    fn resolution(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Stage a frame. Fails if the canvas does not match the resolution.
    fn set_image(&mut self, image: &Canvas) -> Result<(), DisplayError>;

    /// Push the staged frame to the hardware.
    fn show(&mut self) -> Result<(), DisplayError>;
}

/// Shared size check for `set_image` implementations.
pub fn check_resolution(caps: &DisplayCapabilities, image: &Canvas) -> Result<(), DisplayError> {
    let got = (image.width() as u32, image.height() as u32);
    if got != (caps.width, caps.height) {
        return Err(DisplayError::ResolutionMismatch {
            expected: (caps.width, caps.height),
            actual: got,
        });
    }
    Ok(())
}
