/*
 *  display/drivers/device.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Device sink: packs frames and writes them to a device node or file
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

use log::{debug, info};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::display::error::DisplayError;
use crate::display::framebuffer::to_packed_bytes;
use crate::display::traits::{check_resolution, ColorDepth, DisplayCapabilities, DisplaySink};
use crate::vframebuf::Canvas;

/// Writes packed frames to a character device (or plain file) on `show()`.
///
/// Panel controllers exposed through a kernel framebuffer or a userspace
/// e-paper daemon accept one whole frame per write.
#[derive(Debug)]
pub struct DeviceSink {
    capabilities: DisplayCapabilities,
    path: PathBuf,
    staged: Option<Vec<u8>>,
}

impl DeviceSink {
    pub fn new(path: &Path, width: u32, height: u32, color_depth: ColorDepth) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidConfiguration("device resolution must be non-zero".into()));
        }
        info!("Device sink {} ({}x{}, {:?})", path.display(), width, height, color_depth);
        Ok(Self {
            capabilities: DisplayCapabilities {
                width,
                height,
                color_depth,
                name: path.display().to_string(),
            },
            path: path.to_path_buf(),
            staged: None,
        })
    }
}

impl DisplaySink for DeviceSink {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn set_image(&mut self, image: &Canvas) -> Result<(), DisplayError> {
        check_resolution(&self.capabilities, image)?;
        let bytes = to_packed_bytes(image, self.capabilities.color_depth);
        let expected = self.capabilities.color_depth.frame_bytes(self.capabilities.width, self.capabilities.height);
        if bytes.len() != expected {
            return Err(DisplayError::BufferSizeMismatch { expected, actual: bytes.len() });
        }
        self.staged = Some(bytes);
        Ok(())
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        let bytes = self.staged.as_ref().ok_or(DisplayError::NoImage)?;
        let mut dev = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        dev.write_all(bytes)?;
        dev.flush()?;
        debug!("wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wxpanel-dev-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_device_writes_packed_frame() {
        let path = scratch("mono");
        let mut sink = DeviceSink::new(&path, 16, 2, ColorDepth::Monochrome).unwrap();
        let mut frame = Canvas::new(16, 2, Rgb888::WHITE);
        frame.set_pixel(0, 0, Rgb888::BLACK);

        sink.set_image(&frame).unwrap();
        sink.show().unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), 4);
        assert_eq!(written[0], 0x80);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_device_show_requires_image() {
        let mut sink = DeviceSink::new(&scratch("none"), 4, 4, ColorDepth::Rgb888).unwrap();
        assert!(matches!(sink.show(), Err(DisplayError::NoImage)));
    }

    #[test]
    fn test_device_unwritable_path() {
        let mut sink = DeviceSink::new(Path::new("/nonexistent/dir/fb0"), 2, 2, ColorDepth::Rgb888).unwrap();
        sink.set_image(&Canvas::new(2, 2, Rgb888::WHITE)).unwrap();
        assert!(matches!(sink.show(), Err(DisplayError::Io(_))));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(DeviceSink::new(Path::new("/tmp/x"), 0, 480, ColorDepth::Rgb888).is_err());
    }
}
