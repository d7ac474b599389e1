/*
 *  display/factory.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Factory for creating display sinks from configuration
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

use crate::config::{DisplaySettings, SinkKind};
use crate::display::drivers::{device::DeviceSink, mock::MockSink};
use crate::display::error::DisplayFactoryError;
use crate::display::traits::DisplaySink;
use log::info;

/// Type alias for boxed display sink trait objects
pub type BoxedSink = Box<dyn DisplaySink>;

/// Factory for creating display sinks from configuration
pub struct DisplaySinkFactory;

impl DisplaySinkFactory {
    /// Create the sink named by `settings.sink`.
    ///
    /// Returns `Ok(None)` for `SinkKind::None`: the dashboard then only writes
    /// its image file.
    pub fn create_from_settings(
        settings: &DisplaySettings
    ) -> Result<Option<BoxedSink>, DisplayFactoryError> {
        match settings.sink {
            SinkKind::None => {
                info!("No display sink configured, writing {} only", settings.output.display());
                Ok(None)
            }
            SinkKind::Mock => {
                info!("Using mock display sink {}x{}", settings.width, settings.height);
                Ok(Some(Box::new(MockSink::new(settings.width, settings.height))))
            }
            SinkKind::Device => {
                let path = settings.device.as_ref()
                    .ok_or(DisplayFactoryError::NoDevicePath)?;
                let sink = DeviceSink::new(path, settings.width, settings.height, settings.color_depth)?;
                Ok(Some(Box::new(sink)))
            }
        }
    }
}
