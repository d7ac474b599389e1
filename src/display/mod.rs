/*
 *  display/mod.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display sink subsystem
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

// Core trait definitions
pub mod traits;
pub mod error;
pub mod framebuffer;
pub mod factory;

// Sink implementations
pub mod drivers;

// Re-exports for convenience
pub use traits::{DisplaySink, DisplayCapabilities, ColorDepth};
pub use error::{DisplayError, DisplayFactoryError};
pub use framebuffer::to_packed_bytes;
pub use factory::{DisplaySinkFactory, BoxedSink};
pub use drivers::{device::DeviceSink, mock::MockSink};
