/*
 *  display/drivers/mock.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Mock display sink for testing without hardware
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

use crate::display::error::DisplayError;
use crate::display::traits::{check_resolution, ColorDepth, DisplayCapabilities, DisplaySink};
use crate::vframebuf::Canvas;

use std::sync::{Arc, Mutex, MutexGuard};

/// Mock sink for testing
///
/// Records every staged frame and how often the panel was refreshed. State is
/// shared behind an `Arc<Mutex<_>>` so a test can keep a handle after the sink
/// has been boxed and moved into the dashboard.
#[derive(Debug, Clone)]
pub struct MockSink {
    capabilities: DisplayCapabilities,
    state: Arc<Mutex<MockSinkState>>,
}

/// Internal state for the mock sink (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockSinkState {
    /// Number of successful set_image() calls
    pub set_image_count: usize,

    /// Number of successful show() calls
    pub show_count: usize,

    /// Frame currently staged
    pub staged: Option<Canvas>,

    /// Last frame pushed by show()
    pub shown: Option<Canvas>,

    /// Simulate failures (for error testing)
    pub simulate_set_image_failure: bool,
    pub simulate_show_failure: bool,
}

impl MockSink {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            capabilities: DisplayCapabilities {
                width,
                height,
                color_depth: ColorDepth::Rgb888,
                name: "mock".to_string(),
            },
            state: Arc::new(Mutex::new(MockSinkState::default())),
        }
    }

    /// Get reference to state for inspection in tests
    pub fn state(&self) -> Arc<Mutex<MockSinkState>> {
        Arc::clone(&self.state)
    }

    fn lock(&self) -> Result<MutexGuard<'_, MockSinkState>, DisplayError> {
        self.state
            .lock()
            .map_err(|_| DisplayError::Other("mock sink state poisoned".to_string()))
    }
}

impl DisplaySink for MockSink {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn set_image(&mut self, image: &Canvas) -> Result<(), DisplayError> {
        check_resolution(&self.capabilities, image)?;
        let mut state = self.lock()?;
        if state.simulate_set_image_failure {
            return Err(DisplayError::Other("Simulated set_image failure".to_string()));
        }
        state.staged = Some(image.clone());
        state.set_image_count += 1;
        Ok(())
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        let mut state = self.lock()?;
        if state.simulate_show_failure {
            return Err(DisplayError::Other("Simulated show failure".to_string()));
        }
        let frame = state.staged.clone().ok_or(DisplayError::NoImage)?;
        state.shown = Some(frame);
        state.show_count += 1;
        Ok(())
    }
}
