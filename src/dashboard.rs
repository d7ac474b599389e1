/*
 *  dashboard.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  One fetch, render, save and push cycle
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

use log::{error, info, warn};
use thiserror::Error;

use crate::config::Settings;
use crate::display::{BoxedSink, DisplayFactoryError, DisplaySinkFactory};
use crate::models::DashboardData;
use crate::render::{LayoutError, Renderer};
use crate::sample::sample_dashboard;
use crate::template;
use crate::weather::{WeatherApiError, WeatherClient};

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("weather client: {0}")]
    Weather(#[from] WeatherApiError),
    #[error("display: {0}")]
    Display(#[from] DisplayFactoryError),
}

/// What one cycle managed to do. Failures past the render are logged, not
/// returned, so a bad sink never stops the PNG being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub had_data: bool,
    pub saved: bool,
    pub templated: bool,
    pub pushed: bool,
}

pub struct Dashboard {
    renderer: Renderer,
    /// `None` in preview mode.
    client: Option<WeatherClient>,
    sink: Option<BoxedSink>,
    update_count: u64,
}

impl Dashboard {
    pub fn new(settings: &Settings) -> Result<Self, DashboardError> {
        let sink = DisplaySinkFactory::create_from_settings(&settings.display)?;

        // the sink's native resolution sizes the canvas
        let mut display = settings.display.clone();
        if let Some(s) = sink.as_ref() {
            let (w, h) = s.resolution();
            if (w, h) != (display.width, display.height) {
                warn!("Sink reports {}x{}, overriding {}x{}", w, h, display.width, display.height);
                display.width = w;
                display.height = h;
            }
        }
        let renderer = Renderer::new(display)?;

        let client = if settings.preview {
            info!("Preview mode, using built-in sample data");
            None
        } else {
            Some(WeatherClient::new(settings.weather.clone())?)
        };

        Ok(Self::with_parts(renderer, client, sink))
    }

    pub fn with_parts(renderer: Renderer, client: Option<WeatherClient>, sink: Option<BoxedSink>) -> Self {
        Self { renderer, client, sink, update_count: 0 }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub async fn run_cycle(&mut self) -> CycleReport {
        let data = match self.client.as_ref() {
            Some(client) => client.fetch_dashboard().await,
            None => Some(sample_dashboard()),
        };
        if data.is_none() {
            warn!("No current conditions, drawing the error panel");
        }
        self.publish(data.as_ref())
    }

    /// Render `data` (or the error panel), save it, then push it out.
    pub fn publish(&mut self, data: Option<&DashboardData>) -> CycleReport {
        self.update_count += 1;
        let mut report = CycleReport { had_data: data.is_some(), ..Default::default() };
        let canvas = self.renderer.render(data);
        let display = self.renderer.settings();

        match canvas.save_png(&display.output) {
            Ok(()) => {
                info!("Dashboard #{} saved to {}", self.update_count, display.output.display());
                report.saved = true;
            }
            Err(e) => error!("Failed to save {}: {}", display.output.display(), e),
        }

        if let (Some(tpl), Some(data)) = (display.template.as_ref(), data) {
            match template::render_file(tpl, &display.template_output, data, display.forecast_days) {
                Ok(()) => report.templated = true,
                Err(e) => error!("Template {} failed: {}", tpl.display(), e),
            }
        }

        if let Some(sink) = self.sink.as_mut() {
            let name = sink.capabilities().name.clone();
            match sink.set_image(&canvas).and_then(|()| sink.show()) {
                Ok(()) => {
                    info!("Pushed to {}", name);
                    report.pushed = true;
                }
                Err(e) => error!("Display {} failed: {}", name, e),
            }
        }
        report
    }
}
