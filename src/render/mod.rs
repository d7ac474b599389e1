/*
 *  render/mod.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Dashboard renderer
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

//! Turns a [`DashboardData`] into a full-panel [`Canvas`].
//!
//! Sections draw in a fixed order onto a canvas cleared to the theme
//! background. Any section failure throws the whole canvas away and the
//! error panel is drawn instead, so a sink never receives half a dashboard.

pub mod theme;
pub mod layout;
pub mod text;
pub mod header;
pub mod current;
pub mod details;
pub mod timeline;
pub mod forecast_row;
pub mod error_panel;

use core::convert::Infallible;
use chrono::{Local, NaiveDateTime};
use embedded_graphics::prelude::*;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::{debug, error, warn};
use thiserror::Error;

use crate::config::DisplaySettings;
use crate::icons::IconSet;
use crate::models::DashboardData;
use crate::svgimage::SvgImageRenderer;
use crate::vframebuf::Canvas;

pub use layout::{Layout, LayoutError};
pub use theme::Theme;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("layout does not fit: {0}")]
    Geometry(String),
}

impl From<Infallible> for RenderError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

#[derive(Debug)]
pub struct Renderer {
    settings: DisplaySettings,
    layout: Layout,
    icons: IconSet,
}

impl Renderer {
    pub fn new(settings: DisplaySettings) -> Result<Self, LayoutError> {
        let layout = Layout::for_resolution(settings.width, settings.height)?;
        let icons = IconSet::new(settings.icons_dir.clone());
        Ok(Self { settings, layout, icons })
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// `None` draws the error panel.
    pub fn render(&self, data: Option<&DashboardData>) -> Canvas {
        self.render_at(data, Local::now().naive_local())
    }

    /// As [`Renderer::render`] with the error-panel timestamp supplied.
    pub fn render_at(&self, data: Option<&DashboardData>, now: NaiveDateTime) -> Canvas {
        let Some(data) = data else {
            return self.error_panel(error_panel::DEFAULT_MESSAGE, now);
        };
        match self.try_render(data) {
            Ok(canvas) => canvas,
            Err(e) => {
                error!("Render failed: {}", e);
                self.error_panel(&format!("Render failed: {e}"), now)
            }
        }
    }

    pub fn try_render(&self, data: &DashboardData) -> Result<Canvas, RenderError> {
        let mut canvas = Canvas::new(self.layout.width, self.layout.height, self.theme().background());

        header::draw(self, &mut canvas, data)?;
        current::draw(self, &mut canvas, data)?;
        details::draw(self, &mut canvas, data)?;
        timeline::draw(self, &mut canvas, data)?;
        forecast_row::draw(self, &mut canvas, data)?;
        header::draw_footer(self, &mut canvas, data)?;

        debug!("Rendered {} for {}", self.theme_name(), data.current.location());
        Ok(canvas)
    }

    pub fn error_panel(&self, message: &str, now: NaiveDateTime) -> Canvas {
        let mut canvas = Canvas::new(self.layout.width, self.layout.height, theme::palette::WHITE);
        let Ok(()) = error_panel::draw(&mut canvas, &self.layout, self.theme(), message, now);
        canvas
    }

    /// Rasterise an SVG into `bounds`, or outline the box when the asset is
    /// missing or unreadable.
    pub(crate) fn draw_icon(
        &self,
        canvas: &mut Canvas,
        svg: Option<String>,
        bounds: Rectangle,
        ink: Rgb888,
    ) -> Result<(), RenderError> {
        if let Some(data) = svg {
            let drawn = SvgImageRenderer::tinted(
                &data,
                bounds.size.width,
                bounds.size.height,
                ink,
                self.theme().background(),
            )
            .and_then(|svg| svg.draw(canvas, bounds.top_left));
            match drawn {
                Ok(()) => return Ok(()),
                Err(e) => warn!("Icon render failed: {}", e),
            }
        }
        bounds
            .into_styled(PrimitiveStyle::with_stroke(self.theme().muted(), 1))
            .draw(canvas)?;
        Ok(())
    }

    fn theme_name(&self) -> &'static str {
        match self.theme() {
            Theme::Color => "color",
            Theme::Mono => "mono",
            Theme::Dark => "dark",
        }
    }
}
