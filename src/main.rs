/*
 *  main.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Weather dashboard for e-ink panels
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

use env_logger::Env;
use log::{error, info};

use tokio::signal::unix::{signal, SignalKind};

use wxpanel::config;
use wxpanel::dashboard::Dashboard;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Resolves on the first SIGINT, SIGTERM or SIGHUP.
async fn signal_handler() -> Result<(), Box<dyn std::error::Error>> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
        _ = sighup.recv() => {
            info!("SIGHUP received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = config::load()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log_level.as_str()))
        .format_timestamp_secs()
        .init();

    info!("This {} weather at a glance", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let mut dashboard = Dashboard::new(&settings)?;
    let r = dashboard.renderer().settings();
    info!(
        "{}x{} {:?} theme, {} forecast cards, output {}",
        r.width, r.height, r.theme, r.forecast_days, r.output.display()
    );

    if settings.once || settings.preview {
        let report = dashboard.run_cycle().await;
        if !report.saved {
            error!("Dashboard image was not written");
            std::process::exit(1);
        }
        return Ok(());
    }

    info!("Updating every {} minutes", settings.interval.as_secs() / 60);
    tokio::select! {
        _ = signal_handler() => {}
        _ = async {
            loop {
                dashboard.run_cycle().await;
                tokio::time::sleep(settings.interval).await;
            }
        } => {}
    }

    info!("{} stopped after {} updates", env!("CARGO_PKG_NAME"), dashboard.update_count());
    Ok(())
}
