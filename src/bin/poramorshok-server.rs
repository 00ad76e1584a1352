// ABOUTME: Local single-user HTTP server exposing the health assistant controllers as a JSON API
// ABOUTME: Loads environment configuration, wires the application context and serves axum routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

#![recursion_limit = "256"]

//! # Poramorshok Server Binary
//!
//! Starts the HTTP API consumed by the browser front end. Binds to
//! `127.0.0.1:8088` unless overridden by flags or environment.

use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use poramorshok::{config::AppConfig, context::AppContext, logging, routes::build_router};
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "poramorshok-server")]
#[command(about = "Poramorshok - local health assistant HTTP API")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = AppConfig::from_env()?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    info!("Starting Poramorshok server");
    info!("{}", config.summary());

    let addr = config.http.socket_addr();
    let context = Arc::new(AppContext::from_config(config)?);

    // Refresh cached advice whenever the active language changes
    let language_watcher = context.tracker().watch_language();

    display_available_endpoints(&addr.to_string());

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    let served = axum::serve(listener, build_router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    language_watcher.abort();
    if let Err(e) = served {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(addr: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:        GET  http://{addr}/health");
    info!("   Language:      GET|PUT http://{addr}/api/language");
    info!("   Toggle:        POST http://{addr}/api/language/toggle");
    info!("   Tracker:       GET  http://{addr}/api/tracker");
    info!("   Profile age:   PUT  http://{addr}/api/tracker/age");
    info!("   Entries:       POST|DELETE http://{addr}/api/tracker/entries");
    info!("   Advice:        POST http://{addr}/api/tracker/advice");
    info!("   Chat:          GET|POST|DELETE http://{addr}/api/chat");
    info!("   Diet plan:     POST http://{addr}/api/diet-plan");
    info!("   Diet export:   POST http://{addr}/api/diet-plan/export");
    info!("   Exercise plan: POST http://{addr}/api/exercise-plan");
    info!("   Fun fact:      GET  http://{addr}/api/fun-fact");
    info!("=== End of Endpoint List ===");
}
