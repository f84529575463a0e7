//! # Moon Tracker Application Entry Point
//!
//! This binary builds one immutable phase snapshot for the host's local
//! calendar date and renders it to stdout. All calculation lives in the
//! library; the binary owns only argument parsing, configuration, and
//! the process exit code.


use anyhow::Context;
use std::env;

use moon_clock_lib::{config::Config, renderer, Engine};

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    // --no-art suppresses the shaded moon for plain terminals and cron mail
    let suppress_art = env::args().any(|arg| arg == "--no-art");

    let mut config = Config::load();
    if suppress_art {
        config.display.show_moon_art = false;
    }

    // One snapshot per run; a fresh run observes a fresh "now"
    let engine = Engine::new().context("failed to compute the moon phase snapshot")?;

    renderer::draw_ascii(&engine, &config);

    Ok(())
}
