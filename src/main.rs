mod assets;
mod canvas;
mod config;
mod ico;
mod png;
mod pwa;

use anyhow::{Context, Result};

fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    // Quiet by default so a run prints only its confirmation line
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let base = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = config::Config::load(&base)?;
    let canvas = config.canvas();

    let written = assets::write_icons(&base.join(&config.output_dir), &canvas)?;

    if config.pwa.enabled {
        let copies = pwa::publish(&written.png, &base.join(&config.pwa.dir))?;
        tracing::info!("Published {} PWA icons", copies.len());
    }

    println!("{}", written.confirmation());
    Ok(())
}
