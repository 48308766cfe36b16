use std::{
    io::{self, BufWriter},
    thread,
};

use anyhow::Result;
use clap::Parser;
use life::{Driver, LifeGrid, StopToken};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{Args, Settings};

mod config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::resolve(&Args::parse())?;
    info!("{settings:?}");

    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let grid = LifeGrid::new(settings.rows, settings.cols, &mut rng)?;

    let mut driver = Driver::new(settings.interval(), settings.glyphs()).with_grid(grid);
    driver.set_max_generations(settings.generations);

    let stop = StopToken::new();
    stop_on_ctrl_c(stop.clone())?;

    let mut out = BufWriter::new(io::stdout().lock());
    driver.start(&mut out, &stop)?;
    Ok(())
}

/// Fires `stop` on Ctrl+C so the loop ends at a frame boundary and the
/// output buffer is flushed on the way out.
fn stop_on_ctrl_c(stop: StopToken) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    thread::spawn(move || {
        runtime.block_on(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Ctrl+C received, stopping");
                stop.stop();
            }
        });
    });
    Ok(())
}
