use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use life::{DEFAULT_INTERVAL, Glyphs};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(version, about = "Conway's Game of Life on a torus, drawn in the terminal")]
pub struct Args {
    /// TOML file with default settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long)]
    pub cols: Option<usize>,
    /// Pause between frames, in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Draw with `#` and `.` instead of blocks.
    #[arg(long)]
    pub ascii: bool,
    #[arg(long)]
    pub alive: Option<char>,
    #[arg(long)]
    pub dead: Option<char>,
    /// Seed for the initial grid. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Stop after this many frames instead of running until killed.
    #[arg(long)]
    pub generations: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub update_interval_ms: u64,
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub seed: Option<u64>,
    pub generations: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            rows: 32,
            cols: 128,
            update_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            alive_glyph: glyphs.alive,
            dead_glyph: glyphs.dead,
            seed: None,
            generations: None,
        }
    }
}

impl Settings {
    /// Defaults, then the config file named by `args`, then the flags.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply(args);
        if settings.alive_glyph == settings.dead_glyph {
            bail!(
                "alive and dead glyphs must differ, both are {:?}",
                settings.alive_glyph
            );
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn apply(&mut self, args: &Args) {
        if args.ascii {
            (self.alive_glyph, self.dead_glyph) = (Glyphs::ASCII.alive, Glyphs::ASCII.dead);
        }
        self.rows = args.rows.unwrap_or(self.rows);
        self.cols = args.cols.unwrap_or(self.cols);
        self.update_interval_ms = args.interval_ms.unwrap_or(self.update_interval_ms);
        self.alive_glyph = args.alive.unwrap_or(self.alive_glyph);
        self.dead_glyph = args.dead.unwrap_or(self.dead_glyph);
        self.seed = args.seed.or(self.seed);
        self.generations = args.generations.or(self.generations);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            alive: self.alive_glyph,
            dead: self.dead_glyph,
        }
    }
}
