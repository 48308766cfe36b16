use std::{
    io::Write,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use log::info;

use crate::{Glyphs, LifeError, LifeGrid};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// Shared flag that ends a running [`Driver`] at the next frame boundary.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Renders, steps and sleeps in a loop.
#[derive(Debug)]
pub struct Driver {
    grid: Option<LifeGrid>,
    interval: Duration,
    glyphs: Glyphs,
    max_generations: Option<u64>,
}

impl Driver {
    pub fn new(interval: Duration, glyphs: Glyphs) -> Self {
        Self {
            grid: None,
            interval,
            glyphs,
            max_generations: None,
        }
    }

    pub fn with_grid(mut self, grid: LifeGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn set_grid(&mut self, grid: LifeGrid) {
        self.grid = Some(grid);
    }

    pub fn grid(&self) -> Option<&LifeGrid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut LifeGrid> {
        self.grid.as_mut()
    }

    pub fn update_interval(&self) -> Duration {
        self.interval
    }

    pub fn set_update_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Caps the number of frames `start` renders. `None` runs until stopped.
    pub fn set_max_generations(&mut self, max_generations: Option<u64>) {
        self.max_generations = max_generations;
    }

    /// Draws the current generation, advances it and waits out the frame
    /// interval until `stop` fires or the generation cap is hit. Returns the
    /// number of frames drawn.
    pub fn start<W: Write + ?Sized>(&mut self, w: &mut W, stop: &StopToken) -> Result<u64, LifeError> {
        let Some(grid) = self.grid.as_mut() else {
            return Err(LifeError::NoInitialState);
        };
        info!(
            "starting {}x{} simulation at {:?} per frame",
            grid.rows(),
            grid.cols(),
            self.interval
        );
        let mut frames = 0;
        while !stop.is_stopped() && self.max_generations.is_none_or(|max| frames < max) {
            grid.print(w, self.glyphs)?;
            grid.step();
            frames += 1;
            thread::sleep(self.interval);
        }
        info!("stopped after {frames} frames at generation {}", grid.generation());
        Ok(frames)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL, Glyphs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CLEAR;
    use std::{str::FromStr, time::Instant};

    fn blinker() -> LifeGrid {
        LifeGrid::from_str(
            "
            .....
            .....
            .###.
            .....
            .....",
        )
        .unwrap()
    }

    #[test]
    fn test_no_initial_state() {
        let mut driver = Driver::new(Duration::ZERO, Glyphs::ASCII);
        let err = driver.start(&mut Vec::<u8>::new(), &StopToken::new()).unwrap_err();
        assert!(matches!(err, LifeError::NoInitialState));

        driver.set_grid(blinker());
        driver.grid_mut().unwrap().clear();
        driver.set_max_generations(Some(1));
        let mut out = Vec::<u8>::new();
        assert_eq!(driver.start(&mut out, &StopToken::new()).unwrap(), 1);
        assert_eq!(out, format!("{CLEAR}.....\n.....\n.....\n.....\n.....\n").into_bytes());
    }

    #[test]
    fn test_generation_cap() {
        let mut driver = Driver::new(Duration::ZERO, Glyphs::ASCII).with_grid(blinker());
        driver.set_max_generations(Some(3));
        let mut out = Vec::<u8>::new();
        let frames = driver.start(&mut out, &StopToken::new()).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(driver.grid().unwrap().generation(), 3);
        let out = String::from_utf8(out).unwrap();
        let drawn = out.split(CLEAR).filter(|f| !f.is_empty()).collect::<Vec<_>>();
        assert_eq!(drawn.len(), 3);
        // Period 2: the first and third frames match.
        assert_eq!(drawn[0], drawn[2]);
        assert_ne!(drawn[0], drawn[1]);
    }

    #[test]
    fn test_update_interval() {
        let mut driver = Driver::new(Duration::ZERO, Glyphs::ASCII).with_grid(blinker());
        driver.set_max_generations(Some(2));
        driver.start(&mut std::io::sink(), &StopToken::new()).unwrap();

        let interval = Duration::from_millis(15);
        driver.set_update_interval(interval);
        assert_eq!(driver.update_interval(), interval);
        let started = Instant::now();
        assert_eq!(driver.start(&mut std::io::sink(), &StopToken::new()).unwrap(), 2);
        // Each frame sleeps for the interval after drawing.
        assert!(started.elapsed() >= 2 * interval);
        assert_eq!(driver.grid().unwrap().generation(), 4);
    }

    #[test]
    fn test_stopped_token() {
        let mut driver = Driver::default().with_grid(blinker());
        let stop = StopToken::new();
        stop.clone().stop();
        let mut out = Vec::<u8>::new();
        assert_eq!(driver.start(&mut out, &stop).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_stop_from_another_thread() {
        let mut driver = Driver::new(Duration::from_millis(1), Glyphs::ASCII).with_grid(blinker());
        let stop = StopToken::new();
        let handle = {
            let stop = stop.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                stop.stop();
            })
        };
        let frames = driver.start(&mut std::io::sink(), &stop).unwrap();
        handle.join().unwrap();
        assert!(frames > 0);
        assert_eq!(driver.grid().unwrap().generation(), frames);
    }
}
