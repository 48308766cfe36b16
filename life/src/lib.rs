mod driver;
mod error;
mod pattern;
pub mod render;
mod rules;


use log::{debug, trace};
use rand::Rng;

pub use crate::{
    driver::{DEFAULT_INTERVAL, Driver, StopToken},
    error::LifeError,
    render::Glyphs,
    rules::{Cell, count_neighbours},
};

/// Smallest side length for which every cell has a neighbourhood distinct
/// from itself.
pub const MIN_SIDE: usize = 2;

/// A toroidal Life board with a front buffer (the settled generation) and a
/// back buffer (the generation being computed).
#[derive(Clone, Debug)]
pub struct LifeGrid {
    rows: usize,
    cols: usize,
    front: Vec<Cell>,
    back: Vec<Cell>,
    generation: u64,
}

impl LifeGrid {
    /// Allocates a `rows × cols` torus and seeds every cell with a fair coin
    /// flip drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, LifeError> {
        let mut grid = Self::empty(rows, cols)?;
        grid.randomise(rng);
        debug!(
            "seeded {rows}x{cols} grid, population {}",
            grid.population()
        );
        Ok(grid)
    }

    /// Allocates a `rows × cols` torus with every cell dead. Sizes that do
    /// not fit in memory are rejected like undersized ones.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, LifeError> {
        let invalid = || LifeError::InvalidDimensions { rows, cols };
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(invalid());
        }
        let len = rows.checked_mul(cols).ok_or_else(invalid)?;
        let mut buffers = [Vec::new(), Vec::new()];
        for buffer in &mut buffers {
            buffer.try_reserve_exact(len).map_err(|_| invalid())?;
            buffer.resize(len, Cell::default());
        }
        let [front, back] = buffers;
        Ok(Self {
            rows,
            cols,
            front,
            back,
            generation: 0,
        })
    }

    /// Re-seeds every cell without reallocating.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomise(rng);
        self.generation = 0;
        debug!("reset grid, population {}", self.population());
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.back.fill(Cell::Dead);
        self.sync_front();
        self.generation = 0;
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        let dims = (self.rows, self.cols);
        for (i, next) in self.back.iter_mut().enumerate() {
            let p = (i / self.cols, i % self.cols);
            *next = self.front[i].next(count_neighbours(&self.front, dims, p));
        }
        // `back` is complete, so it becomes the settled generation.
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.population()
        );
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of completed steps since construction, the last reset or the
    /// last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.front.iter().filter(|c| c.is_alive()).count()
    }

    pub fn get(&self, y: usize, x: usize) -> Option<Cell> {
        if y < self.rows && x < self.cols {
            Some(self.front[y * self.cols + x])
        } else {
            None
        }
    }

    /// Overwrites a single cell in both buffers.
    ///
    /// # Panics
    ///
    /// Panics if `(y, x)` lies outside the grid.
    pub fn set(&mut self, y: usize, x: usize, cell: Cell) {
        assert!(
            y < self.rows && x < self.cols,
            "({y}, {x}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        let i = y * self.cols + x;
        self.front[i] = cell;
        self.back[i] = cell;
    }

    /// Live neighbours of `(y, x)` in the settled generation.
    pub fn neighbours(&self, y: usize, x: usize) -> usize {
        count_neighbours(&self.front, (self.rows, self.cols), (y, x))
    }

    /// The settled generation, one slice per row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.front.chunks_exact(self.cols)
    }
}

impl LifeGrid {
    fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.back {
            *cell = Cell::from(rng.gen_bool(0.5));
        }
        self.sync_front();
    }

    fn sync_front(&mut self) {
        for (front, back) in self
            .front
            .chunks_exact_mut(self.cols)
            .zip(self.back.chunks_exact(self.cols))
        {
            front.copy_from_slice(back);
        }
    }
}

impl PartialEq for LifeGrid {
    // Only the settled generation is observable.
    fn eq(&self, other: &Self) -> bool {
        (self.rows, self.cols) == (other.rows, other.cols) && self.front == other.front
    }
}

impl Eq for LifeGrid {}
