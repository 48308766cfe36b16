use std::str::FromStr;

use crate::{Cell, LifeError, LifeGrid};

impl FromStr for LifeGrid {
    type Err = LifeError;

    /// Parses a pattern of `#`/`o` (alive) and `.`/` ` (dead). Blank lines
    /// and surrounding whitespace are ignored; short rows are padded with
    /// dead cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = LifeGrid::empty(lines.len(), cols)?;
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    '.' | ' ' => (),
                    '#' | 'o' => grid.set(y, x, Cell::Alive),
                    _ => return Err(LifeError::UnexpectedChar(c)),
                }
            }
        }
        Ok(grid)
    }
}
