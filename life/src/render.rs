use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use itertools::Itertools;

use crate::{Cell, LifeGrid};

/// Moves the cursor home and clears the screen.
pub const CLEAR: &str = "\x1b[H\x1b[2J";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub const BLOCK: Self = Self {
        alive: '\u{25A0}',
        dead: ' ',
    };
    pub const ASCII: Self = Self {
        alive: '#',
        dead: '.',
    };

    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::BLOCK
    }
}

impl LifeGrid {
    /// Writes one glyph per cell, one line per row.
    pub fn display<W: Write + ?Sized>(&self, w: &mut W, glyphs: Glyphs) -> io::Result<()> {
        let mut line = String::with_capacity(self.cols() * glyphs.alive.len_utf8() + 1);
        for row in self.rows_iter() {
            line.clear();
            line.extend(row.iter().map(|&cell| glyphs.glyph(cell)));
            line.push('\n');
            w.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Clears the terminal, then draws the grid over it.
    pub fn print<W: Write + ?Sized>(&self, w: &mut W, glyphs: Glyphs) -> io::Result<()> {
        w.write_all(CLEAR.as_bytes())?;
        self.display(w, glyphs)?;
        w.flush()
    }
}

impl Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows_iter()
            .map(|row| row.iter().map(|&cell| Glyphs::ASCII.glyph(cell)).collect::<String>())
            .join("\n");
        f.write_str(&text)
    }
}
