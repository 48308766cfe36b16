use itertools::Itertools;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The state of this cell one generation later, given its live
    /// neighbour count.
    pub fn next(self, neighbours: usize) -> Cell {
        match (self, neighbours) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Counts the live cells among the eight neighbours of `(y, x)` on a
/// row-major `rows × cols` torus.
pub fn count_neighbours(
    cells: &[Cell],
    (rows, cols): (usize, usize),
    (y, x): (usize, usize),
) -> usize {
    neighbours((y, x), (rows, cols))
        .filter(|&(ny, nx)| cells[ny * cols + nx].is_alive())
        .count()
}

fn neighbours(
    (y, x): (usize, usize),
    (rows, cols): (usize, usize),
) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dy, dx)| (wrap(y, dy, rows), wrap(x, dx, cols)))
}

fn wrap(i: usize, d: isize, n: usize) -> usize {
    (i as isize + d).rem_euclid(n as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            let survives = matches!(n, 2 | 3);
            assert_eq!(Cell::Alive.next(n).is_alive(), survives, "alive with {n}");
            assert_eq!(Cell::Dead.next(n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        let grid = crate::LifeGrid::empty(3, 4).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 1, 5), 3);
    }

    #[test]
    fn test_neighbours_exclude_self() {
        let ps = neighbours((0, 0), (3, 3)).collect::<Vec<_>>();
        assert_eq!(ps.len(), 8);
        assert!(!ps.contains(&(0, 0)));
        assert!(ps.contains(&(2, 2)));
    }

    #[test]
    fn test_diagonal_wrap() {
        // Single live cell in the corner of a 3x3 torus.
        let mut cells = vec![Cell::Dead; 9];
        cells[0] = Cell::Alive;
        assert_eq!(count_neighbours(&cells, (3, 3), (2, 2)), 1);
        assert_eq!(count_neighbours(&cells, (3, 3), (0, 0)), 0);
    }
}
