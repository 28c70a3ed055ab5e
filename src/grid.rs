use crate::Coords;

use rand::Rng;

/// Board bounds in position units. Valid positions are multiples of `cell_size`
/// in `0..=width - cell_size` and `0..=height - cell_size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Grid { width, height, cell_size }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn max_x(&self) -> i32 {
        self.width - self.cell_size
    }

    pub fn max_y(&self) -> i32 {
        self.height - self.cell_size
    }

    /// Toroidal wrap, each axis on its own.
    pub fn wrap(&self, pos: Coords) -> Coords {
        (wrap_axis(pos.0, self.max_x()), wrap_axis(pos.1, self.max_y()))
    }

    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        let col = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        (col * self.cell_size, row * self.cell_size)
    }

    /// Column and row of a position.
    pub fn cell_of(&self, pos: Coords) -> (i32, i32) {
        (pos.0 / self.cell_size, pos.1 / self.cell_size)
    }
}

fn wrap_axis(value: i32, max: i32) -> i32 {
    if value < 0 {
        max
    } else if value > max {
        0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn wrap_leaves_inner_positions_alone() {
        let grid = Grid::new(800, 800, 40);
        assert_eq!(grid.wrap((0, 0)), (0, 0));
        assert_eq!(grid.wrap((760, 760)), (760, 760));
        assert_eq!(grid.wrap((400, 120)), (400, 120));
    }

    #[test]
    fn wrap_each_axis_independently() {
        let grid = Grid::new(800, 400, 40);
        assert_eq!(grid.wrap((800, 120)), (0, 120));
        assert_eq!(grid.wrap((-40, 120)), (760, 120));
        assert_eq!(grid.wrap((120, 400)), (120, 0));
        assert_eq!(grid.wrap((120, -40)), (120, 360));
    }

    #[test]
    fn random_positions_are_aligned_and_in_bounds() {
        let grid = Grid::new(200, 120, 40);
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        for _ in 0..500 {
            let (x, y) = grid.random_position(&mut rng);
            assert_eq!(x % 40, 0);
            assert_eq!(y % 40, 0);
            assert!((0..=grid.max_x()).contains(&x));
            assert!((0..=grid.max_y()).contains(&y));
        }
    }
}
