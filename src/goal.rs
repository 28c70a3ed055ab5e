use crate::Coords;
use crate::grid::Grid;

use rand::Rng;

#[derive(Clone, Debug)]
pub struct Goal {
    location: Coords,
}

impl Goal {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Goal { location: grid.random_position(rng) }
    }

    pub fn get_location(&self) -> Coords {
        self.location
    }

    pub fn set_location(&mut self, pos: Coords) {
        self.location = pos;
    }

    /// Moves to a random cell other than the current one. A single-cell grid has
    /// nowhere else to go, so the goal stays put there.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> Coords {
        if grid.columns() * grid.rows() > 1 {
            let new_location = loop {
                let candidate = grid.random_position(rng);
                if candidate != self.location {
                    break candidate;
                }
            };
            self.set_location(new_location);
        }

        self.location
    }
}
