use crate::Coords;
use crate::grid::Grid;
use Direction::*;
use MoveResult::*;

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step as `(dx, dy)`, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, grew: bool },
    Reset { head: Coords },
    Paused,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
    grid: Grid,
    paused: bool,
    grow_next_move: bool,
}

impl Snake {
    /// A fresh one-segment snake at a random cell, heading left.
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let start = grid.random_position(rng);
        Snake::with_body(grid, vec![start], Left)
    }

    /// `body` is head first and must not be empty.
    pub fn with_body(grid: Grid, body: Vec<Coords>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Snake { body, direction, grid, paused: false, grow_next_move: false }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn get_head(&self) -> Coords {
        self.body[0]
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Head shifted one cell towards `direction` (or the current one), without wrapping.
    pub fn get_next_position(&self, direction: Option<Direction>) -> Coords {
        let (dx, dy) = direction.unwrap_or(self.direction).delta();
        let head = self.get_head();
        let step = self.grid.cell_size();
        (head.0 + dx * step, head.1 + dy * step)
    }

    pub fn move_step(&mut self) -> MoveResult {
        if self.paused {
            return Paused;
        }

        let new_head = self.grid.wrap(self.get_next_position(None));

        if self.body.len() > 1 && self.body.contains(&new_head) {
            self.reset();
            return Reset { head: self.get_head() };
        }

        self.body.insert(0, new_head);

        let grew = self.grow_next_move;
        if grew {
            self.grow_next_move = false;
        } else {
            self.body.pop();
        }

        Moved { new_head, grew }
    }

    pub fn toggle_grow(&mut self) {
        if !self.grow_next_move {
            self.grow_next_move = true;
        }
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.paused {
            return;
        }

        let next = self.grid.wrap(self.get_next_position(Some(new_direction)));
        if self.body.len() > 1 && next == self.body[1] {
            return;
        }

        self.direction = new_direction;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    fn reset(&mut self) {
        self.body.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid() -> Grid {
        Grid::new(800, 800, 40)
    }

    #[test]
    fn next_position_does_not_move() {
        let snake = Snake::with_body(grid(), vec![(80, 80)], Left);
        assert_eq!(snake.get_next_position(None), (40, 80));
        assert_eq!(snake.get_next_position(Some(Down)), (80, 120));
        assert_eq!(snake.body(), &[(80, 80)]);
    }

    #[test]
    fn plain_move_shifts_body() {
        let mut snake = Snake::with_body(grid(), vec![(80, 80), (120, 80), (160, 80)], Left);
        let res = snake.move_step();
        assert_eq!(res, Moved { new_head: (40, 80), grew: false });
        assert_eq!(snake.body(), &[(40, 80), (80, 80), (120, 80)]);
    }

    #[test]
    fn wraps_past_positive_edge() {
        let mut snake = Snake::with_body(grid(), vec![(760, 200)], Right);
        snake.move_step();
        assert_eq!(snake.get_head(), (0, 200));

        let mut snake = Snake::with_body(grid(), vec![(200, 760)], Down);
        snake.move_step();
        assert_eq!(snake.get_head(), (200, 0));
    }

    #[test]
    fn wraps_past_negative_edge() {
        let mut snake = Snake::with_body(grid(), vec![(0, 200)], Left);
        snake.move_step();
        assert_eq!(snake.get_head(), (760, 200));

        let mut snake = Snake::with_body(grid(), vec![(200, 0)], Up);
        snake.move_step();
        assert_eq!(snake.get_head(), (200, 760));
    }

    #[test]
    fn self_collision_truncates_to_head() {
        // Hooked body: heading down from (80,80) lands on (80,120)
        let body = vec![(80, 80), (120, 80), (120, 120), (80, 120), (40, 120)];
        let mut snake = Snake::with_body(grid(), body, Down);
        let res = snake.move_step();
        assert_eq!(res, Reset { head: (80, 80) });
        assert_eq!(snake.body(), &[(80, 80)]);
    }

    #[test]
    fn single_segment_never_collides() {
        let mut snake = Snake::with_body(grid(), vec![(80, 80)], Right);
        assert!(matches!(snake.move_step(), Moved { .. }));
        assert_eq!(snake.body().len(), 1);
    }

    #[test]
    fn growth_is_one_shot() {
        let mut snake = Snake::with_body(grid(), vec![(80, 80), (120, 80)], Left);
        snake.toggle_grow();
        snake.toggle_grow();

        let res = snake.move_step();
        assert_eq!(res, Moved { new_head: (40, 80), grew: true });
        assert_eq!(snake.body().len(), 3);

        assert_eq!(snake.move_step(), Moved { new_head: (0, 80), grew: false });
        assert_eq!(snake.body().len(), 3);
    }

    #[test]
    fn refuses_reversal() {
        let mut snake = Snake::with_body(grid(), vec![(80, 80), (120, 80)], Left);
        snake.set_direction(Right);
        assert_eq!(snake.get_direction(), Left);

        snake.set_direction(Up);
        assert_eq!(snake.get_direction(), Up);
    }

    #[test]
    fn refuses_reversal_across_an_edge() {
        let mut snake = Snake::with_body(grid(), vec![(0, 80), (760, 80)], Right);
        snake.set_direction(Left);
        assert_eq!(snake.get_direction(), Right);
    }

    #[test]
    fn lone_head_may_reverse() {
        let mut snake = Snake::with_body(grid(), vec![(80, 80)], Left);
        snake.set_direction(Right);
        assert_eq!(snake.get_direction(), Right);
    }

    #[test]
    fn pause_freezes_state() {
        let mut snake = Snake::with_body(grid(), vec![(80, 80), (120, 80)], Left);
        snake.toggle_paused();

        assert_eq!(snake.move_step(), Paused);
        snake.set_direction(Up);
        assert_eq!(snake.body(), &[(80, 80), (120, 80)]);
        assert_eq!(snake.get_direction(), Left);

        snake.toggle_paused();
        assert!(!snake.is_paused());
        snake.move_step();
        assert_eq!(snake.get_head(), (40, 80));
    }

    #[test]
    fn new_snake_is_one_segment_heading_left() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(1);
        let snake = Snake::new(grid(), &mut rng);
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.get_direction(), Left);
        assert!(!snake.is_paused());
    }
}
