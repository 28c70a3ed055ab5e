use crossterm::style::Color;
use log::LevelFilter;

use crate::grid::Grid;

pub const BOARD_WIDTH: i32 = 800;
pub const BOARD_HEIGHT: i32 = 800;
pub const CELL_SIZE: i32 = 40;
pub const TICKS_PER_SECOND: u32 = 11;

pub const BG_COLOR: Color = Color::Rgb { r: 186, g: 222, b: 252 };
pub const BG_COLOR_ALT: Color = Color::Rgb { r: 98, g: 181, b: 248 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 50, g: 168, b: 82 };
pub const GOAL_COLOR: Color = Color::Rgb { r: 240, g: 97, b: 36 };

pub const LOG_FILE: &str = "snake.log";
pub const LOG_LEVEL_VAR: &str = "SNAKE_LOG";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Everything about a session that is fixed at launch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub ticks_per_second: u32,
    pub background: Color,
    pub background_alt: Color,
    pub snake: Color,
    pub goal: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            background: BG_COLOR,
            background_alt: BG_COLOR_ALT,
            snake: SNAKE_COLOR,
            goal: GOAL_COLOR,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height, self.cell_size)
    }
}

/// Reads the log level override, falling back to the default when unset or unparseable.
pub fn log_level(var: Option<&str>) -> LevelFilter {
    var.and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}
