use std::{thread::sleep, time::{Duration, Instant}};

use crate::{TermCoords, TermInt};
use crate::config::GameConfig;
use crate::goal::Goal;
use crate::grid::Grid;
use crate::term::{TermManager, CELL_COLUMNS};
use crate::snake::{Snake, Direction, MoveResult};

use anyhow::{bail, Context};
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use crossterm::style::Color;
use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

const INTRO_LINES: &[&str] = &[
    "SNAKE",
    "",
    "Arrow keys or WASD to move",
    "Space to pause",
    "CTRL+C to quit",
    "",
    "Walls wrap around. Biting yourself",
    "shrinks you back to just the head.",
    "",
    "[ Start ]  press Enter",
];

const PAUSE_LINES: &[&str] = &["Paused", "Press Space to resume", "or CTRL+C to quit"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Pause,
    Quit,
}

impl Command {
    /// Unmapped keys give `None`.
    pub fn from_key_event(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Direction::Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Direction::Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Direction::Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Direction::Right)),
            KeyCode::Char(' ') => Some(Command::Pause),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Fixed-rate limiter: `tick` blocks until one period has passed since the previous tick.
pub struct Clock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        Clock { period: Duration::from_secs(1) / ticks_per_second.max(1), last_tick: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn tick(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                sleep(self.period - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Game state for one session, independent of the terminal.
pub struct Session<R = ThreadRng> {
    grid: Grid,
    snake: Snake,
    goal: Goal,
    rng: R,
    score: u32,
}

impl Session<ThreadRng> {
    pub fn new(grid: Grid) -> Self {
        Session::with_rng(grid, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::new(grid, &mut rng);
        let goal = Goal::new(&grid, &mut rng);
        Session { grid, snake, goal, rng, score: 0 }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Turn(dir) => self.snake.set_direction(dir),
            Command::Pause => {
                self.snake.toggle_paused();
                info!("{}", if self.snake.is_paused() { "paused" } else { "resumed" });
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// One game update: apply input, advance the snake, then check the goal.
    pub fn step(&mut self, commands: &[Command]) -> Flow {
        for &command in commands {
            if self.apply(command) == Flow::Quit {
                return Flow::Quit;
            }
        }

        match self.snake.move_step() {
            MoveResult::Moved { new_head, grew } => {
                trace!("head at {:?}{}", new_head, if grew { ", grew" } else { "" });
            }
            MoveResult::Reset { head } => {
                info!("snake bit itself, reset to {:?} (score was {})", head, self.score);
            }
            MoveResult::Paused => {}
        }

        self.check_goal();
        Flow::Continue
    }

    /// Flags growth and moves the goal when the head sits on it.
    pub fn check_goal(&mut self) -> bool {
        if self.snake.get_head() != self.goal.get_location() {
            return false;
        }

        self.snake.toggle_grow();
        let eaten = self.goal.get_location();
        let relocated = self.goal.relocate(&self.grid, &mut self.rng);
        self.score += 1;
        debug!("goal eaten at {:?}, moved to {:?}, score {}", eaten, relocated, self.score);
        true
    }
}

pub struct SnakeGame {
    config: GameConfig,
    grid: Grid,
    term: TermManager,
    origin: TermCoords,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        let term = TermManager::new().context("reading terminal size")?;
        Ok(SnakeGame { config, grid: config.grid(), term, origin: (0, 0) })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.initialize()?;

        if !self.show_intro()? {
            info!("quit from the start panel");
            return Ok(());
        }

        let score = self.play()?;
        info!("session over, score {}", score);
        Ok(())
    }

    pub fn restore(&mut self) -> anyhow::Result<()> {
        self.term.restore().context("restoring terminal")
    }

    fn initialize(&mut self) -> anyhow::Result<()> {
        let (w, h) = self.term.get_terminal_size();
        let needed = (self.grid.columns() as TermInt * CELL_COLUMNS, self.grid.rows() as TermInt);
        if w < needed.0 || h < needed.1 {
            bail!("terminal is {}x{}, the board needs at least {}x{}", w, h, needed.0, needed.1);
        }

        self.origin = ((w - needed.0) / 2, (h - needed.1) / 2);
        self.term.setup().context("setting up terminal")?;
        Ok(())
    }

    /// Returns `false` if the player quit instead of starting.
    fn show_intro(&mut self) -> anyhow::Result<bool> {
        self.term.clear()?;
        self.term.show_message(INTRO_LINES)?;

        loop {
            let key = self.term.read_key_blocking()?;
            if is_ctrl_c(&key) {
                return Ok(false);
            }
            if key.code == KeyCode::Enter {
                return Ok(true);
            }
        }
    }

    fn play(&mut self) -> anyhow::Result<u32> {
        self.term.clear()?;

        let mut session = Session::new(self.grid);
        let mut clock = Clock::new(self.config.ticks_per_second);
        info!(
            "session started on a {}x{} grid at {:?}, tick every {:?}",
            self.grid.columns(),
            self.grid.rows(),
            session.snake().get_head(),
            clock.period()
        );

        loop {
            clock.tick();

            let commands: Vec<Command> = self.term.read_key_events_queue()?
                .iter()
                .filter_map(Command::from_key_event)
                .collect();

            if session.step(&commands) == Flow::Quit {
                return Ok(session.score());
            }

            self.draw(&session)?;
        }
    }

    fn draw<R: Rng>(&mut self, session: &Session<R>) -> anyhow::Result<()> {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                let pos = self.cell_origin((col, row));
                self.term.fill_cell(pos, tile_color(&self.config, col, row))?;
            }
        }

        for part in session.snake().body() {
            let pos = self.cell_origin(self.grid.cell_of(*part));
            self.term.fill_cell(pos, self.config.snake)?;
        }

        let goal = self.cell_origin(self.grid.cell_of(session.goal().get_location()));
        self.term.fill_cell(goal, self.config.goal)?;

        if session.snake().is_paused() {
            self.term.show_message(PAUSE_LINES)?;
        }

        self.term.flush()?;
        Ok(())
    }

    fn cell_origin(&self, (col, row): (i32, i32)) -> TermCoords {
        (self.origin.0 + col as TermInt * CELL_COLUMNS, self.origin.1 + row as TermInt)
    }
}

/// Checkerboard shade of a background tile.
pub fn tile_color(config: &GameConfig, col: i32, row: i32) -> Color {
    if (col + row) % 2 == 0 {
        config.background
    } else {
        config.background_alt
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL))
}
