mod config;
mod game;
mod goal;
mod grid;
mod term;
mod snake;

use std::{env, fs::File};

use anyhow::Context;
use log::{info, warn};
use simplelog::WriteLogger;

pub type TermInt = u16;
pub type TermCoords = (u16, u16);
/// Board position in cell-aligned units.
pub type Coords = (i32, i32);

fn main() -> anyhow::Result<()> {
    // stdout belongs to the game screen, so logs go to a file
    let level = config::log_level(env::var(config::LOG_LEVEL_VAR).ok().as_deref());
    let log_file = File::create(config::LOG_FILE)
        .with_context(|| format!("creating {}", config::LOG_FILE))?;
    WriteLogger::init(level, simplelog::Config::default(), log_file)
        .context("installing logger")?;

    info!("starting snake");

    let mut game = game::SnakeGame::new(config::GameConfig::default())?;
    let result = game.run();

    if let Err(e) = game.restore() {
        warn!("{:#}", e);
    }

    if let Err(e) = &result {
        warn!("exiting with error: {:#}", e);
    }
    result
}
