use std::sync::{Mutex, MutexGuard};

use crate::game::SequenceGame;

use super::Config;

/// Everything the command handlers and watchers share. Owned by poise and
/// handed to every invocation; the game sits behind a mutex because
/// serenity dispatches each gateway event on its own task.
#[derive(Debug)]
pub struct Data {
    config: Config,
    game: Mutex<SequenceGame>,
}

impl Data {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            game: Mutex::new(SequenceGame::new()),
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Locks the game state. Hold only for the state transition itself,
    /// never across an await.
    pub fn game(&self) -> MutexGuard<'_, SequenceGame> {
        self.game
            .lock()
            .expect("sequence game lock should not be poisoned")
    }
}
