use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::event::map_key;
use crate::state::GameState;
use crate::update::{update, InputEvent};

pub struct App {
    pub config: Config,
    pub state: GameState,
    pub should_quit: bool,
    // Pending logical inputs; the update step consumes one per tick,
    // like the original single key poll.
    queued: VecDeque<InputEvent>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let state = GameState::new(&config)?;
        Ok(Self {
            config,
            state,
            should_quit: false,
            queued: VecDeque::new(),
        })
    }

    pub fn on_tick(&mut self) {
        if !self.state.running {
            return;
        }
        let input = self.queued.pop_front();
        update(&mut self.state, input, &self.config);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // On the game-over screen any key ends the process
        if !self.state.running {
            self.should_quit = true;
            return;
        }

        if let Some(input) = map_key(key) {
            self.queued.push_back(input);
        }
    }
}
