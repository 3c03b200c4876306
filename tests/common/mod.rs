//! Shared test utilities and fixtures

#![allow(dead_code)]

use optio::Dice;
use optio_config::DemoSettings;

/// Replays a fixed sequence of rolls, then keeps returning the last one.
pub struct ScriptedDice {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: &[f64]) -> Self {
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        Self {
            rolls: rolls.to_vec(),
            next: 0,
        }
    }

    pub fn rolls_used(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        let value = self.rolls[self.next.min(self.rolls.len() - 1)];
        self.next += 1;
        value
    }
}

/// Settings for a game that never ends by checkmate roll.
pub fn capped_settings(max_moves: u32) -> DemoSettings {
    DemoSettings {
        checkmate_probability: 0.0,
        max_moves: Some(max_moves),
    }
}
