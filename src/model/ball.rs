// src/model/ball.rs

/// A single ball travelling through the clock.
///
/// Two balls are the same ball iff their ids match. Balls are created once per
/// run and only ever move between holders; they are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    id: u8,
}

impl Ball {
    pub fn new(id: u8) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u8 {
        self.id
    }
}
