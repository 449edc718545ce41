// src/simulation/config.rs

use crate::error::InputError;

/// Smallest ball count the clock accepts. One more than the rails can hold
/// together, so the queue always has a ball to dispense.
pub const MIN_BALLS: u8 = 27;
pub const MAX_BALLS: u8 = 127;

/// Input value that marks the end of the ball counts.
pub const END_OF_INPUT: u8 = 0;

/// Rail capacities of the clock.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub one_minute_capacity: u8,
    pub five_minute_capacity: u8,
    pub hour_capacity: u8,
}

impl ClockConfig {
    /// How many balls the three rails can hold at once.
    pub fn rail_capacity_total(&self) -> usize {
        usize::from(self.one_minute_capacity)
            + usize::from(self.five_minute_capacity)
            + usize::from(self.hour_capacity)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            one_minute_capacity: 4,
            five_minute_capacity: 11,
            hour_capacity: 11,
        }
    }
}

/// A ball count inside `MIN_BALLS..=MAX_BALLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallCount(u8);

impl BallCount {
    pub fn new(balls: u8) -> Result<Self, InputError> {
        if balls > MAX_BALLS {
            Err(InputError::TooManyBalls { balls })
        } else if balls < MIN_BALLS {
            Err(InputError::TooFewBalls { balls })
        } else {
            Ok(Self(balls))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BallCount {
    type Error = InputError;

    fn try_from(balls: u8) -> Result<Self, Self::Error> {
        Self::new(balls)
    }
}
