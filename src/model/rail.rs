// src/model/rail.rs

use crate::model::ball::Ball;
use crate::model::holder::{BallHolder, HolderState};

/// One of the clock's time rails (one-minute, five-minute, hour).
///
/// Balls are only ever added at the end. Pushing onto a full rail does not
/// add the ball; the rail tips instead and every held ball spills out, last
/// one in first.
#[derive(Debug, Clone)]
pub struct Rail {
    state: HolderState,
    balls: Vec<Ball>,
}

impl Rail {
    /// Creates an empty rail.
    pub fn new(capacity: u8) -> Self {
        Self {
            state: HolderState::new(capacity, 0),
            balls: Vec::with_capacity(usize::from(capacity)),
        }
    }

    /// Adds a ball to the rail.
    ///
    /// Returns `None` if the ball found room. If the rail was already full the
    /// incoming ball is left with the caller and the spill is returned: all
    /// `capacity` held balls in reverse push order, leaving the rail empty.
    pub fn push(&mut self, ball: Ball) -> Option<Vec<Ball>> {
        if self.is_full() {
            return Some(self.spill());
        }

        self.balls.push(ball);
        self.state.add(1);
        None
    }

    fn spill(&mut self) -> Vec<Ball> {
        let empty = Vec::with_capacity(self.capacity());
        let mut spilled = std::mem::replace(&mut self.balls, empty);
        spilled.reverse();
        self.state.clear();
        spilled
    }

    /// Held balls in arrival order.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Ball ids for every slot, `None` for the empty ones.
    pub fn snapshot(&self) -> Vec<Option<u8>> {
        (0..self.capacity())
            .map(|slot| self.balls.get(slot).map(Ball::id))
            .collect()
    }
}

impl BallHolder for Rail {
    fn state(&self) -> &HolderState {
        &self.state
    }
}
