// src/model/queues.rs

use crate::model::ball::Ball;
use crate::model::holder::{BallHolder, HolderState};

/// The clock's dispensing queue.
///
/// A fixed ring of slots with a head index. Balls never move inside the ring;
/// the head advances on every pop and new balls are written at the logical
/// tail (`head + occupied`). Slots past the tail keep stale balls and are
/// treated as empty.
#[derive(Debug, Clone)]
pub struct BallQueue {
    state: HolderState,
    slots: Box<[Ball]>,
    head: usize,
}

impl BallQueue {
    /// Creates a full queue holding balls `0..capacity` in ascending order.
    pub fn new(capacity: u8) -> Self {
        debug_assert!(capacity > 0, "queue capacity must be > 0");
        let slots: Box<[Ball]> = (0..capacity).map(Ball::new).collect();

        Self {
            state: HolderState::new(capacity, capacity),
            slots,
            head: 0,
        }
    }

    fn slot_index(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }

    /// Step 1: Take the next ball off the front of the queue.
    /// Returns `None` only if the queue is empty.
    pub fn pop(&mut self) -> Option<Ball> {
        if self.is_empty() {
            return None;
        }

        let ball = self.slots[self.head];
        self.head = self.slot_index(1);
        self.state.remove_one();
        Some(ball)
    }

    /// Step 2: Return balls to the back of the queue, in the given order.
    ///
    /// The caller must not push more balls than there is room for.
    pub fn push(&mut self, balls: &[Ball]) {
        debug_assert!(
            balls.len() <= usize::from(self.state.free()),
            "pushing {} balls into a queue with room for {}",
            balls.len(),
            self.state.free()
        );

        for &ball in balls {
            let tail = self.slot_index(self.len());
            self.slots[tail] = ball;
            self.state.add(1);
        }
    }

    /// True when the queue is full and, reading from the head, holds balls
    /// `0, 1, .., capacity - 1` again. Does not move the head.
    pub fn do_cycle_check(&self) -> bool {
        self.is_full() && self.iter().zip(0u8..).all(|(ball, id)| ball.id() == id)
    }

    /// Balls currently queued, front to back.
    pub fn iter(&self) -> impl Iterator<Item = Ball> + '_ {
        (0..self.len()).map(move |offset| self.slots[self.slot_index(offset)])
    }

    /// Ball ids for every slot reading from the head, `None` past the tail.
    pub fn snapshot(&self) -> Vec<Option<u8>> {
        (0..self.capacity())
            .map(|offset| (offset < self.len()).then(|| self.slots[self.slot_index(offset)].id()))
            .collect()
    }
}

impl BallHolder for BallQueue {
    fn state(&self) -> &HolderState {
        &self.state
    }
}
