// src/model/holder.rs

use std::fmt::Debug;

/// Capacity and occupancy shared by every ball holder.
///
/// Invariant: `occupied <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolderState {
    capacity: u8,
    occupied: u8,
}

impl HolderState {
    pub fn new(capacity: u8, occupied: u8) -> Self {
        debug_assert!(occupied <= capacity);
        Self { capacity, occupied }
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn occupied(&self) -> u8 {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    /// Room left before the holder is full.
    pub fn free(&self) -> u8 {
        self.capacity - self.occupied
    }

    pub(crate) fn add(&mut self, count: u8) {
        debug_assert!(count <= self.free(), "holder over capacity");
        self.occupied += count;
    }

    pub(crate) fn remove_one(&mut self) {
        debug_assert!(self.occupied > 0, "holder already empty");
        self.occupied -= 1;
    }

    pub(crate) fn clear(&mut self) {
        self.occupied = 0;
    }
}

/// Anything that holds balls: the dispensing queue and the time rails.
///
/// Implementors only expose their [`HolderState`]; the occupancy queries are
/// answered here once for all of them.
pub trait BallHolder: Debug {
    fn state(&self) -> &HolderState;

    fn capacity(&self) -> usize {
        usize::from(self.state().capacity())
    }

    /// Number of balls currently held.
    fn len(&self) -> usize {
        usize::from(self.state().occupied())
    }

    fn is_empty(&self) -> bool {
        self.state().occupied() == 0
    }

    fn is_full(&self) -> bool {
        self.state().is_full()
    }
}
