// src/simulation/engine.rs

use crate::model::ball::Ball;
use crate::model::holder::BallHolder;
use crate::model::queues::BallQueue;
use crate::model::rail::Rail;
use crate::simulation::config::{BallCount, ClockConfig};
use serde::Serialize;
use tracing::{info, trace};

/// Outcome of one cycle search. Serialize so it can go straight to CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub balls: u8,
    pub days: u64,
    pub refreshes: u64,
    pub ticks: u64,
}

/// Per-run clock state. Nothing here outlives a single cycle search.
#[derive(Debug, Clone)]
pub struct ClockSimulation {
    balls: BallCount,

    // Where balls wait to be dispensed
    queue: BallQueue,

    // The rails, in the order a ball travels through them
    one_minute: Rail,
    five_minute: Rail,
    hour: Rail,

    // How many times the queue filled back up (one per 12 hours)
    refreshes: u64,
    ticks: u64,
}

impl ClockSimulation {
    pub fn new(config: &ClockConfig, balls: BallCount) -> Self {
        Self {
            balls,
            queue: BallQueue::new(balls.get()),
            one_minute: Rail::new(config.one_minute_capacity),
            five_minute: Rail::new(config.five_minute_capacity),
            hour: Rail::new(config.hour_capacity),
            refreshes: 0,
            ticks: 0,
        }
    }

    /// Routes one dispensed ball through the rails.
    ///
    /// Each rail that tips sends its spill back to the queue and passes the
    /// ball on to the next rail. When the hour rail tips the ball itself goes
    /// back to the queue too, right behind the spill.
    pub fn update_clock_state(&mut self, ball: Ball) {
        let Some(spilled) = self.one_minute.push(ball) else {
            return;
        };
        self.queue.push(&spilled);

        let Some(spilled) = self.five_minute.push(ball) else {
            return;
        };
        self.queue.push(&spilled);

        let Some(spilled) = self.hour.push(ball) else {
            return;
        };
        self.queue.push(&spilled);
        self.queue.push(&[ball]);
    }

    /// Dispenses one ball and routes it. Returns false if the queue was empty.
    pub fn tick(&mut self) -> bool {
        let Some(ball) = self.queue.pop() else {
            return false;
        };
        self.ticks += 1;
        self.update_clock_state(ball);
        true
    }

    /// Ticks until the queue is back in its original order.
    ///
    /// With at least `rail_capacity_total() + 1` balls the queue can never
    /// run dry, so the only way out is the cycle check.
    pub fn run(&mut self) {
        while self.tick() {
            if !self.queue.is_full() {
                continue;
            }

            self.refreshes += 1;
            trace!(
                balls = self.balls.get(),
                refreshes = self.refreshes,
                "clock refreshed"
            );

            if self.queue.do_cycle_check() {
                info!(
                    balls = self.balls.get(),
                    refreshes = self.refreshes,
                    ticks = self.ticks,
                    "cycle detected"
                );
                return;
            }
        }
    }

    /// Two refreshes make a day; a trailing half day counts as a full one.
    pub fn days(&self) -> u64 {
        self.refreshes.div_ceil(2)
    }

    pub fn report(&self) -> CycleReport {
        CycleReport {
            balls: self.balls.get(),
            days: self.days(),
            refreshes: self.refreshes,
            ticks: self.ticks,
        }
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn queue(&self) -> &BallQueue {
        &self.queue
    }

    pub fn one_minute(&self) -> &Rail {
        &self.one_minute
    }

    pub fn five_minute(&self) -> &Rail {
        &self.five_minute
    }

    pub fn hour(&self) -> &Rail {
        &self.hour
    }

    /// Balls held across the queue and all rails. Always equals the ball count
    /// between ticks.
    pub fn balls_in_play(&self) -> usize {
        self.queue.len() + self.one_minute.len() + self.five_minute.len() + self.hour.len()
    }
}

/// Runs a fresh clock with `balls` balls until the cycle recurs.
pub fn cycle_report(balls: BallCount) -> CycleReport {
    let mut sim = ClockSimulation::new(&ClockConfig::default(), balls);
    sim.run();
    sim.report()
}

/// Days until a clock with `balls` balls returns to its starting order.
pub fn days_until_cycle(balls: BallCount) -> u64 {
    cycle_report(balls).days
}
