pub mod ball;
pub mod holder;
pub mod queues;
pub mod rail;
