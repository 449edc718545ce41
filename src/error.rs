// src/error.rs

use thiserror::Error;

use crate::simulation::config::{MAX_BALLS, MIN_BALLS};

/// Everything that can go wrong while reading ball counts.
///
/// Each variant stops the whole run.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Malformed input (failed to parse \"{text}\" as uint8)")]
    Parse { text: String },

    #[error("Malformed input (Too many balls, {balls} > {})", MAX_BALLS)]
    TooManyBalls { balls: u8 },

    #[error("Malformed input (Too few balls, {balls} < {})", MIN_BALLS)]
    TooFewBalls { balls: u8 },

    #[error("Malformed input (empty)")]
    Empty,

    #[error("Malformed input (zero should signify the end of input, got {last})")]
    Unterminated { last: u8 },

    #[error("Error reading from input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error writing output: {0}")]
    Write(#[source] std::io::Error),
}

/// Failures while exporting cycle reports.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
