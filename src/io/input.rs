// src/io/input.rs

use crate::error::InputError;
use crate::io::reporting::format_cycle_line;
use crate::simulation::config::{BallCount, END_OF_INPUT};
use crate::simulation::engine::{cycle_report, CycleReport};
use std::io::{BufRead, Write};
use tracing::debug;

/// Whether valid ball counts are simulated or only checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Simulate,
    ValidateOnly,
}

/// Parses one line of input as a ball count (base 10, fits in a `u8`).
///
/// Only plain digits are accepted; a sign is a parse error.
pub fn parse_ball_count(text: &str) -> Result<u8, InputError> {
    let parse_error = || InputError::Parse {
        text: text.to_string(),
    };

    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(parse_error());
    }
    text.parse::<u8>().map_err(|_| parse_error())
}

/// Reads ball counts line by line until the terminating `0`.
///
/// Each valid count is simulated as soon as it is read and its result line
/// written to `output`. The first bad line stops everything. Returns the
/// reports for the counts that were simulated.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    mode: RunMode,
) -> Result<Vec<CycleReport>, InputError> {
    let mut reports = Vec::new();
    let mut last_seen: Option<u8> = None;

    for line in input.lines() {
        let line = line.map_err(InputError::Read)?;
        let value =
            parse_ball_count(&line).inspect_err(|err| debug!(%err, "rejected input line"))?;

        if value == END_OF_INPUT {
            debug!(counts = reports.len(), "end of input");
            return Ok(reports);
        }

        let balls =
            BallCount::new(value).inspect_err(|err| debug!(%err, "rejected input line"))?;
        last_seen = Some(value);

        if mode == RunMode::ValidateOnly {
            continue;
        }

        let report = cycle_report(balls);
        writeln!(output, "{}", format_cycle_line(&report)).map_err(InputError::Write)?;
        reports.push(report);
    }

    match last_seen {
        None => Err(InputError::Empty),
        Some(last) => Err(InputError::Unterminated { last }),
    }
}
