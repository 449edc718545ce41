use ball_clock::io::input::{run, RunMode};
use ball_clock::io::reporting::write_cycle_log;
use ball_clock::{cycle_report, days_until_cycle, BallCount, InputError};
use std::io::Cursor;

fn balls(n: u8) -> BallCount {
    BallCount::new(n).expect("valid ball count")
}

/// Feeds `input` through the line reader and returns (error message, output).
fn run_input(input: &str, mode: RunMode) -> (Option<String>, String) {
    let mut output = Vec::new();
    let result = run(Cursor::new(input), &mut output, mode);
    (
        result.err().map(|err| err.to_string()),
        String::from_utf8(output).expect("utf-8 output"),
    )
}

#[test]
fn thirty_balls_cycle_after_fifteen_days() {
    assert_eq!(days_until_cycle(balls(30)), 15);
}

#[test]
fn forty_five_balls_cycle_after_378_days() {
    assert_eq!(days_until_cycle(balls(45)), 378);
}

#[test]
fn repeated_runs_agree() {
    let first = cycle_report(balls(33));
    let second = cycle_report(balls(33));
    assert_eq!(first, second);
    assert!(first.days >= 1);
}

#[test]
fn concurrent_runs_do_not_share_state() {
    let counts = [30u8, 45, 30, 45];
    let days: Vec<u64> = std::thread::scope(|scope| {
        let handles: Vec<_> = counts
            .iter()
            .map(|&n| scope.spawn(move || days_until_cycle(balls(n))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("simulation thread"))
            .collect()
    });
    assert_eq!(days, vec![15, 378, 15, 378]);
}

#[test]
fn good_input_prints_one_line_per_count() {
    let (err, output) = run_input("30\n45\n0\n", RunMode::Simulate);
    assert_eq!(err, None);
    assert_eq!(
        output,
        "30 balls cycle after 15 days.\n45 balls cycle after 378 days.\n"
    );
}

#[test]
fn too_few_balls() {
    let (err, _) = run_input("30\n26\n0\n", RunMode::ValidateOnly);
    assert_eq!(err.as_deref(), Some("Malformed input (Too few balls, 26 < 27)"));
}

#[test]
fn too_many_balls() {
    let (err, _) = run_input("128\n0\n", RunMode::ValidateOnly);
    assert_eq!(err.as_deref(), Some("Malformed input (Too many balls, 128 > 127)"));
}

#[test]
fn empty_input() {
    let (err, _) = run_input("", RunMode::ValidateOnly);
    assert_eq!(err.as_deref(), Some("Malformed input (empty)"));
}

#[test]
fn value_too_large_for_a_byte() {
    let (err, _) = run_input("256\n0\n", RunMode::ValidateOnly);
    assert_eq!(
        err.as_deref(),
        Some("Malformed input (failed to parse \"256\" as uint8)")
    );
}

#[test]
fn negative_value() {
    let (err, _) = run_input("-1\n0\n", RunMode::ValidateOnly);
    assert_eq!(
        err.as_deref(),
        Some("Malformed input (failed to parse \"-1\" as uint8)")
    );
}

#[test]
fn input_without_terminating_zero() {
    let (err, _) = run_input("30\n45\n", RunMode::ValidateOnly);
    assert_eq!(
        err.as_deref(),
        Some("Malformed input (zero should signify the end of input, got 45)")
    );
}

#[test]
fn read_failures_are_reported() {
    // Invalid UTF-8 cannot be read as a line.
    let mut output = Vec::new();
    let result = run(Cursor::new(&[0xff, 0xfe, b'\n'][..]), &mut output, RunMode::Simulate);
    assert!(matches!(result, Err(InputError::Read(_))));
}

#[test]
fn reports_export_to_csv() {
    let mut output = Vec::new();
    let reports = run(Cursor::new("30\n0\n"), &mut output, RunMode::Simulate)
        .expect("valid input");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cycles.csv");
    write_cycle_log(&path, &reports).expect("write csv");

    let written = std::fs::read_to_string(&path).expect("read csv");
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("balls,days,refreshes,ticks"));
    let row = lines.next().expect("one report row");
    assert!(row.starts_with("30,15,"), "unexpected row {row}");
    assert_eq!(lines.next(), None);
}
