use std::time::Duration;

use super::{IntervalError, parse};

#[test]
fn parses_single_terms() {
	assert_eq!(parse("1s"), Ok(Duration::from_secs(1)));
	assert_eq!(parse("250ms"), Ok(Duration::from_millis(250)));
	assert_eq!(parse("10us"), Ok(Duration::from_micros(10)));
	assert_eq!(parse("10µs"), Ok(Duration::from_micros(10)));
	assert_eq!(parse("7ns"), Ok(Duration::from_nanos(7)));
	assert_eq!(parse("2m"), Ok(Duration::from_secs(120)));
	assert_eq!(parse("1h"), Ok(Duration::from_secs(3_600)));
}

#[test]
fn parses_long_units() {
	assert_eq!(parse("1d"), Ok(Duration::from_secs(86_400)));
	assert_eq!(parse("1w"), Ok(Duration::from_secs(7 * 86_400)));
	assert_eq!(parse("1y"), Ok(Duration::from_secs(365 * 86_400)));
}

#[test]
fn parses_fractions_and_sequences() {
	assert_eq!(parse("1.5s"), Ok(Duration::from_millis(1_500)));
	assert_eq!(parse(".5s"), Ok(Duration::from_millis(500)));
	assert_eq!(parse("1h30m"), Ok(Duration::from_secs(5_400)));
	assert_eq!(parse("1m0.25s"), Ok(Duration::from_millis(60_250)));
	assert_eq!(parse("0s"), Ok(Duration::ZERO));
	assert_eq!(parse("0"), Ok(Duration::ZERO));
}

#[test]
fn rejects_malformed_input() {
	assert!(matches!(parse(""), Err(IntervalError::Invalid { .. })));
	assert!(matches!(parse("s"), Err(IntervalError::Invalid { .. })));
	assert!(matches!(parse("-1s"), Err(IntervalError::Invalid { .. })));
	assert!(matches!(parse("1"), Err(IntervalError::MissingUnit { .. })));
	assert!(matches!(parse("1s5"), Err(IntervalError::MissingUnit { .. })));
	assert_eq!(
		parse("3 days"),
		Err(IntervalError::UnknownUnit {
			unit: " days".into(),
			input: "3 days".into(),
		})
	);
}

#[test]
fn rejects_out_of_range() {
	assert!(matches!(parse("99999999999999999999999999999999999999999y"), Err(IntervalError::Overflow { .. })));
	assert!(matches!(parse("1000000000000y"), Err(IntervalError::Overflow { .. })));
}
