use std::time::Duration;

use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_DAY: u128 = 86_400 * NANOS_PER_SEC;

/// Interval string that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum IntervalError {
	/// Not a sequence of `<number><unit>` terms.
	#[error("invalid duration {input:?}")]
	Invalid {
		/// Rejected input.
		input: String,
	},
	/// A number without a unit.
	#[error("missing unit in duration {input:?}")]
	MissingUnit {
		/// Rejected input.
		input: String,
	},
	/// A unit outside the supported set.
	#[error("unknown unit {unit:?} in duration {input:?}")]
	UnknownUnit {
		/// Offending unit.
		unit: String,
		/// Rejected input.
		input: String,
	},
	/// Larger than a `Duration` holds.
	#[error("duration {input:?} out of range")]
	Overflow {
		/// Rejected input.
		input: String,
	},
}

fn unit_nanos(unit: &str) -> Option<u128> {
	let nanos = match unit {
		"ns" => 1,
		"us" | "µs" | "μs" => 1_000,
		"ms" => 1_000_000,
		"s" => NANOS_PER_SEC,
		"m" => 60 * NANOS_PER_SEC,
		"h" => 3_600 * NANOS_PER_SEC,
		"d" => NANOS_PER_DAY,
		"w" => 7 * NANOS_PER_DAY,
		"y" => 365 * NANOS_PER_DAY,
		_ => return None,
	};
	Some(nanos)
}

/// Parse duration syntax such as `1s`, `250ms`, `1.5h`, or `1h30m`.
///
/// Terms are a decimal number with an optional fraction followed by one of
/// `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`, `d`, `w`, `y`. A lone `0` is allowed.
pub(crate) fn parse(input: &str) -> Result<Duration, IntervalError> {
	let invalid = || IntervalError::Invalid { input: input.to_owned() };
	let overflow = || IntervalError::Overflow { input: input.to_owned() };

	if input == "0" {
		return Ok(Duration::ZERO);
	}
	if input.is_empty() {
		return Err(invalid());
	}

	let mut rest = input;
	let mut total: u128 = 0;
	while !rest.is_empty() {
		let (whole, after) = split_digits(rest);
		let (fraction, after) = match after.strip_prefix('.') {
			Some(tail) => split_digits(tail),
			None => ("", after),
		};
		if whole.is_empty() && fraction.is_empty() {
			return Err(invalid());
		}

		let unit_len = after.find(|c: char| c.is_ascii_digit() || c == '.').unwrap_or(after.len());
		let (unit, tail) = after.split_at(unit_len);
		if unit.is_empty() {
			return Err(IntervalError::MissingUnit { input: input.to_owned() });
		}
		let scale = unit_nanos(unit).ok_or_else(|| IntervalError::UnknownUnit {
			unit: unit.to_owned(),
			input: input.to_owned(),
		})?;

		let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| overflow())? };
		let nanos = whole
			.checked_mul(scale)
			.and_then(|nanos| nanos.checked_add(fraction_nanos(fraction, scale)))
			.ok_or_else(overflow)?;
		total = total.checked_add(nanos).ok_or_else(overflow)?;
		rest = tail;
	}

	let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| overflow())?;
	let subsec = u32::try_from(total % NANOS_PER_SEC).map_err(|_| overflow())?;
	Ok(Duration::new(secs, subsec))
}

fn split_digits(input: &str) -> (&str, &str) {
	let len = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
	input.split_at(len)
}

/// Digits past the 20th are below nanosecond resolution for every unit.
fn fraction_nanos(digits: &str, scale: u128) -> u128 {
	let mut value: u128 = 0;
	let mut divisor: u128 = 1;
	for digit in digits.bytes().take(20) {
		value = value * 10 + u128::from(digit - b'0');
		divisor *= 10;
	}
	value * scale / divisor
}

#[cfg(test)]
mod tests;
