//! Literal forms that need more than `Display`/`FromStr`

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, SecondsFormat, Timelike};

const INF: &str = "INF";
const NEG_INF: &str = "-INF";
const NAN: &str = "NaN";

const DATE_TIME_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_TIME_MINUTES: &str = "%Y-%m-%dT%H:%M";

const NANOS_PER_SECOND: u32 = 1_000_000_000;

pub(crate) fn format_f64(value: f64) -> String {
	if value.is_nan() {
		NAN.to_string()
	} else if value == f64::INFINITY {
		INF.to_string()
	} else if value == f64::NEG_INFINITY {
		NEG_INF.to_string()
	} else {
		value.to_string()
	}
}

pub(crate) fn format_f32(value: f32) -> String {
	if value.is_nan() {
		NAN.to_string()
	} else if value == f32::INFINITY {
		INF.to_string()
	} else if value == f32::NEG_INFINITY {
		NEG_INF.to_string()
	} else {
		value.to_string()
	}
}

/// `Display` for floats never uses an exponent, but readers may.
fn is_plain_number(literal: &str) -> bool {
	!literal.is_empty()
		&& literal
			.chars()
			.all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
		&& literal.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn parse_f64(literal: &str) -> Option<f64> {
	match literal {
		INF => Some(f64::INFINITY),
		NEG_INF => Some(f64::NEG_INFINITY),
		NAN => Some(f64::NAN),
		_ if is_plain_number(literal) => literal
			.parse::<f64>()
			.ok()
			.filter(|value| value.is_finite()),
		_ => None,
	}
}

pub(crate) fn parse_f32(literal: &str) -> Option<f32> {
	match literal {
		INF => Some(f32::INFINITY),
		NEG_INF => Some(f32::NEG_INFINITY),
		NAN => Some(f32::NAN),
		_ if is_plain_number(literal) => literal
			.parse::<f32>()
			.ok()
			.filter(|value| value.is_finite()),
		_ => None,
	}
}

pub(crate) fn format_date_time(value: &NaiveDateTime) -> String {
	value.format(DATE_TIME_SECONDS).to_string()
}

pub(crate) fn parse_date_time(literal: &str) -> Option<NaiveDateTime> {
	NaiveDateTime::parse_from_str(literal, DATE_TIME_SECONDS)
		.or_else(|_| NaiveDateTime::parse_from_str(literal, DATE_TIME_MINUTES))
		.ok()
}

pub(crate) fn format_date_time_offset(value: &DateTime<FixedOffset>) -> String {
	value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub(crate) fn parse_date_time_offset(literal: &str) -> Option<DateTime<FixedOffset>> {
	DateTime::parse_from_rfc3339(literal).ok()
}

/// `PThhHmmMss[.fffffffff]S`; `None` for a leap second, which the duration
/// form cannot express.
pub(crate) fn format_time(value: &NaiveTime) -> Option<String> {
	let nanos = value.nanosecond();
	if nanos >= NANOS_PER_SECOND {
		return None;
	}
	let mut literal = format!(
		"PT{:02}H{:02}M{:02}",
		value.hour(),
		value.minute(),
		value.second()
	);
	if nanos > 0 {
		let fraction = format!("{:09}", nanos);
		literal.push('.');
		literal.push_str(fraction.trim_end_matches('0'));
	}
	literal.push('S');
	Some(literal)
}

/// Accepts `PT[hH][mM][s[.f]S]` with at least one component.
pub(crate) fn parse_time(literal: &str) -> Option<NaiveTime> {
	let mut rest = literal.strip_prefix("PT")?;
	if rest.is_empty() {
		return None;
	}
	let mut hours = 0;
	let mut minutes = 0;
	let mut seconds = 0;
	let mut nanos = 0;

	if let Some((value, tail)) = split_component(rest, 'H') {
		hours = value.parse().ok()?;
		rest = tail;
	}
	if let Some((value, tail)) = split_component(rest, 'M') {
		minutes = value.parse().ok()?;
		rest = tail;
	}
	if let Some((value, tail)) = split_component(rest, 'S') {
		let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
		seconds = whole.parse().ok()?;
		if !fraction.is_empty() {
			if fraction.len() > 9 || !fraction.chars().all(|c| c.is_ascii_digit()) {
				return None;
			}
			nanos = format!("{:0<9}", fraction).parse().ok()?;
		}
		rest = tail;
	}
	if !rest.is_empty() {
		return None;
	}
	NaiveTime::from_hms_nano_opt(hours, minutes, seconds, nanos)
}

fn split_component(input: &str, unit: char) -> Option<(&str, &str)> {
	let end = input.find(unit)?;
	let value = &input[..end];
	if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
		return None;
	}
	Some((value, &input[end + unit.len_utf8()..]))
}
