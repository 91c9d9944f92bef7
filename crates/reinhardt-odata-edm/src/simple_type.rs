//! EDM primitive types
//!
//! [`EdmSimpleTypeKind`] is the closed set of primitive types. Each kind owns
//! its literal conversion ([`EdmSimpleTypeKind::value_to_string`],
//! [`EdmSimpleTypeKind::value_of_string`]) and its coercion table
//! ([`EdmSimpleTypeKind::compatible_targets`]).

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use reinhardt_odata_exception::{ODataError, Result, SerializationError};

use crate::literal;
use crate::target::TargetType;
use crate::value::EdmValue;

/// Namespace of the primitive types.
pub const EDM_NAMESPACE: &str = "Edm";

/// Largest integer magnitude an `f64` represents exactly.
const F64_EXACT_INTEGER: i64 = 1 << 53;

/// A primitive EDM type.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue, TargetType};
///
/// let kind = EdmSimpleTypeKind::Int32;
/// assert_eq!(kind.qualified_name(), "Edm.Int32");
///
/// let value = kind.value_of_string("42").unwrap();
/// assert_eq!(value, EdmValue::Int32(42));
/// assert_eq!(kind.value_to_string(&value).unwrap(), "42");
///
/// let widened = kind.coerce(value, TargetType::Int64).unwrap();
/// assert_eq!(widened, EdmValue::Int64(42));
/// assert!(kind.coerce(EdmValue::Int32(42), TargetType::Float32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdmSimpleTypeKind {
	Binary,
	Boolean,
	Byte,
	SByte,
	Int16,
	Int32,
	Int64,
	Single,
	Double,
	Decimal,
	String,
	Guid,
	DateTime,
	DateTimeOffset,
	Time,
}

impl EdmSimpleTypeKind {
	/// Every primitive kind, in declaration order.
	pub const ALL: [EdmSimpleTypeKind; 15] = [
		EdmSimpleTypeKind::Binary,
		EdmSimpleTypeKind::Boolean,
		EdmSimpleTypeKind::Byte,
		EdmSimpleTypeKind::SByte,
		EdmSimpleTypeKind::Int16,
		EdmSimpleTypeKind::Int32,
		EdmSimpleTypeKind::Int64,
		EdmSimpleTypeKind::Single,
		EdmSimpleTypeKind::Double,
		EdmSimpleTypeKind::Decimal,
		EdmSimpleTypeKind::String,
		EdmSimpleTypeKind::Guid,
		EdmSimpleTypeKind::DateTime,
		EdmSimpleTypeKind::DateTimeOffset,
		EdmSimpleTypeKind::Time,
	];

	/// Unqualified name, e.g. `Int32`.
	pub fn name(&self) -> &'static str {
		match self {
			EdmSimpleTypeKind::Binary => "Binary",
			EdmSimpleTypeKind::Boolean => "Boolean",
			EdmSimpleTypeKind::Byte => "Byte",
			EdmSimpleTypeKind::SByte => "SByte",
			EdmSimpleTypeKind::Int16 => "Int16",
			EdmSimpleTypeKind::Int32 => "Int32",
			EdmSimpleTypeKind::Int64 => "Int64",
			EdmSimpleTypeKind::Single => "Single",
			EdmSimpleTypeKind::Double => "Double",
			EdmSimpleTypeKind::Decimal => "Decimal",
			EdmSimpleTypeKind::String => "String",
			EdmSimpleTypeKind::Guid => "Guid",
			EdmSimpleTypeKind::DateTime => "DateTime",
			EdmSimpleTypeKind::DateTimeOffset => "DateTimeOffset",
			EdmSimpleTypeKind::Time => "Time",
		}
	}

	/// Qualified name as used in metadata documents, e.g. `Edm.Int32`.
	pub fn qualified_name(&self) -> &'static str {
		match self {
			EdmSimpleTypeKind::Binary => "Edm.Binary",
			EdmSimpleTypeKind::Boolean => "Edm.Boolean",
			EdmSimpleTypeKind::Byte => "Edm.Byte",
			EdmSimpleTypeKind::SByte => "Edm.SByte",
			EdmSimpleTypeKind::Int16 => "Edm.Int16",
			EdmSimpleTypeKind::Int32 => "Edm.Int32",
			EdmSimpleTypeKind::Int64 => "Edm.Int64",
			EdmSimpleTypeKind::Single => "Edm.Single",
			EdmSimpleTypeKind::Double => "Edm.Double",
			EdmSimpleTypeKind::Decimal => "Edm.Decimal",
			EdmSimpleTypeKind::String => "Edm.String",
			EdmSimpleTypeKind::Guid => "Edm.Guid",
			EdmSimpleTypeKind::DateTime => "Edm.DateTime",
			EdmSimpleTypeKind::DateTimeOffset => "Edm.DateTimeOffset",
			EdmSimpleTypeKind::Time => "Edm.Time",
		}
	}

	/// Looks a kind up by its qualified name.
	pub fn from_qualified_name(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.qualified_name() == name)
	}

	/// The coercion table: target representations a value of this type may
	/// be materialized as. The first entry is the nominal representation.
	/// Narrowing integer targets are range-checked by [`Self::coerce`].
	pub fn compatible_targets(&self) -> &'static [TargetType] {
		use TargetType as T;
		match self {
			EdmSimpleTypeKind::Boolean => &[T::Boolean],
			EdmSimpleTypeKind::Byte => &[T::UInt8, T::Int16, T::Int32, T::Int64],
			EdmSimpleTypeKind::SByte => &[T::Int8, T::Int16, T::Int32, T::Int64],
			EdmSimpleTypeKind::Int16 => &[T::Int16, T::Int32, T::Int64, T::Int8, T::UInt8],
			EdmSimpleTypeKind::Int32 => &[T::Int32, T::Int64, T::Int16, T::Int8, T::UInt8],
			EdmSimpleTypeKind::Int64 => &[T::Int64, T::Int32, T::Int16, T::Int8, T::UInt8],
			EdmSimpleTypeKind::Single => &[T::Float32, T::Float64, T::Decimal],
			EdmSimpleTypeKind::Double => &[T::Float64, T::Decimal],
			EdmSimpleTypeKind::Decimal => &[T::Decimal, T::Float64, T::Int64],
			EdmSimpleTypeKind::String => &[T::String],
			EdmSimpleTypeKind::Binary => &[T::Bytes],
			EdmSimpleTypeKind::Guid => &[T::Uuid],
			EdmSimpleTypeKind::DateTime => &[T::DateTime],
			EdmSimpleTypeKind::DateTimeOffset => &[T::DateTimeOffset, T::DateTime],
			EdmSimpleTypeKind::Time => &[T::Time],
		}
	}

	pub fn is_compatible(&self, target: TargetType) -> bool {
		self.compatible_targets().contains(&target)
	}

	/// Converts `value` into this type's canonical [`EdmValue`] variant.
	///
	/// Lossless conversions are accepted (an `Int16` for an `Edm.Int32`, a
	/// `DateTimeOffset` for an `Edm.DateTime`, which is normalized to UTC);
	/// an integer that does not fit is `ValueOutOfRange`, any other shape is
	/// `ValueTypeMismatch`.
	pub fn normalize(&self, value: &EdmValue) -> Result<EdmValue> {
		let normalized = match (self, value) {
			(EdmSimpleTypeKind::Binary, EdmValue::Binary(_))
			| (EdmSimpleTypeKind::Boolean, EdmValue::Boolean(_))
			| (EdmSimpleTypeKind::Single, EdmValue::Single(_))
			| (EdmSimpleTypeKind::Double, EdmValue::Double(_))
			| (EdmSimpleTypeKind::Decimal, EdmValue::Decimal(_))
			| (EdmSimpleTypeKind::String, EdmValue::String(_))
			| (EdmSimpleTypeKind::Guid, EdmValue::Guid(_))
			| (EdmSimpleTypeKind::DateTime, EdmValue::DateTime(_))
			| (EdmSimpleTypeKind::DateTimeOffset, EdmValue::DateTimeOffset(_))
			| (EdmSimpleTypeKind::Time, EdmValue::Time(_)) => value.clone(),

			(
				EdmSimpleTypeKind::Byte
				| EdmSimpleTypeKind::SByte
				| EdmSimpleTypeKind::Int16
				| EdmSimpleTypeKind::Int32
				| EdmSimpleTypeKind::Int64,
				_,
			) => {
				let integer = value.as_integer().ok_or_else(|| self.mismatch(value))?;
				let target = self.compatible_targets()[0];
				integer_value(target, integer).ok_or_else(|| {
					ODataError::from(SerializationError::ValueOutOfRange {
						edm_type: value.kind_name().to_string(),
						target: self.qualified_name().to_string(),
						value: integer.to_string(),
					})
				})?
			}

			(EdmSimpleTypeKind::Single, EdmValue::Byte(v)) => EdmValue::Single(f32::from(*v)),
			(EdmSimpleTypeKind::Single, EdmValue::SByte(v)) => EdmValue::Single(f32::from(*v)),
			(EdmSimpleTypeKind::Single, EdmValue::Int16(v)) => EdmValue::Single(f32::from(*v)),

			(EdmSimpleTypeKind::Double, EdmValue::Single(v)) => EdmValue::Double(f64::from(*v)),
			(
				EdmSimpleTypeKind::Double,
				EdmValue::Byte(_)
				| EdmValue::SByte(_)
				| EdmValue::Int16(_)
				| EdmValue::Int32(_)
				| EdmValue::Int64(_),
			) => {
				let integer = value.as_integer().ok_or_else(|| self.mismatch(value))?;
				if integer.unsigned_abs() > F64_EXACT_INTEGER.unsigned_abs() {
					return Err(SerializationError::ValueOutOfRange {
						edm_type: value.kind_name().to_string(),
						target: self.qualified_name().to_string(),
						value: integer.to_string(),
					}
					.into());
				}
				EdmValue::Double(integer as f64)
			}

			(EdmSimpleTypeKind::Decimal, EdmValue::Single(v)) => {
				EdmValue::Decimal(self.decimal_from_float(f64::from(*v), value)?)
			}
			(EdmSimpleTypeKind::Decimal, EdmValue::Double(v)) => {
				EdmValue::Decimal(self.decimal_from_float(*v, value)?)
			}
			(
				EdmSimpleTypeKind::Decimal,
				EdmValue::Byte(_)
				| EdmValue::SByte(_)
				| EdmValue::Int16(_)
				| EdmValue::Int32(_)
				| EdmValue::Int64(_),
			) => {
				let integer = value.as_integer().ok_or_else(|| self.mismatch(value))?;
				EdmValue::Decimal(Decimal::from(integer))
			}

			(EdmSimpleTypeKind::DateTime, EdmValue::DateTimeOffset(v)) => {
				EdmValue::DateTime(v.naive_utc())
			}
			(EdmSimpleTypeKind::DateTimeOffset, EdmValue::DateTime(v)) => {
				EdmValue::DateTimeOffset(v.and_utc().fixed_offset())
			}

			_ => return Err(self.mismatch(value)),
		};
		Ok(normalized)
	}

	/// Renders a non-null value as this type's literal.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue};
	///
	/// let kind = EdmSimpleTypeKind::Double;
	/// assert_eq!(kind.value_to_string(&EdmValue::Double(f64::INFINITY)).unwrap(), "INF");
	/// assert_eq!(kind.value_to_string(&EdmValue::Int16(3)).unwrap(), "3");
	/// assert!(kind.value_to_string(&EdmValue::from("3")).is_err());
	/// ```
	pub fn value_to_string(&self, value: &EdmValue) -> Result<String> {
		let literal = match self.normalize(value)? {
			EdmValue::Binary(bytes) => STANDARD.encode(bytes),
			EdmValue::Boolean(v) => v.to_string(),
			EdmValue::Byte(v) => v.to_string(),
			EdmValue::SByte(v) => v.to_string(),
			EdmValue::Int16(v) => v.to_string(),
			EdmValue::Int32(v) => v.to_string(),
			EdmValue::Int64(v) => v.to_string(),
			EdmValue::Single(v) => literal::format_f32(v),
			EdmValue::Double(v) => literal::format_f64(v),
			EdmValue::Decimal(v) => v.to_string(),
			EdmValue::String(v) => v,
			EdmValue::Guid(v) => v.hyphenated().to_string(),
			EdmValue::DateTime(v) => literal::format_date_time(&v),
			EdmValue::DateTimeOffset(v) => literal::format_date_time_offset(&v),
			EdmValue::Time(v) => literal::format_time(&v).ok_or_else(|| {
				ODataError::from(SerializationError::ValueOutOfRange {
					edm_type: value.kind_name().to_string(),
					target: self.qualified_name().to_string(),
					value: v.to_string(),
				})
			})?,
			EdmValue::Null => return Err(self.mismatch(value)),
		};
		Ok(literal)
	}

	/// Parses a literal into this type's canonical value.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue};
	///
	/// assert_eq!(
	/// 	EdmSimpleTypeKind::Boolean.value_of_string("1").unwrap(),
	/// 	EdmValue::Boolean(true)
	/// );
	/// assert!(EdmSimpleTypeKind::Byte.value_of_string("256").is_err());
	/// ```
	pub fn value_of_string(&self, literal: &str) -> Result<EdmValue> {
		let value = match self {
			EdmSimpleTypeKind::Binary => STANDARD.decode(literal).ok().map(EdmValue::Binary),
			EdmSimpleTypeKind::Boolean => match literal {
				"true" | "1" => Some(EdmValue::Boolean(true)),
				"false" | "0" => Some(EdmValue::Boolean(false)),
				_ => None,
			},
			EdmSimpleTypeKind::Byte => literal.parse().ok().map(EdmValue::Byte),
			EdmSimpleTypeKind::SByte => literal.parse().ok().map(EdmValue::SByte),
			EdmSimpleTypeKind::Int16 => literal.parse().ok().map(EdmValue::Int16),
			EdmSimpleTypeKind::Int32 => literal.parse().ok().map(EdmValue::Int32),
			EdmSimpleTypeKind::Int64 => literal.parse().ok().map(EdmValue::Int64),
			EdmSimpleTypeKind::Single => literal::parse_f32(literal).map(EdmValue::Single),
			EdmSimpleTypeKind::Double => literal::parse_f64(literal).map(EdmValue::Double),
			EdmSimpleTypeKind::Decimal => Decimal::from_str(literal)
				.or_else(|_| Decimal::from_scientific(literal))
				.ok()
				.map(EdmValue::Decimal),
			EdmSimpleTypeKind::String => Some(EdmValue::String(literal.to_string())),
			EdmSimpleTypeKind::Guid => Uuid::parse_str(literal).ok().map(EdmValue::Guid),
			EdmSimpleTypeKind::DateTime => {
				literal::parse_date_time(literal).map(EdmValue::DateTime)
			}
			EdmSimpleTypeKind::DateTimeOffset => {
				literal::parse_date_time_offset(literal).map(EdmValue::DateTimeOffset)
			}
			EdmSimpleTypeKind::Time => literal::parse_time(literal).map(EdmValue::Time),
		};
		value.ok_or_else(|| {
			SerializationError::InvalidLiteral {
				edm_type: self.qualified_name().to_string(),
				literal: literal.to_string(),
			}
			.into()
		})
	}

	/// Second-stage coercion of a value already parsed as this type into the
	/// representation `target`.
	///
	/// Targets outside [`Self::compatible_targets`] are `UnsupportedCoercion`;
	/// a narrowing whose value does not fit is `ValueOutOfRange`. `Null` stays
	/// `Null` for any compatible target.
	pub fn coerce(&self, value: EdmValue, target: TargetType) -> Result<EdmValue> {
		if !self.is_compatible(target) {
			return Err(SerializationError::UnsupportedCoercion {
				edm_type: self.qualified_name().to_string(),
				target: target.name().to_string(),
			}
			.into());
		}
		if value.is_null() {
			return Ok(value);
		}
		let value = self.normalize(&value)?;
		let out_of_range = |value: &EdmValue| {
			ODataError::from(SerializationError::ValueOutOfRange {
				edm_type: self.qualified_name().to_string(),
				target: target.name().to_string(),
				value: value.describe(),
			})
		};

		let coerced = match (target, &value) {
			(
				TargetType::Int8
				| TargetType::UInt8
				| TargetType::Int16
				| TargetType::Int32
				| TargetType::Int64,
				_,
			) => {
				let integer = match &value {
					EdmValue::Decimal(v) if v.fract().is_zero() => v.to_i64(),
					other => other.as_integer(),
				};
				integer
					.and_then(|integer| integer_value(target, integer))
					.ok_or_else(|| out_of_range(&value))?
			}
			(TargetType::Float32, EdmValue::Single(_)) => value,
			(TargetType::Float64, EdmValue::Single(v)) => EdmValue::Double(f64::from(*v)),
			(TargetType::Float64, EdmValue::Double(_)) => value,
			(TargetType::Float64, EdmValue::Decimal(v)) => {
				EdmValue::Double(v.to_f64().ok_or_else(|| out_of_range(&value))?)
			}
			(TargetType::Decimal, EdmValue::Single(v)) => EdmValue::Decimal(
				Decimal::try_from(*v).map_err(|_| out_of_range(&value))?,
			),
			(TargetType::Decimal, EdmValue::Double(v)) => EdmValue::Decimal(
				Decimal::try_from(*v).map_err(|_| out_of_range(&value))?,
			),
			(TargetType::DateTime, EdmValue::DateTimeOffset(v)) => EdmValue::DateTime(v.naive_utc()),
			_ => value,
		};
		tracing::trace!(
			edm_type = self.qualified_name(),
			target = target.name(),
			"coerced value"
		);
		Ok(coerced)
	}

	fn mismatch(&self, value: &EdmValue) -> ODataError {
		SerializationError::ValueTypeMismatch {
			edm_type: self.qualified_name().to_string(),
			value_kind: value.kind_name().to_string(),
		}
		.into()
	}

	fn decimal_from_float(&self, float: f64, value: &EdmValue) -> Result<Decimal> {
		Decimal::try_from(float).map_err(|_| {
			SerializationError::ValueOutOfRange {
				edm_type: value.kind_name().to_string(),
				target: self.qualified_name().to_string(),
				value: value.describe(),
			}
			.into()
		})
	}
}

/// Builds the integral value for `target`, `None` when `integer` does not fit.
fn integer_value(target: TargetType, integer: i64) -> Option<EdmValue> {
	let (min, max) = target.integer_range()?;
	if integer < min || integer > max {
		return None;
	}
	let value = match target {
		TargetType::Int8 => EdmValue::SByte(i8::try_from(integer).ok()?),
		TargetType::UInt8 => EdmValue::Byte(u8::try_from(integer).ok()?),
		TargetType::Int16 => EdmValue::Int16(i16::try_from(integer).ok()?),
		TargetType::Int32 => EdmValue::Int32(i32::try_from(integer).ok()?),
		_ => EdmValue::Int64(integer),
	};
	Some(value)
}

impl fmt::Display for EdmSimpleTypeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.qualified_name())
	}
}

impl FromStr for EdmSimpleTypeKind {
	type Err = ODataError;

	fn from_str(s: &str) -> Result<Self> {
		Self::from_qualified_name(s)
			.ok_or_else(|| ODataError::InvalidArgument(format!("unknown EDM primitive type '{}'", s)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{NaiveDate, NaiveTime};
	use rstest::rstest;

	fn serialization_error(result: Result<EdmValue>) -> SerializationError {
		match result {
			Err(ODataError::Serialization(error)) => error,
			other => panic!("expected serialization error, got {:?}", other),
		}
	}

	#[rstest]
	fn test_qualified_name_lookup() {
		for kind in EdmSimpleTypeKind::ALL {
			assert_eq!(
				EdmSimpleTypeKind::from_qualified_name(kind.qualified_name()),
				Some(kind)
			);
			assert_eq!(kind.qualified_name(), format!("{}.{}", EDM_NAMESPACE, kind.name()));
		}
		assert_eq!(EdmSimpleTypeKind::from_qualified_name("Int32"), None);
		assert!("Edm.Stream".parse::<EdmSimpleTypeKind>().is_err());
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, TargetType::Int64, true)]
	#[case(EdmSimpleTypeKind::Int32, TargetType::Float32, false)]
	#[case(EdmSimpleTypeKind::Byte, TargetType::Int8, false)]
	#[case(EdmSimpleTypeKind::Decimal, TargetType::Int64, true)]
	#[case(EdmSimpleTypeKind::Double, TargetType::Float32, false)]
	#[case(EdmSimpleTypeKind::DateTimeOffset, TargetType::DateTime, true)]
	#[case(EdmSimpleTypeKind::DateTime, TargetType::DateTimeOffset, false)]
	fn test_is_compatible(
		#[case] kind: EdmSimpleTypeKind,
		#[case] target: TargetType,
		#[case] expected: bool,
	) {
		assert_eq!(kind.is_compatible(target), expected);
	}

	#[rstest]
	fn test_nominal_target_is_first() {
		assert_eq!(EdmSimpleTypeKind::Int16.compatible_targets()[0], TargetType::Int16);
		assert_eq!(EdmSimpleTypeKind::Binary.compatible_targets()[0], TargetType::Bytes);
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Int16(7), EdmValue::Int32(7))]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Int64(7), EdmValue::Int32(7))]
	#[case(EdmSimpleTypeKind::Byte, EdmValue::Int32(255), EdmValue::Byte(255))]
	#[case(EdmSimpleTypeKind::Double, EdmValue::Single(0.5), EdmValue::Double(0.5))]
	#[case(EdmSimpleTypeKind::Double, EdmValue::Int32(3), EdmValue::Double(3.0))]
	#[case(EdmSimpleTypeKind::Single, EdmValue::Int16(3), EdmValue::Single(3.0))]
	#[case(EdmSimpleTypeKind::Decimal, EdmValue::Int64(12), EdmValue::Decimal(Decimal::from(12)))]
	fn test_normalize(
		#[case] kind: EdmSimpleTypeKind,
		#[case] value: EdmValue,
		#[case] expected: EdmValue,
	) {
		assert_eq!(kind.normalize(&value).unwrap(), expected);
	}

	#[rstest]
	fn test_normalize_out_of_range() {
		let error = serialization_error(EdmSimpleTypeKind::Byte.normalize(&EdmValue::Int32(-1)));
		assert!(matches!(error, SerializationError::ValueOutOfRange { .. }));

		let error = serialization_error(
			EdmSimpleTypeKind::Double.normalize(&EdmValue::Int64(i64::MAX)),
		);
		assert!(matches!(error, SerializationError::ValueOutOfRange { .. }));
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::from("42"))]
	#[case(EdmSimpleTypeKind::String, EdmValue::Int32(42))]
	#[case(EdmSimpleTypeKind::Boolean, EdmValue::Int32(1))]
	#[case(EdmSimpleTypeKind::Single, EdmValue::Int32(1))]
	#[case(EdmSimpleTypeKind::Guid, EdmValue::from("not-a-guid"))]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Null)]
	fn test_normalize_mismatch(#[case] kind: EdmSimpleTypeKind, #[case] value: EdmValue) {
		let error = serialization_error(kind.normalize(&value));
		assert!(matches!(error, SerializationError::ValueTypeMismatch { .. }));
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Boolean, EdmValue::Boolean(false), "false")]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Int32(52), "52")]
	#[case(EdmSimpleTypeKind::SByte, EdmValue::SByte(-128), "-128")]
	#[case(EdmSimpleTypeKind::Single, EdmValue::Single(f32::NAN), "NaN")]
	#[case(EdmSimpleTypeKind::Double, EdmValue::Double(-1.25), "-1.25")]
	#[case(EdmSimpleTypeKind::Decimal, EdmValue::Decimal(Decimal::new(12345, 2)), "123.45")]
	#[case(EdmSimpleTypeKind::String, EdmValue::from("Walter Winter"), "Walter Winter")]
	#[case(EdmSimpleTypeKind::Binary, EdmValue::Binary(vec![1, 2, 3, 4, 0x80]), "AQIDBIA=")]
	fn test_value_to_string(
		#[case] kind: EdmSimpleTypeKind,
		#[case] value: EdmValue,
		#[case] expected: &str,
	) {
		assert_eq!(kind.value_to_string(&value).unwrap(), expected);
	}

	#[rstest]
	fn test_date_and_time_literals() {
		let date_time = NaiveDate::from_ymd_opt(1999, 1, 1)
			.and_then(|date| date.and_hms_opt(0, 0, 0))
			.unwrap();
		assert_eq!(
			EdmSimpleTypeKind::DateTime
				.value_to_string(&EdmValue::DateTime(date_time))
				.unwrap(),
			"1999-01-01T00:00:00"
		);
		assert_eq!(
			EdmSimpleTypeKind::DateTimeOffset
				.value_to_string(&EdmValue::DateTime(date_time))
				.unwrap(),
			"1999-01-01T00:00:00Z"
		);

		let time = NaiveTime::from_hms_opt(12, 34, 56).unwrap();
		assert_eq!(
			EdmSimpleTypeKind::Time
				.value_to_string(&EdmValue::Time(time))
				.unwrap(),
			"PT12H34M56S"
		);
	}

	#[rstest]
	fn test_guid_literal_is_lowercase() {
		let guid = EdmSimpleTypeKind::Guid
			.value_of_string("1A2B3C4D-0000-1111-2222-333344445555")
			.unwrap();
		assert_eq!(
			EdmSimpleTypeKind::Guid.value_to_string(&guid).unwrap(),
			"1a2b3c4d-0000-1111-2222-333344445555"
		);
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, "42", EdmValue::Int32(42))]
	#[case(EdmSimpleTypeKind::Int64, "-9000000000", EdmValue::Int64(-9_000_000_000))]
	#[case(EdmSimpleTypeKind::Boolean, "0", EdmValue::Boolean(false))]
	#[case(EdmSimpleTypeKind::Double, "-INF", EdmValue::Double(f64::NEG_INFINITY))]
	#[case(EdmSimpleTypeKind::Decimal, "1e3", EdmValue::Decimal(Decimal::from(1000)))]
	#[case(EdmSimpleTypeKind::Binary, "AQIDBIA=", EdmValue::Binary(vec![1, 2, 3, 4, 0x80]))]
	#[case(EdmSimpleTypeKind::String, "", EdmValue::from(""))]
	fn test_value_of_string(
		#[case] kind: EdmSimpleTypeKind,
		#[case] literal: &str,
		#[case] expected: EdmValue,
	) {
		assert_eq!(kind.value_of_string(literal).unwrap(), expected);
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, "4.2")]
	#[case(EdmSimpleTypeKind::Int32, "")]
	#[case(EdmSimpleTypeKind::Int16, "40000")]
	#[case(EdmSimpleTypeKind::Boolean, "TRUE")]
	#[case(EdmSimpleTypeKind::Double, "inf")]
	#[case(EdmSimpleTypeKind::Guid, "xyz")]
	#[case(EdmSimpleTypeKind::Binary, "***")]
	#[case(EdmSimpleTypeKind::DateTime, "29.02.2012")]
	#[case(EdmSimpleTypeKind::DateTimeOffset, "2012-02-29T01:02:03")]
	#[case(EdmSimpleTypeKind::Time, "12:00")]
	fn test_value_of_string_invalid(#[case] kind: EdmSimpleTypeKind, #[case] literal: &str) {
		let error = serialization_error(kind.value_of_string(literal));
		match error {
			SerializationError::InvalidLiteral { edm_type, literal: rejected } => {
				assert_eq!(edm_type, kind.qualified_name());
				assert_eq!(rejected, literal);
			}
			other => panic!("unexpected error {:?}", other),
		}
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Int32(42), TargetType::Int64, EdmValue::Int64(42))]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Int32(42), TargetType::Int8, EdmValue::SByte(42))]
	#[case(EdmSimpleTypeKind::Byte, EdmValue::Byte(200), TargetType::Int16, EdmValue::Int16(200))]
	#[case(EdmSimpleTypeKind::Single, EdmValue::Single(0.5), TargetType::Float64, EdmValue::Double(0.5))]
	#[case(
		EdmSimpleTypeKind::Double,
		EdmValue::Double(2.5),
		TargetType::Decimal,
		EdmValue::Decimal(Decimal::new(25, 1))
	)]
	#[case(
		EdmSimpleTypeKind::Decimal,
		EdmValue::Decimal(Decimal::new(4200, 2)),
		TargetType::Int64,
		EdmValue::Int64(42)
	)]
	#[case(
		EdmSimpleTypeKind::Decimal,
		EdmValue::Decimal(Decimal::new(25, 1)),
		TargetType::Float64,
		EdmValue::Double(2.5)
	)]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Null, TargetType::Int64, EdmValue::Null)]
	fn test_coerce(
		#[case] kind: EdmSimpleTypeKind,
		#[case] value: EdmValue,
		#[case] target: TargetType,
		#[case] expected: EdmValue,
	) {
		assert_eq!(kind.coerce(value, target).unwrap(), expected);
	}

	#[rstest]
	fn test_coerce_date_time_offset_to_utc() {
		let value = EdmSimpleTypeKind::DateTimeOffset
			.value_of_string("2012-02-29T01:02:03+01:00")
			.unwrap();
		let coerced = EdmSimpleTypeKind::DateTimeOffset
			.coerce(value, TargetType::DateTime)
			.unwrap();
		assert_eq!(
			EdmSimpleTypeKind::DateTime.value_to_string(&coerced).unwrap(),
			"2012-02-29T00:02:03"
		);
	}

	#[rstest]
	fn test_coerce_unsupported_names_both_types() {
		let error = serialization_error(
			EdmSimpleTypeKind::Int32.coerce(EdmValue::Int32(42), TargetType::Float32),
		);
		match error {
			SerializationError::UnsupportedCoercion { edm_type, target } => {
				assert_eq!(edm_type, "Edm.Int32");
				assert_eq!(target, "Float32");
			}
			other => panic!("unexpected error {:?}", other),
		}
	}

	#[rstest]
	#[case(EdmSimpleTypeKind::Int32, EdmValue::Int32(300), TargetType::UInt8)]
	#[case(EdmSimpleTypeKind::Int64, EdmValue::Int64(-1), TargetType::UInt8)]
	#[case(EdmSimpleTypeKind::Decimal, EdmValue::Decimal(Decimal::new(15, 1)), TargetType::Int64)]
	fn test_coerce_out_of_range(
		#[case] kind: EdmSimpleTypeKind,
		#[case] value: EdmValue,
		#[case] target: TargetType,
	) {
		let error = serialization_error(kind.coerce(value, target));
		assert!(matches!(error, SerializationError::ValueOutOfRange { .. }));
	}
}
