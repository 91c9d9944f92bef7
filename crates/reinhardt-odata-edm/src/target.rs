//! Target representations for second-stage coercion

use std::fmt;

/// The representation a caller asks a read value to be materialized as.
///
/// Each target corresponds to exactly one [`EdmValue`](crate::EdmValue)
/// variant, so a coerced value can be matched on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
	Boolean,
	/// `i8`, produced as `EdmValue::SByte`
	Int8,
	/// `u8`, produced as `EdmValue::Byte`
	UInt8,
	Int16,
	Int32,
	Int64,
	/// `f32`, produced as `EdmValue::Single`
	Float32,
	/// `f64`, produced as `EdmValue::Double`
	Float64,
	Decimal,
	String,
	/// `Vec<u8>`, produced as `EdmValue::Binary`
	Bytes,
	/// produced as `EdmValue::Guid`
	Uuid,
	DateTime,
	DateTimeOffset,
	Time,
}

impl TargetType {
	pub fn name(&self) -> &'static str {
		match self {
			TargetType::Boolean => "Boolean",
			TargetType::Int8 => "Int8",
			TargetType::UInt8 => "UInt8",
			TargetType::Int16 => "Int16",
			TargetType::Int32 => "Int32",
			TargetType::Int64 => "Int64",
			TargetType::Float32 => "Float32",
			TargetType::Float64 => "Float64",
			TargetType::Decimal => "Decimal",
			TargetType::String => "String",
			TargetType::Bytes => "Bytes",
			TargetType::Uuid => "Uuid",
			TargetType::DateTime => "DateTime",
			TargetType::DateTimeOffset => "DateTimeOffset",
			TargetType::Time => "Time",
		}
	}

	/// Inclusive integer range of the integral targets.
	pub(crate) fn integer_range(&self) -> Option<(i64, i64)> {
		match self {
			TargetType::Int8 => Some((i64::from(i8::MIN), i64::from(i8::MAX))),
			TargetType::UInt8 => Some((0, i64::from(u8::MAX))),
			TargetType::Int16 => Some((i64::from(i16::MIN), i64::from(i16::MAX))),
			TargetType::Int32 => Some((i64::from(i32::MIN), i64::from(i32::MAX))),
			TargetType::Int64 => Some((i64::MIN, i64::MAX)),
			_ => None,
		}
	}
}

impl fmt::Display for TargetType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
