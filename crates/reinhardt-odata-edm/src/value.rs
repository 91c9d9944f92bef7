//! Runtime values of EDM primitive types

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A domain value handed to, or produced by, the entity provider.
///
/// There is one variant per EDM primitive type plus [`EdmValue::Null`].
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::EdmValue;
///
/// let age = EdmValue::from(52_i32);
/// assert_eq!(age, EdmValue::Int32(52));
/// assert_eq!(age.kind_name(), "Int32");
///
/// let missing: EdmValue = Option::<String>::None.into();
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EdmValue {
	Null,
	Binary(Vec<u8>),
	Boolean(bool),
	Byte(u8),
	SByte(i8),
	Int16(i16),
	Int32(i32),
	Int64(i64),
	Single(f32),
	Double(f64),
	Decimal(Decimal),
	String(String),
	Guid(Uuid),
	DateTime(NaiveDateTime),
	DateTimeOffset(DateTime<FixedOffset>),
	Time(NaiveTime),
}

impl EdmValue {
	pub fn is_null(&self) -> bool {
		matches!(self, EdmValue::Null)
	}

	/// Name of the runtime variant, used in error messages.
	pub fn kind_name(&self) -> &'static str {
		match self {
			EdmValue::Null => "Null",
			EdmValue::Binary(_) => "Binary",
			EdmValue::Boolean(_) => "Boolean",
			EdmValue::Byte(_) => "Byte",
			EdmValue::SByte(_) => "SByte",
			EdmValue::Int16(_) => "Int16",
			EdmValue::Int32(_) => "Int32",
			EdmValue::Int64(_) => "Int64",
			EdmValue::Single(_) => "Single",
			EdmValue::Double(_) => "Double",
			EdmValue::Decimal(_) => "Decimal",
			EdmValue::String(_) => "String",
			EdmValue::Guid(_) => "Guid",
			EdmValue::DateTime(_) => "DateTime",
			EdmValue::DateTimeOffset(_) => "DateTimeOffset",
			EdmValue::Time(_) => "Time",
		}
	}

	/// The value as a signed integer, for any of the integral variants.
	pub(crate) fn as_integer(&self) -> Option<i64> {
		match *self {
			EdmValue::Byte(v) => Some(i64::from(v)),
			EdmValue::SByte(v) => Some(i64::from(v)),
			EdmValue::Int16(v) => Some(i64::from(v)),
			EdmValue::Int32(v) => Some(i64::from(v)),
			EdmValue::Int64(v) => Some(v),
			_ => None,
		}
	}

	/// Debug-friendly rendering for error context.
	pub(crate) fn describe(&self) -> String {
		match self {
			EdmValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
			other => other.to_string(),
		}
	}
}

impl fmt::Display for EdmValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EdmValue::Null => f.write_str("null"),
			EdmValue::Binary(bytes) => write!(f, "{:?}", bytes),
			EdmValue::Boolean(v) => write!(f, "{}", v),
			EdmValue::Byte(v) => write!(f, "{}", v),
			EdmValue::SByte(v) => write!(f, "{}", v),
			EdmValue::Int16(v) => write!(f, "{}", v),
			EdmValue::Int32(v) => write!(f, "{}", v),
			EdmValue::Int64(v) => write!(f, "{}", v),
			EdmValue::Single(v) => write!(f, "{}", v),
			EdmValue::Double(v) => write!(f, "{}", v),
			EdmValue::Decimal(v) => write!(f, "{}", v),
			EdmValue::String(v) => f.write_str(v),
			EdmValue::Guid(v) => write!(f, "{}", v),
			EdmValue::DateTime(v) => write!(f, "{}", v),
			EdmValue::DateTimeOffset(v) => write!(f, "{}", v),
			EdmValue::Time(v) => write!(f, "{}", v),
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for EdmValue {
				fn from(value: $ty) -> Self {
					EdmValue::$variant(value)
				}
			}
		)*
	};
}

impl_from! {
	Vec<u8> => Binary,
	bool => Boolean,
	u8 => Byte,
	i8 => SByte,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	f32 => Single,
	f64 => Double,
	Decimal => Decimal,
	String => String,
	Uuid => Guid,
	NaiveDateTime => DateTime,
	DateTime<FixedOffset> => DateTimeOffset,
	NaiveTime => Time,
}

impl From<&str> for EdmValue {
	fn from(value: &str) -> Self {
		EdmValue::String(value.to_string())
	}
}

impl From<&[u8]> for EdmValue {
	fn from(value: &[u8]) -> Self {
		EdmValue::Binary(value.to_vec())
	}
}

impl<T: Into<EdmValue>> From<Option<T>> for EdmValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(EdmValue::Null, Into::into)
	}
}
