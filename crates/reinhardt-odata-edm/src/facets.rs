//! Property facets

use reinhardt_odata_exception::{Result, SerializationError};

use crate::value::EdmValue;

/// Constraints attached to a property declaration.
///
/// Only `nullable` and `max_length` are enforced when values are converted;
/// the remaining facets are carried into the metadata document.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::EdmFacets;
///
/// let facets = EdmFacets::new().with_nullable(false).with_max_length(20);
/// assert!(!facets.is_nullable());
/// assert_eq!(facets.max_length, Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmFacets {
	pub nullable: Option<bool>,
	pub max_length: Option<usize>,
	pub default_value: Option<String>,
	pub fixed_length: Option<bool>,
	pub precision: Option<u32>,
	pub scale: Option<u32>,
}

impl Default for EdmFacets {
	fn default() -> Self {
		Self::new()
	}
}

impl EdmFacets {
	/// Facets with nothing declared (the property is nullable).
	pub fn new() -> Self {
		Self {
			nullable: None,
			max_length: None,
			default_value: None,
			fixed_length: None,
			precision: None,
			scale: None,
		}
	}

	pub fn with_nullable(mut self, nullable: bool) -> Self {
		self.nullable = Some(nullable);
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
		self.default_value = Some(default_value.into());
		self
	}

	pub fn with_fixed_length(mut self, fixed_length: bool) -> Self {
		self.fixed_length = Some(fixed_length);
		self
	}

	pub fn with_precision(mut self, precision: u32) -> Self {
		self.precision = Some(precision);
		self
	}

	pub fn with_scale(mut self, scale: u32) -> Self {
		self.scale = Some(scale);
		self
	}

	/// Properties are nullable unless declared otherwise.
	pub fn is_nullable(&self) -> bool {
		self.nullable.unwrap_or(true)
	}

	/// Checks nullability and, for String and Binary values, the length limit.
	/// String length counts characters, Binary length counts bytes.
	pub fn check(&self, property: &str, value: &EdmValue) -> Result<()> {
		let actual = match value {
			EdmValue::Null if !self.is_nullable() => {
				return Err(SerializationError::NullNotAllowed {
					property: property.to_string(),
				}
				.into());
			}
			EdmValue::String(text) => text.chars().count(),
			EdmValue::Binary(bytes) => bytes.len(),
			_ => return Ok(()),
		};
		match self.max_length {
			Some(max_length) if actual > max_length => Err(SerializationError::MaxLengthExceeded {
				property: property.to_string(),
				max_length,
				actual,
			}
			.into()),
			_ => Ok(()),
		}
	}
}
