use std::fmt;
use std::str::FromStr;

use reinhardt_odata_exception::{ODataError, Result};

/// `Namespace.Name` reference to a schema element.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::FullQualifiedName;
///
/// let name = FullQualifiedName::new("RefScenario", "Employee");
/// assert_eq!(name.to_string(), "RefScenario.Employee");
///
/// let parsed: FullQualifiedName = "Namespace.With.Dots.Type".parse().unwrap();
/// assert_eq!(parsed.namespace(), "Namespace.With.Dots");
/// assert_eq!(parsed.name(), "Type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FullQualifiedName {
	namespace: String,
	name: String,
}

impl FullQualifiedName {
	pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			name: name.into(),
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for FullQualifiedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.namespace, self.name)
	}
}

impl FromStr for FullQualifiedName {
	type Err = ODataError;

	/// Splits on the last dot.
	fn from_str(s: &str) -> Result<Self> {
		match s.rsplit_once('.') {
			Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
				Ok(Self::new(namespace, name))
			}
			_ => Err(ODataError::InvalidArgument(format!(
				"'{}' is not a qualified name",
				s
			))),
		}
	}
}
