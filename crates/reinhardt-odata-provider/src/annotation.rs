//! Annotation provider capability
//!
//! The metadata writer asks an optional [`AnnotationProvider`] for extension
//! attributes and elements at three insertion points: every schema, every
//! entity type and every property.

use std::fmt;

use reinhardt_odata_edm::{AnnotationAttribute, AnnotationElement, FullQualifiedName};
use reinhardt_odata_exception::BoxError;

/// The schema element the writer is asking extensions for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementIdentity {
	Schema { namespace: String },
	EntityType { name: FullQualifiedName },
	/// A property of the entity or complex type `owner`.
	Property {
		owner: FullQualifiedName,
		name: String,
	},
}

impl fmt::Display for ElementIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ElementIdentity::Schema { namespace } => write!(f, "Schema {}", namespace),
			ElementIdentity::EntityType { name } => write!(f, "EntityType {}", name),
			ElementIdentity::Property { owner, name } => write!(f, "Property {}/{}", owner, name),
		}
	}
}

/// Extension attributes and elements for one schema element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
	pub attributes: Vec<AnnotationAttribute>,
	pub elements: Vec<AnnotationElement>,
}

impl Extensions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_attribute(mut self, attribute: AnnotationAttribute) -> Self {
		self.attributes.push(attribute);
		self
	}

	pub fn with_element(mut self, element: AnnotationElement) -> Self {
		self.elements.push(element);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty() && self.elements.is_empty()
	}
}

/// Supplies extension payloads for schema elements.
///
/// Failures are reported back to the metadata writer, which turns them into
/// [`SerializationError::Annotation`](reinhardt_odata_exception::SerializationError::Annotation).
/// Closures with the matching signature implement the trait.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::AnnotationAttribute;
/// use reinhardt_odata_provider::{AnnotationProvider, BoxError, ElementIdentity, Extensions};
///
/// let provider = |element: &ElementIdentity| -> Result<Extensions, BoxError> {
/// 	let mut extensions = Extensions::new();
/// 	if let ElementIdentity::Schema { .. } = element {
/// 		extensions = extensions.with_attribute(
/// 			AnnotationAttribute::new("generatedBy", "catalog").with_namespace("http://anno"),
/// 		);
/// 	}
/// 	Ok(extensions)
/// };
/// let extensions = provider
/// 	.extensions(&ElementIdentity::Schema { namespace: "RefScenario".to_string() })
/// 	.unwrap();
/// assert_eq!(extensions.attributes.len(), 1);
/// ```
pub trait AnnotationProvider: Send + Sync {
	fn extensions(&self, element: &ElementIdentity) -> Result<Extensions, BoxError>;
}

impl<F> AnnotationProvider for F
where
	F: Fn(&ElementIdentity) -> Result<Extensions, BoxError> + Send + Sync,
{
	fn extensions(&self, element: &ElementIdentity) -> Result<Extensions, BoxError> {
		self(element)
	}
}
