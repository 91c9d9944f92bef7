use std::fmt;

use super::annotation::{AnnotationAttribute, AnnotationElement};
use super::name::FullQualifiedName;

/// Cardinality of an association end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
	/// `0..1`
	ZeroOrOne,
	/// `1`
	One,
	/// `*`
	Many,
}

impl Multiplicity {
	pub fn as_str(&self) -> &'static str {
		match self {
			Multiplicity::ZeroOrOne => "0..1",
			Multiplicity::One => "1",
			Multiplicity::Many => "*",
		}
	}
}

impl fmt::Display for Multiplicity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One side of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationEnd {
	pub entity_type: FullQualifiedName,
	pub role: String,
	pub multiplicity: Multiplicity,
}

impl AssociationEnd {
	pub fn new(entity_type: FullQualifiedName, role: impl Into<String>, multiplicity: Multiplicity) -> Self {
		Self {
			entity_type,
			role: role.into(),
			multiplicity,
		}
	}
}

/// A relationship between two entity types.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{Association, AssociationEnd, FullQualifiedName, Multiplicity};
///
/// let association = Association::new(
/// 	"ManagerEmployees",
/// 	AssociationEnd::new(FullQualifiedName::new("RefScenario", "Employee"), "r_Employees", Multiplicity::Many),
/// 	AssociationEnd::new(FullQualifiedName::new("RefScenario", "Manager"), "r_Manager", Multiplicity::One),
/// );
/// assert_eq!(association.end1.multiplicity.to_string(), "*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
	pub name: String,
	pub end1: AssociationEnd,
	pub end2: AssociationEnd,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl Association {
	pub fn new(name: impl Into<String>, end1: AssociationEnd, end2: AssociationEnd) -> Self {
		Self {
			name: name.into(),
			end1,
			end2,
			annotation_attributes: Vec::new(),
			annotation_elements: Vec::new(),
		}
	}

	pub fn with_annotation_attribute(mut self, attribute: AnnotationAttribute) -> Self {
		self.annotation_attributes.push(attribute);
		self
	}

	pub fn with_annotation_element(mut self, element: AnnotationElement) -> Self {
		self.annotation_elements.push(element);
		self
	}
}
