use super::annotation::{AnnotationAttribute, AnnotationElement};
use super::name::FullQualifiedName;

/// An addressable collection of entities of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
	pub name: String,
	pub entity_type: FullQualifiedName,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl EntitySet {
	pub fn new(name: impl Into<String>, entity_type: FullQualifiedName) -> Self {
		Self {
			name: name.into(),
			entity_type,
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

/// Binds an association role to an entity set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSetEnd {
	pub role: String,
	pub entity_set: String,
}

impl AssociationSetEnd {
	pub fn new(role: impl Into<String>, entity_set: impl Into<String>) -> Self {
		Self {
			role: role.into(),
			entity_set: entity_set.into(),
		}
	}
}

/// The instance-level counterpart of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSet {
	pub name: String,
	pub association: FullQualifiedName,
	pub end1: AssociationSetEnd,
	pub end2: AssociationSetEnd,
}

impl AssociationSet {
	pub fn new(
		name: impl Into<String>,
		association: FullQualifiedName,
		end1: AssociationSetEnd,
		end2: AssociationSetEnd,
	) -> Self {
		Self {
			name: name.into(),
			association,
			end1,
			end2,
		}
	}
}

/// Groups the entity sets and association sets a service exposes.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{EntityContainer, EntitySet, FullQualifiedName};
///
/// let container = EntityContainer::new("Container1")
/// 	.with_default(true)
/// 	.with_entity_set(EntitySet::new("Employees", FullQualifiedName::new("RefScenario", "Employee")));
/// assert!(container.is_default);
/// assert_eq!(container.entity_sets.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityContainer {
	pub name: String,
	pub is_default: bool,
	pub extends: Option<String>,
	pub entity_sets: Vec<EntitySet>,
	pub association_sets: Vec<AssociationSet>,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl EntityContainer {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			is_default: false,
			extends: None,
			entity_sets: Vec::new(),
			association_sets: Vec::new(),
			annotation_attributes: Vec::new(),
			annotation_elements: Vec::new(),
		}
	}

	/// Marks the container as the service's default (`m:IsDefaultEntityContainer`).
	pub fn with_default(mut self, is_default: bool) -> Self {
		self.is_default = is_default;
		self
	}

	pub fn with_extends(mut self, extends: impl Into<String>) -> Self {
		self.extends = Some(extends.into());
		self
	}

	pub fn with_entity_set(mut self, entity_set: EntitySet) -> Self {
		self.entity_sets.push(entity_set);
		self
	}

	pub fn with_association_set(mut self, association_set: AssociationSet) -> Self {
		self.association_sets.push(association_set);
		self
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
