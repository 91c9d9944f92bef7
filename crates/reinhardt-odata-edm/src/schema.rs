//! Schema descriptors
//!
//! Plain builder-style values describing the EDM of a service. They are
//! owned by the caller and only read by the metadata writer.

pub mod annotation;
pub mod association;
pub mod container;
pub mod name;
pub mod property;
pub mod structural;

pub use annotation::{AnnotationAttribute, AnnotationElement};
pub use association::{Association, AssociationEnd, Multiplicity};
pub use container::{AssociationSet, AssociationSetEnd, EntityContainer, EntitySet};
pub use name::FullQualifiedName;
pub use property::{
	CustomizableFeedMappings, FeedContentKind, NavigationProperty, Property, PropertyType,
	target_path,
};
pub use structural::{ComplexType, EntityType};

/// One `Schema` element of a metadata document.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EntityType, FullQualifiedName, Property, Schema};
///
/// let schema = Schema::new("RefScenario")
/// 	.with_entity_type(
/// 		EntityType::new("Employee")
/// 			.with_key(["EmployeeId"])
/// 			.with_property(Property::new("EmployeeId", EdmSimpleTypeKind::String)),
/// 	);
/// let name = FullQualifiedName::new("RefScenario", "Employee");
/// assert!(schema.entity_type(&name).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
	pub namespace: String,
	pub alias: Option<String>,
	pub entity_types: Vec<EntityType>,
	pub complex_types: Vec<ComplexType>,
	pub associations: Vec<Association>,
	pub entity_containers: Vec<EntityContainer>,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl Schema {
	pub fn new(namespace: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			alias: None,
			entity_types: Vec::new(),
			complex_types: Vec::new(),
			associations: Vec::new(),
			entity_containers: Vec::new(),
			annotation_attributes: Vec::new(),
			annotation_elements: Vec::new(),
		}
	}

	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
		self.entity_types.push(entity_type);
		self
	}

	pub fn with_complex_type(mut self, complex_type: ComplexType) -> Self {
		self.complex_types.push(complex_type);
		self
	}

	pub fn with_association(mut self, association: Association) -> Self {
		self.associations.push(association);
		self
	}

	pub fn with_entity_container(mut self, entity_container: EntityContainer) -> Self {
		self.entity_containers.push(entity_container);
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

	/// Qualified name of a type declared in this schema.
	pub fn qualify(&self, name: &str) -> FullQualifiedName {
		FullQualifiedName::new(self.namespace.clone(), name)
	}

	/// Finds an entity type by qualified name; the schema alias is accepted
	/// in place of the namespace.
	pub fn entity_type(&self, name: &FullQualifiedName) -> Option<&EntityType> {
		if !self.owns(name) {
			return None;
		}
		self.entity_types
			.iter()
			.find(|entity_type| entity_type.name == name.name())
	}

	pub fn complex_type(&self, name: &FullQualifiedName) -> Option<&ComplexType> {
		if !self.owns(name) {
			return None;
		}
		self.complex_types
			.iter()
			.find(|complex_type| complex_type.name == name.name())
	}

	fn owns(&self, name: &FullQualifiedName) -> bool {
		name.namespace() == self.namespace || self.alias.as_deref() == Some(name.namespace())
	}
}

/// The default entity container across `schemas`: the one flagged as
/// default, otherwise the first container declared.
pub fn default_entity_container(schemas: &[Schema]) -> Option<&EntityContainer> {
	let containers = || schemas.iter().flat_map(|schema| &schema.entity_containers);
	containers()
		.find(|container| container.is_default)
		.or_else(|| containers().next())
}
