use super::annotation::{AnnotationAttribute, AnnotationElement};
use super::name::FullQualifiedName;
use super::property::{NavigationProperty, Property};

/// An entity type: a keyed structural type with navigation properties.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EntityType, Property};
///
/// let employee = EntityType::new("Employee")
/// 	.with_key(["EmployeeId"])
/// 	.with_property(Property::new("EmployeeId", EdmSimpleTypeKind::String))
/// 	.with_property(Property::new("Age", EdmSimpleTypeKind::Int32));
/// assert_eq!(employee.property("Age").map(|p| p.name.as_str()), Some("Age"));
/// assert!(employee.property("Salary").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
	pub name: String,
	pub base_type: Option<FullQualifiedName>,
	pub is_abstract: bool,
	pub has_stream: bool,
	pub key: Vec<String>,
	pub properties: Vec<Property>,
	pub navigation_properties: Vec<NavigationProperty>,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl EntityType {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			base_type: None,
			is_abstract: false,
			has_stream: false,
			key: Vec::new(),
			properties: Vec::new(),
			navigation_properties: Vec::new(),
			annotation_attributes: Vec::new(),
			annotation_elements: Vec::new(),
		}
	}

	pub fn with_base_type(mut self, base_type: FullQualifiedName) -> Self {
		self.base_type = Some(base_type);
		self
	}

	pub fn with_abstract(mut self, is_abstract: bool) -> Self {
		self.is_abstract = is_abstract;
		self
	}

	/// Marks the type as a media link entry (`m:HasStream`).
	pub fn with_has_stream(mut self, has_stream: bool) -> Self {
		self.has_stream = has_stream;
		self
	}

	/// Sets the names of the key properties.
	pub fn with_key<I, S>(mut self, key: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.key = key.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_property(mut self, property: Property) -> Self {
		self.properties.push(property);
		self
	}

	pub fn with_navigation_property(mut self, navigation_property: NavigationProperty) -> Self {
		self.navigation_properties.push(navigation_property);
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

	pub fn property(&self, name: &str) -> Option<&Property> {
		self.properties.iter().find(|property| property.name == name)
	}
}

/// A complex type: an unkeyed structural type used as property type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
	pub name: String,
	pub base_type: Option<FullQualifiedName>,
	pub is_abstract: bool,
	pub properties: Vec<Property>,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl ComplexType {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			base_type: None,
			is_abstract: false,
			properties: Vec::new(),
			annotation_attributes: Vec::new(),
			annotation_elements: Vec::new(),
		}
	}

	pub fn with_base_type(mut self, base_type: FullQualifiedName) -> Self {
		self.base_type = Some(base_type);
		self
	}

	pub fn with_abstract(mut self, is_abstract: bool) -> Self {
		self.is_abstract = is_abstract;
		self
	}

	pub fn with_property(mut self, property: Property) -> Self {
		self.properties.push(property);
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

	pub fn property(&self, name: &str) -> Option<&Property> {
		self.properties.iter().find(|property| property.name == name)
	}
}
