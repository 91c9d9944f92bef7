//! Metadata document writer
//!
//! Turns a sequence of [`Schema`] descriptors into the `$metadata` document:
//!
//! ```text
//! edmx:Edmx Version
//! └── edmx:DataServices m:DataServiceVersion
//!     └── Schema*  (EntityType*, ComplexType*, Association*, EntityContainer*)
//! ```
//!
//! Building happens in one pass over the descriptors. The annotation
//! provider is consulted while the tree is allocated; once [`MetadataWriter::build`]
//! returns, the tree is only rendered.

use std::collections::HashSet;

use indexmap::IndexMap;
use reinhardt_odata_edm::{
	AnnotationAttribute, AnnotationElement, Association, AssociationEnd, ComplexType,
	EntityContainer, EntityType, FullQualifiedName, NavigationProperty, Property, Schema,
};
use reinhardt_odata_exception::{ODataError, Result, SerializationError};
use serde::Deserialize;

use crate::annotation::{AnnotationProvider, ElementIdentity, Extensions};
use crate::document::{NodeId, SchemaDocument, XmlAttribute};
use crate::namespace::{
	EDM_SCHEMA_NAMESPACE, EDMX_NAMESPACE, METADATA_NAMESPACE, NamespacePrefixTable,
};

/// Version attributes and rendering switches of the metadata document.
///
/// ```toml
/// edmx_version = "1.0"
/// data_service_version = "2.0"
/// xml_declaration = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetadataSettings {
	/// Value of `edmx:Edmx/@Version`.
	pub edmx_version: String,
	/// Value of `edmx:DataServices/@m:DataServiceVersion`.
	pub data_service_version: String,
	/// Emit `<?xml version="1.0" encoding="utf-8"?>` first.
	pub xml_declaration: bool,
}

impl Default for MetadataSettings {
	fn default() -> Self {
		Self {
			edmx_version: "1.0".to_string(),
			data_service_version: "2.0".to_string(),
			xml_declaration: true,
		}
	}
}

impl MetadataSettings {
	/// Loads settings from TOML; missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_provider::MetadataSettings;
	///
	/// let settings = MetadataSettings::from_toml_str("xml_declaration = false").unwrap();
	/// assert!(!settings.xml_declaration);
	/// assert_eq!(settings.data_service_version, "2.0");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| {
			ODataError::InvalidArgument(format!("invalid metadata settings: {}", e))
		})
	}
}

/// A built metadata document together with its prefix assignments.
#[derive(Debug, Clone)]
pub struct MetadataDocument {
	document: SchemaDocument,
	prefixes: NamespacePrefixTable,
	xml_declaration: bool,
}

impl MetadataDocument {
	pub fn document(&self) -> &SchemaDocument {
		&self.document
	}

	pub fn prefixes(&self) -> &NamespacePrefixTable {
		&self.prefixes
	}

	pub fn render(&self) -> Result<Vec<u8>> {
		self.document.render(&self.prefixes, self.xml_declaration)
	}
}

/// Configurable metadata writer.
///
/// Predefined namespaces map a prefix to a namespace URI. When several
/// prefixes name the same URI, the one inserted last is declared.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EntityType, Property, Schema};
/// use reinhardt_odata_provider::{MetadataSettings, MetadataWriter};
///
/// let schemas = vec![Schema::new("RefScenario").with_entity_type(
/// 	EntityType::new("Employee")
/// 		.with_key(["EmployeeId"])
/// 		.with_property(Property::new("EmployeeId", EdmSimpleTypeKind::String)),
/// )];
/// let mut predefined = IndexMap::new();
/// predefined.insert("anno".to_string(), "http://annoNamespace".to_string());
///
/// let xml = MetadataWriter::new()
/// 	.with_settings(MetadataSettings { xml_declaration: false, ..Default::default() })
/// 	.with_predefined_namespaces(&predefined)
/// 	.write(&schemas)
/// 	.unwrap();
/// let xml = String::from_utf8(xml).unwrap();
/// assert!(xml.starts_with("<edmx:Edmx"));
/// assert!(xml.contains(r#"xmlns:anno="http://annoNamespace""#));
/// assert!(xml.contains(r#"<PropertyRef Name="EmployeeId"/>"#));
/// ```
#[derive(Default)]
pub struct MetadataWriter<'a> {
	settings: MetadataSettings,
	predefined_namespaces: Option<&'a IndexMap<String, String>>,
	annotation_provider: Option<&'a dyn AnnotationProvider>,
}

impl<'a> MetadataWriter<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: MetadataSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn with_predefined_namespaces(mut self, namespaces: &'a IndexMap<String, String>) -> Self {
		self.predefined_namespaces = Some(namespaces);
		self
	}

	pub fn with_annotation_provider(mut self, provider: &'a dyn AnnotationProvider) -> Self {
		self.annotation_provider = Some(provider);
		self
	}

	pub fn settings(&self) -> &MetadataSettings {
		&self.settings
	}

	/// Validates the schemas and allocates the document tree.
	pub fn build(&self, schemas: &[Schema]) -> Result<MetadataDocument> {
		validate(schemas)?;

		let mut prefixes = NamespacePrefixTable::new();
		if let Some(predefined) = self.predefined_namespaces {
			for (prefix, uri) in predefined {
				prefixes.register_predefined(prefix, uri)?;
			}
		}

		let mut builder = TreeBuilder {
			annotation_provider: self.annotation_provider,
			prefixes,
			document: SchemaDocument::new(EDMX_NAMESPACE, "Edmx"),
		};
		let root = builder.document.root();
		builder.attribute(root, "Version", &self.settings.edmx_version);
		let services = builder
			.document
			.append_element(root, EDMX_NAMESPACE, "DataServices");
		builder.document.push_attribute(
			services,
			XmlAttribute::new("DataServiceVersion", &self.settings.data_service_version)
				.with_namespace(METADATA_NAMESPACE),
		);
		for schema in schemas {
			builder.schema(services, schema)?;
		}

		tracing::debug!(
			schemas = schemas.len(),
			elements = builder.document.len(),
			namespaces = builder.prefixes.len(),
			"built metadata document"
		);
		Ok(MetadataDocument {
			document: builder.document,
			prefixes: builder.prefixes,
			xml_declaration: self.settings.xml_declaration,
		})
	}

	/// Builds and renders in one step.
	pub fn write(&self, schemas: &[Schema]) -> Result<Vec<u8>> {
		self.build(schemas)?.render()
	}
}

/// Rejects duplicate entity types, complex types and property names.
fn validate(schemas: &[Schema]) -> Result<()> {
	let mut entity_types = HashSet::new();
	let mut complex_types = HashSet::new();
	for schema in schemas {
		for entity_type in &schema.entity_types {
			let name = schema.qualify(&entity_type.name);
			check_properties(
				&name,
				entity_type
					.properties
					.iter()
					.map(|p| p.name.as_str())
					.chain(entity_type.navigation_properties.iter().map(|p| p.name.as_str())),
			)?;
			if !entity_types.insert(name.to_string()) {
				return Err(SerializationError::DuplicateEntityType {
					qualified_name: name.to_string(),
				}
				.into());
			}
		}
		for complex_type in &schema.complex_types {
			let name = schema.qualify(&complex_type.name);
			check_properties(&name, complex_type.properties.iter().map(|p| p.name.as_str()))?;
			if !complex_types.insert(name.to_string()) {
				return Err(SerializationError::DuplicateComplexType {
					qualified_name: name.to_string(),
				}
				.into());
			}
		}
	}
	Ok(())
}

fn check_properties<'n>(
	owner: &FullQualifiedName,
	names: impl Iterator<Item = &'n str>,
) -> Result<()> {
	let mut seen = HashSet::new();
	for name in names {
		if !seen.insert(name) {
			return Err(SerializationError::DuplicateProperty {
				qualified_name: owner.to_string(),
				property: name.to_string(),
			}
			.into());
		}
	}
	Ok(())
}

struct TreeBuilder<'a> {
	annotation_provider: Option<&'a dyn AnnotationProvider>,
	prefixes: NamespacePrefixTable,
	document: SchemaDocument,
}

impl TreeBuilder<'_> {
	fn schema(&mut self, parent: NodeId, schema: &Schema) -> Result<()> {
		let node = self.element(parent, "Schema");
		self.attribute(node, "Namespace", &schema.namespace);
		if let Some(alias) = &schema.alias {
			self.attribute(node, "Alias", alias);
		}
		self.annotation_attributes(node, &schema.annotation_attributes)?;
		let extensions = self.extensions(ElementIdentity::Schema {
			namespace: schema.namespace.clone(),
		})?;
		self.annotation_attributes(node, &extensions.attributes)?;

		for entity_type in &schema.entity_types {
			self.entity_type(node, schema, entity_type)?;
		}
		for complex_type in &schema.complex_types {
			self.complex_type(node, schema, complex_type)?;
		}
		for association in &schema.associations {
			self.association(node, association)?;
		}
		for container in &schema.entity_containers {
			self.entity_container(node, container)?;
		}

		self.annotation_elements(node, &schema.annotation_elements)?;
		self.annotation_elements(node, &extensions.elements)
	}

	fn entity_type(&mut self, parent: NodeId, schema: &Schema, entity_type: &EntityType) -> Result<()> {
		let name = schema.qualify(&entity_type.name);
		let node = self.element(parent, "EntityType");
		self.attribute(node, "Name", &entity_type.name);
		if let Some(base_type) = &entity_type.base_type {
			self.attribute(node, "BaseType", &base_type.to_string());
		}
		if entity_type.is_abstract {
			self.attribute(node, "Abstract", "true");
		}
		if entity_type.has_stream {
			self.metadata_attribute(node, "HasStream", "true");
		}
		self.annotation_attributes(node, &entity_type.annotation_attributes)?;
		let extensions = self.extensions(ElementIdentity::EntityType { name: name.clone() })?;
		self.annotation_attributes(node, &extensions.attributes)?;

		if !entity_type.key.is_empty() {
			let key = self.element(node, "Key");
			for property_ref in &entity_type.key {
				let reference = self.element(key, "PropertyRef");
				self.attribute(reference, "Name", property_ref);
			}
		}
		for property in &entity_type.properties {
			self.property(node, &name, property)?;
		}
		for navigation_property in &entity_type.navigation_properties {
			self.navigation_property(node, navigation_property)?;
		}

		self.annotation_elements(node, &entity_type.annotation_elements)?;
		self.annotation_elements(node, &extensions.elements)
	}

	fn complex_type(
		&mut self,
		parent: NodeId,
		schema: &Schema,
		complex_type: &ComplexType,
	) -> Result<()> {
		let name = schema.qualify(&complex_type.name);
		let node = self.element(parent, "ComplexType");
		self.attribute(node, "Name", &complex_type.name);
		if let Some(base_type) = &complex_type.base_type {
			self.attribute(node, "BaseType", &base_type.to_string());
		}
		if complex_type.is_abstract {
			self.attribute(node, "Abstract", "true");
		}
		self.annotation_attributes(node, &complex_type.annotation_attributes)?;
		for property in &complex_type.properties {
			self.property(node, &name, property)?;
		}
		self.annotation_elements(node, &complex_type.annotation_elements)
	}

	fn property(&mut self, parent: NodeId, owner: &FullQualifiedName, property: &Property) -> Result<()> {
		let node = self.element(parent, "Property");
		self.attribute(node, "Name", &property.name);
		self.attribute(node, "Type", &property.property_type.to_string());

		let facets = &property.facets;
		if let Some(nullable) = facets.nullable {
			self.attribute(node, "Nullable", &nullable.to_string());
		}
		if let Some(default_value) = &facets.default_value {
			self.attribute(node, "DefaultValue", default_value);
		}
		if let Some(max_length) = facets.max_length {
			self.attribute(node, "MaxLength", &max_length.to_string());
		}
		if let Some(fixed_length) = facets.fixed_length {
			self.attribute(node, "FixedLength", &fixed_length.to_string());
		}
		if let Some(precision) = facets.precision {
			self.attribute(node, "Precision", &precision.to_string());
		}
		if let Some(scale) = facets.scale {
			self.attribute(node, "Scale", &scale.to_string());
		}
		if let Some(mime_type) = &property.mime_type {
			self.metadata_attribute(node, "MimeType", mime_type);
		}
		if let Some(mappings) = &property.feed_mappings {
			for (name, value) in mappings.attributes() {
				self.metadata_attribute(node, name, &value);
			}
		}

		self.annotation_attributes(node, &property.annotation_attributes)?;
		let extensions = self.extensions(ElementIdentity::Property {
			owner: owner.clone(),
			name: property.name.clone(),
		})?;
		self.annotation_attributes(node, &extensions.attributes)?;
		self.annotation_elements(node, &property.annotation_elements)?;
		self.annotation_elements(node, &extensions.elements)
	}

	fn navigation_property(
		&mut self,
		parent: NodeId,
		navigation_property: &NavigationProperty,
	) -> Result<()> {
		let node = self.element(parent, "NavigationProperty");
		self.attribute(node, "Name", &navigation_property.name);
		self.attribute(
			node,
			"Relationship",
			&navigation_property.relationship.to_string(),
		);
		self.attribute(node, "FromRole", &navigation_property.from_role);
		self.attribute(node, "ToRole", &navigation_property.to_role);
		self.annotation_attributes(node, &navigation_property.annotation_attributes)?;
		self.annotation_elements(node, &navigation_property.annotation_elements)
	}

	fn association(&mut self, parent: NodeId, association: &Association) -> Result<()> {
		let node = self.element(parent, "Association");
		self.attribute(node, "Name", &association.name);
		self.annotation_attributes(node, &association.annotation_attributes)?;
		for end in [&association.end1, &association.end2] {
			self.association_end(node, end);
		}
		self.annotation_elements(node, &association.annotation_elements)
	}

	fn association_end(&mut self, parent: NodeId, end: &AssociationEnd) {
		let node = self.element(parent, "End");
		self.attribute(node, "Type", &end.entity_type.to_string());
		self.attribute(node, "Multiplicity", end.multiplicity.as_str());
		self.attribute(node, "Role", &end.role);
	}

	fn entity_container(&mut self, parent: NodeId, container: &EntityContainer) -> Result<()> {
		let node = self.element(parent, "EntityContainer");
		self.attribute(node, "Name", &container.name);
		if let Some(extends) = &container.extends {
			self.attribute(node, "Extends", extends);
		}
		if container.is_default {
			self.metadata_attribute(node, "IsDefaultEntityContainer", "true");
		}
		self.annotation_attributes(node, &container.annotation_attributes)?;

		for entity_set in &container.entity_sets {
			let set = self.element(node, "EntitySet");
			self.attribute(set, "Name", &entity_set.name);
			self.attribute(set, "EntityType", &entity_set.entity_type.to_string());
			self.annotation_attributes(set, &entity_set.annotation_attributes)?;
			self.annotation_elements(set, &entity_set.annotation_elements)?;
		}
		for association_set in &container.association_sets {
			let set = self.element(node, "AssociationSet");
			self.attribute(set, "Name", &association_set.name);
			self.attribute(set, "Association", &association_set.association.to_string());
			for end in [&association_set.end1, &association_set.end2] {
				let end_node = self.element(set, "End");
				self.attribute(end_node, "Role", &end.role);
				self.attribute(end_node, "EntitySet", &end.entity_set);
			}
		}

		self.annotation_elements(node, &container.annotation_elements)
	}

	fn extensions(&self, element: ElementIdentity) -> Result<Extensions> {
		let Some(provider) = self.annotation_provider else {
			return Ok(Extensions::default());
		};
		provider.extensions(&element).map_err(|source| {
			SerializationError::Annotation {
				element: element.to_string(),
				source,
			}
			.into()
		})
	}

	fn annotation_attributes(&mut self, node: NodeId, attributes: &[AnnotationAttribute]) -> Result<()> {
		for attribute in attributes {
			let mut xml = XmlAttribute::new(&attribute.name, &attribute.text);
			if let Some(namespace) = &attribute.namespace {
				self.prefixes
					.assign(namespace, attribute.prefix.as_deref())?;
				xml = xml.with_namespace(namespace);
			}
			self.document.push_attribute(node, xml);
		}
		Ok(())
	}

	fn annotation_elements(&mut self, parent: NodeId, elements: &[AnnotationElement]) -> Result<()> {
		for element in elements {
			self.annotation_element(parent, element)?;
		}
		Ok(())
	}

	// Elements without a namespace land in their parent's namespace.
	fn annotation_element(&mut self, parent: NodeId, element: &AnnotationElement) -> Result<()> {
		let namespace = match &element.namespace {
			Some(namespace) => namespace.clone(),
			None => self.document.element(parent).namespace.clone(),
		};
		self.prefixes.assign(&namespace, element.prefix.as_deref())?;
		let node = self
			.document
			.append_element(parent, namespace, element.name.as_str());
		self.annotation_attributes(node, &element.attributes)?;
		if let Some(text) = &element.text {
			self.document.set_text(node, text.as_str());
		}
		self.annotation_elements(node, &element.children)
	}

	fn element(&mut self, parent: NodeId, name: &str) -> NodeId {
		self.document
			.append_element(parent, EDM_SCHEMA_NAMESPACE, name)
	}

	fn attribute(&mut self, node: NodeId, name: &str, value: &str) {
		self.document.push_attribute(node, XmlAttribute::new(name, value));
	}

	fn metadata_attribute(&mut self, node: NodeId, name: &str, value: &str) {
		self.document.push_attribute(
			node,
			XmlAttribute::new(name, value).with_namespace(METADATA_NAMESPACE),
		);
	}
}
