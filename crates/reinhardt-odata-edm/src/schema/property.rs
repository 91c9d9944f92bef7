use std::fmt;

use crate::facets::EdmFacets;
use crate::simple_type::EdmSimpleTypeKind;

use super::annotation::{AnnotationAttribute, AnnotationElement};
use super::name::FullQualifiedName;

/// Well-known `FC_TargetPath` values of Atom feed customization.
pub mod target_path {
	pub const SYNDICATION_AUTHOR_EMAIL: &str = "SyndicationAuthorEmail";
	pub const SYNDICATION_AUTHOR_NAME: &str = "SyndicationAuthorName";
	pub const SYNDICATION_AUTHOR_URI: &str = "SyndicationAuthorUri";
	pub const SYNDICATION_PUBLISHED: &str = "SyndicationPublished";
	pub const SYNDICATION_RIGHTS: &str = "SyndicationRights";
	pub const SYNDICATION_SUMMARY: &str = "SyndicationSummary";
	pub const SYNDICATION_TITLE: &str = "SyndicationTitle";
	pub const SYNDICATION_UPDATED: &str = "SyndicationUpdated";
}

/// The declared type of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
	Simple(EdmSimpleTypeKind),
	Complex(FullQualifiedName),
}

impl fmt::Display for PropertyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PropertyType::Simple(kind) => f.write_str(kind.qualified_name()),
			PropertyType::Complex(name) => write!(f, "{}", name),
		}
	}
}

impl From<EdmSimpleTypeKind> for PropertyType {
	fn from(kind: EdmSimpleTypeKind) -> Self {
		PropertyType::Simple(kind)
	}
}

impl From<FullQualifiedName> for PropertyType {
	fn from(name: FullQualifiedName) -> Self {
		PropertyType::Complex(name)
	}
}

/// Content kind of a customized feed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedContentKind {
	Text,
	Html,
	Xhtml,
}

impl FeedContentKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			FeedContentKind::Text => "text",
			FeedContentKind::Html => "html",
			FeedContentKind::Xhtml => "xhtml",
		}
	}
}

/// Atom feed customization of a property, rendered as `m:FC_*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomizableFeedMappings {
	pub keep_in_content: Option<bool>,
	pub target_path: Option<String>,
	pub source_path: Option<String>,
	pub ns_uri: Option<String>,
	pub ns_prefix: Option<String>,
	pub content_kind: Option<FeedContentKind>,
}

impl CustomizableFeedMappings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_keep_in_content(mut self, keep_in_content: bool) -> Self {
		self.keep_in_content = Some(keep_in_content);
		self
	}

	pub fn with_target_path(mut self, target_path: impl Into<String>) -> Self {
		self.target_path = Some(target_path.into());
		self
	}

	pub fn with_source_path(mut self, source_path: impl Into<String>) -> Self {
		self.source_path = Some(source_path.into());
		self
	}

	pub fn with_ns_uri(mut self, ns_uri: impl Into<String>) -> Self {
		self.ns_uri = Some(ns_uri.into());
		self
	}

	pub fn with_ns_prefix(mut self, ns_prefix: impl Into<String>) -> Self {
		self.ns_prefix = Some(ns_prefix.into());
		self
	}

	pub fn with_content_kind(mut self, content_kind: FeedContentKind) -> Self {
		self.content_kind = Some(content_kind);
		self
	}

	/// Local attribute names (without the metadata prefix) and values, in
	/// document order.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_edm::{CustomizableFeedMappings, target_path};
	///
	/// let mappings = CustomizableFeedMappings::new()
	/// 	.with_target_path(target_path::SYNDICATION_TITLE)
	/// 	.with_keep_in_content(false);
	/// assert_eq!(
	/// 	mappings.attributes(),
	/// 	vec![("FC_KeepInContent", "false".to_string()), ("FC_TargetPath", "SyndicationTitle".to_string())]
	/// );
	/// ```
	pub fn attributes(&self) -> Vec<(&'static str, String)> {
		let mut attributes = Vec::new();
		if let Some(keep_in_content) = self.keep_in_content {
			attributes.push(("FC_KeepInContent", keep_in_content.to_string()));
		}
		if let Some(target_path) = &self.target_path {
			attributes.push(("FC_TargetPath", target_path.clone()));
		}
		if let Some(source_path) = &self.source_path {
			attributes.push(("FC_SourcePath", source_path.clone()));
		}
		if let Some(ns_uri) = &self.ns_uri {
			attributes.push(("FC_NsUri", ns_uri.clone()));
		}
		if let Some(ns_prefix) = &self.ns_prefix {
			attributes.push(("FC_NsPrefix", ns_prefix.clone()));
		}
		if let Some(content_kind) = self.content_kind {
			attributes.push(("FC_ContentKind", content_kind.as_str().to_string()));
		}
		attributes
	}
}

/// A property of an entity or complex type. This is the type descriptor
/// the entity provider converts values with.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{EdmFacets, EdmSimpleTypeKind, Property};
///
/// let age = Property::new("Age", EdmSimpleTypeKind::Int32)
/// 	.with_facets(EdmFacets::new().with_nullable(false));
/// assert_eq!(age.simple_kind(), Some(EdmSimpleTypeKind::Int32));
/// assert!(!age.is_nullable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
	pub name: String,
	pub property_type: PropertyType,
	pub facets: EdmFacets,
	pub mime_type: Option<String>,
	pub feed_mappings: Option<CustomizableFeedMappings>,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl Property {
	pub fn new(name: impl Into<String>, property_type: impl Into<PropertyType>) -> Self {
		Self {
			name: name.into(),
			property_type: property_type.into(),
			facets: EdmFacets::new(),
			mime_type: None,
			feed_mappings: None,
			annotation_attributes: Vec::new(),
			annotation_elements: Vec::new(),
		}
	}

	pub fn with_facets(mut self, facets: EdmFacets) -> Self {
		self.facets = facets;
		self
	}

	/// MIME type of `$value` payloads of this property (`m:MimeType`).
	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = Some(mime_type.into());
		self
	}

	pub fn with_feed_mappings(mut self, feed_mappings: CustomizableFeedMappings) -> Self {
		self.feed_mappings = Some(feed_mappings);
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

	/// The primitive kind, `None` for complex properties.
	pub fn simple_kind(&self) -> Option<EdmSimpleTypeKind> {
		match &self.property_type {
			PropertyType::Simple(kind) => Some(*kind),
			PropertyType::Complex(_) => None,
		}
	}

	pub fn is_nullable(&self) -> bool {
		self.facets.is_nullable()
	}
}

/// A navigation property following an association from one role to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationProperty {
	pub name: String,
	pub relationship: FullQualifiedName,
	pub from_role: String,
	pub to_role: String,
	pub annotation_attributes: Vec<AnnotationAttribute>,
	pub annotation_elements: Vec<AnnotationElement>,
}

impl NavigationProperty {
	pub fn new(
		name: impl Into<String>,
		relationship: FullQualifiedName,
		from_role: impl Into<String>,
		to_role: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			relationship,
			from_role: from_role.into(),
			to_role: to_role.into(),
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
