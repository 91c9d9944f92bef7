//! Annotation payloads
//!
//! Annotations are foreign-namespace attributes and elements attached to
//! schema elements. They carry a namespace URI and optionally a preferred
//! prefix; the metadata writer decides the prefix actually used.

/// A foreign-namespace attribute such as `annoPrefix:annoName="annoText"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationAttribute {
	pub namespace: Option<String>,
	pub prefix: Option<String>,
	pub name: String,
	pub text: String,
}

impl AnnotationAttribute {
	/// An attribute without namespace.
	pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			namespace: None,
			prefix: None,
			name: name.into(),
			text: text.into(),
		}
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}
}

/// A foreign-namespace element with optional text, attributes and nested
/// elements.
///
/// An element without namespace is placed in the namespace of its parent
/// element.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{AnnotationAttribute, AnnotationElement};
///
/// let element = AnnotationElement::new("schemaElementTest1")
/// 	.with_namespace("http://annoNamespace")
/// 	.with_prefix("annoPrefix")
/// 	.with_child(
/// 		AnnotationElement::new("schemaElementTest4")
/// 			.with_attribute(AnnotationAttribute::new("rel", "self")),
/// 	);
/// assert_eq!(element.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationElement {
	pub namespace: Option<String>,
	pub prefix: Option<String>,
	pub name: String,
	pub text: Option<String>,
	pub attributes: Vec<AnnotationAttribute>,
	pub children: Vec<AnnotationElement>,
}

impl AnnotationElement {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			namespace: None,
			prefix: None,
			name: name.into(),
			text: None,
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	pub fn with_attribute(mut self, attribute: AnnotationAttribute) -> Self {
		self.attributes.push(attribute);
		self
	}

	pub fn with_child(mut self, child: AnnotationElement) -> Self {
		self.children.push(child);
		self
	}
}
