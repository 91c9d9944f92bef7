//! Arena-backed XML document tree
//!
//! Elements live in one `Vec` and refer to their children by [`NodeId`], so
//! the tree has no parent back-references. The metadata writer allocates the
//! whole tree in a single pass and only reads it afterwards when rendering.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use reinhardt_odata_exception::{Result, SerializationError};

use crate::namespace::NamespacePrefixTable;

/// Index of an element inside its [`SchemaDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An attribute; `namespace` is `None` for unqualified attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
	pub namespace: Option<String>,
	pub name: String,
	pub value: String,
}

impl XmlAttribute {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			namespace: None,
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}
}

/// One element of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
	pub namespace: String,
	pub name: String,
	pub attributes: Vec<XmlAttribute>,
	pub text: Option<String>,
	children: Vec<NodeId>,
}

impl XmlElement {
	pub fn children(&self) -> &[NodeId] {
		&self.children
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|attribute| attribute.name == name)
			.map(|attribute| attribute.value.as_str())
	}
}

/// An element tree rooted at a single element.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_provider::{NamespacePrefixTable, SchemaDocument, XmlAttribute};
/// use reinhardt_odata_provider::namespace::{EDMX_NAMESPACE, EDM_SCHEMA_NAMESPACE};
///
/// let mut document = SchemaDocument::new(EDMX_NAMESPACE, "Edmx");
/// let schema = document.append_element(document.root(), EDM_SCHEMA_NAMESPACE, "Schema");
/// document.push_attribute(schema, XmlAttribute::new("Namespace", "RefScenario"));
///
/// let xml = document.render(&NamespacePrefixTable::new(), false).unwrap();
/// let xml = String::from_utf8(xml).unwrap();
/// assert!(xml.starts_with("<edmx:Edmx xmlns:edmx="));
/// assert!(xml.contains(r#"<Schema Namespace="RefScenario"/>"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
	nodes: Vec<XmlElement>,
}

impl SchemaDocument {
	pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			nodes: vec![XmlElement {
				namespace: namespace.into(),
				name: name.into(),
				attributes: Vec::new(),
				text: None,
				children: Vec::new(),
			}],
		}
	}

	pub fn root(&self) -> NodeId {
		NodeId(0)
	}

	/// Allocates a new element as the last child of `parent`.
	pub fn append_element(
		&mut self,
		parent: NodeId,
		namespace: impl Into<String>,
		name: impl Into<String>,
	) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(XmlElement {
			namespace: namespace.into(),
			name: name.into(),
			attributes: Vec::new(),
			text: None,
			children: Vec::new(),
		});
		self.nodes[parent.0].children.push(id);
		id
	}

	pub fn push_attribute(&mut self, node: NodeId, attribute: XmlAttribute) {
		self.nodes[node.0].attributes.push(attribute);
	}

	pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
		self.nodes[node.0].text = Some(text.into());
	}

	pub fn element(&self, node: NodeId) -> &XmlElement {
		&self.nodes[node.0]
	}

	/// Children of `node` with the given local name.
	pub fn children_named<'a>(
		&'a self,
		node: NodeId,
		name: &'a str,
	) -> impl Iterator<Item = NodeId> + 'a {
		self.nodes[node.0]
			.children
			.iter()
			.copied()
			.filter(move |child| self.nodes[child.0].name == name)
	}

	/// Number of elements in the tree.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Renders the tree as UTF-8 XML. Every namespace in `prefixes` is
	/// declared on the root element and nowhere else.
	pub fn render(&self, prefixes: &NamespacePrefixTable, xml_declaration: bool) -> Result<Vec<u8>> {
		let mut writer = Writer::new(Vec::new());
		if xml_declaration {
			writer
				.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
				.map_err(xml_error)?;
		}
		self.write_element(&mut writer, self.root(), prefixes, true)?;
		Ok(writer.into_inner())
	}

	fn write_element(
		&self,
		writer: &mut Writer<Vec<u8>>,
		node: NodeId,
		prefixes: &NamespacePrefixTable,
		is_root: bool,
	) -> Result<()> {
		let element = self.element(node);
		let name = qualified_element_name(prefixes, &element.namespace, &element.name)?;

		let mut start = BytesStart::new(name.as_str());
		if is_root {
			for (prefix, uri) in prefixes.declarations() {
				match prefix {
					Some(prefix) => {
						let declaration = format!("xmlns:{}", prefix);
						start.push_attribute((declaration.as_str(), uri));
					}
					None => start.push_attribute(("xmlns", uri)),
				}
			}
		}
		for attribute in &element.attributes {
			let attribute_name = qualified_attribute_name(prefixes, attribute)?;
			start.push_attribute((attribute_name.as_str(), attribute.value.as_str()));
		}

		if element.children.is_empty() && element.text.is_none() {
			writer.write_event(Event::Empty(start)).map_err(xml_error)?;
			return Ok(());
		}

		writer.write_event(Event::Start(start)).map_err(xml_error)?;
		if let Some(text) = &element.text {
			writer
				.write_event(Event::Text(BytesText::new(text)))
				.map_err(xml_error)?;
		}
		for child in &element.children {
			self.write_element(writer, *child, prefixes, false)?;
		}
		writer
			.write_event(Event::End(BytesEnd::new(name.as_str())))
			.map_err(xml_error)?;
		Ok(())
	}
}

fn qualified_element_name(
	prefixes: &NamespacePrefixTable,
	namespace: &str,
	name: &str,
) -> Result<String> {
	match prefixes.prefix(namespace) {
		Some(Some(prefix)) => Ok(format!("{}:{}", prefix, name)),
		Some(None) => Ok(name.to_string()),
		None => Err(undeclared(namespace)),
	}
}

// Attributes in the default namespace render unqualified.
fn qualified_attribute_name(
	prefixes: &NamespacePrefixTable,
	attribute: &XmlAttribute,
) -> Result<String> {
	let Some(namespace) = &attribute.namespace else {
		return Ok(attribute.name.clone());
	};
	qualified_element_name(prefixes, namespace, &attribute.name)
}

fn undeclared(namespace: &str) -> reinhardt_odata_exception::ODataError {
	SerializationError::Xml(format!("namespace '{}' has no declared prefix", namespace)).into()
}

fn xml_error(error: std::io::Error) -> reinhardt_odata_exception::ODataError {
	SerializationError::Xml(error.to_string()).into()
}
