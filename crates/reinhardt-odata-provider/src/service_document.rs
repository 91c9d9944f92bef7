//! Service document
//!
//! The service document lists the entity sets a service exposes. It is
//! written either as an Atom Publishing Protocol `app:service` document or in
//! the verbose JSON form `{"d":{"EntitySets":[...]}}`.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use reinhardt_odata_edm::{Schema, default_entity_container};
use reinhardt_odata_exception::{ODataError, Result, SerializationError};
use reinhardt_odata_mime::MediaRange;
use serde_json::json;

const APP_NAMESPACE: &str = "http://www.w3.org/2007/app";
const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
const DEFAULT_WORKSPACE_TITLE: &str = "Default";

/// Wire form of a service document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDocumentFormat {
	Atom,
	Json,
}

impl ServiceDocumentFormat {
	/// Picks the format for a negotiated content type.
	///
	/// # Errors
	///
	/// `NotAcceptable` for types that are neither JSON nor an XML flavor.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::MediaRange;
	/// use reinhardt_odata_provider::ServiceDocumentFormat;
	///
	/// let json = MediaRange::parse("application/json;charset=utf-8").unwrap();
	/// assert_eq!(ServiceDocumentFormat::for_content_type(&json).unwrap(), ServiceDocumentFormat::Json);
	/// let svc = MediaRange::parse("application/atomsvc+xml").unwrap();
	/// assert_eq!(ServiceDocumentFormat::for_content_type(&svc).unwrap(), ServiceDocumentFormat::Atom);
	/// ```
	pub fn for_content_type(content_type: &MediaRange) -> Result<Self> {
		let subtype = content_type.subtype();
		match (content_type.main_type(), subtype) {
			("application", "json") => Ok(Self::Json),
			("application", "xml" | "atomsvc+xml") | ("text", "xml") => Ok(Self::Atom),
			_ => Err(ODataError::NotAcceptable(format!(
				"no service document representation for {}",
				content_type
			))),
		}
	}
}

/// `xml:base` and `xml:lang` carried by Atom service document elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonAttributes {
	pub base: Option<String>,
	pub lang: Option<String>,
}

impl CommonAttributes {
	pub fn with_base(mut self, base: impl Into<String>) -> Self {
		self.base = Some(base.into());
		self
	}

	pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = Some(lang.into());
		self
	}

	fn apply(&self, start: &mut BytesStart<'_>) {
		if let Some(base) = &self.base {
			start.push_attribute(("xml:base", base.as_str()));
		}
		if let Some(lang) = &self.lang {
			start.push_attribute(("xml:lang", lang.as_str()));
		}
	}
}

/// An `atom:category` of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
	pub term: String,
	pub scheme: Option<String>,
	pub label: Option<String>,
	pub common_attributes: CommonAttributes,
}

impl Category {
	pub fn new(term: impl Into<String>) -> Self {
		Self {
			term: term.into(),
			..Self::default()
		}
	}

	pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = Some(scheme.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_common_attributes(mut self, common_attributes: CommonAttributes) -> Self {
		self.common_attributes = common_attributes;
		self
	}
}

/// An `app:collection`, one per entity set.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_provider::{Category, Collection};
///
/// let collection = Collection::new("Employees")
/// 	.with_title("All employees")
/// 	.with_category(Category::new("staff").with_scheme("http://example.org/scheme"));
/// assert_eq!(collection.title(), "All employees");
/// assert_eq!(collection.categories.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
	pub href: String,
	pub title: Option<String>,
	pub categories: Vec<Category>,
	/// Whether the category list is closed (`fixed="yes"`).
	pub fixed_categories: bool,
	pub common_attributes: CommonAttributes,
}

impl Collection {
	pub fn new(href: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			..Self::default()
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_category(mut self, category: Category) -> Self {
		self.categories.push(category);
		self
	}

	pub fn with_fixed_categories(mut self, fixed: bool) -> Self {
		self.fixed_categories = fixed;
		self
	}

	pub fn with_common_attributes(mut self, common_attributes: CommonAttributes) -> Self {
		self.common_attributes = common_attributes;
		self
	}

	/// The title, falling back to the href.
	pub fn title(&self) -> &str {
		self.title.as_deref().unwrap_or(&self.href)
	}
}

/// An `app:workspace`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
	pub title: String,
	pub collections: Vec<Collection>,
}

impl Workspace {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			collections: Vec::new(),
		}
	}

	pub fn with_collection(mut self, collection: Collection) -> Self {
		self.collections.push(collection);
		self
	}
}

/// The whole service document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDocument {
	pub workspaces: Vec<Workspace>,
}

impl ServiceDocument {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_workspace(mut self, workspace: Workspace) -> Self {
		self.workspaces.push(workspace);
		self
	}

	/// One `Default` workspace listing every entity set of the default
	/// entity container; sets of other containers are addressed as
	/// `Container.Set`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_edm::{EntityContainer, EntitySet, FullQualifiedName, Schema};
	/// use reinhardt_odata_provider::ServiceDocument;
	///
	/// let employee = FullQualifiedName::new("RefScenario", "Employee");
	/// let schemas = vec![Schema::new("RefScenario").with_entity_container(
	/// 	EntityContainer::new("Container1")
	/// 		.with_default(true)
	/// 		.with_entity_set(EntitySet::new("Employees", employee)),
	/// )];
	/// let document = ServiceDocument::from_schemas(&schemas);
	/// assert_eq!(document.entity_set_names(), vec!["Employees"]);
	/// ```
	pub fn from_schemas(schemas: &[Schema]) -> Self {
		let default_container = default_entity_container(schemas);
		let mut workspace = Workspace::new(DEFAULT_WORKSPACE_TITLE);
		for container in schemas.iter().flat_map(|schema| &schema.entity_containers) {
			let is_default = default_container.is_some_and(|default| std::ptr::eq(default, container));
			for entity_set in &container.entity_sets {
				let href = if is_default {
					entity_set.name.clone()
				} else {
					format!("{}.{}", container.name, entity_set.name)
				};
				workspace = workspace.with_collection(Collection::new(href));
			}
		}
		Self::new().with_workspace(workspace)
	}

	/// Hrefs of all collections across workspaces.
	pub fn entity_set_names(&self) -> Vec<&str> {
		self.workspaces
			.iter()
			.flat_map(|workspace| &workspace.collections)
			.map(|collection| collection.href.as_str())
			.collect()
	}

	/// Renders the document; `service_root` becomes the Atom `xml:base`.
	pub fn write(&self, service_root: &str, format: ServiceDocumentFormat) -> Result<Vec<u8>> {
		match format {
			ServiceDocumentFormat::Atom => self.write_atom(service_root),
			ServiceDocumentFormat::Json => self.write_json(),
		}
	}

	fn write_json(&self) -> Result<Vec<u8>> {
		let body = json!({ "d": { "EntitySets": self.entity_set_names() } });
		serde_json::to_vec(&body)
			.map_err(|e| SerializationError::Json(e.to_string()).into())
	}

	fn write_atom(&self, service_root: &str) -> Result<Vec<u8>> {
		let mut writer = Writer::new(Vec::new());
		write(
			&mut writer,
			Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))),
		)?;

		let mut service = BytesStart::new("app:service");
		service.push_attribute(("xml:base", service_root));
		service.push_attribute(("xmlns:app", APP_NAMESPACE));
		service.push_attribute(("xmlns:atom", ATOM_NAMESPACE));
		write(&mut writer, Event::Start(service))?;

		for workspace in &self.workspaces {
			write(&mut writer, Event::Start(BytesStart::new("app:workspace")))?;
			write_title(&mut writer, &workspace.title)?;
			for collection in &workspace.collections {
				write_collection(&mut writer, collection)?;
			}
			write(&mut writer, Event::End(BytesEnd::new("app:workspace")))?;
		}

		write(&mut writer, Event::End(BytesEnd::new("app:service")))?;
		Ok(writer.into_inner())
	}
}

fn write_collection(writer: &mut Writer<Vec<u8>>, collection: &Collection) -> Result<()> {
	let mut start = BytesStart::new("app:collection");
	start.push_attribute(("href", collection.href.as_str()));
	collection.common_attributes.apply(&mut start);
	write(writer, Event::Start(start))?;
	write_title(writer, collection.title())?;

	if !collection.categories.is_empty() {
		let mut categories = BytesStart::new("app:categories");
		if collection.fixed_categories {
			categories.push_attribute(("fixed", "yes"));
		}
		write(writer, Event::Start(categories))?;
		for category in &collection.categories {
			let mut element = BytesStart::new("atom:category");
			element.push_attribute(("term", category.term.as_str()));
			if let Some(scheme) = &category.scheme {
				element.push_attribute(("scheme", scheme.as_str()));
			}
			if let Some(label) = &category.label {
				element.push_attribute(("label", label.as_str()));
			}
			category.common_attributes.apply(&mut element);
			write(writer, Event::Empty(element))?;
		}
		write(writer, Event::End(BytesEnd::new("app:categories")))?;
	}

	write(writer, Event::End(BytesEnd::new("app:collection")))
}

fn write_title(writer: &mut Writer<Vec<u8>>, title: &str) -> Result<()> {
	write(writer, Event::Start(BytesStart::new("atom:title")))?;
	write(writer, Event::Text(BytesText::new(title)))?;
	write(writer, Event::End(BytesEnd::new("atom:title")))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
	writer
		.write_event(event)
		.map_err(|e| SerializationError::Xml(e.to_string()).into())
}
