//! URI descriptor consumed by the negotiator
//!
//! URI parsing happens upstream; the negotiator only needs to know which
//! kind of resource was addressed and whether `$format` was given.

use reinhardt_odata_mime::{MediaRange, media_types};

/// Classifies the addressed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriType {
	/// `/`
	ServiceDocument,
	/// `/Employees`
	EntitySet,
	/// `/Employees('1')`
	Entity,
	/// `/Managers('1')/nm_Employees`
	NavigationToMany,
	/// `/Employees('1')/ne_Manager`
	NavigationToOne,
	/// `/Employees('1')/Location`
	ComplexProperty,
	/// `/Employees('1')/Age`
	SimpleProperty,
	/// `/Employees('1')/Age/$value`
	SimplePropertyValue,
	/// `/$metadata`
	Metadata,
	/// `/$batch`
	Batch,
	/// `/Employees/$count`
	EntitySetCount,
	/// `/Employees('1')/$count`
	EntityCount,
	/// `/Managers('1')/$links/nm_Employees`
	Links,
	/// `/Employees('1')/$links/ne_Manager`
	Link,
	/// `/Employees('1')/$value`
	MediaResource,
	/// `/EmployeeSearch?q='x'`
	FunctionImport,
}

impl UriType {
	/// Representations the server can produce for this kind of request, in
	/// server preference order.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::UriType;
	///
	/// let supported = UriType::Metadata.supported_content_types();
	/// assert_eq!(supported[0].to_string(), "application/xml");
	/// ```
	pub fn supported_content_types(&self) -> Vec<MediaRange> {
		match self {
			UriType::ServiceDocument => vec![
				media_types::application_atom_svc(),
				media_types::application_json(),
				media_types::application_xml(),
			],
			UriType::EntitySet | UriType::NavigationToMany => vec![
				media_types::application_atom_xml_feed(),
				media_types::application_atom_xml(),
				media_types::application_json(),
			],
			UriType::Entity | UriType::NavigationToOne => vec![
				media_types::application_atom_xml_entry(),
				media_types::application_atom_xml(),
				media_types::application_json(),
			],
			UriType::ComplexProperty
			| UriType::SimpleProperty
			| UriType::Links
			| UriType::Link
			| UriType::FunctionImport => vec![
				media_types::application_xml(),
				media_types::text_xml(),
				media_types::application_json(),
			],
			UriType::SimplePropertyValue => {
				vec![media_types::text_plain(), media_types::wildcard()]
			}
			UriType::Metadata => vec![media_types::application_xml()],
			UriType::EntitySetCount | UriType::EntityCount => vec![media_types::text_plain()],
			UriType::MediaResource => vec![media_types::wildcard()],
			UriType::Batch => vec![media_types::multipart_mixed()],
		}
	}

	/// Body representations the server can deserialize for write requests
	/// against this kind of resource. Empty when the resource is read-only.
	pub fn supported_input_types(&self) -> Vec<MediaRange> {
		match self {
			UriType::EntitySet | UriType::Entity | UriType::NavigationToMany => vec![
				media_types::application_atom_xml_entry(),
				media_types::application_atom_xml(),
				media_types::application_json(),
			],
			UriType::ComplexProperty | UriType::SimpleProperty => vec![
				media_types::application_xml(),
				media_types::text_xml(),
				media_types::application_json(),
			],
			UriType::Links | UriType::Link => vec![
				media_types::application_xml(),
				media_types::application_json(),
			],
			UriType::SimplePropertyValue => {
				vec![media_types::text_plain(), media_types::wildcard()]
			}
			UriType::MediaResource => vec![media_types::wildcard()],
			UriType::Batch => vec![media_types::multipart_mixed()],
			UriType::ServiceDocument
			| UriType::NavigationToOne
			| UriType::Metadata
			| UriType::EntitySetCount
			| UriType::EntityCount
			| UriType::FunctionImport => Vec::new(),
		}
	}

	/// The Atom representation the `atom` format alias stands for.
	pub fn atom_media_range(&self) -> MediaRange {
		match self {
			UriType::ServiceDocument => media_types::application_atom_svc(),
			UriType::EntitySet | UriType::NavigationToMany => media_types::application_atom_xml_feed(),
			UriType::Entity | UriType::NavigationToOne => media_types::application_atom_xml_entry(),
			_ => media_types::application_atom_xml(),
		}
	}
}

/// The pre-parsed URI facts negotiation needs.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_negotiation::{UriInfo, UriType};
///
/// let info = UriInfo::new(UriType::EntitySet).with_format("json");
/// assert_eq!(info.uri_type(), UriType::EntitySet);
/// assert_eq!(info.format(), Some("json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriInfo {
	uri_type: UriType,
	format: Option<String>,
}

impl UriInfo {
	pub fn new(uri_type: UriType) -> Self {
		Self {
			uri_type,
			format: None,
		}
	}

	/// Sets the `$format` system query option.
	pub fn with_format(mut self, format: impl Into<String>) -> Self {
		self.format = Some(format.into());
		self
	}

	pub fn uri_type(&self) -> UriType {
		self.uri_type
	}

	pub fn format(&self) -> Option<&str> {
		self.format.as_deref()
	}
}
