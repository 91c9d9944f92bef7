//! # Reinhardt OData Provider
//!
//! Serialization of OData payloads:
//!
//! - single property values (`$value`) through [`BasicEntityProvider::write_property_value`]
//!   and [`BasicEntityProvider::read_property_value`], including target-type coercion
//! - opaque binary and plain text payloads
//! - the `$metadata` document, built by [`MetadataWriter`] over an arena
//!   [`SchemaDocument`] with a [`NamespacePrefixTable`] and an optional
//!   [`AnnotationProvider`]
//! - the service document in Atom or JSON form
//!
//! Writers return an [`ODataResponse`]. Only [`BasicEntityProvider::write_binary`]
//! sets a content header; for everything else the caller composes it from the
//! negotiated representation.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_odata_provider::BasicEntityProvider;
//!
//! let provider = BasicEntityProvider::new();
//! let response = provider.write_binary("image/jpeg", vec![0xff, 0xd8]).unwrap();
//! assert_eq!(response.content_header(), Some("image/jpeg"));
//! assert_eq!(provider.read_binary(response.body().as_ref()).unwrap(), vec![0xff, 0xd8]);
//! ```

pub mod annotation;
pub mod document;
pub mod metadata;
pub mod namespace;
pub mod provider;
pub mod response;
pub mod service_document;

pub use annotation::{AnnotationProvider, ElementIdentity, Extensions};
pub use document::{NodeId, SchemaDocument, XmlAttribute, XmlElement};
pub use metadata::{MetadataDocument, MetadataSettings, MetadataWriter};
pub use namespace::NamespacePrefixTable;
pub use provider::BasicEntityProvider;
pub use reinhardt_odata_exception::BoxError;
pub use response::ODataResponse;
pub use service_document::{
	Category, Collection, CommonAttributes, ServiceDocument, ServiceDocumentFormat, Workspace,
};
