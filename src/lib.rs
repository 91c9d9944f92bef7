//! # Reinhardt OData
//!
//! Representation negotiation and EDM-typed serialization for OData v2
//! services.
//!
//! Two stateless components do the work:
//!
//! - the **content negotiator** picks the representation of a response from
//!   the request's Accept header, an explicit `$format` override and the
//!   representations the addressed resource supports
//! - the **entity provider** turns EDM-typed values, binary payloads and
//!   schema descriptors into payload bytes (and property values back)
//!
//! Transport framing, status codes and routing stay with the caller; an
//! [`ODataError`] maps to an HTTP status through
//! [`ODataError::status_code`].
//!
//! ## Feature Flags
//!
//! - `negotiation` - Accept-header and `$format` negotiation
//! - `provider` - EDM types, property values, metadata and service documents
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # {
//! use http::Method;
//! use reinhardt_odata::prelude::*;
//!
//! let request = ODataRequest::new(Method::GET).with_accept("text/plain");
//! let uri_info = UriInfo::new(UriType::SimplePropertyValue);
//! let chosen = ContentNegotiator::new(Some(&request), Some(&uri_info))
//! 	.unwrap()
//! 	.do_accept_negotiation(&uri_info.uri_type().supported_content_types())
//! 	.unwrap();
//!
//! let age = Property::new("Age", EdmSimpleTypeKind::Int32);
//! let response = BasicEntityProvider::new()
//! 	.write_property_value(&age, &EdmValue::Int32(52))
//! 	.unwrap()
//! 	.with_content_header(chosen.to_string());
//! assert_eq!(response.body_str(), Some("52"));
//! assert_eq!(response.content_header(), Some("text/plain;charset=utf-8"));
//! # }
//! ```

pub mod exception;
pub mod mime;

#[cfg(feature = "negotiation")]
pub mod negotiation;

#[cfg(feature = "provider")]
pub mod edm;
#[cfg(feature = "provider")]
pub mod provider;

pub use reinhardt_odata_exception::{ODataError, Result, SerializationError};
pub use reinhardt_odata_mime::{AcceptHeader, MediaRange, Quality};

#[cfg(feature = "negotiation")]
pub use reinhardt_odata_negotiation::{
	ContentNegotiator, NegotiationSettings, ODataRequest, UriInfo, UriType,
};

#[cfg(feature = "provider")]
pub use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue, Property, Schema, TargetType};
#[cfg(feature = "provider")]
pub use reinhardt_odata_provider::{
	AnnotationProvider, BasicEntityProvider, MetadataSettings, MetadataWriter, ODataResponse,
	ServiceDocumentFormat,
};

/// Commonly used types in one import.
pub mod prelude {
	pub use crate::{MediaRange, ODataError, Result, SerializationError};

	#[cfg(feature = "negotiation")]
	pub use crate::{ContentNegotiator, NegotiationSettings, ODataRequest, UriInfo, UriType};

	#[cfg(feature = "provider")]
	pub use crate::{
		AnnotationProvider, BasicEntityProvider, EdmSimpleTypeKind, EdmValue, MetadataSettings,
		MetadataWriter, ODataResponse, Property, Schema, ServiceDocumentFormat, TargetType,
	};
}
