//! # Reinhardt OData Negotiation
//!
//! Selects the representation an OData response is written in, and the
//! deserializer for the body of write requests.
//!
//! ## Overview
//!
//! A [`ContentNegotiator`] is created per request from an [`ODataRequest`]
//! (method, Accept header, body content type) and a [`UriInfo`] (request kind
//! and optional `$format`). Three entry points exist:
//!
//! - [`ContentNegotiator::content_negotiation`]: the bare matching algorithm
//! - [`ContentNegotiator::do_accept_negotiation`]: `$format` or Accept, then
//!   charset completion
//! - [`ContentNegotiator::do_content_type_negotiation`]: body content type of
//!   write requests
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_odata_negotiation::{ContentNegotiator, ODataRequest, UriInfo, UriType};
//! use http::Method;
//!
//! let request = ODataRequest::new(Method::GET).with_accept("application/atom+xml, */*;q=0.1");
//! let uri_info = UriInfo::new(UriType::Entity);
//! let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();
//!
//! let chosen = negotiator
//! 	.do_accept_negotiation(&UriType::Entity.supported_content_types())
//! 	.unwrap();
//! assert_eq!(chosen.to_string(), "application/atom+xml;type=entry;charset=utf-8");
//! ```
//!
//! ## Configuration
//!
//! [`NegotiationSettings`] controls the default charset, the charsets the
//! server honors and the `$format` aliases. Settings can be loaded from TOML
//! with [`NegotiationSettings::from_toml_str`].

pub mod format;
pub mod negotiator;
pub mod request;
pub mod settings;
pub mod uri;

pub use format::resolve_format;
pub use negotiator::ContentNegotiator;
pub use request::ODataRequest;
pub use settings::{ATOM_ALIAS, NegotiationSettings};
pub use uri::{UriInfo, UriType};

pub use reinhardt_odata_mime::{AcceptHeader, MediaRange, Quality};
