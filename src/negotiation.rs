//! Accept-header and `$format` content negotiation.
//!
//! # Examples
//!
//! ```rust
//! use http::Method;
//! use reinhardt_odata::negotiation::{ContentNegotiator, ODataRequest, UriInfo, UriType};
//!
//! let request = ODataRequest::new(Method::GET).with_accept("application/xml");
//! let uri_info = UriInfo::new(UriType::Metadata);
//! let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();
//! let chosen = negotiator
//! 	.do_accept_negotiation(&UriType::Metadata.supported_content_types())
//! 	.unwrap();
//! assert_eq!(chosen.to_string(), "application/xml;charset=utf-8");
//! ```

pub use reinhardt_odata_negotiation::*;
