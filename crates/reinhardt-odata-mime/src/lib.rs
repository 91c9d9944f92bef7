//! # Reinhardt OData MIME
//!
//! Media range value type and Accept-header utilities shared by the OData
//! content negotiator and the entity provider.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_odata_mime::{AcceptHeader, MediaRange};
//!
//! let accept = AcceptHeader::parse("application/xml;q=0.8, application/json").unwrap();
//! let first = accept.ranked()[0];
//! assert_eq!(first, &MediaRange::new("application", "json"));
//! ```

pub mod accept;
pub mod media_range;
pub mod media_types;

pub use accept::{AcceptHeader, rank};
pub use media_range::{CHARSET, MediaRange, QUALITY, Quality, Specificity, WILDCARD};
pub use media_types::{TEXT_PLAIN_CS_UTF_8, UTF_8};
