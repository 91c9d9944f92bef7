//! Representations the OData protocol works with.
//!
//! Constructors rather than constants, since [`MediaRange`] owns its strings.

use crate::media_range::{MediaRange, WILDCARD};

/// Default charset of the protocol.
pub const UTF_8: &str = "utf-8";

/// `text/plain;charset=utf-8`, the header used for textual `$value` payloads.
pub const TEXT_PLAIN_CS_UTF_8: &str = "text/plain;charset=utf-8";

pub fn application_xml() -> MediaRange {
	MediaRange::new("application", "xml")
}

pub fn text_xml() -> MediaRange {
	MediaRange::new("text", "xml")
}

pub fn application_json() -> MediaRange {
	MediaRange::new("application", "json")
}

pub fn application_atom_xml() -> MediaRange {
	MediaRange::new("application", "atom+xml")
}

/// `application/atom+xml;type=feed`
pub fn application_atom_xml_feed() -> MediaRange {
	application_atom_xml().with_parameter("type", "feed")
}

/// `application/atom+xml;type=entry`
pub fn application_atom_xml_entry() -> MediaRange {
	application_atom_xml().with_parameter("type", "entry")
}

pub fn application_atom_svc() -> MediaRange {
	MediaRange::new("application", "atomsvc+xml")
}

pub fn application_octet_stream() -> MediaRange {
	MediaRange::new("application", "octet-stream")
}

pub fn text_plain() -> MediaRange {
	MediaRange::new("text", "plain")
}

pub fn multipart_mixed() -> MediaRange {
	MediaRange::new("multipart", "mixed")
}

/// `*/*`
pub fn wildcard() -> MediaRange {
	MediaRange::new(WILDCARD, WILDCARD)
}
