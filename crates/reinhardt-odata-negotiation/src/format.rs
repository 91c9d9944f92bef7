//! `$format` resolution

use reinhardt_odata_exception::{ODataError, Result};
use reinhardt_odata_mime::MediaRange;

use crate::settings::{ATOM_ALIAS, NegotiationSettings};
use crate::uri::UriType;

/// Turns a `$format` value into the media range it requests.
///
/// `atom` depends on the request kind, configured aliases map to their media
/// type, and anything else must be a media type itself. An unusable value is
/// a negotiation failure, not a malformed request.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_negotiation::{NegotiationSettings, UriType, resolve_format};
///
/// let settings = NegotiationSettings::default();
/// let atom = resolve_format("atom", UriType::Entity, &settings).unwrap();
/// assert_eq!(atom.to_string(), "application/atom+xml;type=entry");
///
/// let json = resolve_format("json", UriType::Entity, &settings).unwrap();
/// assert_eq!(json.to_string(), "application/json");
///
/// let explicit = resolve_format("application/xml; charset=utf-8", UriType::Metadata, &settings).unwrap();
/// assert_eq!(explicit.charset(), Some("utf-8"));
///
/// assert!(resolve_format("yaml", UriType::Entity, &settings).is_err());
/// ```
pub fn resolve_format(
	format: &str,
	uri_type: UriType,
	settings: &NegotiationSettings,
) -> Result<MediaRange> {
	let format = format.trim();
	if format.eq_ignore_ascii_case(ATOM_ALIAS) {
		return Ok(uri_type.atom_media_range());
	}
	let media_type = settings.format_alias(format).unwrap_or(format);
	MediaRange::parse(media_type).map_err(|_| {
		ODataError::NotAcceptable(format!("unsupported $format value '{}'", format))
	})
}
