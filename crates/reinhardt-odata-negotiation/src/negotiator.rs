//! Content negotiator
//!
//! Selects exactly one representation per request. The negotiator is built
//! per request around a borrowed request context and URI descriptor and
//! keeps no state between calls.
//!
//! Matching rules, applied per accepted range in rank order (see
//! [`reinhardt_odata_mime::rank`]):
//!
//! - candidates are compared by specificity: exact type and subtype, then a
//!   `type/*` on either side, then `*/*`; the earliest supported range wins a
//!   tie
//! - a parameter both sides declare with different values is a non-match
//! - an accepted charset the supported range leaves open must be one the
//!   server honors
//! - the result is the supported range with wildcards filled from the
//!   accepted range and missing parameters copied over

use reinhardt_odata_exception::{ODataError, Result};
use reinhardt_odata_mime::{AcceptHeader, MediaRange, Specificity, rank};

use crate::format::resolve_format;
use crate::request::ODataRequest;
use crate::settings::NegotiationSettings;
use crate::uri::{UriInfo, UriType};

/// Per-request content negotiator.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_negotiation::{ContentNegotiator, ODataRequest, UriInfo, UriType};
/// use http::Method;
///
/// let request = ODataRequest::new(Method::GET).with_accept("application/json;q=0.9, application/xml");
/// let uri_info = UriInfo::new(UriType::Metadata);
///
/// let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();
/// let chosen = negotiator
/// 	.do_accept_negotiation(&UriType::Metadata.supported_content_types())
/// 	.unwrap();
/// assert_eq!(chosen.to_string(), "application/xml;charset=utf-8");
/// ```
#[derive(Debug, Clone)]
pub struct ContentNegotiator<'a> {
	request: &'a ODataRequest,
	uri_info: &'a UriInfo,
	settings: NegotiationSettings,
}

impl<'a> ContentNegotiator<'a> {
	/// Creates a negotiator for one request.
	///
	/// Both collaborators are required; a missing one is an
	/// [`ODataError::InvalidArgument`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::{ContentNegotiator, UriInfo, UriType};
	///
	/// let uri_info = UriInfo::new(UriType::Entity);
	/// assert!(ContentNegotiator::new(None, Some(&uri_info)).is_err());
	/// ```
	pub fn new(request: Option<&'a ODataRequest>, uri_info: Option<&'a UriInfo>) -> Result<Self> {
		let request = request
			.ok_or_else(|| ODataError::InvalidArgument("request context is required".to_string()))?;
		let uri_info = uri_info
			.ok_or_else(|| ODataError::InvalidArgument("URI descriptor is required".to_string()))?;
		Ok(Self {
			request,
			uri_info,
			settings: NegotiationSettings::default(),
		})
	}

	/// Replaces the default settings.
	pub fn with_settings(mut self, settings: NegotiationSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn settings(&self) -> &NegotiationSettings {
		&self.settings
	}

	/// Core negotiation between the client's acceptable ranges and the
	/// server's supported ranges.
	///
	/// An empty `accepted` list selects `supported[0]`. No default charset is
	/// attached here; see [`ContentNegotiator::do_accept_negotiation`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::{ContentNegotiator, ODataRequest, UriInfo, UriType};
	/// use reinhardt_odata_mime::MediaRange;
	/// use http::Method;
	///
	/// let request = ODataRequest::new(Method::GET);
	/// let uri_info = UriInfo::new(UriType::MediaResource);
	/// let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();
	///
	/// let supported = vec![
	/// 	MediaRange::new("sup", "111"),
	/// 	MediaRange::new("sup", "222"),
	/// 	MediaRange::new("image", "*"),
	/// ];
	/// let accepted = vec![MediaRange::new("image", "gif")];
	/// let chosen = negotiator.content_negotiation(&accepted, &supported).unwrap();
	/// assert_eq!(chosen.to_string(), "image/gif");
	/// ```
	pub fn content_negotiation(
		&self,
		accepted: &[MediaRange],
		supported: &[MediaRange],
	) -> Result<MediaRange> {
		let first = supported.first().ok_or_else(|| {
			ODataError::InvalidArgument("supported content types must not be empty".to_string())
		})?;

		if accepted.is_empty() {
			tracing::debug!(chosen = %first, "no Accept preference, using server default");
			return Ok(first.clone());
		}

		for candidate in rank(accepted) {
			if let Some(chosen) = self.best_match(candidate, supported) {
				tracing::debug!(
					accepted = %candidate,
					chosen = %chosen,
					"negotiated content type"
				);
				return Ok(chosen);
			}
		}

		Err(ODataError::NotAcceptable(format!(
			"none of [{}] matches the supported content types [{}]",
			join(accepted),
			join(supported)
		)))
	}

	/// Matches an explicit format override directly and exclusively against
	/// `supported`, bypassing the Accept header.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::{ContentNegotiator, ODataRequest, UriInfo, UriType};
	/// use http::Method;
	///
	/// let request = ODataRequest::new(Method::GET).with_accept("application/json");
	/// let uri_info = UriInfo::new(UriType::EntitySet);
	/// let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();
	///
	/// let supported = UriType::EntitySet.supported_content_types();
	/// let chosen = negotiator.resolve_for_format(&supported, "atom").unwrap();
	/// assert_eq!(chosen.to_string(), "application/atom+xml;type=feed");
	/// ```
	pub fn resolve_for_format(&self, supported: &[MediaRange], format: &str) -> Result<MediaRange> {
		if supported.is_empty() {
			return Err(ODataError::InvalidArgument(
				"supported content types must not be empty".to_string(),
			));
		}
		let requested = resolve_format(format, self.uri_info.uri_type(), &self.settings)?;
		let chosen = self.best_match(&requested, supported).ok_or_else(|| {
			ODataError::NotAcceptable(format!(
				"$format '{}' does not match the supported content types [{}]",
				format,
				join(supported)
			))
		})?;
		tracing::debug!(format, chosen = %chosen, "$format overrides Accept header");
		Ok(chosen)
	}

	/// Full negotiation for the response of this request.
	///
	/// Uses `$format` when present, the Accept header otherwise, then makes
	/// the result charset-complete: a missing charset becomes the default
	/// charset (not for media resources or `*/*`), and a charset the server
	/// cannot honor is [`ODataError::NotAcceptable`].
	pub fn do_accept_negotiation(&self, supported: &[MediaRange]) -> Result<MediaRange> {
		let chosen = match self.uri_info.format() {
			Some(format) => self.resolve_for_format(supported, format)?,
			None => {
				let accept = AcceptHeader::from_tokens(self.request.accept_headers())?;
				self.content_negotiation(&accept.media_ranges, supported)?
			}
		};
		self.complete_charset(chosen)
	}

	/// Negotiation for the body of a write request: the declared
	/// `Content-Type` is matched against the representations the server can
	/// deserialize.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::{ContentNegotiator, ODataRequest, UriInfo, UriType};
	/// use http::Method;
	///
	/// let request = ODataRequest::new(Method::POST).with_content_type("application/json; charset=UTF-8");
	/// let uri_info = UriInfo::new(UriType::EntitySet);
	/// let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();
	///
	/// let chosen = negotiator
	/// 	.do_content_type_negotiation(&UriType::EntitySet.supported_input_types())
	/// 	.unwrap();
	/// assert_eq!(chosen.to_string(), "application/json;charset=utf-8");
	/// ```
	pub fn do_content_type_negotiation(&self, supported_inputs: &[MediaRange]) -> Result<MediaRange> {
		if !self.request.is_write() {
			return Err(ODataError::InvalidArgument(format!(
				"{} requests carry no body to negotiate",
				self.request.method()
			)));
		}
		let content_type = self.request.content_type().ok_or_else(|| {
			ODataError::NotAcceptable("request body has no content type".to_string())
		})?;
		let declared = MediaRange::parse(content_type)?;
		if !declared.is_concrete() {
			return Err(ODataError::InvalidArgument(format!(
				"content type '{}' must not contain wildcards",
				content_type
			)));
		}
		let chosen = self.best_match(&declared, supported_inputs).ok_or_else(|| {
			ODataError::NotAcceptable(format!(
				"content type '{}' is not among the supported input types [{}]",
				declared,
				join(supported_inputs)
			))
		})?;
		tracing::debug!(declared = %declared, chosen = %chosen, "negotiated request content type");
		Ok(chosen)
	}

	/// Picks the most specific compatible supported range for one accepted
	/// range; the earliest supported range wins a tie.
	fn best_match(&self, accepted: &MediaRange, supported: &[MediaRange]) -> Option<MediaRange> {
		let mut best: Option<(Specificity, &MediaRange)> = None;
		for candidate in supported {
			let Some(specificity) = accepted.match_specificity(candidate) else {
				continue;
			};
			if let Some(parameter) = accepted.conflicting_parameter(candidate) {
				tracing::trace!(
					accepted = %accepted,
					candidate = %candidate,
					parameter,
					"parameter conflict"
				);
				continue;
			}
			if !self.charset_honored(accepted, candidate) {
				tracing::trace!(
					accepted = %accepted,
					candidate = %candidate,
					"charset cannot be honored"
				);
				continue;
			}
			if best.is_none_or(|(current, _)| specificity > current) {
				best = Some((specificity, candidate));
			}
		}
		best.map(|(_, candidate)| candidate.resolve_against(accepted))
	}

	fn charset_honored(&self, accepted: &MediaRange, candidate: &MediaRange) -> bool {
		match (accepted.charset(), candidate.charset()) {
			(Some(charset), None) => self.settings.honors_charset(charset),
			_ => true,
		}
	}

	fn complete_charset(&self, chosen: MediaRange) -> Result<MediaRange> {
		let charset = chosen.charset().map(str::to_string);
		match charset {
			Some(charset) if !self.settings.honors_charset(&charset) => {
				Err(ODataError::NotAcceptable(format!(
					"charset '{}' of '{}' is not supported",
					charset, chosen
				)))
			}
			Some(_) => Ok(chosen),
			None if chosen.is_wildcard() || self.uri_info.uri_type() == UriType::MediaResource => {
				Ok(chosen)
			}
			None => {
				let charset = self.settings.default_charset.clone();
				Ok(chosen.with_charset(charset))
			}
		}
	}
}

fn join(ranges: &[MediaRange]) -> String {
	ranges
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}
