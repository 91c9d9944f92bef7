//! Provider output

use bytes::Bytes;

/// A serialized payload plus the content header the provider chose to set.
///
/// Most writers leave the header unset so the caller can compose it from the
/// negotiated representation; framing and status codes are not part of the
/// response.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_provider::ODataResponse;
///
/// let response = ODataResponse::new("42").with_content_header("text/plain;charset=utf-8");
/// assert_eq!(response.body_str(), Some("42"));
/// assert_eq!(response.content_header(), Some("text/plain;charset=utf-8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ODataResponse {
	body: Bytes,
	content_header: Option<String>,
}

impl ODataResponse {
	pub fn new(body: impl Into<Bytes>) -> Self {
		Self {
			body: body.into(),
			content_header: None,
		}
	}

	pub fn with_content_header(mut self, content_header: impl Into<String>) -> Self {
		self.content_header = Some(content_header.into());
		self
	}

	pub fn body(&self) -> &Bytes {
		&self.body
	}

	/// The body as UTF-8 text, `None` for binary payloads.
	pub fn body_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.body).ok()
	}

	pub fn content_header(&self) -> Option<&str> {
		self.content_header.as_deref()
	}

	pub fn into_body(self) -> Bytes {
		self.body
	}
}
