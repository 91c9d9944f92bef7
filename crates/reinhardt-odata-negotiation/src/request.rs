//! Request context consumed by the negotiator

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, Method};

/// The parts of an incoming HTTP request that negotiation depends on.
///
/// Built by the transport layer; the negotiator only reads it.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_negotiation::ODataRequest;
/// use http::Method;
///
/// let request = ODataRequest::new(Method::GET).with_accept("application/json, */*;q=0.1");
/// assert_eq!(request.accept_headers(), ["application/json", "*/*;q=0.1"]);
/// assert!(!request.is_write());
/// ```
#[derive(Debug, Clone)]
pub struct ODataRequest {
	method: Method,
	accept_header: Option<String>,
	accept_headers: Vec<String>,
	content_type: Option<String>,
}

impl ODataRequest {
	pub fn new(method: Method) -> Self {
		Self {
			method,
			accept_header: None,
			accept_headers: Vec::new(),
			content_type: None,
		}
	}

	/// Collects `Accept` and `Content-Type` from a header map. Repeated
	/// `Accept` lines are joined in order.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::ODataRequest;
	/// use http::{HeaderMap, HeaderValue, Method, header};
	///
	/// let mut headers = HeaderMap::new();
	/// headers.append(header::ACCEPT, HeaderValue::from_static("application/xml"));
	/// headers.append(header::ACCEPT, HeaderValue::from_static("text/plain;q=0.5"));
	/// headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
	///
	/// let request = ODataRequest::from_headers(Method::POST, &headers);
	/// assert_eq!(request.accept_header(), Some("application/xml, text/plain;q=0.5"));
	/// assert_eq!(request.content_type(), Some("application/json"));
	/// ```
	pub fn from_headers(method: Method, headers: &HeaderMap) -> Self {
		let accept: Vec<&str> = headers
			.get_all(ACCEPT)
			.iter()
			.filter_map(|value| value.to_str().ok())
			.collect();
		let mut request = Self::new(method);
		if !accept.is_empty() {
			request = request.with_accept(accept.join(", "));
		}
		if let Some(content_type) = headers
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
		{
			request = request.with_content_type(content_type);
		}
		request
	}

	/// Sets the raw Accept header and splits it into tokens.
	pub fn with_accept(mut self, raw: impl Into<String>) -> Self {
		let raw = raw.into();
		self.accept_headers = raw
			.split(',')
			.map(str::trim)
			.filter(|token| !token.is_empty())
			.map(String::from)
			.collect();
		self.accept_header = Some(raw);
		self
	}

	/// Sets already split Accept tokens (the raw value is rebuilt from them).
	pub fn with_accept_tokens<I, S>(mut self, tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.accept_headers = tokens.into_iter().map(Into::into).collect();
		self.accept_header = Some(self.accept_headers.join(", "));
		self
	}

	/// Sets the declared content type of the request body.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	/// The raw Accept header value, if any.
	pub fn accept_header(&self) -> Option<&str> {
		self.accept_header.as_deref()
	}

	/// Accept header tokens, split on commas and trimmed.
	pub fn accept_headers(&self) -> &[String] {
		&self.accept_headers
	}

	pub fn content_type(&self) -> Option<&str> {
		self.content_type.as_deref()
	}

	/// Returns `true` for methods that carry an entity body to deserialize
	/// (POST, PUT, PATCH and the OData `MERGE` tunnel).
	pub fn is_write(&self) -> bool {
		self.method == Method::POST
			|| self.method == Method::PUT
			|| self.method == Method::PATCH
			|| self.method.as_str() == "MERGE"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Method::GET, false)]
	#[case(Method::DELETE, false)]
	#[case(Method::POST, true)]
	#[case(Method::PUT, true)]
	#[case(Method::PATCH, true)]
	fn test_is_write(#[case] method: Method, #[case] expected: bool) {
		assert_eq!(ODataRequest::new(method).is_write(), expected);
	}

	#[rstest]
	fn test_merge_is_write() {
		let merge = Method::from_bytes(b"MERGE").unwrap();
		assert!(ODataRequest::new(merge).is_write());
	}

	#[rstest]
	fn test_with_accept_tokens_rebuilds_raw() {
		let request = ODataRequest::new(Method::GET).with_accept_tokens(["sup/*", "*/*"]);
		assert_eq!(request.accept_header(), Some("sup/*, */*"));
		assert_eq!(request.accept_headers().len(), 2);
	}

	#[rstest]
	fn test_from_headers_without_accept() {
		let request = ODataRequest::from_headers(Method::GET, &HeaderMap::new());
		assert_eq!(request.accept_header(), None);
		assert!(request.accept_headers().is_empty());
	}
}
