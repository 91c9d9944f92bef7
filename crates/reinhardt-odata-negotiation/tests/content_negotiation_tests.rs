//! Content negotiation tests
//!
//! Scenario tests for Accept-header matching, `$format` overrides, charset
//! completion and request body negotiation.

use http::{HeaderMap, HeaderValue, Method, header};
use reinhardt_odata_exception::ODataError;
use reinhardt_odata_mime::MediaRange;
use reinhardt_odata_negotiation::{
	ContentNegotiator, NegotiationSettings, ODataRequest, UriInfo, UriType,
};
use rstest::*;

fn ranges(values: &[&str]) -> Vec<MediaRange> {
	values
		.iter()
		.map(|value| MediaRange::parse(value).unwrap())
		.collect()
}

/// Routes negotiation events to the test output; set `RUST_LOG=trace` to
/// see rejected candidates.
fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

#[fixture]
fn request() -> ODataRequest {
	init_tracing();
	ODataRequest::new(Method::GET)
}

#[fixture]
fn uri_info() -> UriInfo {
	init_tracing();
	UriInfo::new(UriType::EntitySet)
}

fn negotiate(accepted: &[&str], supported: &[&str]) -> Result<String, ODataError> {
	init_tracing();
	let request = ODataRequest::new(Method::GET);
	let uri_info = UriInfo::new(UriType::EntitySet);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info))?;
	negotiator
		.content_negotiation(&ranges(accepted), &ranges(supported))
		.map(|chosen| chosen.to_string())
}

// ============================================================================
// Construction
// ============================================================================

#[rstest]
fn test_missing_request_is_invalid_argument(uri_info: UriInfo) {
	let result = ContentNegotiator::new(None, Some(&uri_info));
	assert!(matches!(result, Err(ODataError::InvalidArgument(_))));
}

#[rstest]
fn test_missing_uri_info_is_invalid_argument(request: ODataRequest) {
	let result = ContentNegotiator::new(Some(&request), None);
	assert!(matches!(result, Err(ODataError::InvalidArgument(_))));
}

#[rstest]
fn test_missing_both_is_invalid_argument() {
	let result = ContentNegotiator::new(None, None);
	assert!(matches!(result, Err(ODataError::InvalidArgument(_))));
}

// ============================================================================
// content_negotiation
// ============================================================================

#[rstest]
#[case(&[], &["sup/111", "sup/222"], "sup/111")]
#[case(&["image/gif"], &["sup/111", "sup/222", "image/*"], "image/gif")]
#[case(&["image/gif"], &["sup/111", "sup/222", "*/*"], "image/gif")]
#[case(&["*/*"], &["*/*"], "*/*")]
#[case(&["sup/*", "*/*"], &["bla/111", "sup/222"], "sup/222")]
#[case(&["*/*"], &["sup/111", "sup/222"], "sup/111")]
#[case(&["bla/111", "sup/222"], &["sup/222", "bla/111"], "bla/111")]
#[case(
	&["text/plain;q=0.5", "application/json;odata=verbose;q=0.2", "*/*"],
	&["application/json;charset=utf-8", "sup/222"],
	"application/json;charset=utf-8"
)]
#[case(
	&["text/plain;q=0.5", "application/json;odata=verbose;q=0.8"],
	&["application/json;charset=utf-8", "text/plain"],
	"application/json;charset=utf-8;odata=verbose"
)]
fn test_content_negotiation(
	#[case] accepted: &[&str],
	#[case] supported: &[&str],
	#[case] expected: &str,
) {
	assert_eq!(negotiate(accepted, supported).unwrap(), expected);
}

#[rstest]
#[case(&["image/gif"], &["sup/111", "sup/222"])]
#[case(&["text/plain;charset=iso-8859-1"], &["sup/111", "sup/222"])]
#[case(&["text/plain;charset=iso-8859-1"], &["text/plain;charset=utf-8"])]
#[case(&["sub2/222;q=0"], &["sub2/222"])]
fn test_content_negotiation_not_acceptable(#[case] accepted: &[&str], #[case] supported: &[&str]) {
	let result = negotiate(accepted, supported);
	assert!(matches!(result, Err(ODataError::NotAcceptable(_))));
}

#[rstest]
fn test_exact_match_beats_earlier_wildcard() {
	let chosen = negotiate(&["*/*", "sup/*", "sup/222"], &["sup/111", "sup/222"]).unwrap();
	assert_eq!(chosen, "sup/222");
}

#[rstest]
fn test_higher_quality_wildcard_beats_lower_exact() {
	let chosen = negotiate(&["sup/222;q=0.4", "*/*"], &["sup/111", "sup/222"]).unwrap();
	assert_eq!(chosen, "sup/111");
}

#[rstest]
fn test_content_negotiation_adds_no_charset() {
	let chosen = negotiate(&["application/xml"], &["application/xml"]).unwrap();
	assert_eq!(chosen, "application/xml");
}

#[rstest]
fn test_unhonored_charset_against_open_charset_is_not_acceptable() {
	let result = negotiate(&["text/plain;charset=iso-8859-1"], &["text/plain"]);
	assert!(matches!(result, Err(ODataError::NotAcceptable(_))));
}

#[rstest]
fn test_configured_charset_is_honored() {
	let request = ODataRequest::new(Method::GET);
	let uri_info = UriInfo::new(UriType::SimplePropertyValue);
	let settings = NegotiationSettings::from_toml_str(
		r#"
supported_charsets = ["utf-8", "iso-8859-1"]
"#,
	)
	.unwrap();
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info))
		.unwrap()
		.with_settings(settings);

	let chosen = negotiator
		.content_negotiation(
			&ranges(&["text/plain;charset=iso-8859-1"]),
			&ranges(&["text/plain"]),
		)
		.unwrap();
	assert_eq!(chosen.to_string(), "text/plain;charset=iso-8859-1");
}

// ============================================================================
// do_accept_negotiation
// ============================================================================

#[rstest]
#[case(UriType::Metadata, "application/xml", "application/xml;charset=utf-8")]
#[case(UriType::ServiceDocument, "application/json", "application/json;charset=utf-8")]
#[case(UriType::ServiceDocument, "*/*", "application/atomsvc+xml;charset=utf-8")]
#[case(UriType::EntitySet, "application/atom+xml", "application/atom+xml;type=feed;charset=utf-8")]
#[case(UriType::EntitySetCount, "text/plain", "text/plain;charset=utf-8")]
#[case(UriType::SimplePropertyValue, "image/jpeg", "image/jpeg;charset=utf-8")]
#[case(UriType::MediaResource, "image/jpeg", "image/jpeg")]
#[case(UriType::MediaResource, "*/*", "*/*")]
fn test_accept_negotiation(#[case] uri_type: UriType, #[case] accept: &str, #[case] expected: &str) {
	let request = ODataRequest::new(Method::GET).with_accept(accept);
	let uri_info = UriInfo::new(uri_type);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&uri_type.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), expected);
}

#[rstest]
fn test_accept_negotiation_without_accept_uses_server_default(request: ODataRequest) {
	let uri_info = UriInfo::new(UriType::Entity);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&UriType::Entity.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "application/atom+xml;type=entry;charset=utf-8");
}

#[rstest]
fn test_accept_negotiation_keeps_declared_charset() {
	let request = ODataRequest::new(Method::GET).with_accept("application/json;charset=UTF-8");
	let uri_info = UriInfo::new(UriType::Entity);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&UriType::Entity.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "application/json;charset=utf-8");
}

#[rstest]
fn test_accept_negotiation_rejects_unhonored_charset() {
	let request = ODataRequest::new(Method::GET).with_accept("application/xml;charset=iso-8859-1");
	let uri_info = UriInfo::new(UriType::Metadata);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let result = negotiator.do_accept_negotiation(&UriType::Metadata.supported_content_types());
	assert!(matches!(result, Err(ODataError::NotAcceptable(_))));
}

#[rstest]
fn test_accept_negotiation_from_repeated_headers() {
	let mut headers = HeaderMap::new();
	headers.append(header::ACCEPT, HeaderValue::from_static("text/html;q=0.9"));
	headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
	let request = ODataRequest::from_headers(Method::GET, &headers);
	let uri_info = UriInfo::new(UriType::SimpleProperty);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&UriType::SimpleProperty.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "application/json;charset=utf-8");
}

#[rstest]
fn test_accept_negotiation_malformed_header_is_invalid_argument() {
	let request = ODataRequest::new(Method::GET).with_accept("*/xml");
	let uri_info = UriInfo::new(UriType::Entity);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let result = negotiator.do_accept_negotiation(&UriType::Entity.supported_content_types());
	assert!(matches!(result, Err(ODataError::InvalidArgument(_))));
}

// ============================================================================
// $format
// ============================================================================

#[rstest]
#[case(UriType::Metadata, "application/xml", "application/xml;charset=utf-8")]
#[case(UriType::Metadata, "xml", "application/xml;charset=utf-8")]
#[case(UriType::EntitySet, "atom", "application/atom+xml;type=feed;charset=utf-8")]
#[case(UriType::Entity, "atom", "application/atom+xml;type=entry;charset=utf-8")]
#[case(UriType::ServiceDocument, "atom", "application/atomsvc+xml;charset=utf-8")]
#[case(UriType::EntitySet, "json", "application/json;charset=utf-8")]
fn test_format_negotiation(#[case] uri_type: UriType, #[case] format: &str, #[case] expected: &str) {
	let request = ODataRequest::new(Method::GET);
	let uri_info = UriInfo::new(uri_type).with_format(format);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&uri_type.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), expected);
}

#[rstest]
fn test_format_overrides_accept_header() {
	let request = ODataRequest::new(Method::GET).with_accept("application/atom+xml");
	let uri_info = UriInfo::new(UriType::EntitySet).with_format("json");
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&UriType::EntitySet.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "application/json;charset=utf-8");
}

#[rstest]
fn test_format_ignores_unacceptable_accept_header() {
	let request = ODataRequest::new(Method::GET).with_accept("image/gif");
	let uri_info = UriInfo::new(UriType::Metadata).with_format("xml");
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_accept_negotiation(&UriType::Metadata.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "application/xml;charset=utf-8");
}

#[rstest]
#[case(UriType::Metadata, "json")]
#[case(UriType::EntitySetCount, "atom")]
#[case(UriType::Entity, "yaml")]
fn test_format_not_supported(#[case] uri_type: UriType, #[case] format: &str) {
	let request = ODataRequest::new(Method::GET);
	let uri_info = UriInfo::new(uri_type).with_format(format);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let result = negotiator.do_accept_negotiation(&uri_type.supported_content_types());
	assert!(matches!(result, Err(ODataError::NotAcceptable(_))));
}

#[rstest]
fn test_custom_format_alias() {
	let request = ODataRequest::new(Method::GET);
	let uri_info = UriInfo::new(UriType::EntitySetCount).with_format("txt");
	let settings = NegotiationSettings::from_toml_str(
		r#"
[format_aliases]
txt = "text/plain"
"#,
	)
	.unwrap();
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info))
		.unwrap()
		.with_settings(settings);

	let chosen = negotiator
		.do_accept_negotiation(&UriType::EntitySetCount.supported_content_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "text/plain;charset=utf-8");
}

// ============================================================================
// do_content_type_negotiation
// ============================================================================

#[rstest]
#[case(UriType::EntitySet, "application/atom+xml", "application/atom+xml;type=entry")]
#[case(UriType::Entity, "application/json", "application/json")]
#[case(UriType::SimpleProperty, "text/xml", "text/xml")]
#[case(UriType::MediaResource, "image/png", "image/png")]
#[case(UriType::Batch, "multipart/mixed;boundary=batch_1", "multipart/mixed;boundary=batch_1")]
fn test_content_type_negotiation(
	#[case] uri_type: UriType,
	#[case] content_type: &str,
	#[case] expected: &str,
) {
	let request = ODataRequest::new(Method::POST).with_content_type(content_type);
	let uri_info = UriInfo::new(uri_type);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_content_type_negotiation(&uri_type.supported_input_types())
		.unwrap();
	assert_eq!(chosen.to_string(), expected);
}

#[rstest]
fn test_content_type_negotiation_requires_write_method(uri_info: UriInfo) {
	let request = ODataRequest::new(Method::GET).with_content_type("application/json");
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let result = negotiator.do_content_type_negotiation(&UriType::EntitySet.supported_input_types());
	assert!(matches!(result, Err(ODataError::InvalidArgument(_))));
}

#[rstest]
fn test_content_type_negotiation_missing_content_type(uri_info: UriInfo) {
	let request = ODataRequest::new(Method::PUT);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let result = negotiator.do_content_type_negotiation(&UriType::EntitySet.supported_input_types());
	assert!(matches!(result, Err(ODataError::NotAcceptable(_))));
}

#[rstest]
fn test_content_type_negotiation_unsupported_type(uri_info: UriInfo) {
	let request = ODataRequest::new(Method::POST).with_content_type("text/csv");
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let result = negotiator.do_content_type_negotiation(&UriType::EntitySet.supported_input_types());
	assert!(matches!(result, Err(ODataError::NotAcceptable(_))));
}

#[rstest]
fn test_content_type_negotiation_merge_tunnel() {
	let merge = Method::from_bytes(b"MERGE").unwrap();
	let request = ODataRequest::new(merge).with_content_type("application/atom+xml;type=entry");
	let uri_info = UriInfo::new(UriType::Entity);
	let negotiator = ContentNegotiator::new(Some(&request), Some(&uri_info)).unwrap();

	let chosen = negotiator
		.do_content_type_negotiation(&UriType::Entity.supported_input_types())
		.unwrap();
	assert_eq!(chosen.to_string(), "application/atom+xml;type=entry");
}
