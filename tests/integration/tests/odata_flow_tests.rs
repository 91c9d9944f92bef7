//! OData request flow tests
//!
//! Negotiation followed by serialization, as a transport layer drives it.

use http::{Method, StatusCode};
use reinhardt_odata::prelude::*;
use reinhardt_odata_integration_tests::{
	Target, entity_set_names, get, handle_property_update, handle_read, init_tracing,
	ref_scenario,
};
use rstest::*;

#[fixture]
fn schemas() -> Vec<Schema> {
	init_tracing();
	ref_scenario()
}

#[fixture]
fn age() -> Property {
	Property::new("Age", EdmSimpleTypeKind::Int32)
}

// ============================================================================
// Metadata
// ============================================================================

#[rstest]
fn test_metadata_default_representation(schemas: Vec<Schema>) {
	let response = handle_read(&schemas, &get(None), None, Target::Metadata).unwrap();
	assert_eq!(response.content_header(), Some("application/xml;charset=utf-8"));
	let body = response.body_str().unwrap();
	assert!(body.contains(r#"<Schema Namespace="RefScenario">"#));
	assert!(body.contains(r#"<EntitySet Name="Employees" EntityType="RefScenario.Employee"/>"#));
}

#[rstest]
fn test_metadata_json_is_not_acceptable(schemas: Vec<Schema>) {
	let error = handle_read(
		&schemas,
		&get(Some("application/json")),
		None,
		Target::Metadata,
	)
	.unwrap_err();
	assert!(error.is_not_acceptable());
	assert_eq!(error.status_code(), StatusCode::NOT_ACCEPTABLE);
}

#[rstest]
fn test_metadata_unsupported_charset_is_not_acceptable(schemas: Vec<Schema>) {
	let error = handle_read(
		&schemas,
		&get(Some("application/xml;charset=iso-8859-1")),
		None,
		Target::Metadata,
	)
	.unwrap_err();
	assert!(error.is_not_acceptable());
}

// ============================================================================
// Service document
// ============================================================================

#[rstest]
fn test_service_document_format_json(schemas: Vec<Schema>) {
	let response = handle_read(
		&schemas,
		&get(Some("application/atomsvc+xml")),
		Some("json"),
		Target::ServiceDocument,
	)
	.unwrap();
	assert_eq!(response.content_header(), Some("application/json;charset=utf-8"));
	let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
	assert_eq!(body["d"]["EntitySets"], serde_json::json!(["Employees", "Managers"]));
}

#[rstest]
fn test_service_document_atom(schemas: Vec<Schema>) {
	let response = handle_read(
		&schemas,
		&get(Some("application/atomsvc+xml")),
		None,
		Target::ServiceDocument,
	)
	.unwrap();
	assert_eq!(
		response.content_header(),
		Some("application/atomsvc+xml;charset=utf-8")
	);
	let body = response.body_str().unwrap();
	assert!(body.contains(r#"<app:collection href="Managers">"#));
	assert_eq!(entity_set_names(&schemas), vec!["Employees", "Managers"]);
}

#[rstest]
fn test_service_document_atom_alias(schemas: Vec<Schema>) {
	let response =
		handle_read(&schemas, &get(None), Some("atom"), Target::ServiceDocument).unwrap();
	assert_eq!(
		response.content_header(),
		Some("application/atomsvc+xml;charset=utf-8")
	);
}

// ============================================================================
// Property values
// ============================================================================

#[rstest]
fn test_property_value_text_plain(schemas: Vec<Schema>, age: Property) {
	let value = EdmValue::Int32(52);
	let response = handle_read(
		&schemas,
		&get(Some("text/plain")),
		None,
		Target::PropertyValue(&age, &value),
	)
	.unwrap();
	assert_eq!(response.content_header(), Some("text/plain;charset=utf-8"));
	assert_eq!(response.body_str(), Some("52"));
}

#[rstest]
fn test_property_value_with_wildcard_accept(schemas: Vec<Schema>, age: Property) {
	let value = EdmValue::Int32(52);
	let response = handle_read(
		&schemas,
		&get(Some("*/*")),
		None,
		Target::PropertyValue(&age, &value),
	)
	.unwrap();
	assert_eq!(response.content_header(), Some("text/plain;charset=utf-8"));
}

#[rstest]
fn test_property_update_round_trip(age: Property) {
	let request = ODataRequest::new(Method::PUT).with_content_type("text/plain;charset=utf-8");
	let value = handle_property_update(&request, &age, b"42", None).unwrap();
	assert_eq!(value, EdmValue::Int32(42));

	let value =
		handle_property_update(&request, &age, b"42", Some(TargetType::Int64)).unwrap();
	assert_eq!(value, EdmValue::Int64(42));

	let error =
		handle_property_update(&request, &age, b"42", Some(TargetType::Float32)).unwrap_err();
	assert!(matches!(
		error,
		ODataError::Serialization(SerializationError::UnsupportedCoercion { .. })
	));
	assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
fn test_property_update_requires_content_type(age: Property) {
	let request = ODataRequest::new(Method::PUT);
	let error = handle_property_update(&request, &age, b"42", None).unwrap_err();
	assert!(error.is_not_acceptable());
}

#[rstest]
fn test_property_update_rejects_get(age: Property) {
	let request = ODataRequest::new(Method::GET).with_content_type("text/plain");
	let error = handle_property_update(&request, &age, b"42", None).unwrap_err();
	assert!(matches!(error, ODataError::InvalidArgument(_)));
}

// ============================================================================
// Counts and media resources
// ============================================================================

#[rstest]
fn test_count(schemas: Vec<Schema>) {
	let response = handle_read(&schemas, &get(None), None, Target::Count(2)).unwrap();
	assert_eq!(response.content_header(), Some("text/plain;charset=utf-8"));
	assert_eq!(response.body_str(), Some("2"));
}

#[rstest]
fn test_media_resource_keeps_requested_type(schemas: Vec<Schema>) {
	let bytes = [0xffu8, 0xd8, 0xff, 0xe0];
	let response = handle_read(
		&schemas,
		&get(Some("image/jpeg")),
		None,
		Target::Media(&bytes),
	)
	.unwrap();
	assert_eq!(response.content_header(), Some("image/jpeg"));
	assert_eq!(response.body().as_ref(), &bytes[..]);
}
