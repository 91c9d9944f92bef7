//! Integration test utilities for Reinhardt OData
//!
//! A small request handler that runs the full flow the way a transport
//! layer would: negotiate the representation, serialize the payload, then
//! compose the content header from the negotiated media range.

use http::Method;
use reinhardt_odata::edm::{
	EdmFacets, EntityContainer, EntitySet, EntityType, FullQualifiedName,
};
use reinhardt_odata::prelude::*;
use reinhardt_odata::provider::ServiceDocument;

pub const SERVICE_ROOT: &str = "http://localhost/odata/RefScenario.svc/";

/// Installs a test subscriber honoring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// The `RefScenario` model used across the flow tests.
pub fn ref_scenario() -> Vec<Schema> {
	let employee = FullQualifiedName::new("RefScenario", "Employee");
	vec![
		Schema::new("RefScenario")
			.with_entity_type(
				EntityType::new("Employee")
					.with_key(["EmployeeId"])
					.with_has_stream(true)
					.with_property(
						Property::new("EmployeeId", EdmSimpleTypeKind::String)
							.with_facets(EdmFacets::new().with_nullable(false)),
					)
					.with_property(
						Property::new("EmployeeName", EdmSimpleTypeKind::String)
							.with_facets(EdmFacets::new().with_max_length(20)),
					)
					.with_property(Property::new("Age", EdmSimpleTypeKind::Int32)),
			)
			.with_entity_container(
				EntityContainer::new("Container1")
					.with_default(true)
					.with_entity_set(EntitySet::new("Employees", employee.clone()))
					.with_entity_set(EntitySet::new("Managers", employee)),
			),
	]
}

/// What a request addresses, together with the data the handler needs.
pub enum Target<'a> {
	ServiceDocument,
	Metadata,
	PropertyValue(&'a Property, &'a EdmValue),
	Count(usize),
	Media(&'a [u8]),
}

impl Target<'_> {
	fn uri_type(&self) -> UriType {
		match self {
			Target::ServiceDocument => UriType::ServiceDocument,
			Target::Metadata => UriType::Metadata,
			Target::PropertyValue(..) => UriType::SimplePropertyValue,
			Target::Count(_) => UriType::EntitySetCount,
			Target::Media(_) => UriType::MediaResource,
		}
	}
}

/// Serves a read request against `schemas`.
pub fn handle_read(
	schemas: &[Schema],
	request: &ODataRequest,
	format: Option<&str>,
	target: Target<'_>,
) -> Result<ODataResponse> {
	let uri_type = target.uri_type();
	let mut uri_info = UriInfo::new(uri_type);
	if let Some(format) = format {
		uri_info = uri_info.with_format(format);
	}
	let chosen = ContentNegotiator::new(Some(request), Some(&uri_info))?
		.do_accept_negotiation(&uri_type.supported_content_types())?;
	tracing::debug!(?uri_type, chosen = %chosen, "serving read request");

	let provider = BasicEntityProvider::new();
	let response = match target {
		Target::ServiceDocument => {
			let format = ServiceDocumentFormat::for_content_type(&chosen)?;
			provider.write_service_document(schemas, SERVICE_ROOT, format)?
		}
		Target::Metadata => provider.write_metadata(schemas, None, None)?,
		Target::PropertyValue(property, value) => provider.write_property_value(property, value)?,
		Target::Count(count) => provider.write_text(&count.to_string())?,
		Target::Media(bytes) => return provider.write_binary(&chosen.to_string(), bytes.to_vec()),
	};
	Ok(response.with_content_header(chosen.to_string()))
}

/// Reads the body of a `PUT .../$value` request after negotiating its
/// declared content type.
pub fn handle_property_update(
	request: &ODataRequest,
	property: &Property,
	body: &[u8],
	target: Option<TargetType>,
) -> Result<EdmValue> {
	let uri_info = UriInfo::new(UriType::SimplePropertyValue);
	ContentNegotiator::new(Some(request), Some(&uri_info))?
		.do_content_type_negotiation(&UriType::SimplePropertyValue.supported_input_types())?;
	BasicEntityProvider::new().read_property_value(property, body, target)
}

/// Entity set names listed by the service document of `schemas`.
pub fn entity_set_names(schemas: &[Schema]) -> Vec<String> {
	ServiceDocument::from_schemas(schemas)
		.entity_set_names()
		.into_iter()
		.map(String::from)
		.collect()
}

/// A GET request with the given Accept header.
pub fn get(accept: Option<&str>) -> ODataRequest {
	let request = ODataRequest::new(Method::GET);
	match accept {
		Some(accept) => request.with_accept(accept),
		None => request,
	}
}
