//! Basic entity provider
//!
//! Stateless conversions between EDM-typed values and payload bytes.

use std::io::Read;

use bytes::Bytes;
use indexmap::IndexMap;
use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue, Property, Schema, TargetType};
use reinhardt_odata_exception::{ODataError, Result, SerializationError};

use crate::annotation::AnnotationProvider;
use crate::metadata::MetadataWriter;
use crate::response::ODataResponse;
use crate::service_document::{ServiceDocument, ServiceDocumentFormat};

/// Serializes property values, binary and text payloads, metadata and
/// service documents.
///
/// The provider holds no state; a single instance can serve any number of
/// concurrent requests.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue, Property, TargetType};
/// use reinhardt_odata_provider::BasicEntityProvider;
///
/// let provider = BasicEntityProvider::new();
/// let age = Property::new("Age", EdmSimpleTypeKind::Int32);
///
/// let response = provider.write_property_value(&age, &EdmValue::Int32(42)).unwrap();
/// assert_eq!(response.body_str(), Some("42"));
/// assert_eq!(response.content_header(), None);
///
/// let value = provider
/// 	.read_property_value(&age, "42".as_bytes(), Some(TargetType::Int64))
/// 	.unwrap();
/// assert_eq!(value, EdmValue::Int64(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicEntityProvider;

impl BasicEntityProvider {
	pub fn new() -> Self {
		Self
	}

	/// Writes a single scalar as its literal (`$value`). Binary properties
	/// are written as raw bytes and `Null` as an empty body. No content
	/// header is set.
	///
	/// # Errors
	///
	/// `NullNotAllowed` for `Null` on a non-nullable property,
	/// `ValueTypeMismatch` when the value does not fit the property's type,
	/// `MaxLengthExceeded` when the value violates the facet.
	pub fn write_property_value(&self, property: &Property, value: &EdmValue) -> Result<ODataResponse> {
		let kind = simple_kind(property)?;
		property.facets.check(&property.name, value)?;

		let body = if value.is_null() {
			Bytes::new()
		} else {
			match kind.normalize(value)? {
				EdmValue::Binary(bytes) => Bytes::from(bytes),
				normalized => Bytes::from(kind.value_to_string(&normalized)?),
			}
		};
		tracing::debug!(
			property = %property.name,
			edm_type = kind.qualified_name(),
			bytes = body.len(),
			"wrote property value"
		);
		Ok(ODataResponse::new(body))
	}

	/// Reads a property value written by [`Self::write_property_value`],
	/// consuming `input` to its end.
	///
	/// With a `target` hint the parsed value is coerced into that
	/// representation, provided the hint is in the type's coercion table.
	///
	/// An empty body is the empty string for String properties, an empty
	/// byte sequence for Binary properties and `Null` for every other type.
	/// Reading back a written `Null` therefore yields `""` or an empty
	/// `Binary` for those two types instead of `Null`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_edm::{EdmSimpleTypeKind, Property, TargetType};
	/// use reinhardt_odata_exception::{ODataError, SerializationError};
	/// use reinhardt_odata_provider::BasicEntityProvider;
	///
	/// let age = Property::new("Age", EdmSimpleTypeKind::Int32);
	/// let result = BasicEntityProvider::new()
	/// 	.read_property_value(&age, "42".as_bytes(), Some(TargetType::Float32));
	/// assert!(matches!(
	/// 	result,
	/// 	Err(ODataError::Serialization(SerializationError::UnsupportedCoercion { .. }))
	/// ));
	/// ```
	pub fn read_property_value<R: Read>(
		&self,
		property: &Property,
		mut input: R,
		target: Option<TargetType>,
	) -> Result<EdmValue> {
		let kind = simple_kind(property)?;
		let mut bytes = Vec::new();
		input.read_to_end(&mut bytes)?;

		let value = if kind == EdmSimpleTypeKind::Binary {
			EdmValue::Binary(bytes)
		} else {
			let literal = String::from_utf8(bytes).map_err(|_| SerializationError::InvalidEncoding {
				edm_type: kind.qualified_name().to_string(),
			})?;
			if literal.is_empty() && kind != EdmSimpleTypeKind::String {
				EdmValue::Null
			} else {
				kind.value_of_string(&literal)?
			}
		};
		property.facets.check(&property.name, &value)?;

		match target {
			Some(target) => kind.coerce(value, target),
			None => Ok(value),
		}
	}

	/// Wraps raw bytes with exactly the given content type; no charset is
	/// added.
	pub fn write_binary(&self, content_type: &str, bytes: impl Into<Bytes>) -> Result<ODataResponse> {
		if content_type.trim().is_empty() {
			return Err(ODataError::InvalidArgument(
				"binary content type must not be empty".to_string(),
			));
		}
		let body = bytes.into();
		tracing::debug!(content_type, bytes = body.len(), "wrote binary payload");
		Ok(ODataResponse::new(body).with_content_header(content_type))
	}

	/// Reads `input` to its end and returns every byte unchanged.
	pub fn read_binary<R: Read>(&self, mut input: R) -> Result<Vec<u8>> {
		let mut bytes = Vec::new();
		input.read_to_end(&mut bytes)?;
		Ok(bytes)
	}

	/// Writes plain UTF-8 text, as used for `$count`. No content header is
	/// set.
	pub fn write_text(&self, text: &str) -> Result<ODataResponse> {
		tracing::debug!(bytes = text.len(), "wrote text payload");
		Ok(ODataResponse::new(Bytes::copy_from_slice(text.as_bytes())))
	}

	pub fn read_text<R: Read>(&self, mut input: R) -> Result<String> {
		let mut bytes = Vec::new();
		input.read_to_end(&mut bytes)?;
		String::from_utf8(bytes).map_err(|_| {
			SerializationError::InvalidEncoding {
				edm_type: EdmSimpleTypeKind::String.qualified_name().to_string(),
			}
			.into()
		})
	}

	/// Writes the metadata document with default [`MetadataSettings`](crate::MetadataSettings).
	///
	/// `predefined_namespaces` maps prefixes to namespace URIs; see
	/// [`MetadataWriter`] for finer control. No content header is set.
	pub fn write_metadata(
		&self,
		schemas: &[Schema],
		predefined_namespaces: Option<&IndexMap<String, String>>,
		annotation_provider: Option<&dyn AnnotationProvider>,
	) -> Result<ODataResponse> {
		let mut writer = MetadataWriter::new();
		if let Some(namespaces) = predefined_namespaces {
			writer = writer.with_predefined_namespaces(namespaces);
		}
		if let Some(provider) = annotation_provider {
			writer = writer.with_annotation_provider(provider);
		}
		let body = writer.write(schemas)?;
		tracing::debug!(schemas = schemas.len(), bytes = body.len(), "wrote metadata document");
		Ok(ODataResponse::new(body))
	}

	/// Writes the service document listing the default container's entity
	/// sets. No content header is set.
	pub fn write_service_document(
		&self,
		schemas: &[Schema],
		service_root: &str,
		format: ServiceDocumentFormat,
	) -> Result<ODataResponse> {
		let body = ServiceDocument::from_schemas(schemas).write(service_root, format)?;
		tracing::debug!(?format, bytes = body.len(), "wrote service document");
		Ok(ODataResponse::new(body))
	}
}

fn simple_kind(property: &Property) -> Result<EdmSimpleTypeKind> {
	property.simple_kind().ok_or_else(|| {
		ODataError::InvalidArgument(format!(
			"property '{}' of type {} has no raw value",
			property.name, property.property_type
		))
	})
}
