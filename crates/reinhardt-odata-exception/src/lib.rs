//! Error types for OData negotiation and serialization.
//!
//! Every fallible operation in the OData crates returns [`Result`], whose
//! error side is [`ODataError`]. Errors are always handed back to the caller;
//! nothing inside the core logs an error and carries on.
//!
//! # Examples
//!
//! ```
//! use reinhardt_odata_exception::{ODataError, SerializationError};
//! use http::StatusCode;
//!
//! let err = ODataError::NotAcceptable("image/gif".to_string());
//! assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);
//!
//! let err: ODataError = SerializationError::NullNotAllowed {
//! 	property: "Age".to_string(),
//! }
//! .into();
//! assert!(err.to_string().contains("Age"));
//! ```

use http::StatusCode;
use thiserror::Error;

/// Boxed error reported by an external collaborator (for example an
/// annotation provider callback).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error for every OData operation.
#[derive(Debug, Error)]
pub enum ODataError {
	/// Malformed or missing construction input. Never retried.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// No representation, charset or format satisfies the request.
	#[error("not acceptable: {0}")]
	NotAcceptable(String),

	/// Value/type coercion failure, malformed schema input or a failing
	/// annotation provider.
	#[error(transparent)]
	Serialization(#[from] SerializationError),

	/// Underlying stream failure.
	#[error("I/O failure: {0}")]
	Io(#[from] std::io::Error),
}

impl ODataError {
	/// Maps the error onto the HTTP status a transport layer should report.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_exception::ODataError;
	/// use http::StatusCode;
	///
	/// let err = ODataError::InvalidArgument("request".to_string());
	/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			ODataError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
			ODataError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
			ODataError::Serialization(_) | ODataError::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Returns `true` for negotiation failures (HTTP 406).
	pub fn is_not_acceptable(&self) -> bool {
		matches!(self, ODataError::NotAcceptable(_))
	}
}

/// Errors raised while converting EDM-typed values or building documents.
///
/// Each variant carries the type names and values needed to diagnose the
/// failure without looking at provider internals.
#[derive(Debug, Error)]
pub enum SerializationError {
	/// A null value was supplied (or read) for a non-nullable property.
	#[error("property '{property}' is not nullable")]
	NullNotAllowed { property: String },

	/// The literal cannot be parsed as the declared EDM type.
	#[error("literal '{literal}' is not a valid {edm_type} value")]
	InvalidLiteral { edm_type: String, literal: String },

	/// The runtime value's shape is not convertible into the declared type.
	#[error("value of kind {value_kind} cannot be written as {edm_type}")]
	ValueTypeMismatch { edm_type: String, value_kind: String },

	/// The target hint is outside the type's coercion table.
	#[error("{edm_type} cannot be coerced into target type {target}")]
	UnsupportedCoercion { edm_type: String, target: String },

	/// The coercion is allowed but the concrete value does not fit.
	#[error("{edm_type} value {value} does not fit into {target}")]
	ValueOutOfRange {
		edm_type: String,
		target: String,
		value: String,
	},

	/// A String or Binary value exceeds the MaxLength facet.
	#[error("property '{property}' exceeds max length {max_length} (got {actual})")]
	MaxLengthExceeded {
		property: String,
		max_length: usize,
		actual: usize,
	},

	/// The payload is not valid UTF-8.
	#[error("payload for {edm_type} is not valid UTF-8")]
	InvalidEncoding { edm_type: String },

	/// Two entity types share a qualified name.
	#[error("duplicate entity type '{qualified_name}'")]
	DuplicateEntityType { qualified_name: String },

	/// Two complex types share a qualified name.
	#[error("duplicate complex type '{qualified_name}'")]
	DuplicateComplexType { qualified_name: String },

	/// Two properties of the same structural type share a name.
	#[error("duplicate property '{property}' in '{qualified_name}'")]
	DuplicateProperty {
		qualified_name: String,
		property: String,
	},

	/// An annotation provider callback failed.
	#[error("annotation provider failed for {element}: {source}")]
	Annotation {
		element: String,
		#[source]
		source: BoxError,
	},

	/// The document writer failed.
	#[error("XML writer error: {0}")]
	Xml(String),

	/// The JSON writer failed.
	#[error("JSON writer error: {0}")]
	Json(String),
}

/// Result alias used throughout the OData crates.
pub type Result<T> = std::result::Result<T, ODataError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ODataError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST)]
	#[case(ODataError::NotAcceptable("x".into()), StatusCode::NOT_ACCEPTABLE)]
	#[case(
		ODataError::Serialization(SerializationError::Xml("x".into())),
		StatusCode::INTERNAL_SERVER_ERROR
	)]
	#[case(
		ODataError::Io(std::io::Error::from(std::io::ErrorKind::UnexpectedEof)),
		StatusCode::INTERNAL_SERVER_ERROR
	)]
	fn test_status_code(#[case] error: ODataError, #[case] expected: StatusCode) {
		assert_eq!(error.status_code(), expected);
	}

	#[rstest]
	fn test_error_send_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<ODataError>();
		assert_send_sync::<SerializationError>();
	}

	#[rstest]
	fn test_unsupported_coercion_names_both_types() {
		let error = SerializationError::UnsupportedCoercion {
			edm_type: "Edm.Int32".to_string(),
			target: "Float32".to_string(),
		};
		let message = error.to_string();
		assert!(message.contains("Edm.Int32"));
		assert!(message.contains("Float32"));
	}

	#[rstest]
	fn test_annotation_error_keeps_source() {
		let cause: BoxError = "lookup failed".into();
		let error = SerializationError::Annotation {
			element: "EntityType RefScenario.Employee".to_string(),
			source: cause,
		};
		assert!(std::error::Error::source(&error).is_some());
		assert!(error.to_string().contains("lookup failed"));
	}

	#[rstest]
	fn test_io_conversion() {
		let error: ODataError = std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into();
		assert!(matches!(error, ODataError::Io(_)));
		assert!(!error.is_not_acceptable());
	}
}
