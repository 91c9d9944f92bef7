//! # Reinhardt OData EDM
//!
//! The Entity Data Model as far as serialization needs it.
//!
//! ## Primitive types
//!
//! [`EdmSimpleTypeKind`] is a closed enum of the fifteen EDM primitive types.
//! Values travel as [`EdmValue`]. Each kind converts values to and from its
//! literal form and coerces parsed values into the [`TargetType`]s listed in
//! its coercion table.
//!
//! ```rust
//! use reinhardt_odata_edm::{EdmSimpleTypeKind, EdmValue, TargetType};
//!
//! let kind = EdmSimpleTypeKind::Decimal;
//! let value = kind.value_of_string("12.50").unwrap();
//! assert_eq!(kind.value_to_string(&value).unwrap(), "12.50");
//! assert_eq!(kind.coerce(value, TargetType::Float64).unwrap(), EdmValue::Double(12.5));
//! ```
//!
//! ## Schema descriptors
//!
//! [`Schema`], [`EntityType`], [`Property`] and friends describe a service's
//! model for the metadata document. [`Property`] doubles as the type
//! descriptor of scalar property values.

pub mod facets;
mod literal;
pub mod schema;
pub mod simple_type;
pub mod target;
pub mod value;

pub use facets::EdmFacets;
pub use schema::{
	AnnotationAttribute, AnnotationElement, Association, AssociationEnd, AssociationSet,
	AssociationSetEnd, ComplexType, CustomizableFeedMappings, EntityContainer, EntitySet,
	EntityType, FeedContentKind, FullQualifiedName, Multiplicity, NavigationProperty, Property,
	PropertyType, Schema, default_entity_container, target_path,
};
pub use simple_type::{EDM_NAMESPACE, EdmSimpleTypeKind};
pub use target::TargetType;
pub use value::EdmValue;
