//! Entity Data Model: primitive types, values and schema descriptors.

pub use reinhardt_odata_edm::*;
