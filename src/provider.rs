//! Property value, binary, metadata and service document serialization.

pub use reinhardt_odata_provider::*;
