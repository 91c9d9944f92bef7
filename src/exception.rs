//! Error types shared by every OData operation.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_odata::exception::ODataError;
//!
//! let err = ODataError::NotAcceptable("image/gif".to_string());
//! assert!(err.is_not_acceptable());
//! ```

pub use reinhardt_odata_exception::*;
