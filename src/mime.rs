//! Media ranges, quality values and Accept header parsing.

pub use reinhardt_odata_mime::*;
