//! Input/output helpers.
//!
//! - vector file ingest + model construction (`ingest`)
//! - sweep outputs (`export`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
