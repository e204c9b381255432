//! The fitted orthogonal polynomial model.
//!
//! The model is immutable after construction so it can be evaluated from many
//! threads at once (see `sweep`).

pub mod model;

pub use model::*;
