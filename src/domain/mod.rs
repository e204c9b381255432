//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - where a model's files live (`ModelFiles`)
//! - the x grid to evaluate over (`SweepRange`)
//! - run configuration (`RunConfig`, `ParseMode`)
//! - the portable curve JSON schema (`CurveFile`)

pub mod types;

pub use types::*;
