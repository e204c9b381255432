//! `ortho-poly` library crate.
//!
//! The binary (`orthopoly`) is a thin wrapper around this library so that:
//!
//! - the recurrence and the model are testable without spawning processes
//! - the model can be embedded elsewhere (evaluate a fit without the file layer)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod sweep;
