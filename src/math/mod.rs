//! Mathematical utilities: the orthogonal polynomial three-term recurrence.

pub mod recurrence;

pub use recurrence::*;
