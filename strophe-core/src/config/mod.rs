//! Configuration types
//!
//! Board-agnostic configuration structures with the reference timing
//! values as defaults. Validation is fail-fast: constructors reject a
//! bad configuration before the first tick runs.

pub mod types;

pub use types::*;
