//! Kinet — property value animation primitives.
//!
//! This facade crate re-exports the value decomposition and interpolation
//! engine from `kinet-values`.

pub use kinet_values::*;
