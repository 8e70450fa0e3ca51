//! Derives every measurement of a rig from its parameter vector.
//!
//! [`resolve`] is total: out-of-range parameters produce physically
//! meaningless numbers rather than errors. Use
//! [`hydro_types::ParameterVector::validate`] at an input boundary and
//! [`SystemModel::physical_warnings`] to inspect a result.

pub mod model;
pub mod resolve;

pub use model::*;
pub use resolve::resolve;
