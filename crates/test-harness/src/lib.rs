//! Test harness for the rig planner.
//!
//! # Key Components
//!
//! - [`RigBuilder`] — Fluent API driving the real bridge dispatch path
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`report`] — Structured text summary of a planned rig
//! - [`helpers`] — Error type, parameter fixtures, geometry probes
//! - [`assertions`] — Assertion helpers returning diagnostics instead of panicking

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::LayoutReport;
pub use workflow::{Plan, RigBuilder};
