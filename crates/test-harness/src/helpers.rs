//! Helper functions: error type, parameter fixtures, geometry probes.

use hydro_geometry::{Point3d, Tolerance};
use hydro_types::ParameterVector;
use layout_builder::WorldPart;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("unexpected response: expected {expected}, got {got}")]
    UnexpectedResponse { expected: String, got: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

// ── Parameter Fixtures ──────────────────────────────────────────────────────

/// The editor's default rig: 120 x 220 cm, 4 tubes of 4 holes.
pub fn default_params() -> ParameterVector {
    ParameterVector::default()
}

pub fn with_tubes(n: u32) -> ParameterVector {
    ParameterVector {
        num_tubes: n,
        ..default_params()
    }
}

/// Same rig with level tubes, so every joint closes exactly.
pub fn level(params: ParameterVector) -> ParameterVector {
    ParameterVector {
        slope: 0.0,
        ..params
    }
}

/// The corners of the bounds table.
pub fn extreme_params() -> Vec<ParameterVector> {
    let small = ParameterVector {
        width: 100.0,
        height: 100.0,
        num_tubes: 1,
        holes_per_tube: 1,
        hole_size: 2.5,
        tube_radius: 5.0,
        slope: 0.0,
    };
    let large = ParameterVector {
        width: 500.0,
        height: 500.0,
        num_tubes: 10,
        holes_per_tube: 10,
        hole_size: 10.0,
        tube_radius: 20.0,
        slope: 3.0,
    };
    vec![small, large, ParameterVector { num_tubes: 10, ..small }]
}

// ── Geometry Probes ─────────────────────────────────────────────────────────

pub fn ports_of(parts: &[WorldPart]) -> Vec<Point3d> {
    parts.iter().flat_map(|p| p.ports()).collect()
}

/// Points of `ports` that coincide with some point of `targets`.
pub fn joined_ports(ports: &[Point3d], targets: &[Point3d], tol: &Tolerance) -> usize {
    ports
        .iter()
        .filter(|p| targets.iter().any(|t| tol.points_coincident(p, t)))
        .count()
}

pub fn lowest_y(part: &WorldPart) -> f64 {
    part.ports().iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
}
