//! Assertion helpers with diagnostic output.
//!
//! Each returns `Err(HarnessError)` with expected and actual values instead of
//! panicking, so a scenario can report every failure it hits.

use hydro_types::SegmentRole;
use layout_builder::SceneGraph;

use crate::helpers::HarnessError;
use crate::oracle::OracleVerdict;

/// Assert the number of parts carrying `role`.
pub fn assert_role_count(
    scene: &SceneGraph,
    role: SegmentRole,
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = scene.parts_with_role(role).len();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected {expected} {role:?} parts, got {actual}"),
        })
    }
}

/// Assert two lengths agree within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{ctx}] expected {expected:.6}, got {actual:.6} (diff {:.2e})",
                (actual - expected).abs()
            ),
        })
    }
}

/// Assert every verdict passed; the error lists all failures.
pub fn assert_all_pass(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    let failures: Vec<String> = verdicts
        .iter()
        .filter(|v| !v.passed)
        .map(|v| format!("{}: {}", v.oracle_name, v.detail))
        .collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::OracleFailure {
            oracle: ctx.to_string(),
            detail: failures.join("; "),
        })
    }
}
