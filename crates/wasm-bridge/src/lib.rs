//! JSON message boundary between a web front end and the planner core.

pub mod dispatch;
pub mod messages;
pub mod planner_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, process_json};
pub use messages::{ConstraintEntry, PlannerToUi, UiToPlanner};
pub use planner_state::{BridgeError, PlannerState};
