//! WASM entry points for the web worker.
//!
//! Only compiled for the `wasm32` target.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::dispatch::{error_response, process_json, to_json};
use crate::planner_state::{BridgeError, PlannerState};

// Single-threaded in the web worker.
thread_local! {
    static PLANNER: RefCell<Option<PlannerState>> = const { RefCell::new(None) };
}

/// Initialize the planner. Call once before `process_message`.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    PLANNER.with(|cell| {
        *cell.borrow_mut() = Some(PlannerState::new());
    });
}

/// Process a JSON `UiToPlanner` message and return a JSON `PlannerToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    PLANNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => process_json(state, json_input),
        None => to_json(&error_response(&BridgeError::NotInitialized)),
    })
}
