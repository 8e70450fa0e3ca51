use bom_report::{materials_list, measurements};
use hydro_types::{constraint_table, ParameterVector};
use layout_builder::build_layout_with;
use tracing::{instrument, warn};

use crate::messages::{ConstraintEntry, PlannerToUi, UiToPlanner};
use crate::planner_state::{BridgeError, PlannerState};

/// Dispatch a UI message and return the response. Failures become `Error` responses.
#[instrument(skip_all)]
pub fn dispatch(state: &mut PlannerState, msg: UiToPlanner) -> PlannerToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "request rejected");
            error_response(&e)
        }
    }
}

/// Parse a JSON request, dispatch it and serialize the response.
pub fn process_json(state: &mut PlannerState, json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToPlanner>(json_input) {
        Ok(msg) => dispatch(state, msg),
        Err(e) => error_response(&BridgeError::Parse {
            message: e.to_string(),
        }),
    };
    to_json(&response)
}

pub(crate) fn error_response(e: &BridgeError) -> PlannerToUi {
    PlannerToUi::Error {
        message: e.to_string(),
        field: e.field(),
    }
}

pub(crate) fn to_json(response: &PlannerToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","message":"Serialization failed: {}","field":null}}"#,
            e
        )
    })
}

fn handle_message(state: &mut PlannerState, msg: UiToPlanner) -> Result<PlannerToUi, BridgeError> {
    match msg {
        UiToPlanner::Resolve { params } => {
            let model = state.model_for(&params)?;
            Ok(PlannerToUi::Resolved {
                warnings: model.physical_warnings(),
                model,
            })
        }

        UiToPlanner::BuildLayout { params, options } => {
            let model = state.model_for(&params)?;
            let scene = build_layout_with(&params, &model, &options, &state.config);
            Ok(PlannerToUi::LayoutBuilt { scene })
        }

        UiToPlanner::Plan { params, options } => {
            let model = state.model_for(&params)?;
            let scene = build_layout_with(&params, &model, &options, &state.config);
            let materials = materials_list(&model);
            Ok(PlannerToUi::Planned {
                warnings: model.physical_warnings(),
                materials_text: materials.to_text(),
                measurements: measurements(&params, &model),
                cut_list: scene.cut_list(),
                materials,
                scene,
                model,
            })
        }

        UiToPlanner::Constraints => Ok(PlannerToUi::Constraints {
            constraints: constraint_table()
                .into_iter()
                .map(|(name, c)| ConstraintEntry {
                    name,
                    min: c.min,
                    max: c.max,
                    step: c.step,
                })
                .collect(),
            defaults: ParameterVector::default(),
        }),
    }
}
