//! RigBuilder — fluent API for scripting planner sessions in tests.
//!
//! Wraps `wasm_bridge::dispatch()` so scenarios exercise the real message
//! path, validation included, rather than calling the core directly.

use bom_report::{cut_list_text, Measurements};
use dimension_resolver::{PhysicalWarning, SystemModel};
use hydro_types::{DisplayOptions, ParameterVector};
use layout_builder::{CutListEntry, SceneGraph};
use wasm_bridge::{dispatch, PlannerState, PlannerToUi, UiToPlanner};

use crate::helpers::HarnessError;
use crate::oracle::{self, OracleVerdict};
use crate::report::LayoutReport;

/// A fluent builder for editing a rig and planning it through the bridge.
pub struct RigBuilder {
    pub state: PlannerState,
    params: ParameterVector,
    options: DisplayOptions,
}

impl Default for RigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RigBuilder {
    /// The editor's default rig and toggles.
    pub fn new() -> Self {
        Self::from_params(ParameterVector::default())
    }

    pub fn from_params(params: ParameterVector) -> Self {
        Self {
            state: PlannerState::new(),
            params,
            options: DisplayOptions::default(),
        }
    }

    pub fn params(&self) -> &ParameterVector {
        &self.params
    }

    // ── Parameters ──────────────────────────────────────────────────────

    pub fn tubes(mut self, n: u32) -> Self {
        self.params.num_tubes = n;
        self
    }

    pub fn holes(mut self, per_tube: u32) -> Self {
        self.params.holes_per_tube = per_tube;
        self
    }

    pub fn width(mut self, cm: f64) -> Self {
        self.params.width = cm;
        self
    }

    pub fn height(mut self, cm: f64) -> Self {
        self.params.height = cm;
        self
    }

    pub fn slope(mut self, percent: f64) -> Self {
        self.params.slope = percent;
        self
    }

    /// Outer tube diameter in centimeters.
    pub fn tube_diameter(mut self, cm: f64) -> Self {
        self.params.tube_radius = cm;
        self
    }

    pub fn hole_size(mut self, cm: f64) -> Self {
        self.params.hole_size = cm;
        self
    }

    // ── Display Toggles ─────────────────────────────────────────────────

    pub fn blueprint(mut self, on: bool) -> Self {
        self.options.blueprint_mode = on;
        self
    }

    pub fn flipped(mut self, on: bool) -> Self {
        self.options.flipped = on;
        self
    }

    pub fn plants(mut self, on: bool) -> Self {
        self.options.show_plants = on;
        self
    }

    pub fn board(mut self, on: bool) -> Self {
        self.options.show_background_board = on;
        self
    }

    pub fn wall_stand(mut self, on: bool) -> Self {
        self.options.show_wall_stand = on;
        self
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    /// Send a `Plan` request with the current parameters and toggles.
    pub fn plan(&mut self) -> Result<Plan, HarnessError> {
        let msg = UiToPlanner::Plan {
            params: self.params,
            options: self.options,
        };
        match dispatch(&mut self.state, msg) {
            PlannerToUi::Planned {
                model,
                warnings,
                scene,
                materials_text,
                measurements,
                cut_list,
                ..
            } => Ok(Plan {
                params: self.params,
                options: self.options,
                model,
                warnings,
                scene,
                materials_text,
                measurements,
                cut_list,
            }),
            PlannerToUi::Error { message, .. } => Err(HarnessError::DispatchError { message }),
            other => Err(HarnessError::UnexpectedResponse {
                expected: "Planned".into(),
                got: response_name(&other).into(),
            }),
        }
    }

    /// Send a `Resolve` request and return the model alone.
    pub fn resolve(&mut self) -> Result<SystemModel, HarnessError> {
        match dispatch(&mut self.state, UiToPlanner::Resolve { params: self.params }) {
            PlannerToUi::Resolved { model, .. } => Ok(model),
            PlannerToUi::Error { message, .. } => Err(HarnessError::DispatchError { message }),
            other => Err(HarnessError::UnexpectedResponse {
                expected: "Resolved".into(),
                got: response_name(&other).into(),
            }),
        }
    }
}

fn response_name(response: &PlannerToUi) -> &'static str {
    match response {
        PlannerToUi::Resolved { .. } => "Resolved",
        PlannerToUi::LayoutBuilt { .. } => "LayoutBuilt",
        PlannerToUi::Planned { .. } => "Planned",
        PlannerToUi::Constraints { .. } => "Constraints",
        PlannerToUi::Error { .. } => "Error",
    }
}

/// Everything one `Plan` request returned.
#[derive(Debug, Clone)]
pub struct Plan {
    pub params: ParameterVector,
    pub options: DisplayOptions,
    pub model: SystemModel,
    pub warnings: Vec<PhysicalWarning>,
    pub scene: SceneGraph,
    pub materials_text: String,
    pub measurements: Measurements,
    pub cut_list: Vec<CutListEntry>,
}

impl Plan {
    pub fn cut_list_text(&self) -> String {
        cut_list_text(&self.cut_list)
    }

    /// The checks that hold for every rig, level or not.
    pub fn verdicts(&self) -> Vec<OracleVerdict> {
        oracle::standard_checks(&self.params, &self.model, &self.scene)
    }

    pub fn report(&self) -> LayoutReport {
        LayoutReport::from_plan(self)
    }
}
