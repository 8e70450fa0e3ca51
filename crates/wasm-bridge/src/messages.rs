use serde::{Deserialize, Serialize};

use bom_report::{MaterialsList, Measurements};
use dimension_resolver::{PhysicalWarning, SystemModel};
use hydro_types::{DisplayOptions, ParamName, ParameterVector};
use layout_builder::{CutListEntry, SceneGraph};

/// Requests from the UI. Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToPlanner {
    /// Derive the measurements and bill of materials.
    Resolve { params: ParameterVector },
    /// Lay out the renderable scene.
    BuildLayout {
        params: ParameterVector,
        #[serde(default)]
        options: DisplayOptions,
    },
    /// Everything at once: model, scene and the text reports.
    Plan {
        params: ParameterVector,
        #[serde(default)]
        options: DisplayOptions,
    },
    /// Editor bounds and defaults for every parameter.
    Constraints,
}

/// Responses to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum PlannerToUi {
    Resolved {
        model: SystemModel,
        warnings: Vec<PhysicalWarning>,
    },
    LayoutBuilt {
        scene: SceneGraph,
    },
    Planned {
        model: SystemModel,
        warnings: Vec<PhysicalWarning>,
        scene: SceneGraph,
        materials: MaterialsList,
        materials_text: String,
        measurements: Measurements,
        cut_list: Vec<CutListEntry>,
    },
    Constraints {
        constraints: Vec<ConstraintEntry>,
        defaults: ParameterVector,
    },
    Error {
        message: String,
        /// The offending parameter, when the request was rejected by validation.
        field: Option<ParamName>,
    },
}

/// Bounds of one parameter as shown in an editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintEntry {
    pub name: ParamName,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}
