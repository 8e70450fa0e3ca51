use serde::{Deserialize, Serialize};

/// Fully dimensioned description of a rig. Lengths are centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemModel {
    pub dimensions: Dimensions,
    pub tubes: Tubes,
    pub elbows: Elbows,
    pub end_caps: Fitting,
    pub net_pots: Fitting,
    pub reservoir: Reservoir,
    pub wall_stand: WallStand,
    pub misc: Misc,
}

/// Overall footprint of the assembled rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A batch of identical straight pipe pieces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeCut {
    pub quantity: u32,
    pub length: f64,
    pub diameter: f64,
}

/// A batch of identical fittings sized only by diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fitting {
    pub quantity: u32,
    pub diameter: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tubes {
    pub main_tubes: PipeCut,
    pub vertical_connectors: VerticalConnectors,
    pub pump_tube: PipeCut,
    pub horizontal_connector: PipeCut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalConnectors {
    /// Full-diameter jogs between stacked tubes.
    pub big: PipeCut,
    /// Half-diameter drop from the return jumper into the top tube.
    pub small: PipeCut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elbows {
    pub big: Fitting,
    pub small: Fitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reservoir {
    /// Liters.
    pub capacity: f64,
    /// Centimeters; numerically equal to the capacity.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallStand {
    pub planks: Planks,
    pub tube_straps: Fitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planks {
    pub quantity: u32,
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misc {
    pub number_of_plants: u32,
    pub hole_spacing: f64,
    pub tube_spacing: f64,
    pub slope_angle_deg: f64,
}

/// Something in a resolved model that cannot be built as described.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PhysicalWarning {
    /// The rig is too narrow for the elbows at both ends of a tube.
    NonPositiveTubeLength { length: f64 },
    /// Tubes are stacked closer than two elbows can span.
    NonPositiveConnectorLength { length: f64 },
    /// No tubes at all.
    NoTubes,
}

impl std::fmt::Display for PhysicalWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicalWarning::NonPositiveTubeLength { length } => {
                write!(f, "main tube length {length:.2} cm is not positive")
            }
            PhysicalWarning::NonPositiveConnectorLength { length } => {
                write!(f, "vertical connector length {length:.2} cm is not positive")
            }
            PhysicalWarning::NoTubes => f.write_str("rig has no tubes"),
        }
    }
}

impl SystemModel {
    /// Main tube radius in centimeters.
    pub fn radius(&self) -> f64 {
        self.tubes.main_tubes.diameter / 2.0
    }

    /// Number of horizontal growing tubes.
    pub fn num_tubes(&self) -> u32 {
        self.tubes.main_tubes.quantity
    }

    /// Cut length of one main tube in centimeters.
    pub fn tube_length(&self) -> f64 {
        self.tubes.main_tubes.length
    }

    /// Vertical center-to-center distance between tubes in centimeters.
    pub fn tube_spacing(&self) -> f64 {
        self.misc.tube_spacing
    }

    /// Degenerate outputs, reported without altering the model.
    pub fn physical_warnings(&self) -> Vec<PhysicalWarning> {
        let mut out = Vec::new();
        if self.num_tubes() == 0 {
            out.push(PhysicalWarning::NoTubes);
        }
        let length = self.tube_length();
        if length <= 0.0 {
            out.push(PhysicalWarning::NonPositiveTubeLength { length });
        }
        let length = self.tubes.vertical_connectors.big.length;
        if length <= 0.0 {
            out.push(PhysicalWarning::NonPositiveConnectorLength { length });
        }
        out
    }
}
