//! Resolved measurements converted to scene meters.

use dimension_resolver::SystemModel;
use hydro_geometry::units::{cm_to_scene, deg_to_rad};
use hydro_types::{ParameterVector, Side};

/// Everything the placement rules need, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutFrame {
    /// Main tube radius.
    pub r: f64,
    pub width: f64,
    pub height: f64,
    /// Overall size in centimeters, for grid line counts.
    pub width_cm: f64,
    pub height_cm: f64,
    pub tube_length: f64,
    pub spacing: f64,
    /// Tube tilt in radians.
    pub theta: f64,
    pub num_tubes: u32,
    pub holes_per_tube: u32,
    pub hole_spacing: f64,
    pub hole_diameter: f64,
    /// Hole diameter in centimeters; plant models are scaled from it.
    pub hole_size_cm: f64,
    pub jog_length: f64,
    pub drop_length: f64,
    pub pump_length: f64,
    pub jumper_length: f64,
    pub reservoir_height: f64,
}

impl LayoutFrame {
    pub fn new(params: &ParameterVector, model: &SystemModel) -> Self {
        let tubes = &model.tubes;
        Self {
            r: cm_to_scene(model.radius()),
            width: cm_to_scene(model.dimensions.width),
            height: cm_to_scene(model.dimensions.height),
            width_cm: model.dimensions.width,
            height_cm: model.dimensions.height,
            tube_length: cm_to_scene(model.tube_length()),
            spacing: cm_to_scene(model.tube_spacing()),
            theta: deg_to_rad(model.misc.slope_angle_deg),
            num_tubes: model.num_tubes(),
            holes_per_tube: params.holes_per_tube,
            hole_spacing: cm_to_scene(model.misc.hole_spacing),
            hole_diameter: cm_to_scene(model.net_pots.diameter),
            hole_size_cm: model.net_pots.diameter,
            jog_length: cm_to_scene(tubes.vertical_connectors.big.length),
            drop_length: cm_to_scene(tubes.vertical_connectors.small.length),
            pump_length: cm_to_scene(tubes.pump_tube.length),
            jumper_length: cm_to_scene(tubes.horizontal_connector.length),
            reservoir_height: cm_to_scene(model.reservoir.height),
        }
    }

    /// Center height of tube `i`, counted from the bottom.
    pub fn tube_y(&self, i: u32) -> f64 {
        (i as f64 + 1.0) * self.spacing - self.height / 2.0
    }

    /// Center height of the top tube.
    pub fn top_y(&self) -> f64 {
        self.height / 2.0 - self.spacing
    }

    pub fn half_length(&self) -> f64 {
        self.tube_length / 2.0
    }

    /// Height of a tilted tube's end above its center.
    pub fn end_rise(&self, side: Side, tilt: f64) -> f64 {
        side.sign() * self.half_length() * tilt.sin()
    }

    /// Centerline height of the return jumper.
    pub fn jumper_y(&self) -> f64 {
        self.top_y() + 3.25 * self.r
    }

    /// X of the pump riser, outside the left jogs.
    pub fn pump_x(&self) -> f64 {
        -self.half_length() - 5.5 * self.r
    }

    /// X of the drop tail: just inside the capped end of the top tube.
    pub fn drop_x(&self, side: Side) -> f64 {
        side.sign() * (self.half_length() - self.r / 2.0)
    }

    /// Lower end of the pump riser, where the reservoir floor sits.
    pub fn riser_bottom(&self) -> f64 {
        self.jumper_y() - self.r - self.pump_length
    }
}
