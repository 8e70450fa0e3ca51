//! Pump riser, jumper and drop back into the top tube, plus the reservoir.

use std::f64::consts::FRAC_PI_2;

use hydro_geometry::{Euler, Point3d};
use hydro_types::{PartType, SegmentRole};
use tracing::debug;

use crate::frame::LayoutFrame;
use crate::parts::PartFactory;
use crate::routing::return_route;
use crate::scene::SceneGroup;

pub(crate) fn build_return_path(f: &LayoutFrame, parts: &PartFactory) -> SceneGroup {
    let route = return_route(f.num_tubes);
    let small = f.r / 2.0;
    let jumper_y = f.jumper_y();
    let pump_x = f.pump_x();
    let drop_x = f.drop_x(route.drop_side);
    let elbow_y = jumper_y - f.r;
    debug!(jumper = ?route.jumper, drop_side = ?route.drop_side, drop_x, "placing return path");

    let mut group = SceneGroup::new("return-path");

    group.parts.push(parts.cylinder(
        PartType::PumpTube,
        SegmentRole::PumpRiser,
        small,
        f.pump_length,
        Point3d::new(pump_x, elbow_y - f.pump_length / 2.0, 0.0),
        Euler::new(0.0, parts.face_on(), 0.0),
    ));

    // Riser top turning toward the stack.
    group.parts.push(parts.elbow(
        SegmentRole::ReturnElbow,
        small,
        Point3d::new(pump_x + f.r, elbow_y, 0.0),
        Euler::about_z(FRAC_PI_2),
    ));

    // Anchored at the drop elbow; any shortfall of the jumper shows at the riser end.
    let jumper_end = drop_x - f.r;
    group.parts.push(parts.cylinder(
        PartType::HorizontalConnector,
        SegmentRole::Jumper,
        small,
        f.jumper_length,
        Point3d::new(jumper_end - f.jumper_length / 2.0, jumper_y, 0.0),
        Euler::new(parts.face_on(), 0.0, FRAC_PI_2),
    ));

    group.parts.push(parts.elbow(
        SegmentRole::ReturnElbow,
        small,
        Point3d::new(drop_x - f.r, elbow_y, 0.0),
        Euler::IDENTITY,
    ));

    group.parts.push(parts.cylinder(
        PartType::VerticalConnector,
        SegmentRole::DropTail,
        small,
        f.drop_length,
        Point3d::new(drop_x, elbow_y - f.drop_length / 2.0, 0.0),
        Euler::new(0.0, parts.face_on(), 0.0),
    ));

    if !parts.blueprint() {
        group.parts.push(reservoir(f, parts));
    }
    group
}

/// Open tank beside the stack, floor level with the bottom of the riser.
fn reservoir(f: &LayoutFrame, parts: &PartFactory) -> crate::scene::PartInstance {
    let radius = 3.0 * f.r;
    let h = f.reservoir_height;
    let mut tank = parts.cylinder(
        PartType::Reservoir,
        SegmentRole::Reservoir,
        radius,
        h,
        Point3d::new(-f.half_length() - radius, f.riser_bottom() + h / 2.0, 1.5 * f.r),
        Euler::IDENTITY,
    );
    let lid_radius = 1.1 * radius;
    tank.children.push(parts.cylinder(
        PartType::TubeCap,
        SegmentRole::Reservoir,
        lid_radius,
        0.2 * lid_radius,
        Point3d::new(0.0, h / 2.0, 0.0),
        Euler::IDENTITY,
    ));
    tank
}
