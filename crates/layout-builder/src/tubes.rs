//! The serpentine: tubes, their elbows and jogs, the end cap, holes and plants.

use std::f64::consts::{FRAC_PI_2, PI};

use hydro_geometry::{Euler, Point3d};
use hydro_types::{PartType, Parity, PlantVariant, SegmentRole, Side};
use tracing::debug;

use crate::frame::LayoutFrame;
use crate::parts::PartFactory;
use crate::routing::{tube_route, TubeRoute, UpperFitting};
use crate::scene::{PartInstance, SceneGroup, Shape};

/// Lean of the planting holes toward the viewer.
const HOLE_LEAN_DEG: f64 = 20.0;
/// Holes follow the tube tilt slightly less than the tube itself.
const HOLE_TILT_DAMPING: f64 = 1.05;
/// Straps are drawn this much wider than the tube, and this long.
const STRAP_CLEARANCE: f64 = 0.02;
const STRAP_WIDTH: f64 = 0.03;

pub(crate) struct TubeOptions {
    pub wall_stand: bool,
    pub plants: bool,
}

/// One group per tube, bottom to top.
pub(crate) fn build_tubes(f: &LayoutFrame, parts: &PartFactory, opts: &TubeOptions) -> Vec<SceneGroup> {
    (0..f.num_tubes)
        .map(|i| build_tube(i, f, parts, opts))
        .collect()
}

fn build_tube(i: u32, f: &LayoutFrame, parts: &PartFactory, opts: &TubeOptions) -> SceneGroup {
    let route = tube_route(i, f.num_tubes);
    let tilt = route.tilt_sign * f.theta;
    debug!(index = i, drain = ?route.drain, upper = ?route.upper, "placing tube");

    let mut row = SceneGroup::new(format!("tube-{i}")).at(Point3d::new(0.0, f.tube_y(i), 0.0));

    let mut tube = parts.cylinder(
        PartType::MainTube,
        SegmentRole::MainRun,
        f.r,
        f.tube_length,
        Point3d::ORIGIN,
        main_tube_rotation(tilt, parts.blueprint()),
    );
    if opts.wall_stand && !parts.blueprint() {
        for sign in [1.0, -1.0] {
            tube.children.push(parts.cylinder(
                PartType::TubeStrap,
                SegmentRole::Strap,
                f.r + STRAP_CLEARANCE,
                STRAP_WIDTH,
                Point3d::new(0.0, sign * (f.half_length() - f.r), 0.0),
                Euler::IDENTITY,
            ));
        }
    }
    row.parts.push(tube);

    row.parts.push(drain_elbow(route, tilt, f, parts));
    row.parts.push(jog(route.drain, f, parts));
    row.parts.push(match route.upper {
        UpperFitting::RiserElbow => riser_elbow(route, tilt, f, parts),
        UpperFitting::EndCap => end_cap(route, tilt, f, parts),
    });

    row.groups.push(holes(i, route, f, parts, opts.plants));
    row
}

/// Cylinders run along Y; a quarter turn about Z lays them along X.
fn main_tube_rotation(tilt: f64, blueprint: bool) -> Euler {
    if blueprint {
        Euler::new(FRAC_PI_2, tilt, FRAC_PI_2)
    } else {
        Euler::about_z(FRAC_PI_2 + tilt)
    }
}

/// Down elbow at the drain end: bend center one diameter below the tube end.
fn drain_elbow(route: TubeRoute, tilt: f64, f: &LayoutFrame, parts: &PartFactory) -> PartInstance {
    let side = route.drain;
    let rotation = match side {
        Side::Right => Euler::IDENTITY,
        Side::Left => Euler::new(0.0, PI, 0.0),
    };
    let position = Point3d::new(
        side.sign() * f.half_length(),
        -2.0 * f.r + f.end_rise(side, tilt),
        0.0,
    );
    parts.elbow(SegmentRole::MainElbow, f.r, position, rotation)
}

/// Up elbow at the higher end: bend center one diameter above the tube end.
fn riser_elbow(route: TubeRoute, tilt: f64, f: &LayoutFrame, parts: &PartFactory) -> PartInstance {
    let side = route.upper_side;
    let rotation = match side {
        Side::Right => Euler::about_z(-FRAC_PI_2),
        Side::Left => Euler::about_z(PI),
    };
    let position = Point3d::new(
        side.sign() * f.half_length(),
        2.0 * f.r + f.end_rise(side, tilt),
        0.0,
    );
    parts.elbow(SegmentRole::MainElbow, f.r, position, rotation)
}

/// Vertical connector hanging from the drain elbow halfway to the tube below.
fn jog(side: Side, f: &LayoutFrame, parts: &PartFactory) -> PartInstance {
    parts.cylinder(
        PartType::VerticalConnector,
        SegmentRole::Jog,
        f.r,
        f.jog_length,
        Point3d::new(side.sign() * (f.half_length() + 2.0 * f.r), -f.spacing / 2.0, 0.0),
        Euler::new(0.0, parts.face_on(), 0.0),
    )
}

fn end_cap(route: TubeRoute, tilt: f64, f: &LayoutFrame, parts: &PartFactory) -> PartInstance {
    let side = route.upper_side;
    let cap_radius = 1.1 * f.r;
    let thickness = 0.2 * cap_radius;
    parts.cylinder(
        PartType::TubeCap,
        SegmentRole::EndCap,
        cap_radius,
        thickness,
        Point3d::new(
            side.sign() * (f.half_length() + thickness / 2.0),
            f.end_rise(side, tilt),
            0.0,
        ),
        Euler::new(parts.face_on(), 0.0, FRAC_PI_2 + tilt),
    )
}

fn holes(i: u32, route: TubeRoute, f: &LayoutFrame, parts: &PartFactory, plants: bool) -> SceneGroup {
    let mut group = SceneGroup::new(format!("holes-{i}")).rotated(Euler::new(
        HOLE_LEAN_DEG.to_radians(),
        0.0,
        route.tilt_sign * f.theta / HOLE_TILT_DAMPING,
    ));
    for j in 0..f.holes_per_tube {
        let x = (j as f64 + 1.0) * f.hole_spacing - f.half_length();
        let mut hole = parts.disc(
            PartType::PlantHole,
            SegmentRole::Hole,
            f.hole_diameter / 2.0,
            Point3d::new(x, f.r, 0.0),
            Euler::new(-FRAC_PI_2, 0.0, 0.0),
        );
        if plants && !parts.blueprint() {
            hole.children.push(parts.part(
                PartType::PlantModel,
                SegmentRole::Plant,
                Shape::Model {
                    variant: plant_variant(i, j),
                    scale: f.hole_size_cm / 5.0,
                },
                Point3d::new(0.0, 0.0, -f.hole_size_cm / 50.0),
                Euler::IDENTITY,
            ));
        }
        group.parts.push(hole);
    }
    group
}

/// Checkerboard of the two plant models across tubes and holes.
pub fn plant_variant(tube: u32, hole: u32) -> PlantVariant {
    if Parity::of(tube) == Parity::of(hole) {
        PlantVariant::Primary
    } else {
        PlantVariant::Alternate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_checkerboard() {
        assert_eq!(plant_variant(0, 0), PlantVariant::Primary);
        assert_eq!(plant_variant(0, 1), PlantVariant::Alternate);
        assert_eq!(plant_variant(1, 0), PlantVariant::Alternate);
        assert_eq!(plant_variant(1, 1), PlantVariant::Primary);
    }

    #[test]
    fn test_blueprint_rotation_keeps_tube_axis() {
        use hydro_geometry::{Transform, Vec3};
        let tilt = 0.03;
        let a = Transform::rotation(main_tube_rotation(tilt, false)).transform_vector(&Vec3::Y);
        let b = Transform::rotation(main_tube_rotation(tilt, true)).transform_vector(&Vec3::Y);
        assert!((a - b).length() < 1e-12);
    }
}
