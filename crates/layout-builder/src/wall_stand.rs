use hydro_geometry::{Euler, Point3d};
use hydro_types::{PartType, SegmentRole};

use crate::frame::LayoutFrame;
use crate::parts::PartFactory;
use crate::scene::{PartInstance, Shape};

const PLANK_WIDTH: f64 = 0.05;
const PLANK_DEPTH: f64 = 0.025;
/// Gap between the back of the tubes and the planks.
const PLANK_GAP: f64 = 0.02;

/// Two vertical planks behind the tubes, under the straps.
pub(crate) fn build_planks(f: &LayoutFrame, parts: &PartFactory) -> Vec<PartInstance> {
    let length = f.height - f.spacing;
    [1.0, -1.0]
        .into_iter()
        .map(|sign| {
            parts.part(
                PartType::WallPlank,
                SegmentRole::Plank,
                Shape::Box {
                    size: [PLANK_WIDTH, length, PLANK_DEPTH],
                },
                Point3d::new(sign * (f.half_length() - f.r), 0.0, -f.r - PLANK_GAP),
                Euler::IDENTITY,
            )
        })
        .collect()
}
