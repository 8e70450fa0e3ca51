//! Measuring grid drawn behind the rig.

use hydro_geometry::{Euler, Point3d};
use hydro_types::{PartType, SegmentRole};

use crate::frame::LayoutFrame;
use crate::parts::PartFactory;
use crate::scene::{SceneGroup, Shape};

/// Cell size in meters (10 cm).
pub const GRID_CELL: f64 = 0.1;
const CELL_CM: f64 = 10.0;
const TICK_SIZE: f64 = 0.03;
const TICK_MARGIN: f64 = 0.05;
/// Distance behind the rig in blueprint mode.
const BLUEPRINT_DEPTH: f64 = 0.01;

/// Number of grid lines spanning `extent_cm`, both edges included.
pub fn line_count(extent_cm: f64) -> u32 {
    (extent_cm / CELL_CM).ceil() as u32 + 1
}

pub(crate) fn build_board(f: &LayoutFrame, parts: &PartFactory) -> SceneGroup {
    let depth = if parts.blueprint() {
        BLUEPRINT_DEPTH
    } else {
        1.5 * f.r
    };
    let group_pos = Point3d::new(
        -f.r / 2.0,
        -(f.reservoir_height / 1.5 - f.height / 10.0),
        -depth,
    );
    let (w, h) = (f.width, f.height);

    let mut grid = parts.part(
        PartType::BackgroundBoardGrid,
        SegmentRole::Board,
        Shape::Grid {
            width: w,
            height: h,
            cell: GRID_CELL,
        },
        Point3d::ORIGIN,
        Euler::IDENTITY,
    );

    // Every second line is labelled in centimeters on both ends.
    for i in (0..line_count(f.width_cm)).step_by(2) {
        let x = i as f64 * GRID_CELL - w / 2.0;
        let text = (i * 10).to_string();
        for y in [-h / 2.0 - TICK_MARGIN, h / 2.0 + TICK_MARGIN] {
            grid.children
                .push(parts.label(SegmentRole::GridTick, text.clone(), TICK_SIZE, Point3d::new(x, y, 0.0)));
        }
    }
    for i in (0..line_count(f.height_cm)).step_by(2) {
        let y = i as f64 * GRID_CELL - h / 2.0;
        let text = (i * 10).to_string();
        for x in [-w / 2.0 - TICK_MARGIN, w / 2.0 + TICK_MARGIN] {
            grid.children
                .push(parts.label(SegmentRole::GridTick, text.clone(), TICK_SIZE, Point3d::new(x, y, 0.0)));
        }
    }

    let mut group = SceneGroup::new("background-board").at(group_pos);
    group.parts.push(grid);
    group
}
