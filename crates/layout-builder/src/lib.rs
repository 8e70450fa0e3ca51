//! Turns a resolved rig into a placed, styled and (in blueprint mode)
//! lettered scene graph.
//!
//! Scene units are meters. The assembly group holds the tubes, the return
//! path and the wall stand and is the only thing mirrored by `flipped`; the
//! measuring board sits outside it.

pub mod blueprint;
pub mod board;
pub mod frame;
mod parts;
pub mod return_path;
pub mod routing;
pub mod scene;
pub mod style;
pub mod tubes;
mod wall_stand;

use dimension_resolver::SystemModel;
use hydro_geometry::{Point3d, Vec3};
use hydro_types::{DisplayOptions, ParameterVector};
use tracing::{info, instrument};

pub use blueprint::{annotate, annotate_with, letter_for};
pub use frame::LayoutFrame;
pub use routing::{route_table, tube_route, return_route, JumperKind, ReturnRoute, TubeRoute, UpperFitting};
pub use scene::{CutListEntry, PartInstance, SceneGraph, SceneGroup, Shape, WorldPart};
pub use style::{LayoutConfig, Style, StylePalette, Tessellation};

use parts::PartFactory;

/// Build the scene with the default style and facet counts.
pub fn build_layout(params: &ParameterVector, model: &SystemModel, options: &DisplayOptions) -> SceneGraph {
    build_layout_with(params, model, options, &LayoutConfig::default())
}

#[instrument(skip(params, model, config), fields(num_tubes = model.num_tubes()))]
pub fn build_layout_with(
    params: &ParameterVector,
    model: &SystemModel,
    options: &DisplayOptions,
    config: &LayoutConfig,
) -> SceneGraph {
    let f = LayoutFrame::new(params, model);
    let parts = PartFactory::new(config, options.display_mode());

    let mirror = if options.flipped { -1.0 } else { 1.0 };
    let mut assembly = SceneGroup::new("assembly").at(Point3d::new(
        mirror * f.r / 2.0,
        f.height / 10.0,
        0.0,
    ));
    assembly.scale = Vec3::new(mirror, 1.0, 1.0);

    let tube_opts = tubes::TubeOptions {
        wall_stand: options.show_wall_stand,
        plants: options.show_plants,
    };
    assembly.groups.extend(tubes::build_tubes(&f, &parts, &tube_opts));
    assembly.groups.push(return_path::build_return_path(&f, &parts));
    if options.show_wall_stand && !parts.blueprint() {
        assembly.parts.extend(wall_stand::build_planks(&f, &parts));
    }

    let background = options
        .board_visible()
        .then(|| board::build_board(&f, &parts));

    let mut scene = SceneGraph {
        assembly,
        background,
    };
    if parts.blueprint() {
        annotate_with(&mut scene, model, &config.palette);
    }

    info!(
        mode = ?parts.mode,
        flipped = options.flipped,
        groups = scene.assembly.groups.len(),
        "built layout"
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_resolver::resolve;
    use hydro_types::{PartType, SegmentRole};

    fn default_scene(options: DisplayOptions) -> SceneGraph {
        let params = ParameterVector::default();
        build_layout(&params, &resolve(&params), &options)
    }

    #[test]
    fn test_default_counts() {
        let scene = default_scene(DisplayOptions::default());
        assert_eq!(scene.count(PartType::MainTube), 4);
        assert_eq!(scene.parts_with_role(SegmentRole::MainElbow).len(), 7);
        assert_eq!(scene.parts_with_role(SegmentRole::ReturnElbow).len(), 2);
        assert_eq!(scene.parts_with_role(SegmentRole::Jog).len(), 4);
        assert_eq!(scene.parts_with_role(SegmentRole::EndCap).len(), 1);
        assert_eq!(scene.count(PartType::PlantHole), 16);
        assert_eq!(scene.count(PartType::PlantModel), 16);
        assert_eq!(scene.count(PartType::TubeStrap), 8);
        assert_eq!(scene.count(PartType::WallPlank), 2);
        assert_eq!(scene.count(PartType::Reservoir), 1);
        assert!(scene.background.is_some());
    }

    #[test]
    fn test_blueprint_suppresses_decor() {
        let scene = default_scene(DisplayOptions::blueprint());
        assert_eq!(scene.count(PartType::PlantModel), 0);
        assert_eq!(scene.count(PartType::Reservoir), 0);
        assert_eq!(scene.count(PartType::WallPlank), 0);
        assert_eq!(scene.count(PartType::TubeStrap), 0);
        assert!(scene.background.is_some());
        assert_eq!(scene.parts_with_role(SegmentRole::Tag).len(), 4 + 4 + 1 + 1 + 1 + 7 + 2);
    }

    #[test]
    fn test_realistic_has_no_tags() {
        let scene = default_scene(DisplayOptions::default());
        assert!(scene.parts_with_role(SegmentRole::Tag).is_empty());
    }

    #[test]
    fn test_board_hidden() {
        let scene = default_scene(DisplayOptions {
            show_background_board: false,
            ..DisplayOptions::default()
        });
        assert!(scene.background.is_none());
    }

    #[test]
    fn test_flip_root() {
        let plain = default_scene(DisplayOptions::default());
        let flipped = default_scene(DisplayOptions {
            flipped: true,
            ..DisplayOptions::default()
        });
        assert_eq!(flipped.assembly.position.x, -plain.assembly.position.x);
        assert_eq!(flipped.assembly.scale.x, -1.0);
        assert_eq!(flipped.assembly.groups, plain.assembly.groups);
    }
}
