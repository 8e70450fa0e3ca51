//! The scene graph handed to a renderer, plus read-only queries over it.

use std::collections::BTreeMap;

use hydro_geometry::{BoundingBox, Euler, Point3d, Transform, Vec3};
use hydro_types::{DisplayMode, PartType, PlantVariant, SegmentRole};
use serde::{Deserialize, Serialize};

use crate::blueprint::letter_for;
use crate::style::Style;

/// Geometry of a part in its local frame. Lengths are scene meters.
///
/// Cylinders run along local Y. Tori lie in the local XY plane with the arc
/// starting on +X and sweeping counterclockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Shape {
    Cylinder {
        radius: f64,
        length: f64,
        radial_segments: u32,
    },
    Torus {
        bend_radius: f64,
        tube_radius: f64,
        arc: f64,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Box {
        size: [f64; 3],
    },
    /// A flat disc in the local XY plane.
    Disc { radius: f64, segments: u32 },
    /// A square-celled line grid in the local XY plane.
    Grid { width: f64, height: f64, cell: f64 },
    /// An externally modelled asset placed at uniform scale.
    Model { variant: PlantVariant, scale: f64 },
    Text { size: f64 },
}

impl Shape {
    /// Nominal pipe diameter for plumbing shapes, in scene meters.
    ///
    /// Elbows bend at one pipe diameter, so for a torus this is the bend radius.
    pub fn nominal_diameter(&self) -> Option<f64> {
        match self {
            Shape::Cylinder { radius, .. } => Some(2.0 * radius),
            Shape::Torus { bend_radius, .. } => Some(*bend_radius),
            _ => None,
        }
    }

    pub fn length(&self) -> Option<f64> {
        match self {
            Shape::Cylinder { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// Open ends where another piece of pipe joins, in the local frame.
    pub fn ports(&self) -> Vec<Point3d> {
        match self {
            Shape::Cylinder { length, .. } => vec![
                Point3d::new(0.0, length / 2.0, 0.0),
                Point3d::new(0.0, -length / 2.0, 0.0),
            ],
            Shape::Torus {
                bend_radius, arc, ..
            } => vec![
                Point3d::new(*bend_radius, 0.0, 0.0),
                Point3d::new(bend_radius * arc.cos(), bend_radius * arc.sin(), 0.0),
            ],
            _ => Vec::new(),
        }
    }

    /// Local axis-aligned extent.
    pub fn local_bounds(&self) -> BoundingBox {
        let (min, max) = match self {
            Shape::Cylinder { radius, length, .. } => (
                Point3d::new(-radius, -length / 2.0, -radius),
                Point3d::new(*radius, length / 2.0, *radius),
            ),
            Shape::Torus {
                bend_radius,
                tube_radius,
                ..
            } => {
                let outer = bend_radius + tube_radius;
                (
                    Point3d::new(-tube_radius, -tube_radius, -tube_radius),
                    Point3d::new(outer, outer, *tube_radius),
                )
            }
            Shape::Box { size } => (
                Point3d::new(-size[0] / 2.0, -size[1] / 2.0, -size[2] / 2.0),
                Point3d::new(size[0] / 2.0, size[1] / 2.0, size[2] / 2.0),
            ),
            Shape::Disc { radius, .. } => (
                Point3d::new(-radius, -radius, 0.0),
                Point3d::new(*radius, *radius, 0.0),
            ),
            Shape::Grid { width, height, .. } => (
                Point3d::new(-width / 2.0, -height / 2.0, 0.0),
                Point3d::new(width / 2.0, height / 2.0, 0.0),
            ),
            Shape::Model { .. } | Shape::Text { .. } => (Point3d::ORIGIN, Point3d::ORIGIN),
        };
        BoundingBox { min, max }
    }
}

/// One placed part. Positions and rotations are relative to the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartInstance {
    pub part_type: PartType,
    pub role: SegmentRole,
    pub position: Point3d,
    pub rotation: Euler,
    pub dimensions: Shape,
    pub display_mode: DisplayMode,
    pub label_text: Option<String>,
    pub style: Style,
    pub children: Vec<PartInstance>,
}

impl PartInstance {
    pub fn local_transform(&self) -> Transform {
        Transform::trs(self.position, self.rotation, Vec3::ONE)
    }
}

/// A transform node holding parts and nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneGroup {
    pub name: String,
    pub position: Point3d,
    pub rotation: Euler,
    pub scale: Vec3,
    pub parts: Vec<PartInstance>,
    pub groups: Vec<SceneGroup>,
}

impl SceneGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Point3d::ORIGIN,
            rotation: Euler::IDENTITY,
            scale: Vec3::ONE,
            parts: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn at(mut self, position: Point3d) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Euler) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn local_transform(&self) -> Transform {
        Transform::trs(self.position, self.rotation, self.scale)
    }

    /// Look up a direct child group by name.
    pub fn group(&self, name: &str) -> Option<&SceneGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn collect_world(&self, parent: &Transform, out: &mut Vec<WorldPart>) {
        let frame = parent.then(&self.local_transform());
        for part in &self.parts {
            collect_part(part, &frame, out);
        }
        for group in &self.groups {
            group.collect_world(&frame, out);
        }
    }
}

fn collect_part(part: &PartInstance, parent: &Transform, out: &mut Vec<WorldPart>) {
    let transform = parent.then(&part.local_transform());
    out.push(WorldPart {
        part_type: part.part_type,
        role: part.role,
        position: transform.transform_point(&Point3d::ORIGIN),
        transform,
        dimensions: part.dimensions.clone(),
        label_text: part.label_text.clone(),
    });
    for child in &part.children {
        collect_part(child, &transform, out);
    }
}

/// A part with its full parent chain applied.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldPart {
    pub part_type: PartType,
    pub role: SegmentRole,
    pub position: Point3d,
    pub transform: Transform,
    pub dimensions: Shape,
    pub label_text: Option<String>,
}

impl WorldPart {
    pub fn ports(&self) -> Vec<Point3d> {
        self.dimensions
            .ports()
            .iter()
            .map(|p| self.transform.transform_point(p))
            .collect()
    }

    pub fn bounds(&self) -> BoundingBox {
        let corners = self.dimensions.local_bounds().corners();
        let world: Vec<Point3d> = corners
            .iter()
            .map(|p| self.transform.transform_point(p))
            .collect();
        BoundingBox::from_points(world.iter())
    }
}

/// One line of a blueprint cut list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutListEntry {
    pub letter: char,
    pub role: SegmentRole,
    pub part_type: PartType,
    /// Centimeters; `None` for fittings.
    pub length_cm: Option<f64>,
    pub diameter_cm: f64,
    pub quantity: u32,
}

/// The complete layout: the (possibly mirrored) assembly and the measuring board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub assembly: SceneGroup,
    pub background: Option<SceneGroup>,
}

impl SceneGraph {
    /// Every part in world space, assembly first.
    pub fn world_parts(&self) -> Vec<WorldPart> {
        let mut out = Vec::new();
        let root = Transform::identity();
        self.assembly.collect_world(&root, &mut out);
        if let Some(board) = &self.background {
            board.collect_world(&root, &mut out);
        }
        out
    }

    pub fn count(&self, part_type: PartType) -> usize {
        self.world_parts()
            .iter()
            .filter(|p| p.part_type == part_type)
            .count()
    }

    pub fn parts_with_role(&self, role: SegmentRole) -> Vec<WorldPart> {
        self.world_parts()
            .into_iter()
            .filter(|p| p.role == role)
            .collect()
    }

    /// Lettered plumbing grouped by role, in letter order.
    pub fn cut_list(&self) -> Vec<CutListEntry> {
        let mut entries: BTreeMap<char, CutListEntry> = BTreeMap::new();
        for part in self.world_parts() {
            let Some(letter) = letter_for(part.part_type, part.role) else {
                continue;
            };
            let entry = entries.entry(letter).or_insert_with(|| CutListEntry {
                letter,
                role: part.role,
                part_type: part.part_type,
                length_cm: part.dimensions.length().map(to_cm),
                diameter_cm: part.dimensions.nominal_diameter().map(to_cm).unwrap_or(0.0),
                quantity: 0,
            });
            entry.quantity += 1;
        }
        entries.into_values().collect()
    }

    /// World bounds of the physical assembly (labels and the board excluded).
    pub fn bounds(&self) -> BoundingBox {
        let mut out = Vec::new();
        self.assembly.collect_world(&Transform::identity(), &mut out);
        out.iter()
            .filter(|p| p.part_type != PartType::Label)
            .fold(BoundingBox::empty(), |acc, p| acc.union(&p.bounds()))
    }
}

fn to_cm(meters: f64) -> f64 {
    meters / hydro_geometry::units::CM_TO_SCENE
}
