//! Constructors that attach mode, style and facet counts to raw geometry.

use std::f64::consts::FRAC_PI_2;

use hydro_geometry::{Euler, Point3d};
use hydro_types::{DisplayMode, PartType, SegmentRole};

use crate::scene::{PartInstance, Shape};
use crate::style::{LayoutConfig, Tessellation};

pub(crate) struct PartFactory<'a> {
    config: &'a LayoutConfig,
    pub mode: DisplayMode,
    tess: Tessellation,
}

impl<'a> PartFactory<'a> {
    pub fn new(config: &'a LayoutConfig, mode: DisplayMode) -> Self {
        Self {
            config,
            mode,
            tess: config.tessellation(mode),
        }
    }

    pub fn blueprint(&self) -> bool {
        self.mode == DisplayMode::Blueprint
    }

    /// Spin that turns a two-faced cylinder toward the viewer in blueprint mode.
    pub fn face_on(&self) -> f64 {
        if self.blueprint() {
            FRAC_PI_2
        } else {
            0.0
        }
    }

    pub fn part(
        &self,
        part_type: PartType,
        role: SegmentRole,
        dimensions: Shape,
        position: Point3d,
        rotation: Euler,
    ) -> PartInstance {
        PartInstance {
            part_type,
            role,
            position,
            rotation,
            dimensions,
            display_mode: self.mode,
            label_text: None,
            style: self.config.palette.style_for(part_type, self.mode),
            children: Vec::new(),
        }
    }

    pub fn cylinder(
        &self,
        part_type: PartType,
        role: SegmentRole,
        radius: f64,
        length: f64,
        position: Point3d,
        rotation: Euler,
    ) -> PartInstance {
        let shape = Shape::Cylinder {
            radius,
            length,
            radial_segments: self.tess.cylinder_segments,
        };
        self.part(part_type, role, shape, position, rotation)
    }

    /// A quarter elbow for a pipe of radius `pipe_radius`, bending at one diameter.
    pub fn elbow(
        &self,
        role: SegmentRole,
        pipe_radius: f64,
        position: Point3d,
        rotation: Euler,
    ) -> PartInstance {
        let shape = Shape::Torus {
            bend_radius: 2.0 * pipe_radius,
            tube_radius: 1.1 * pipe_radius,
            arc: FRAC_PI_2,
            radial_segments: self.tess.torus_radial_segments,
            tubular_segments: self.tess.torus_tubular_segments,
        };
        self.part(PartType::Elbow, role, shape, position, rotation)
    }

    pub fn disc(
        &self,
        part_type: PartType,
        role: SegmentRole,
        radius: f64,
        position: Point3d,
        rotation: Euler,
    ) -> PartInstance {
        let shape = Shape::Disc {
            radius,
            segments: self.tess.disc_segments,
        };
        self.part(part_type, role, shape, position, rotation)
    }

    /// A text tag at `position`.
    pub fn label(&self, role: SegmentRole, text: String, size: f64, position: Point3d) -> PartInstance {
        let mut tag = self.part(
            PartType::Label,
            role,
            Shape::Text { size },
            position,
            Euler::IDENTITY,
        );
        tag.label_text = Some(text);
        tag
    }
}
