//! Colors, materials and facet counts for generated parts.

use hydro_types::{DisplayMode, PartType};
use serde::{Deserialize, Serialize};

/// Resolved material of a single part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: String,
    pub wireframe: bool,
    pub opacity: f64,
}

impl Style {
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            wireframe: false,
            opacity: 1.0,
        }
    }
}

/// Per part type colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePalette {
    pub tube: String,
    pub cap: String,
    pub elbow: String,
    pub connector: String,
    pub reservoir: String,
    pub reservoir_opacity: f64,
    pub plank: String,
    pub hole: String,
    pub plant: String,
    pub grid: String,
    pub label: String,
    /// Line color of wireframe plumbing in blueprint mode.
    pub blueprint_line: String,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            tube: "#ffffff".into(),
            cap: "#cccccc".into(),
            elbow: "#dddddd".into(),
            connector: "#bbbbbb".into(),
            reservoir: "#0000ff".into(),
            reservoir_opacity: 0.5,
            plank: "#000000".into(),
            hole: "#000000".into(),
            plant: "#2e8b57".into(),
            grid: "#cccccc".into(),
            label: "black".into(),
            blueprint_line: "black".into(),
        }
    }
}

impl StylePalette {
    /// Material for a part type in the given display mode.
    pub fn style_for(&self, part_type: PartType, mode: DisplayMode) -> Style {
        if mode == DisplayMode::Blueprint && is_plumbing(part_type) {
            return Style {
                color: self.blueprint_line.clone(),
                wireframe: true,
                opacity: 1.0,
            };
        }
        match part_type {
            PartType::MainTube => Style::solid(&self.tube),
            PartType::TubeCap => Style::solid(&self.cap),
            PartType::Elbow => Style::solid(&self.elbow),
            PartType::VerticalConnector
            | PartType::PumpTube
            | PartType::HorizontalConnector
            | PartType::TubeStrap => Style::solid(&self.connector),
            PartType::Reservoir => Style {
                color: self.reservoir.clone(),
                wireframe: false,
                opacity: self.reservoir_opacity,
            },
            PartType::WallPlank => Style::solid(&self.plank),
            PartType::PlantHole => Style::solid(&self.hole),
            PartType::PlantModel => Style::solid(&self.plant),
            PartType::BackgroundBoardGrid => Style::solid(&self.grid),
            PartType::Label => Style::solid(&self.label),
        }
    }
}

fn is_plumbing(part_type: PartType) -> bool {
    matches!(
        part_type,
        PartType::MainTube
            | PartType::VerticalConnector
            | PartType::PumpTube
            | PartType::HorizontalConnector
            | PartType::Elbow
            | PartType::TubeCap
    )
}

/// Facet counts handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tessellation {
    pub cylinder_segments: u32,
    pub torus_radial_segments: u32,
    pub torus_tubular_segments: u32,
    pub disc_segments: u32,
}

impl Tessellation {
    pub fn realistic() -> Self {
        Self {
            cylinder_segments: 32,
            torus_radial_segments: 16,
            torus_tubular_segments: 16,
            disc_segments: 32,
        }
    }

    /// Two-sided cylinders read as flat outlines in an orthographic view.
    pub fn blueprint() -> Self {
        Self {
            cylinder_segments: 2,
            torus_radial_segments: 2,
            torus_tubular_segments: 4,
            disc_segments: 32,
        }
    }
}

/// Everything the layout builder needs besides the rig itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub palette: StylePalette,
    pub realistic: Tessellation,
    pub blueprint: Tessellation,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            palette: StylePalette::default(),
            realistic: Tessellation::realistic(),
            blueprint: Tessellation::blueprint(),
        }
    }
}

impl LayoutConfig {
    /// Low facet counts in both modes, for previews and tests.
    pub fn draft() -> Self {
        Self {
            realistic: Tessellation {
                cylinder_segments: 8,
                torus_radial_segments: 6,
                torus_tubular_segments: 6,
                disc_segments: 12,
            },
            ..Self::default()
        }
    }

    pub fn tessellation(&self, mode: DisplayMode) -> Tessellation {
        match mode {
            DisplayMode::Realistic => self.realistic,
            DisplayMode::Blueprint => self.blueprint,
        }
    }
}
