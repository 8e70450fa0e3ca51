use serde::{Deserialize, Serialize};

/// Presentation toggles passed to the layout builder alongside the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    /// Mirror the whole assembly across the vertical axis.
    pub flipped: bool,
    /// Show the measuring grid behind the rig (always shown in blueprint mode).
    pub show_background_board: bool,
    /// Show wall planks and pipe straps.
    pub show_wall_stand: bool,
    /// Orthographic, labeled cut-list view instead of the realistic model.
    pub blueprint_mode: bool,
    /// Show plant models in the planting holes.
    pub show_plants: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            flipped: false,
            show_background_board: true,
            show_wall_stand: true,
            blueprint_mode: false,
            show_plants: true,
        }
    }
}

impl DisplayOptions {
    /// Default toggles with blueprint mode switched on.
    pub fn blueprint() -> Self {
        Self {
            blueprint_mode: true,
            ..Self::default()
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.blueprint_mode {
            DisplayMode::Blueprint
        } else {
            DisplayMode::Realistic
        }
    }

    /// Whether the background grid board is part of the scene.
    pub fn board_visible(&self) -> bool {
        self.blueprint_mode || self.show_background_board
    }
}

/// How parts are meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Full-resolution, tinted geometry.
    #[default]
    Realistic,
    /// Low-facet wireframe flattened against the view plane.
    Blueprint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor() {
        let opts = DisplayOptions::default();
        assert!(!opts.flipped);
        assert!(opts.show_background_board);
        assert!(opts.show_wall_stand);
        assert!(!opts.blueprint_mode);
        assert!(opts.show_plants);
        assert_eq!(opts.display_mode(), DisplayMode::Realistic);
    }

    #[test]
    fn test_board_forced_in_blueprint() {
        let opts = DisplayOptions {
            show_background_board: false,
            ..DisplayOptions::blueprint()
        };
        assert!(opts.board_visible());
        assert_eq!(opts.display_mode(), DisplayMode::Blueprint);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let opts: DisplayOptions = serde_json::from_str(r#"{"blueprintMode":true}"#).unwrap();
        assert!(opts.blueprint_mode);
        assert!(opts.show_plants);
    }
}
