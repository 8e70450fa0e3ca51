//! Command-line arguments and how they fold into a parameter vector.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hydro_types::{DisplayOptions, ParameterVector};

/// Plan a vertical hydroponic rig: measurements, materials and cut list.
#[derive(Debug, Parser)]
#[command(name = "hydro-plan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Vertical hydroponic rig planner", long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// JSON parameter file; individual flags override its fields
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Overall width in cm
    #[arg(long)]
    pub width: Option<f64>,

    /// Overall height in cm
    #[arg(long)]
    pub height: Option<f64>,

    /// Number of horizontal tubes
    #[arg(long)]
    pub tubes: Option<u32>,

    /// Planting holes per tube
    #[arg(long)]
    pub holes: Option<u32>,

    /// Planting hole diameter in cm
    #[arg(long)]
    pub hole_size: Option<f64>,

    /// Outer tube diameter in cm
    #[arg(long)]
    pub tube_diameter: Option<f64>,

    /// Drainage slope in percent
    #[arg(long)]
    pub slope: Option<f64>,

    /// Mirror the rig left to right
    #[arg(long)]
    pub flipped: bool,

    /// Lay out the labeled blueprint view
    #[arg(long)]
    pub blueprint: bool,

    #[arg(long)]
    pub no_board: bool,

    #[arg(long)]
    pub no_wall_stand: bool,

    #[arg(long)]
    pub no_plants: bool,

    /// Print the full plan response as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Defaults, then the parameter file, then individual flags.
    pub fn parameters(&self) -> Result<ParameterVector> {
        let mut params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => ParameterVector::default(),
        };
        if let Some(v) = self.width {
            params.width = v;
        }
        if let Some(v) = self.height {
            params.height = v;
        }
        if let Some(v) = self.tubes {
            params.num_tubes = v;
        }
        if let Some(v) = self.holes {
            params.holes_per_tube = v;
        }
        if let Some(v) = self.hole_size {
            params.hole_size = v;
        }
        if let Some(v) = self.tube_diameter {
            params.tube_radius = v;
        }
        if let Some(v) = self.slope {
            params.slope = v;
        }
        Ok(params)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            flipped: self.flipped,
            show_background_board: !self.no_board,
            show_wall_stand: !self.no_wall_stand,
            blueprint_mode: self.blueprint,
            show_plants: !self.no_plants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["hydro-plan"]);
        assert_eq!(cli.parameters().unwrap(), ParameterVector::default());
        assert_eq!(cli.display_options(), DisplayOptions::default());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_flags_override_fields() {
        let cli = Cli::parse_from([
            "hydro-plan",
            "--tubes",
            "6",
            "--tube-diameter",
            "12.5",
            "--blueprint",
            "--no-plants",
        ]);
        let params = cli.parameters().unwrap();
        assert_eq!(params.num_tubes, 6);
        assert_eq!(params.tube_radius, 12.5);
        assert_eq!(params.width, 120.0);

        let opts = cli.display_options();
        assert!(opts.blueprint_mode);
        assert!(!opts.show_plants);
        assert!(opts.show_wall_stand);
    }

    #[test]
    fn test_parameter_file_then_flags() {
        let path = std::env::temp_dir().join(format!("hydro-plan-{}.json", std::process::id()));
        let json = serde_json::to_string(&ParameterVector {
            width: 300.0,
            ..ParameterVector::default()
        })
        .unwrap();
        fs::write(&path, json).unwrap();

        let file = path.display().to_string();
        let cli = Cli::parse_from(["hydro-plan", "--params", file.as_str(), "--slope", "0"]);
        let params = cli.parameters().unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(params.width, 300.0);
        assert_eq!(params.slope, 0.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = Cli::parse_from(["hydro-plan", "--params", "/nonexistent/rig.json"]);
        let err = cli.parameters().unwrap_err();
        assert!(err.to_string().contains("reading /nonexistent/rig.json"));
    }
}
