//! Structured text reports of a planned rig for agent consumption.
//!
//! Reports are natural language, not JSON, because agents read
//! structured text better than raw scene data.

use std::fmt;

use hydro_types::{DisplayMode, PartType};

use crate::oracle::OracleVerdict;
use crate::workflow::Plan;

/// A complete layout report with all sections.
pub struct LayoutReport {
    pub title: String,
    pub part_counts: Vec<(PartType, usize)>,
    /// World bounds of the assembly in centimeters.
    pub bounds_cm: Option<([f64; 3], [f64; 3])>,
    pub cut_list: String,
    pub warnings: Vec<String>,
    pub oracle_results: Vec<OracleVerdict>,
}

impl LayoutReport {
    pub fn from_plan(plan: &Plan) -> Self {
        let p = &plan.params;
        let mode = match plan.options.display_mode() {
            DisplayMode::Realistic => "realistic",
            DisplayMode::Blueprint => "blueprint",
        };
        let title = format!(
            "{} x {} cm, {} tubes x {} holes, {}% slope ({mode}{})",
            p.width,
            p.height,
            p.num_tubes,
            p.holes_per_tube,
            p.slope,
            if plan.options.flipped { ", flipped" } else { "" },
        );

        let part_counts = PartType::ALL
            .iter()
            .map(|&t| (t, plan.scene.count(t)))
            .filter(|&(_, n)| n > 0)
            .collect();

        let bounds = plan.scene.bounds();
        let bounds_cm = (!bounds.is_empty()).then(|| {
            let cm = |v: f64| v / hydro_geometry::units::CM_TO_SCENE;
            (
                [cm(bounds.min.x), cm(bounds.min.y), cm(bounds.min.z)],
                [cm(bounds.max.x), cm(bounds.max.y), cm(bounds.max.z)],
            )
        });

        Self {
            title,
            part_counts,
            bounds_cm,
            cut_list: plan.cut_list_text(),
            warnings: plan.warnings.iter().map(|w| w.to_string()).collect(),
            oracle_results: plan.verdicts(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Hydroponic Rig Report ===\n");
        out.push_str(&format!("{}\n\n", self.title));

        let total: usize = self.part_counts.iter().map(|(_, n)| n).sum();
        out.push_str(&format!("Parts ({total}):\n"));
        for (part_type, n) in &self.part_counts {
            out.push_str(&format!("  {part_type:?}: {n}\n"));
        }

        if let Some((min, max)) = self.bounds_cm {
            out.push_str(&format!(
                "\nBounds (cm): ({:.1}, {:.1}, {:.1}) -> ({:.1}, {:.1}, {:.1})\n",
                min[0], min[1], min[2], max[0], max[1], max[2],
            ));
        }

        out.push_str("\nCut List:\n");
        for line in self.cut_list.lines() {
            out.push_str(&format!("  {line}\n"));
        }

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{status}] {}: {}\n", v.oracle_name, v.detail));
            }
        }

        if self.warnings.is_empty() {
            out.push_str("\nWarnings: none\n");
        } else {
            out.push_str(&format!("\nWarnings ({}):\n", self.warnings.len()));
            for w in &self.warnings {
                out.push_str(&format!("  {w}\n"));
            }
        }

        out
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
