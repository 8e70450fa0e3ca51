//! Text rendering of a planned rig.

use hydro_geometry::units::CM_TO_SCENE;
use hydro_types::PartType;
use layout_builder::SceneGraph;

/// Part counts by type and the assembly's extent.
pub fn scene_summary(scene: &SceneGraph) -> String {
    let mut lines = Vec::new();
    for part_type in PartType::ALL {
        let n = scene.count(part_type);
        if n > 0 {
            lines.push(format!("  {part_type:?}: {n}"));
        }
    }
    let bounds = scene.bounds();
    if !bounds.is_empty() {
        let size = bounds.size();
        lines.push(format!(
            "  Extent: {:.1} x {:.1} x {:.1} cm",
            size.x / CM_TO_SCENE,
            size.y / CM_TO_SCENE,
            size.z / CM_TO_SCENE,
        ));
    }
    lines.join("\n")
}

pub fn section(title: &str, body: &str) -> String {
    format!("== {title} ==\n{body}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_resolver::resolve;
    use hydro_types::{DisplayOptions, ParameterVector};
    use layout_builder::build_layout;

    #[test]
    fn test_summary_lists_present_types() {
        let params = ParameterVector::default();
        let scene = build_layout(&params, &resolve(&params), &DisplayOptions::default());
        let text = scene_summary(&scene);
        assert!(text.starts_with("  MainTube: 4\n"));
        assert!(text.contains("  Reservoir: 1\n"));
        assert!(text.contains("  Extent: "));
    }

    #[test]
    fn test_section_heading() {
        assert_eq!(section("Cut List", "A"), "== Cut List ==\nA\n");
    }
}
