//! Letter tags for the blueprint view, applied after the geometry is laid out.

use std::f64::consts::FRAC_PI_4;

use dimension_resolver::SystemModel;
use hydro_geometry::units::fixed;
use hydro_geometry::{Euler, Point3d};
use hydro_types::{PartType, SegmentRole};
use tracing::debug;

use crate::scene::{PartInstance, SceneGraph, SceneGroup, Shape};
use crate::style::StylePalette;

const TAG_SIZE: f64 = 0.1;

/// Blueprint letter of a structural piece. Letters depend only on what the
/// piece is, never on where it ended up.
pub fn letter_for(part_type: PartType, role: SegmentRole) -> Option<char> {
    match (part_type, role) {
        (PartType::MainTube, SegmentRole::MainRun) => Some('A'),
        (PartType::VerticalConnector, SegmentRole::Jog) => Some('B'),
        (PartType::PumpTube, SegmentRole::PumpRiser) => Some('C'),
        (PartType::VerticalConnector, SegmentRole::DropTail) => Some('D'),
        (PartType::HorizontalConnector, SegmentRole::Jumper) => Some('E'),
        (PartType::Elbow, SegmentRole::MainElbow) => Some('F'),
        (PartType::Elbow, SegmentRole::ReturnElbow) => Some('G'),
        _ => None,
    }
}

/// Cut length in centimeters of a lettered straight piece, straight from the model.
fn cut_length(model: &SystemModel, role: SegmentRole) -> Option<f64> {
    let tubes = &model.tubes;
    match role {
        SegmentRole::MainRun => Some(tubes.main_tubes.length),
        SegmentRole::Jog => Some(tubes.vertical_connectors.big.length),
        SegmentRole::PumpRiser => Some(tubes.pump_tube.length),
        SegmentRole::DropTail => Some(tubes.vertical_connectors.small.length),
        SegmentRole::Jumper => Some(tubes.horizontal_connector.length),
        _ => None,
    }
}

pub fn label_text(model: &SystemModel, part_type: PartType, role: SegmentRole) -> Option<String> {
    let letter = letter_for(part_type, role)?;
    Some(match cut_length(model, role) {
        Some(len) => format!("{letter} - {}cm", fixed(len, 2)),
        None => letter.to_string(),
    })
}

/// Tag every lettered part of the assembly with the default palette.
pub fn annotate(scene: &mut SceneGraph, model: &SystemModel) {
    annotate_with(scene, model, &StylePalette::default());
}

pub fn annotate_with(scene: &mut SceneGraph, model: &SystemModel, palette: &StylePalette) {
    let tagged = annotate_group(&mut scene.assembly, model, palette);
    debug!(tagged, "annotated blueprint");
}

fn annotate_group(group: &mut SceneGroup, model: &SystemModel, palette: &StylePalette) -> usize {
    let mut tagged = 0;
    for part in &mut group.parts {
        if part.label_text.is_some() {
            continue;
        }
        let Some(text) = label_text(model, part.part_type, part.role) else {
            continue;
        };
        let tag = PartInstance {
            part_type: PartType::Label,
            role: SegmentRole::Tag,
            position: tag_anchor(&part.dimensions),
            rotation: Euler::IDENTITY,
            dimensions: Shape::Text { size: TAG_SIZE },
            display_mode: part.display_mode,
            label_text: Some(text.clone()),
            style: palette.style_for(PartType::Label, part.display_mode),
            children: Vec::new(),
        };
        part.label_text = Some(text);
        part.children.push(tag);
        tagged += 1;
    }
    for child in &mut group.groups {
        tagged += annotate_group(child, model, palette);
    }
    tagged
}

/// Midpoint of an elbow's arc, or the center of a straight piece.
fn tag_anchor(shape: &Shape) -> Point3d {
    match shape {
        Shape::Torus { bend_radius, .. } => Point3d::new(
            bend_radius * FRAC_PI_4.cos(),
            bend_radius * FRAC_PI_4.sin(),
            0.0,
        ),
        _ => Point3d::ORIGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_resolver::resolve;
    use hydro_types::ParameterVector;

    #[test]
    fn test_letters() {
        assert_eq!(letter_for(PartType::MainTube, SegmentRole::MainRun), Some('A'));
        assert_eq!(letter_for(PartType::VerticalConnector, SegmentRole::DropTail), Some('D'));
        assert_eq!(letter_for(PartType::Elbow, SegmentRole::ReturnElbow), Some('G'));
        assert_eq!(letter_for(PartType::TubeCap, SegmentRole::EndCap), None);
    }

    #[test]
    fn test_label_text() {
        let model = resolve(&ParameterVector::default());
        assert_eq!(
            label_text(&model, PartType::MainTube, SegmentRole::MainRun).as_deref(),
            Some("A - 80.00cm")
        );
        assert_eq!(
            label_text(&model, PartType::PumpTube, SegmentRole::PumpRiser).as_deref(),
            Some("C - 211.00cm")
        );
        assert_eq!(
            label_text(&model, PartType::Elbow, SegmentRole::MainElbow).as_deref(),
            Some("F")
        );
    }

    #[test]
    fn test_label_rounds_ties_up() {
        // 1.25 x 2.5 cm is exactly 3.125.
        let model = resolve(&ParameterVector {
            tube_radius: 5.0,
            num_tubes: 3,
            ..ParameterVector::default()
        });
        assert_eq!(
            label_text(&model, PartType::VerticalConnector, SegmentRole::DropTail).as_deref(),
            Some("D - 3.13cm")
        );
    }
}
