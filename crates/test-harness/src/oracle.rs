//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.

use dimension_resolver::SystemModel;
use hydro_geometry::Tolerance;
use hydro_types::{ParameterVector, PartType, SegmentRole};
use layout_builder::SceneGraph;

use crate::helpers::{joined_ports, lowest_y, ports_of};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn check(name: &str, passed: bool, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed,
            detail,
            value: Some(value),
        }
    }
}

// ── Model Oracles ───────────────────────────────────────────────────────────

/// Tube spacing times (tubes + 1) gives back the height.
pub fn check_spacing(params: &ParameterVector, model: &SystemModel) -> OracleVerdict {
    let rebuilt = model.tube_spacing() * (params.num_tubes as f64 + 1.0);
    let diff = (rebuilt - params.height).abs();
    OracleVerdict::check(
        "spacing",
        diff < 1e-9,
        format!("spacing x (n+1) = {rebuilt:.9}, height = {}", params.height),
        diff,
    )
}

/// Reservoir holds at least 20 L and 2 L per plant beyond that.
pub fn check_reservoir(params: &ParameterVector, model: &SystemModel) -> OracleVerdict {
    let per_plant = (params.num_tubes * params.holes_per_tube * 2) as f64;
    let expected = per_plant.max(20.0);
    OracleVerdict::check(
        "reservoir",
        model.reservoir.capacity == expected,
        format!("capacity {} L, expected {expected} L", model.reservoir.capacity),
        model.reservoir.capacity,
    )
}

// ── Scene Oracles ───────────────────────────────────────────────────────────

/// Every quantity in the bill of materials shows up in the scene.
pub fn check_bom_counts(model: &SystemModel, scene: &SceneGraph) -> OracleVerdict {
    let expected = [
        (SegmentRole::MainRun, model.tubes.main_tubes.quantity),
        (SegmentRole::Jog, model.tubes.vertical_connectors.big.quantity),
        (SegmentRole::DropTail, model.tubes.vertical_connectors.small.quantity),
        (SegmentRole::PumpRiser, model.tubes.pump_tube.quantity),
        (SegmentRole::Jumper, model.tubes.horizontal_connector.quantity),
        (SegmentRole::MainElbow, model.elbows.big.quantity),
        (SegmentRole::ReturnElbow, model.elbows.small.quantity),
        (SegmentRole::EndCap, model.end_caps.quantity),
        (SegmentRole::Hole, model.net_pots.quantity),
    ];
    let mismatches: Vec<String> = expected
        .iter()
        .filter_map(|&(role, want)| {
            let got = scene.parts_with_role(role).len() as u32;
            (got != want).then(|| format!("{role:?}: {got} != {want}"))
        })
        .collect();
    if mismatches.is_empty() {
        OracleVerdict::pass("bom_counts", "all quantities match".into())
    } else {
        OracleVerdict::fail("bom_counts", mismatches.join(", "))
    }
}

/// Lettered straight pieces are exactly as long as the model says.
pub fn check_segment_lengths(model: &SystemModel, scene: &SceneGraph) -> OracleVerdict {
    let tubes = &model.tubes;
    let expected = [
        ('A', tubes.main_tubes.length),
        ('B', tubes.vertical_connectors.big.length),
        ('C', tubes.pump_tube.length),
        ('D', tubes.vertical_connectors.small.length),
        ('E', tubes.horizontal_connector.length),
    ];
    let cuts = scene.cut_list();
    let mut worst = 0.0f64;
    for (letter, want) in expected {
        let Some(got) = cuts
            .iter()
            .find(|c| c.letter == letter)
            .and_then(|c| c.length_cm)
        else {
            return OracleVerdict::fail("segment_lengths", format!("no cut for {letter}"));
        };
        worst = worst.max((got - want).abs());
    }
    OracleVerdict::check(
        "segment_lengths",
        worst < 1e-6,
        format!("max length error {worst:.2e} cm"),
        worst,
    )
}

/// With level tubes, jogs and tube ends meet their elbows.
pub fn check_joints_closed(model: &SystemModel, scene: &SceneGraph) -> OracleVerdict {
    let tol = Tolerance::default();
    let n = model.num_tubes() as usize;
    let elbows = ports_of(&scene.parts_with_role(SegmentRole::MainElbow));
    let jogs = ports_of(&scene.parts_with_role(SegmentRole::Jog));
    let tubes = ports_of(&scene.parts_with_role(SegmentRole::MainRun));
    let jog_joints = joined_ports(&jogs, &elbows, &tol);
    let tube_joints = joined_ports(&elbows, &tubes, &tol);
    let want = (2 * n).saturating_sub(1);
    if jog_joints == want && tube_joints == want {
        OracleVerdict::pass("joints_closed", format!("{want} jog and {want} tube joints"))
    } else {
        OracleVerdict::fail(
            "joints_closed",
            format!("jog joints {jog_joints}, tube joints {tube_joints}, expected {want}"),
        )
    }
}

/// The drop tail ends on the top tube's upper surface.
pub fn check_drop_lands(model: &SystemModel, scene: &SceneGraph) -> OracleVerdict {
    let r = model.radius() * hydro_geometry::units::CM_TO_SCENE;
    let top = scene
        .parts_with_role(SegmentRole::MainRun)
        .into_iter()
        .map(|p| p.position.y)
        .fold(f64::NEG_INFINITY, f64::max);
    let Some(tail) = scene.parts_with_role(SegmentRole::DropTail).into_iter().next() else {
        return OracleVerdict::fail("drop_lands", "no drop tail".into());
    };
    let gap = (lowest_y(&tail) - (top + r)).abs();
    OracleVerdict::check("drop_lands", gap < 1e-9, format!("gap {gap:.2e} m"), gap)
}

/// The reservoir floor is level with the bottom of the pump riser.
pub fn check_reservoir_floor(scene: &SceneGraph) -> OracleVerdict {
    let parts = scene.world_parts();
    let Some(tank) = parts.iter().find(|p| p.part_type == PartType::Reservoir) else {
        return OracleVerdict::pass("reservoir_floor", "no reservoir in this view".into());
    };
    let Some(riser) = parts.iter().find(|p| p.role == SegmentRole::PumpRiser) else {
        return OracleVerdict::fail("reservoir_floor", "no pump riser".into());
    };
    let gap = (tank.bounds().min.y - lowest_y(riser)).abs();
    OracleVerdict::check("reservoir_floor", gap < 1e-9, format!("gap {gap:.2e} m"), gap)
}

/// `flipped` negates world X of the assembly and leaves everything else alone.
pub fn check_mirror(plain: &SceneGraph, flipped: &SceneGraph) -> OracleVerdict {
    let a = plain.world_parts();
    let b = flipped.world_parts();
    if a.len() != b.len() {
        return OracleVerdict::fail("mirror", format!("{} vs {} parts", a.len(), b.len()));
    }
    let board = |role: SegmentRole| matches!(role, SegmentRole::Board | SegmentRole::GridTick);
    let mut worst = 0.0f64;
    for (p, q) in a.iter().zip(&b) {
        if p.part_type != q.part_type || p.dimensions != q.dimensions {
            return OracleVerdict::fail("mirror", format!("{:?} changed under flip", p.part_type));
        }
        let dx = if board(p.role) {
            (p.position.x - q.position.x).abs()
        } else {
            (p.position.x + q.position.x).abs()
        };
        let d = dx
            .max((p.position.y - q.position.y).abs())
            .max((p.position.z - q.position.z).abs());
        worst = worst.max(d);
    }
    OracleVerdict::check("mirror", worst < 1e-12, format!("max deviation {worst:.2e} m"), worst)
}

/// Two scenes carry the same letters on the same roles.
pub fn check_letter_stability(a: &SceneGraph, b: &SceneGraph) -> OracleVerdict {
    let tags = |s: &SceneGraph| {
        s.parts_with_role(SegmentRole::Tag)
            .into_iter()
            .filter_map(|p| p.label_text)
            .collect::<Vec<_>>()
    };
    let (ta, tb) = (tags(a), tags(b));
    if ta == tb {
        OracleVerdict::pass("letter_stability", format!("{} tags", ta.len()))
    } else {
        OracleVerdict::fail("letter_stability", format!("{ta:?} vs {tb:?}"))
    }
}

/// The model-level and scene-level oracles that hold for any rig in bounds.
pub fn standard_checks(params: &ParameterVector, model: &SystemModel, scene: &SceneGraph) -> Vec<OracleVerdict> {
    vec![
        check_spacing(params, model),
        check_reservoir(params, model),
        check_bom_counts(model, scene),
        check_segment_lengths(model, scene),
        check_drop_lands(model, scene),
        check_reservoir_floor(scene),
    ]
}
