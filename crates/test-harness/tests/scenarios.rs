//! End-to-end planning sessions through the bridge dispatch path.
//!
//! Each scenario edits a rig the way a user would and checks the
//! model, the scene and the reports together.

use bom_report::Measurement;
use hydro_types::SegmentRole;
use test_harness::assertions::{assert_all_pass, assert_close, assert_role_count};
use test_harness::helpers::{extreme_params, HarnessError};
use test_harness::oracle::{check_joints_closed, check_letter_stability, check_mirror};
use test_harness::RigBuilder;

// ── Scenario 1: Default rig ─────────────────────────────────────────────

#[test]
fn default_rig_plans_cleanly() -> Result<(), HarnessError> {
    let plan = RigBuilder::new().plan()?;
    assert_all_pass(&plan.verdicts(), "default")?;
    assert!(plan.warnings.is_empty());

    assert_eq!(
        plan.measurements.get("Number of Plants"),
        Some(&Measurement::Count { value: 16 })
    );
    assert!(plan.materials_text.starts_with("Pipes:\n"));
    assert_role_count(&plan.scene, SegmentRole::Plant, 16, "plants")?;
    assert_role_count(&plan.scene, SegmentRole::Strap, 8, "straps")?;
    Ok(())
}

// ── Scenario 2: Editing toggles reuses the resolved model ───────────────

#[test]
fn toggles_do_not_re_resolve() -> Result<(), HarnessError> {
    let mut rig = RigBuilder::new();
    rig.plan()?;
    let mut rig = rig.plants(false).wall_stand(false).board(false);
    let plan = rig.plan()?;
    assert_eq!(rig.state.resolve_count(), 1);

    assert_role_count(&plan.scene, SegmentRole::Plant, 0, "plants off")?;
    assert_role_count(&plan.scene, SegmentRole::Plank, 0, "stand off")?;
    assert!(plan.scene.background.is_none());

    let mut rig = rig.tubes(5);
    rig.plan()?;
    assert_eq!(rig.state.resolve_count(), 2);
    Ok(())
}

// ── Scenario 3: Rejected edits ──────────────────────────────────────────

#[test]
fn out_of_range_edit_is_rejected() {
    let err = RigBuilder::new().tubes(11).plan().unwrap_err();
    match err {
        HarnessError::DispatchError { message } => assert!(message.contains("numTubes"), "{message}"),
        other => panic!("expected a dispatch error, got {other}"),
    }
}

#[test]
fn resolve_only_request() -> Result<(), HarnessError> {
    let model = RigBuilder::new().width(200.0).resolve()?;
    assert_close(model.tube_length(), 160.0, 1e-9, "tube length")?;
    Ok(())
}

// ── Scenario 4: Level blueprint of an odd rig ───────────────────────────

#[test]
fn level_blueprint_odd_rig() -> Result<(), HarnessError> {
    let plan = RigBuilder::new().tubes(5).slope(0.0).blueprint(true).plan()?;
    let v = check_joints_closed(&plan.model, &plan.scene);
    assert!(v.passed, "{}", v.detail);

    let letters: String = plan.cut_list.iter().map(|c| c.letter).collect();
    assert_eq!(letters, "ABCDEFG");
    assert_close(
        plan.cut_list[4].length_cm.unwrap_or(0.0),
        plan.model.tubes.horizontal_connector.length,
        1e-6,
        "long jumper",
    )?;
    assert_role_count(&plan.scene, SegmentRole::Reservoir, 0, "blueprint tank")?;
    Ok(())
}

// ── Scenario 5: Flip and relabel ────────────────────────────────────────

#[test]
fn flip_mirrors_and_keeps_letters() -> Result<(), HarnessError> {
    let plain = RigBuilder::new().blueprint(true).plan()?;
    let flipped = RigBuilder::new().blueprint(true).flipped(true).plan()?;
    let v = check_mirror(&plain.scene, &flipped.scene);
    assert!(v.passed, "{}", v.detail);
    let v = check_letter_stability(&plain.scene, &flipped.scene);
    assert!(v.passed, "{}", v.detail);
    assert_eq!(plain.cut_list, flipped.cut_list);
    Ok(())
}

// ── Scenario 6: Bounds corners ──────────────────────────────────────────

#[test]
fn extreme_rigs_stay_consistent() -> Result<(), HarnessError> {
    for (i, params) in extreme_params().into_iter().enumerate() {
        let plan = RigBuilder::from_params(params).plan()?;
        assert_all_pass(&plan.verdicts(), &format!("extreme #{i}"))?;
    }
    Ok(())
}

// ── Scenario 7: Raw JSON session ────────────────────────────────────────

#[test]
fn json_session_round_trip() {
    let mut state = wasm_bridge::PlannerState::new();
    let reply = wasm_bridge::process_json(
        &mut state,
        r#"{"type":"Plan","params":{"width":150,"height":200,"numTubes":3,"holesPerTube":5,"holeSize":5,"tubeRadius":8,"slope":1.5},"options":{"blueprintMode":true}}"#,
    );
    let json: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(json["type"], "Planned");
    assert_eq!(json["model"]["netPots"]["quantity"], 15);
    assert_eq!(json["cutList"].as_array().map(|a| a.len()), Some(7));
    assert!(json["materialsText"].as_str().unwrap().starts_with("Pipes:"));
    assert!(json.get("cut_list").is_none());

    let reply = wasm_bridge::process_json(&mut state, r#"{"type":"Plan","params":{}}"#);
    let json: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(json["type"], "Error");
}
