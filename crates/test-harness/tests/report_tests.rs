//! Tests for the text layout report.

use test_harness::helpers::extreme_params;
use test_harness::RigBuilder;

#[test]
fn default_report_sections() {
    let plan = RigBuilder::new().plan().unwrap();
    let report = plan.report();
    assert!(report.all_passed());

    let text = report.to_text();
    assert!(text.starts_with("=== Hydroponic Rig Report ===\n"));
    assert!(text.contains("120 x 220 cm, 4 tubes x 4 holes, 2% slope (realistic)"));
    assert!(text.contains("  MainTube: 4\n"));
    assert!(text.contains("  Elbow: 9\n"));
    assert!(text.contains("Bounds (cm): ("));
    assert!(text.contains("Cut List:\n  A  4 x 80.00 cm, 10.0 cm diameter\n"));
    assert!(text.contains("Oracle Results (6 checks):"));
    assert!(text.contains("[PASS] bom_counts"));
    assert!(!text.contains("[FAIL]"));
    assert!(text.ends_with("Warnings: none\n"));
}

#[test]
fn report_title_shows_mode_and_flip() {
    let plan = RigBuilder::new()
        .blueprint(true)
        .flipped(true)
        .tubes(3)
        .plan()
        .unwrap();
    let text = plan.report().to_string();
    assert!(text.contains("3 tubes x 4 holes, 2% slope (blueprint, flipped)"));
    assert!(text.contains("  Label: "));
}

#[test]
fn degenerate_rig_lists_warnings() {
    // 100 cm of height split between ten 5 cm tubes leaves no room for jogs.
    let params = extreme_params()[2];
    let plan = RigBuilder::from_params(params).plan().unwrap();
    let report = plan.report();
    assert_eq!(report.warnings.len(), 1);
    let text = report.to_text();
    assert!(text.contains("Warnings (1):\n  vertical connector length -0.91 cm is not positive\n"));
}
