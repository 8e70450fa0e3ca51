//! Property tests for scene transforms.

use proptest::prelude::*;

use hydro_geometry::{BoundingBox, Euler, Point3d, Transform, Vec3};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_point() -> impl Strategy<Value = (f64, f64, f64)> {
    (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0)
}

fn arb_angle() -> impl Strategy<Value = f64> {
    -std::f64::consts::PI..std::f64::consts::PI
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Rotations preserve distances
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rotation_preserves_distance(
        (ax, ay, az) in arb_point(),
        (bx, by, bz) in arb_point(),
        rx in arb_angle(), ry in arb_angle(), rz in arb_angle(),
    ) {
        let t = Transform::rotation(Euler::new(rx, ry, rz));
        let a = Point3d::new(ax, ay, az);
        let b = Point3d::new(bx, by, bz);
        let before = a.distance_to(&b);
        let after = t.transform_point(&a).distance_to(&t.transform_point(&b));
        prop_assert!((before - after).abs() < TOL, "{} vs {}", before, after);
    }
}

// ---------------------------------------------------------------------------
// Mirroring X twice is the identity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn double_mirror_is_identity((x, y, z) in arb_point()) {
        let m = Transform::scaling(Vec3::new(-1.0, 1.0, 1.0));
        let p = Point3d::new(x, y, z);
        let q = m.then(&m).transform_point(&p);
        prop_assert!(p.distance_to(&q) < TOL);
        prop_assert!(m.transform_point(&p).distance_to(&p.mirrored_x()) < TOL);
    }
}

// ---------------------------------------------------------------------------
// Bounding boxes contain every point they were built from
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn bbox_contains_inputs(pts in prop::collection::vec(arb_point(), 1..20)) {
        let points: Vec<Point3d> = pts.iter().map(|&(x, y, z)| Point3d::new(x, y, z)).collect();
        let b = BoundingBox::from_points(points.iter());
        for p in &points {
            prop_assert!(p.x >= b.min.x && p.x <= b.max.x);
            prop_assert!(p.y >= b.min.y && p.y <= b.max.y);
            prop_assert!(p.z >= b.min.z && p.z <= b.max.z);
        }
    }
}
