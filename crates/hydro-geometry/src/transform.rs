use nalgebra::{Matrix4, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// Euler angles in radians, applied in XYZ order (the matrix is `Rx * Ry * Rz`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn about_z(z: f64) -> Self {
        Self::new(0.0, 0.0, z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.x)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.y)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.z)
    }
}

impl From<[f64; 3]> for Euler {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Euler> for [f64; 3] {
    fn from(e: Euler) -> Self {
        e.to_array()
    }
}

/// A 4x4 affine transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub m: Matrix4<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            m: Matrix4::identity(),
        }
    }

    pub fn translation(v: Vec3) -> Self {
        Self {
            m: Matrix4::new_translation(&v.to_na()),
        }
    }

    pub fn scaling(s: Vec3) -> Self {
        Self {
            m: Matrix4::new_nonuniform_scaling(&s.to_na()),
        }
    }

    pub fn rotation(e: Euler) -> Self {
        Self {
            m: e.to_rotation().to_homogeneous(),
        }
    }

    /// Translate * rotate * scale, the way scene nodes compose their local frame.
    pub fn trs(position: Point3d, rotation: Euler, scale: Vec3) -> Self {
        Self::translation(position.to_vec3())
            .then(&Self::rotation(rotation))
            .then(&Self::scaling(scale))
    }

    /// Compose two transforms: `self * other` (`other` applies first).
    pub fn then(&self, other: &Transform) -> Transform {
        Transform { m: self.m * other.m }
    }

    pub fn transform_point(&self, p: &Point3d) -> Point3d {
        let r = self.m.transform_point(&nalgebra::Point3::new(p.x, p.y, p.z));
        Point3d::new(r.x, r.y, r.z)
    }

    pub fn transform_vector(&self, v: &Vec3) -> Vec3 {
        let r = self.m.transform_vector(&v.to_na());
        Vec3::new(r.x, r.y, r.z)
    }

    /// Whether this transform flips handedness (an odd number of mirrored axes).
    pub fn is_mirroring(&self) -> bool {
        self.m.fixed_view::<3, 3>(0, 0).determinant() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_euler_z_quarter_turn() {
        let t = Transform::rotation(Euler::about_z(FRAC_PI_2));
        let p = t.transform_point(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_euler_order_is_xyz() {
        // Rz applies first: X -> Y, then Rx carries Y -> Z.
        let t = Transform::rotation(Euler::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        let p = t.transform_point(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trs_scales_before_translating() {
        let t = Transform::trs(
            Point3d::new(1.0, 2.0, 3.0),
            Euler::IDENTITY,
            Vec3::new(2.0, 2.0, 2.0),
        );
        let p = t.transform_point(&Point3d::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3d::new(3.0, 4.0, 5.0));
        let v = t.transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(v, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_mirror_detection() {
        assert!(Transform::scaling(Vec3::new(-1.0, 1.0, 1.0)).is_mirroring());
        assert!(!Transform::identity().is_mirroring());
    }

    #[test]
    fn test_compose_order() {
        let a = Transform::translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Transform::rotation(Euler::about_z(FRAC_PI_2));
        // Rotate first, then translate.
        let p = a.then(&b).transform_point(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}
