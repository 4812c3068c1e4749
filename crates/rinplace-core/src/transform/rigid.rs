//! Rigid transform implementation.
//!
//! A rigid transform is a distance- and orientation-preserving map of
//! physical space: `T(p) = R * p + t` with R a proper rotation.

use crate::error::{FilterError, Result};
use crate::spatial::{Direction, Point, Vector};
use nalgebra::{Quaternion, Rotation3, SMatrix, Unit, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Rigid transform (rotation + translation).
///
/// The rotation component is a proper rotation matrix (orthonormal,
/// determinant +1); the constructor enforces this, so every constructed
/// value represents a genuine rigid motion. All arithmetic is in `f64`.
///
/// # Examples
/// ```rust
/// use rinplace_core::RigidTransform;
/// use rinplace_core::spatial::{Point3, Vector3};
///
/// let transform = RigidTransform::from_axis_angle(Vector3::new([1.0, 0.0, 0.0]), 0.5)
///     .unwrap()
///     .with_translation(Vector3::new([0.0, 300.0, 0.0]));
/// let p = transform.transform_point(&Point3::new([0.0, 0.0, 0.0]));
/// assert!((p[1] - 300.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform<const D: usize> {
    rotation: SMatrix<f64, D, D>,
    translation: Vector<D>,
}

impl<const D: usize> RigidTransform<D> {
    /// Create an identity rigid transform (no rotation, no translation).
    pub fn identity() -> Self {
        Self {
            rotation: SMatrix::identity(),
            translation: Vector::zeros(),
        }
    }

    /// Create a rigid transform from a rotation matrix and a translation.
    ///
    /// # Errors
    /// Returns [`FilterError::UnsupportedTransform`] if the rotation matrix
    /// is not orthonormal with determinant +1 to floating-point tolerance
    /// (i.e. it carries scale, shear, or a reflection).
    pub fn new(rotation: SMatrix<f64, D, D>, translation: Vector<D>) -> Result<Self> {
        if !Direction(rotation).is_proper_rotation() {
            return Err(FilterError::unsupported_transform(
                "rotation matrix must be orthonormal with determinant +1",
            ));
        }
        Ok(Self {
            rotation,
            translation,
        })
    }

    /// Replace the translation component.
    pub fn with_translation(mut self, translation: Vector<D>) -> Self {
        self.translation = translation;
        self
    }

    /// Get the rotation matrix.
    pub fn rotation(&self) -> &SMatrix<f64, D, D> {
        &self.rotation
    }

    /// Get the translation vector.
    pub fn translation(&self) -> &Vector<D> {
        &self.translation
    }

    /// Apply the transform to a physical point: `R * p + t`.
    pub fn transform_point(&self, point: &Point<D>) -> Point<D> {
        Point(nalgebra::Point::from(
            self.rotation * point.0.coords + self.translation.0,
        ))
    }

    /// Apply the rotation component to a vector: `R * v`.
    ///
    /// Vectors are displacements, so the translation does not apply.
    pub fn transform_vector(&self, vector: &Vector<D>) -> Vector<D> {
        Vector(self.rotation * vector.0)
    }

    /// Compose with another rigid transform: `self ∘ inner`.
    ///
    /// The returned transform first applies `inner`, then `self`.
    pub fn compose(&self, inner: &Self) -> Self {
        Self {
            rotation: self.rotation * inner.rotation,
            translation: Vector(self.rotation * inner.translation.0 + self.translation.0),
        }
    }

    /// Inverse of the rigid transform.
    ///
    /// For an orthonormal rotation the inverse is `R^T * (p - t)`.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self {
            rotation,
            translation: Vector(-(rotation * self.translation.0)),
        }
    }
}

impl RigidTransform<3> {
    /// Create a 3D rotation about an axis, with zero translation.
    ///
    /// # Arguments
    /// * `axis` - Rotation axis (normalized internally)
    /// * `angle` - Rotation angle in radians
    ///
    /// # Errors
    /// Returns [`FilterError::UnsupportedTransform`] if the axis is zero.
    pub fn from_axis_angle(axis: Vector<3>, angle: f64) -> Result<Self> {
        let axis = Unit::try_new(axis.0, 1e-12)
            .ok_or_else(|| FilterError::unsupported_transform("rotation axis must be non-zero"))?;
        Ok(Self {
            rotation: Rotation3::from_axis_angle(&axis, angle).into_inner(),
            translation: Vector::zeros(),
        })
    }

    /// Create a 3D rotation from a versor (unit quaternion), with zero
    /// translation.
    ///
    /// The quaternion `(x, y, z, w)` is normalized internally.
    ///
    /// # Errors
    /// Returns [`FilterError::UnsupportedTransform`] if the quaternion has
    /// near-zero norm.
    pub fn from_versor(x: f64, y: f64, z: f64, w: f64) -> Result<Self> {
        let q = Quaternion::new(w, x, y, z);
        if q.norm() < 1e-12 {
            return Err(FilterError::unsupported_transform(
                "versor must have non-zero norm",
            ));
        }
        let q = UnitQuaternion::from_quaternion(q);
        Ok(Self {
            rotation: q.to_rotation_matrix().into_inner(),
            translation: Vector::zeros(),
        })
    }

    /// Create a 3D rotation from Euler angles (roll, pitch, yaw), with
    /// zero translation.
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            rotation: Rotation3::from_euler_angles(roll, pitch, yaw).into_inner(),
            translation: Vector::zeros(),
        }
    }
}

impl<const D: usize> Default for RigidTransform<D> {
    fn default() -> Self {
        Self::identity()
    }
}
