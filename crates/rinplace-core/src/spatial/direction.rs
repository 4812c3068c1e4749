//! Direction type for representing image orientation.
//!
//! Direction matrices describe the orientation of image axes in physical
//! space: column i is the unit physical-direction vector of the i-th axis.

use super::Vector;
use nalgebra::SMatrix;
use serde::{Deserialize, Serialize};

/// Direction matrix representing image orientation.
///
/// A D×D matrix with orthonormal columns (determinant ±1). Composing a
/// rigid rotation with a direction matrix yields another valid direction
/// matrix, which is what the in-place resample filter relies on.
///
/// This is a thin wrapper around nalgebra's SMatrix to provide
/// domain-specific functionality while maintaining all nalgebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction<const D: usize>(pub SMatrix<f64, D, D>);

impl<const D: usize> Direction<D> {
    /// Create an identity direction matrix (axes aligned with physical axes).
    pub fn identity() -> Self {
        Self(SMatrix::identity())
    }

    /// Create a zero matrix.
    pub fn zeros() -> Self {
        Self(SMatrix::zeros())
    }

    /// Check if the matrix is orthogonal (D * D^T = I to tolerance).
    pub fn is_orthogonal(&self) -> bool {
        let product = self.0 * self.0.transpose();
        let identity = SMatrix::<f64, D, D>::identity();
        (0..D).all(|i| (0..D).all(|j| (product[(i, j)] - identity[(i, j)]).abs() < 1e-6))
    }

    /// Check if the matrix is a proper rotation (orthogonal with det = +1).
    pub fn is_proper_rotation(&self) -> bool {
        self.is_orthogonal() && (self.determinant() - 1.0).abs() < 1e-6
    }

    /// Compute the determinant via Gaussian elimination with partial pivoting.
    pub fn determinant(&self) -> f64 {
        let mut m = self.0;
        let mut det = 1.0;

        for i in 0..D {
            let mut pivot_idx = i;
            let mut pivot_val = m[(i, i)].abs();
            for k in (i + 1)..D {
                if m[(k, i)].abs() > pivot_val {
                    pivot_val = m[(k, i)].abs();
                    pivot_idx = k;
                }
            }

            if pivot_val < 1e-12 {
                return 0.0;
            }

            if pivot_idx != i {
                m.swap_rows(i, pivot_idx);
                det = -det;
            }

            det *= m[(i, i)];

            for j in (i + 1)..D {
                let factor = m[(j, i)] / m[(i, i)];
                for k in i..D {
                    m[(j, k)] -= factor * m[(i, k)];
                }
            }
        }

        det
    }

    /// Try to compute the inverse of the direction matrix.
    pub fn try_inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Self)
    }

    /// Transpose of the direction matrix.
    ///
    /// For an orthonormal direction matrix this is also its inverse.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Get the axis directions as column vectors.
    pub fn axis_directions(&self) -> Vec<Vector<D>> {
        (0..D)
            .map(|i| {
                let mut v = Vector::zeros();
                for j in 0..D {
                    v[j] = self.0[(j, i)];
                }
                v
            })
            .collect()
    }

    /// Get the inner nalgebra matrix.
    pub fn inner(&self) -> &SMatrix<f64, D, D> {
        &self.0
    }

    /// Get mutable reference to the inner nalgebra matrix.
    pub fn inner_mut(&mut self) -> &mut SMatrix<f64, D, D> {
        &mut self.0
    }
}

impl<const D: usize> std::ops::Index<(usize, usize)> for Direction<D> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<(usize, usize)> for Direction<D> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> std::ops::Mul for Direction<D> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self(self.0 * other.0)
    }
}

impl<const D: usize> std::ops::Mul<Vector<D>> for Direction<D> {
    type Output = Vector<D>;

    fn mul(self, vector: Vector<D>) -> Self::Output {
        Vector(self.0 * vector.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Direction3 = Direction<3>;
    type Vector3 = Vector<3>;

    fn rotation_z_90() -> Direction3 {
        let mut rot = Direction3::zeros();
        rot[(0, 1)] = -1.0;
        rot[(1, 0)] = 1.0;
        rot[(2, 2)] = 1.0;
        rot
    }

    #[test]
    fn test_direction_identity() {
        let d = Direction3::identity();
        assert_eq!(d[(0, 0)], 1.0);
        assert_eq!(d[(1, 1)], 1.0);
        assert_eq!(d[(2, 2)], 1.0);
        assert!(d.is_proper_rotation());
    }

    #[test]
    fn test_direction_is_orthogonal() {
        assert!(rotation_z_90().is_orthogonal());

        let mut skewed = Direction3::identity();
        skewed[(0, 1)] = 0.5;
        assert!(!skewed.is_orthogonal());
    }

    #[test]
    fn test_direction_determinant() {
        assert!((rotation_z_90().determinant() - 1.0).abs() < 1e-12);

        let mut reflection = Direction3::identity();
        reflection[(0, 0)] = -1.0;
        assert!((reflection.determinant() + 1.0).abs() < 1e-12);
        assert!(!reflection.is_proper_rotation());
    }

    #[test]
    fn test_direction_inverse_is_transpose() {
        let rot = rotation_z_90();
        let inv = rot.try_inverse().unwrap();
        let t = rot.transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert!((inv[(i, j)] - t[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_direction_axis_directions() {
        let axes = Direction3::identity().axis_directions();
        assert_eq!(axes.len(), 3);
        assert_eq!(axes[0], Vector3::new([1.0, 0.0, 0.0]));
        assert_eq!(axes[1], Vector3::new([0.0, 1.0, 0.0]));
        assert_eq!(axes[2], Vector3::new([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_direction_composition() {
        let rot = rotation_z_90();
        let composed = rot * rot.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((composed[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }
}
