//! Physical-space descriptor of an image.
//!
//! The descriptor (origin, spacing, direction) defines how voxel indices
//! map into physical coordinates: `p(i) = origin + direction * diag(spacing) * i`.

use crate::spatial::{Direction, Point, Spacing, Vector};
use serde::{Deserialize, Serialize};

/// Image metadata containing physical space information.
///
/// Metadata describes how image indices map to physical coordinates. The
/// in-place resample filter rewrites origin and direction of an output
/// image while leaving spacing and voxel data untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata<const D: usize> {
    /// Physical coordinate of the first voxel (index 0, 0, ...).
    origin: Point<D>,
    /// Physical distance between voxel centers along each axis.
    spacing: Spacing<D>,
    /// Orientation of the image axes.
    direction: Direction<D>,
}

impl<const D: usize> ImageMetadata<D> {
    /// Create new image metadata.
    pub fn new(origin: Point<D>, spacing: Spacing<D>, direction: Direction<D>) -> Self {
        Self {
            origin,
            spacing,
            direction,
        }
    }

    /// Get the origin.
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Get the spacing.
    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    /// Get the direction.
    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Set the origin.
    pub fn set_origin(&mut self, origin: Point<D>) {
        self.origin = origin;
    }

    /// Set the spacing.
    pub fn set_spacing(&mut self, spacing: Spacing<D>) {
        self.spacing = spacing;
    }

    /// Set the direction.
    pub fn set_direction(&mut self, direction: Direction<D>) {
        self.direction = direction;
    }

    /// Convert a continuous index to a physical point.
    ///
    /// `point = origin + direction * (index * spacing)`
    pub fn continuous_index_to_physical_point(&self, index: &Point<D>) -> Point<D> {
        let mut scaled = Vector::<D>::zeros();
        for i in 0..D {
            scaled[i] = index[i] * self.spacing[i];
        }
        self.origin + self.direction * scaled
    }

    /// Convert a physical point to a continuous index.
    ///
    /// `index = (direction^-1 * (point - origin)) / spacing`
    pub fn physical_point_to_continuous_index(&self, point: &Point<D>) -> Point<D> {
        let inv_dir = self
            .direction
            .try_inverse()
            .expect("Direction matrix must be invertible");
        let rotated = inv_dir * (*point - self.origin);

        let mut index = Point::<D>::origin();
        for i in 0..D {
            index[i] = rotated[i] / self.spacing[i];
        }
        index
    }
}

impl<const D: usize> Default for ImageMetadata<D> {
    fn default() -> Self {
        Self {
            origin: Point::origin(),
            spacing: Spacing::uniform(1.0),
            direction: Direction::identity(),
        }
    }
}
