//! In-place resample filter.
//!
//! Adjusts the physical space representation of an image under a rigid
//! transform without modifying the value of any voxel. The transform is
//! composed algebraically with the image's index-to-physical mapping, so
//! no interpolation error is introduced and the cost is a buffer copy plus
//! constant-time matrix arithmetic.

use crate::error::{FilterError, Result};
use crate::image::{Image, ImageMetadata};
use crate::spatial::Direction;
use crate::transform::RigidTransform;
use tracing::debug;

/// Compose a rigid transform with an image's physical-space descriptor.
///
/// Produces the descriptor of the same voxel lattice after the rigid
/// motion has been applied to physical space:
///
/// * `origin' = R * origin + t`
/// * `direction' = R * direction`
/// * spacing is unchanged (rigid motions carry no scale)
///
/// Voxel indices keep their meaning: the physical position of voxel `i`
/// under the new descriptor equals the transform applied to its old
/// physical position. All arithmetic is in `f64`.
pub fn compose_rigid_mapping<const D: usize>(
    transform: &RigidTransform<D>,
    metadata: &ImageMetadata<D>,
) -> ImageMetadata<D> {
    let origin = transform.transform_point(metadata.origin());
    let direction = Direction(transform.rotation() * metadata.direction().inner());
    ImageMetadata::new(origin, *metadata.spacing(), direction)
}

/// In-place resample filter.
///
/// Holds the rigid transform to fold into the descriptor (identity by
/// default) and produces, per [`apply`](Self::apply) call, a new image with
/// the same voxel values and a recomputed origin and direction. Each call
/// starts from the input image's own descriptor; transforms never
/// accumulate across calls.
///
/// # Examples
/// ```rust
/// use rinplace_core::{Image, ResampleInPlaceFilter, RigidTransform};
/// use rinplace_core::spatial::{Direction3, Point3, Spacing3, Vector3};
/// use ndarray::{ArrayD, IxDyn};
///
/// let data = ArrayD::from_elem(IxDyn(&[4, 4, 4]), 1i16);
/// let input = Image::<i16, 3>::new(
///     data,
///     Point3::new([0.0, 0.0, 0.0]),
///     Spacing3::uniform(1.0),
///     Direction3::identity(),
/// )
/// .unwrap();
///
/// let transform = RigidTransform::from_axis_angle(Vector3::new([1.0, 0.0, 0.0]), 0.5)
///     .unwrap()
///     .with_translation(Vector3::new([0.0, 300.0, 0.0]));
/// let output = ResampleInPlaceFilter::new()
///     .with_rigid_transform(transform)
///     .apply(&input)
///     .unwrap();
///
/// assert_eq!(output.data(), input.data());
/// assert_eq!(output.spacing(), input.spacing());
/// ```
#[derive(Debug, Clone)]
pub struct ResampleInPlaceFilter<const D: usize> {
    rigid_transform: RigidTransform<D>,
}

impl<const D: usize> ResampleInPlaceFilter<D> {
    /// Create a filter with the identity transform (pass-through copy).
    pub fn new() -> Self {
        Self {
            rigid_transform: RigidTransform::identity(),
        }
    }

    /// Set the rigid transform, consuming and returning the filter.
    pub fn with_rigid_transform(mut self, transform: RigidTransform<D>) -> Self {
        self.rigid_transform = transform;
        self
    }

    /// Set the rigid transform.
    pub fn set_rigid_transform(&mut self, transform: RigidTransform<D>) {
        self.rigid_transform = transform;
    }

    /// Get the configured rigid transform.
    pub fn rigid_transform(&self) -> &RigidTransform<D> {
        &self.rigid_transform
    }

    /// Apply the filter to an input image.
    ///
    /// Deep-duplicates the voxel buffer, composes the configured transform
    /// with the input's descriptor, and returns a new image carrying the
    /// duplicated voxels under the recomputed origin and direction. The
    /// input is never mutated and the output never aliases its storage.
    ///
    /// # Errors
    /// Returns [`FilterError::InvalidInput`] if the input contains no
    /// voxels. No partial output is produced on failure.
    pub fn apply<T: Clone>(&self, input: &Image<T, D>) -> Result<Image<T, D>> {
        if input.num_voxels() == 0 {
            return Err(FilterError::invalid_input("input image has no voxels"));
        }

        let mapping = compose_rigid_mapping(&self.rigid_transform, input.metadata());
        debug!(
            origin = ?mapping.origin(),
            direction = ?mapping.direction(),
            "composed rigid transform into physical mapping"
        );

        let mut output = input.clone();
        output.set_metadata(mapping);
        Ok(output)
    }
}

impl<const D: usize> Default for ResampleInPlaceFilter<D> {
    fn default() -> Self {
        Self::new()
    }
}
