//! Image type with physical metadata and coordinate transformations.
//!
//! An image is an N-dimensional regular lattice of typed voxel values plus
//! a physical-space descriptor (origin, spacing, direction).

use crate::error::{FilterError, Result};
use crate::image::ImageMetadata;
use crate::spatial::{Direction, Point, Spacing};
use ndarray::{ArrayD, IxDyn};

/// Volumetric image with physical metadata.
///
/// Combines a typed voxel buffer with the physical-space descriptor that
/// maps voxel indices into physical coordinates.
///
/// # Type Parameters
/// * `T` - The voxel value type (e.g. `i16` for CT data)
/// * `D` - The dimensionality of the image (2 or 3)
///
/// # Coordinate Systems
/// * **Index Space**: Discrete voxel indices (integer coordinates)
/// * **Physical Space**: Continuous coordinates in mm or other units
///
/// `Clone` performs a deep copy of the voxel buffer; a cloned image never
/// aliases the original's storage.
///
/// # Examples
/// ```rust
/// use rinplace_core::Image;
/// use rinplace_core::spatial::{Point3, Spacing3, Direction3};
/// use ndarray::{ArrayD, IxDyn};
///
/// let data = ArrayD::<i16>::zeros(IxDyn(&[10, 10, 10]));
/// let origin = Point3::new([0.0, 0.0, 0.0]);
/// let spacing = Spacing3::uniform(1.0);
/// let direction = Direction3::identity();
/// let image = Image::<i16, 3>::new(data, origin, spacing, direction).unwrap();
/// assert_eq!(image.shape(), [10, 10, 10]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T, const D: usize> {
    /// The voxel data.
    data: ArrayD<T>,
    /// Physical space descriptor.
    metadata: ImageMetadata<D>,
}

impl<T, const D: usize> Image<T, D> {
    /// Create a new image with the given data and metadata.
    ///
    /// # Errors
    /// Returns [`FilterError::DimensionMismatch`] if the buffer rank does
    /// not match the compile-time dimension `D`.
    pub fn new(
        data: ArrayD<T>,
        origin: Point<D>,
        spacing: Spacing<D>,
        direction: Direction<D>,
    ) -> Result<Self> {
        Self::with_metadata(data, ImageMetadata::new(origin, spacing, direction))
    }

    /// Create a new image from a buffer and an existing descriptor.
    ///
    /// # Errors
    /// Returns [`FilterError::DimensionMismatch`] if the buffer rank does
    /// not match the compile-time dimension `D`.
    pub fn with_metadata(data: ArrayD<T>, metadata: ImageMetadata<D>) -> Result<Self> {
        if data.ndim() != D {
            return Err(FilterError::dimension_mismatch(format!(
                "voxel buffer has rank {}, expected {}",
                data.ndim(),
                D
            )));
        }
        Ok(Self { data, metadata })
    }

    /// Get the voxel data.
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Get mutable access to the voxel data.
    pub fn data_mut(&mut self) -> &mut ArrayD<T> {
        &mut self.data
    }

    /// Get the physical space descriptor.
    pub fn metadata(&self) -> &ImageMetadata<D> {
        &self.metadata
    }

    /// Replace the physical space descriptor.
    pub fn set_metadata(&mut self, metadata: ImageMetadata<D>) {
        self.metadata = metadata;
    }

    /// Get the origin (physical coordinate of the first voxel).
    pub fn origin(&self) -> &Point<D> {
        self.metadata.origin()
    }

    /// Get the spacing (physical distance between voxel centers).
    pub fn spacing(&self) -> &Spacing<D> {
        self.metadata.spacing()
    }

    /// Get the direction (orientation matrix).
    pub fn direction(&self) -> &Direction<D> {
        self.metadata.direction()
    }

    /// Get the image shape as an array.
    pub fn shape(&self) -> [usize; D] {
        self.data
            .shape()
            .try_into()
            .expect("Voxel buffer rank mismatch")
    }

    /// Total number of voxels in the image.
    pub fn num_voxels(&self) -> usize {
        self.data.len()
    }

    /// Get the voxel value at a discrete index, if in bounds.
    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        self.data.get(IxDyn(&index))
    }

    /// Convert a continuous index to a physical point.
    ///
    /// `point = origin + direction * (index * spacing)`
    pub fn transform_continuous_index_to_physical_point(&self, index: &Point<D>) -> Point<D> {
        self.metadata.continuous_index_to_physical_point(index)
    }

    /// Convert a continuous physical point to a continuous index.
    ///
    /// `index = (direction^-1 * (point - origin)) / spacing`
    pub fn transform_physical_point_to_continuous_index(&self, point: &Point<D>) -> Point<D> {
        self.metadata.physical_point_to_continuous_index(point)
    }
}
