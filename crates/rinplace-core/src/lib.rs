pub mod error;
pub mod filter;
pub mod image;
pub mod spatial;
pub mod transform;

pub use error::{FilterError, Result};
pub use filter::{compose_rigid_mapping, ResampleInPlaceFilter};
pub use image::{Image, ImageMetadata};
pub use spatial::{Direction, Point, Spacing, Vector};
pub use transform::RigidTransform;
