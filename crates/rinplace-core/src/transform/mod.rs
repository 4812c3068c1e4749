//! Spatial transforms.
//!
//! Only rigid motions (rotation + translation) are provided: the in-place
//! resample filter folds them into an image's physical-space descriptor
//! exactly, which is impossible for transforms carrying scale or shear.

pub mod rigid;

pub use rigid::RigidTransform;
