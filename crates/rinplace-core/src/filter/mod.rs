//! Image filters.

pub mod resample_in_place;

pub use resample_in_place::{compose_rigid_mapping, ResampleInPlaceFilter};
