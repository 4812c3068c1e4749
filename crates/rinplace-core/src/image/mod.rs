//! Image types and operations.
//!
//! This module provides the Image type and its physical-space descriptor
//! for representing volumetric images with physical metadata.

pub mod image;
pub mod metadata;

pub use image::Image;
pub use metadata::ImageMetadata;
