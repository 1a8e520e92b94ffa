//! Stages of the isochronic transform, in pipeline order:
//! center lookup, distance scaling, warping, extent trimming and banding.
//! Travel-time search lives in [`crate::routing`].

pub mod center;
pub mod extent;
pub mod isochrone;
pub mod scale;
pub mod warp;
