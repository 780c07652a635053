//! Geometry kernel for radiation propagation.
//!
//! Pure integer rasterization adapted for physical attenuation rather
//! than drawing:
//!
//! - [`circle_boundary`]: midpoint circle generation with 8-way symmetry,
//!   producing the deduplicated set of ray-tracing targets for a pulse.
//! - [`LineWalk`]: Bresenham line iterator, inclusive of both endpoints.
//! - [`trace_attenuated`]: line walk that multiplies running strength by
//!   per-layer passability and accumulates per-node contributions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circle;
pub mod line;
pub mod ray;

pub use circle::{circle_boundary, MAX_RADIUS};
pub use line::LineWalk;
pub use ray::trace_attenuated;
