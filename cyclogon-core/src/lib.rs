/// Cyclogon Core Library - curve math and line strip geometry
///
/// This library evaluates the curve traced by a point of a rolling regular
/// polygon and samples it into a static line strip for a renderer.

pub mod curve;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod sampler;

// Re-export commonly used types
pub use curve::{CurveParams, Cyclogon};
pub use domain::{SampleDomain, MAX_SAMPLES};
pub use error::{CurveError, SampleError};
pub use geometry::{Color, Coloring, LineStrip, BLUE};
pub use projection::OrthoView;
pub use sampler::CurveSampler;

// Geometry types are nalgebra's, so renderers use the same version
pub use nalgebra;
