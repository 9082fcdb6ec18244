/// Batch sampling of a cyclogon into a line strip
use log::{debug, warn};
use nalgebra::Point3;

use crate::curve::Cyclogon;
use crate::domain::SampleDomain;
use crate::error::SampleError;
use crate::geometry::{Coloring, LineStrip};

/// Turns a cyclogon into renderable geometry
#[derive(Debug, Clone)]
pub struct CurveSampler {
    curve: Cyclogon,
    coloring: Coloring,
}

impl CurveSampler {
    pub fn new(curve: Cyclogon) -> Self {
        Self {
            curve,
            coloring: Coloring::default(),
        }
    }

    pub fn with_coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }

    pub fn curve(&self) -> &Cyclogon {
        &self.curve
    }

    /// Point on the curve at parameter `x`
    pub fn evaluate(&self, x: f64) -> (f64, f64) {
        self.curve.evaluate(x)
    }

    /// Sample `floor((xmax - xmin) / step)` points starting at `xmin`
    pub fn sample(&self, xmin: f64, xmax: f64, step: f64) -> Result<LineStrip, SampleError> {
        self.sample_domain(&SampleDomain::new(xmin, xmax, step)?)
    }

    pub fn sample_domain(&self, domain: &SampleDomain) -> Result<LineStrip, SampleError> {
        domain.validate()?;

        let count = domain.len();
        let mut strip = LineStrip::with_capacity(count);
        for (i, x) in domain.parameters().enumerate() {
            let (px, py) = self.curve.evaluate(x);
            strip.push(
                Point3::new(px as f32, py as f32, 0.0),
                self.coloring.color_at(i, count),
            );
        }

        debug!(
            "sampled {} points over [{}, {}) with step {}",
            strip.len(),
            domain.xmin,
            domain.xmax,
            domain.step
        );
        let non_finite = strip.non_finite_count();
        if non_finite > 0 {
            warn!("{} of {} samples are not finite", non_finite, strip.len());
        }

        Ok(strip)
    }
}
