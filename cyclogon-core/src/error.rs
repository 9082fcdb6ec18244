/// Error types for curve construction and sampling
use thiserror::Error;

/// Rejected curve parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("a rolling polygon needs at least 3 sides, got {0}")]
    TooFewSides(u32),

    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("phase must be finite, got {0}")]
    InvalidPhase(f64),
}

/// Rejected sample domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("invalid domain [{xmin}, {xmax}] with step {step}: {reason}")]
    InvalidDomain {
        xmin: f64,
        xmax: f64,
        step: f64,
        reason: &'static str,
    },

    #[error(
        "failed to parse sample domain {input:?}, expected XMIN..XMAX@STEP with \
         numbers like 20, -0.5 or 1e-3 (digits required before a decimal point)"
    )]
    Parse { input: String },
}
