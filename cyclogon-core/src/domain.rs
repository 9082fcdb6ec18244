/// Sampling interval for the curve parameter
use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
    IResult,
};
use serde::Deserialize;
use std::str::FromStr;

use crate::error::SampleError;

/// Upper bound on the number of samples a domain may describe
pub const MAX_SAMPLES: usize = 10_000_000;

/// Half-open parameter interval `[xmin, xmax)` walked at a fixed step
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SampleDomain {
    pub xmin: f64,
    pub xmax: f64,
    pub step: f64,
}

impl SampleDomain {
    pub fn new(xmin: f64, xmax: f64, step: f64) -> Result<Self, SampleError> {
        let domain = Self { xmin, xmax, step };
        domain.validate()?;
        Ok(domain)
    }

    /// Check the domain describes a non-negative number of samples
    pub fn validate(&self) -> Result<(), SampleError> {
        let reason = if !(self.xmin.is_finite() && self.xmax.is_finite() && self.step.is_finite()) {
            "bounds and step must be finite"
        } else if self.step <= 0.0 {
            "step must be positive"
        } else if self.xmax <= self.xmin {
            "xmax must be greater than xmin"
        } else if (self.xmax - self.xmin) / self.step > MAX_SAMPLES as f64 {
            "too many samples for the span and step"
        } else {
            return Ok(());
        };

        Err(SampleError::InvalidDomain {
            xmin: self.xmin,
            xmax: self.xmax,
            step: self.step,
            reason,
        })
    }

    /// Number of samples, `floor((xmax - xmin) / step)`.
    ///
    /// The endpoint is dropped when the interval is not a whole multiple of
    /// the step.
    pub fn len(&self) -> usize {
        ((self.xmax - self.xmin) / self.step).floor() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parameter value of sample `index`
    pub fn parameter(&self, index: usize) -> f64 {
        self.xmin + index as f64 * self.step
    }

    /// All sample parameters in generation order
    pub fn parameters(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.parameter(i))
    }
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            xmin: -20.0,
            xmax: 20.0,
            step: 0.1,
        }
    }
}

impl FromStr for SampleDomain {
    type Err = SampleError;

    /// Parse `XMIN..XMAX@STEP`, e.g. `-20..20@0.1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (xmin, xmax, step)) = all_consuming(parse_domain)(s).map_err(|_| {
            SampleError::Parse {
                input: s.to_string(),
            }
        })?;
        Self::new(xmin, xmax, step)
    }
}

fn parse_domain(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, xmin) = ws(parse_number)(input)?;
    let (input, _) = tag("..")(input)?;
    let (input, xmax) = ws(parse_number)(input)?;
    let (input, _) = char('@')(input)?;
    let (input, step) = ws(parse_number)(input)?;
    Ok((input, (xmin, xmax, step)))
}

// nom's float parser would swallow the first '.' of "..", so decimals need
// digits on both sides of the point here
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            digit1,
            opt(pair(char('.'), digit1)),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_domain_length() {
        let domain = SampleDomain::default();
        assert_eq!(domain.len(), 400);
        assert_eq!(domain.parameter(0), -20.0);
        assert!((domain.parameter(399) - 19.9).abs() < 1e-9);
    }

    #[test]
    fn test_partial_step_is_dropped() {
        let domain = SampleDomain::new(0.0, 0.05, 0.1).unwrap();
        assert_eq!(domain.len(), 0);
        assert!(domain.is_empty());

        let domain = SampleDomain::new(0.0, 2.0, 0.5).unwrap();
        assert_eq!(domain.len(), 4);
        assert_eq!(domain.parameters().last(), Some(1.5));
    }

    #[test]
    fn test_invalid_domains() {
        for (xmin, xmax, step) in [
            (0.0, 1.0, 0.0),
            (0.0, 1.0, -0.1),
            (1.0, 1.0, 0.1),
            (2.0, 1.0, 0.1),
            (0.0, f64::INFINITY, 0.1),
            (-1e308, 1e308, 1.0),
            (0.0, 1.0, 1e-300),
        ] {
            assert!(
                matches!(
                    SampleDomain::new(xmin, xmax, step),
                    Err(SampleError::InvalidDomain { .. })
                ),
                "{xmin} {xmax} {step}"
            );
        }
    }

    #[test]
    fn test_sample_cap_boundary() {
        let domain = SampleDomain::new(0.0, MAX_SAMPLES as f64, 1.0).unwrap();
        assert_eq!(domain.len(), MAX_SAMPLES);
        assert!(SampleDomain::new(0.0, MAX_SAMPLES as f64 + 1.0, 1.0).is_err());
    }

    #[test]
    fn test_parse_notation() {
        let domain: SampleDomain = "-20..20@0.1".parse().unwrap();
        assert_eq!(domain, SampleDomain::default());

        let domain: SampleDomain = " 0.5 .. 3 @ 0.25 ".parse().unwrap();
        assert_eq!(domain, SampleDomain::new(0.5, 3.0, 0.25).unwrap());

        let domain: SampleDomain = "-2e1..2E+1@1e-1".parse().unwrap();
        assert_eq!(domain, SampleDomain::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "-20..20".parse::<SampleDomain>(),
            Err(SampleError::Parse { .. })
        ));
        assert!(matches!(
            "a..b@c".parse::<SampleDomain>(),
            Err(SampleError::Parse { .. })
        ));
        assert!(matches!(
            ".5..1@0.1".parse::<SampleDomain>(),
            Err(SampleError::Parse { .. })
        ));
        assert!(matches!(
            "-1e308..1e308@1".parse::<SampleDomain>(),
            Err(SampleError::InvalidDomain { .. })
        ));
        assert!(matches!(
            "0..1@0".parse::<SampleDomain>(),
            Err(SampleError::InvalidDomain { .. })
        ));
    }
}
