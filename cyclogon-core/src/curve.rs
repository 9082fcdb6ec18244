/// Cyclogon traced by a regular polygon rolling along a line
use serde::Deserialize;
use std::f64::consts::{PI, TAU};

use crate::error::CurveError;

/// Parameters of the rolling polygon
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Number of polygon sides (B)
    pub sides: u32,
    /// Circumradius of the polygon (R)
    pub radius: f64,
    /// Starting angle of the traced point, measured from the polygon center (D)
    pub phase: f64,
}

impl CurveParams {
    pub fn new(sides: u32, radius: f64, phase: f64) -> Self {
        Self {
            sides,
            radius,
            phase,
        }
    }
}

impl Default for CurveParams {
    /// A unit square tracing the point at 1.4 rad
    fn default() -> Self {
        Self::new(4, 1.0, 1.4)
    }
}

/// A validated cyclogon with its derived constants.
///
/// The curve is built in three stages: the input angle is folded into a face
/// index and a residual angle, the traced point is evaluated relative to the
/// face currently in contact, and that point is rotated by the residual angle
/// and shifted by the distance already rolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cyclogon {
    params: CurveParams,
    sides: f64,
    apothem: f64,
    angular_offset: f64,
}

impl Cyclogon {
    pub fn new(params: CurveParams) -> Result<Self, CurveError> {
        if params.sides < 3 {
            return Err(CurveError::TooFewSides(params.sides));
        }
        if !params.radius.is_finite() || params.radius <= 0.0 {
            return Err(CurveError::InvalidRadius(params.radius));
        }
        if !params.phase.is_finite() {
            return Err(CurveError::InvalidPhase(params.phase));
        }

        let sides = params.sides as f64;
        Ok(Self {
            params,
            sides,
            apothem: params.radius * (PI / sides).cos(),
            angular_offset: PI + PI / sides,
        })
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Distance from the polygon center to a face (A)
    pub fn apothem(&self) -> f64 {
        self.apothem
    }

    /// Angular offset of the face frame (a)
    pub fn angular_offset(&self) -> f64 {
        self.angular_offset
    }

    /// Horizontal shift of the curve after one full turn of the polygon
    pub fn horizontal_period(&self) -> f64 {
        2.0 * self.apothem * self.sides
    }

    /// Index of the face in contact with the line at angle `x`
    pub fn segment_index(&self, x: f64) -> f64 {
        (x * self.sides / TAU).floor()
    }

    /// Angle rolled back to the start of the current face
    pub fn post_b(&self, x: f64) -> f64 {
        -(TAU / self.sides) * self.segment_index(x)
    }

    /// Horizontal distance accumulated by the faces already rolled over
    pub fn post_c(&self, x: f64) -> f64 {
        2.0 * self.apothem * self.segment_index(x)
    }

    /// Residual angle within the current face
    pub fn post_d(&self, x: f64) -> f64 {
        x - (TAU / self.sides) * self.segment_index(x)
    }

    fn contact_distance(&self, t: f64) -> f64 {
        let b = self.sides;
        let shifted = t - self.angular_offset;
        let face = (b * shifted / TAU - b * (shifted / TAU).floor()).floor();
        let down = (shifted - (TAU * face + PI) / b).cos();

        // Not guarded: a vanishing denominator propagates as inf/NaN
        self.params.radius * (PI / b).cos() / down
    }

    /// Horizontal coordinate of the traced point before rotation
    pub fn pre_transformation_f(&self, t: f64) -> f64 {
        self.contact_distance(t) * t.cos()
    }

    /// Vertical coordinate of the traced point before rotation
    pub fn pre_transformation_g(&self, t: f64) -> f64 {
        self.contact_distance(t) * t.sin() + self.apothem
    }

    pub fn calc_x(&self, x: f64) -> f64 {
        let (f, g, residual) = self.face_frame(x);
        (f - self.apothem) * residual.cos() + g * residual.sin() + self.apothem + self.post_c(x)
    }

    pub fn calc_y(&self, x: f64) -> f64 {
        let (f, g, residual) = self.face_frame(x);
        g * residual.cos() - (f - self.apothem) * residual.sin()
    }

    /// Point on the curve at rolling angle `x`
    pub fn evaluate(&self, x: f64) -> (f64, f64) {
        let (f, g, residual) = self.face_frame(x);
        let (sin, cos) = residual.sin_cos();
        let lifted = f - self.apothem;

        (
            lifted * cos + g * sin + self.apothem + self.post_c(x),
            g * cos - lifted * sin,
        )
    }

    fn face_frame(&self, x: f64) -> (f64, f64, f64) {
        let t = self.params.phase + self.post_b(x);
        (
            self.pre_transformation_f(t),
            self.pre_transformation_g(t),
            self.post_d(x),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Cyclogon {
        Cyclogon::new(CurveParams::default()).unwrap()
    }

    #[test]
    fn test_derived_constants() {
        let curve = square();
        assert!((curve.apothem() - 0.707106781187).abs() < 1e-9);
        assert!((curve.angular_offset() - 3.92699081699).abs() < 1e-9);
        assert!((curve.horizontal_period() - 8.0 * 0.707106781187).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_degenerate_polygons() {
        assert_eq!(
            Cyclogon::new(CurveParams::new(2, 1.0, 0.0)),
            Err(CurveError::TooFewSides(2))
        );
        assert_eq!(
            Cyclogon::new(CurveParams::new(4, 0.0, 0.0)),
            Err(CurveError::InvalidRadius(0.0))
        );
        assert!(matches!(
            Cyclogon::new(CurveParams::new(4, 1.0, f64::NAN)),
            Err(CurveError::InvalidPhase(_))
        ));
    }

    #[test]
    fn test_angle_folding() {
        let curve = square();
        let quarter = TAU / 4.0;

        assert_eq!(curve.segment_index(0.0), 0.0);
        assert_eq!(curve.segment_index(quarter + 0.01), 1.0);
        assert_eq!(curve.segment_index(-0.01), -1.0);

        let x = 2.0 * quarter + 0.3;
        assert!((curve.post_b(x) + 2.0 * quarter).abs() < 1e-12);
        assert!((curve.post_c(x) - 4.0 * curve.apothem()).abs() < 1e-12);
        assert!((curve.post_d(x) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_residual_angle_is_bounded() {
        let curve = square();
        let mut x = -20.0;
        while x < 20.0 {
            let residual = curve.post_d(x);
            assert!((-1e-12..TAU / 4.0 + 1e-12).contains(&residual), "x = {x}");
            x += 0.037;
        }
    }

    #[test]
    fn test_reference_values() {
        let curve = square();

        let (x, y) = curve.evaluate(0.0);
        assert!((x - 0.121959462).abs() < 1e-6);
        assert!((y - 1.414213562).abs() < 1e-6);

        let (x, y) = curve.evaluate(1.0);
        assert!((x - 1.580970015).abs() < 1e-6);
        assert!((y - 1.256487339).abs() < 1e-6);

        let (x, y) = curve.evaluate(-20.0);
        assert!((x + 18.630442023).abs() < 1e-6);
        assert!((y - 1.334007276).abs() < 1e-6);
    }

    #[test]
    fn test_split_coordinates_match_evaluate() {
        let curve = square();
        for &x in &[-7.5, -0.2, 0.0, 2.5, 3.0, 10.0] {
            let (ex, ey) = curve.evaluate(x);
            assert!((curve.calc_x(x) - ex).abs() < 1e-12);
            assert!((curve.calc_y(x) - ey).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pre_transformation_stays_between_apothem_and_radius() {
        let curve = Cyclogon::new(CurveParams::new(5, 2.0, 0.0)).unwrap();
        let mut t = -10.0;
        while t < 10.0 {
            let f = curve.pre_transformation_f(t);
            let g = curve.pre_transformation_g(t) - curve.apothem();
            let distance = (f * f + g * g).sqrt();
            assert!(distance >= curve.apothem() - 1e-9, "t = {t}");
            assert!(distance <= 2.0 + 1e-9, "t = {t}");
            t += 0.05;
        }
    }

    #[test]
    fn test_non_finite_input_passes_through() {
        let (x, y) = square().evaluate(f64::NAN);
        assert!(x.is_nan());
        assert!(y.is_nan());
    }
}
