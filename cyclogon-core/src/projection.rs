/// Fixed orthographic view of the curve plane
use nalgebra::{Matrix4, Point3};
use serde::Deserialize;

/// Visible rectangle of the xy plane
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrthoView {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl OrthoView {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Projection matrix with a [-1, 1] depth range, as a 2D ortho would use
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_orthographic(self.left, self.right, self.bottom, self.top, -1.0, 1.0)
    }

    /// Project a point to screen space (origin top-left)
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32)> {
        if !point.iter().all(|c| c.is_finite()) {
            return None;
        }

        let ndc = self.matrix().transform_point(point);

        // Screen y grows downwards
        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y))
    }
}

impl Default for OrthoView {
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}
