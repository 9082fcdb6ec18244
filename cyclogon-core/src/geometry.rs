/// Geometry handed to the renderer
use nalgebra::{Point3, Vector3};

/// RGB color in the 0..1 range
pub type Color = Vector3<f32>;

pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

/// How sampled points are colored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coloring {
    /// Every point gets the same color
    Solid(Color),
    /// Linear blend from the first to the last sample
    Gradient { start: Color, end: Color },
}

impl Coloring {
    /// Color of sample `index` out of `count`
    pub fn color_at(&self, index: usize, count: usize) -> Color {
        match *self {
            Coloring::Solid(color) => color,
            Coloring::Gradient { start, end } => {
                let t = if count > 1 {
                    index as f32 / (count - 1) as f32
                } else {
                    0.0
                };
                start.lerp(&end, t)
            }
        }
    }
}

impl Default for Coloring {
    fn default() -> Self {
        Coloring::Solid(BLUE)
    }
}

/// Ordered vertices and per-vertex colors of a connected line strip.
///
/// Both sequences always have the same length. The strip is immutable once
/// built so it can be shared with a renderer for as long as it needs it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineStrip {
    points: Vec<Point3<f32>>,
    colors: Vec<Color>,
}

impl LineStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: Point3<f32>, color: Color) {
        self.points.push(point);
        self.colors.push(color);
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, each with the color of its first vertex
    pub fn segments(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>, Color)> + '_ {
        self.points
            .windows(2)
            .zip(&self.colors)
            .map(|(pair, color)| (pair[0], pair[1], *color))
    }

    /// Number of vertices with a NaN or infinite coordinate
    pub fn non_finite_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| !p.iter().all(|c| c.is_finite()))
            .count()
    }

    /// Axis-aligned bounds of the finite vertices
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut finite = self.points.iter().filter(|p| p.iter().all(|c| c.is_finite()));
        let first = *finite.next()?;

        Some(finite.fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }

    /// Flattened `x, y, z` vertex data, laid out for a vertex buffer
    pub fn vertex_data(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Flattened `r, g, b` color data, laid out for a color buffer
    pub fn color_data(&self) -> Vec<f32> {
        self.colors.iter().flat_map(|c| [c.x, c.y, c.z]).collect()
    }
}

impl FromIterator<(Point3<f32>, Color)> for LineStrip {
    fn from_iter<I: IntoIterator<Item = (Point3<f32>, Color)>>(iter: I) -> Self {
        let mut strip = LineStrip::new();
        for (point, color) in iter {
            strip.push(point, color);
        }
        strip
    }
}
