/// ASCII line strip rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cyclogon_core::{LineStrip, OrthoView};
use std::io::Write;

const STRIP_CHAR: char = '*';

/// A projected strip vertex, `None` where the curve is not finite
type ScreenVertex = Option<(f32, f32)>;

/// Renders a static line strip into a character grid.
///
/// Geometry is projected once on upload and only re-projected when the
/// terminal size changes.
pub struct LineStripRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    strip: LineStrip,
    view: OrthoView,
    vertices: Vec<ScreenVertex>,
}

impl LineStripRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
            strip: LineStrip::new(),
            view: OrthoView::default(),
            vertices: Vec::new(),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Take ownership of the strip and project its vertices
    pub fn upload(&mut self, strip: LineStrip, view: OrthoView) {
        self.strip = strip;
        self.view = view;
        self.project();
    }

    pub fn strip(&self) -> &LineStrip {
        &self.strip
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.char_buffer = vec![' '; width * height];
        self.color_buffer = vec![Color::Reset; width * height];
        self.project();
    }

    fn project(&mut self) {
        let (width, height) = (self.width as u32, self.height as u32);
        self.vertices = self
            .strip
            .points()
            .iter()
            .map(|p| self.view.project_to_screen(p, width, height))
            .collect();
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    /// Rasterize every segment of the uploaded strip
    pub fn rasterize(&mut self) {
        let colors = self.strip.colors();
        let mut plotted = Vec::new();

        for (pair, color) in self.vertices.windows(2).zip(colors) {
            // A non-finite vertex breaks the strip
            if let (Some(from), Some(to)) = (pair[0], pair[1]) {
                plotted.extend(line_cells(from, to).map(|cell| (cell, *color)));
            }
        }
        // A single vertex still shows up
        if let ([Some(only)], Some(color)) = (self.vertices.as_slice(), colors.first()) {
            plotted.extend(line_cells(*only, *only).map(|cell| (cell, *color)));
        }

        for ((x, y), color) in plotted {
            self.plot(x, y, to_terminal_color(&color));
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = STRIP_CHAR;
        self.color_buffer[idx] = color;
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.char_buffer[y * self.width + x])
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Cells visited by a DDA walk from `from` to `to`
fn line_cells(from: (f32, f32), to: (f32, f32)) -> impl Iterator<Item = (i64, i64)> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    // Segments that leave the screen by far are capped instead of walked
    let steps = dx.abs().max(dy.abs()).ceil().clamp(1.0, 4096.0) as usize;

    (0..=steps).map(move |i| {
        let t = i as f32 / steps as f32;
        (
            (from.0 + dx * t).floor() as i64,
            (from.1 + dy * t).floor() as i64,
        )
    })
}

fn to_terminal_color(color: &cyclogon_core::Color) -> Color {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb {
        r: channel(color.x),
        g: channel(color.y),
        b: channel(color.z),
    }
}
