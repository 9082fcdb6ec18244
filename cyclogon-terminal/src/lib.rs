/// Terminal viewer for sampled cyclogon line strips
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use cyclogon_core::{CurveError, CurveSampler, Cyclogon, LineStrip, OrthoView, SampleError};
use log::{debug, info};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;

pub mod config;
pub mod renderer;

pub use config::{ConfigError, ViewerConfig};
pub use renderer::LineStripRenderer;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid curve: {0}")]
    Curve(#[from] CurveError),

    #[error("sampling failed: {0}")]
    Sample(#[from] SampleError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

/// Sample the configured curve into a line strip
pub fn build_strip(config: &ViewerConfig) -> Result<LineStrip, ViewerError> {
    let curve = Cyclogon::new(config.curve)?;
    let strip = CurveSampler::new(curve)
        .with_coloring(config.coloring())
        .sample_domain(&config.domain)?;

    info!("n = {}", strip.len());
    Ok(strip)
}

/// Viewer state: the uploaded strip, the renderer and the loop flags
pub struct ViewerApp {
    renderer: LineStripRenderer,
    title: String,
    running: bool,
}

impl ViewerApp {
    pub fn new(strip: LineStrip, view: OrthoView) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(strip, view, width as usize, height as usize))
    }

    /// Build a viewer for a fixed grid, without touching the terminal
    pub fn with_size(strip: LineStrip, view: OrthoView, width: usize, height: usize) -> Self {
        let points = strip.len();
        let mut renderer = LineStripRenderer::new(width, height.saturating_sub(1));
        renderer.upload(strip, view);
        renderer.rasterize();

        Self {
            renderer,
            title: format!("Cyclogon generated by a rolling polygon | {points} points | Q=Quit"),
            running: true,
        }
    }

    pub fn renderer(&self) -> &LineStripRenderer {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            self.render()?;

            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.running = false;
            }
            Event::Resize(width, height) => {
                debug!("resized to {}x{}", width, height);
                self.renderer
                    .resize(width as usize, (height as usize).saturating_sub(1));
                self.renderer.clear();
                self.renderer.rasterize();
            }
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(&self.title),
            ResetColor,
            cursor::MoveTo(0, 1)
        )?;

        self.renderer.draw(&mut stdout)?;

        stdout.flush()?;
        Ok(())
    }
}
