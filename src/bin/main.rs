use std::path::PathBuf;
use std::time::{Duration, Instant};

use cgmath::vec2;
use clap::Parser;
use eframe::egui;
use letter_particles::{Canvas, Error, FieldConfig, PointerSample, Result, Sketch};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Drag across the window to pull the particle grid along your stroke
#[derive(Parser, Debug)]
#[command(name = "letter-particles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding the default field settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn color32([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

/// Draws into the central panel. Sketch coordinates start at the panel's
/// top left corner.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: [u8; 3]) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color32(color));
    }

    fn fill_circle(&mut self, center: cgmath::Vector2<f32>, diameter: f32, color: [u8; 3]) {
        self.painter.circle_filled(
            self.origin + egui::vec2(center.x, center.y),
            diameter * 0.5,
            color32(color),
        );
    }
}

struct LetterParticles {
    sketch: Sketch,
    started: Instant,
    last_frame_time: Instant,
    step_time: Duration,
}

impl LetterParticles {
    fn new(config: FieldConfig) -> Self {
        let now = Instant::now();
        Self {
            sketch: Sketch::new(config),
            started: now,
            last_frame_time: now,
            step_time: Duration::ZERO,
        }
    }

    fn render_status_panel(&self, ui: &mut egui::Ui, frame_time: f32) {
        ui.label(format!("FPS: {:.3}", 1.0 / frame_time.max(f32::EPSILON)));
        ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
        ui.label(format!("Step Time: {:.3}ms", self.step_time.as_secs_f64() * 1000.0));
        ui.separator();
        let (width, height) = self.sketch.field().size();
        ui.label(format!("Canvas: {width:.0} x {height:.0}"));
        ui.label(format!("Grid Size: {}", self.sketch.config().grid_size));
        ui.label(format!("Particles: {}", self.sketch.field().len()));
        ui.label(format!("Path Points: {}", self.sketch.path().len()));
        ui.label(format!(
            "Last Letter: {}",
            self.sketch.last_letter().map_or("-", |letter| letter.as_str())
        ));
    }
}

impl eframe::App for LetterParticles {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_time = Instant::now();
        let frame_time = current_time.duration_since(self.last_frame_time);
        self.last_frame_time = current_time;

        egui::SidePanel::left("Status Panel").show(ctx, |ui| {
            self.render_status_panel(ui, frame_time.as_secs_f32());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
                self.sketch.resize(rect.width(), rect.height());

                let pointer = match response.interact_pointer_pos() {
                    Some(pos) if response.is_pointer_button_down_on() => {
                        PointerSample::pressed(vec2(pos.x - rect.min.x, pos.y - rect.min.y))
                    }
                    _ => PointerSample::idle(),
                };

                let painter = ui.painter_at(rect);
                let mut canvas = PainterCanvas {
                    painter: &painter,
                    origin: rect.min,
                };

                let start_step = Instant::now();
                self.sketch.tick(pointer, self.started.elapsed(), &mut canvas);
                self.step_time = start_step.elapsed();
            });

        ctx.request_repaint();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => FieldConfig::load(path)?,
        None => FieldConfig::default(),
    };
    info!(?config, "starting particle sketch");

    eframe::run_native(
        "Letter Particles",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Box::new(LetterParticles::new(config))),
    )
    .map_err(|e| Error::Ui(e.to_string()))
}
