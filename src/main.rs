//! Asteroid Map Viewer.
//!
//! Interaktiver 2D-Betrachter für prozedural generierte Asteroiden-Welten.
//! Zeichnet auf der CPU (tiny-skia) und zeigt das Bild über egui an.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use asteroid_map_viewer::app::frame_pacer::POWER_SAVER_INTERVAL_S;
use asteroid_map_viewer::app::use_cases::screenshot;
use asteroid_map_viewer::app::FramePacer;
use asteroid_map_viewer::core::SeedBundle;
use asteroid_map_viewer::render::{AssetLoader, AssetSource};
use asteroid_map_viewer::source::{FileSeedSource, HttpSeedSource};
use asteroid_map_viewer::{
    decode_bundle, ui, AppController, AppIntent, AppState, InteractionState, Location, Renderer,
    SeedSource, SessionError, ViewerOptions,
};
use clap::Parser;
use eframe::egui;
use glam::Vec2;

/// Kommandozeile
#[derive(Debug, Parser)]
#[command(name = "asteroid-map-viewer", version, about = "Asteroid map viewer")]
struct Cli {
    /// Seed-Koordinate oder vollständige Betrachter-URL
    #[arg(long)]
    coord: Option<String>,
    /// Asteroid im Bundle (ID, ohne Groß-/Kleinschreibung)
    #[arg(long)]
    asteroid: Option<String>,
    /// Screenshot als PNG schreiben und beenden
    #[arg(long)]
    screenshot: Option<PathBuf>,
    /// Lokales Bundle (CBOR oder JSON) statt Abruf
    #[arg(long)]
    bundle: Option<PathBuf>,
    /// Optionen-Datei
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Aufgelöste Startparameter.
struct Launch {
    coord: String,
    asteroid: Option<String>,
    source: Box<dyn SeedSource + Send>,
}

impl Launch {
    fn resolve(cli: &Cli, options: &ViewerOptions) -> Self {
        let location = cli
            .coord
            .as_deref()
            .map(Location::parse)
            .unwrap_or_default();
        let coord = location
            .coord
            .unwrap_or_else(|| options.default_coord.clone());
        let asteroid = cli.asteroid.clone().or(location.asteroid);
        let source: Box<dyn SeedSource + Send> = match &cli.bundle {
            Some(path) => Box::new(FileSeedSource::new(path.clone())),
            None => Box::new(HttpSeedSource::new(options.api_base_url.clone())),
        };
        Self {
            coord,
            asteroid,
            source,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Asteroid Map Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(ViewerOptions::config_path);
    let options = ViewerOptions::load_from_file(&config_path);
    let launch = Launch::resolve(&cli, &options);

    match &cli.screenshot {
        Some(path) => run_screenshot(options, launch, path),
        None => AppRunner::run(options, launch),
    }
}

/// Lädt den Seed, rendert den ganzen Asteroiden und schreibt ein PNG.
fn run_screenshot(options: ViewerOptions, launch: Launch, path: &std::path::Path) -> anyhow::Result<()> {
    let asset_source = AssetSource::from_path(options.assets_dir.as_deref());
    let mut renderer = Renderer::with_loader(&options, AssetLoader::blocking(asset_source))
        .context("Renderer konnte nicht erstellt werden")?;
    let mut state = AppState::with_options(options);
    let mut controller = AppController::with_seed_source(launch.source);

    controller.handle_intent(
        &mut state,
        AppIntent::SeedRequested {
            coord: launch.coord.clone(),
            asteroid: launch.asteroid,
        },
    )?;
    let batch = renderer.request_assets(state.session.take_pending_assets());
    controller.handle_intent(&mut state, AppIntent::AssetsArrived { icons: batch.icons })?;

    let image = screenshot::capture(&mut state, &mut renderer)?;
    screenshot::save_png(&image, path)?;
    log::info!(
        "Screenshot von {} geschrieben: {} ({}x{})",
        launch.coord,
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

type FetchResult = Result<SeedBundle, SessionError>;

fn spawn_fetch(source: Box<dyn SeedSource + Send>, coord: String) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("seed_fetch".to_string())
        .spawn({
            let tx = tx.clone();
            move || {
                let result = source.fetch(&coord).and_then(|bytes| {
                    log::info!("Seed {} abgerufen: {} Bytes", coord, bytes.len());
                    decode_bundle(&bytes)
                });
                let _ = tx.send(result);
            }
        });
    if let Err(e) = spawned {
        let _ = tx.send(Err(SessionError::Fetch(format!("Abruf-Thread: {e}"))));
    }
    rx
}

struct AppRunner;

impl AppRunner {
    fn run(options: ViewerOptions, launch: Launch) -> anyhow::Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Asteroid Map Viewer"),
            vsync: options.vsync,
            ..Default::default()
        };

        eframe::run_native(
            "Asteroid Map Viewer",
            native_options,
            Box::new(move |_cc| {
                let app = ViewerApp::new(options, launch)?;
                Ok(Box::new(app))
            }),
        )
        .map_err(|e| anyhow::anyhow!("Fenster konnte nicht geöffnet werden: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    renderer: Renderer,
    interaction: InteractionState,
    input: ui::InputCollector,
    pacer: FramePacer,
    frame: ui::FrameTexture,
    fetch: Option<(Receiver<FetchResult>, String, Option<String>)>,
}

impl ViewerApp {
    fn new(options: ViewerOptions, launch: Launch) -> anyhow::Result<Self> {
        let renderer = Renderer::new(&options).context("Renderer konnte nicht erstellt werden")?;
        let mut state = AppState::with_options(options);
        state.session.coord = launch.coord.clone();

        let fetch = spawn_fetch(launch.source, launch.coord.clone());
        Ok(Self {
            state,
            controller: AppController::new(),
            renderer,
            interaction: InteractionState::new(),
            input: ui::InputCollector::new(),
            pacer: FramePacer::new(),
            frame: ui::FrameTexture::new(),
            fetch: Some((fetch, launch.coord, launch.asteroid)),
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.poll_background();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let viewport = Vec2::new(rect.width(), rect.height());
                let input = self.input.collect(ctx, viewport);

                events.extend(self.interaction.update(&self.state, &input));
                self.process_events(events);
                self.sync_assets();

                self.controller
                    .tick(&mut self.state, &mut self.renderer, input.time);

                let redraw = self.state.view.take_redraw();
                let power_saver = self.state.view.display.power_saver;
                if self.pacer.should_compose(&input, power_saver, redraw) {
                    self.compose(ctx);
                }
                self.frame.paint(ui, rect);

                self.maybe_request_repaint(ctx, input.has_user_input());
            });
    }
}

impl ViewerApp {
    /// Ergebnisse von Seed-Abruf und Asset-Thread als Intents.
    fn poll_background(&mut self) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if let Some((rx, coord, asteroid)) = &self.fetch {
            match rx.try_recv() {
                Ok(Ok(bundle)) => {
                    events.push(AppIntent::BundleReceived {
                        coord: coord.clone(),
                        bundle: Arc::new(bundle),
                        asteroid: asteroid.clone(),
                    });
                    self.fetch = None;
                }
                Ok(Err(e)) => {
                    events.push(AppIntent::SeedFailed {
                        message: e.to_string(),
                    });
                    self.fetch = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => self.fetch = None,
            }
        }

        let batch = self.renderer.drain_assets();
        if batch.changed() {
            events.push(AppIntent::AssetsArrived { icons: batch.icons });
        }
        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Reicht neu benötigte Assets an den Loader weiter.
    fn sync_assets(&mut self) {
        let pending = self.state.session.take_pending_assets();
        if pending.is_empty() {
            return;
        }
        let batch = self.renderer.request_assets(pending);
        if batch.changed() {
            self.process_events(vec![AppIntent::AssetsArrived { icons: batch.icons }]);
        }
    }

    fn compose(&mut self, ctx: &egui::Context) {
        let scene = self.controller.build_render_scene(&self.state);
        match self.renderer.render(&scene) {
            Ok(canvas) => self.frame.upload(ctx, &canvas),
            Err(e) => log::error!("Frame konnte nicht komponiert werden: {:#}", e),
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_input: bool) {
        let busy = self.fetch.is_some()
            || self.renderer.assets_in_flight() > 0
            || self.state.view.screenshot.pending > 0
            || self.state.view.redraw_requested;
        if !self.state.view.display.power_saver || has_input || busy {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_secs_f64(POWER_SAVER_INTERVAL_S));
        }
    }
}
