//! Plan Sketch.
//!
//! Grundriss-Skizzierer mit Laser-Entfernungsmesser, Export und 3D-Vorschau.

use eframe::egui;
use plan_sketch::{ui, AppController, AppIntent, AppState, EditorOptions, MeasurementLink};
use std::time::Duration;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Plan Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 900.0])
                .with_title("Plan Sketch"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Plan Sketch",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    link: Option<MeasurementLink>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let link = match MeasurementLink::spawn(
            editor_options.link_address.clone(),
            Duration::from_millis(editor_options.link_reconnect_delay_ms),
        ) {
            Ok(link) => Some(link),
            Err(e) => {
                log::error!("Messverbindung konnte nicht gestartet werden: {:#}", e);
                None
            }
        };

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            link,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_link_events();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::PointerMoved { .. } | AppIntent::View3dViewportResized { .. }
            )
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_link_events(&mut self) -> Vec<AppIntent> {
        self.link
            .as_ref()
            .map(|link| {
                link.drain()
                    .into_iter()
                    .map(|event| AppIntent::LinkEventReceived { event })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::handle_file_dialogs(&mut self.state));
        events.extend(ui::show_error_dialog(ctx, &self.state.ui));
        events.extend(ui::show_view3d_window(ctx, &mut self.state));

        let scene = self.controller.build_render_scene(&self.state);
        events.extend(ui::render_canvas(ctx, &self.state, &scene));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        // Messungen kommen asynchron: Kanal regelmäßig leeren
        ctx.request_repaint_after(std::time::Duration::from_millis(100));

        if has_meaningful_events || self.state.ui.error_message.is_some() {
            ctx.request_repaint();
        }
    }
}
