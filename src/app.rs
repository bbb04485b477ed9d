use egui::{Context, Rect};

use crate::config::EditorConfig;
use crate::element::ElementKind;
use crate::export::{ExportJob, Exporter, save_png};
use crate::geometry::view_transform;
use crate::input::{EditCommand, InputHandler, InteractionController};
use crate::panels::{central_panel, inspector_panel, toolbar, tools_panel};
use crate::renderer::{self, DrawList};
use crate::scene::Scene;

/// Editor state owned by the UI thread
pub struct FigureApp {
    scene: Scene,
    controller: InteractionController,
    input_handler: InputHandler,
    exporter: Exporter,
    export_job: Option<ExportJob>,
    config: EditorConfig,
    show_grid: bool,
    status: Option<String>,
}

impl FigureApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    /// Build the editor without a window, e.g. for tests
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            controller: InteractionController::new(),
            input_handler: InputHandler::default(),
            exporter: Exporter::new(config.load_system_fonts),
            export_job: None,
            show_grid: config.show_grid,
            config,
            status: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Grid drawing and pointer snapping share one switch
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn set_show_grid(&mut self, show_grid: bool) {
        if self.show_grid != show_grid {
            log::info!("Grid {}", if show_grid { "on" } else { "off" });
        }
        self.show_grid = show_grid;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_exporting(&self) -> bool {
        self.export_job.is_some()
    }

    pub fn add_element(&mut self, kind: ElementKind) {
        self.scene.add_element(kind);
    }

    pub fn clear(&mut self) {
        self.scene.clear();
    }

    /// Draw list for the current frame, as shown on screen
    pub fn draw_list(&self) -> DrawList {
        renderer::render(
            self.scene.elements(),
            self.scene.selected_id(),
            self.show_grid,
        )
    }

    pub fn apply_command(&mut self, command: EditCommand) {
        log::debug!("Applying {command:?}");
        match command {
            EditCommand::DeleteSelected => {
                self.scene.remove_selected();
            }
            EditCommand::DuplicateSelected => {
                self.scene.duplicate_selected();
            }
            EditCommand::Deselect => self.scene.select(None),
        }
    }

    /// Start a PNG export of what is on screen now.
    /// Ignored while another export is still running.
    pub fn request_export(&mut self) {
        if self.export_job.is_some() {
            log::debug!("Export already running, ignoring request");
            return;
        }
        log::info!("Starting export of {} elements", self.scene.len());
        self.export_job = Some(self.exporter.spawn(self.draw_list()));
        self.status = Some("Exporting...".to_owned());
    }

    /// Pick up a finished export and save it
    pub fn poll_export(&mut self, ctx: &Context) {
        let Some(job) = &mut self.export_job else {
            return;
        };
        let Some(result) = job.try_finish() else {
            ctx.request_repaint();
            return;
        };
        self.export_job = None;

        let saved = result.and_then(|bytes| {
            save_png(
                &self.config.export_dir,
                &self.config.export_file_name,
                &bytes,
            )
        });
        self.status = Some(match saved {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    /// Route this frame's pointer and keyboard input to the scene.
    ///
    /// Args:
    ///     ctx: the egui context
    ///     canvas_rect: screen rect of the 1200×800 canvas
    ///     canvas_hovered: whether the canvas is the top-most widget under the pointer
    pub fn handle_input(&mut self, ctx: &Context, canvas_rect: Rect, canvas_hovered: bool) {
        self.input_handler.set_canvas_rect(canvas_rect);
        let view = view_transform(canvas_rect);
        let snap = self.show_grid;

        for event in self.input_handler.process_input(ctx, canvas_hovered) {
            if self
                .controller
                .handle_event(&mut self.scene, &event, &view, snap)
            {
                ctx.request_repaint();
            }
        }

        for command in self.input_handler.process_shortcuts(ctx) {
            self.apply_command(command);
        }
    }
}

impl eframe::App for FigureApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_export(ctx);

        toolbar(self, ctx);
        tools_panel(self, ctx);
        inspector_panel(self, ctx);
        central_panel(self, ctx);
    }
}
