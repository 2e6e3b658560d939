use std::rc::Rc;
use eframe::egui;
use dual_player::core::{Clock, MediaAsset, NaturalSize, PlayerConfig, SystemClock};
use dual_player::video::{
    AdapterRole, HandoffPhase, LayoutBounds, MediaController, SimulatedBackend, SimulatedMedia,
};
use super::player_view::{PlayerIntent, PlayerView};
use super::shortcuts;

const FEED_CARD_MAX_WIDTH: f32 = 480.0;

/// The post shown in the feed.
pub fn demo_asset() -> MediaAsset {
    MediaAsset::new("sim://feed/post-1.mp4")
        .with_thumbnail("sim://feed/post-1.jpg")
        .with_duration_hint(120_000)
}

pub fn demo_media() -> SimulatedMedia {
    SimulatedMedia {
        duration_millis: 120_000,
        natural_size: NaturalSize::new(1920.0, 1080.0),
    }
}

pub struct FeedPlayerApp {
    controller: MediaController<SimulatedBackend>,
    runtime: tokio::runtime::Runtime,
    clock: Rc<dyn Clock>,
    media: SimulatedMedia,
    inline_view: PlayerView,
    fullscreen_view: PlayerView,
    loaded: bool,
    status_message: String,
}

impl FeedPlayerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PlayerConfig) -> anyhow::Result<Self> {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::WHITE);
        cc.egui_ctx.set_visuals(visuals);

        Self::with_clock(config, Rc::new(SystemClock::new()))
    }

    /// Builds the app without a window, driven by `clock`.
    pub fn with_clock(config: PlayerConfig, clock: Rc<dyn Clock>) -> anyhow::Result<Self> {
        // Controller futures are !Send; everything runs on the UI thread
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        let media = demo_media();
        let asset = demo_asset();
        log::info!("Opening feed post {}", asset.uri);

        let inline_backend = SimulatedBackend::new(media, clock.clone());
        let controller = MediaController::new(asset, inline_backend, config, clock.clone());

        Ok(Self {
            controller,
            runtime,
            clock,
            media,
            inline_view: PlayerView::new(AdapterRole::Inline),
            fullscreen_view: PlayerView::new(AdapterRole::Fullscreen),
            loaded: false,
            status_message: String::new(),
        })
    }

    pub fn controller(&self) -> &MediaController<SimulatedBackend> {
        &self.controller
    }

    /// Loads on first use, then drains pending player events.
    pub fn tick(&mut self, bounds: LayoutBounds) {
        self.controller.on_layout(bounds);
        if !self.loaded {
            self.runtime.block_on(self.controller.load());
            self.loaded = true;
        }
        self.runtime.block_on(self.controller.pump());
    }

    pub fn dispatch(&mut self, intents: Vec<PlayerIntent>) {
        let controller = &mut self.controller;
        for intent in intents {
            match intent {
                PlayerIntent::BarLayout(role, width) => controller.on_progress_bar_layout(role, width),
                PlayerIntent::Tap(role, touch) => self.runtime.block_on(controller.handle_tap(role, touch)),
                PlayerIntent::Drag(x, phase) => self.runtime.block_on(controller.request_drag_at(x, phase)),
                PlayerIntent::Toggle => self.runtime.block_on(controller.request_toggle()),
                PlayerIntent::DoubleTap(zone) => self.runtime.block_on(controller.request_double_tap(zone)),
                PlayerIntent::ToggleMute => self.runtime.block_on(controller.request_toggle_mute()),
                PlayerIntent::EnterFullscreen => {
                    if controller.fullscreen_phase() == HandoffPhase::Hidden {
                        let backend = SimulatedBackend::new(self.media, self.clock.clone());
                        self.runtime.block_on(controller.request_enter_fullscreen(backend));
                        self.status_message = "Entered fullscreen".to_string();
                    }
                }
                PlayerIntent::ExitFullscreen => {
                    if controller.fullscreen_phase() != HandoffPhase::Hidden {
                        self.runtime.block_on(controller.request_exit_fullscreen());
                        self.status_message = "Back to feed".to_string();
                    }
                }
            }
        }
    }

    fn show_feed(&mut self, ui: &mut egui::Ui, intents: &mut Vec<PlayerIntent>) {
        let now = self.clock.now_millis();
        let height = self
            .controller
            .render_height(AdapterRole::Inline)
            .unwrap_or(self.controller.config().layout.default_height);

        ui.vertical_centered(|ui| {
            ui.set_max_width(FEED_CARD_MAX_WIDTH);
            ui.heading("Feed");
            ui.add_space(8.0);
            self.inline_view.show(ui, &self.controller, height, now, intents);
            ui.add_space(8.0);
            ui.label(&self.controller.asset().uri);
        });
    }

    fn show_fullscreen(&mut self, ui: &mut egui::Ui, intents: &mut Vec<PlayerIntent>) {
        match self.controller.fullscreen_phase() {
            HandoffPhase::Priming { .. } => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            }
            HandoffPhase::Visible => {
                let now = self.clock.now_millis();
                let height = self
                    .controller
                    .render_height(AdapterRole::Fullscreen)
                    .unwrap_or(ui.available_height() * 0.8);
                self.fullscreen_view.show(ui, &self.controller, height, now, intents);
            }
            HandoffPhase::Hidden => {}
        }
    }
}

impl eframe::App for FeedPlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        self.tick(LayoutBounds {
            container_width: screen.width().min(FEED_CARD_MAX_WIDTH),
            screen_height: screen.height(),
        });

        let mut intents = shortcuts::pressed(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    if ui.button("Fullscreen").clicked() {
                        intents.push(PlayerIntent::EnterFullscreen);
                        ui.close_menu();
                    }
                    if ui.button("Toggle Mute").clicked() {
                        intents.push(PlayerIntent::ToggleMute);
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.fullscreen_phase() == HandoffPhase::Hidden {
                self.show_feed(ui, &mut intents);
            } else {
                self.show_fullscreen(ui, &mut intents);
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.status_message.is_empty() {
                    ui.label("Ready");
                } else {
                    ui.label(&self.status_message);
                }
                ui.separator();
                ui.label(format!("Active: {}", self.controller.active_role()));
            });
        });

        self.dispatch(intents);

        ctx.request_repaint();
    }
}
