use dual_player::core::PlaybackSession;
use dual_player::video::{
    AdapterRole, DragPhase, GateState, MediaController, PlayerBackend, SeekDirection, TapZone,
    TouchEvent,
};

const BAR_HEIGHT: f32 = 12.0;

/// Something the user did this frame. Collected while drawing and applied to
/// the controller afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerIntent {
    BarLayout(AdapterRole, f32),
    Tap(AdapterRole, TouchEvent),
    Drag(f32, DragPhase),
    Toggle,
    DoubleTap(TapZone),
    ToggleMute,
    EnterFullscreen,
    ExitFullscreen,
}

/// Draws one player surface with its progress bar and control row.
pub struct PlayerView {
    role: AdapterRole,
    last_drag_x: Option<f32>,
}

impl PlayerView {
    pub fn new(role: AdapterRole) -> Self {
        Self { role, last_drag_x: None }
    }

    pub fn show<B: PlayerBackend>(
        &mut self,
        ui: &mut egui::Ui,
        controller: &MediaController<B>,
        height: f32,
        now_millis: u64,
        intents: &mut Vec<PlayerIntent>,
    ) {
        let Some(surface) = controller.surface(self.role) else {
            return;
        };
        let session = surface.session();
        let width = ui.available_width();

        let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
        let painter = ui.painter();
        painter.rect_filled(rect, egui::Rounding::same(6.0), egui::Color32::BLACK);

        let show_poster = self.role == AdapterRole::Inline && controller.gate_state() == GateState::Poster;
        if show_poster {
            painter.rect_filled(rect, egui::Rounding::same(6.0), egui::Color32::from_gray(40));
            let caption = controller.asset().thumbnail_uri.as_deref().unwrap_or("poster");
            painter.text(
                rect.center() + egui::vec2(0.0, 36.0),
                egui::Align2::CENTER_CENTER,
                caption,
                egui::FontId::proportional(12.0),
                egui::Color32::GRAY,
            );
        }

        let glyph = if session.is_playing { "⏸" } else { "▶" };
        if show_poster || !session.is_playing {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(36.0),
                egui::Color32::WHITE,
            );
        }

        if let Some(direction) = controller.seek_hint(self.role) {
            let (anchor, text) = match direction {
                SeekDirection::Back => (rect.left_center() + egui::vec2(60.0, 0.0), "-10s"),
                SeekDirection::Forward => (rect.right_center() - egui::vec2(60.0, 0.0), "+10s"),
            };
            painter.text(anchor, egui::Align2::CENTER_CENTER, text, egui::FontId::proportional(24.0), egui::Color32::WHITE);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local_x = pos.x - rect.min.x;
                let zone = TapZone::classify(
                    local_x,
                    rect.width(),
                    controller.config().gestures.seek_zone_fraction,
                    surface.has_seek_zones(),
                );
                intents.push(PlayerIntent::Tap(self.role, TouchEvent { zone, timestamp_millis: now_millis, local_x }));
            }
        }

        self.show_progress_bar(ui, session, intents);
        self.show_controls(ui, controller, session, intents);
    }

    fn show_progress_bar(&mut self, ui: &mut egui::Ui, session: &PlaybackSession, intents: &mut Vec<PlayerIntent>) {
        let width = ui.available_width();
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(width, BAR_HEIGHT),
            egui::Sense::click_and_drag(),
        );
        intents.push(PlayerIntent::BarLayout(self.role, rect.width()));

        let painter = ui.painter();
        painter.rect_filled(rect, egui::Rounding::same(3.0), ui.visuals().extreme_bg_color);
        let fill = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * session.progress(), rect.height()),
        );
        painter.rect_filled(fill, egui::Rounding::same(3.0), ui.visuals().selection.bg_fill);

        let pointer_x = response.interact_pointer_pos().map(|pos| pos.x - rect.min.x);
        if let Some(x) = pointer_x {
            self.last_drag_x = Some(x);
        }

        let phase = if response.drag_started() {
            Some(DragPhase::Grant)
        } else if response.drag_stopped() || response.clicked() {
            Some(DragPhase::Release)
        } else if response.dragged() {
            Some(DragPhase::Move)
        } else {
            None
        };

        if let (Some(phase), Some(x)) = (phase, pointer_x.or(self.last_drag_x)) {
            intents.push(PlayerIntent::Drag(x, phase));
        }
        if phase == Some(DragPhase::Release) {
            self.last_drag_x = None;
        }
    }

    fn show_controls<B: PlayerBackend>(
        &self,
        ui: &mut egui::Ui,
        controller: &MediaController<B>,
        session: &PlaybackSession,
        intents: &mut Vec<PlayerIntent>,
    ) {
        ui.horizontal(|ui| {
            if ui.button(if session.is_playing { "⏸" } else { "▶" }).clicked() {
                intents.push(PlayerIntent::Toggle);
            }
            if ui.button("⏪ -10s").clicked() {
                intents.push(PlayerIntent::DoubleTap(TapZone::Left));
            }
            if ui.button("10s ⏩").clicked() {
                intents.push(PlayerIntent::DoubleTap(TapZone::Right));
            }
            if ui.button(if session.is_muted { "🔇" } else { "🔊" }).clicked() {
                intents.push(PlayerIntent::ToggleMute);
            }

            let (position, duration) = controller.time_labels(self.role);
            ui.monospace(format!("{} / {}", position, duration));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.role {
                    AdapterRole::Inline => {
                        if ui.button("⛶ Fullscreen").clicked() {
                            intents.push(PlayerIntent::EnterFullscreen);
                        }
                    }
                    AdapterRole::Fullscreen => {
                        if ui.button("✖ Close").clicked() {
                            intents.push(PlayerIntent::ExitFullscreen);
                        }
                    }
                }
            });
        });
    }
}
