// =============================================================================
// MEDIA CONTROLLER - INLINE AND FULLSCREEN PLAYBACK FOR ONE ASSET
// =============================================================================
//
// The host UI talks only to this type. It owns one `PlayerSurface` per
// mounted player (inline always, fullscreen while the modal is up) and routes
// gestures, drag seeks and handoff requests to whichever surface is active.
//
// FLOW:
// - gesture -> GestureInterpreter -> toggle | relative seek -> adapter
// - drag -> SeekController -> adapter.seek (no local position update)
// - pump() drains player callbacks -> session reducer -> dimensions / handoff
//
// Everything runs on the UI thread. Commands are awaited in place and the
// last one issued wins; nothing is queued or cancelled.
//
// =============================================================================

use std::rc::Rc;
use crate::core::{format_time, Clock, MediaAsset, PlaybackSession, PlayerConfig, PlayerEvent};
use crate::video::adapter::{AdapterRole, PlayerAdapter};
use crate::video::backend::PlayerBackend;
use crate::video::dimensions::{DimensionResolver, LayoutBounds, PresentationContext};
use crate::video::gestures::{GestureInterpreter, SeekDirection, TapOutcome, TapZone, TouchEvent};
use crate::video::handoff::{HandoffCoordinator, HandoffPhase};
use crate::video::seek::{DragPhase, SeekController};
use crate::video::thumbnail::GateState;

/// "+10s" / "-10s" overlay shown after a double-tap seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekHint {
    pub direction: SeekDirection,
    pub expires_at_millis: u64,
}

/// Per-player state: the adapter plus everything the host needs to draw it.
pub struct PlayerSurface<B: PlayerBackend> {
    adapter: PlayerAdapter<B>,
    gestures: GestureInterpreter,
    dimensions: DimensionResolver,
    bar_width: Option<f32>,
    has_seek_zones: bool,
    hint: Option<SeekHint>,
}

impl<B: PlayerBackend> PlayerSurface<B> {
    fn new(adapter: PlayerAdapter<B>, context: PresentationContext, has_seek_zones: bool, config: &PlayerConfig) -> Self {
        Self {
            adapter,
            gestures: GestureInterpreter::new(&config.gestures),
            dimensions: DimensionResolver::new(context, &config.layout),
            bar_width: None,
            has_seek_zones,
            hint: None,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        self.adapter.session()
    }

    pub fn height(&self) -> f32 {
        self.dimensions.height()
    }

    pub fn has_seek_zones(&self) -> bool {
        self.has_seek_zones
    }
}

pub struct MediaController<B: PlayerBackend> {
    asset: MediaAsset,
    config: PlayerConfig,
    clock: Rc<dyn Clock>,
    seek: SeekController,
    bounds: LayoutBounds,
    inline: PlayerSurface<B>,
    fullscreen: Option<PlayerSurface<B>>,
    handoff: HandoffCoordinator,
}

impl<B: PlayerBackend> MediaController<B> {
    pub fn new(asset: MediaAsset, inline_backend: B, config: PlayerConfig, clock: Rc<dyn Clock>) -> Self {
        let adapter = if asset.has_poster() {
            PlayerAdapter::gated(AdapterRole::Inline, inline_backend)
        } else {
            PlayerAdapter::new(AdapterRole::Inline, inline_backend)
        };
        let inline = PlayerSurface::new(
            adapter,
            PresentationContext::Inline,
            config.gestures.inline_seek_zones,
            &config,
        );

        Self {
            asset,
            seek: SeekController::new(config.gestures.seek_step_ms),
            config,
            clock,
            bounds: LayoutBounds { container_width: 0.0, screen_height: 0.0 },
            inline,
            fullscreen: None,
            handoff: HandoffCoordinator::new(),
        }
    }

    /// Starts loading the inline player. Call once after mount and layout.
    pub async fn load(&mut self) {
        log::info!("MediaController: loading {}", self.asset.uri);
        self.inline.adapter.load(&self.asset.uri).await;
    }

    /// Drains player callbacks. Call once per UI frame.
    pub async fn pump(&mut self) {
        for event in self.inline.adapter.pump() {
            if let PlayerEvent::Loaded { natural_size: Some(size), .. } = event {
                self.inline.dimensions.resolve(size, self.bounds);
            }
        }

        let Some(fullscreen) = self.fullscreen.as_mut() else {
            return;
        };
        for event in fullscreen.adapter.pump() {
            if let PlayerEvent::Loaded { natural_size, .. } = event {
                if let Some(size) = natural_size {
                    fullscreen.dimensions.resolve(size, self.bounds);
                }
                self.handoff.on_fullscreen_loaded(&mut fullscreen.adapter).await;
            }
        }
    }

    // =============================================================================
    // HOST LAYOUT
    // =============================================================================

    pub fn on_layout(&mut self, bounds: LayoutBounds) {
        self.bounds = bounds;
    }

    pub fn on_progress_bar_layout(&mut self, role: AdapterRole, width: f32) {
        if let Some(surface) = self.surface_mut(role) {
            surface.bar_width = (width.is_finite() && width > 0.0).then_some(width);
        }
    }

    // =============================================================================
    // GESTURES
    // =============================================================================

    /// Raw tap on the player surface of `role`. The tap is timed with the
    /// controller clock; `touch.timestamp_millis` is the host's own time base
    /// and is only logged.
    pub async fn handle_tap(&mut self, role: AdapterRole, touch: TouchEvent) {
        let now = self.clock.now_millis();
        let seek = self.seek;
        let hint_ms = self.config.gestures.hint_duration_ms;
        let Some(surface) = self.active_surface_mut(role) else {
            log::debug!("Ignoring tap on inactive {} player", role);
            return;
        };

        if surface.adapter.is_poster() {
            surface.adapter.play().await;
            return;
        }

        let zone = if surface.has_seek_zones { touch.zone } else { TapZone::Center };
        log::debug!("Tap {:?} on {} player (host time {}ms, clock {}ms)",
            zone, role, touch.timestamp_millis, now);
        match surface.gestures.on_tap(zone, now) {
            TapOutcome::Toggle => surface.adapter.toggle().await,
            TapOutcome::DoubleTap(direction) => {
                Self::relative_seek(surface, seek, direction, now.saturating_add(hint_ms)).await;
            }
            TapOutcome::Suppressed => {}
        }
    }

    /// Play/pause on the active player, honoring the suppression window.
    pub async fn request_toggle(&mut self) {
        let now = self.clock.now_millis();
        let Some(surface) = self.current_surface_mut() else {
            return;
        };

        if surface.adapter.is_poster() {
            surface.adapter.play().await;
            return;
        }
        if surface.gestures.single_tap(now) == TapOutcome::Toggle {
            surface.adapter.toggle().await;
        }
    }

    pub async fn request_double_tap(&mut self, zone: TapZone) {
        let direction = match zone {
            TapZone::Left => SeekDirection::Back,
            TapZone::Right => SeekDirection::Forward,
            TapZone::Center => return,
        };
        let now = self.clock.now_millis();
        let seek = self.seek;
        let hint_ms = self.config.gestures.hint_duration_ms;
        let Some(surface) = self.current_surface_mut() else {
            return;
        };

        surface.gestures.mark_double_tap(now);
        Self::relative_seek(surface, seek, direction, now.saturating_add(hint_ms)).await;
    }

    /// Seek to a fraction of the duration. Every phase issues a seek.
    pub async fn request_drag_seek(&mut self, ratio: f32, phase: DragPhase) {
        let Some(surface) = self.current_surface_mut() else {
            return;
        };
        let duration = surface.session().duration_millis;
        match SeekController::ratio_target(ratio, duration) {
            Some(target) => {
                log::debug!("Drag {:?} to {}ms", phase, target);
                surface.adapter.seek(target).await;
            }
            None => log::debug!("Drag seek unavailable (duration {}ms)", duration),
        }
    }

    /// Seek from a touch x-coordinate on the active progress bar.
    pub async fn request_drag_at(&mut self, x: f32, phase: DragPhase) {
        let Some(surface) = self.current_surface_mut() else {
            return;
        };
        let Some(width) = surface.bar_width else {
            log::debug!("Progress bar not laid out yet, ignoring drag");
            return;
        };
        if let Some(target) = SeekController::drag_target(x, width, surface.session().duration_millis) {
            log::debug!("Drag {:?} at x={:.1} to {}ms", phase, x, target);
            surface.adapter.seek(target).await;
        }
    }

    pub async fn request_toggle_mute(&mut self) {
        if let Some(surface) = self.current_surface_mut() {
            let muted = surface.session().is_muted;
            surface.adapter.set_muted(!muted).await;
        }
    }

    // =============================================================================
    // FULLSCREEN
    // =============================================================================

    /// Mounts `backend` as the fullscreen player and starts the handoff.
    pub async fn request_enter_fullscreen(&mut self, backend: B) {
        if self.handoff.is_active() {
            log::warn!("Fullscreen already mounted, ignoring request");
            return;
        }

        let adapter = PlayerAdapter::new(AdapterRole::Fullscreen, backend);
        let mut surface = PlayerSurface::new(
            adapter,
            PresentationContext::Standalone,
            self.config.gestures.fullscreen_seek_zones,
            &self.config,
        );
        self.handoff.enter(&mut self.inline.adapter, &mut surface.adapter, &self.asset.uri).await;
        self.fullscreen = Some(surface);
    }

    pub async fn request_exit_fullscreen(&mut self) {
        let fullscreen = self.fullscreen.as_mut().map(|surface| &mut surface.adapter);
        self.handoff.exit(fullscreen, &mut self.inline.adapter).await;
        self.fullscreen = None;
    }

    /// The host tore the modal down on its own; no further commands reach the
    /// fullscreen player and its pending callbacks are dropped.
    pub async fn fullscreen_unmounted(&mut self) {
        if self.fullscreen.take().is_some() {
            log::info!("Fullscreen player unmounted by host");
        }
        self.handoff.exit::<B>(None, &mut self.inline.adapter).await;
    }

    // =============================================================================
    // STATE QUERIES
    // =============================================================================

    pub fn asset(&self) -> &MediaAsset {
        &self.asset
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn session(&self, role: AdapterRole) -> Option<&PlaybackSession> {
        self.surface(role).map(PlayerSurface::session)
    }

    pub fn surface(&self, role: AdapterRole) -> Option<&PlayerSurface<B>> {
        match role {
            AdapterRole::Inline => Some(&self.inline),
            AdapterRole::Fullscreen => self.fullscreen.as_ref(),
        }
    }

    /// Poster or live. Assets without a thumbnail are always live.
    pub fn gate_state(&self) -> GateState {
        self.inline.adapter.gate_state().unwrap_or(GateState::Live)
    }

    pub fn render_height(&self, role: AdapterRole) -> Option<f32> {
        self.surface(role).map(PlayerSurface::height)
    }

    pub fn fullscreen_phase(&self) -> HandoffPhase {
        self.handoff.phase()
    }

    pub fn is_fullscreen_visible(&self) -> bool {
        self.handoff.is_visible()
    }

    /// The role that currently receives gestures.
    pub fn active_role(&self) -> AdapterRole {
        if self.handoff.is_active() {
            AdapterRole::Fullscreen
        } else {
            AdapterRole::Inline
        }
    }

    pub fn seek_hint(&self, role: AdapterRole) -> Option<SeekDirection> {
        let now = self.clock.now_millis();
        self.surface(role)
            .and_then(|surface| surface.hint)
            .filter(|hint| now < hint.expires_at_millis)
            .map(|hint| hint.direction)
    }

    /// Loaded duration, or the content store's hint before load.
    pub fn display_duration_millis(&self, role: AdapterRole) -> u64 {
        let loaded = self.session(role).map_or(0, |session| session.duration_millis);
        if loaded > 0 {
            loaded
        } else {
            self.asset.duration_hint_millis.unwrap_or(0)
        }
    }

    pub fn time_labels(&self, role: AdapterRole) -> (String, String) {
        let position = self.session(role).map_or(0, |session| session.position_millis);
        (format_time(position), format_time(self.display_duration_millis(role)))
    }

    // =============================================================================
    // HELPERS
    // =============================================================================

    async fn relative_seek(surface: &mut PlayerSurface<B>, seek: SeekController, direction: SeekDirection, hint_expires_at: u64) {
        let session = surface.session();
        let Some(target) = seek.relative_target(session.position_millis, session.duration_millis, direction) else {
            log::debug!("Relative seek unavailable, duration unknown");
            return;
        };
        surface.hint = Some(SeekHint { direction, expires_at_millis: hint_expires_at });
        surface.adapter.seek(target).await;
    }

    fn surface_mut(&mut self, role: AdapterRole) -> Option<&mut PlayerSurface<B>> {
        match role {
            AdapterRole::Inline => Some(&mut self.inline),
            AdapterRole::Fullscreen => self.fullscreen.as_mut(),
        }
    }

    /// The surface of `role` if it currently accepts input. Inline is covered
    /// while fullscreen is mounted, and fullscreen ignores input until revealed.
    fn active_surface_mut(&mut self, role: AdapterRole) -> Option<&mut PlayerSurface<B>> {
        let accepting = match role {
            AdapterRole::Inline => !self.handoff.is_active(),
            AdapterRole::Fullscreen => self.handoff.is_visible(),
        };
        if accepting {
            self.surface_mut(role)
        } else {
            None
        }
    }

    fn current_surface_mut(&mut self) -> Option<&mut PlayerSurface<B>> {
        let role = self.active_role();
        self.active_surface_mut(role)
    }
}
