use std::fmt;
use crate::core::{PlaybackSession, PlayerEvent};
use crate::video::backend::PlayerBackend;
use crate::video::thumbnail::{GateState, ThumbnailGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterRole {
    Inline,
    Fullscreen,
}

impl fmt::Display for AdapterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterRole::Inline => write!(f, "inline"),
            AdapterRole::Fullscreen => write!(f, "fullscreen"),
        }
    }
}

/// Wraps one backend and owns its `PlaybackSession`.
///
/// Command failures stop here: they are logged and the session is left alone,
/// since the next status callback reports ground truth anyway.
pub struct PlayerAdapter<B: PlayerBackend> {
    role: AdapterRole,
    backend: B,
    session: PlaybackSession,
    gate: Option<ThumbnailGate>,
}

impl<B: PlayerBackend> PlayerAdapter<B> {
    pub fn new(role: AdapterRole, backend: B) -> Self {
        Self {
            role,
            backend,
            session: PlaybackSession::new(),
            gate: None,
        }
    }

    /// An adapter whose surface starts behind a poster image.
    pub fn gated(role: AdapterRole, backend: B) -> Self {
        Self {
            gate: Some(ThumbnailGate::new()),
            ..Self::new(role, backend)
        }
    }

    pub fn role(&self) -> AdapterRole {
        self.role
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn gate_state(&self) -> Option<GateState> {
        self.gate.as_ref().map(ThumbnailGate::state)
    }

    pub fn is_poster(&self) -> bool {
        self.gate.as_ref().is_some_and(ThumbnailGate::is_poster)
    }

    // =============================================================================
    // COMMANDS
    // =============================================================================

    pub async fn load(&mut self, uri: &str) {
        log::info!("{} player: loading {}", self.role, uri);
        if let Err(e) = self.backend.load(uri).await {
            log::warn!("{} player: load failed: {}", self.role, e);
        }
    }

    pub async fn play(&mut self) {
        log::debug!("{} player: play from {}ms", self.role, self.session.position_millis);
        if let Err(e) = self.backend.play().await {
            log::warn!("{} player: play failed: {}", self.role, e);
        }
    }

    pub async fn pause(&mut self) {
        log::debug!("{} player: pause", self.role);
        if let Err(e) = self.backend.pause().await {
            log::warn!("{} player: pause failed: {}", self.role, e);
        }
    }

    /// Issues the seek without touching the local position; the next status
    /// callback confirms it.
    pub async fn seek(&mut self, position_millis: u64) {
        log::debug!("{} player: seek to {}ms", self.role, position_millis);
        if let Err(e) = self.backend.seek(position_millis).await {
            log::warn!("{} player: seek to {}ms failed: {}", self.role, position_millis, e);
        }
    }

    pub async fn set_muted(&mut self, muted: bool) {
        log::debug!("{} player: set muted {}", self.role, muted);
        if let Err(e) = self.backend.set_muted(muted).await {
            log::warn!("{} player: set muted failed: {}", self.role, e);
        }
    }

    pub async fn toggle(&mut self) {
        if self.session.is_playing {
            self.pause().await;
        } else {
            self.play().await;
        }
    }

    /// Reads fresh status from the player, falling back to the cached session
    /// when the read fails.
    pub async fn query_status(&mut self) -> PlaybackSession {
        match self.backend.status().await {
            Ok(status) => {
                if let Some(event) = status.normalize() {
                    self.apply(&event);
                }
            }
            Err(e) => {
                log::warn!("{} player: status read failed, using cached position {}ms: {}",
                    self.role, self.session.position_millis, e);
            }
        }
        self.session.clone()
    }

    // =============================================================================
    // STATUS CALLBACKS
    // =============================================================================

    /// Drains pending callbacks from the player into the session and returns
    /// the events that were applied, in order.
    pub fn pump(&mut self) -> Vec<PlayerEvent> {
        let mut applied = Vec::new();
        while let Some(raw) = self.backend.poll_event() {
            if let Some(event) = raw.normalize() {
                self.apply(&event);
                applied.push(event);
            }
        }
        applied
    }

    pub fn apply(&mut self, event: &PlayerEvent) {
        self.session = std::mem::take(&mut self.session).reduce(event);

        if let Some(gate) = self.gate.as_mut() {
            if matches!(event, PlayerEvent::Finished) {
                gate.rearm();
            }
            gate.observe(&self.session);
        }

        if matches!(event, PlayerEvent::Finished) {
            log::info!("{} player: reached end of media", self.role);
        }
    }
}
