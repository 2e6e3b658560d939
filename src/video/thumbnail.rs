use crate::core::PlaybackSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Static thumbnail shown; the player is preloaded underneath.
    Poster,
    /// Thumbnail hidden, player visible and interactive.
    Live,
}

/// Poster/live state machine for the inline player.
#[derive(Debug, Clone)]
pub struct ThumbnailGate {
    state: GateState,
}

impl ThumbnailGate {
    pub fn new() -> Self {
        Self { state: GateState::Poster }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_poster(&self) -> bool {
        self.state == GateState::Poster
    }

    /// Goes live the first time the session reports playback.
    pub fn observe(&mut self, session: &PlaybackSession) {
        if self.state == GateState::Poster && session.has_started {
            log::debug!("ThumbnailGate: poster -> live");
            self.state = GateState::Live;
        }
    }

    pub fn rearm(&mut self) {
        if self.state == GateState::Live {
            log::debug!("ThumbnailGate: live -> poster");
        }
        self.state = GateState::Poster;
    }
}

impl Default for ThumbnailGate {
    fn default() -> Self {
        Self::new()
    }
}
