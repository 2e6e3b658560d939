// =============================================================================
// PLAYER BACKEND - THE UNDERLYING PLAYER SDK
// =============================================================================
//
// One backend is one concrete player instance. Commands are asynchronous and
// fallible; status flows back through `poll_event`, which the controller
// drains once per UI frame. Raw status payloads are normalized here into
// `PlayerEvent`s before they reach the session reducer.
//
// =============================================================================

use async_trait::async_trait;
use crate::core::{AdapterError, NaturalSize, PlayerEvent};

/// Raw status snapshot as reported by a player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendStatus {
    pub is_loaded: bool,
    pub position_millis: u64,
    pub duration_millis: Option<u64>,
    pub is_playing: bool,
    pub is_muted: bool,
    pub did_just_finish: bool,
}

/// Pushed by a player whenever position, play state or load completion changes.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    Loaded {
        duration_millis: u64,
        natural_size: Option<NaturalSize>,
    },
    Status(BackendStatus),
}

impl BackendEvent {
    /// Returns `None` for statuses that carry no information yet (not loaded).
    pub fn normalize(self) -> Option<PlayerEvent> {
        match self {
            BackendEvent::Loaded { duration_millis, natural_size } => {
                Some(PlayerEvent::Loaded { duration_millis, natural_size })
            }
            BackendEvent::Status(status) => status.normalize(),
        }
    }
}

impl BackendStatus {
    pub fn normalize(self) -> Option<PlayerEvent> {
        if !self.is_loaded {
            return None;
        }
        if self.did_just_finish {
            return Some(PlayerEvent::Finished);
        }
        Some(PlayerEvent::StatusChanged {
            position_millis: self.position_millis,
            duration_millis: self.duration_millis.unwrap_or(0),
            is_playing: self.is_playing,
            is_muted: self.is_muted,
        })
    }
}

/// Uniform command surface over one underlying player instance.
#[async_trait(?Send)]
pub trait PlayerBackend {
    async fn load(&mut self, uri: &str) -> Result<(), AdapterError>;
    async fn play(&mut self) -> Result<(), AdapterError>;
    async fn pause(&mut self) -> Result<(), AdapterError>;
    async fn seek(&mut self, position_millis: u64) -> Result<(), AdapterError>;
    async fn set_muted(&mut self, muted: bool) -> Result<(), AdapterError>;
    async fn status(&mut self) -> Result<BackendStatus, AdapterError>;

    /// Next pending status callback, if any.
    fn poll_event(&mut self) -> Option<BackendEvent>;
}
