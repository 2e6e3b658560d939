// =============================================================================
// SIMULATED BACKEND
// =============================================================================
//
// In-process player with no decoder behind it. Position advances with the
// injected clock while playing, status is pushed on every command and then
// periodically, and reaching the end pushes a `did_just_finish` status.
//
// =============================================================================

use std::collections::VecDeque;
use std::rc::Rc;
use async_trait::async_trait;
use crate::core::{AdapterError, Clock, NaturalSize};
use crate::video::backend::{BackendEvent, BackendStatus, PlayerBackend};

const STATUS_INTERVAL_MS: u64 = 250;

/// What the simulated media "contains".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedMedia {
    pub duration_millis: u64,
    pub natural_size: NaturalSize,
}

pub struct SimulatedBackend {
    media: SimulatedMedia,
    clock: Rc<dyn Clock>,
    loaded: bool,
    playing: bool,
    muted: bool,
    // Position at `anchor_time`; while playing the position runs on from there
    anchor_position: u64,
    anchor_time: u64,
    last_status_at: u64,
    events: VecDeque<BackendEvent>,
}

impl SimulatedBackend {
    pub fn new(media: SimulatedMedia, clock: Rc<dyn Clock>) -> Self {
        Self {
            media,
            clock,
            loaded: false,
            playing: false,
            muted: false,
            anchor_position: 0,
            anchor_time: 0,
            last_status_at: 0,
            events: VecDeque::new(),
        }
    }

    fn position(&self) -> u64 {
        if self.playing {
            let elapsed = self.clock.now_millis().saturating_sub(self.anchor_time);
            (self.anchor_position + elapsed).min(self.media.duration_millis)
        } else {
            self.anchor_position
        }
    }

    fn reanchor(&mut self, position_millis: u64) {
        self.anchor_position = position_millis;
        self.anchor_time = self.clock.now_millis();
    }

    fn snapshot(&self, did_just_finish: bool) -> BackendStatus {
        BackendStatus {
            is_loaded: self.loaded,
            position_millis: self.position(),
            duration_millis: self.loaded.then_some(self.media.duration_millis),
            is_playing: self.playing,
            is_muted: self.muted,
            did_just_finish,
        }
    }

    fn push_status(&mut self) {
        self.last_status_at = self.clock.now_millis();
        let status = self.snapshot(false);
        self.events.push_back(BackendEvent::Status(status));
    }

    fn ensure_loaded(&self) -> Result<(), AdapterError> {
        if self.loaded {
            Ok(())
        } else {
            Err(AdapterError::NotLoaded)
        }
    }
}

#[async_trait(?Send)]
impl PlayerBackend for SimulatedBackend {
    async fn load(&mut self, uri: &str) -> Result<(), AdapterError> {
        if uri.trim().is_empty() {
            return Err(AdapterError::Codec("empty media uri".to_string()));
        }
        log::debug!("Simulated player loading {} ({}ms)", uri, self.media.duration_millis);
        self.loaded = true;
        self.playing = false;
        self.reanchor(0);
        self.events.push_back(BackendEvent::Loaded {
            duration_millis: self.media.duration_millis,
            natural_size: Some(self.media.natural_size),
        });
        Ok(())
    }

    async fn play(&mut self) -> Result<(), AdapterError> {
        self.ensure_loaded()?;
        if !self.playing {
            let position = self.position();
            self.reanchor(position);
            self.playing = true;
        }
        self.push_status();
        Ok(())
    }

    async fn pause(&mut self) -> Result<(), AdapterError> {
        self.ensure_loaded()?;
        let position = self.position();
        self.playing = false;
        self.reanchor(position);
        self.push_status();
        Ok(())
    }

    async fn seek(&mut self, position_millis: u64) -> Result<(), AdapterError> {
        self.ensure_loaded()?;
        if position_millis > self.media.duration_millis {
            return Err(AdapterError::SeekOutOfRange(position_millis));
        }
        self.reanchor(position_millis);
        self.push_status();
        Ok(())
    }

    async fn set_muted(&mut self, muted: bool) -> Result<(), AdapterError> {
        self.ensure_loaded()?;
        self.muted = muted;
        self.push_status();
        Ok(())
    }

    async fn status(&mut self) -> Result<BackendStatus, AdapterError> {
        Ok(self.snapshot(false))
    }

    fn poll_event(&mut self) -> Option<BackendEvent> {
        if let Some(event) = self.events.pop_front() {
            return Some(event);
        }
        if !self.loaded || !self.playing {
            return None;
        }

        let now = self.clock.now_millis();
        if self.position() >= self.media.duration_millis {
            self.playing = false;
            self.reanchor(0);
            self.last_status_at = now;
            let mut status = self.snapshot(true);
            status.position_millis = self.media.duration_millis;
            return Some(BackendEvent::Status(status));
        }

        if now.saturating_sub(self.last_status_at) >= STATUS_INTERVAL_MS {
            self.last_status_at = now;
            return Some(BackendEvent::Status(self.snapshot(false)));
        }
        None
    }
}
