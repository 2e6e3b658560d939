/// Natural pixel size reported by the player once media has loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalSize {
    pub width: f32,
    pub height: f32,
}

impl NaturalSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` when the size is degenerate.
    pub fn aspect_ratio(&self) -> Option<f32> {
        let ratio = self.width / self.height;
        if ratio.is_finite() && ratio > 0.0 {
            Some(ratio)
        } else {
            None
        }
    }
}

/// Everything the underlying player can tell us, already normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Loaded {
        duration_millis: u64,
        natural_size: Option<NaturalSize>,
    },
    StatusChanged {
        position_millis: u64,
        duration_millis: u64,
        is_playing: bool,
        is_muted: bool,
    },
    Finished,
}

/// Observed playback truth for one mounted player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSession {
    pub position_millis: u64,
    pub duration_millis: u64,
    pub is_playing: bool,
    pub is_muted: bool,
    /// True once playback has begun since the last reset.
    pub has_started: bool,
    pub aspect_ratio: Option<f32>,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, event: &PlayerEvent) -> Self {
        match event {
            PlayerEvent::Loaded { duration_millis, natural_size } => {
                self.duration_millis = *duration_millis;
                self.position_millis = self.clamp_position(self.position_millis);
                if let Some(ratio) = natural_size.and_then(|size| size.aspect_ratio()) {
                    self.aspect_ratio = Some(ratio);
                }
            }
            PlayerEvent::StatusChanged { position_millis, duration_millis, is_playing, is_muted } => {
                // Players report 0 while metadata is still in flight
                if *duration_millis > 0 {
                    self.duration_millis = *duration_millis;
                }
                self.position_millis = self.clamp_position(*position_millis);
                self.is_playing = *is_playing;
                self.is_muted = *is_muted;
                if *is_playing {
                    self.has_started = true;
                }
            }
            PlayerEvent::Finished => {
                self.position_millis = 0;
                self.is_playing = false;
                self.has_started = false;
            }
        }
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.duration_millis > 0
    }

    /// Fraction of the media played, for progress bar fill.
    pub fn progress(&self) -> f32 {
        if self.duration_millis == 0 {
            return 0.0;
        }
        (self.position_millis as f64 / self.duration_millis as f64).clamp(0.0, 1.0) as f32
    }

    fn clamp_position(&self, position_millis: u64) -> u64 {
        if self.duration_millis > 0 {
            position_millis.min(self.duration_millis)
        } else {
            0
        }
    }
}

/// Formats milliseconds as `m:ss` for time labels.
pub fn format_time(millis: u64) -> String {
    let total_seconds = millis / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
