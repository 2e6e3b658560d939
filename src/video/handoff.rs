// =============================================================================
// HANDOFF - INLINE <-> FULLSCREEN
// =============================================================================
//
// The two adapters are independent players, so fullscreen is an explicit
// protocol rather than a shared instance:
//
// ENTER: pause inline -> read inline position -> load fullscreen ->
//        (on load) seek fullscreen to the captured position -> reveal
// EXIT:  read fullscreen position -> pause fullscreen -> seek inline -> hide
//
// The source is always paused before the destination can play, so two
// instances never produce audio at once.
//
// =============================================================================

use crate::video::adapter::PlayerAdapter;
use crate::video::backend::PlayerBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffPhase {
    Hidden,
    /// Fullscreen is mounted and loading; not yet shown.
    Priming {
        captured_position_millis: u64,
        captured_muted: bool,
    },
    Visible,
}

#[derive(Debug, Clone)]
pub struct HandoffCoordinator {
    phase: HandoffPhase,
}

impl HandoffCoordinator {
    pub fn new() -> Self {
        Self { phase: HandoffPhase::Hidden }
    }

    pub fn phase(&self) -> HandoffPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == HandoffPhase::Visible
    }

    pub fn is_active(&self) -> bool {
        self.phase != HandoffPhase::Hidden
    }

    pub async fn enter<B: PlayerBackend>(
        &mut self,
        inline: &mut PlayerAdapter<B>,
        fullscreen: &mut PlayerAdapter<B>,
        uri: &str,
    ) {
        if self.is_active() {
            log::warn!("Fullscreen requested while already {:?}", self.phase);
            return;
        }

        inline.pause().await;
        let snapshot = inline.query_status().await;
        log::info!("Entering fullscreen at {}ms", snapshot.position_millis);

        self.phase = HandoffPhase::Priming {
            captured_position_millis: snapshot.position_millis,
            captured_muted: snapshot.is_muted,
        };
        fullscreen.load(uri).await;
    }

    /// Primes the fullscreen player once it reports `Loaded`. Playback does
    /// not start on its own.
    pub async fn on_fullscreen_loaded<B: PlayerBackend>(&mut self, fullscreen: &mut PlayerAdapter<B>) {
        let HandoffPhase::Priming { captured_position_millis, captured_muted } = self.phase else {
            return;
        };

        fullscreen.seek(captured_position_millis).await;
        fullscreen.set_muted(captured_muted).await;
        self.phase = HandoffPhase::Visible;
        log::info!("Fullscreen revealed at {}ms", captured_position_millis);
    }

    /// `fullscreen` is `None` when the host already tore the modal down; the
    /// inline position is then left alone rather than guessed.
    pub async fn exit<B: PlayerBackend>(
        &mut self,
        fullscreen: Option<&mut PlayerAdapter<B>>,
        inline: &mut PlayerAdapter<B>,
    ) {
        let phase = self.phase;
        self.phase = HandoffPhase::Hidden;

        let Some(fullscreen) = fullscreen else {
            if phase != HandoffPhase::Hidden {
                log::warn!("Fullscreen already unmounted, keeping inline position {}ms",
                    inline.session().position_millis);
            }
            return;
        };

        let (position_millis, muted) = match phase {
            HandoffPhase::Hidden => return,
            // Never got as far as seeking; what we captured is still the truth
            HandoffPhase::Priming { captured_position_millis, captured_muted } => {
                (captured_position_millis, captured_muted)
            }
            HandoffPhase::Visible => {
                let snapshot = fullscreen.query_status().await;
                (snapshot.position_millis, snapshot.is_muted)
            }
        };

        fullscreen.pause().await;
        inline.seek(position_millis).await;
        inline.set_muted(muted).await;
        log::info!("Exited fullscreen at {}ms", position_millis);
    }
}

impl Default for HandoffCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
