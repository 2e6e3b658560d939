use dual_player::video::TapZone;
use super::player_view::PlayerIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    SeekBack,
    SeekForward,
    EnterFullscreen,
    ExitFullscreen,
    ToggleMute,
}

impl Shortcut {
    pub const ALL: [Shortcut; 6] = [
        Shortcut::TogglePlayback,
        Shortcut::SeekBack,
        Shortcut::SeekForward,
        Shortcut::EnterFullscreen,
        Shortcut::ExitFullscreen,
        Shortcut::ToggleMute,
    ];

    pub fn key(self) -> egui::Key {
        match self {
            Shortcut::TogglePlayback => egui::Key::Space,
            Shortcut::SeekBack => egui::Key::ArrowLeft,
            Shortcut::SeekForward => egui::Key::ArrowRight,
            Shortcut::EnterFullscreen => egui::Key::F,
            Shortcut::ExitFullscreen => egui::Key::Escape,
            Shortcut::ToggleMute => egui::Key::M,
        }
    }

    /// Keyboard seeks go through the same double-tap path as touch, so they
    /// show the hint and suppress a stray toggle.
    pub fn to_intent(self) -> PlayerIntent {
        match self {
            Shortcut::TogglePlayback => PlayerIntent::Toggle,
            Shortcut::SeekBack => PlayerIntent::DoubleTap(TapZone::Left),
            Shortcut::SeekForward => PlayerIntent::DoubleTap(TapZone::Right),
            Shortcut::EnterFullscreen => PlayerIntent::EnterFullscreen,
            Shortcut::ExitFullscreen => PlayerIntent::ExitFullscreen,
            Shortcut::ToggleMute => PlayerIntent::ToggleMute,
        }
    }
}

/// Shortcuts pressed since the last frame, in declaration order.
pub fn pressed(ctx: &egui::Context) -> Vec<PlayerIntent> {
    ctx.input(|input| {
        Shortcut::ALL
            .iter()
            .filter(|shortcut| input.key_pressed(shortcut.key()))
            .map(|shortcut| shortcut.to_intent())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_to_intent() {
        assert_eq!(Shortcut::TogglePlayback.to_intent(), PlayerIntent::Toggle);
        assert_eq!(Shortcut::SeekBack.to_intent(), PlayerIntent::DoubleTap(TapZone::Left));
        assert_eq!(Shortcut::SeekForward.to_intent(), PlayerIntent::DoubleTap(TapZone::Right));
        assert_eq!(Shortcut::EnterFullscreen.to_intent(), PlayerIntent::EnterFullscreen);
        assert_eq!(Shortcut::ExitFullscreen.to_intent(), PlayerIntent::ExitFullscreen);
        assert_eq!(Shortcut::ToggleMute.to_intent(), PlayerIntent::ToggleMute);
    }

    #[test]
    fn test_shortcut_keys_are_distinct() {
        for (i, a) in Shortcut::ALL.iter().enumerate() {
            for b in &Shortcut::ALL[i + 1..] {
                assert_ne!(a.key(), b.key(), "{:?} and {:?} share a key", a, b);
            }
        }
    }
}
