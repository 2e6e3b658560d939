use crate::core::GestureConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapZone {
    Left,
    Center,
    Right,
}

impl TapZone {
    /// Maps a local x coordinate to a zone. Surfaces without seek zones are
    /// one big toggle area.
    pub fn classify(local_x: f32, surface_width: f32, seek_zone_fraction: f32, has_seek_zones: bool) -> Self {
        if !has_seek_zones || !(surface_width > 0.0) || !local_x.is_finite() {
            return TapZone::Center;
        }
        let edge = surface_width * seek_zone_fraction;
        if local_x < edge {
            TapZone::Left
        } else if local_x > surface_width - edge {
            TapZone::Right
        } else {
            TapZone::Center
        }
    }
}

/// Raw touch as delivered by the host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub zone: TapZone,
    pub timestamp_millis: u64,
    pub local_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Back,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Toggle,
    DoubleTap(SeekDirection),
    /// A single tap that landed inside the suppression window.
    Suppressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TapRecord {
    zone: TapZone,
    timestamp_millis: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SuppressionWindow {
    expires_at_millis: u64,
}

/// Tells single taps from double taps on one surface.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    double_tap_window_ms: u64,
    suppression_window_ms: u64,
    left: Option<TapRecord>,
    right: Option<TapRecord>,
    suppression: SuppressionWindow,
}

impl GestureInterpreter {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            double_tap_window_ms: config.double_tap_window_ms,
            suppression_window_ms: config.suppression_window_ms,
            left: None,
            right: None,
            suppression: SuppressionWindow::default(),
        }
    }

    pub fn on_tap(&mut self, zone: TapZone, now_millis: u64) -> TapOutcome {
        let direction = match zone {
            TapZone::Left => Some(SeekDirection::Back),
            TapZone::Right => Some(SeekDirection::Forward),
            TapZone::Center => None,
        };

        if let Some(direction) = direction {
            let window = self.double_tap_window_ms;
            let slot = self.record_slot(zone);
            let is_double = slot
                .as_ref()
                .is_some_and(|record| now_millis.saturating_sub(record.timestamp_millis) < window);

            if is_double {
                // Cleared so a third rapid tap starts a fresh pair
                *slot = None;
                self.mark_double_tap(now_millis);
                log::debug!("Double tap {:?} at {}ms", direction, now_millis);
                return TapOutcome::DoubleTap(direction);
            }

            *slot = Some(TapRecord { zone, timestamp_millis: now_millis });
        }

        self.single_tap(now_millis)
    }

    /// A toggle request outside of raw tap handling.
    pub fn single_tap(&self, now_millis: u64) -> TapOutcome {
        if self.is_suppressed(now_millis) {
            log::debug!("Toggle suppressed at {}ms (window until {}ms)",
                now_millis, self.suppression.expires_at_millis);
            TapOutcome::Suppressed
        } else {
            TapOutcome::Toggle
        }
    }

    pub fn mark_double_tap(&mut self, now_millis: u64) {
        self.suppression.expires_at_millis = now_millis.saturating_add(self.suppression_window_ms);
    }

    pub fn is_suppressed(&self, now_millis: u64) -> bool {
        now_millis < self.suppression.expires_at_millis
    }

    fn record_slot(&mut self, zone: TapZone) -> &mut Option<TapRecord> {
        match zone {
            TapZone::Left => &mut self.left,
            _ => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(&GestureConfig::default())
    }

    #[test]
    fn test_zone_classification() {
        assert_eq!(TapZone::classify(10.0, 400.0, 0.35, true), TapZone::Left);
        assert_eq!(TapZone::classify(200.0, 400.0, 0.35, true), TapZone::Center);
        assert_eq!(TapZone::classify(390.0, 400.0, 0.35, true), TapZone::Right);
        assert_eq!(TapZone::classify(10.0, 400.0, 0.35, false), TapZone::Center);
        assert_eq!(TapZone::classify(10.0, 0.0, 0.35, true), TapZone::Center);
    }

    #[test]
    fn test_center_tap_toggles() {
        let mut gestures = interpreter();
        assert_eq!(gestures.on_tap(TapZone::Center, 1_000), TapOutcome::Toggle);
        assert_eq!(gestures.on_tap(TapZone::Center, 1_100), TapOutcome::Toggle);
    }

    #[test]
    fn test_double_tap_within_window() {
        let mut gestures = interpreter();
        assert_eq!(gestures.on_tap(TapZone::Right, 1_000), TapOutcome::Toggle);
        assert_eq!(gestures.on_tap(TapZone::Right, 1_250), TapOutcome::DoubleTap(SeekDirection::Forward));

        let mut gestures = interpreter();
        gestures.on_tap(TapZone::Left, 1_000);
        assert_eq!(gestures.on_tap(TapZone::Left, 1_299), TapOutcome::DoubleTap(SeekDirection::Back));
    }

    #[test]
    fn test_slow_taps_are_independent_toggles() {
        let mut gestures = interpreter();
        assert_eq!(gestures.on_tap(TapZone::Right, 1_000), TapOutcome::Toggle);
        assert_eq!(gestures.on_tap(TapZone::Right, 1_300), TapOutcome::Toggle);
    }

    #[test]
    fn test_zones_keep_separate_records() {
        let mut gestures = interpreter();
        gestures.on_tap(TapZone::Left, 1_000);
        assert_eq!(gestures.on_tap(TapZone::Right, 1_100), TapOutcome::Toggle);
        assert_eq!(gestures.on_tap(TapZone::Left, 1_200), TapOutcome::DoubleTap(SeekDirection::Back));
    }

    #[test]
    fn test_toggle_suppressed_after_double_tap() {
        let mut gestures = interpreter();
        gestures.on_tap(TapZone::Right, 1_000);
        gestures.on_tap(TapZone::Right, 1_200);

        assert_eq!(gestures.on_tap(TapZone::Center, 1_300), TapOutcome::Suppressed);
        assert_eq!(gestures.on_tap(TapZone::Center, 1_549), TapOutcome::Suppressed);
        assert_eq!(gestures.on_tap(TapZone::Center, 1_550), TapOutcome::Toggle);
    }

    #[test]
    fn test_third_rapid_tap_starts_fresh_pair() {
        let mut gestures = interpreter();
        gestures.on_tap(TapZone::Right, 1_000);
        assert_eq!(gestures.on_tap(TapZone::Right, 1_100), TapOutcome::DoubleTap(SeekDirection::Forward));

        // Record was cleared, so this is a single tap inside the suppression window
        assert_eq!(gestures.on_tap(TapZone::Right, 1_200), TapOutcome::Suppressed);
        assert_eq!(gestures.on_tap(TapZone::Right, 1_300), TapOutcome::DoubleTap(SeekDirection::Forward));
    }

    #[test]
    fn test_interpreters_are_independent() {
        let mut inline = interpreter();
        let fullscreen = interpreter();
        inline.on_tap(TapZone::Left, 1_000);
        inline.on_tap(TapZone::Left, 1_100);

        assert!(inline.is_suppressed(1_200));
        assert!(!fullscreen.is_suppressed(1_200));
    }

    #[test]
    fn test_huge_suppression_window_saturates() {
        let config = GestureConfig { suppression_window_ms: u64::MAX, ..GestureConfig::default() };
        let mut gestures = GestureInterpreter::new(&config);
        gestures.mark_double_tap(5_000);

        assert!(gestures.is_suppressed(u64::MAX - 1));
    }
}
