// Seek target math. Everything here is pure; the controller issues the result
// to the active adapter and waits for the status callback to confirm it.

use crate::video::gestures::SeekDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Grant,
    Move,
    Release,
}

#[derive(Debug, Clone, Copy)]
pub struct SeekController {
    step_millis: u64,
}

impl SeekController {
    pub fn new(step_millis: u64) -> Self {
        Self { step_millis }
    }

    /// Target for a double-tap seek, or `None` while the duration is unknown.
    pub fn relative_target(&self, position_millis: u64, duration_millis: u64, direction: SeekDirection) -> Option<u64> {
        if duration_millis == 0 {
            return None;
        }
        let target = match direction {
            SeekDirection::Back => position_millis.saturating_sub(self.step_millis),
            SeekDirection::Forward => position_millis.saturating_add(self.step_millis),
        };
        Some(target.min(duration_millis))
    }

    pub fn ratio_target(ratio: f32, duration_millis: u64) -> Option<u64> {
        if duration_millis == 0 || !ratio.is_finite() {
            return None;
        }
        let ratio = ratio.clamp(0.0, 1.0) as f64;
        Some(((ratio * duration_millis as f64).floor() as u64).min(duration_millis))
    }

    /// Target for a touch at `x` on a progress bar `bar_width` wide.
    pub fn drag_target(x: f32, bar_width: f32, duration_millis: u64) -> Option<u64> {
        if !(bar_width > 0.0) {
            return None;
        }
        Self::ratio_target(x / bar_width, duration_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_seek_clamps() {
        let seek = SeekController::new(10_000);
        assert_eq!(seek.relative_target(50_000, 120_000, SeekDirection::Forward), Some(60_000));
        assert_eq!(seek.relative_target(50_000, 120_000, SeekDirection::Back), Some(40_000));
        assert_eq!(seek.relative_target(115_000, 120_000, SeekDirection::Forward), Some(120_000));
        assert_eq!(seek.relative_target(4_000, 120_000, SeekDirection::Back), Some(0));
    }

    #[test]
    fn test_unknown_duration_is_noop() {
        let seek = SeekController::new(10_000);
        assert_eq!(seek.relative_target(0, 0, SeekDirection::Forward), None);
        assert_eq!(SeekController::ratio_target(0.5, 0), None);
        assert_eq!(SeekController::drag_target(10.0, 100.0, 0), None);
    }

    #[test]
    fn test_ratio_clamps_out_of_range() {
        assert_eq!(SeekController::ratio_target(-0.3, 90_000), Some(0));
        assert_eq!(SeekController::ratio_target(1.7, 90_000), Some(90_000));
        assert_eq!(SeekController::ratio_target(f32::NAN, 90_000), None);
    }

    #[test]
    fn test_ratio_round_trips_positions() {
        let duration = 120_000u64;
        for d in (0..=duration).step_by(997) {
            let target = SeekController::ratio_target(d as f32 / duration as f32, duration)
                .expect("duration is known");
            // f32 ratios lose a few millis at most
            assert!(target.abs_diff(d) <= 10, "d={} target={}", d, target);
        }
        assert_eq!(SeekController::ratio_target(1.0, duration), Some(duration));
    }

    #[test]
    fn test_drag_target_uses_bar_width() {
        assert_eq!(SeekController::drag_target(150.0, 300.0, 60_000), Some(30_000));
        assert_eq!(SeekController::drag_target(-20.0, 300.0, 60_000), Some(0));
        assert_eq!(SeekController::drag_target(320.0, 300.0, 60_000), Some(60_000));
        assert_eq!(SeekController::drag_target(150.0, 0.0, 60_000), None);
    }
}
