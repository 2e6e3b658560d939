#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use dual_player::core::{ManualClock, PlayerConfig};
    use dual_player::video::{AdapterRole, DragPhase, GateState, HandoffPhase, LayoutBounds};
    use crate::gui::app::{demo_asset, demo_media, FeedPlayerApp};
    use crate::gui::player_view::PlayerIntent;

    const PHONE: LayoutBounds = LayoutBounds { container_width: 390.0, screen_height: 844.0 };

    // Test helper to create a headless app on a hand-driven clock
    fn create_test_app() -> (FeedPlayerApp, ManualClock) {
        let clock = ManualClock::new(50_000);
        let mut app = FeedPlayerApp::with_clock(PlayerConfig::default(), Rc::new(clock.clone()))
            .expect("app");
        app.tick(PHONE);
        (app, clock)
    }

    fn inline_position(app: &FeedPlayerApp) -> u64 {
        app.controller()
            .session(AdapterRole::Inline)
            .map(|session| session.position_millis)
            .unwrap_or_default()
    }

    #[test]
    fn test_demo_asset_matches_media() {
        let asset = demo_asset();
        assert!(asset.has_poster());
        assert_eq!(asset.duration_hint_millis, Some(demo_media().duration_millis));
    }

    #[test]
    fn test_first_tick_loads_and_sizes_inline() {
        let (app, _clock) = create_test_app();
        let height = app.controller().render_height(AdapterRole::Inline).expect("inline height");
        // 1920x1080 at 390 wide, inside the landscape clamp
        assert!((height - 219.375).abs() < 1e-3);
        assert_eq!(app.controller().gate_state(), GateState::Poster);
    }

    #[test]
    fn test_toggle_intent_starts_playback_and_lifts_poster() {
        let (mut app, clock) = create_test_app();
        app.dispatch(vec![PlayerIntent::Toggle]);
        app.tick(PHONE);
        assert_eq!(app.controller().gate_state(), GateState::Live);

        clock.advance(1_000);
        app.tick(PHONE);
        assert_eq!(inline_position(&app), 1_000);
    }

    #[test]
    fn test_fullscreen_round_trip_keeps_position() {
        let (mut app, clock) = create_test_app();
        app.dispatch(vec![PlayerIntent::Toggle]);
        app.tick(PHONE);
        clock.advance(4_000);
        app.tick(PHONE);

        app.dispatch(vec![PlayerIntent::EnterFullscreen]);
        assert!(matches!(app.controller().fullscreen_phase(), HandoffPhase::Priming { .. }));
        app.tick(PHONE);
        assert_eq!(app.controller().fullscreen_phase(), HandoffPhase::Visible);
        // Seek and mute callbacks from the reveal arrive on the next frame
        app.tick(PHONE);
        assert_eq!(
            app.controller().session(AdapterRole::Fullscreen).map(|s| s.position_millis),
            Some(4_000)
        );

        app.dispatch(vec![PlayerIntent::Toggle]);
        clock.advance(2_000);
        app.tick(PHONE);

        app.dispatch(vec![PlayerIntent::ExitFullscreen]);
        app.tick(PHONE);
        assert_eq!(app.controller().fullscreen_phase(), HandoffPhase::Hidden);
        assert_eq!(inline_position(&app), 6_000);
    }

    #[test]
    fn test_drag_intents_seek_inline() {
        let (mut app, _clock) = create_test_app();
        app.dispatch(vec![
            PlayerIntent::BarLayout(AdapterRole::Inline, 400.0),
            PlayerIntent::Drag(100.0, DragPhase::Grant),
            PlayerIntent::Drag(200.0, DragPhase::Release),
        ]);
        app.tick(PHONE);
        assert_eq!(inline_position(&app), 60_000);
    }
}
