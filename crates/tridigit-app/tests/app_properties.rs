//! Property-based tests for App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use proptest::prelude::*;
use tridigit_app::{
    App, AppAction, AppEvent, DIGIT_COUNT, EnvChange, EnvSample, KeyInput, Mode, SessionId,
    Viewport,
};

/// Generate random keyboard input, biased towards digits.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => proptest::char::range('0', '9').prop_map(KeyInput::Char),
        2 => any::<char>().prop_map(KeyInput::Char),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Enter),
    ]
}

fn sample_strategy() -> impl Strategy<Value = EnvSample> {
    let angle = prop_oneof![Just(0), Just(90), Just(180), Just(-180), Just(270), -720i32..720];
    (angle, 1.0f64..2000.0, 1.0f64..2000.0)
        .prop_map(|(angle, w, h)| EnvSample::new(angle, Viewport::new(w, h)))
}

/// Generate random app events. Ticks use small session ids so that both
/// current and stale sessions show up.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        8 => key_strategy().prop_map(AppEvent::Key),
        2 => "[0-9a-z]{0,5}".prop_map(AppEvent::Edit),
        1 => Just(AppEvent::Clear),
        1 => Just(AppEvent::Dismiss),
        1 => Just(AppEvent::Close),
        3 => (0u64..4).prop_map(|s| AppEvent::MirrorTick { session: SessionId(s) }),
        2 => sample_strategy()
            .prop_map(|sample| AppEvent::Environment { change: EnvChange::Resize, sample }),
        1 => Just(AppEvent::Redraw),
    ]
}

fn assert_invariants(app: &App) -> Result<(), TestCaseError> {
    match app.mode() {
        Mode::Input(buffer) => {
            prop_assert!(buffer.len() < DIGIT_COUNT, "full buffer must have been committed");
            prop_assert!(buffer.as_str().bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(app.flags().is_cleared());
            prop_assert!(app.transforms().is_empty());
            prop_assert_eq!(app.session(), None);
        },
        Mode::Showing(showing) => {
            prop_assert_eq!(showing.number.as_str().len(), DIGIT_COUNT);
            prop_assert_eq!(app.buffer(), "");
        },
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_app_invariants_hold(events in prop::collection::vec(event_strategy(), 0..80)) {
        let mut app = App::default();

        for event in events {
            let _ = app.handle(event);
            assert_invariants(&app)?;
        }
    }

    #[test]
    fn prop_start_and_stop_alternate(events in prop::collection::vec(event_strategy(), 0..80)) {
        let mut app = App::default();
        let mut open: Option<SessionId> = None;

        for event in events {
            for action in app.handle(event) {
                match action {
                    AppAction::StartDisplay { session } => {
                        prop_assert_eq!(open, None);
                        open = Some(session);
                    },
                    AppAction::StopDisplay { session } => {
                        prop_assert_eq!(open, Some(session));
                        open = None;
                    },
                    AppAction::Render | AppAction::FocusInput | AppAction::Quit => {},
                }
            }
            prop_assert_eq!(open, app.session());
        }
    }

    #[test]
    fn prop_third_digit_commits(digits in "[0-9]{3}") {
        let mut app = App::default();
        for c in digits.chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }

        let displayed = app.displayed().map(|n| n.to_string());
        prop_assert_eq!(displayed, Some(digits));
    }

    #[test]
    fn prop_mirror_tracks_tick_parity(ticks in 0usize..20) {
        let mut app = App::default();
        let _ = app.edit("500");
        let session = app.session();
        prop_assert!(session.is_some());

        for _ in 0..ticks {
            if let Some(session) = session {
                let _ = app.handle(AppEvent::MirrorTick { session });
            }
        }
        prop_assert_eq!(app.flags().mirrored, ticks % 2 == 1);

        let _ = app.dismiss();
        if let Some(session) = session {
            let actions = app.handle(AppEvent::MirrorTick { session });
            prop_assert!(actions.is_empty());
        }
        prop_assert!(!app.flags().mirrored);
    }

    #[test]
    fn prop_rejected_edit_keeps_buffer(prefix in "[0-9]{0,2}", bad in "[0-9]{0,3}[^0-9][0-9]{0,3}") {
        let mut app = App::default();
        let _ = app.edit(&prefix);

        let actions = app.edit(&bad);
        prop_assert!(actions.is_empty());
        prop_assert_eq!(app.buffer(), prefix.as_str());
    }
}
