//! Tests for neutral-pose calibration and head-to-cursor mapping

use eye_mouse::head_tracking::{CalibrationState, HeadTracker, TrackerUpdate, smooth_toward};

const SCREEN_W: f64 = 1920.0;
const SCREEN_H: f64 = 1080.0;

fn tracker(frames: u32, sens_x: f64, sens_y: f64, alpha: f64) -> HeadTracker {
    HeadTracker::new(frames, sens_x, sens_y, alpha, SCREEN_W, SCREEN_H)
}

#[test]
fn test_neutral_is_mean_of_calibration_window() {
    let mut t = tracker(30, 6.0, 8.0, 0.1);

    // 30 samples alternating around (0.48, 0.52)
    for i in 0..30 {
        let offset = if i % 2 == 0 { 0.02 } else { -0.02 };
        let update = t.update((0.48 + offset, 0.52 - offset));
        assert!(matches!(update, TrackerUpdate::Calibrating { .. }), "frame {i}");
    }

    match t.state() {
        CalibrationState::Tracking { neutral } => {
            assert!((neutral.0 - 0.48).abs() < 1e-9);
            assert!((neutral.1 - 0.52).abs() < 1e-9);
        }
        CalibrationState::Calibrating { .. } => panic!("should be tracking after 30 frames"),
    }
}

#[test]
fn test_calibration_progress_reporting() {
    let mut t = tracker(5, 6.0, 8.0, 0.1);
    for i in 1..=5u32 {
        match t.update((0.5, 0.5)) {
            TrackerUpdate::Calibrating { progress, total } => {
                assert_eq!(progress, i);
                assert_eq!(total, 5);
            }
            TrackerUpdate::Cursor { .. } => panic!("cursor emitted during calibration"),
        }
    }
    assert!(matches!(t.update((0.5, 0.5)), TrackerUpdate::Cursor { .. }));
}

#[test]
fn test_smoothing_single_step() {
    assert!((smooth_toward(500.0, 600.0, 0.1) - 510.0).abs() < 1e-9);
}

#[test]
fn test_delta_direction_matches_cursor_direction() {
    // alpha = 1.0 so the smoothed value equals the target
    let mut t = tracker(1, 2.0, 2.0, 1.0);
    t.update((0.5, 0.5));

    // Nose moved right and down; cursor goes right and down from center
    match t.update((0.6, 0.6)) {
        TrackerUpdate::Cursor { x, y } => {
            let expected_x = SCREEN_W / 2.0 + 0.1 * SCREEN_W * 2.0;
            let expected_y = SCREEN_H / 2.0 + 0.1 * SCREEN_H * 2.0;
            assert!((x - expected_x).abs() < 1e-9);
            assert!((y - expected_y).abs() < 1e-9);
        }
        TrackerUpdate::Calibrating { .. } => panic!("still calibrating"),
    }
}

#[test]
fn test_cursor_never_leaves_screen() {
    let mut t = tracker(1, 20.0, 20.0, 1.0);
    t.update((0.5, 0.5));

    let extremes = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)];
    for nose in extremes {
        match t.update(nose) {
            TrackerUpdate::Cursor { x, y } => {
                assert!((0.0..=SCREEN_W).contains(&x));
                assert!((0.0..=SCREEN_H).contains(&y));
            }
            TrackerUpdate::Calibrating { .. } => panic!("still calibrating"),
        }
    }
}

#[test]
fn test_smoothed_cursor_converges() {
    let mut t = tracker(1, 2.0, 2.0, 0.1);
    t.update((0.5, 0.5));

    // Hold the head at a fixed offset; the smoothed position approaches the
    // fixed target monotonically
    let target_x = SCREEN_W / 2.0 + 0.05 * SCREEN_W * 2.0;
    let mut last_gap = f64::INFINITY;
    for _ in 0..300 {
        if let TrackerUpdate::Cursor { x, .. } = t.update((0.55, 0.5)) {
            let gap = (target_x - x).abs();
            assert!(gap <= last_gap);
            last_gap = gap;
        }
    }
    assert!(last_gap < 1.0);
}
