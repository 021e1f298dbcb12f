//! Tests for distance-from-camera classification and edge-triggered reporting

use eye_mouse::proximity::{classify, ProximityMonitor, Zone};

const TOO_FAR: f64 = 70.0;
const TOO_CLOSE: f64 = 150.0;

#[test]
fn test_zone_classification() {
    assert_eq!(classify(200.0, TOO_FAR, TOO_CLOSE), Zone::TooClose);
    assert_eq!(classify(50.0, TOO_FAR, TOO_CLOSE), Zone::TooFar);
    assert_eq!(classify(100.0, TOO_FAR, TOO_CLOSE), Zone::Ok);
}

#[test]
fn test_message_fires_only_on_change() {
    let mut monitor = ProximityMonitor::new(TOO_FAR, TOO_CLOSE);

    let frames = [
        (100.0, Some(Zone::Ok)),
        (101.0, None),
        (99.0, None),
        (200.0, Some(Zone::TooClose)),
        (198.0, None),
        (60.0, Some(Zone::TooFar)),
        (60.0, None),
        (100.0, Some(Zone::Ok)),
    ];

    for (distance, expected) in frames {
        assert_eq!(monitor.update(distance), expected, "distance {distance}");
    }
}

#[test]
fn test_status_text_per_zone() {
    assert!(Zone::TooClose.status_text().contains("back"));
    assert!(Zone::TooFar.status_text().contains("closer"));
    assert!(!Zone::Ok.status_text().is_empty());
    assert!(Zone::Unknown.status_text().is_empty());
}

#[test]
fn test_oscillation_reports_every_transition() {
    // No hysteresis beyond the two thresholds: rapid oscillation across a
    // threshold reports on every frame
    let mut monitor = ProximityMonitor::new(TOO_FAR, TOO_CLOSE);
    monitor.update(100.0);

    assert_eq!(monitor.update(151.0), Some(Zone::TooClose));
    assert_eq!(monitor.update(149.0), Some(Zone::Ok));
    assert_eq!(monitor.update(151.0), Some(Zone::TooClose));
}
