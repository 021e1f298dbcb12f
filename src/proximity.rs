//! Distance-from-camera classification from the inter-iris pixel distance.
//!
//! A larger distance between the two iris centers means the face is closer
//! to the camera. The monitor is edge-triggered: it reports a zone only on
//! the frame where the classification changes, so the overlay is not flooded
//! with identical status text.

/// Distance-from-camera zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// No classification emitted yet
    Unknown,
    /// Face closer than the configured upper threshold allows
    TooClose,
    /// Face farther than the configured lower threshold allows
    TooFar,
    /// Face within the working range
    Ok,
}

impl Zone {
    /// Status text shown on the preview for this zone
    #[must_use]
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::TooClose => "Move back from the camera",
            Self::TooFar => "Move closer to the camera",
            Self::Ok => "Distance OK",
        }
    }
}

/// Classify an inter-iris distance against the configured thresholds.
///
/// Values exactly at a threshold fall to `Ok`.
#[must_use]
pub fn classify(iris_distance: f64, too_far: f64, too_close: f64) -> Zone {
    if iris_distance > too_close {
        Zone::TooClose
    } else if iris_distance < too_far {
        Zone::TooFar
    } else {
        Zone::Ok
    }
}

/// Edge-triggered zone monitor
pub struct ProximityMonitor {
    too_far: f64,
    too_close: f64,
    last_zone: Zone,
}

impl ProximityMonitor {
    /// Create a monitor; `too_far` must be below `too_close`
    #[must_use]
    pub const fn new(too_far: f64, too_close: f64) -> Self {
        Self {
            too_far,
            too_close,
            last_zone: Zone::Unknown,
        }
    }

    /// Feed one frame's iris distance; returns the new zone only when it
    /// differs from the last reported one.
    pub fn update(&mut self, iris_distance: f64) -> Option<Zone> {
        let zone = classify(iris_distance, self.too_far, self.too_close);
        if zone == self.last_zone {
            None
        } else {
            self.last_zone = zone;
            Some(zone)
        }
    }

    /// The most recently reported zone
    #[must_use]
    pub const fn current_zone(&self) -> Zone {
        self.last_zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(classify(200.0, 70.0, 150.0), Zone::TooClose);
        assert_eq!(classify(50.0, 70.0, 150.0), Zone::TooFar);
        assert_eq!(classify(100.0, 70.0, 150.0), Zone::Ok);
    }

    #[test]
    fn test_threshold_values_fall_to_ok() {
        assert_eq!(classify(150.0, 70.0, 150.0), Zone::Ok);
        assert_eq!(classify(70.0, 70.0, 150.0), Zone::Ok);
    }

    #[test]
    fn test_edge_triggered_reporting() {
        let mut monitor = ProximityMonitor::new(70.0, 150.0);

        // First frame always reports (Unknown -> Ok)
        assert_eq!(monitor.update(100.0), Some(Zone::Ok));
        // Same zone again: silent
        assert_eq!(monitor.update(110.0), None);
        assert_eq!(monitor.update(95.0), None);
        // Transition reports once
        assert_eq!(monitor.update(200.0), Some(Zone::TooClose));
        assert_eq!(monitor.update(210.0), None);
        // And back
        assert_eq!(monitor.update(50.0), Some(Zone::TooFar));
        assert_eq!(monitor.update(100.0), Some(Zone::Ok));
    }

    #[test]
    fn test_current_zone_tracks_last_report() {
        let mut monitor = ProximityMonitor::new(70.0, 150.0);
        assert_eq!(monitor.current_zone(), Zone::Unknown);
        monitor.update(200.0);
        assert_eq!(monitor.current_zone(), Zone::TooClose);
        monitor.update(205.0);
        assert_eq!(monitor.current_zone(), Zone::TooClose);
    }
}
