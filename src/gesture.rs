// src/gesture.rs
use crate::lightbox::Direction;
use crate::site_config::GestureLimits;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal swipes only: the horizontal travel has to dominate and exceed
/// `min_distance`. Swiping right goes back, swiping left goes forward.
pub fn classify_swipe(dx: f64, dy: f64, min_distance: f64) -> Option<Direction> {
    if dx.abs() > dy.abs() && dx.abs() > min_distance {
        if dx > 0.0 {
            Some(Direction::Prev)
        } else {
            Some(Direction::Next)
        }
    } else {
        None
    }
}

/// Follows one touch sequence on the lightbox container.
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
    last: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn begin(&mut self, point: TouchPoint) {
        self.start = Some(point);
        // A touch that never moves ends where it started.
        self.last = Some(point);
    }

    pub fn moved(&mut self, point: TouchPoint) {
        if self.start.is_some() {
            self.last = Some(point);
        }
    }

    pub fn finish(&mut self, min_distance: f64) -> Option<Direction> {
        let start = self.start.take()?;
        let end = self.last.take()?;
        classify_swipe(end.x - start.x, end.y - start.y, min_distance)
    }
}

/// Tells a quick tap on a gallery item apart from the start of a scroll.
#[derive(Debug, Default, Clone)]
pub struct TapTracker {
    start: Option<(TouchPoint, f64)>,
}

impl TapTracker {
    pub fn begin(&mut self, point: TouchPoint, at_ms: f64) {
        self.start = Some((point, at_ms));
    }

    pub fn finish(&mut self, point: TouchPoint, at_ms: f64, limits: &GestureLimits) -> bool {
        let Some((start, started_at)) = self.start.take() else {
            return false;
        };
        at_ms - started_at < limits.max_tap_duration_ms
            && (point.x - start.x).abs() < limits.max_tap_movement
            && (point.y - start.y).abs() < limits.max_tap_movement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_swipe() {
        assert_eq!(classify_swipe(80.0, 10.0, 50.0), Some(Direction::Prev));
        assert_eq!(classify_swipe(-80.0, 10.0, 50.0), Some(Direction::Next));
        // mostly vertical
        assert_eq!(classify_swipe(60.0, 90.0, 50.0), None);
        // too short
        assert_eq!(classify_swipe(50.0, 0.0, 50.0), None);
    }

    #[test]
    fn test_swipe_tracker() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(TouchPoint::new(300.0, 200.0));
        tracker.moved(TouchPoint::new(250.0, 205.0));
        tracker.moved(TouchPoint::new(180.0, 210.0));
        assert_eq!(tracker.finish(50.0), Some(Direction::Next));

        // the sequence was consumed
        assert_eq!(tracker.finish(50.0), None);
    }

    #[test]
    fn test_stationary_touch_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(TouchPoint::new(300.0, 200.0));
        assert_eq!(tracker.finish(50.0), None);
    }

    #[test]
    fn test_tap_tracker() {
        let limits = GestureLimits::default();
        let mut tap = TapTracker::default();

        tap.begin(TouchPoint::new(10.0, 10.0), 1_000.0);
        assert!(tap.finish(TouchPoint::new(14.0, 12.0), 1_150.0, &limits));

        tap.begin(TouchPoint::new(10.0, 10.0), 1_000.0);
        assert!(!tap.finish(TouchPoint::new(10.0, 10.0), 1_300.0, &limits));

        tap.begin(TouchPoint::new(10.0, 10.0), 1_000.0);
        assert!(!tap.finish(TouchPoint::new(10.0, 25.0), 1_050.0, &limits));

        assert!(!tap.finish(TouchPoint::new(10.0, 10.0), 1_050.0, &limits));
    }
}
