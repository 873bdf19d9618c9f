//! Press-drag-release tracking on the display surface.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{DisplayRect, Point};

/// Start and end of a drag, in display-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    pub start: Point,
    pub end: Point,
}

impl DragGesture {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The rectangle spanned by the gesture, normalized for drawing.
    pub fn display_rect(&self) -> DisplayRect {
        DisplayRect {
            x: self.start.x.min(self.end.x),
            y: self.start.y.min(self.end.y),
            width: self.start.x.abs_diff(self.end.x),
            height: self.start.y.abs_diff(self.end.y),
        }
    }
}

/// Tracks at most one in-progress drag.
///
/// A press while a drag is already active cancels that drag and starts a
/// new one at the new press point. Moves and releases without an active
/// drag are ignored.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<DragGesture>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `point`, replacing any gesture in progress.
    pub fn press(&mut self, point: Point) {
        if self.active.is_some() {
            trace!("drag: press while active, restarting at {point:?}");
        }
        self.active = Some(DragGesture::new(point, point));
    }

    /// Update the end point of the active gesture.
    ///
    /// Returns false if no gesture is in progress.
    pub fn move_to(&mut self, point: Point) -> bool {
        match self.active.as_mut() {
            Some(gesture) => {
                gesture.end = point;
                true
            }
            None => false,
        }
    }

    /// Finish the active gesture at `point` and return it.
    pub fn release(&mut self, point: Point) -> Option<DragGesture> {
        let mut gesture = self.active.take()?;
        gesture.end = point;
        trace!("drag: released {gesture:?}");
        Some(gesture)
    }

    /// Abandon the active gesture, if any.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            trace!("drag: cancelled");
        }
    }

    /// The gesture in progress.
    pub fn active(&self) -> Option<&DragGesture> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_move_release() {
        let mut tracker = DragTracker::new();
        tracker.press(Point::new(10, 20));
        assert!(tracker.move_to(Point::new(30, 40)));
        assert_eq!(tracker.active().unwrap().end, Point::new(30, 40));

        let gesture = tracker.release(Point::new(50, 60)).unwrap();
        assert_eq!(gesture.start, Point::new(10, 20));
        assert_eq!(gesture.end, Point::new(50, 60));
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = DragTracker::new();
        assert!(!tracker.move_to(Point::new(1, 1)));
        assert_eq!(tracker.release(Point::new(1, 1)), None);
    }

    #[test]
    fn test_second_press_restarts_gesture() {
        let mut tracker = DragTracker::new();
        tracker.press(Point::new(10, 10));
        tracker.move_to(Point::new(90, 90));
        tracker.press(Point::new(50, 50));

        let gesture = tracker.release(Point::new(60, 70)).unwrap();
        assert_eq!(gesture.start, Point::new(50, 50));
        assert_eq!(gesture.end, Point::new(60, 70));
    }

    #[test]
    fn test_cancel_drops_gesture() {
        let mut tracker = DragTracker::new();
        tracker.press(Point::new(10, 10));
        tracker.cancel();

        assert!(!tracker.is_active());
        assert_eq!(tracker.release(Point::new(20, 20)), None);
    }

    #[test]
    fn test_display_rect_is_normalized() {
        let gesture = DragGesture::new(Point::new(300, 200), Point::new(100, -20));
        let rect = gesture.display_rect();

        assert_eq!((rect.x, rect.y), (100, -20));
        assert_eq!((rect.width, rect.height), (200, 220));
    }
}
