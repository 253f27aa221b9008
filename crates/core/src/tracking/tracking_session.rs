use crate::detection::domain::detection::Detection;
use crate::tracking::centroid_matcher::CentroidMatcher;
use crate::tracking::track_store::TrackStore;
use crate::tracking::tracked_object::TrackedObject;

/// Matcher plus track state for one source. Both the batch pipeline and
/// a streaming connection own exactly one of these; two sessions never
/// see each other's ids.
pub struct TrackingSession {
    matcher: CentroidMatcher,
    store: TrackStore,
}

impl TrackingSession {
    pub fn new() -> Self {
        Self {
            matcher: CentroidMatcher::new(),
            store: TrackStore::new(),
        }
    }

    /// Assigns ids to one frame's detections and folds them into the
    /// session state.
    pub fn submit_frame(&mut self, detections: &[Detection]) -> Vec<TrackedObject> {
        self.matcher.assign(detections, &mut self.store)
    }

    /// Forgets every track and restarts id numbering at 1.
    pub fn reset(&mut self) {
        self.store.clear();
    }

    pub fn track_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bounding_box::BoundingBox;

    fn det(x1: i32, y1: i32, x2: i32, y2: i32, label: &str) -> Detection {
        Detection::new(BoundingBox::new(x1, y1, x2, y2), label, 0.9)
    }

    #[test]
    fn test_identities_persist_across_frames() {
        let mut session = TrackingSession::new();

        // Frame 1: a car near (100, 100) and a person near (400, 400).
        let first = session.submit_frame(&[
            det(50, 50, 150, 150, "car"),
            det(350, 350, 450, 450, "person"),
        ]);
        // Frame 2: the car drifts, the person holds still, and a second
        // car appears far to the right.
        let second = session.submit_frame(&[
            det(70, 60, 170, 160, "car"),
            det(350, 350, 450, 450, "person"),
            det(750, 50, 850, 150, "car"),
        ]);

        let first_ids: Vec<u32> = first.iter().map(|o| o.id).collect();
        let second_ids: Vec<u32> = second.iter().map(|o| o.id).collect();
        assert_eq!(first_ids, vec![1, 2]);
        assert_eq!(second_ids, vec![1, 2, 3]);
        assert_eq!(session.track_count(), 3);
    }

    #[test]
    fn test_same_input_always_yields_same_ids() {
        let frames = [
            vec![det(0, 0, 60, 60, "car")],
            vec![det(20, 20, 80, 80, "car"), det(500, 0, 560, 60, "person")],
            vec![det(480, 0, 540, 60, "person")],
        ];

        let run = || {
            let mut session = TrackingSession::new();
            frames
                .iter()
                .flat_map(|f| session.submit_frame(f))
                .map(|o| o.id)
                .collect::<Vec<u32>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_small_shift_continues_large_shift_starts_over() {
        let mut session = TrackingSession::new();

        let first = session.submit_frame(&[det(0, 0, 10, 10, "car")]);
        // Centroid moves 5 px per axis: same car.
        let second = session.submit_frame(&[det(5, 5, 15, 15, "car")]);
        // Centroid jumps ~195 px: a different car.
        let third = session.submit_frame(&[det(200, 200, 210, 210, "car")]);

        assert_eq!(first[0].id, 1);
        assert_eq!(second[0].id, 1);
        assert_eq!(third[0].id, 2);
    }

    #[test]
    fn test_reset_restarts_ids_at_one() {
        let mut session = TrackingSession::new();
        session.submit_frame(&[det(0, 0, 10, 10, "car")]);
        session.submit_frame(&[det(500, 0, 510, 10, "car")]);
        assert_eq!(session.track_count(), 2);

        session.reset();

        assert_eq!(session.track_count(), 0);
        let objects = session.submit_frame(&[det(0, 0, 10, 10, "car")]);
        assert_eq!(objects[0].id, 1);
    }

    #[test]
    fn test_empty_frame_changes_nothing() {
        let mut session = TrackingSession::new();
        session.submit_frame(&[det(0, 0, 10, 10, "car")]);

        let objects = session.submit_frame(&[]);

        assert!(objects.is_empty());
        assert_eq!(session.track_count(), 1);
    }
}
