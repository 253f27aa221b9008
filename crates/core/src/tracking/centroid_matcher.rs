use crate::detection::domain::detection::Detection;
use crate::shared::constants::MATCH_RADIUS;
use crate::tracking::track_store::TrackStore;
use crate::tracking::tracked_object::TrackedObject;

/// Greedy nearest-window matcher. Each detection takes the first live
/// track of the same class whose stored centroid lies strictly within
/// the match window on both axes; no candidate means a fresh id.
///
/// Tracks are scanned in insertion order and matching a track updates
/// its stored centroid to the detection's, so the comparison point is
/// always the latest sighting, not an average. A matched track stays
/// eligible for later detections in the same frame; two close same-class
/// detections therefore collapse onto one id.
pub struct CentroidMatcher {
    radius: f64,
}

impl CentroidMatcher {
    pub fn new() -> Self {
        Self {
            radius: MATCH_RADIUS,
        }
    }

    pub fn with_radius(radius: f64) -> Self {
        Self { radius }
    }

    /// Assigns ids to one frame's detections, in detector order.
    pub fn assign(&self, detections: &[Detection], store: &mut TrackStore) -> Vec<TrackedObject> {
        detections
            .iter()
            .map(|detection| {
                let centroid = detection.bbox.centroid();
                let matched = store
                    .iter_mut()
                    .find(|track| {
                        track.label == detection.label
                            && track.centroid.is_within(&centroid, self.radius)
                    })
                    .map(|track| {
                        track.centroid = centroid;
                        track.id
                    });
                let id = match matched {
                    Some(id) => id,
                    None => store.allocate(&detection.label, centroid),
                };
                TrackedObject::new(id, detection)
            })
            .collect()
    }
}

impl Default for CentroidMatcher {
    fn default() -> Self {
        Self::new()
    }
}
