use crate::shared::bounding_box::Centroid;

/// One persistent identity: the issued id, its class, and the centroid of
/// its most recent matched detection.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: u32,
    pub label: String,
    pub centroid: Centroid,
}

/// The live tracks of one session.
///
/// Ids start at 1, only grow, and are never handed out twice while the
/// store lives; `clear` starts the numbering over. Tracks are never
/// evicted, so a long session accumulates every identity it has issued —
/// that growth is the intended resource profile, not a leak to patch.
///
/// Iteration order is insertion order, which is ascending id. The
/// matcher's first-match rule depends on this order being stable.
pub struct TrackStore {
    tracks: Vec<Track>,
    next_id: u32,
}

impl TrackStore {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 1,
        }
    }

    /// Issues the next id and inserts a track for it.
    pub fn allocate(&mut self, label: &str, centroid: Centroid) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tracks.push(Track {
            id,
            label: label.to_string(),
            centroid,
        });
        id
    }

    /// Tracks in insertion order (ascending id).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Track> {
        self.tracks.iter_mut()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Drops all tracks and restarts id numbering at 1.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.next_id = 1;
    }
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}
