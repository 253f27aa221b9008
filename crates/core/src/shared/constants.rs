/// Half-width of the square window used for centroid continuity matching.
/// Both axes are tested with strict less-than; exactly this many pixels
/// away is a new object.
pub const MATCH_RADIUS: f64 = 50.0;

/// Hard cap on frames read per batch analysis job.
pub const BATCH_FRAME_CAP: usize = 300;

/// Detection and tracking run on every Nth frame read; the rest are
/// discarded without advancing tracking state.
pub const DETECTION_STRIDE: usize = 3;

/// Response-size cap on tracking history entries. Analytics are computed
/// before this truncation applies.
pub const HISTORY_LIMIT: usize = 100;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
