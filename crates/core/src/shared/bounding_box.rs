use serde::{Deserialize, Serialize};

/// Axis-aligned box in integer pixel coordinates, `x1 < x2`, `y1 < y2`.
///
/// Serializes as the 4-element array `[x1, y1, x2, y2]` used on the wire
/// and in detection logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        debug_assert!(x1 < x2 && y1 < y2, "box corners must be ordered");
        Self { x1, y1, x2, y2 }
    }

    pub fn centroid(&self) -> Centroid {
        Centroid {
            x: (self.x1 + self.x2) as f64 / 2.0,
            y: (self.y1 + self.y2) as f64 / 2.0,
        }
    }
}

impl From<[i32; 4]> for BoundingBox {
    fn from(corners: [i32; 4]) -> Self {
        Self::new(corners[0], corners[1], corners[2], corners[3])
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x1, bbox.y1, bbox.x2, bbox.y2]
    }
}

/// Geometric center of a box; the only spatial signal used for matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    /// True when both axis offsets to `other` are strictly inside `radius`.
    ///
    /// The match window is a square, not a circle: each axis is tested
    /// independently, and a point exactly `radius` away on either axis
    /// falls outside.
    pub fn is_within(&self, other: &Centroid, radius: f64) -> bool {
        (self.x - other.x).abs() < radius && (self.y - other.y).abs() < radius
    }
}
