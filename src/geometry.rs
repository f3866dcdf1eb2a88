/// An axis-aligned rectangle with its position at the top-left corner.
/// Used transiently for the walls and the paddle hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Circle-vs-rectangle overlap test.
///
/// Early-outs on the per-axis center distance, accepts when the circle
/// center projects onto the rectangle's horizontal or vertical strip,
/// and otherwise compares the squared distance to the nearest corner.
/// All arithmetic is done in f64 so the corner term cannot underflow.
pub fn intersects(cx: f64, cy: f64, radius: u32, rect: &Rect) -> bool {
    let r = f64::from(radius);
    let half_w = f64::from(rect.width) / 2.0;
    let half_h = f64::from(rect.height) / 2.0;

    let cdx = (cx - (f64::from(rect.x) + half_w)).abs();
    let cdy = (cy - (f64::from(rect.y) + half_h)).abs();

    if cdx > half_w + r || cdy > half_h + r {
        return false;
    }
    if cdx <= half_w || cdy <= half_h {
        return true;
    }

    let corner_sq = (cdx - half_w).powi(2) + (cdy - half_h).powi(2);
    corner_sq <= r * r
}
