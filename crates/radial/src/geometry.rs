use std::f64::consts::{FRAC_PI_2, TAU};

/// Slice 0 begins at 12 o'clock; slices proceed clockwise in screen space.
pub const START_OFFSET: f64 = -FRAC_PI_2;
/// Gap between the outer rim and the edge of the surface.
pub const MARGIN: f64 = 8.0;
/// Floor for the usable label width so wrapping never degenerates.
pub const MIN_TEXT_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Screen-space angle of `self` around `center`, in `(-PI, PI]`.
    pub fn angle_around(&self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }
}

/// Bounding rectangle of a surface in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn square(size: f64) -> Self {
        Self::new(0.0, 0.0, size, size)
    }
}

pub fn angle_per_slice(slice_count: usize) -> f64 {
    TAU / slice_count.max(1) as f64
}

pub fn start_angle(index: usize, slice_count: usize) -> f64 {
    index as f64 * angle_per_slice(slice_count) + START_OFFSET
}

pub fn slice_span(index: usize, slice_count: usize) -> (f64, f64) {
    let start = start_angle(index, slice_count);
    (start, start + angle_per_slice(slice_count))
}

pub fn mid_angle(index: usize, slice_count: usize) -> f64 {
    start_angle(index, slice_count) + angle_per_slice(slice_count) / 2.0
}

/// Maps an `atan2` result onto `[0, TAU)` measured clockwise from the top.
pub fn normalize_angle(theta: f64) -> f64 {
    let shifted = theta - START_OFFSET;
    if shifted < 0.0 {
        shifted + TAU
    } else {
        shifted
    }
}
