use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as `(x, y, w, h)` with `(x, y)` the top-left corner.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct BbBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BbBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> f32 {
        self.w
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> f32 {
        self.h
    }

    /// Returns the minimum x-coordinate of the bounding box.
    pub fn x_min(&self) -> f32 {
        self.x
    }

    /// The minimum y-coordinate of the bounding box.
    pub fn y_min(&self) -> f32 {
        self.y
    }

    /// Returns the maximum x-coordinate of the bounding box.
    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    /// The maximum y-coordinate of the bounding box.
    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f32 {
        self.x + self.w / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f32 {
        self.y + self.h / 2.
    }

    /// Returns the bounding box coordinates and size as `(x, y, w, h)`.
    pub fn xy_wh(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.w, self.h)
    }

    /// Returns the bounding box as a flat `[x, y, w, h]` array.
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.w, self.h]
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f32 {
        self.h * self.w
    }

    /// Width over height. Infinite or NaN for a zero-height box.
    pub fn aspect_ratio(&self) -> f32 {
        self.w / self.h
    }

    /// True when every coordinate is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0. && self.w == 0. && self.h == 0.
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &BbBox) -> f32 {
        let left = self.x_min().max(other.x_min());
        let right = self.x_max().min(other.x_max());
        let top = self.y_min().max(other.y_min());
        let bottom = self.y_max().min(other.y_max());
        (right - left).max(0.) * (bottom - top).max(0.)
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &BbBox) -> f32 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Checks if this bounding box completely contains another bounding box `other`.
    pub fn contains(&self, other: &BbBox) -> bool {
        self.x_min() <= other.x_min()
            && self.x_max() >= other.x_max()
            && self.y_min() <= other.y_min()
            && self.y_max() >= other.y_max()
    }

    pub fn as_xy_wh_i32(&self) -> (i32, i32, i32, i32) {
        (self.x.round() as i32,
         self.y.round() as i32,
         self.w.round() as i32,
         self.h.round() as i32)
    }

    /// Sets the bounding box's coordinates using `(x1, y1, x2, y2)` and calculates width and height.
    ///
    /// # Arguments
    ///
    /// * `x1` - The x-coordinate of the top-left corner.
    /// * `y1` - The y-coordinate of the top-left corner.
    /// * `x2` - The x-coordinate of the bottom-right corner.
    /// * `y2` - The y-coordinate of the bottom-right corner.
    pub fn with_x1y1_x2y2(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x = x1;
        self.y = y1;
        self.w = x2 - x1;
        self.h = y2 - y1;
        self
    }

    /// Sets the bounding box's coordinates and dimensions using `(cx, cy, w, h)`.
    ///
    /// # Arguments
    ///
    /// * `cx` - The x-coordinate of the horizontal center.
    /// * `cy` - The y-coordinate of the vertical center.
    /// * `w` - The width of the bounding box.
    /// * `h` - The height of the bounding box.
    pub fn with_cxcy_wh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x = cx - (w / 2.0);
        self.y = cy - (h / 2.0);
        self.w = w;
        self.h = h;
        self
    }
}

impl From<[f32; 4]> for BbBox {
    fn from(xywh: [f32; 4]) -> Self {
        Self::new(xywh[0], xywh[1], xywh[2], xywh[3])
    }
}

impl From<(f32, f32, f32, f32)> for BbBox {
    fn from((x, y, w, h): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, w, h)
    }
}
