use crate::config::Label;
use crate::geometry::{self, Point, Rect};
use crate::wheel::Wheel;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub label: Label,
}

impl Wheel {
    /// Slice under a surface-local point, or `None` outside the ring.
    pub fn hit_test(&self, local: Point) -> Option<usize> {
        let center = self.center();
        let r = local.distance_to(center);
        if !r.is_finite() || r < self.inner_radius() || r > self.outer_radius() {
            return None;
        }

        let theta = geometry::normalize_angle(local.angle_around(center));
        let index = (theta / self.angle_per_slice()).floor() as usize;
        Some(index.min(self.slice_count() - 1))
    }

    /// Maps a viewport point into surface coordinates. A surface displayed at
    /// a size other than its configured one is scaled back.
    pub fn to_local(&self, client: Point, bounds: Rect) -> Point {
        let size = self.config().size;
        let sx = if bounds.width > 0.0 {
            size / bounds.width
        } else {
            1.0
        };
        let sy = if bounds.height > 0.0 {
            size / bounds.height
        } else {
            1.0
        };
        Point::new((client.x - bounds.x) * sx, (client.y - bounds.y) * sy)
    }

    pub fn resolve_click(&self, client: Point, bounds: Rect) -> Option<Selection> {
        self.hit_test(self.to_local(client, bounds))
            .map(|index| self.selection(index))
    }

    pub fn selection(&self, index: usize) -> Selection {
        Selection {
            index,
            label: Label::new(self.label(index)),
        }
    }
}
