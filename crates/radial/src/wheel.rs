use crate::config::{Color, WheelConfig};
use crate::geometry::{self, MARGIN, MIN_TEXT_WIDTH, Point};

/// A configured wheel with its derived geometry. Immutable; build a new one
/// to change anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    config: WheelConfig,
    slice_count: usize,
    center: Point,
    outer_radius: f64,
}

impl Wheel {
    pub fn new(config: WheelConfig) -> Self {
        let half = config.size / 2.0;
        Self {
            slice_count: config.slice_count(),
            center: Point::new(half, half),
            outer_radius: (half - MARGIN).max(0.0),
            config,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.config.inner_radius
    }

    pub fn angle_per_slice(&self) -> f64 {
        geometry::angle_per_slice(self.slice_count)
    }

    pub fn slice_span(&self, index: usize) -> (f64, f64) {
        geometry::slice_span(index, self.slice_count)
    }

    pub fn mid_angle(&self, index: usize) -> f64 {
        geometry::mid_angle(index, self.slice_count)
    }

    pub fn label(&self, index: usize) -> &str {
        self.config.label(index)
    }

    pub fn fill_color(&self, index: usize) -> Color {
        self.config.slice_color(index)
    }

    /// Radius of the circle the label block is centered on: halfway across
    /// the ring once padding is taken off both edges.
    pub fn text_radius(&self) -> f64 {
        let padding = self.config.text_padding;
        let inner = self.config.inner_radius;
        inner + padding + (self.outer_radius - inner - 2.0 * padding) / 2.0
    }

    /// Usable label width: the slice chord at [`Self::text_radius`].
    pub fn chord_width(&self) -> f64 {
        let chord = 2.0 * self.text_radius() * (self.angle_per_slice() / 2.0).sin();
        (chord - 2.0 * self.config.text_padding).max(MIN_TEXT_WIDTH)
    }
}
