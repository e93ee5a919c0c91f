use crate::config::Color;
use crate::geometry::Point;
use crate::text::{self, FontSpec, TextMeasure};
use crate::wheel::Wheel;
use std::f64::consts::FRAC_PI_2;

/// Shift from the vertical middle of a line to its baseline, in font sizes.
const BASELINE_SHIFT: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// An annular sector; a zero inner radius makes it a plain pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start: f64,
    pub end: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// A single line of text; `(x, y)` is the baseline origin in the current
/// transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSpec,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Scale(f64),
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate(f64),
    Sector(Sector),
    Text(TextRun),
}

pub type DisplayList = Vec<DrawOp>;

/// Colors not carried by the wheel config, usually taken from the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accents {
    pub separator: Stroke,
    pub highlight: Stroke,
}

impl Default for Accents {
    fn default() -> Self {
        Self {
            separator: Stroke {
                color: Color::rgba(1.0, 1.0, 1.0, 0.6),
                width: 1.0,
            },
            highlight: Stroke {
                color: Color::rgba(1.0, 1.0, 1.0, 0.95),
                width: 4.0,
            },
        }
    }
}

/// CSS size stays fixed while the backing store grows with the pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub css: f64,
    pub ratio: f64,
    pub backing: i32,
}

impl SurfaceSize {
    pub fn new(css: f64, pixel_ratio: f64) -> Self {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            css,
            ratio,
            backing: (css * ratio).round().max(0.0) as i32,
        }
    }
}

impl Wheel {
    /// Produces the full drawing sequence for one frame. Pure: the same
    /// wheel, measure and arguments always give the same list.
    pub fn render(
        &self,
        measure: &(impl TextMeasure + ?Sized),
        pixel_ratio: f64,
        highlight: Option<usize>,
        accents: &Accents,
    ) -> DisplayList {
        let surface = SurfaceSize::new(self.config().size, pixel_ratio);
        let mut ops = vec![DrawOp::Scale(surface.ratio)];

        for i in 0..self.slice_count() {
            ops.push(DrawOp::Sector(self.sector(
                i,
                Some(self.fill_color(i)),
                Some(accents.separator),
            )));
        }

        let font = self.config().font();
        let max_width = self.chord_width();
        for i in 0..self.slice_count() {
            let lines = text::wrap_label(self.label(i), max_width, &font, measure);
            if !lines.is_empty() {
                self.push_label(&mut ops, i, &lines, &font, measure);
            }
        }

        if let Some(index) = highlight.filter(|&h| h < self.slice_count()) {
            ops.push(DrawOp::Sector(self.sector(
                index,
                None,
                Some(accents.highlight),
            )));
        }
        ops
    }

    fn sector(&self, index: usize, fill: Option<Color>, stroke: Option<Stroke>) -> Sector {
        let (start, end) = self.slice_span(index);
        Sector {
            center: self.center(),
            inner_radius: self.inner_radius(),
            outer_radius: self.outer_radius(),
            start,
            end,
            fill,
            stroke,
        }
    }

    fn push_label(
        &self,
        ops: &mut DisplayList,
        index: usize,
        lines: &[String],
        font: &FontSpec,
        measure: &(impl TextMeasure + ?Sized),
    ) {
        let mid = self.mid_angle(index);
        let center = self.center();

        ops.push(DrawOp::Save);
        ops.push(DrawOp::Translate {
            x: center.x,
            y: center.y,
        });
        ops.push(DrawOp::Rotate(mid));
        ops.push(DrawOp::Translate {
            x: self.text_radius(),
            y: 0.0,
        });
        if self.config().keep_text_horizontal {
            ops.push(DrawOp::Rotate(-mid));
        } else {
            ops.push(DrawOp::Rotate(FRAC_PI_2));
        }

        let line_height = font.line_height();
        let middle = (lines.len() - 1) as f64 / 2.0;
        for (k, line) in lines.iter().enumerate() {
            let width = measure.text_width(font, line);
            ops.push(DrawOp::Text(TextRun {
                text: line.clone(),
                x: -width / 2.0,
                y: line_height * (k as f64 - middle) + font.size * BASELINE_SHIFT,
                font: font.clone(),
                color: self.config().text_color,
            }));
        }
        ops.push(DrawOp::Restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WheelConfig;
    use crate::testing::FixedAdvance;
    use crate::text::ELLIPSIS;
    use std::f64::consts::{PI, TAU};

    fn sectors(ops: &[DrawOp]) -> Vec<&Sector> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Sector(s) if s.fill.is_some() => Some(s),
                _ => None,
            })
            .collect()
    }

    fn texts(ops: &[DrawOp]) -> Vec<&TextRun> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_two_labels_make_two_half_circles() {
        let wheel = Wheel::new(WheelConfig::with_labels(["Alpha", "Beta"]));
        let ops = wheel.render(&FixedAdvance(7.0), 1.0, None, &Accents::default());
        let slices = sectors(&ops);

        assert_eq!(slices.len(), 2);
        for s in &slices {
            assert!((s.end - s.start - PI).abs() < 1e-12);
        }
        assert_eq!(slices[0].start, -PI / 2.0);
        assert_eq!(slices[0].end, slices[1].start);
        assert!((slices[1].end - slices[0].start - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_empty_labels_render_single_full_slice() {
        let wheel = Wheel::new(WheelConfig::default());
        let ops = wheel.render(&FixedAdvance(7.0), 1.0, None, &Accents::default());

        let slices = sectors(&ops);
        assert_eq!(slices.len(), 1);
        assert!((slices[0].end - slices[0].start - TAU).abs() < 1e-12);
        assert!(texts(&ops).is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let wheel = Wheel::new(WheelConfig::with_labels([
            "Product Manager",
            "UX Researcher",
            "Chief Executive Officer Of Everything Imaginable",
        ]));
        let measure = FixedAdvance(8.0);
        let first = wheel.render(&measure, 2.0, Some(1), &Accents::default());
        let second = wheel.render(&measure, 2.0, Some(1), &Accents::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_horizontal_text_counter_rotates() {
        let wheel = Wheel::new(WheelConfig::with_labels(["A", "B", "C"]));
        let ops = wheel.render(&FixedAdvance(7.0), 1.0, None, &Accents::default());

        let rotations: Vec<f64> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rotate(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert_eq!(rotations.len(), 6);
        for (i, pair) in rotations.chunks(2).enumerate() {
            assert_eq!(pair[0], wheel.mid_angle(i));
            assert_eq!(pair[1], -wheel.mid_angle(i));
        }
    }

    #[test]
    fn test_radial_text_turns_quarter() {
        let wheel = Wheel::new(WheelConfig {
            keep_text_horizontal: false,
            ..WheelConfig::with_labels(["A", "B"])
        });
        let ops = wheel.render(&FixedAdvance(7.0), 1.0, None, &Accents::default());

        let label_ops: Vec<&DrawOp> = ops
            .iter()
            .skip_while(|op| !matches!(op, DrawOp::Save))
            .take(7)
            .collect();
        assert_eq!(
            label_ops,
            vec![
                &DrawOp::Save,
                &DrawOp::Translate {
                    x: wheel.center().x,
                    y: wheel.center().y
                },
                &DrawOp::Rotate(wheel.mid_angle(0)),
                &DrawOp::Translate {
                    x: wheel.text_radius(),
                    y: 0.0
                },
                &DrawOp::Rotate(FRAC_PI_2),
                label_ops[5],
                &DrawOp::Restore,
            ]
        );
        assert!(matches!(label_ops[5], DrawOp::Text(t) if t.text == "A"));
    }

    #[test]
    fn test_wrapped_lines_are_stacked_symmetrically() {
        let wheel = Wheel::new(WheelConfig {
            font_size: 10.0,
            ..WheelConfig::with_labels(["Data Scientist"])
        });
        // One slice: the chord is tiny, so the floor width of 40px applies.
        let ops = wheel.render(&FixedAdvance(10.0), 1.0, None, &Accents::default());
        let runs = texts(&ops);

        assert_eq!(runs.len(), 2);
        let shift = 10.0 * BASELINE_SHIFT;
        assert!((runs[0].y - shift + 6.0).abs() < 1e-9);
        assert!((runs[1].y - shift - 6.0).abs() < 1e-9);
        assert_eq!(runs[0].x, -20.0);
        assert_eq!(runs[1].x, -45.0);
    }

    #[test]
    fn test_overlong_label_renders_two_lines_with_ellipsis() {
        let wheel = Wheel::new(WheelConfig::with_labels([
            "Senior Principal Distinguished Staff Software Engineer",
            "Chef",
            "Pilot",
            "Nurse",
            "Judge",
            "Actor",
        ]));
        let ops = wheel.render(&FixedAdvance(9.0), 1.0, None, &Accents::default());

        let first_label: Vec<&TextRun> = ops
            .iter()
            .skip_while(|op| !matches!(op, DrawOp::Save))
            .take_while(|op| !matches!(op, DrawOp::Restore))
            .filter_map(|op| match op {
                DrawOp::Text(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(first_label.len(), 2);
        assert!(first_label[1].text.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_highlight_outlines_one_slice() {
        let wheel = Wheel::new(WheelConfig::with_labels(["a", "b", "c", "d"]));
        let accents = Accents::default();
        let ops = wheel.render(&FixedAdvance(7.0), 1.0, Some(2), &accents);

        let last = ops.last().unwrap();
        let DrawOp::Sector(sector) = last else {
            panic!("expected highlight sector, got {last:?}");
        };
        assert_eq!(sector.fill, None);
        assert_eq!(sector.stroke, Some(accents.highlight));
        assert_eq!((sector.start, sector.end), wheel.slice_span(2));

        let out_of_range = wheel.render(&FixedAdvance(7.0), 1.0, Some(9), &accents);
        assert!(matches!(out_of_range.last(), Some(DrawOp::Restore)));
    }

    #[test]
    fn test_surface_size_scales_backing_store() {
        let size = SurfaceSize::new(300.0, 2.0);
        assert_eq!((size.css, size.backing), (300.0, 600));

        let fractional = SurfaceSize::new(301.0, 1.5);
        assert_eq!(fractional.backing, 452);

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(SurfaceSize::new(300.0, bad).ratio, 1.0);
        }

        let wheel = Wheel::new(WheelConfig::default());
        let ops = wheel.render(&FixedAdvance(7.0), 3.0, None, &Accents::default());
        assert_eq!(ops[0], DrawOp::Scale(3.0));
    }
}
