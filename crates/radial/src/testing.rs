use std::cell::Cell;

use crate::text::{FontSpec, TextMeasure};

/// Every char advances by the same width, independent of font.
pub(crate) struct FixedAdvance(pub f64);

impl TextMeasure for FixedAdvance {
    fn text_width(&self, _font: &FontSpec, text: &str) -> f64 {
        text.chars().count() as f64 * self.0
    }
}

/// [`FixedAdvance`] that also counts how often it was asked.
pub(crate) struct CountingAdvance {
    advance: FixedAdvance,
    calls: Cell<usize>,
}

impl CountingAdvance {
    pub(crate) fn new(advance: f64) -> Self {
        Self {
            advance: FixedAdvance(advance),
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextMeasure for CountingAdvance {
    fn text_width(&self, font: &FontSpec, text: &str) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.advance.text_width(font, text)
    }
}
