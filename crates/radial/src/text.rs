use cairo::Context;

pub const ELLIPSIS: char = '\u{2026}';
pub const MAX_LINES: usize = 2;
pub const LINE_SPACING: f64 = 1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn line_height(&self) -> f64 {
        self.size * LINE_SPACING
    }

    pub(crate) fn apply(&self, cr: &Context) {
        cr.select_font_face(&self.family, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(self.size);
    }
}

pub trait TextMeasure {
    /// Horizontal advance of `text` when set in `font`.
    fn text_width(&self, font: &FontSpec, text: &str) -> f64;
}

impl TextMeasure for Context {
    fn text_width(&self, font: &FontSpec, text: &str) -> f64 {
        font.apply(self);
        match self.text_extents(text) {
            Ok(ext) => ext.x_advance(),
            Err(e) => {
                log::warn!("Failed to measure '{}': {}", text, e);
                text.chars().count() as f64 * font.size * 0.6
            }
        }
    }
}

/// Greedy word wrap into at most [`MAX_LINES`] lines. When the words need
/// more lines than that, the rest is dropped and the last kept line is cut
/// down until it fits with a trailing ellipsis. A single word wider than
/// `max_width` is kept whole.
pub fn wrap_label(
    label: &str,
    max_width: f64,
    font: &FontSpec,
    measure: &(impl TextMeasure + ?Sized),
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure.text_width(font, &candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > MAX_LINES {
        lines.truncate(MAX_LINES);
        if let Some(last) = lines.last_mut() {
            *last = truncate_with_ellipsis(last, max_width, font, measure);
        }
    }
    lines
}

/// Longest char prefix of `text` that still fits once trailing whitespace is
/// trimmed and the ellipsis appended. Falls back to the bare ellipsis.
fn truncate_with_ellipsis(
    text: &str,
    max_width: f64,
    font: &FontSpec,
    measure: &(impl TextMeasure + ?Sized),
) -> String {
    let with_ellipsis = |end: usize| format!("{}{ELLIPSIS}", text[..end].trim_end());
    // ends[k] is the byte offset just past the first k chars.
    let ends: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let (mut lo, mut hi) = (0, ends.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if measure.text_width(font, &with_ellipsis(ends[mid])) <= max_width {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    with_ellipsis(ends[lo])
}
