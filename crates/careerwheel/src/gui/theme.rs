use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use radial::render::Stroke;
use radial::{Accents, Color};

const SEPARATOR_WIDTH: f64 = 1.5;
const HIGHLIGHT_WIDTH: f64 = 5.0;

pub struct ThemeColors {
    pub separator: Srgba<f64>,
    pub highlight: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            separator: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.15, 0.15, 0.15, 0.8),
                Some(0.8),
            ),
            highlight: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.4, 0.4, 0.8, 0.95),
                Some(0.95),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }

    pub fn accents(&self) -> Accents {
        Accents {
            separator: Stroke {
                color: Color::from(self.separator),
                width: SEPARATOR_WIDTH,
            },
            highlight: Stroke {
                color: Color::from(self.highlight),
                width: HIGHLIGHT_WIDTH,
            },
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.careerwheel-drawing-area {
    background: none;
    background-color: transparent;
}

.careerwheel-result {
    font-weight: bold;
    font-size: 1.25em;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
