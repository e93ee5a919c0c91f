use crate::config::Color;
use crate::render::{Accents, DrawOp, Sector, TextRun};
use crate::wheel::Wheel;
use cairo::Context;

fn set_source(cr: &Context, color: Color) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn paint_sector(cr: &Context, sector: &Sector) -> Result<(), cairo::Error> {
    let Sector {
        center,
        inner_radius,
        outer_radius,
        start,
        end,
        fill,
        stroke,
    } = sector;

    cr.new_path();
    cr.arc(center.x, center.y, *outer_radius, *start, *end);
    if *inner_radius > 0.0 {
        cr.arc_negative(center.x, center.y, *inner_radius, *end, *start);
    } else {
        cr.line_to(center.x, center.y);
    }
    cr.close_path();

    if let Some(fill) = fill {
        set_source(cr, *fill);
        cr.fill_preserve()?;
    }
    if let Some(stroke) = stroke {
        set_source(cr, stroke.color);
        cr.set_line_width(stroke.width);
        cr.stroke_preserve()?;
    }
    cr.new_path();
    Ok(())
}

fn paint_text(cr: &Context, run: &TextRun) -> Result<(), cairo::Error> {
    run.font.apply(cr);
    set_source(cr, run.color);
    cr.move_to(run.x, run.y);
    cr.show_text(&run.text)
}

/// Replays a display list onto a cairo context.
pub fn paint(cr: &Context, ops: &[DrawOp]) -> Result<(), cairo::Error> {
    for op in ops {
        match op {
            DrawOp::Scale(ratio) => cr.scale(*ratio, *ratio),
            DrawOp::Save => cr.save()?,
            DrawOp::Restore => cr.restore()?,
            DrawOp::Translate { x, y } => cr.translate(*x, *y),
            DrawOp::Rotate(angle) => cr.rotate(*angle),
            DrawOp::Sector(sector) => paint_sector(cr, sector)?,
            DrawOp::Text(run) => paint_text(cr, run)?,
        }
    }
    Ok(())
}

/// Renders `wheel` onto `cr`. Without a context this does nothing, and
/// cairo failures are logged rather than returned. Returns whether a frame
/// was painted.
pub fn draw(
    cr: Option<&Context>,
    wheel: &Wheel,
    pixel_ratio: f64,
    highlight: Option<usize>,
    accents: &Accents,
) -> bool {
    let Some(cr) = cr else {
        log::debug!("No drawing context, skipping wheel render");
        return false;
    };

    let ops = wheel.render(cr, pixel_ratio, highlight, accents);
    match paint(cr, &ops) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Drawing error: {}", e);
            false
        }
    }
}
