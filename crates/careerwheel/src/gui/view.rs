use crate::gui::theme::ThemeColors;
use gtk::prelude::*;
use gtk4 as gtk;
use radial::{Binding, Point, Rect, backend};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Frame {
    binding: Option<Rc<Binding>>,
    highlight: Option<usize>,
}

/// A drawing area showing one wheel at a time. Each binding gets its own
/// click controller, removed again before the next binding is attached.
pub struct WheelView {
    area: gtk::DrawingArea,
    frame: Rc<RefCell<Frame>>,
    gesture: Option<gtk::GestureClick>,
}

impl WheelView {
    pub fn new(area: gtk::DrawingArea) -> Self {
        let frame = Rc::new(RefCell::new(Frame::default()));

        let frame_draw = frame.clone();
        area.set_draw_func(move |area, cr, _, _| {
            let frame = frame_draw.borrow();
            let Some(binding) = &frame.binding else {
                return;
            };
            let colors = ThemeColors::from_context(&area.style_context());
            // GTK already scales the context on high-density outputs.
            backend::draw(
                Some(cr),
                binding.wheel(),
                1.0,
                frame.highlight,
                &colors.accents(),
            );
        });

        Self {
            area,
            frame,
            gesture: None,
        }
    }

    pub fn attach(&mut self, binding: Rc<Binding>) {
        self.detach();

        let size = binding.wheel().config().size;
        self.area.set_content_width(size.round() as i32);
        self.area.set_content_height(size.round() as i32);

        let gesture = gtk::GestureClick::new();
        gesture.set_button(gdk4::BUTTON_PRIMARY);
        let click_binding = binding.clone();
        // The wheel is painted unscaled at the widget origin, so widget
        // coordinates are already surface coordinates.
        gesture.connect_released(move |_, _, x, y| {
            click_binding.dispatch(Point::new(x, y), Rect::square(size));
        });
        self.area.add_controller(gesture.clone());
        self.gesture = Some(gesture);

        *self.frame.borrow_mut() = Frame {
            binding: Some(binding),
            highlight: None,
        };
        self.area.queue_draw();
    }

    pub fn detach(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            self.area.remove_controller(&gesture);
        }
        *self.frame.borrow_mut() = Frame::default();
        self.area.queue_draw();
    }

    pub fn set_highlight(&self, highlight: Option<usize>) {
        let mut frame = self.frame.borrow_mut();
        if frame.highlight != highlight {
            frame.highlight = highlight;
            self.area.queue_draw();
        }
    }
}
