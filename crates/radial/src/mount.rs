use crate::config::{Label, WheelConfig};
use crate::geometry::{Point, Rect};
use crate::hit::Selection;
use crate::wheel::Wheel;
use std::cell::Cell;
use std::rc::Rc;

pub type SelectCallback = Rc<dyn Fn(usize, &Label)>;

/// One wheel configuration together with the callback that was current
/// when it was attached. While locked, clicks are ignored but direct
/// selection still goes through.
pub struct Binding {
    wheel: Wheel,
    on_select: Option<SelectCallback>,
    locked: Cell<bool>,
}

impl Binding {
    pub fn new(wheel: Wheel, on_select: Option<SelectCallback>) -> Self {
        Self {
            wheel,
            on_select,
            locked: Cell::new(false),
        }
    }

    pub fn lock(&self) {
        self.locked.set(true);
    }

    pub fn unlock(&self) {
        self.locked.set(false);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Resolves a viewport click and notifies the callback on a hit.
    pub fn dispatch(&self, client: Point, bounds: Rect) -> Option<Selection> {
        if self.is_locked() {
            log::debug!("Click at ({}, {}) ignored while locked", client.x, client.y);
            return None;
        }
        let Some(selection) = self.wheel.resolve_click(client, bounds) else {
            log::debug!("Click at ({}, {}) outside the ring", client.x, client.y);
            return None;
        };
        self.notify(&selection);
        Some(selection)
    }

    /// Selects a slice directly, as when a spin lands.
    pub fn select(&self, index: usize) -> Option<Selection> {
        if index >= self.wheel.slice_count() {
            return None;
        }
        let selection = self.wheel.selection(index);
        self.notify(&selection);
        Some(selection)
    }

    fn notify(&self, selection: &Selection) {
        if let Some(on_select) = &self.on_select {
            on_select(selection.index, &selection.label);
        }
    }
}

/// Owns the single live binding of a mounted wheel. Reconfiguring detaches
/// the old binding before the new one goes live, so a click can only ever
/// reach the latest callback.
#[derive(Default)]
pub struct WheelMount {
    binding: Option<Rc<Binding>>,
}

impl WheelMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(
        &mut self,
        config: WheelConfig,
        on_select: Option<SelectCallback>,
    ) -> Rc<Binding> {
        self.teardown();
        let binding = Rc::new(Binding::new(Wheel::new(config), on_select));
        self.binding = Some(binding.clone());
        binding
    }

    /// Detaches the current binding; returns whether one was attached.
    pub fn teardown(&mut self) -> bool {
        self.binding.take().is_some()
    }

    pub fn binding(&self) -> Option<&Rc<Binding>> {
        self.binding.as_ref()
    }

    pub fn wheel(&self) -> Option<&Wheel> {
        self.binding.as_deref().map(Binding::wheel)
    }

    pub fn click(&self, client: Point, bounds: Rect) -> Option<Selection> {
        self.binding.as_ref()?.dispatch(client, bounds)
    }

    pub fn listener_count(&self) -> usize {
        usize::from(self.binding.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Log = Rc<RefCell<Vec<(usize, String)>>>;

    fn recorder(log: &Log) -> SelectCallback {
        let log = log.clone();
        Rc::new(move |index, label: &Label| log.borrow_mut().push((index, label.to_string())))
    }

    fn config(labels: &[&str]) -> WheelConfig {
        WheelConfig {
            size: 200.0,
            inner_radius: 20.0,
            ..WheelConfig::with_labels(labels.iter().copied())
        }
    }

    const BELOW_CENTER: Point = Point { x: 100.0, y: 150.0 };

    #[test]
    fn test_click_invokes_callback() {
        let log = Log::default();
        let mut mount = WheelMount::new();
        mount.configure(config(&["a", "b", "c", "d"]), Some(recorder(&log)));

        let selection = mount.click(BELOW_CENTER, Rect::square(200.0));
        assert_eq!(selection.map(|s| s.index), Some(2));
        assert_eq!(*log.borrow(), vec![(2, "c".to_string())]);
    }

    #[test]
    fn test_miss_does_not_invoke_callback() {
        let log = Log::default();
        let mut mount = WheelMount::new();
        mount.configure(config(&["a", "b"]), Some(recorder(&log)));

        assert!(mount.click(Point::new(100.0, 100.0), Rect::square(200.0)).is_none());
        assert!(mount.click(Point::new(199.0, 199.0), Rect::square(200.0)).is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reconfigure_drops_previous_callback() {
        let old_log = Log::default();
        let new_log = Log::default();
        let mut mount = WheelMount::new();

        let old = mount.configure(config(&["a", "b", "c", "d"]), Some(recorder(&old_log)));
        mount.configure(config(&["x", "y"]), Some(recorder(&new_log)));

        assert_eq!(mount.listener_count(), 1);
        assert_eq!(Rc::strong_count(&old), 1);

        mount.click(BELOW_CENTER, Rect::square(200.0));
        assert!(old_log.borrow().is_empty());
        assert_eq!(*new_log.borrow(), vec![(1, "y".to_string())]);
    }

    #[test]
    fn test_teardown_detaches() {
        let log = Log::default();
        let mut mount = WheelMount::new();
        mount.configure(config(&["a"]), Some(recorder(&log)));

        assert!(mount.teardown());
        assert!(!mount.teardown());
        assert_eq!(mount.listener_count(), 0);
        assert!(mount.wheel().is_none());
        assert!(mount.click(BELOW_CENTER, Rect::square(200.0)).is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_select_by_index() {
        let log = Log::default();
        let binding = Binding::new(Wheel::new(config(&["a", "b"])), Some(recorder(&log)));

        assert_eq!(binding.select(1).map(|s| s.label), Some(Label::new("b")));
        assert!(binding.select(2).is_none());
        assert_eq!(*log.borrow(), vec![(1, "b".to_string())]);
    }

    #[test]
    fn test_locked_binding_ignores_clicks_but_not_select() {
        let log = Log::default();
        let mut mount = WheelMount::new();
        let binding = mount.configure(config(&["a", "b", "c", "d"]), Some(recorder(&log)));

        binding.lock();
        assert!(mount.click(BELOW_CENTER, Rect::square(200.0)).is_none());
        assert!(log.borrow().is_empty());
        assert_eq!(binding.select(3).map(|s| s.index), Some(3));

        binding.unlock();
        assert_eq!(mount.click(BELOW_CENTER, Rect::square(200.0)).map(|s| s.index), Some(2));
        assert_eq!(*log.borrow(), vec![(3, "d".to_string()), (2, "c".to_string())]);
    }

    #[test]
    fn test_reconfigure_starts_unlocked() {
        let mut mount = WheelMount::new();
        mount.configure(config(&["a", "b"]), None).lock();
        let fresh = mount.configure(config(&["a", "b"]), None);
        assert!(!fresh.is_locked());
    }

    #[test]
    fn test_binding_without_callback_still_resolves() {
        let binding = Binding::new(Wheel::new(config(&["a", "b"])), None);
        let selection = binding.dispatch(BELOW_CENTER, Rect::square(200.0));
        assert_eq!(selection.map(|s| s.index), Some(1));
    }
}
