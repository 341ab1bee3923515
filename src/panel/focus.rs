//! Keyboard focus confinement for the open panel.

use egui::Id;
use tracing::debug;

/// Holds keyboard focus inside an ordered set of controls while active.
///
/// The trap only tracks logical focus; the rendering layer asks which
/// control should hold focus and moves real widget focus to match.
#[derive(Debug, Default)]
pub struct FocusTrap {
    order: Vec<Id>,
    current: Option<Id>,
    active: bool,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tab order. Keeps the current focus if the control
    /// still exists, otherwise falls back to the first one.
    pub fn set_order(&mut self, order: Vec<Id>) {
        if let Some(current) = self.current {
            if !order.contains(&current) {
                self.current = order.first().copied();
            }
        }
        self.order = order;
    }

    /// Start confining focus, starting at the first control.
    pub fn activate(&mut self) {
        self.active = true;
        self.current = self.order.first().copied();
        debug!("focus trap activated over {} controls", self.order.len());
    }

    /// Stop confining focus.
    pub fn release(&mut self) {
        self.active = false;
        self.current = None;
        debug!("focus trap released");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The control that should hold focus, while active.
    pub fn current(&self) -> Option<Id> {
        if self.active {
            self.current
        } else {
            None
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        self.order.contains(&id)
    }

    /// Adopt focus that moved by pointer or assistive tech.
    pub fn focus(&mut self, id: Id) {
        if self.active && self.contains(id) {
            self.current = Some(id);
        }
    }

    /// Move to the next control, wrapping at the end.
    pub fn next(&mut self) -> Option<Id> {
        self.step(1)
    }

    /// Move to the previous control, wrapping at the start.
    pub fn previous(&mut self) -> Option<Id> {
        self.step(-1)
    }

    fn step(&mut self, delta: i32) -> Option<Id> {
        if !self.active || self.order.is_empty() {
            return None;
        }

        let len = self.order.len() as i32;
        let next = match self.current.and_then(|id| self.order.iter().position(|o| *o == id)) {
            Some(idx) => (idx as i32 + delta).rem_euclid(len) as usize,
            None => 0,
        };

        self.current = self.order.get(next).copied();
        self.current
    }
}
