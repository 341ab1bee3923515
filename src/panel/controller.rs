//! Panel open/close state machine.

use egui::Id;
use tracing::info;

use crate::i18n::t;

use super::announcer::Announcer;
use super::focus::FocusTrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

/// Drives the panel through its two states.
///
/// Transitions are idempotent: opening an open panel or closing a closed
/// one does nothing, so repeated triggers (hotkey echo, double clicks)
/// cannot double-announce or lose the recorded focus.
#[derive(Debug)]
pub struct PanelController {
    state: PanelState,
    trap: FocusTrap,
    previous_focus: Option<Id>,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelController {
    pub fn new() -> Self {
        Self {
            state: PanelState::Closed,
            trap: FocusTrap::new(),
            previous_focus: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Expanded state of the toggle button, as assistive tech sees it.
    pub fn aria_expanded(&self) -> bool {
        self.is_open()
    }

    /// Tab order for the focus trap, usually the registry's control ids.
    pub fn set_tab_order(&mut self, order: Vec<Id>) {
        self.trap.set_order(order);
    }

    pub fn trap(&self) -> &FocusTrap {
        &self.trap
    }

    pub fn trap_mut(&mut self) -> &mut FocusTrap {
        &mut self.trap
    }

    /// Open the panel: remember where focus was, confine it to the
    /// panel, announce. Returns false if the panel was already open.
    pub fn open(&mut self, previous_focus: Option<Id>, announcer: &mut Announcer) -> bool {
        if self.state == PanelState::Open {
            return false;
        }
        self.state = PanelState::Open;
        self.previous_focus = previous_focus;
        self.trap.activate();
        announcer.announce(t("panel-opened"));
        info!("accessibility panel opened");
        true
    }

    /// Close the panel and release the trap. Returns the widget that
    /// held focus before opening, for the host to restore.
    pub fn close(&mut self, announcer: &mut Announcer) -> Option<Id> {
        if self.state == PanelState::Closed {
            return None;
        }
        self.state = PanelState::Closed;
        self.trap.release();
        announcer.announce(t("panel-closed"));
        info!("accessibility panel closed");
        self.previous_focus.take()
    }

    /// Flip between states. Returns the focus to restore when this
    /// closed the panel.
    pub fn toggle(&mut self, previous_focus: Option<Id>, announcer: &mut Announcer) -> Option<Id> {
        if self.is_open() {
            self.close(announcer)
        } else {
            self.open(previous_focus, announcer);
            None
        }
    }
}
