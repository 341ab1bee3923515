//! The settings panel: state machine, focus confinement, announcements
//! and the control binding table.

pub mod announcer;
pub mod bindings;
pub mod controller;
pub mod focus;

pub use announcer::{Announcement, Announcer, Priority};
pub use bindings::{
    BindTarget, ControlBinding, ControlKind, ControlRegistry, Interaction, PanelSection,
    PANEL_LAYOUT,
};
pub use controller::{PanelController, PanelState};
pub use focus::FocusTrap;
