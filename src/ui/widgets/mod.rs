//! UI widgets for reusable components.

pub mod accessible_button;

pub use accessible_button::{
    accessible_button, accessible_icon_button, AccessibleButton, AccessibleButtonStyle,
    AccessibleIconButton, MIN_TOUCH_TARGET,
};
