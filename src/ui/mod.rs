//! UI module for the egui-based demo host.

pub mod demo;
pub mod overlays;
pub mod panel_view;
pub mod style;
pub mod theme;
pub mod widgets;

pub use style::PageStyler;
pub use theme::BaseTheme;
