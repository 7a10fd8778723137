//! Common utilities for the physics plots
//!
//! This crate provides the pieces shared by the projectile and hydrogen plots:
//! sampling and quadrature helpers, a renderer-independent figure model, GPU
//! line rendering for figures, and the egui chrome (titles, ticks, legend,
//! equation sidebar) drawn on top.

pub mod numeric;
pub mod plot;
pub mod camera;
pub mod graphics;
pub mod plot_renderer;
pub mod figure_ui;
pub mod equations_ui;
pub mod window;

pub use camera::*;
pub use graphics::*;
pub use plot::{Figure, PlotBounds, ReferenceLine, Series};
pub use window::PlotWindow;

/// Initialise `env_logger` with an `info` default, overridable through `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
