//! Orthographic camera over a plot's data rectangle

use glam::{Mat4, Vec3};

use crate::plot::PlotBounds;

/// 2D orthographic camera framing a [`PlotBounds`].
///
/// Vertices are uploaded relative to the bottom-left corner of the bounds.
/// Radial distances around 1e-10 m would otherwise lose most of their f32
/// mantissa to the offset before the projection sees them.
#[derive(Debug, Clone, Copy)]
pub struct PlotCamera {
    pub bounds: PlotBounds,
}

impl PlotCamera {
    pub fn new(bounds: PlotBounds) -> Self {
        Self { bounds }
    }

    /// Data point in camera-local coordinates.
    pub fn to_local(&self, x: f64, y: f64) -> Vec3 {
        Vec3::new(
            (x - self.bounds.x_min) as f32,
            (y - self.bounds.y_min) as f32,
            0.0,
        )
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            0.0,
            self.bounds.width() as f32,
            0.0,
            self.bounds.height() as f32,
            -1.0,
            1.0,
        )
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_plot_camera(camera: &PlotCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}
