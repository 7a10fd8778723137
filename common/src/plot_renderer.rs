//! GPU line rendering for figures
//!
//! Grid and reference lines go through a line-list pipeline, each data series
//! through a line-strip pipeline. Drawing is confined to the plot rectangle
//! laid out by the egui chrome via viewport and scissor.

use std::ops::Range;

use crate::camera::{CameraUniform, PlotCamera};
use crate::graphics::{create_uniform_buffer, create_vertex_buffer, GraphicsContext, Vertex};
use crate::plot::{Figure, PlotBounds, ReferenceLine};

pub const GRID_COLOR: [f32; 4] = [0.30, 0.32, 0.38, 0.6];
pub const REFERENCE_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.05,
    a: 1.0,
};

/// CPU-side vertices for one figure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotGeometry {
    pub vertices: Vec<Vertex>,
    /// Line-list range: grid and reference lines.
    pub guides: Range<u32>,
    /// One line-strip range per series, in figure order.
    pub series: Vec<Range<u32>>,
}

/// Build the line geometry for `figure` in the camera's local coordinates.
pub fn build_geometry(figure: &Figure, camera: &PlotCamera) -> PlotGeometry {
    let bounds = camera.bounds;
    let mut vertices = Vec::new();
    let segment = |vertices: &mut Vec<Vertex>, a: [f64; 2], b: [f64; 2], color: [f32; 4]| {
        vertices.push(Vertex::new(camera.to_local(a[0], a[1]).to_array(), color));
        vertices.push(Vertex::new(camera.to_local(b[0], b[1]).to_array(), color));
    };

    if figure.show_grid {
        for x in bounds.x_ticks() {
            segment(&mut vertices, [x, bounds.y_min], [x, bounds.y_max], GRID_COLOR);
        }
        for y in bounds.y_ticks() {
            segment(&mut vertices, [bounds.x_min, y], [bounds.x_max, y], GRID_COLOR);
        }
    }

    for line in &figure.reference_lines {
        match *line {
            ReferenceLine::Horizontal(y) if bounds.contains_y(y) => {
                segment(&mut vertices, [bounds.x_min, y], [bounds.x_max, y], REFERENCE_COLOR);
            }
            ReferenceLine::Vertical(x) if bounds.contains_x(x) => {
                segment(&mut vertices, [x, bounds.y_min], [x, bounds.y_max], REFERENCE_COLOR);
            }
            _ => {}
        }
    }

    let guides = 0..vertices.len() as u32;

    let series = figure
        .series
        .iter()
        .map(|s| {
            let start = vertices.len() as u32;
            vertices.extend(
                s.finite_points()
                    .map(|[x, y]| Vertex::new(camera.to_local(x, y).to_array(), s.color)),
            );
            start..vertices.len() as u32
        })
        .collect();

    PlotGeometry {
        vertices,
        guides,
        series,
    }
}

/// Plot rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotViewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlotViewport {
    /// Convert an egui rectangle (logical points) to pixels, clipped to the surface.
    ///
    /// Returns `None` when nothing of the rectangle is left to draw into.
    pub fn from_rect(rect: egui::Rect, pixels_per_point: f32, surface: (u32, u32)) -> Option<Self> {
        let (surface_w, surface_h) = (surface.0 as f32, surface.1 as f32);
        let x0 = (rect.min.x * pixels_per_point).round().clamp(0.0, surface_w);
        let y0 = (rect.min.y * pixels_per_point).round().clamp(0.0, surface_h);
        let x1 = (rect.max.x * pixels_per_point).round().clamp(0.0, surface_w);
        let y1 = (rect.max.y * pixels_per_point).round().clamp(0.0, surface_h);
        if x1 - x0 < 1.0 || y1 - y0 < 1.0 {
            return None;
        }
        Some(Self {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

/// Draws a [`Figure`]'s lines with wgpu
pub struct PlotRenderer {
    guide_pipeline: wgpu::RenderPipeline,
    series_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    capacity: usize,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    geometry: PlotGeometry,
}

impl PlotRenderer {
    pub fn new(ctx: &GraphicsContext, initial_capacity: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Plot Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/plot.wgsl").into()),
        });

        let camera = PlotCamera::new(PlotBounds::new((0.0, 1.0), (0.0, 1.0)));
        let camera_buffer = create_uniform_buffer(device, &CameraUniform::from_plot_camera(&camera));

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Plot Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let guide_pipeline = line_pipeline(
            device,
            &pipeline_layout,
            &shader,
            ctx.config.format,
            wgpu::PrimitiveTopology::LineList,
            "Guide Pipeline",
        );
        let series_pipeline = line_pipeline(
            device,
            &pipeline_layout,
            &shader,
            ctx.config.format,
            wgpu::PrimitiveTopology::LineStrip,
            "Series Pipeline",
        );

        Self {
            guide_pipeline,
            series_pipeline,
            vertex_buffer: create_vertex_buffer(device, initial_capacity),
            capacity: initial_capacity.max(1),
            camera_buffer,
            camera_bind_group,
            geometry: PlotGeometry::default(),
        }
    }

    /// Rebuild geometry and camera for `figure` and upload them.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, figure: &Figure) {
        let camera = PlotCamera::new(figure.bounds());
        let uniform = CameraUniform::from_plot_camera(&camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));

        self.geometry = build_geometry(figure, &camera);
        let needed = self.geometry.vertices.len();
        if needed > self.capacity {
            let capacity = needed.next_power_of_two();
            log::debug!("growing plot vertex buffer from {} to {capacity}", self.capacity);
            self.vertex_buffer = create_vertex_buffer(device, capacity);
            self.capacity = capacity;
        }
        if needed > 0 {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.geometry.vertices),
            );
        }
    }

    /// Clear the target and draw the prepared figure inside `viewport`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        viewport: Option<PlotViewport>,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Plot Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let Some(viewport) = viewport else {
            return;
        };
        if self.geometry.vertices.is_empty() {
            return;
        }

        render_pass.set_viewport(
            viewport.x as f32,
            viewport.y as f32,
            viewport.width as f32,
            viewport.height as f32,
            0.0,
            1.0,
        );
        render_pass.set_scissor_rect(viewport.x, viewport.y, viewport.width, viewport.height);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        if !self.geometry.guides.is_empty() {
            render_pass.set_pipeline(&self.guide_pipeline);
            render_pass.draw(self.geometry.guides.clone(), 0..1);
        }

        render_pass.set_pipeline(&self.series_pipeline);
        for range in &self.geometry.series {
            if range.len() >= 2 {
                render_pass.draw(range.clone(), 0..1);
            }
        }
    }
}

fn line_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: "vs_line",
            buffers: &[Vertex::LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_line",
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_figure() -> Figure {
        Figure::new("t")
            .plot("a", vec![[0.0, 2.0], [0.5, 1.0], [1.0, 0.0]])
            .plot("b", vec![[0.0, 0.0], [f64::NAN, 1.0], [1.0, 2.0]])
            .axhline(0.0)
            .axvline(0.0)
            .axvline(-5.0)
            .xlim(0.0, 1.0)
            .ylim(0.0, 2.0)
    }

    #[test]
    fn series_ranges_follow_guides_and_skip_non_finite_points() {
        let figure = sample_figure();
        let camera = PlotCamera::new(figure.bounds());
        let geometry = build_geometry(&figure, &camera);

        // Two visible reference lines; the one at x = -5 is outside the bounds.
        assert_eq!(geometry.guides, 0..4);
        assert_eq!(geometry.series, vec![4..7, 7..9]);
        assert_eq!(geometry.vertices.len(), 9);
        assert_eq!(geometry.vertices[4].color, figure.series[0].color);
    }

    #[test]
    fn grid_adds_one_segment_per_tick() {
        let figure = sample_figure().grid();
        let bounds = figure.bounds();
        let camera = PlotCamera::new(bounds);
        let geometry = build_geometry(&figure, &camera);

        let ticks = bounds.x_ticks().len() + bounds.y_ticks().len();
        assert_eq!(geometry.guides.len(), 2 * (ticks + 2));
    }

    #[test]
    fn vertices_are_local_to_bounds_origin() {
        let figure = Figure::new("t")
            .plot("a", vec![[10.0, 100.0], [11.0, 101.0]])
            .xlim(10.0, 11.0)
            .ylim(100.0, 101.0);
        let camera = PlotCamera::new(figure.bounds());
        let geometry = build_geometry(&figure, &camera);
        assert_eq!(geometry.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(geometry.vertices[1].position, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn viewport_is_scaled_and_clipped_to_surface() {
        let rect = egui::Rect::from_min_max(egui::pos2(10.0, 20.0), egui::pos2(700.0, 500.0));
        let viewport = PlotViewport::from_rect(rect, 2.0, (1280, 720));
        assert_eq!(
            viewport,
            Some(PlotViewport {
                x: 20,
                y: 40,
                width: 1260,
                height: 680,
            })
        );
    }

    #[test]
    fn empty_viewport_is_none() {
        let rect = egui::Rect::from_min_max(egui::pos2(10.0, 20.0), egui::pos2(10.0, 500.0));
        assert_eq!(PlotViewport::from_rect(rect, 1.0, (800, 600)), None);
    }
}
