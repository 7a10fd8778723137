//! Plot window: GPU context, line renderer and egui overlay in one frame loop

use winit::{dpi::PhysicalSize, event::WindowEvent};

use crate::figure_ui::draw_figure_chrome;
use crate::graphics::GraphicsContext;
use crate::plot::Figure;
use crate::plot_renderer::{PlotRenderer, PlotViewport};

const INITIAL_VERTEX_CAPACITY: usize = 4096;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// A window showing one [`Figure`] plus caller-supplied egui panels
pub struct PlotWindow {
    pub ctx: GraphicsContext,
    renderer: PlotRenderer,
    egui: EguiState,
    figure: Figure,
}

impl PlotWindow {
    pub fn new(ctx: GraphicsContext, figure: Figure) -> Self {
        let mut renderer = PlotRenderer::new(&ctx, INITIAL_VERTEX_CAPACITY);
        renderer.prepare(&ctx.device, &ctx.queue, &figure);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            figure,
        }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Replace the displayed figure and upload its geometry.
    pub fn set_figure(&mut self, figure: Figure) {
        self.renderer.prepare(&self.ctx.device, &self.ctx.queue, &figure);
        self.figure = figure;
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    pub fn request_redraw(&self) {
        self.ctx.window.request_redraw();
    }

    /// Forward an event to egui; `true` when egui consumed it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }

    /// Draw one frame. `build_ui` adds side and top panels before the plot chrome.
    pub fn render(&mut self, mut build_ui: impl FnMut(&egui::Context)) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let figure = &self.figure;
        let mut plot_rect = egui::Rect::NOTHING;
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            build_ui(ctx);
            plot_rect = draw_figure_chrome(ctx, figure);
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.config.width, self.ctx.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };
        let viewport = PlotViewport::from_rect(
            plot_rect,
            full_output.pixels_per_point,
            (self.ctx.config.width, self.ctx.config.height),
        );

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, viewport);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
