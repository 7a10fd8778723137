//! Hydrogen Radial Density
//!
//! Overlays the radial probability density of every tabulated state sharing
//! one azimuthal number.
//!
//! Controls:
//! - L: Cycle azimuthal number (s, p, d, f)
//! - Up/Down: Atomic number Z (1-10)
//! - R: Reset to hydrogen s states

use common::{GraphicsContext, PlotWindow};
use common::equations_ui::draw_equations_sidebar;
use hydrogen_sim::equations::{readouts, RADIAL_EQUATIONS, RADIAL_VARIABLES};
use hydrogen_sim::figure::{density_figure, MAX_N};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const MAX_ATOMIC_NUMBER: u32 = 10;

/// Which family of curves is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DensityView {
    l: u32,
    z: u32,
}

impl Default for DensityView {
    fn default() -> Self {
        Self { l: 0, z: 1 }
    }
}

impl DensityView {
    fn orbital_letter(&self) -> char {
        ['s', 'p', 'd', 'f'][self.l as usize % 4]
    }
}

struct App {
    window: PlotWindow,
    view: DensityView,
    results: Vec<(String, String)>,
}

impl App {
    fn new(ctx: GraphicsContext) -> Option<Self> {
        let view = DensityView::default();
        let figure = match density_figure(view.l, view.z) {
            Ok(figure) => figure,
            Err(e) => {
                log::error!("{e}");
                return None;
            }
        };

        Some(Self {
            window: PlotWindow::new(ctx, figure),
            view,
            results: readouts(view.l, view.z),
        })
    }

    fn apply(&mut self, view: DensityView) {
        match density_figure(view.l, view.z) {
            Ok(figure) => {
                log::info!("showing {}-states for Z={}", view.orbital_letter(), view.z);
                self.window.set_figure(figure);
                self.results = readouts(view.l, view.z);
                self.view = view;
            }
            Err(e) => log::warn!("keeping previous plot: {e}"),
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view = self.view;
        let results = &self.results;
        let curves = self.window.figure().series.len();

        self.window.render(|ctx| {
            draw_equations_sidebar(
                ctx,
                "Hydrogen Radial Density",
                RADIAL_EQUATIONS,
                RADIAL_VARIABLES,
                results,
            );

            egui::TopBottomPanel::top("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("l = {} ({})", view.l, view.orbital_letter()));
                    ui.separator();
                    ui.label(format!("Z = {}", view.z));
                    ui.separator();
                    ui.label(format!("Curves: {curves}"));
                });
            });
        })
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        let mut view = self.view;
        match key {
            KeyCode::KeyL => view.l = (view.l + 1) % MAX_N,
            KeyCode::ArrowUp => view.z = (view.z + 1).min(MAX_ATOMIC_NUMBER),
            KeyCode::ArrowDown => view.z = view.z.saturating_sub(1).max(1),
            KeyCode::KeyR => view = DensityView::default(),
            _ => return,
        }
        if view != self.view {
            self.apply(view);
        }
    }
}

fn main() {
    common::init_logging();

    let (ctx, event_loop) = match pollster::block_on(GraphicsContext::new(
        "Hydrogen Atom - Radial Probability Density",
        1280,
        720,
    )) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let Some(mut app) = App::new(ctx) else {
        std::process::exit(1);
    };

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.window.handle_window_event(event);

                if !consumed {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.window.resize(*size),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    ..
                                },
                            ..
                        } => app.handle_key(*key, *state),
                        WindowEvent::RedrawRequested => match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                let size = app.window.ctx.size;
                                app.window.resize(size);
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::warn!("render error: {e:?}"),
                        },
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => app.window.request_redraw(),
            _ => {}
        }
    });

    if let Err(e) = result {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}
