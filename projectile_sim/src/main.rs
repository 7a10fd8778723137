//! Projectile Throw
//!
//! Plots the trajectory of a projectile launched from a height under constant
//! gravity, cut off at the analytic ground impact.
//!
//! Controls:
//! - Up/Down: Launch angle ±5°
//! - Left/Right: Launch speed ±0.5 m/s
//! - PageUp/PageDown: Launch height ±0.5 m
//! - G: Cycle gravity (Earth, Mars, Moon)
//! - R: Reset to the demonstration throw

use common::{GraphicsContext, PlotWindow};
use common::equations_ui::draw_equations_sidebar;
use projectile_sim::equations::{readouts, PROJECTILE_EQUATIONS, PROJECTILE_VARIABLES};
use projectile_sim::figure::trajectory_figure;
use projectile_sim::physics::{simulate, ProjectileParams, Trajectory};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const GRAVITY_PRESETS: &[(&str, f64)] = &[("Earth", 9.81), ("Mars", 3.71), ("Moon", 1.62)];

const ANGLE_STEP: f64 = 5.0;
const SPEED_STEP: f64 = 0.5;
const HEIGHT_STEP: f64 = 0.5;

struct App {
    window: PlotWindow,
    params: ProjectileParams,
    gravity_index: usize,
    trajectory: Trajectory,
}

impl App {
    fn new(ctx: GraphicsContext) -> Option<Self> {
        let params = ProjectileParams::default();
        let trajectory = match simulate(&params) {
            Ok(trajectory) => trajectory,
            Err(e) => {
                log::error!("{e}");
                return None;
            }
        };
        let window = PlotWindow::new(ctx, trajectory_figure(&trajectory));

        Some(Self {
            window,
            params,
            gravity_index: 0,
            trajectory,
        })
    }

    /// Re-evaluate with `params`; rejected settings leave the plot unchanged.
    fn apply(&mut self, params: ProjectileParams) {
        match simulate(&params) {
            Ok(trajectory) => {
                self.window.set_figure(trajectory_figure(&trajectory));
                self.params = params;
                self.trajectory = trajectory;
            }
            Err(e) => log::warn!("keeping previous throw: {e}"),
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let params = &self.params;
        let trajectory = &self.trajectory;
        let (planet, _) = GRAVITY_PRESETS[self.gravity_index];
        let results = readouts(trajectory);

        self.window.render(|ctx| {
            draw_equations_sidebar(
                ctx,
                "Projectile Motion",
                PROJECTILE_EQUATIONS,
                PROJECTILE_VARIABLES,
                &results,
            );

            egui::TopBottomPanel::top("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("v₀ = {:.1} m/s", params.initial_speed));
                    ui.separator();
                    ui.label(format!("θ = {:.0}°", params.angle_degrees));
                    ui.separator();
                    ui.label(format!("h₀ = {:.1} m", params.initial_height));
                    ui.separator();
                    ui.label(format!("g = {:.2} m/s² ({planet})", params.gravity));
                    ui.separator();
                    ui.label(format!("Impact: x = {:.3} m", trajectory.impact.x));
                });
            });
        })
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        let mut params = self.params;
        match key {
            KeyCode::ArrowUp => params.angle_degrees = (params.angle_degrees + ANGLE_STEP).min(90.0),
            KeyCode::ArrowDown => params.angle_degrees = (params.angle_degrees - ANGLE_STEP).max(-90.0),
            KeyCode::ArrowRight => params.initial_speed += SPEED_STEP,
            KeyCode::ArrowLeft => params.initial_speed = (params.initial_speed - SPEED_STEP).max(0.0),
            KeyCode::PageUp => params.initial_height += HEIGHT_STEP,
            KeyCode::PageDown => params.initial_height = (params.initial_height - HEIGHT_STEP).max(0.0),
            KeyCode::KeyG => {
                self.gravity_index = (self.gravity_index + 1) % GRAVITY_PRESETS.len();
                let (planet, g) = GRAVITY_PRESETS[self.gravity_index];
                log::info!("gravity set to {planet} ({g} m/s²)");
                params.gravity = g;
            }
            KeyCode::KeyR => {
                self.gravity_index = 0;
                params = ProjectileParams::default();
            }
            _ => return,
        }
        self.apply(params);
    }
}

fn main() {
    common::init_logging();

    let (ctx, event_loop) = match pollster::block_on(GraphicsContext::new(
        "Projectile Throw - Trajectory Plot",
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
