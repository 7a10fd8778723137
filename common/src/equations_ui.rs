//! Equations sidebar UI
//!
//! Provides an egui sidebar listing the formulas a plot evaluates, the meaning
//! of each symbol, and live readouts of derived quantities.

use egui::{Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw a styled equation sidebar
///
/// `readouts` are `(quantity, value)` pairs computed for the current parameters.
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
    readouts: &[(String, String)],
) {
    egui::SidePanel::right("equations_panel")
        .min_width(280.0)
        .max_width(350.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            section_heading(ui, "Equations");
            for eq in equations {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            section_heading(ui, "Variables");
            for (symbol, meaning) in variables {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(*symbol)
                            .color(Color32::from_rgb(150, 255, 150))
                            .font(FontId::new(14.0, FontFamily::Monospace)),
                    );
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }

            if !readouts.is_empty() {
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                section_heading(ui, "Results");
                egui::Grid::new("readouts").striped(true).show(ui, |ui| {
                    for (quantity, value) in readouts {
                        ui.label(RichText::new(quantity).color(Color32::LIGHT_GRAY));
                        ui.label(
                            RichText::new(value)
                                .font(FontId::new(13.0, FontFamily::Monospace))
                                .color(Color32::WHITE),
                        );
                        ui.end_row();
                    }
                });
            }
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().color(Color32::from_rgb(255, 200, 100)));
    ui.add_space(5.0);
}

/// Draw a single equation with name, formula, and description
fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}
