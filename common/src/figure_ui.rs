//! egui chrome around the GPU-drawn plot
//!
//! Lays out the plot rectangle inside the central panel and paints everything
//! that is text: title, axis labels, tick labels, legend and the cursor readout.
//! The lines themselves come from [`crate::plot_renderer`].

use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::plot::{format_tick, Figure, PlotBounds};

const MARGIN_LEFT: f32 = 84.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 44.0;
const MARGIN_BOTTOM: f32 = 60.0;
const TICK_LENGTH: f32 = 5.0;
const LEGEND_SWATCH: f32 = 24.0;
const LEGEND_ROW: f32 = 20.0;

const TEXT_COLOR: Color32 = Color32::from_gray(220);
const FRAME_COLOR: Color32 = Color32::from_gray(160);

/// Plot rectangle inside the central panel, leaving room for labels.
pub fn plot_area(outer: Rect) -> Rect {
    let min = pos2(outer.min.x + MARGIN_LEFT, outer.min.y + MARGIN_TOP);
    let max = pos2(
        (outer.max.x - MARGIN_RIGHT).max(min.x),
        (outer.max.y - MARGIN_BOTTOM).max(min.y),
    );
    Rect::from_min_max(min, max)
}

/// Data coordinates to screen position (y grows downwards on screen).
pub fn data_to_screen(bounds: &PlotBounds, rect: Rect, x: f64, y: f64) -> Pos2 {
    let [u, v] = bounds.normalize(x, y);
    pos2(
        rect.min.x + u as f32 * rect.width(),
        rect.max.y - v as f32 * rect.height(),
    )
}

/// Screen position back to data coordinates.
pub fn screen_to_data(bounds: &PlotBounds, rect: Rect, pos: Pos2) -> [f64; 2] {
    let u = f64::from((pos.x - rect.min.x) / rect.width());
    let v = f64::from((rect.max.y - pos.y) / rect.height());
    [
        bounds.x_min + u * bounds.width(),
        bounds.y_min + v * bounds.height(),
    ]
}

pub fn to_color32(color: [f32; 4]) -> Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Paint the figure chrome in a transparent central panel.
///
/// Must run after any side or top panels so the central panel gets the
/// remaining space. Returns the plot rectangle in logical points.
pub fn draw_figure_chrome(ctx: &egui::Context, figure: &Figure) -> Rect {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let outer = ui.max_rect();
            let rect = plot_area(outer);
            let bounds = figure.bounds();
            let painter = ui.painter();

            painter.text(
                pos2(rect.center().x, outer.min.y + MARGIN_TOP * 0.5),
                Align2::CENTER_CENTER,
                &figure.title,
                FontId::proportional(18.0),
                TEXT_COLOR,
            );
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, FRAME_COLOR));

            draw_ticks(painter, &bounds, rect);
            draw_axis_labels(painter, figure, outer, rect);

            if figure.show_legend && !figure.series.is_empty() {
                draw_legend(painter, figure, rect);
            }

            if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
                if rect.contains(pos) {
                    let [x, y] = screen_to_data(&bounds, rect, pos);
                    painter.text(
                        pos2(rect.min.x + 6.0, rect.min.y + 6.0),
                        Align2::LEFT_TOP,
                        format!("x = {x:.4e}   y = {y:.4e}"),
                        FontId::monospace(12.0),
                        Color32::from_rgb(150, 255, 150),
                    );
                }
            }

            rect
        })
        .inner
}

fn draw_ticks(painter: &egui::Painter, bounds: &PlotBounds, rect: Rect) {
    let stroke = Stroke::new(1.0, FRAME_COLOR);
    let font = FontId::proportional(12.0);

    let x_step = bounds.x_tick_step();
    for x in bounds.x_ticks() {
        let p = data_to_screen(bounds, rect, x, bounds.y_min);
        painter.line_segment([p, p + vec2(0.0, TICK_LENGTH)], stroke);
        painter.text(
            p + vec2(0.0, TICK_LENGTH + 2.0),
            Align2::CENTER_TOP,
            format_tick(x, x_step),
            font.clone(),
            TEXT_COLOR,
        );
    }

    let y_step = bounds.y_tick_step();
    for y in bounds.y_ticks() {
        let p = data_to_screen(bounds, rect, bounds.x_min, y);
        painter.line_segment([p, p - vec2(TICK_LENGTH, 0.0)], stroke);
        painter.text(
            p - vec2(TICK_LENGTH + 3.0, 0.0),
            Align2::RIGHT_CENTER,
            format_tick(y, y_step),
            font.clone(),
            TEXT_COLOR,
        );
    }
}

fn draw_axis_labels(painter: &egui::Painter, figure: &Figure, outer: Rect, rect: Rect) {
    let font = FontId::proportional(14.0);

    painter.text(
        pos2(rect.center().x, outer.max.y - 16.0),
        Align2::CENTER_CENTER,
        &figure.x_label,
        font.clone(),
        TEXT_COLOR,
    );

    // Rotated a quarter turn counter-clockwise, reading bottom to top.
    let galley = painter.layout_no_wrap(figure.y_label.clone(), font, TEXT_COLOR);
    let pos = pos2(outer.min.x + 6.0, rect.center().y + galley.size().x * 0.5);
    painter.add(
        egui::epaint::TextShape::new(pos, galley, TEXT_COLOR)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );
}

fn draw_legend(painter: &egui::Painter, figure: &Figure, rect: Rect) {
    let font = FontId::proportional(13.0);
    let galleys: Vec<_> = figure
        .series
        .iter()
        .map(|s| painter.layout_no_wrap(s.label.clone(), font.clone(), TEXT_COLOR))
        .collect();
    let text_width = galleys
        .iter()
        .map(|g| g.size().x)
        .fold(0.0f32, f32::max);

    let size = vec2(
        LEGEND_SWATCH + text_width + 24.0,
        LEGEND_ROW * galleys.len() as f32 + 8.0,
    );
    let legend = Rect::from_min_size(pos2(rect.max.x - size.x - 8.0, rect.min.y + 8.0), size);
    painter.rect_filled(legend, 4.0, Color32::from_black_alpha(200));
    painter.rect_stroke(legend, 4.0, Stroke::new(1.0, FRAME_COLOR));

    for (i, (series, galley)) in figure.series.iter().zip(galleys).enumerate() {
        let y = legend.min.y + 4.0 + LEGEND_ROW * (i as f32 + 0.5);
        let x = legend.min.x + 8.0;
        painter.line_segment(
            [pos2(x, y), pos2(x + LEGEND_SWATCH, y)],
            Stroke::new(2.0, to_color32(series.color)),
        );
        painter.galley(
            pos2(x + LEGEND_SWATCH + 8.0, y - galley.size().y * 0.5),
            galley,
            TEXT_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn plot_area_leaves_margins() {
        let outer = Rect::from_min_max(pos2(0.0, 30.0), pos2(900.0, 700.0));
        let rect = plot_area(outer);
        assert_eq!(rect.min, pos2(MARGIN_LEFT, 30.0 + MARGIN_TOP));
        assert_eq!(rect.max, pos2(900.0 - MARGIN_RIGHT, 700.0 - MARGIN_BOTTOM));
    }

    #[test]
    fn tiny_panels_collapse_instead_of_inverting() {
        let outer = Rect::from_min_max(pos2(0.0, 0.0), pos2(50.0, 50.0));
        let rect = plot_area(outer);
        assert!(rect.width() >= 0.0);
        assert!(rect.height() >= 0.0);
    }

    #[test]
    fn data_and_screen_coordinates_round_trip() {
        let bounds = PlotBounds::new((0.0, 0.6386), (0.0, 2.0));
        let rect = Rect::from_min_max(pos2(100.0, 50.0), pos2(900.0, 650.0));

        assert_eq!(data_to_screen(&bounds, rect, 0.0, 0.0), pos2(100.0, 650.0));
        assert_eq!(data_to_screen(&bounds, rect, 0.6386, 2.0), pos2(900.0, 50.0));

        let [x, y] = screen_to_data(&bounds, rect, pos2(500.0, 350.0));
        assert_relative_eq!(x, 0.3193, max_relative = 1e-5);
        assert_relative_eq!(y, 1.0, max_relative = 1e-5);
    }

    #[test]
    fn colours_convert_to_bytes() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32([2.0, -1.0, 0.0, 1.0]), Color32::from_rgb(255, 0, 0));
    }
}
