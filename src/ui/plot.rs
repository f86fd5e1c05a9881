use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::config::PREDICTION_COLUMN;
use crate::report::FileReport;

// ---------------------------------------------------------------------------
// Prediction trend chart
// ---------------------------------------------------------------------------

/// Line chart of predictions in row order.
pub fn prediction_chart(ui: &mut Ui, report: &FileReport) {
    let points = report.chart_points();

    Plot::new("prediction_chart")
        .height(260.0)
        .legend(egui_plot::Legend::default())
        .x_axis_label("Row")
        .y_axis_label("Predicted AQI")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PREDICTION_COLUMN, PlotPoints::from(points.clone()))
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);

            // A single row has no segment to draw; mark the point instead.
            if points.len() == 1 {
                plot_ui.points(
                    Points::new("", PlotPoints::from(points))
                        .radius(3.0)
                        .color(Color32::LIGHT_BLUE),
                );
            }
        });
}
