use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::ChartSpec;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart's series into the available space.
pub fn chart_plot(ui: &mut Ui, spec: &ChartSpec) {
    let mut plot = Plot::new("chart_plot")
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .show_grid(spec.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if spec.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &spec.series {
            let color = Color32::from_rgb(series.color.0, series.color.1, series.color.2);

            // One Line per gap-free run; a shared name keeps a single legend entry.
            for run in series.segments() {
                let points: PlotPoints = run.iter().copied().collect();
                let line = Line::new(points)
                    .name(&series.name)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        }
    });
}
